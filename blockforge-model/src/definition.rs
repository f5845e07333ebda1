use std::fmt;
use std::sync::Arc;

use blockforge_path::ensure_item_ids;

use crate::field::FieldDef;
use crate::instance::{BlockInstance, Props};
use crate::validator::{ManifestValidator, PropsValidator, ValidationError};

/// Upgrades props stored at `from_version` to the definition's current shape.
///
/// Invoked once per stale instance with the instance's original version, so
/// it must handle a jump from any earlier version straight to the current one.
pub type MigrateFn = Arc<dyn Fn(Props, u32) -> Props + Send + Sync>;

/// The registered contract of a block type.
///
/// `version` starts at 1 and only ever increases across a type's history;
/// authors bump it whenever the props shape changes and extend `migrate`
/// to cover the step.
#[derive(Clone)]
pub struct BlockDefinition {
    pub block_type: String,
    pub display_name: String,
    pub version: u32,
    pub defaults: Props,
    pub ui: Vec<FieldDef>,
    /// Custom validator. When absent, a [`ManifestValidator`] over `ui` is used.
    pub validator: Option<Arc<dyn PropsValidator>>,
    pub migrate: Option<MigrateFn>,
}

impl BlockDefinition {
    pub fn new(block_type: &str, display_name: &str, version: u32) -> Self {
        Self {
            block_type: block_type.into(),
            display_name: display_name.into(),
            version,
            defaults: Props::new(),
            ui: Vec::new(),
            validator: None,
            migrate: None,
        }
    }

    pub fn with_defaults(mut self, defaults: Props) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn with_ui(mut self, ui: Vec<FieldDef>) -> Self {
        self.ui = ui;
        self
    }

    pub fn with_validator(mut self, validator: impl PropsValidator + 'static) -> Self {
        self.validator = Some(Arc::new(validator));
        self
    }

    pub fn with_migration<F>(mut self, migrate: F) -> Self
    where
        F: Fn(Props, u32) -> Props + Send + Sync + 'static,
    {
        self.migrate = Some(Arc::new(migrate));
        self
    }

    /// Creates a new instance at the current version, props seeded from the
    /// defaults. Object items of every manifest array get an `_id` if the
    /// defaults lack one.
    pub fn instantiate(&self) -> BlockInstance {
        let mut instance = BlockInstance::new(&self.block_type, self.version, self.defaults.clone());
        instance.edit(|root| {
            for field in self.ui.iter().filter(|f| f.is_array()) {
                // Defaults may omit an optional array; NotAnArray is expected then.
                let _ = ensure_item_ids(root, &field.path);
            }
        });
        instance
    }

    /// Validates props with the custom validator, or the manifest if none is set.
    pub fn validate(&self, props: &Props) -> Result<Props, ValidationError> {
        match &self.validator {
            Some(validator) => validator.validate(props),
            None => ManifestValidator::new(&self.ui).validate(props),
        }
    }

    /// Runs the migration function, if any.
    pub fn migrate_props(&self, props: Props, from_version: u32) -> Option<Props> {
        self.migrate.as_ref().map(|migrate| migrate(props, from_version))
    }

    pub fn has_migration(&self) -> bool {
        self.migrate.is_some()
    }
}

impl fmt::Debug for BlockDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockDefinition")
            .field("block_type", &self.block_type)
            .field("display_name", &self.display_name)
            .field("version", &self.version)
            .field("defaults", &self.defaults)
            .field("ui", &self.ui)
            .field("validator", &self.validator.as_ref().map(|_| "custom"))
            .field("migrate", &self.migrate.is_some())
            .finish()
    }
}
