use serde::{Deserialize, Serialize};

/// One entry of a block's UI manifest.
///
/// Purely descriptive: the editor uses it to render inputs and the
/// [`ManifestValidator`](crate::ManifestValidator) derives checks from it.
/// Serializes flat, with the kind as a `kind` tag:
/// `{"path": "title", "label": "Title", "kind": "string", "max": 80}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDef {
    /// Path relative to the props root, or to the item for array item schemas.
    pub path: String,
    pub label: String,
    #[serde(flatten)]
    pub kind: FieldKind,
    #[serde(default, skip_serializing_if = "is_false")]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub helper_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui_group: Option<String>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// The kind of a manifest field, with its kind-specific constraints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum FieldKind {
    String {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<u32>,
    },
    Text {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<u32>,
    },
    RichText,
    Number {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        step: Option<f64>,
    },
    Boolean,
    Enum {
        options: Vec<EnumOption>,
    },
    Icon,
    Image,
    Link,
    File,
    Date,
    #[serde(rename = "datetime")]
    DateTime,
    Object {
        fields: Vec<FieldDef>,
    },
    Array {
        item_schema: Vec<FieldDef>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min_items: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_items: Option<u32>,
    },
}

/// A selectable value of an enum field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumOption {
    pub value: String,
    pub label: String,
}

impl EnumOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

impl FieldKind {
    /// The wire name of this kind (`"string"`, `"richText"`, `"datetime"`, ...).
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::String { .. } => "string",
            FieldKind::Text { .. } => "text",
            FieldKind::RichText => "richText",
            FieldKind::Number { .. } => "number",
            FieldKind::Boolean => "boolean",
            FieldKind::Enum { .. } => "enum",
            FieldKind::Icon => "icon",
            FieldKind::Image => "image",
            FieldKind::Link => "link",
            FieldKind::File => "file",
            FieldKind::Date => "date",
            FieldKind::DateTime => "datetime",
            FieldKind::Object { .. } => "object",
            FieldKind::Array { .. } => "array",
        }
    }
}

impl FieldDef {
    pub fn new(path: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
            kind,
            required: false,
            placeholder: None,
            helper_text: None,
            ui_group: None,
        }
    }

    /// Shorthand for a single-line string field without length bounds.
    pub fn string(path: &str, label: &str) -> Self {
        Self::new(path, label, FieldKind::String { min: None, max: None })
    }

    /// Shorthand for a multi-line text field without length bounds.
    pub fn text(path: &str, label: &str) -> Self {
        Self::new(path, label, FieldKind::Text { min: None, max: None })
    }

    pub fn rich_text(path: &str, label: &str) -> Self {
        Self::new(path, label, FieldKind::RichText)
    }

    pub fn number(path: &str, label: &str) -> Self {
        Self::new(
            path,
            label,
            FieldKind::Number {
                min: None,
                max: None,
                step: None,
            },
        )
    }

    pub fn boolean(path: &str, label: &str) -> Self {
        Self::new(path, label, FieldKind::Boolean)
    }

    /// Shorthand for an enum field from `(value, label)` pairs.
    pub fn enumeration(path: &str, label: &str, options: &[(&str, &str)]) -> Self {
        let options = options
            .iter()
            .map(|(value, label)| EnumOption::new(*value, *label))
            .collect();
        Self::new(path, label, FieldKind::Enum { options })
    }

    pub fn icon(path: &str, label: &str) -> Self {
        Self::new(path, label, FieldKind::Icon)
    }

    pub fn image(path: &str, label: &str) -> Self {
        Self::new(path, label, FieldKind::Image)
    }

    pub fn link(path: &str, label: &str) -> Self {
        Self::new(path, label, FieldKind::Link)
    }

    pub fn file(path: &str, label: &str) -> Self {
        Self::new(path, label, FieldKind::File)
    }

    pub fn date(path: &str, label: &str) -> Self {
        Self::new(path, label, FieldKind::Date)
    }

    pub fn datetime(path: &str, label: &str) -> Self {
        Self::new(path, label, FieldKind::DateTime)
    }

    pub fn object(path: &str, label: &str, fields: Vec<FieldDef>) -> Self {
        Self::new(path, label, FieldKind::Object { fields })
    }

    /// Shorthand for a repeatable group whose items follow `item_schema`.
    pub fn array(path: &str, label: &str, item_schema: Vec<FieldDef>) -> Self {
        Self::new(
            path,
            label,
            FieldKind::Array {
                item_schema,
                min_items: None,
                max_items: None,
            },
        )
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn placeholder(mut self, text: &str) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    pub fn helper_text(mut self, text: &str) -> Self {
        self.helper_text = Some(text.into());
        self
    }

    /// Bounds of a number field. Ignored for every other kind.
    pub fn range(mut self, lo: f64, hi: f64) -> Self {
        if let FieldKind::Number { min, max, .. } = &mut self.kind {
            *min = Some(lo);
            *max = Some(hi);
        }
        self
    }

    /// Input step of a number field. Ignored for every other kind.
    pub fn step(mut self, by: f64) -> Self {
        if let FieldKind::Number { step, .. } = &mut self.kind {
            *step = Some(by);
        }
        self
    }

    pub fn ui_group(mut self, group: &str) -> Self {
        self.ui_group = Some(group.into());
        self
    }

    pub fn is_array(&self) -> bool {
        matches!(self.kind, FieldKind::Array { .. })
    }

    /// Item fields of an array field; `None` for every other kind.
    pub fn item_schema(&self) -> Option<&[FieldDef]> {
        match &self.kind {
            FieldKind::Array { item_schema, .. } => Some(item_schema),
            _ => None,
        }
    }
}
