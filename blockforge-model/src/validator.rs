//! The schema-validation capability consumed by block definitions.
//!
//! Validation is not part of path reads or writes: path operations trust the
//! caller to hand them well-typed props. Validators run where a collaborator
//! asks for them (saving, publishing, importing).

use std::fmt;

use blockforge_path::get;
use serde_json::Value;
use thiserror::Error;

use crate::field::{FieldDef, FieldKind};
use crate::instance::Props;

/// Opaque schema validator: accepts props (possibly normalizing them) or
/// rejects them with a [`ValidationError`].
pub trait PropsValidator: Send + Sync {
    fn validate(&self, props: &Props) -> Result<Props, ValidationError>;
}

/// A single failed check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Path of the offending value, in the same dot/bracket syntax as prop paths.
    pub path: String,
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Props rejected by a validator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("props failed validation ({} issue(s)){}", .issues.len(), first_issue(.issues))]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

fn first_issue(issues: &[ValidationIssue]) -> String {
    issues.first().map(|i| format!(": {i}")).unwrap_or_default()
}

impl ValidationError {
    pub fn single(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            issues: vec![ValidationIssue {
                path: path.into(),
                message: message.into(),
            }],
        }
    }
}

/// Validator that accepts everything unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl PropsValidator for AcceptAll {
    fn validate(&self, props: &Props) -> Result<Props, ValidationError> {
        Ok(props.clone())
    }
}

/// Validator derived from a UI manifest.
///
/// Checks presence of required fields, the JSON type each kind implies,
/// string length and number bounds, enum membership, array item counts, and
/// recurses into object fields and array items. Unknown props are allowed.
#[derive(Debug, Clone, Default)]
pub struct ManifestValidator {
    fields: Vec<FieldDef>,
}

impl ManifestValidator {
    pub fn new(fields: &[FieldDef]) -> Self {
        Self {
            fields: fields.to_vec(),
        }
    }

    /// Collects every issue instead of stopping at the first.
    pub fn issues(&self, props: &Props) -> Vec<ValidationIssue> {
        let root = Value::Object(props.clone());
        let mut issues = Vec::new();
        check_fields(&root, &self.fields, "", &mut issues);
        issues
    }
}

impl PropsValidator for ManifestValidator {
    fn validate(&self, props: &Props) -> Result<Props, ValidationError> {
        let issues = self.issues(props);
        if issues.is_empty() {
            Ok(props.clone())
        } else {
            Err(ValidationError { issues })
        }
    }
}

fn join(prefix: &str, path: &str) -> String {
    if prefix.is_empty() {
        path.to_string()
    } else {
        format!("{prefix}.{path}")
    }
}

fn check_fields(scope: &Value, fields: &[FieldDef], prefix: &str, issues: &mut Vec<ValidationIssue>) {
    for field in fields {
        let full = join(prefix, &field.path);
        match get(scope, &field.path) {
            None | Some(Value::Null) => {
                if field.required {
                    issues.push(issue(&full, "is required"));
                }
            }
            Some(value) => check_value(value, field, &full, issues),
        }
    }
}

fn check_value(value: &Value, field: &FieldDef, path: &str, issues: &mut Vec<ValidationIssue>) {
    match &field.kind {
        FieldKind::String { min, max } | FieldKind::Text { min, max } => {
            let Some(s) = value.as_str() else {
                issues.push(type_issue(path, "a string", value));
                return;
            };
            let len = s.chars().count();
            if let Some(min) = min.filter(|min| len < *min as usize) {
                issues.push(issue(path, &format!("must be at least {min} characters")));
            }
            if let Some(max) = max.filter(|max| len > *max as usize) {
                issues.push(issue(path, &format!("must be at most {max} characters")));
            }
        }
        FieldKind::RichText
        | FieldKind::Icon
        | FieldKind::Image
        | FieldKind::Link
        | FieldKind::File
        | FieldKind::Date
        | FieldKind::DateTime => {
            if !value.is_string() {
                issues.push(type_issue(path, "a string", value));
            }
        }
        FieldKind::Number { min, max, .. } => {
            let Some(n) = value.as_f64() else {
                issues.push(type_issue(path, "a number", value));
                return;
            };
            if let Some(min) = min.filter(|min| n < *min) {
                issues.push(issue(path, &format!("must be at least {min}")));
            }
            if let Some(max) = max.filter(|max| n > *max) {
                issues.push(issue(path, &format!("must be at most {max}")));
            }
        }
        FieldKind::Boolean => {
            if !value.is_boolean() {
                issues.push(type_issue(path, "a boolean", value));
            }
        }
        FieldKind::Enum { options } => {
            // Options are strings; numeric props (e.g. `columns: 3`) match their decimal form.
            let rendered = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                other => {
                    issues.push(type_issue(path, "one of the enum options", other));
                    return;
                }
            };
            if !options.iter().any(|option| option.value == rendered) {
                issues.push(issue(path, &format!("{rendered:?} is not an allowed option")));
            }
        }
        FieldKind::Object { fields } => {
            if value.is_object() {
                check_fields(value, fields, path, issues);
            } else {
                issues.push(type_issue(path, "an object", value));
            }
        }
        FieldKind::Array {
            item_schema,
            min_items,
            max_items,
        } => {
            let Some(items) = value.as_array() else {
                issues.push(type_issue(path, "an array", value));
                return;
            };
            if let Some(min) = min_items.filter(|min| items.len() < *min as usize) {
                issues.push(issue(path, &format!("must have at least {min} items")));
            }
            if let Some(max) = max_items.filter(|max| items.len() > *max as usize) {
                issues.push(issue(path, &format!("must have at most {max} items")));
            }
            if item_schema.is_empty() {
                return;
            }
            for (i, item) in items.iter().enumerate() {
                let item_path = format!("{path}[{i}]");
                if item.is_object() {
                    check_fields(item, item_schema, &item_path, issues);
                } else {
                    issues.push(type_issue(&item_path, "an object", item));
                }
            }
        }
    }
}

fn issue(path: &str, message: &str) -> ValidationIssue {
    ValidationIssue {
        path: path.to_string(),
        message: message.to_string(),
    }
}

fn type_issue(path: &str, expected: &str, found: &Value) -> ValidationIssue {
    issue(
        path,
        &format!("must be {expected}, found {}", blockforge_path::value_kind(found)),
    )
}
