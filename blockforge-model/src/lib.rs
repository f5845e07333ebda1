//! Core block model for blockforge.
//!
//! Defines the types every other layer agrees on:
//! - [`BlockInstance`]: one stored piece of page content (id, type, version, props, meta)
//! - [`PublishedBlock`]: the instance as seen by published rendering (no `meta`)
//! - [`BlockDefinition`]: a block type's contract (version, defaults, UI manifest,
//!   validator and optional migration)
//! - [`FieldDef`] / [`FieldKind`]: the UI manifest entries, one variant per field kind
//! - [`PropsValidator`]: the opaque schema-validation capability, with the
//!   manifest-driven [`ManifestValidator`] as the default implementation
//!
//! Props stay an untyped JSON object at this boundary; each block type's real
//! shape is described by its own manifest and validator.

mod definition;
mod field;
mod instance;
mod validator;

pub use definition::{BlockDefinition, MigrateFn};
pub use field::{EnumOption, FieldDef, FieldKind};
pub use instance::{BlockInstance, Props, PublishedBlock};
pub use validator::{AcceptAll, ManifestValidator, PropsValidator, ValidationError, ValidationIssue};
