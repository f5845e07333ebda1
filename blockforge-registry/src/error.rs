//! Error types for registry assembly and configuration.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    /// Two definitions share a type under [`DuplicatePolicy::Reject`](crate::DuplicatePolicy::Reject).
    #[error("block type registered twice: {0}")]
    DuplicateType(String),

    #[error("invalid registry config{}: {message}", display_path(.path))]
    Config {
        path: Option<PathBuf>,
        message: String,
    },
}

fn display_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" at {}", p.display()))
        .unwrap_or_default()
}

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;
