use std::io::Write;

use blockforge_registry::{DuplicatePolicy, RegistryConfig, RegistryError};
use pretty_assertions::assert_eq;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn defaults() {
    let config = RegistryConfig::default();
    assert_eq!(config.duplicate_policy, DuplicatePolicy::LastWins);
    assert_eq!(config.fallback_icon, "HelpCircle");
    assert_eq!(config.fallback_component, "block-fallback");
}

#[test]
fn parses_full_document() {
    let config = RegistryConfig::from_toml_str(
        r#"
        duplicate_policy = "reject"
        fallback_icon = "CircleDashed"
        fallback_component = "missing-block"
        "#,
    )
    .unwrap();
    assert_eq!(config.duplicate_policy, DuplicatePolicy::Reject);
    assert_eq!(config.fallback_icon, "CircleDashed");
    assert_eq!(config.fallback_component, "missing-block");
}

#[test]
fn missing_keys_use_defaults() {
    let config = RegistryConfig::from_toml_str("duplicate_policy = \"last_wins\"").unwrap();
    assert_eq!(config, RegistryConfig::default());
    assert_eq!(RegistryConfig::from_toml_str("").unwrap(), RegistryConfig::default());
}

#[test]
fn rejects_unknown_policy() {
    let err = RegistryConfig::from_toml_str("duplicate_policy = \"first_wins\"").unwrap_err();
    assert!(matches!(err, RegistryError::Config { path: None, .. }));
}

#[test]
fn load_from_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = RegistryConfig::load_from(&dir.path().join("blockforge.toml"));
    assert_eq!(config, RegistryConfig::default());
}

#[test]
fn load_from_reads_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "duplicate_policy = \"reject\"").unwrap();
    let config = RegistryConfig::load_from(file.path());
    assert_eq!(config.duplicate_policy, DuplicatePolicy::Reject);
}

#[test]
fn load_from_malformed_file_falls_back() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "this is = = not toml").unwrap();
    assert_eq!(RegistryConfig::load_from(file.path()), RegistryConfig::default());
}

#[test]
fn load_strict_surfaces_errors() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "fallback_icon = 3").unwrap();
    let err = RegistryConfig::load_strict(file.path()).unwrap_err();
    assert!(matches!(&err, RegistryError::Config { path: Some(p), .. } if p == file.path()));
    assert!(err.to_string().contains("invalid registry config at"));

    let dir = TempDir::new().unwrap();
    assert!(RegistryConfig::load_strict(&dir.path().join("absent.toml")).is_err());
}
