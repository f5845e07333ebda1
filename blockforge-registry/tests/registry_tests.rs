use blockforge_model::{BlockDefinition, FieldDef};
use blockforge_registry::{
    BlockRegistry, BlockSummary, DuplicatePolicy, RegistryConfig, RegistryError,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn def(block_type: &str, display_name: &str, version: u32) -> BlockDefinition {
    BlockDefinition::new(block_type, display_name, version)
}

fn summary(block_type: &str, display_name: &str) -> BlockSummary {
    BlockSummary {
        block_type: block_type.to_string(),
        display_name: display_name.to_string(),
    }
}

// ── Lookup ───────────────────────────────────────────────────────

#[test]
fn get_returns_registered_definition() {
    let registry = BlockRegistry::build([def("hero.carousel", "Hero Carousel", 2)]);
    let found = registry.get("hero.carousel").unwrap();
    assert_eq!(found.version, 2);
    assert_eq!(registry.display_name("hero.carousel"), Some("Hero Carousel"));
    assert!(registry.contains("hero.carousel"));
}

#[test]
fn get_unknown_type_is_none() {
    let registry = BlockRegistry::build([def("a", "A", 1)]);
    assert!(registry.get("b").is_none());
    assert_eq!(registry.display_name("b"), None);
    assert!(!registry.contains("b"));
}

#[test]
fn empty_registry() {
    let registry = BlockRegistry::build(Vec::new());
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
    assert!(registry.list().is_empty());
}

// ── Ordering ─────────────────────────────────────────────────────

#[test]
fn list_follows_registration_order() {
    let registry = BlockRegistry::build([
        def("z.last", "Zed", 1),
        def("a.first", "Ay", 1),
        def("m.middle", "Em", 1),
    ]);
    assert_eq!(
        registry.list(),
        vec![summary("z.last", "Zed"), summary("a.first", "Ay"), summary("m.middle", "Em")]
    );
    let types: Vec<&str> = registry.iter().map(|d| d.block_type.as_str()).collect();
    assert_eq!(types, vec!["z.last", "a.first", "m.middle"]);
}

#[test]
fn summary_serializes_for_menus() {
    assert_eq!(
        serde_json::to_value(summary("faq.centered-cards", "FAQ")).unwrap(),
        json!({"type": "faq.centered-cards", "displayName": "FAQ"})
    );
}

// ── Duplicates ───────────────────────────────────────────────────

#[test]
fn duplicate_last_wins_keeps_first_position() {
    let registry = BlockRegistry::build([
        def("a", "First A", 1),
        def("b", "B", 1),
        def("a", "Second A", 2),
    ]);
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.get("a").unwrap().version, 2);
    assert_eq!(registry.list(), vec![summary("a", "Second A"), summary("b", "B")]);
}

#[test]
fn duplicate_rejected_under_reject_policy() {
    let result = BlockRegistry::build_with(
        [def("a", "A", 1), def("a", "A again", 2)],
        DuplicatePolicy::Reject,
    );
    assert!(matches!(result, Err(RegistryError::DuplicateType(t)) if t == "a"));
}

#[test]
fn from_config_applies_policy() {
    let config = RegistryConfig {
        duplicate_policy: DuplicatePolicy::Reject,
        ..RegistryConfig::default()
    };
    assert!(BlockRegistry::from_config([def("a", "A", 1), def("a", "A", 1)], &config).is_err());
    assert!(BlockRegistry::from_config([def("a", "A", 1), def("b", "B", 1)], &config).is_ok());
    assert!(
        BlockRegistry::from_config([def("a", "A", 1), def("a", "A", 1)], &RegistryConfig::default())
            .is_ok()
    );
}

// ── Instantiation ────────────────────────────────────────────────

#[test]
fn instantiate_registered_type() {
    let registry = BlockRegistry::build([def("faq", "FAQ", 3)
        .with_defaults(match json!({"faqs": [{"question": "Q"}]}) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        })
        .with_ui(vec![FieldDef::array("faqs", "FAQs", vec![])])]);

    let block = registry.instantiate("faq").unwrap();
    assert_eq!(block.version, 3);
    assert!(block.props["faqs"][0]["_id"].is_string());
    assert!(registry.instantiate("missing").is_none());
}

// ── Shared reads ─────────────────────────────────────────────────

#[test]
fn registry_is_shareable_across_threads() {
    let registry = std::sync::Arc::new(BlockRegistry::build([def("a", "A", 1)]));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = std::sync::Arc::clone(&registry);
            std::thread::spawn(move || registry.get("a").map(|d| d.version))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), Some(1));
    }
}
