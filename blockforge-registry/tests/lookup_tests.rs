use blockforge_model::BlockDefinition;
use blockforge_registry::{
    BlockRegistry, ComponentLookup, FallbackTable, IconSet, RegistryConfig, STANDARD_ICONS,
};
use pretty_assertions::assert_eq;

#[derive(Debug, Clone, PartialEq)]
enum View {
    Features,
    Faq,
    Fallback,
}

// ── FallbackTable ────────────────────────────────────────────────

#[test]
fn unknown_key_degrades_to_fallback() {
    let components: ComponentLookup<View> = FallbackTable::new(View::Fallback)
        .with("features.section", View::Features)
        .with("faq.centered-cards", View::Faq);

    assert_eq!(components.get("features.section"), &View::Features);
    assert_eq!(components.get("faq.centered-cards"), &View::Faq);
    assert_eq!(components.get("does.not-exist"), &View::Fallback);
    assert_eq!(components.get(""), &View::Fallback);
}

#[test]
fn contains_distinguishes_fallback_hits() {
    let table = FallbackTable::new(0).with("a", 1);
    assert!(table.contains("a"));
    assert!(!table.contains("b"));
    assert_eq!(*table.fallback(), 0);
    assert_eq!(table.len(), 1);
}

#[test]
fn insert_replaces_and_returns_previous() {
    let mut table = FallbackTable::new("fallback");
    assert_eq!(table.insert("a", "first"), None);
    assert_eq!(table.insert("a", "second"), Some("first"));
    assert_eq!(*table.get("a"), "second");
}

#[test]
fn for_registry_covers_every_type() {
    let registry = BlockRegistry::build([
        BlockDefinition::new("features.section", "Features", 1),
        BlockDefinition::new("faq.centered-cards", "FAQ", 1),
    ]);
    let table = FallbackTable::for_registry(&registry, "BlockFallback".to_string(), |t| {
        format!("view:{t}")
    });
    assert_eq!(table.keys(), vec!["faq.centered-cards", "features.section"]);
    assert_eq!(table.get("features.section"), "view:features.section");
    assert_eq!(table.get("unknown"), "BlockFallback");
}

// ── IconSet ──────────────────────────────────────────────────────

#[test]
fn resolves_standard_icons() {
    let icons = IconSet::default();
    assert_eq!(icons.resolve("workflow"), "Workflow");
    assert_eq!(icons.resolve("edit"), "Pencil");
    assert_eq!(icons.resolve("trash-2"), "Trash2");
    assert_eq!(icons.keys().len(), STANDARD_ICONS.len());
}

#[test]
fn unknown_icon_resolves_to_fallback() {
    let icons = IconSet::default();
    assert_eq!(icons.resolve("rocket"), "HelpCircle");
    assert!(!icons.contains("rocket"));
    assert_eq!(icons.fallback(), "HelpCircle");
}

#[test]
fn fallback_icon_comes_from_config() {
    let config = RegistryConfig {
        fallback_icon: "CircleDashed".to_string(),
        ..RegistryConfig::default()
    };
    assert_eq!(IconSet::from_config(&config).resolve("nope"), "CircleDashed");
}
