use blockforge_path::{
    PathError, add_item, array_path_of, ensure_item_ids, find_item_by_id, get, item_id, move_item,
    remove_item_by_id, remove_item_by_index,
};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::collections::HashSet;

fn faq_doc() -> Value {
    json!({
        "title": "FAQ",
        "faqs": [
            {"_id": "_id1", "question": "Q1"},
            {"_id": "_id2", "question": "Q2"},
            {"_id": "_id3", "question": "Q3"},
        ]
    })
}

fn ids(doc: &Value, path: &str) -> Vec<String> {
    get(doc, path)
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(item_id).map(str::to_owned).collect())
        .unwrap_or_default()
}

// ── add_item ─────────────────────────────────────────────────────

#[test]
fn add_item_appends_in_order() {
    let mut doc = faq_doc();
    add_item(&mut doc, "faqs", json!({"question": "Q4"})).unwrap();
    let faqs = doc["faqs"].as_array().unwrap();
    assert_eq!(faqs.len(), 4);
    assert_eq!(faqs[3]["question"], "Q4");
    assert_eq!(&ids(&doc, "faqs")[..3], &["_id1", "_id2", "_id3"]);
}

#[test]
fn add_item_replaces_invalid_ids() {
    let mut doc = json!({"xs": []});
    for bad in [json!({"_id": ""}), json!({"_id": 7}), json!({"_id": null})] {
        let id = add_item(&mut doc, "xs", bad).unwrap().unwrap();
        assert!(!id.is_empty());
    }
    let all = ids(&doc, "xs");
    assert_eq!(all.len(), 3);
    assert_eq!(all.iter().collect::<HashSet<_>>().len(), 3);
}

#[test]
fn add_item_restamps_duplicate_id() {
    let mut doc = faq_doc();
    let id = add_item(&mut doc, "faqs", json!({"_id": "_id2", "question": "copy"}))
        .unwrap()
        .unwrap();
    assert_ne!(id, "_id2");
    assert_eq!(doc["faqs"][3]["_id"], json!(id));
}

#[test]
fn add_item_returns_none_for_primitives() {
    let mut doc = json!({"tags": ["a"]});
    assert_eq!(add_item(&mut doc, "tags", json!("b")).unwrap(), None);
    assert_eq!(doc, json!({"tags": ["a", "b"]}));
}

#[test]
fn add_item_never_creates_the_array() {
    let mut doc = json!({});
    let err = add_item(&mut doc, "faqs", json!({})).unwrap_err();
    assert_eq!(
        err,
        PathError::NotAnArray {
            path: "faqs".to_string(),
            found: "nothing",
        }
    );
    assert_eq!(doc, json!({}));
}

#[test]
fn add_item_into_nested_array() {
    let mut doc = json!({"plans": [{"features": []}]});
    add_item(&mut doc, "plans[0].features", json!({"text": "SSO"})).unwrap();
    assert_eq!(doc["plans"][0]["features"][0]["text"], "SSO");
}

// ── remove_item_by_index ─────────────────────────────────────────

#[test]
fn remove_by_index_shifts_left() {
    let mut doc = faq_doc();
    let removed = remove_item_by_index(&mut doc, "faqs", 1).unwrap().unwrap();
    assert_eq!(removed["_id"], "_id2");
    assert_eq!(ids(&doc, "faqs"), vec!["_id1", "_id3"]);
}

#[test]
fn remove_by_index_out_of_range_is_noop() {
    let mut doc = faq_doc();
    assert_eq!(remove_item_by_index(&mut doc, "faqs", 5).unwrap(), None);
    assert_eq!(doc, faq_doc());
}

#[test]
fn remove_by_index_requires_array() {
    let mut doc = faq_doc();
    assert!(matches!(
        remove_item_by_index(&mut doc, "title", 0),
        Err(PathError::NotAnArray { found: "string", .. })
    ));
}

// ── remove_item_by_id ────────────────────────────────────────────

#[test]
fn remove_by_id_removes_first_match() {
    let mut doc = faq_doc();
    let removed = remove_item_by_id(&mut doc, "faqs", "_id3").unwrap();
    assert_eq!(removed.unwrap()["question"], "Q3");
    assert_eq!(ids(&doc, "faqs"), vec!["_id1", "_id2"]);
}

#[test]
fn remove_by_id_is_idempotent() {
    let mut once = faq_doc();
    remove_item_by_id(&mut once, "faqs", "_id2").unwrap();

    let mut twice = faq_doc();
    remove_item_by_id(&mut twice, "faqs", "_id2").unwrap();
    assert_eq!(remove_item_by_id(&mut twice, "faqs", "_id2").unwrap(), None);

    assert_eq!(once, twice);
}

#[test]
fn remove_by_unknown_id_is_silent() {
    let mut doc = faq_doc();
    assert_eq!(remove_item_by_id(&mut doc, "faqs", "nope").unwrap(), None);
    assert_eq!(doc, faq_doc());
}

#[test]
fn remove_by_id_skips_non_object_items() {
    let mut doc = json!({"xs": ["_id1", {"_id": "_id1"}]});
    remove_item_by_id(&mut doc, "xs", "_id1").unwrap();
    assert_eq!(doc, json!({"xs": ["_id1"]}));
}

// ── move / find / ensure ─────────────────────────────────────────

#[test]
fn move_item_keeps_ids_stable() {
    let mut doc = faq_doc();
    assert!(move_item(&mut doc, "faqs", 0, 2).unwrap());
    assert_eq!(ids(&doc, "faqs"), vec!["_id2", "_id3", "_id1"]);
    assert_eq!(find_item_by_id(&doc, "faqs", "_id1").unwrap()["question"], "Q1");
}

#[test]
fn find_item_by_id_absent() {
    let doc = faq_doc();
    assert_eq!(find_item_by_id(&doc, "faqs", "_id9"), None);
    assert_eq!(find_item_by_id(&doc, "title", "_id1"), None);
}

#[test]
fn ensure_item_ids_only_stamps_missing() {
    let mut doc = json!({"links": [{"_id": "keep"}, {"text": "a"}, {"_id": ""}, "plain"]});
    assert_eq!(ensure_item_ids(&mut doc, "links").unwrap(), 2);
    assert_eq!(doc["links"][0]["_id"], "keep");
    assert!(item_id(&doc["links"][1]).is_some());
    assert!(item_id(&doc["links"][2]).is_some());
    assert_eq!(doc["links"][3], "plain");
    assert_eq!(ensure_item_ids(&mut doc, "links").unwrap(), 0);
}

// ── array_path_of ────────────────────────────────────────────────

#[test]
fn array_path_of_strips_item_suffix() {
    assert_eq!(array_path_of("features[2].title"), "features");
    assert_eq!(array_path_of("hero.slides[0].cta.label"), "hero.slides");
}

#[test]
fn array_path_of_without_index() {
    assert_eq!(array_path_of("title"), "title");
    assert_eq!(array_path_of("cta.label"), "cta.label");
    assert_eq!(array_path_of(".cta..label"), "cta.label");
    assert_eq!(array_path_of(""), "");
}
