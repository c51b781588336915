//! Library-level tests for naming and structural checks

use pretty_assertions::assert_eq;
use serde_json::json;
use slugcheck::{check_document, check_value, is_valid_name, ALLOWED_EXCEPTIONS};
use std::path::Path;

fn issues_for(value: serde_json::Value) -> Vec<String> {
    check_document(&value, Path::new("fixture.json"))
        .into_iter()
        .map(|issue| issue.description)
        .collect()
}

#[test]
fn test_slug_pattern() {
    assert!(is_valid_name("pikachu"));
    assert!(is_valid_name("nidoran-f"));
    assert!(is_valid_name("porygon2"));
    assert!(!is_valid_name("Pikachu"));
    assert!(!is_valid_name("nidoran_f"));
    assert!(!is_valid_name("mr mime"));
    assert!(!is_valid_name(""));
}

#[test]
fn test_allow_list() {
    assert_eq!(ALLOWED_EXCEPTIONS.len(), 5);
    assert!(ALLOWED_EXCEPTIONS.iter().all(|name| is_valid_name(name)));
    assert!(issues_for(json!({"chi_sim": 1, "chi_tra": 2})).is_empty());
    assert!(issues_for(json!({"sprites": {"spriteWidth": 64, "spriteHeight": 64, "spriteLocations": {}}})).is_empty());
}

#[test]
fn test_issue_order_follows_document() {
    let value: serde_json::Value =
        serde_json::from_str(r#"{"Zeta": 1, "alpha": {"Beta": 2}, "Gamma": 3}"#).unwrap();
    assert_eq!(
        issues_for(value),
        vec![
            "Invalid key 'Zeta' at Zeta",
            "Invalid key 'Beta' at alpha.Beta",
            "Invalid key 'Gamma' at Gamma",
        ]
    );
}

#[test]
fn test_repeated_key_reported_per_location() {
    let issues = issues_for(json!({"a": {"Bad": 1}, "b": [{"Bad": 2}, {"Bad": 3}]}));
    assert_eq!(
        issues,
        vec![
            "Invalid key 'Bad' at a.Bad",
            "Invalid key 'Bad' at b[0].Bad",
            "Invalid key 'Bad' at b[1].Bad",
        ]
    );
}

#[test]
fn test_top_level_array_flag_only_applies_to_root() {
    assert_eq!(
        issues_for(json!(["valid-slug", "Invalid Slug"])),
        vec!["Invalid string 'Invalid Slug' at [1]"]
    );
    assert!(issues_for(json!({"list": ["valid-slug", "Invalid Slug"]})).is_empty());
    assert!(issues_for(json!([{"list": ["Invalid Slug"]}, ["Also Invalid"]])).is_empty());
}

#[test]
fn test_check_value_honours_flag() {
    let value = json!(["Bad Slug"]);
    assert!(check_value(&value, Path::new("x.json"), "", false).is_empty());
    assert_eq!(check_value(&value, Path::new("x.json"), "", true).len(), 1);
}
