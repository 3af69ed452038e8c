//! Behavioral tests for document validation
//!
//! These pin down what content is accepted before it reaches the renderer:
//! - Non-object and empty content is rejected
//! - `ROOT` is required, orphans and cycles are accepted
//! - Both forms of the `type` field are treated the same
//! - Valid content survives decoding and re-encoding

use pagecraft_document::{
    is_valid, node_types, orphans, validate, Document, Resolver, Verdict, Violation,
};
use serde_json::{json, Value};

fn resolver() -> Resolver {
    Resolver::with_components(["Container", "Text"])
}

#[test]
fn test_validation_is_deterministic() {
    let resolver = resolver();
    let content = json!({
        "ROOT": { "type": "Container", "nodes": ["a", "b", "c"] },
        "a": { "type": "Bogus" },
        "b": { "type": "Text", "nodes": ["gone"] },
        "c": { "type": "AlsoBogus" },
    });

    let first = validate(&content, &resolver);
    for _ in 0..10 {
        assert_eq!(validate(&content, &resolver), first);
    }
    assert_eq!(first.violation().and_then(Violation::node_id), Some("a"));
}

#[test]
fn test_validation_does_not_touch_input() {
    let resolver = resolver();
    let content = json!({ "ROOT": { "type": "Container", "nodes": ["x"] } });
    let before = content.clone();

    validate(&content, &resolver);
    assert_eq!(content, before);
}

#[test]
fn test_empty_content_is_invalid_for_any_resolver() {
    for resolver in [Resolver::new(), resolver()] {
        assert!(!is_valid(&json!({}), &resolver));
    }
}

#[test]
fn test_non_object_content_is_invalid() {
    let resolver = resolver();
    for content in [Value::Null, json!([]), json!("x"), json!([{ "ROOT": {} }])] {
        assert_eq!(
            validate(&content, &resolver),
            Verdict::Invalid(Violation::EmptyOrNotAnObject)
        );
    }
}

#[test]
fn test_registered_components_are_valid() {
    let content = json!({
        "ROOT": { "type": "Container" },
        "n1": { "type": "Text" },
    });
    assert_eq!(validate(&content, &resolver()), Verdict::Valid);
}

#[test]
fn test_resolved_name_validates_like_plain_name() {
    let resolver = resolver();
    let indirect = json!({ "ROOT": { "type": { "resolvedName": "Container" } } });
    let direct = json!({ "ROOT": { "type": "Container" } });

    assert_eq!(validate(&indirect, &resolver), validate(&direct, &resolver));
    assert!(is_valid(&indirect, &resolver));

    let indirect_bogus = json!({ "ROOT": { "type": { "resolvedName": "Bogus" } } });
    let direct_bogus = json!({ "ROOT": { "type": "Bogus" } });
    assert_eq!(
        validate(&indirect_bogus, &resolver),
        validate(&direct_bogus, &resolver)
    );
}

#[test]
fn test_unknown_type_is_rejected() {
    let content = json!({
        "ROOT": { "type": "Container" },
        "n1": { "type": "Bogus" },
    });
    assert_eq!(
        validate(&content, &resolver()),
        Verdict::Invalid(Violation::UnresolvableType {
            node_id: "n1".to_string(),
            type_name: Some("Bogus".to_string()),
        })
    );
}

#[test]
fn test_dangling_reference_is_rejected() {
    let content = json!({ "ROOT": { "type": "Container", "nodes": ["missing"] } });
    assert!(matches!(
        validate(&content, &resolver()),
        Verdict::Invalid(Violation::DanglingReference { .. })
    ));
}

#[test]
fn test_allow_listed_tags_need_no_registration() {
    let resolver = resolver();

    let content = json!({
        "ROOT": { "type": "div", "nodes": ["c1"] },
        "c1": { "type": "Container" },
    });
    assert!(is_valid(&content, &resolver));

    let svg = json!({
        "ROOT": { "type": "svg", "nodes": ["c1"] },
        "c1": { "type": "circle" },
    });
    assert!(is_valid(&svg, &resolver));

    let marquee = json!({ "ROOT": { "type": "marquee" } });
    assert!(!is_valid(&marquee, &resolver));
}

#[test]
fn test_orphans_are_valid_but_reported() {
    let resolver = resolver();
    let content = json!({
        "ROOT": { "type": "Container" },
        "stray": { "type": "Text" },
    });

    assert!(is_valid(&content, &resolver));

    let document = Document::from_value(&content).unwrap();
    assert_eq!(orphans(&document), vec!["stray"]);
}

#[test]
fn test_cycles_are_valid() {
    let resolver = resolver();
    let content = json!({
        "ROOT": { "type": "Container", "nodes": ["child"] },
        "child": { "type": "div", "nodes": ["ROOT"], "linkedNodes": { "self": "child" } },
    });

    assert_eq!(validate(&content, &resolver), Verdict::Valid);

    let document = Document::from_value(&content).unwrap();
    assert_eq!(node_types(&document), vec!["Container", "div"]);
}

#[test]
fn test_valid_content_survives_reencoding() {
    let resolver = resolver();
    let stored = json!({
        "ROOT": {
            "type": { "resolvedName": "Container" },
            "isCanvas": true,
            "props": { "padding": "20px" },
            "displayName": "Container",
            "custom": {},
            "hidden": false,
            "nodes": ["title", "body"],
            "linkedNodes": { "header": "hdr" },
            "parent": null,
        },
        "title": { "type": { "resolvedName": "Text" }, "props": { "text": "Hi" }, "parent": "ROOT" },
        "body": { "type": "section", "nodes": "ignored", "parent": "ROOT" },
        "hdr": { "type": "header", "linkedNodes": null, "parent": "ROOT" },
    });
    assert!(is_valid(&stored, &resolver));

    let document = Document::from_value(&stored).unwrap();
    let reencoded = document.to_value().unwrap();
    assert_eq!(validate(&reencoded, &resolver), Verdict::Valid);
    assert_eq!(document.validate(&resolver), Verdict::Valid);

    let text = document.to_json_string().unwrap();
    let reparsed: Value = serde_json::from_str(&text).unwrap();
    assert!(is_valid(&reparsed, &resolver));
    assert_eq!(Document::from_value(&reparsed).unwrap(), document);
}

#[test]
fn test_typed_and_raw_verdicts_agree() {
    let resolver = resolver();
    let cases = [
        json!({ "ROOT": { "type": "Container" } }),
        json!({ "ROOT": { "type": "Container", "nodes": ["gone"] } }),
        json!({ "ROOT": { "type": "Container", "linkedNodes": { "b": "x", "a": "y" } } }),
        json!({ "ROOT": { "type": "Unknown" }, "a": { "type": "Text" } }),
        json!({ "other": { "type": "Text" } }),
    ];

    for content in cases {
        let document = Document::from_value(&content).unwrap();
        assert_eq!(
            document.validate(&resolver),
            validate(&content, &resolver),
            "verdicts differ for {}",
            content
        );
    }
}
