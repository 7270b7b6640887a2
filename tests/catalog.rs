//! Tests for the built-in catalogs and JSON catalog loading.

mod common;
use casegate::prelude::*;
use common::*;

const TWO_STEP_JSON: &str = r#"[
    {
        "id": "X1",
        "from": "DRAFT",
        "to": "NEW",
        "requiredFields": ["number"],
        "conditions": [
            { "field": "number", "operator": "exists", "message": "Number is required" },
            { "field": "lines", "operator": "count", "value": [1, null], "message": "Add a line" }
        ]
    },
    {
        "id": "X2",
        "from": "NEW",
        "to": "SENT",
        "conditions": [
            { "field": "kind", "operator": "in", "value": ["A", "B"], "message": "Unknown kind" }
        ]
    }
]"#;

#[test]
fn test_builtin_catalogs_pass_the_self_check() {
    for kind in EntityKind::ALL {
        let catalog = builtin(kind);
        assert_eq!(catalog.kind(), kind);
        assert!(!catalog.transitions().is_empty());
        assert_eq!(catalog.check(), Ok(()));
    }
}

#[test]
fn test_no_catalog_re_enters_draft() {
    for kind in EntityKind::ALL {
        assert_eq!(builtin(kind).transitions_to("DRAFT").count(), 0);
    }
}

#[test]
fn test_order_graph_branches_only_at_approval() {
    let orders = builtin(EntityKind::Order);
    for status in orders.states() {
        let outgoing = orders.transitions_from(status).count();
        if *status == "ON_APPROVAL" {
            assert_eq!(outgoing, 2);
        } else {
            assert!(outgoing <= 1, "{status} branches");
        }
    }
    assert!(orders.has_edge("ON_APPROVAL", "NEW"));
    assert!(!orders.has_edge("DRAFT", "ISSUED"));
}

#[test]
fn test_cart_can_be_reactivated() {
    let carts = builtin(EntityKind::Cart);
    assert!(carts.has_edge("ACTIVE", "ARCHIVED"));
    assert!(carts.has_edge("ARCHIVED", "ACTIVE"));
}

#[test]
fn test_overhead_graph_is_linear() {
    let overheads = builtin(EntityKind::Overhead);
    let path: Vec<_> = overheads
        .transitions()
        .iter()
        .map(|t| (t.from.as_str(), t.to.as_str()))
        .collect();
    assert_eq!(
        path,
        vec![("DRAFT", "NEW"), ("NEW", "SENT"), ("SENT", "PROCESSED")]
    );
}

#[test]
fn test_catalog_loads_from_json() {
    let catalog = Catalog::from_json(EntityKind::Overhead, TWO_STEP_JSON).unwrap();
    let first = catalog.transition("X1").unwrap();
    assert_eq!(first.required_fields, vec!["number"]);
    assert_eq!(first.conditions[1].operator, Operator::Count);

    let v = validator();
    assert!(!v.validate(first, &serde_json::json!({ "number": "7" })).is_valid);
    assert!(
        v.validate(first, &serde_json::json!({ "number": "7", "lines": [{}] }))
            .is_valid
    );
}

#[test]
fn test_unknown_operator_is_a_parse_error() {
    let json = r#"[{ "id": "X1", "from": "DRAFT", "to": "NEW",
        "conditions": [{ "field": "a", "operator": "like", "message": "m" }] }]"#;
    assert!(matches!(
        Catalog::from_json(EntityKind::Overhead, json),
        Err(LoadError::Json(_))
    ));
}

#[test]
fn test_malformed_catalog_fails_at_load() {
    let json = r#"[{ "id": "X1", "from": "DRAFT", "to": "NEW",
        "conditions": [{ "field": "a", "operator": "in", "value": "A", "message": "m" }] }]"#;
    assert!(matches!(
        Catalog::from_json(EntityKind::Overhead, json),
        Err(LoadError::Catalog(CatalogError::OperandShape { .. }))
    ));

    let wrong_kind = r#"[{ "id": "X1", "from": "DRAFT", "to": "ACTIVE" }]"#;
    assert!(matches!(
        Catalog::from_json(EntityKind::Order, wrong_kind),
        Err(LoadError::Catalog(CatalogError::UnknownState { .. }))
    ));
}

#[test]
fn test_missing_file_reports_its_path() {
    let err = Catalog::from_file(EntityKind::Cart, "does/not/exist.json").unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("does/not/exist.json"));
}

#[test]
fn test_engine_accepts_catalog_overrides() {
    let custom = Catalog::from_json(EntityKind::Overhead, TWO_STEP_JSON).unwrap();
    let engine = LifecycleEngine::builder()
        .with_catalog(custom)
        .with_today(fixed_today())
        .build()
        .unwrap();

    assert!(engine.transition(EntityKind::Overhead, "X2").is_some());
    assert!(engine.transition(EntityKind::Overhead, "H1").is_none());
    assert!(engine.transition(EntityKind::Order, "O1").is_some());
}
