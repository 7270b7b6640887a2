//! Property tests: validation is a pure function of its inputs, and availability is a
//! partition of the outgoing edges.

mod common;
use casegate::prelude::*;
use common::*;
use proptest::prelude::*;
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Helpers / Strategies
// ---------------------------------------------------------------------------

const FIELDS: &[&str] = &[
    "status",
    "quantity",
    "urgency",
    "service_type",
    "medical_approval_decision",
    "medical_approval_date",
    "rejection_reason",
    "rejection_date",
    "number",
    "date",
    "type",
    "device_count",
    "orders_status",
    "overhead_to_order",
    "first_name",
    "birth_date",
    "diagnosis",
];

/// Generate a scalar or short array such as a form or API would produce.
fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-20i64..20).prop_map(Value::from),
        "[A-Z_]{0,8}".prop_map(Value::from),
        Just(Value::from("2025-01-01")),
        Just(Value::from("APPROVED")),
        Just(Value::from("WAREHOUSE")),
    ];
    leaf.prop_recursive(1, 4, 3, |inner| {
        prop::collection::vec(inner, 0..3).prop_map(Value::Array)
    })
}

/// Generate a flat data bag over field names the catalogs actually use.
fn arb_bag() -> impl Strategy<Value = Value> {
    prop::collection::btree_map(prop::sample::select(FIELDS), arb_value(), 0..10).prop_map(
        |fields| {
            Value::Object(
                fields
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v))
                    .collect::<Map<_, _>>(),
            )
        },
    )
}

fn arb_kind() -> impl Strategy<Value = EntityKind> {
    prop_oneof![
        Just(EntityKind::Cart),
        Just(EntityKind::Order),
        Just(EntityKind::Overhead),
    ]
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn validation_is_deterministic(kind in arb_kind(), bag in arb_bag()) {
        let catalog = builtin(kind);
        let v = validator();
        for transition in catalog.transitions() {
            prop_assert_eq!(v.validate(transition, &bag), v.validate(transition, &bag));
        }
    }

    #[test]
    fn missing_required_fields_are_all_reported(kind in arb_kind(), bag in arb_bag()) {
        let catalog = builtin(kind);
        let v = validator();
        for transition in catalog.transitions() {
            let mut stripped = bag.clone();
            if let Some(map) = stripped.as_object_mut() {
                for field in &transition.required_fields {
                    map.remove(field);
                }
            }
            let result = v.validate(transition, &stripped);
            if !transition.required_fields.is_empty() {
                prop_assert!(!result.is_valid);
            }
            for field in &transition.required_fields {
                let reported = result
                    .errors
                    .iter()
                    .any(|e| e.code == IssueCode::RequiredField && &e.field == field);
                prop_assert!(reported, "{} not reported for {}", field, transition.id);
            }
        }
    }

    #[test]
    fn trivial_transitions_accept_any_bag(bag in arb_bag()) {
        let result = validator().validate(&trivial_transition(), &bag);
        prop_assert!(result.is_valid);
        prop_assert!(result.errors.is_empty());
    }

    #[test]
    fn availability_partitions_outgoing_edges(kind in arb_kind(), bag in arb_bag()) {
        let catalog = builtin(kind);
        let v = validator();
        for status in catalog.states() {
            let split = v.availability(&catalog, status, &bag);
            let expected: Vec<&str> =
                catalog.transitions_from(status).map(|t| t.id.as_str()).collect();

            let mut covered: Vec<&str> = split.available.iter().map(|t| t.id.as_str()).collect();
            covered.extend(split.unavailable.iter().map(|u| u.transition.id.as_str()));
            covered.sort_unstable();
            let mut sorted = expected.clone();
            sorted.sort_unstable();
            prop_assert_eq!(&covered, &sorted);

            for entry in &split.unavailable {
                prop_assert!(!entry.reason.is_empty());
                prop_assert!(!split.available.iter().any(|t| t.id == entry.transition.id));
            }
        }
    }

    #[test]
    fn invertible_bindings_round_trip(quantity in 1u32..=10, kind in "[a-z]{1,10}", side in "[a-z]{1,6}") {
        let set = BindingSet::order_form().unwrap();
        let form = serde_json::json!({
            "quantity": quantity.to_string(),
            "service_type": kind,
            "diagnosis_side": side,
        });
        let storage = set.form_to_storage(&form);
        prop_assert_eq!(set.storage_to_form(&storage), form);
    }
}
