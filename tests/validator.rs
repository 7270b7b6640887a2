//! Tests for transition validation against the built-in catalogs.

mod common;
use casegate::condition::TakenValues;
use casegate::prelude::*;
use casegate::validator::validate_transition;
use common::*;
use serde_json::json;

#[test]
fn test_medical_approval_passes() {
    let orders = builtin(EntityKind::Order);
    let result = validator().validate_by_id(&orders, "O3", &approved_order());
    assert!(result.is_valid, "unexpected errors: {:?}", result.errors);
    assert!(result.errors.is_empty());
    assert!(result.warnings.is_empty());
}

#[test]
fn test_rejection_branch_requires_a_reason() {
    let orders = builtin(EntityKind::Order);
    let bag = json!({ "status": "ON_APPROVAL", "medical_approval_decision": "APPROVED" });
    let result = validator().validate_by_id(&orders, "O4", &bag);

    assert!(!result.is_valid);
    assert!(result.mentions("rejection_reason"));
    assert_eq!(
        result.errors[0].message,
        "Field rejection_reason is required for transition O4"
    );
    assert_eq!(result.errors[0].code, IssueCode::RequiredField);
}

#[test]
fn test_errors_follow_evaluation_order() {
    let carts = builtin(EntityKind::Cart);
    let result = validator().validate_by_id(&carts, "C3", &json!({}));

    let messages: Vec<_> = result.messages().collect();
    assert_eq!(
        messages,
        vec![
            "Field deregistration_reason is required for transition C3",
            "Field deregistration_date is required for transition C3",
            "The case must be active",
            "Deregistration reason is required",
            "Deregistration date is required",
            "Deregistration date cannot be in the future",
        ]
    );
}

#[test]
fn test_condition_messages_are_verbatim() {
    let orders = builtin(EntityKind::Order);
    let bag = json!({
        "status": "ON_APPROVAL",
        "medical_approval_decision": "DECLINED",
        "medical_approval_date": "2025-01-01",
    });
    let result = validator().validate_by_id(&orders, "O3", &bag);

    assert_eq!(result.errors.len(), 1);
    assert_eq!(
        result.errors[0],
        ValidationIssue::new(
            "medical_approval_decision",
            "The medical decision must be APPROVED",
            IssueCode::ConditionNotMet
        )
    );
}

#[test]
fn test_unknown_transition_is_a_validation_error() {
    let orders = builtin(EntityKind::Order);
    let result = validator().validate_by_id(&orders, "O99", &approved_order());

    assert!(!result.is_valid);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].message, "Transition O99 not found");
    assert_eq!(result.errors[0].code, IssueCode::UnknownTransition);
}

#[test]
fn test_trivial_transition_always_passes() {
    assert!(validate_transition(&trivial_transition(), &json!({})).is_valid);
    assert!(validate_transition(&trivial_transition(), &json!({ "anything": [1, 2] })).is_valid);
}

#[test]
fn test_can_transition_follows_graph_edges() {
    let orders = builtin(EntityKind::Order);
    let v = validator();

    assert!(v.can_transition(&orders, "ON_APPROVAL", "IN_PRODUCTION", &approved_order()).is_valid);
    assert!(!v.can_transition(&orders, "ON_APPROVAL", "NEW", &approved_order()).is_valid);

    let skipped = v.can_transition(&orders, "DRAFT", "ISSUED", &json!({}));
    assert_eq!(skipped.errors.len(), 1);
    assert_eq!(skipped.errors[0].code, IssueCode::InvalidTransition);
    assert_eq!(
        skipped.errors[0].message,
        "Transition from DRAFT to ISSUED is not permitted"
    );
}

#[test]
fn test_cart_activation_and_allowed_values() {
    let carts = builtin(EntityKind::Cart);
    let v = validator();
    assert!(v.validate_by_id(&carts, "C1", &complete_cart()).is_valid);

    let mut bag = complete_cart();
    bag["disability_group"] = json!("GROUP_IV");
    let result = v.validate_by_id(&carts, "C1", &bag);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].code, IssueCode::InvalidCombination);
    assert_eq!(
        result.errors[0].message,
        "Value GROUP_IV is not allowed for field disability_group"
    );
}

#[test]
fn test_future_dates_are_rejected() {
    let carts = builtin(EntityKind::Cart);
    let mut bag = complete_cart();
    bag["birth_date"] = json!("2030-01-01");
    let result = validator().validate_by_id(&carts, "C1", &bag);

    assert_eq!(
        result.messages().collect::<Vec<_>>(),
        vec!["Birth date cannot be in the future"]
    );
}

#[test]
fn test_invoice_dispatch_waits_for_every_order() {
    let overheads = builtin(EntityKind::Overhead);
    let v = validator();

    let ready = linked_overhead(&["WAREHOUSE", "ISSUED"], 2);
    assert!(v.validate_by_id(&overheads, "H2", &ready).is_valid);

    let issued = linked_overhead(&["ISSUED"], 1);
    assert!(v.validate_by_id(&overheads, "H2", &issued).is_valid);

    let lagging = linked_overhead(&["WAREHOUSE", "FITTING"], 2);
    let result = v.validate_by_id(&overheads, "H2", &lagging);
    assert_eq!(
        result.messages().collect::<Vec<_>>(),
        vec!["All orders must be in WAREHOUSE or later"]
    );

    let empty = linked_overhead(&[], 0);
    let result = v.validate_by_id(&overheads, "H2", &empty);
    assert!(!result.is_valid);
    assert!(result.mentions("overhead_to_order"));
    assert!(result.mentions("device_count"));
}

#[test]
fn test_duplicate_invoice_numbers_pass_the_default_stub() {
    let overheads = builtin(EntityKind::Overhead);
    let v = validator();
    let bag = draft_overhead("INV-7");

    assert!(v.validate_by_id(&overheads, "H1", &bag).is_valid);
    assert!(v.validate_by_id(&overheads, "H1", &bag).is_valid);
}

#[test]
fn test_duplicate_invoice_numbers_fail_with_an_oracle() {
    let overheads = builtin(EntityKind::Overhead);
    let bag = draft_overhead("INV-7");
    let mut taken = TakenValues::new();

    let first = {
        let v = TransitionValidator::new(EvaluationContext::new(fixed_today(), &taken));
        v.validate_by_id(&overheads, "H1", &bag)
    };
    assert!(first.is_valid);
    taken.register("number", &bag["number"]);

    let v = TransitionValidator::new(EvaluationContext::new(fixed_today(), &taken));
    let second = v.validate_by_id(&overheads, "H1", &bag);
    assert!(!second.is_valid);
    assert_eq!(
        second.messages().collect::<Vec<_>>(),
        vec!["The invoice number must be unique"]
    );
}

#[test]
fn test_validation_never_mutates_the_bag() {
    let orders = builtin(EntityKind::Order);
    let bag = approved_order();
    let before = bag.clone();
    let _ = validator().availability(&orders, "ON_APPROVAL", &bag);
    assert_eq!(bag, before);
}

#[test]
fn test_engine_uses_its_pinned_date() {
    let engine = engine();
    assert_eq!(engine.today(), fixed_today());

    let mut bag = draft_overhead("INV-8");
    assert!(engine.validate(EntityKind::Overhead, "H1", &bag).is_valid);

    bag["date"] = json!("2025-06-02");
    let result = engine.validate(EntityKind::Overhead, "H1", &bag);
    assert_eq!(
        result.messages().collect::<Vec<_>>(),
        vec!["The invoice date cannot be in the future"]
    );
}

#[test]
fn test_engine_routes_by_kind() {
    let engine = engine();
    assert!(engine.transition(EntityKind::Order, "O3").is_some());
    assert!(engine.transition(EntityKind::Cart, "O3").is_none());

    let result = engine.validate(EntityKind::Cart, "O3", &approved_order());
    assert_eq!(result.errors[0].code, IssueCode::UnknownTransition);
}
