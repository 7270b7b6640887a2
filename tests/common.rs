//! Common test utilities for building engines and data bags.
use casegate::prelude::*;
use chrono::NaiveDate;
use serde_json::{Value, json};

/// The reference date every fixture is written against.
#[allow(dead_code)]
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

/// An engine over the built-in catalogs, pinned to [`fixed_today`].
#[allow(dead_code)]
pub fn engine() -> LifecycleEngine {
    LifecycleEngine::builder()
        .with_today(fixed_today())
        .build()
        .expect("built-in catalogs are valid")
}

/// A validator pinned to [`fixed_today`] with the default uniqueness stub.
#[allow(dead_code)]
pub fn validator() -> TransitionValidator<'static> {
    TransitionValidator::new(EvaluationContext::new(fixed_today(), &AssumeUnique))
}

#[allow(dead_code)]
pub fn builtin(kind: EntityKind) -> Catalog {
    Catalog::builtin(kind).expect("built-in catalog is valid")
}

/// An order awaiting medical approval with a positive decision recorded.
#[allow(dead_code)]
pub fn approved_order() -> Value {
    json!({
        "status": "ON_APPROVAL",
        "medical_approval_decision": "APPROVED",
        "medical_approval_date": "2025-01-01",
    })
}

/// A patient case ready to be activated.
#[allow(dead_code)]
pub fn complete_cart() -> Value {
    json!({
        "status": "DRAFT",
        "first_name": "Anna",
        "name": "Petrova",
        "birth_date": "1980-04-12",
        "document_type": "PASSPORT",
        "document_series": "4510",
        "document_number": "123456",
        "registration_address": "12 Lenina St",
        "disability_from_date": "2020-02-01",
        "disability_group": "GROUP_II",
    })
}

/// A draft invoice that satisfies every H1 condition.
#[allow(dead_code)]
pub fn draft_overhead(number: &str) -> Value {
    json!({
        "status": "DRAFT",
        "number": number,
        "date": "2025-05-30",
        "shop_name": "Central workshop",
        "type": "PROSTHESIS",
    })
}

/// A new invoice linked to orders with the given statuses, with the computed fields a
/// caller pre-populates before H2 is validated.
#[allow(dead_code)]
pub fn linked_overhead(order_statuses: &[&str], device_count: u32) -> Value {
    let orders: Vec<Value> = order_statuses
        .iter()
        .enumerate()
        .map(|(i, status)| json!({ "order_id": i + 1, "status": status }))
        .collect();
    let least = casegate::catalog::least_advanced_status(order_statuses.iter().copied());
    json!({
        "status": "NEW",
        "overhead_to_order": orders,
        "orders_status": least,
        "device_count": device_count,
    })
}

/// A transition with no requirements at all.
#[allow(dead_code)]
pub fn trivial_transition() -> Transition {
    Transition::new("T0", "NEW", "SENT")
}
