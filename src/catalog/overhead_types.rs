//! Warehouse invoice types and the fields each one must carry.

use crate::bag::{self, is_present};
use crate::validator::{IssueCode, ValidationIssue, ValidationResult};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OverheadType {
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub required_fields: &'static [&'static str],
    pub optional_fields: &'static [&'static str],
}

pub const OVERHEAD_TYPES: &[OverheadType] = &[
    OverheadType {
        code: "PROSTHESIS",
        name: "Prostheses",
        description: "Invoice for prosthetic devices",
        required_fields: &["device_type_id", "prosthesis_material_id"],
        optional_fields: &["prosthesis_color_id", "prosthesis_size", "prosthesis_notes"],
    },
    OverheadType {
        code: "SHOES",
        name: "Shoes",
        description: "Invoice for orthopedic shoes",
        required_fields: &["shoe_model_id", "shoe_size", "heel_material_id"],
        optional_fields: &["shoe_color_id", "shoe_width", "shoe_height", "shoe_notes"],
    },
    OverheadType {
        code: "OTTO",
        name: "Otto devices",
        description: "Invoice for Ottobock devices",
        required_fields: &["device_type_id", "otto_model_id"],
        optional_fields: &["otto_color_id", "otto_size", "otto_notes"],
    },
    OverheadType {
        code: "REPAIR",
        name: "Repair",
        description: "Invoice for device repairs",
        required_fields: &["original_order_id", "repair_type_id", "repair_description"],
        optional_fields: &["repair_cost", "repair_notes", "repair_priority"],
    },
];

pub fn overhead_type(code: &str) -> Option<&'static OverheadType> {
    OVERHEAD_TYPES.iter().find(|t| t.code == code)
}

/// Reports every required field of the invoice type that `data` leaves empty. An unknown
/// type yields a single `UNKNOWN_TYPE` issue on `type`.
pub fn validate_overhead_type(code: &str, data: &Value) -> ValidationResult {
    let Some(kind) = overhead_type(code) else {
        return ValidationResult::invalid(ValidationIssue::new(
            "type",
            format!("Overhead type {code} not found"),
            IssueCode::UnknownType,
        ));
    };

    let errors = kind
        .required_fields
        .iter()
        .copied()
        .filter(|&field| !is_present(bag::resolve(data, field)))
        .map(|field| {
            ValidationIssue::new(
                field,
                format!("Field {field} is required for overhead type {}", kind.name),
                IssueCode::RequiredField,
            )
        })
        .collect();
    let result = ValidationResult::from_errors(errors);
    tracing::debug!(
        overhead_type = kind.code,
        errors = result.errors.len(),
        "overhead type validated"
    );
    result
}
