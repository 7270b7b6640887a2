//! Which service types may be ordered for which diagnoses, and what each pairing needs.

use crate::bag::{self, is_present};
use crate::validator::{IssueCode, ValidationIssue, ValidationResult};
use serde::Serialize;
use serde_json::Value;

/// One permitted pairing of a service type with a diagnosis group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceCombination {
    pub id: &'static str,
    pub service_type: &'static str,
    /// Free-text diagnosis group, including its ICD prefixes.
    pub diagnosis_type: &'static str,
    /// Sides the service can be fitted to; empty when side does not apply.
    pub sides: &'static [&'static str],
    pub required_fields: &'static [&'static str],
    pub optional_fields: &'static [&'static str],
    pub description: &'static str,
    pub note: &'static str,
}

const BOTH_SIDES: &[&str] = &["LEFT", "RIGHT", "BOTH"];

pub const SERVICE_COMBINATIONS: &[ServiceCombination] = &[
    ServiceCombination {
        id: "S1",
        service_type: "PROSTHESIS",
        diagnosis_type: "amputation (ICD S78., Z89.)",
        sides: BOTH_SIDES,
        required_fields: &["device_type_l_id", "device_type_r_id"],
        optional_fields: &["prosthesis_material_id", "prosthesis_color_id", "prosthesis_size"],
        description: "Limb prosthesis after amputation",
        note: "The device type is chosen per side",
    },
    ServiceCombination {
        id: "S2",
        service_type: "SHOES",
        diagnosis_type: "orthopedic foot pathologies (ICD Q66., M21.)",
        sides: BOTH_SIDES,
        required_fields: &[
            "shoe_model_id",
            "shoe_color_id",
            "heel_material_id",
            "size_of_shortening",
        ],
        optional_fields: &["shoe_size", "shoe_width", "shoe_height"],
        description: "Orthopedic shoes",
        note: "The shortening is given in centimetres",
    },
    ServiceCombination {
        id: "S3",
        service_type: "OTTO",
        diagnosis_type: "per catalog",
        sides: &[],
        required_fields: &["device_type_id"],
        optional_fields: &["otto_model_id", "otto_color_id", "otto_size"],
        description: "Ottobock devices",
        note: "The diagnosis follows the device catalog",
    },
    ServiceCombination {
        id: "S4",
        service_type: "REPAIR",
        diagnosis_type: "any previous order or device",
        sides: &[],
        required_fields: &["original_order_id", "repair_type_id"],
        optional_fields: &["repair_description", "repair_cost"],
        description: "Repair of a previously issued device",
        note: "Always references the original order",
    },
];

/// The first combination for `service_type` whose diagnosis group contains
/// `diagnosis_type` as a substring.
pub fn service_combination(
    service_type: &str,
    diagnosis_type: &str,
) -> Option<&'static ServiceCombination> {
    SERVICE_COMBINATIONS
        .iter()
        .find(|c| c.service_type == service_type && c.diagnosis_type.contains(diagnosis_type))
}

pub fn service_combinations_for(
    service_type: &str,
) -> impl Iterator<Item = &'static ServiceCombination> {
    SERVICE_COMBINATIONS
        .iter()
        .filter(move |c| c.service_type == service_type)
}

/// Checks an order's data against the combination for its service type and diagnosis.
///
/// An unknown pairing short-circuits with a single `INVALID_COMBINATION` issue. Otherwise
/// every missing required field is reported, followed by the prosthesis side rules and
/// the repair reference rule.
pub fn validate_service_combination(
    service_type: &str,
    diagnosis_type: &str,
    data: &Value,
) -> ValidationResult {
    let Some(combination) = service_combination(service_type, diagnosis_type) else {
        return ValidationResult::invalid(ValidationIssue::new(
            "service_type",
            format!("Combination {service_type} + {diagnosis_type} is not allowed"),
            IssueCode::InvalidCombination,
        ));
    };

    let present = |field: &str| is_present(bag::resolve(data, field));
    let mut errors: Vec<ValidationIssue> = combination
        .required_fields
        .iter()
        .copied()
        .filter(|&field| !present(field))
        .map(|field| {
            ValidationIssue::new(
                field,
                format!("Field {field} is required for combination {}", combination.id),
                IssueCode::RequiredField,
            )
        })
        .collect();

    if service_type == "PROSTHESIS" {
        let side = bag::resolve(data, "side").and_then(Value::as_str);
        let (left, right) = (present("device_type_l_id"), present("device_type_r_id"));
        let side_rule = match side {
            Some("LEFT") if !left => {
                Some(("device_type_l_id", "The left side requires device_type_l_id"))
            }
            Some("RIGHT") if !right => {
                Some(("device_type_r_id", "The right side requires device_type_r_id"))
            }
            Some("BOTH") if !(left && right) => Some((
                if left { "device_type_r_id" } else { "device_type_l_id" },
                "Both sides require device_type_l_id and device_type_r_id",
            )),
            _ => None,
        };
        if let Some((field, message)) = side_rule {
            errors.push(ValidationIssue::new(field, message, IssueCode::ConditionNotMet));
        }
    }

    if service_type == "REPAIR" && !present("original_order_id") {
        errors.push(ValidationIssue::new(
            "original_order_id",
            "A repair must reference the original order",
            IssueCode::ConditionNotMet,
        ));
    }

    let result = ValidationResult::from_errors(errors);
    tracing::debug!(
        combination = combination.id,
        errors = result.errors.len(),
        "service combination validated"
    );
    result
}
