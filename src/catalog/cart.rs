use super::Transition;
use crate::condition::Operator::*;
use serde_json::json;

/// Patient case lifecycle: `DRAFT -> ACTIVE -> REFERRED_MED`, with `ACTIVE <-> ARCHIVED`.
pub fn transitions() -> Vec<Transition> {
    vec![
        Transition::new("C1", "DRAFT", "ACTIVE")
            .requires(&[
                "first_name",
                "name",
                "birth_date",
                "document_type",
                "document_series",
                "document_number",
                "registration_address",
            ])
            .when("first_name", Exists, json!(true), "First name is required")
            .when("name", Exists, json!(true), "Last name is required")
            .when("birth_date", Exists, json!(true), "Birth date is required")
            .when("birth_date", Lte, json!("today"), "Birth date cannot be in the future")
            .when("document_type", Exists, json!(true), "Document type is required")
            .when("document_series", Exists, json!(true), "Document series is required")
            .when("document_number", Exists, json!(true), "Document number is required")
            .when(
                "registration_address",
                Exists,
                json!(true),
                "Registration address is required",
            )
            .when(
                "disability_from_date",
                Lte,
                json!("today"),
                "Disability start date cannot be in the future",
            )
            .allow(
                "disability_group",
                &["GROUP_I", "GROUP_II", "GROUP_III"],
                "Disability group",
            )
            .allow(
                "disability_category",
                &["CHILD", "SINCE_CHILDHOOD", "VOV", "LABOUR", "OTHER"],
                "Disability category",
            )
            .allow(
                "disability_reason",
                &["TRAUMA", "CONGENITAL", "DISEASE", "OTHER"],
                "Disability reason",
            )
            .presented("/create", "Save", "Activate the patient case"),
        Transition::new("C2", "ACTIVE", "REFERRED_MED")
            .requires(&["service_type"])
            .when("status", Eq, json!("ACTIVE"), "The case must be active")
            .when(
                "diagnosis",
                Exists,
                json!(true),
                "At least one diagnosis or disability is required",
            )
            .allow(
                "service_type",
                &["PROSTHESIS", "SHOES", "OTTO", "REPAIR"],
                "Medical service type",
            )
            .presented("/cart/info/:id", "Refer", "Refer to the medical department"),
        Transition::new("C3", "ACTIVE", "ARCHIVED")
            .requires(&["deregistration_reason", "deregistration_date"])
            .when("status", Eq, json!("ACTIVE"), "The case must be active")
            .when(
                "deregistration_reason",
                Exists,
                json!(true),
                "Deregistration reason is required",
            )
            .when(
                "deregistration_date",
                Exists,
                json!(true),
                "Deregistration date is required",
            )
            .when(
                "deregistration_date",
                Lte,
                json!("today"),
                "Deregistration date cannot be in the future",
            )
            .presented("/cart/info/:id", "Archive", "Archive the patient case"),
        Transition::new("C4", "ARCHIVED", "ACTIVE")
            .requires(&["restoration_reason", "restoration_date"])
            .when("status", Eq, json!("ARCHIVED"), "The case must be archived")
            .when(
                "restoration_reason",
                Exists,
                json!(true),
                "Restoration reason is required",
            )
            .when(
                "restoration_date",
                Exists,
                json!(true),
                "Restoration date is required",
            )
            .when(
                "restoration_date",
                Lte,
                json!("today"),
                "Restoration date cannot be in the future",
            )
            .presented("/archive/list", "Restore", "Restore from the archive"),
    ]
}
