use super::dictionary::{coded, numbered};
use super::{
    BindingCondition, DataType, Dictionaries, FieldTransform, FieldValidation, UiFieldBinding,
};
use crate::condition::Operator;
use serde_json::json;

fn binding(id: &str, storage_path: &str, data_type: DataType) -> UiFieldBinding {
    UiFieldBinding {
        id: id.to_string(),
        ui_field: id.to_string(),
        storage_path: storage_path.to_string(),
        dictionary: None,
        data_type,
        validation: None,
        transform: None,
        dependencies: Vec::new(),
        conditions: Vec::new(),
    }
}

fn rule(required: bool, message: &str) -> FieldValidation {
    FieldValidation {
        required,
        message: Some(message.to_string()),
        ..FieldValidation::default()
    }
}

/// Fields of the service order form.
pub fn order_form_bindings() -> Vec<UiFieldBinding> {
    let device_condition = BindingCondition {
        field: "service_type".to_string(),
        operator: Operator::In,
        value: json!(["PROSTHESIS", "SHOES", "OTTO"]),
    };

    vec![
        UiFieldBinding {
            dictionary: Some("service_type".to_string()),
            validation: Some(FieldValidation {
                pattern: Some("^(PROSTHESIS|SHOES|OTTO|REPAIR)$".to_string()),
                ..rule(true, "Select the order type")
            }),
            transform: Some(FieldTransform::CaseFold),
            ..binding("service_type", "service.service_type_id", DataType::String)
        },
        UiFieldBinding {
            validation: Some(FieldValidation {
                min: Some(1.0),
                max: Some(10.0),
                ..rule(true, "Quantity must be between 1 and 10")
            }),
            transform: Some(FieldTransform::Integer),
            ..binding("quantity", "service.quantity", DataType::Number)
        },
        UiFieldBinding {
            dictionary: Some("device_type".to_string()),
            validation: Some(rule(false, "Select the device type for the right side")),
            dependencies: vec!["service_type".to_string()],
            conditions: vec![device_condition.clone()],
            ..binding("device_type_right", "order.device_type_r_id", DataType::Number)
        },
        UiFieldBinding {
            dictionary: Some("device_type".to_string()),
            validation: Some(rule(false, "Select the device type for the left side")),
            dependencies: vec!["service_type".to_string()],
            conditions: vec![device_condition],
            ..binding("device_type_left", "order.device_type_l_id", DataType::Number)
        },
        UiFieldBinding {
            dictionary: Some("diagnosis_type".to_string()),
            validation: Some(rule(true, "Select the diagnosis type")),
            ..binding("diagnosis_type", "diagnosis.diagnosis_type_id", DataType::Number)
        },
        UiFieldBinding {
            dictionary: Some("side".to_string()),
            validation: Some(FieldValidation {
                pattern: Some("^(LEFT|RIGHT|BOTH)$".to_string()),
                ..rule(true, "Select the diagnosis side")
            }),
            transform: Some(FieldTransform::CaseFold),
            ..binding("diagnosis_side", "diagnosis.side_id", DataType::String)
        },
        UiFieldBinding {
            validation: Some(rule(false, "State whether the patient is hospitalized")),
            transform: Some(FieldTransform::Flag),
            ..binding("hospitalized", "order.hospitalized", DataType::Boolean)
        },
        UiFieldBinding {
            dictionary: Some("urgency".to_string()),
            validation: Some(rule(false, "Select the order urgency")),
            ..binding("urgency", "service.urgency_id", DataType::String)
        },
        UiFieldBinding {
            validation: Some(rule(false, "State the reason for urgency")),
            dependencies: vec!["urgency".to_string()],
            conditions: vec![BindingCondition {
                field: "urgency".to_string(),
                operator: Operator::Eq,
                value: json!("URGENT"),
            }],
            ..binding("urgent_reason", "order.urgent_reason", DataType::String)
        },
        UiFieldBinding {
            validation: Some(FieldValidation::default()),
            ..binding("measurements", "order_measurements", DataType::Array)
        },
    ]
}

/// Lookup tables referenced by [`order_form_bindings`].
pub fn order_form_dictionaries() -> Dictionaries {
    let mut dictionaries = Dictionaries::new();
    dictionaries.insert(
        "service_type",
        coded(&[
            ("PROSTHESIS", "Prosthesis", "Prosthetics"),
            ("SHOES", "Shoes", "Orthopedic shoes"),
            ("OTTO", "Orthosis", "Orthotics"),
            ("REPAIR", "Repair", "Device repair"),
        ]),
    );
    dictionaries.insert(
        "device_type",
        numbered(&[
            (1, "PROSTHESIS_LEG", "Leg prosthesis", "Lower limb prosthesis"),
            (2, "PROSTHESIS_ARM", "Arm prosthesis", "Upper limb prosthesis"),
            (3, "SHOES_ORTHOPEDIC", "Orthopedic shoes", "Special footwear"),
            (4, "OTTO_KNEE", "Knee orthosis", "Knee joint orthosis"),
            (5, "OTTO_ANKLE", "Ankle orthosis", "Ankle joint orthosis"),
        ]),
    );
    dictionaries.insert(
        "diagnosis_type",
        numbered(&[
            (1, "M00-M99", "Musculoskeletal diseases", "ICD-10: M00-M99"),
            (2, "S70-S79", "Hip and thigh injuries", "ICD-10: S70-S79"),
            (3, "S80-S89", "Knee and lower leg injuries", "ICD-10: S80-S89"),
            (4, "S90-S99", "Ankle and foot injuries", "ICD-10: S90-S99"),
        ]),
    );
    dictionaries.insert(
        "side",
        coded(&[
            ("LEFT", "Left", "Left side"),
            ("RIGHT", "Right", "Right side"),
            ("BOTH", "Both", "Both sides"),
        ]),
    );
    dictionaries.insert(
        "urgency",
        coded(&[
            ("NORMAL", "Normal", "Standard lead time"),
            ("URGENT", "Urgent", "Expedited"),
            ("EMERGENCY", "Emergency", "Immediate"),
        ]),
    );
    dictionaries.insert(
        "measurement_type",
        numbered(&[
            (1, "LENGTH", "Length", "Length measurement"),
            (2, "WIDTH", "Width", "Width measurement"),
            (3, "HEIGHT", "Height", "Height measurement"),
            (4, "CIRCUMFERENCE", "Circumference", "Circumference measurement"),
        ]),
    );
    dictionaries.insert(
        "unit",
        coded(&[
            ("CM", "Centimetres", "Unit: cm"),
            ("MM", "Millimetres", "Unit: mm"),
            ("INCH", "Inches", "Unit: inches"),
        ]),
    );
    dictionaries
}
