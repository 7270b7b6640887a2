use super::Transition;
use crate::condition::Operator::*;
use serde_json::json;

/// Service order lifecycle:
/// `DRAFT -> NEW -> ON_APPROVAL -> {IN_PRODUCTION | NEW} -> FITTING -> WAREHOUSE -> ISSUED`.
///
/// `ON_APPROVAL` branches: O3 approves, O4 rejects back to `NEW`.
pub fn transitions() -> Vec<Transition> {
    vec![
        Transition::new("O1", "DRAFT", "NEW")
            .requires(&["service_type", "urgency"])
            .when(
                "quantity",
                Range,
                json!([1, 10]),
                "Quantity must be between 1 and 10",
            )
            .when(
                "urgency",
                Eq,
                json!("URGENT"),
                "URGENT orders must state an urgent_reason",
            )
            .when(
                "service_type",
                Eq,
                json!("PROSTHESIS"),
                "Prostheses require device_type_l_id or device_type_r_id",
            )
            .presented("/order/add", "Save", "Create a new order"),
        Transition::new("O2", "NEW", "ON_APPROVAL")
            .requires(&["primary_diagnosis_id"])
            .when("status", Eq, json!("NEW"), "The order must be NEW")
            .when(
                "primary_diagnosis_id",
                Exists,
                json!(true),
                "A primary diagnosis is required",
            )
            .when(
                "medical_indicators",
                Exists,
                json!(true),
                "Medical indications must be attached",
            )
            .presented(
                "/order/info/:id",
                "Send for approval",
                "Send the order for medical approval",
            ),
        Transition::new("O3", "ON_APPROVAL", "IN_PRODUCTION")
            .requires(&["medical_approval_decision"])
            .when(
                "status",
                Eq,
                json!("ON_APPROVAL"),
                "The order must be awaiting approval",
            )
            .when(
                "medical_approval_decision",
                Eq,
                json!("APPROVED"),
                "The medical decision must be APPROVED",
            )
            .when(
                "medical_approval_date",
                Exists,
                json!(true),
                "The approval date is required",
            )
            .presented(
                "/order/listApprove/:type",
                "Approve",
                "Medical approval of the order",
            ),
        Transition::new("O4", "ON_APPROVAL", "NEW")
            .requires(&["rejection_reason"])
            .when(
                "status",
                Eq,
                json!("ON_APPROVAL"),
                "The order must be awaiting approval",
            )
            .when(
                "rejection_reason",
                Exists,
                json!(true),
                "A rejection reason is required",
            )
            .when(
                "rejection_date",
                Exists,
                json!(true),
                "The rejection date is required",
            )
            .presented(
                "/order/listApprove/:type",
                "Reject",
                "Medical rejection of the order",
            ),
        Transition::new("O5", "IN_PRODUCTION", "FITTING")
            .requires(&["order_measurements"])
            .when(
                "status",
                Eq,
                json!("IN_PRODUCTION"),
                "The order must be in production",
            )
            .when(
                "order_measurements",
                Exists,
                json!(true),
                "At least one measurement is required",
            )
            .when(
                "measurements_completed",
                Eq,
                json!(true),
                "Measurements must be completed",
            )
            .presented(
                "/order/info/:id",
                "Send to fitting",
                "Send to fitting once measurements are done",
            ),
        Transition::new("O6", "FITTING", "WAREHOUSE")
            .requires(&["fitting_act"])
            .when("status", Eq, json!("FITTING"), "The order must be at fitting")
            .when(
                "fitting_act",
                Exists,
                json!(true),
                "The fitting act is required",
            )
            .when(
                "fitting_completed",
                Eq,
                json!(true),
                "The fitting must be completed",
            )
            .when(
                "product_ready",
                Eq,
                json!(true),
                "The product must be ready",
            )
            .presented(
                "/order/info/:id",
                "Move to warehouse",
                "Hand the finished product to the warehouse",
            ),
        Transition::new("O7", "WAREHOUSE", "ISSUED")
            .requires(&["overhead_id"])
            .when(
                "status",
                Eq,
                json!("WAREHOUSE"),
                "The order must be in the warehouse",
            )
            .when(
                "overhead_id",
                Exists,
                json!(true),
                "A warehouse invoice must be linked",
            )
            .when(
                "overhead_processed",
                Eq,
                json!(true),
                "The warehouse invoice must be processed",
            )
            .when("issue_date", Exists, json!(true), "The issue date is required")
            .presented(
                "/order/listwarehouse/:type",
                "Issue",
                "Issue the product to the patient",
            ),
    ]
}
