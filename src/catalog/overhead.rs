use super::Transition;
use crate::condition::Operator::*;
use serde_json::json;

/// Warehouse invoice lifecycle, strictly linear: `DRAFT -> NEW -> SENT -> PROCESSED`.
///
/// `orders_status`, `device_count` and `document_processed` are computed by the
/// caller from the linked orders before validation.
pub fn transitions() -> Vec<Transition> {
    vec![
        Transition::new("H1", "DRAFT", "NEW")
            .requires(&["number", "date", "shop_name", "type"])
            .when(
                "number",
                Unique,
                json!(true),
                "The invoice number must be unique",
            )
            .when(
                "date",
                Lte,
                json!("today"),
                "The invoice date cannot be in the future",
            )
            .when(
                "shop_name",
                Exists,
                json!(true),
                "The workshop name is required",
            )
            .when(
                "type",
                In,
                json!(["PROSTHESIS", "SHOES", "OTTO", "REPAIR"]),
                "The invoice type must be one of the allowed values",
            )
            .presented("/overheads/:type", "Create", "Create a new invoice"),
        Transition::new("H2", "NEW", "SENT")
            .requires(&["overhead_to_order"])
            .when("status", Eq, json!("NEW"), "The invoice must be NEW")
            .when(
                "overhead_to_order",
                Count,
                json!([1, null]),
                "At least one order must be linked",
            )
            .when(
                "orders_status",
                In,
                json!(["WAREHOUSE", "ISSUED"]),
                "All orders must be in WAREHOUSE or later",
            )
            .when(
                "device_count",
                Gt,
                json!(0),
                "The device count must be greater than 0",
            )
            .presented("/overheads/:type", "Send", "Send the invoice with its orders"),
        Transition::new("H3", "SENT", "PROCESSED")
            .requires(&["processed_date", "processed_by"])
            .when("status", Eq, json!("SENT"), "The invoice must be sent")
            .when(
                "processed_date",
                Exists,
                json!(true),
                "The processing date is required",
            )
            .when(
                "processed_by",
                Exists,
                json!(true),
                "The processing employee is required",
            )
            .when(
                "document_processed",
                Eq,
                json!(true),
                "The document must be posted",
            )
            .when(
                "inventory_updated",
                Eq,
                json!(true),
                "Stock levels must be updated",
            )
            .presented(
                "/overheads/:type",
                "Process",
                "Process the invoice and update stock",
            ),
    ]
}
