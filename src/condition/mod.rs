//! Typed predicates over data-bag fields.
//!
//! One evaluator serves both the transition catalogs and the UI field bindings.

pub mod evaluator;
pub mod operator;
pub mod oracle;

pub use evaluator::*;
pub use operator::*;
pub use oracle::*;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single predicate gating a transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Dotted path into the data bag, or a computed field the caller pre-populates.
    pub field: String,
    pub operator: Operator,
    #[serde(default)]
    pub value: Value,
    /// Returned verbatim when the condition fails.
    pub message: String,
}

impl Condition {
    pub fn new(
        field: impl Into<String>,
        operator: Operator,
        value: Value,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            operator,
            value,
            message: message.into(),
        }
    }
}
