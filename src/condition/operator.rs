use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of predicate operators a condition may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Eq,
    Ne,
    Gt,
    Lt,
    Gte,
    Lte,
    In,
    Nin,
    Exists,
    NotExists,
    /// Inclusive numeric bounds `[min, max]`.
    Range,
    /// Array-length bounds `[min, max | null]`.
    Count,
    /// Decided by an injected [`UniquenessOracle`](super::UniquenessOracle).
    Unique,
}

/// What an operator expects as its operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandShape {
    Scalar,
    Array,
    NumericPair,
    CountBounds,
    Ignored,
}

impl Operator {
    pub const ALL: [Operator; 13] = [
        Operator::Eq,
        Operator::Ne,
        Operator::Gt,
        Operator::Lt,
        Operator::Gte,
        Operator::Lte,
        Operator::In,
        Operator::Nin,
        Operator::Exists,
        Operator::NotExists,
        Operator::Range,
        Operator::Count,
        Operator::Unique,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Eq => "eq",
            Operator::Ne => "ne",
            Operator::Gt => "gt",
            Operator::Lt => "lt",
            Operator::Gte => "gte",
            Operator::Lte => "lte",
            Operator::In => "in",
            Operator::Nin => "nin",
            Operator::Exists => "exists",
            Operator::NotExists => "not_exists",
            Operator::Range => "range",
            Operator::Count => "count",
            Operator::Unique => "unique",
        }
    }

    pub fn operand_shape(self) -> OperandShape {
        match self {
            Operator::Eq
            | Operator::Ne
            | Operator::Gt
            | Operator::Lt
            | Operator::Gte
            | Operator::Lte => OperandShape::Scalar,
            Operator::In | Operator::Nin => OperandShape::Array,
            Operator::Range => OperandShape::NumericPair,
            Operator::Count => OperandShape::CountBounds,
            Operator::Exists | Operator::NotExists | Operator::Unique => OperandShape::Ignored,
        }
    }

    /// Ordering comparisons, the only operators the `"today"` operand applies to.
    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            Operator::Eq
                | Operator::Ne
                | Operator::Gt
                | Operator::Lt
                | Operator::Gte
                | Operator::Lte
        )
    }

    /// The subset UI field bindings may use for conditional visibility.
    pub fn is_binding_operator(self) -> bool {
        matches!(
            self,
            Operator::Eq
                | Operator::Ne
                | Operator::Gt
                | Operator::Lt
                | Operator::In
                | Operator::Nin
                | Operator::Exists
                | Operator::NotExists
        )
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
