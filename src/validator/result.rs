use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a field failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueCode {
    RequiredField,
    ConditionNotMet,
    InvalidCombination,
    UnknownTransition,
    InvalidTransition,
    FieldInvalid,
    UnknownType,
}

impl IssueCode {
    pub fn as_str(self) -> &'static str {
        match self {
            IssueCode::RequiredField => "REQUIRED_FIELD",
            IssueCode::ConditionNotMet => "CONDITION_NOT_MET",
            IssueCode::InvalidCombination => "INVALID_COMBINATION",
            IssueCode::UnknownTransition => "UNKNOWN_TRANSITION",
            IssueCode::InvalidTransition => "INVALID_TRANSITION",
            IssueCode::FieldInvalid => "FIELD_INVALID",
            IssueCode::UnknownType => "UNKNOWN_TYPE",
        }
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One field-scoped failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
    pub code: IssueCode,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>, code: IssueCode) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code,
        }
    }
}

/// The outcome of validating a transition or a form.
///
/// Built fresh per call. `warnings` is part of the shape but nothing emits warnings yet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// A result whose validity follows from whether `errors` is empty.
    pub fn from_errors(errors: Vec<ValidationIssue>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings: Vec::new(),
        }
    }

    pub fn invalid(issue: ValidationIssue) -> Self {
        Self::from_errors(vec![issue])
    }

    /// Error messages in evaluation order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|e| e.message.as_str())
    }

    /// Whether any error is scoped to `field`.
    pub fn mentions(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}
