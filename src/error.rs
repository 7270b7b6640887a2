use crate::catalog::EntityKind;
use crate::condition::Operator;
use thiserror::Error;

/// Errors found by the self-check that runs whenever a transition catalog is loaded.
///
/// These are configuration mistakes, not business-rule failures: a catalog that fails
/// the check is never handed to the validator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("A {kind} transition has an empty id")]
    EmptyId { kind: EntityKind },

    #[error("Transition id '{0}' is declared more than once")]
    DuplicateId(String),

    #[error("Transition '{transition}' references state '{state}', which is not a {kind} state")]
    UnknownState {
        transition: String,
        state: String,
        kind: EntityKind,
    },

    #[error("Transition '{0}' targets DRAFT, which no lifecycle may re-enter")]
    IntoDraft(String),

    #[error("Transition '{0}' starts and ends in the same state")]
    SelfLoop(String),

    #[error("Transition '{0}' has a condition or required field with an empty field path")]
    EmptyField(String),

    #[error("Condition on '{field}' in transition '{transition}' has an empty failure message")]
    EmptyMessage { transition: String, field: String },

    #[error(
        "Condition on '{field}' in transition '{transition}' uses '{operator}' with an invalid operand: expected {expected}"
    )]
    OperandShape {
        transition: String,
        field: String,
        operator: Operator,
        expected: &'static str,
    },
}

/// Errors found when a set of UI field bindings is loaded.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BindingError {
    #[error("Binding id '{0}' is declared more than once")]
    DuplicateId(String),

    #[error("Binding '{0}' has an empty storage path")]
    EmptyStoragePath(String),

    #[error("Binding '{binding}' uses operator '{operator}', which binding conditions do not support")]
    UnsupportedOperator { binding: String, operator: Operator },

    #[error("Binding '{binding}' has an invalid pattern '{pattern}': {message}")]
    InvalidPattern {
        binding: String,
        pattern: String,
        message: String,
    },

    #[error("Binding '{binding}' depends on unknown binding '{dependency}'")]
    UnknownDependency { binding: String, dependency: String },

    #[error("Binding '{binding}' refers to unknown dictionary '{dictionary}'")]
    UnknownDictionary { binding: String, dictionary: String },
}

/// Errors that can occur when reading catalogs, binding sets or snapshots from disk.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Could not read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Binding(#[from] BindingError),

    #[error("Snapshot has no status and its data carries no 'status' field")]
    MissingStatus,
}
