//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the casegate crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use casegate::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let catalog = Catalog::from_file(EntityKind::Order, "path/to/orders.json")?;
//! let snapshot = EntitySnapshot::from_file("path/to/order.json")?;
//!
//! let validator = TransitionValidator::default();
//! for transition in validator.available_transitions(&catalog, &snapshot.status, &snapshot.data) {
//!     println!("{} -> {}", transition.id, transition.to);
//! }
//! # Ok(())
//! # }
//! ```

// Catalogs and the engine
pub use crate::catalog::{
    Catalog, EntityKind, OverheadType, ServiceCombination, Transition,
    validate_overhead_type, validate_service_combination,
};
pub use crate::engine::{LifecycleEngine, LifecycleEngineBuilder};

// Conditions and evaluation context
pub use crate::condition::{
    AssumeUnique, Condition, EvaluationContext, Operator, TakenValues, UniquenessOracle,
};

// Validation
pub use crate::validator::{
    Availability, IssueCode, TransitionValidator, Unavailable, ValidationIssue,
    ValidationResult,
};

// Field bindings
pub use crate::binding::{BindingSet, Direction, FieldTransform, UiFieldBinding};

// Data and reports
pub use crate::data::EntitySnapshot;
pub use crate::report::ReportFormatter;

// Error types
pub use crate::error::{BindingError, CatalogError, LoadError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
