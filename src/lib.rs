//! # Casegate - Lifecycle Transition Validation Engine
//!
//! **Casegate** models the state machines of the three entities a prosthetics service
//! tracks (patient cases, service orders and warehouse invoices) as declarative
//! transition tables, and decides whether a requested transition is permitted given
//! the entity's current data.
//!
//! ## Core Workflow
//!
//! 1.  **Load a Catalog**: Use the built-in table for an [`catalog::EntityKind`] or load
//!     one from JSON. Every catalog is self-checked when it is built.
//! 2.  **Configure the Context**: Use `LifecycleEngine::builder` to pin the reference date
//!     for `"today"` operands and to inject a uniqueness lookup for `unique` conditions.
//! 3.  **Validate**: Ask whether a transition may be taken, or split the transitions
//!     leaving the current status into available and unavailable ones.
//!
//! Business-rule failures are never errors: they come back as a
//! [`validator::ValidationResult`] carrying one message per failed check, in evaluation
//! order.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use casegate::prelude::*;
//! use serde_json::json;
//!
//! fn main() -> Result<()> {
//!     let engine = LifecycleEngine::builder()
//!         .with_uniqueness(TakenValues::new())
//!         .build()?;
//!
//!     let order = json!({
//!         "status": "ON_APPROVAL",
//!         "medical_approval_decision": "APPROVED",
//!         "medical_approval_date": "2025-03-04",
//!     });
//!
//!     let result = engine.validate(EntityKind::Order, "O3", &order);
//!     println!("{}", ReportFormatter::format_result("O3", &result));
//!
//!     let availability = engine.availability(EntityKind::Order, "ON_APPROVAL", &order);
//!     println!("{}", ReportFormatter::format_availability("ON_APPROVAL", &availability));
//!     Ok(())
//! }
//! ```

pub mod bag;
pub mod binding;
pub mod catalog;
pub mod condition;
pub mod data;
pub mod engine;
pub mod error;
pub mod prelude;
pub mod report;
pub mod validator;
