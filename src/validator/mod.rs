//! Validates requested transitions against an entity's data bag.

pub mod resolver;
pub mod result;

pub use resolver::*;
pub use result::*;

use crate::bag::{self, display_value, is_present};
use crate::catalog::{Catalog, Transition};
use crate::condition::EvaluationContext;
use crate::condition::evaluator::strict_eq;
use serde_json::Value;

/// Checks required fields, conditions and allowed combinations for a transition.
///
/// Holds no state besides the evaluation context, so one validator can be shared and
/// reused; the data bag is only ever borrowed immutably.
#[derive(Debug, Clone, Copy)]
pub struct TransitionValidator<'a> {
    context: EvaluationContext<'a>,
}

impl<'a> TransitionValidator<'a> {
    pub fn new(context: EvaluationContext<'a>) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &EvaluationContext<'a> {
        &self.context
    }

    /// Validates `transition` against `data`, reporting every failure in evaluation
    /// order: required fields first, then conditions, then allowed combinations.
    pub fn validate(&self, transition: &Transition, data: &Value) -> ValidationResult {
        let mut errors = Vec::new();

        for field in &transition.required_fields {
            if !is_present(bag::resolve(data, field)) {
                errors.push(ValidationIssue::new(
                    field.as_str(),
                    format!(
                        "Field {} is required for transition {}",
                        field, transition.id
                    ),
                    IssueCode::RequiredField,
                ));
            }
        }

        for condition in &transition.conditions {
            if !self.context.check(condition, data) {
                tracing::trace!(
                    transition = %transition.id,
                    field = %condition.field,
                    operator = %condition.operator,
                    "condition not met"
                );
                errors.push(ValidationIssue::new(
                    condition.field.as_str(),
                    condition.message.as_str(),
                    IssueCode::ConditionNotMet,
                ));
            }
        }

        for combination in &transition.allowed_combinations {
            let Some(value) =
                bag::resolve(data, &combination.field).filter(|v| is_present(Some(*v)))
            else {
                continue;
            };
            if !combination.values.iter().any(|v| strict_eq(value, v)) {
                errors.push(ValidationIssue::new(
                    combination.field.as_str(),
                    format!(
                        "Value {} is not allowed for field {}",
                        display_value(value),
                        combination.field
                    ),
                    IssueCode::InvalidCombination,
                ));
            }
        }

        let result = ValidationResult::from_errors(errors);
        tracing::debug!(
            transition = %transition.id,
            valid = result.is_valid,
            errors = result.errors.len(),
            "transition validated"
        );
        result
    }

    /// Looks the transition up by id; an unknown id is reported as a validation error.
    pub fn validate_by_id(&self, catalog: &Catalog, id: &str, data: &Value) -> ValidationResult {
        match catalog.transition(id) {
            Some(transition) => self.validate(transition, data),
            None => ValidationResult::invalid(ValidationIssue::new(
                "id",
                format!("Transition {} not found", id),
                IssueCode::UnknownTransition,
            )),
        }
    }

    /// Validates the first declared edge `current -> target`, or reports that the
    /// graph has no such edge.
    pub fn can_transition(
        &self,
        catalog: &Catalog,
        current: &str,
        target: &str,
        data: &Value,
    ) -> ValidationResult {
        match catalog
            .transitions_from(current)
            .find(|t| t.to == target)
        {
            Some(transition) => self.validate(transition, data),
            None => ValidationResult::invalid(ValidationIssue::new(
                "status",
                format!(
                    "Transition from {} to {} is not permitted",
                    current, target
                ),
                IssueCode::InvalidTransition,
            )),
        }
    }
}

impl Default for TransitionValidator<'static> {
    fn default() -> Self {
        Self::new(EvaluationContext::default())
    }
}

/// Validates with the default context: today's local date and no uniqueness lookup.
pub fn validate_transition(transition: &Transition, data: &Value) -> ValidationResult {
    TransitionValidator::default().validate(transition, data)
}

/// [`TransitionValidator::validate_by_id`] with the default context.
pub fn validate_transition_by_id(catalog: &Catalog, id: &str, data: &Value) -> ValidationResult {
    TransitionValidator::default().validate_by_id(catalog, id, data)
}
