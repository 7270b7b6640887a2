use super::TransitionValidator;
use crate::catalog::{Catalog, Transition};
use itertools::Itertools;
use serde::Serialize;
use serde_json::Value;

/// A transition leaving the current state that cannot be taken yet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Unavailable<'c> {
    pub transition: &'c Transition,
    /// The failure messages joined with `"; "`, in evaluation order.
    pub reason: String,
}

/// Both halves of the availability split for one state, in catalog order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Availability<'c> {
    pub available: Vec<&'c Transition>,
    pub unavailable: Vec<Unavailable<'c>>,
}

impl TransitionValidator<'_> {
    /// Transitions leaving `status` whose validation passes, in declaration order.
    pub fn available_transitions<'c>(
        &self,
        catalog: &'c Catalog,
        status: &str,
        data: &Value,
    ) -> Vec<&'c Transition> {
        self.availability(catalog, status, data).available
    }

    /// Transitions leaving `status` that fail, each paired with its joined reasons.
    pub fn unavailable_transitions<'c>(
        &self,
        catalog: &'c Catalog,
        status: &str,
        data: &Value,
    ) -> Vec<Unavailable<'c>> {
        self.availability(catalog, status, data).unavailable
    }

    /// Validates every transition leaving `status` once and splits the results.
    pub fn availability<'c>(
        &self,
        catalog: &'c Catalog,
        status: &str,
        data: &Value,
    ) -> Availability<'c> {
        let mut split = Availability::default();
        for transition in catalog.transitions_from(status) {
            let result = self.validate(transition, data);
            if result.is_valid {
                split.available.push(transition);
                continue;
            }
            let reason = result.messages().join("; ");
            if !reason.is_empty() {
                split.unavailable.push(Unavailable { transition, reason });
            }
        }
        tracing::debug!(
            kind = %catalog.kind(),
            status,
            available = split.available.len(),
            unavailable = split.unavailable.len(),
            "availability resolved"
        );
        split
    }
}

/// [`TransitionValidator::available_transitions`] with the default context.
pub fn available_transitions<'c>(
    status: &str,
    data: &Value,
    catalog: &'c Catalog,
) -> Vec<&'c Transition> {
    TransitionValidator::default().available_transitions(catalog, status, data)
}

/// [`TransitionValidator::unavailable_transitions`] with the default context.
pub fn unavailable_transitions<'c>(
    status: &str,
    data: &Value,
    catalog: &'c Catalog,
) -> Vec<Unavailable<'c>> {
    TransitionValidator::default().unavailable_transitions(catalog, status, data)
}
