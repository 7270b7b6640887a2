use crate::catalog::Transition;
use crate::validator::{Availability, ValidationResult};

/// Formats validation outcomes into human-readable text.
pub struct ReportFormatter;

impl ReportFormatter {
    /// One verdict line for the transition, then one indented line per error.
    pub fn format_result(transition: &str, result: &ValidationResult) -> String {
        let mut out = if result.is_valid {
            format!("{}: valid", transition)
        } else {
            format!("{}: invalid ({} errors)", transition, result.errors.len())
        };
        for issue in &result.errors {
            out.push_str(&format!(
                "\n  - [{}] {}: {}",
                issue.code, issue.field, issue.message
            ));
        }
        out
    }

    /// Lists what can and cannot be done from `status`, in catalog order.
    pub fn format_availability(status: &str, availability: &Availability<'_>) -> String {
        let mut out = format!("Current status: {}", status);

        out.push_str("\nAvailable:");
        if availability.available.is_empty() {
            out.push_str("\n  (none)");
        }
        for transition in &availability.available {
            out.push_str(&format!("\n  {}", Self::format_edge(transition)));
        }

        out.push_str("\nUnavailable:");
        if availability.unavailable.is_empty() {
            out.push_str("\n  (none)");
        }
        for entry in &availability.unavailable {
            out.push_str(&format!(
                "\n  {}\n      because: {}",
                Self::format_edge(entry.transition),
                entry.reason
            ));
        }
        out
    }

    /// `ID  FROM -> TO  "button"` with the button label omitted when unset.
    fn format_edge(transition: &Transition) -> String {
        let edge = format!("{}  {} -> {}", transition.id, transition.from, transition.to);
        if transition.button.is_empty() {
            edge
        } else {
            format!("{}  \"{}\"", edge, transition.button)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::{IssueCode, ValidationIssue};

    #[test]
    fn lists_each_error_under_the_verdict() {
        let result = ValidationResult::invalid(ValidationIssue::new(
            "quantity",
            "Quantity must be between 1 and 10",
            IssueCode::ConditionNotMet,
        ));
        assert_eq!(
            ReportFormatter::format_result("O1", &result),
            "O1: invalid (1 errors)\n  - [CONDITION_NOT_MET] quantity: Quantity must be between 1 and 10"
        );
    }

    #[test]
    fn marks_empty_halves() {
        let text = ReportFormatter::format_availability("ISSUED", &Availability::default());
        assert_eq!(
            text,
            "Current status: ISSUED\nAvailable:\n  (none)\nUnavailable:\n  (none)"
        );
    }
}
