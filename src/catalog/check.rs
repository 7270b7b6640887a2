use super::{DRAFT, EntityKind, Transition};
use crate::condition::{Condition, OperandShape};
use crate::error::CatalogError;
use ahash::AHashSet;
use serde_json::Value;

/// Rejects catalogs that would make validation meaningless: duplicate ids, states
/// outside the kind's vocabulary, edges into `DRAFT` or back into their own state,
/// empty field paths or messages, and operands whose shape does not match their
/// operator.
pub(super) fn check_transitions(
    kind: EntityKind,
    transitions: &[Transition],
) -> Result<(), CatalogError> {
    let mut seen = AHashSet::new();
    for transition in transitions {
        if transition.id.is_empty() {
            return Err(CatalogError::EmptyId { kind });
        }
        if !seen.insert(transition.id.as_str()) {
            return Err(CatalogError::DuplicateId(transition.id.clone()));
        }
        for state in [&transition.from, &transition.to] {
            if !kind.has_state(state) {
                return Err(CatalogError::UnknownState {
                    transition: transition.id.clone(),
                    state: state.clone(),
                    kind,
                });
            }
        }
        if transition.to == DRAFT {
            return Err(CatalogError::IntoDraft(transition.id.clone()));
        }
        if transition.from == transition.to {
            return Err(CatalogError::SelfLoop(transition.id.clone()));
        }

        let fields = transition
            .required_fields
            .iter()
            .chain(transition.conditions.iter().map(|c| &c.field))
            .chain(transition.allowed_combinations.iter().map(|c| &c.field));
        for field in fields {
            if field.is_empty() {
                return Err(CatalogError::EmptyField(transition.id.clone()));
            }
        }

        for condition in &transition.conditions {
            if condition.message.is_empty() {
                return Err(CatalogError::EmptyMessage {
                    transition: transition.id.clone(),
                    field: condition.field.clone(),
                });
            }
            check_operand(&transition.id, condition)?;
        }
    }
    Ok(())
}

fn check_operand(transition: &str, condition: &Condition) -> Result<(), CatalogError> {
    let shape = condition.operator.operand_shape();
    let value = &condition.value;
    let (ok, expected) = match shape {
        OperandShape::Scalar => (!value.is_array() && !value.is_object(), "a scalar"),
        OperandShape::Array => (value.is_array(), "an array"),
        OperandShape::NumericPair => (is_numeric_pair(value), "[min, max] with min <= max"),
        OperandShape::CountBounds => (is_count_bounds(value), "[min, max | null]"),
        OperandShape::Ignored => (true, "anything"),
    };
    if ok {
        Ok(())
    } else {
        Err(CatalogError::OperandShape {
            transition: transition.to_string(),
            field: condition.field.clone(),
            operator: condition.operator,
            expected,
        })
    }
}

fn is_numeric_pair(value: &Value) -> bool {
    match value.as_array().map(Vec::as_slice) {
        Some([min, max]) => match (min.as_f64(), max.as_f64()) {
            (Some(min), Some(max)) => min <= max,
            _ => false,
        },
        _ => false,
    }
}

fn is_count_bounds(value: &Value) -> bool {
    match value.as_array().map(Vec::as_slice) {
        Some([min]) => min.as_u64().is_some(),
        Some([min, Value::Null]) => min.as_u64().is_some(),
        Some([min, max]) => match (min.as_u64(), max.as_u64()) {
            (Some(min), Some(max)) => min <= max,
            _ => false,
        },
        _ => false,
    }
}
