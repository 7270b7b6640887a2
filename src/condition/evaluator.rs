use super::{AssumeUnique, Condition, Operator, UniquenessOracle};
use crate::bag::{self, is_present};
use chrono::{DateTime, Local, NaiveDate};
use serde_json::Value;
use std::cmp::Ordering;

/// Operand that stands for the context's reference date.
pub const TODAY: &str = "today";

/// Evaluates one operator against an actual value and the condition's operand.
///
/// Total over every input: `actual` is `None` when the field is absent from the bag,
/// and no combination of values panics. Incomparable values (mixed types, absent
/// values, malformed operands) make the predicate fail.
///
/// `unique` cannot be decided from a single value and always holds here. Transition
/// validation goes through [`EvaluationContext::check`], which consults the injected
/// oracle instead.
pub fn evaluate(operator: Operator, actual: Option<&Value>, expected: &Value) -> bool {
    match operator {
        Operator::Eq => actual.is_some_and(|a| strict_eq(a, expected)),
        Operator::Ne => !actual.is_some_and(|a| strict_eq(a, expected)),
        Operator::Gt | Operator::Lt | Operator::Gte | Operator::Lte => {
            ordering_satisfies(operator, actual.and_then(|a| compare(a, expected)))
        }
        Operator::In => expected
            .as_array()
            .is_some_and(|values| contains(values, actual)),
        Operator::Nin => expected
            .as_array()
            .is_some_and(|values| !contains(values, actual)),
        Operator::Exists => is_present(actual),
        Operator::NotExists => !is_present(actual),
        Operator::Range => within_range(actual, expected),
        Operator::Count => count_within(actual, expected),
        Operator::Unique => true,
    }
}

/// Everything a condition needs beyond the data bag: the reference date for `"today"`
/// operands and the oracle behind `unique`.
#[derive(Clone, Copy)]
pub struct EvaluationContext<'a> {
    today: NaiveDate,
    uniqueness: &'a dyn UniquenessOracle,
}

impl<'a> EvaluationContext<'a> {
    pub fn new(today: NaiveDate, uniqueness: &'a dyn UniquenessOracle) -> Self {
        Self { today, uniqueness }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn with_today(self, today: NaiveDate) -> Self {
        Self { today, ..self }
    }

    pub fn with_uniqueness<'b>(self, uniqueness: &'b dyn UniquenessOracle) -> EvaluationContext<'b> {
        EvaluationContext {
            today: self.today,
            uniqueness,
        }
    }

    /// Resolves the condition's field in `data` and evaluates it.
    pub fn check(&self, condition: &Condition, data: &Value) -> bool {
        let actual = bag::resolve(data, &condition.field);
        match condition.operator {
            // Absence is reported by the required-field check, not here.
            Operator::Unique => {
                actual.is_none_or(|value| self.uniqueness.is_unique(&condition.field, value))
            }
            op if op.is_comparison() && condition.value.as_str() == Some(TODAY) => {
                let ordering = actual.and_then(parse_date).map(|d| d.cmp(&self.today));
                ordering_satisfies(op, ordering)
            }
            op => evaluate(op, actual, &condition.value),
        }
    }
}

impl Default for EvaluationContext<'static> {
    fn default() -> Self {
        Self::new(Local::now().date_naive(), &AssumeUnique)
    }
}

impl std::fmt::Debug for EvaluationContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvaluationContext")
            .field("today", &self.today)
            .finish_non_exhaustive()
    }
}

fn ordering_satisfies(operator: Operator, ordering: Option<Ordering>) -> bool {
    match operator {
        Operator::Eq => ordering.is_some_and(Ordering::is_eq),
        Operator::Ne => !ordering.is_some_and(Ordering::is_eq),
        Operator::Gt => ordering.is_some_and(Ordering::is_gt),
        Operator::Lt => ordering.is_some_and(Ordering::is_lt),
        Operator::Gte => ordering.is_some_and(Ordering::is_ge),
        Operator::Lte => ordering.is_some_and(Ordering::is_le),
        _ => false,
    }
}

/// Equality without coercion, except that `1` and `1.0` are the same number.
pub(crate) fn strict_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        _ => a == b,
    }
}

/// Native ordering within one type; `None` across types.
pub(crate) fn compare(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64()?.partial_cmp(&y.as_f64()?),
        (Value::String(x), Value::String(y)) => Some(x.cmp(y)),
        (Value::Bool(x), Value::Bool(y)) => Some(x.cmp(y)),
        _ => None,
    }
}

fn contains(values: &[Value], actual: Option<&Value>) -> bool {
    actual.is_some_and(|a| values.iter().any(|v| strict_eq(a, v)))
}

fn within_range(actual: Option<&Value>, expected: &Value) -> bool {
    let Some(bounds) = expected.as_array().filter(|b| b.len() == 2) else {
        return false;
    };
    match (
        actual.and_then(Value::as_f64),
        bounds[0].as_f64(),
        bounds[1].as_f64(),
    ) {
        (Some(value), Some(min), Some(max)) => min <= value && value <= max,
        _ => false,
    }
}

fn count_within(actual: Option<&Value>, expected: &Value) -> bool {
    let Some(bounds) = expected.as_array() else {
        return false;
    };
    let Some(min) = bounds.first().and_then(Value::as_f64) else {
        return false;
    };
    let len = actual.and_then(Value::as_array).map_or(0, Vec::len) as f64;
    match bounds.get(1) {
        None | Some(Value::Null) => len >= min,
        Some(max) => max.as_f64().is_some_and(|max| len >= min && len <= max),
    }
}

/// Reads an ISO date or the date part of an RFC 3339 timestamp.
fn parse_date(value: &Value) -> Option<NaiveDate> {
    let text = value.as_str()?;
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|dt| dt.date_naive())
        })
        .or_else(|| NaiveDate::parse_from_str(text.get(..10)?, "%Y-%m-%d").ok())
}
