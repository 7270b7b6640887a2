use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which way a value is travelling through a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Form value to stored value.
    Input,
    /// Stored value to form value.
    Output,
}

/// Named value conversions a binding can apply in each direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldTransform {
    /// Upper-case on the way in, lower-case on the way out.
    CaseFold,
    /// Leading-integer parse on the way in (unparsable or zero becomes 1),
    /// decimal string on the way out.
    Integer,
    /// Truthiness to a boolean on the way in, `"1"` / `"0"` on the way out.
    Flag,
}

impl FieldTransform {
    pub fn apply(self, value: &Value, direction: Direction) -> Value {
        match direction {
            Direction::Input => self.input(value),
            Direction::Output => self.output(value),
        }
    }

    pub fn input(self, value: &Value) -> Value {
        match self {
            FieldTransform::CaseFold => match value {
                Value::String(s) => Value::String(s.to_uppercase()),
                other => other.clone(),
            },
            FieldTransform::Integer => {
                Value::from(leading_integer(value).filter(|n| *n != 0).unwrap_or(1))
            }
            FieldTransform::Flag => Value::Bool(is_truthy(value)),
        }
    }

    pub fn output(self, value: &Value) -> Value {
        match self {
            FieldTransform::CaseFold => match value {
                Value::String(s) => Value::String(s.to_lowercase()),
                other => other.clone(),
            },
            FieldTransform::Integer => match value {
                Value::Number(n) => Value::String(n.to_string()),
                other => other.clone(),
            },
            FieldTransform::Flag => Value::from(if is_truthy(value) { "1" } else { "0" }),
        }
    }
}

/// Parses the integer prefix of a string (`"12abc"` is 12) or truncates a number.
fn leading_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => {
            let s = s.trim_start();
            let (sign, digits) = match s.strip_prefix('-') {
                Some(rest) => (-1, rest),
                None => (1, s.strip_prefix('+').unwrap_or(s)),
            };
            let end = digits
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(digits.len());
            digits[..end].parse::<i64>().ok().map(|n| sign * n)
        }
        _ => None,
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integer_parses_prefixes_and_defaults_to_one() {
        let t = FieldTransform::Integer;
        assert_eq!(t.input(&json!("3")), json!(3));
        assert_eq!(t.input(&json!(" 12abc")), json!(12));
        assert_eq!(t.input(&json!("-4")), json!(-4));
        assert_eq!(t.input(&json!("abc")), json!(1));
        assert_eq!(t.input(&json!("0")), json!(1));
        assert_eq!(t.input(&json!(7.9)), json!(7));
        assert_eq!(t.output(&json!(3)), json!("3"));
    }

    #[test]
    fn flag_follows_truthiness() {
        let t = FieldTransform::Flag;
        assert_eq!(t.input(&json!("yes")), json!(true));
        assert_eq!(t.input(&json!(0)), json!(false));
        assert_eq!(t.output(&json!(true)), json!("1"));
        assert_eq!(t.output(&json!(false)), json!("0"));
    }

    #[test]
    fn case_fold_leaves_non_strings_alone() {
        let t = FieldTransform::CaseFold;
        assert_eq!(t.input(&json!("left")), json!("LEFT"));
        assert_eq!(t.output(&json!("LEFT")), json!("left"));
        assert_eq!(t.input(&json!(5)), json!(5));
    }
}
