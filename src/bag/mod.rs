pub mod path;

pub use path::*;

use serde_json::Value;

/// A field "exists" when it is present, not `null` and not the empty string.
/// Numeric `0` and boolean `false` count as existing.
pub fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

/// Renders a value for messages: strings without quotes, everything else as JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
