use crate::condition::{Condition, Operator};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A permitted edge in an entity's state graph.
///
/// `source`, `button` and `description` are presentation metadata for the UI and take
/// no part in validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub id: String,
    pub from: String,
    pub to: String,
    #[serde(default, alias = "requiredFields")]
    pub required_fields: Vec<String>,
    #[serde(default)]
    pub conditions: Vec<Condition>,
    #[serde(default, alias = "allowedCombinations")]
    pub allowed_combinations: Vec<AllowedCombination>,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub button: String,
    #[serde(default)]
    pub description: String,
}

/// Restricts a field to a set of values when it is filled in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllowedCombination {
    pub field: String,
    pub values: Vec<Value>,
    #[serde(default)]
    pub description: String,
}

impl Transition {
    pub fn new(id: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            from: from.into(),
            to: to.into(),
            required_fields: Vec::new(),
            conditions: Vec::new(),
            allowed_combinations: Vec::new(),
            source: String::new(),
            button: String::new(),
            description: String::new(),
        }
    }

    pub fn requires(mut self, fields: &[&str]) -> Self {
        self.required_fields
            .extend(fields.iter().map(|f| f.to_string()));
        self
    }

    pub fn when(mut self, field: &str, operator: Operator, value: Value, message: &str) -> Self {
        self.conditions
            .push(Condition::new(field, operator, value, message));
        self
    }

    pub fn allow(mut self, field: &str, values: &[&str], description: &str) -> Self {
        self.allowed_combinations.push(AllowedCombination {
            field: field.to_string(),
            values: values.iter().map(|v| Value::from(*v)).collect(),
            description: description.to_string(),
        });
        self
    }

    pub fn presented(mut self, source: &str, button: &str, description: &str) -> Self {
        self.source = source.to_string();
        self.button = button.to_string();
        self.description = description.to_string();
        self
    }
}
