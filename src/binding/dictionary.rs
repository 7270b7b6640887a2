use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Dictionary entries are keyed either by a numeric id or by their code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DictionaryId {
    Number(i64),
    Code(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryValue {
    pub id: DictionaryId,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl DictionaryValue {
    /// Whether `key` names this entry by id or by code.
    pub fn matches(&self, key: &Value) -> bool {
        match (key, &self.id) {
            (Value::Number(n), DictionaryId::Number(id)) => n.as_i64() == Some(*id),
            (Value::String(s), DictionaryId::Code(id)) => s == id || *s == self.code,
            (Value::String(s), _) => *s == self.code,
            _ => false,
        }
    }
}

/// Named lookup tables for enumerated fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionaries(AHashMap<String, Vec<DictionaryValue>>);

impl Dictionaries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, values: Vec<DictionaryValue>) {
        self.0.insert(name.into(), values);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// All entries of a dictionary; empty for unknown names.
    pub fn values(&self, name: &str) -> &[DictionaryValue] {
        self.0.get(name).map_or(&[], Vec::as_slice)
    }

    pub fn lookup(&self, name: &str, key: &Value) -> Option<&DictionaryValue> {
        self.values(name).iter().find(|entry| entry.matches(key))
    }
}

/// Shorthand for the static tables: code-keyed entries.
pub(crate) fn coded(entries: &[(&str, &str, &str)]) -> Vec<DictionaryValue> {
    entries
        .iter()
        .map(|(code, name, description)| DictionaryValue {
            id: DictionaryId::Code(code.to_string()),
            code: code.to_string(),
            name: name.to_string(),
            description: Some(description.to_string()),
            is_active: None,
        })
        .collect()
}

/// Shorthand for the static tables: numerically keyed entries.
pub(crate) fn numbered(entries: &[(i64, &str, &str, &str)]) -> Vec<DictionaryValue> {
    entries
        .iter()
        .map(|(id, code, name, description)| DictionaryValue {
            id: DictionaryId::Number(*id),
            code: code.to_string(),
            name: name.to_string(),
            description: Some(description.to_string()),
            is_active: None,
        })
        .collect()
}
