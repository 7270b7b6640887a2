//! Mapping between flat UI form fields and the nested storage records behind them.
//!
//! A [`BindingSet`] is checked once when it is built: patterns are compiled,
//! dependencies and dictionaries must resolve, and binding conditions may only use the
//! operators a form can meaningfully express.

pub mod defaults;
pub mod dictionary;
pub mod transform;

pub use dictionary::*;
pub use transform::*;

use crate::bag::{self, display_value, is_present};
use crate::condition::{Operator, evaluate};
use crate::error::{BindingError, LoadError};
use crate::validator::{IssueCode, ValidationIssue, ValidationResult};
use ahash::{AHashMap, AHashSet};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    String,
    Number,
    Boolean,
    Array,
    Object,
}

/// Per-field validation rules. Checks run in a fixed order and the first failure wins:
/// required, min, max, pattern, custom.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldValidation {
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    /// Programmatic predicate; cannot be expressed in JSON.
    #[serde(skip)]
    pub custom: Option<fn(&Value) -> bool>,
}

/// Visibility condition evaluated against the form data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BindingCondition {
    pub field: String,
    pub operator: Operator,
    #[serde(default)]
    pub value: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiFieldBinding {
    pub id: String,
    /// Name of the widget that renders the field. Form data is keyed by `id`.
    #[serde(alias = "uiField")]
    pub ui_field: String,
    #[serde(alias = "storagePath")]
    pub storage_path: String,
    #[serde(default)]
    pub dictionary: Option<String>,
    #[serde(alias = "dataType")]
    pub data_type: DataType,
    #[serde(default)]
    pub validation: Option<FieldValidation>,
    #[serde(default)]
    pub transform: Option<FieldTransform>,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub conditions: Vec<BindingCondition>,
}

#[derive(Deserialize)]
struct BindingConfig {
    bindings: Vec<UiFieldBinding>,
    #[serde(default)]
    dictionaries: Dictionaries,
}

/// A checked collection of field bindings and the dictionaries they reference.
#[derive(Debug, Clone)]
pub struct BindingSet {
    bindings: Vec<UiFieldBinding>,
    dictionaries: Dictionaries,
    patterns: AHashMap<String, Regex>,
}

impl BindingSet {
    pub fn new(
        bindings: Vec<UiFieldBinding>,
        dictionaries: Dictionaries,
    ) -> Result<Self, BindingError> {
        let ids: AHashSet<&str> = bindings.iter().map(|b| b.id.as_str()).collect();
        let mut seen = AHashSet::new();
        let mut patterns = AHashMap::new();

        for binding in &bindings {
            if !seen.insert(binding.id.as_str()) {
                return Err(BindingError::DuplicateId(binding.id.clone()));
            }
            if binding.storage_path.is_empty() {
                return Err(BindingError::EmptyStoragePath(binding.id.clone()));
            }
            if let Some(condition) = binding
                .conditions
                .iter()
                .find(|c| !c.operator.is_binding_operator())
            {
                return Err(BindingError::UnsupportedOperator {
                    binding: binding.id.clone(),
                    operator: condition.operator,
                });
            }
            if let Some(dependency) = binding
                .dependencies
                .iter()
                .find(|d| !ids.contains(d.as_str()))
            {
                return Err(BindingError::UnknownDependency {
                    binding: binding.id.clone(),
                    dependency: dependency.clone(),
                });
            }
            if let Some(dictionary) = &binding.dictionary
                && !dictionaries.contains(dictionary)
            {
                return Err(BindingError::UnknownDictionary {
                    binding: binding.id.clone(),
                    dictionary: dictionary.clone(),
                });
            }
            if let Some(pattern) = binding.validation.as_ref().and_then(|v| v.pattern.as_ref()) {
                let regex = Regex::new(pattern).map_err(|e| BindingError::InvalidPattern {
                    binding: binding.id.clone(),
                    pattern: pattern.clone(),
                    message: e.to_string(),
                })?;
                patterns.insert(binding.id.clone(), regex);
            }
        }

        tracing::info!(bindings = bindings.len(), "field bindings loaded");
        Ok(Self {
            bindings,
            dictionaries,
            patterns,
        })
    }

    /// The bindings of the service order form.
    pub fn order_form() -> Result<Self, BindingError> {
        Self::new(
            defaults::order_form_bindings(),
            defaults::order_form_dictionaries(),
        )
    }

    /// Parses `{"bindings": [...], "dictionaries": {...}}`.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let config: BindingConfig = serde_json::from_str(json)?;
        Ok(Self::new(config.bindings, config.dictionaries)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn bindings(&self) -> &[UiFieldBinding] {
        &self.bindings
    }

    pub fn binding(&self, id: &str) -> Option<&UiFieldBinding> {
        self.bindings.iter().find(|b| b.id == id)
    }

    pub fn dictionaries(&self) -> &Dictionaries {
        &self.dictionaries
    }

    /// Whether every visibility condition of the binding holds for `form`.
    pub fn is_visible(&self, binding: &UiFieldBinding, form: &Value) -> bool {
        binding
            .conditions
            .iter()
            .all(|c| evaluate(c.operator, bag::resolve(form, &c.field), &c.value))
    }

    /// Ids of visible bindings whose validation marks them required.
    pub fn required_fields(&self, form: &Value) -> Vec<&str> {
        self.bindings
            .iter()
            .filter(|b| b.validation.as_ref().is_some_and(|v| v.required))
            .filter(|b| self.is_visible(b, form))
            .map(|b| b.id.as_str())
            .collect()
    }

    pub fn visible_fields(&self, form: &Value) -> Vec<&str> {
        self.bindings
            .iter()
            .filter(|b| self.is_visible(b, form))
            .map(|b| b.id.as_str())
            .collect()
    }

    /// Writes each present form field to its storage path, applying input transforms.
    /// Empty strings, `null` and absent fields are skipped.
    pub fn form_to_storage(&self, form: &Value) -> Value {
        let mut storage = Value::Object(Map::new());
        for binding in &self.bindings {
            let Some(value) = form.get(&binding.id) else {
                continue;
            };
            if !is_present(Some(value)) {
                continue;
            }
            let stored = match binding.transform {
                Some(transform) => transform.input(value),
                None => value.clone(),
            };
            bag::insert(&mut storage, &binding.storage_path, stored);
        }
        storage
    }

    /// Reads each binding's storage path back into a flat form, applying output
    /// transforms. Absent paths are skipped.
    pub fn storage_to_form(&self, storage: &Value) -> Value {
        let mut form = Map::new();
        for binding in &self.bindings {
            let Some(value) = bag::lookup(storage, &binding.storage_path) else {
                continue;
            };
            let shown = match binding.transform {
                Some(transform) => transform.output(value),
                None => value.clone(),
            };
            form.insert(binding.id.clone(), shown);
        }
        Value::Object(form)
    }

    /// Applies a binding's transform; values pass through untouched when the binding is
    /// unknown or has none.
    pub fn transform_value(&self, id: &str, value: &Value, direction: Direction) -> Value {
        match self.binding(id).and_then(|b| b.transform) {
            Some(transform) => transform.apply(value, direction),
            None => value.clone(),
        }
    }

    /// Checks one value against its binding's rules. Unknown bindings and bindings
    /// without rules accept anything; an empty optional value is not checked further.
    pub fn validate_field(&self, id: &str, value: Option<&Value>) -> Result<(), ValidationIssue> {
        let Some(rules) = self.binding(id).and_then(|b| b.validation.as_ref()) else {
            return Ok(());
        };
        let fail = |fallback: String| {
            let message = rules.message.clone().unwrap_or(fallback);
            ValidationIssue::new(id, message, IssueCode::FieldInvalid)
        };

        let Some(value) = value.filter(|v| is_present(Some(*v))) else {
            return if rules.required {
                Err(fail("Field is required".to_string()))
            } else {
                Ok(())
            };
        };

        let number = numeric(value);
        if let (Some(min), Some(n)) = (rules.min, number)
            && n < min
        {
            return Err(fail(format!("Value must be at least {min}")));
        }
        if let (Some(max), Some(n)) = (rules.max, number)
            && n > max
        {
            return Err(fail(format!("Value must be at most {max}")));
        }
        if let Some(regex) = self.patterns.get(id)
            && !regex.is_match(&display_value(value))
        {
            return Err(fail("Invalid value format".to_string()));
        }
        if let Some(custom) = rules.custom
            && !custom(value)
        {
            return Err(fail("Invalid value".to_string()));
        }
        Ok(())
    }

    /// Validates every visible binding against the flat form.
    pub fn validate_form(&self, form: &Value) -> ValidationResult {
        let errors = self
            .bindings
            .iter()
            .filter(|b| self.is_visible(b, form))
            .filter_map(|b| self.validate_field(&b.id, form.get(&b.id)).err())
            .collect();
        let result = ValidationResult::from_errors(errors);
        tracing::debug!(errors = result.errors.len(), "form validated");
        result
    }

    pub fn field_dependencies(&self, id: &str) -> &[String] {
        self.binding(id).map_or(&[], |b| b.dependencies.as_slice())
    }

    pub fn dictionary_values(&self, name: &str) -> &[DictionaryValue] {
        self.dictionaries.values(name)
    }

    pub fn dictionary_value(&self, name: &str, key: &Value) -> Option<&DictionaryValue> {
        self.dictionaries.lookup(name, key)
    }
}

fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn field(id: &str) -> UiFieldBinding {
        UiFieldBinding {
            id: id.to_string(),
            ui_field: id.to_string(),
            storage_path: format!("record.{id}"),
            dictionary: None,
            data_type: DataType::String,
            validation: None,
            transform: None,
            dependencies: Vec::new(),
            conditions: Vec::new(),
        }
    }

    #[test]
    fn rejects_unknown_dependency() {
        let b = UiFieldBinding {
            dependencies: vec!["ghost".to_string()],
            ..field("a")
        };
        assert!(matches!(
            BindingSet::new(vec![b], Dictionaries::new()),
            Err(BindingError::UnknownDependency { .. })
        ));
    }

    #[test]
    fn rejects_operators_outside_the_form_subset() {
        let b = UiFieldBinding {
            conditions: vec![BindingCondition {
                field: "x".to_string(),
                operator: Operator::Range,
                value: json!([1, 2]),
            }],
            ..field("a")
        };
        assert!(matches!(
            BindingSet::new(vec![b], Dictionaries::new()),
            Err(BindingError::UnsupportedOperator { .. })
        ));
    }

    #[test]
    fn rejects_bad_pattern() {
        let b = UiFieldBinding {
            validation: Some(FieldValidation {
                pattern: Some("(".to_string()),
                ..FieldValidation::default()
            }),
            ..field("a")
        };
        assert!(matches!(
            BindingSet::new(vec![b], Dictionaries::new()),
            Err(BindingError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn custom_rule_runs_last() {
        fn even(v: &Value) -> bool {
            v.as_i64().is_some_and(|n| n % 2 == 0)
        }
        let b = UiFieldBinding {
            validation: Some(FieldValidation {
                max: Some(10.0),
                custom: Some(even),
                ..FieldValidation::default()
            }),
            ..field("a")
        };
        let set = BindingSet::new(vec![b], Dictionaries::new()).unwrap();
        assert!(set.validate_field("a", Some(&json!(4))).is_ok());
        assert_eq!(
            set.validate_field("a", Some(&json!(3))).unwrap_err().message,
            "Invalid value"
        );
        assert_eq!(
            set.validate_field("a", Some(&json!(12))).unwrap_err().message,
            "Value must be at most 10"
        );
    }
}
