use crate::bag::display_value;
use ahash::{AHashMap, AHashSet};
use serde_json::Value;

/// Answers whether a value is unused across the persisted collection of an entity kind.
///
/// The transition engine only sees one entity's data bag, so `unique` conditions are
/// delegated to whatever the caller injects here.
pub trait UniquenessOracle: Send + Sync {
    fn is_unique(&self, field: &str, value: &Value) -> bool;
}

impl<F> UniquenessOracle for F
where
    F: Fn(&str, &Value) -> bool + Send + Sync,
{
    fn is_unique(&self, field: &str, value: &Value) -> bool {
        self(field, value)
    }
}

/// Approves every value without looking anything up.
///
/// This is the default so the engine works without a backing store, but it will let
/// duplicate identifiers (for example two invoices with the same number) through.
/// Inject a real oracle wherever duplicates matter.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeUnique;

impl UniquenessOracle for AssumeUnique {
    fn is_unique(&self, field: &str, value: &Value) -> bool {
        tracing::warn!(
            field,
            value = %display_value(value),
            "uniqueness assumed without a lookup"
        );
        true
    }
}

/// An in-memory oracle over values already taken, keyed by field.
#[derive(Debug, Clone, Default)]
pub struct TakenValues {
    taken: AHashMap<String, AHashSet<String>>,
}

impl TakenValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `value` as used for `field`. Returns `false` if it already was.
    pub fn register(&mut self, field: &str, value: &Value) -> bool {
        self.taken
            .entry(field.to_string())
            .or_default()
            .insert(value.to_string())
    }

    pub fn contains(&self, field: &str, value: &Value) -> bool {
        self.taken
            .get(field)
            .is_some_and(|values| values.contains(&value.to_string()))
    }
}

impl UniquenessOracle for TakenValues {
    fn is_unique(&self, field: &str, value: &Value) -> bool {
        !self.contains(field, value)
    }
}
