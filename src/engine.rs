use crate::catalog::{Catalog, EntityKind, Transition};
use crate::condition::{AssumeUnique, EvaluationContext, UniquenessOracle};
use crate::error::CatalogError;
use crate::validator::{Availability, TransitionValidator, Unavailable, ValidationResult};
use chrono::{Local, NaiveDate};
use serde_json::Value;

/// The three lifecycle catalogs together with the evaluation context they run under.
pub struct LifecycleEngine {
    cart: Catalog,
    order: Catalog,
    overhead: Catalog,
    today: Option<NaiveDate>,
    uniqueness: Box<dyn UniquenessOracle>,
}

pub struct LifecycleEngineBuilder {
    cart: Option<Catalog>,
    order: Option<Catalog>,
    overhead: Option<Catalog>,
    today: Option<NaiveDate>,
    uniqueness: Box<dyn UniquenessOracle>,
}

impl LifecycleEngineBuilder {
    pub fn new() -> Self {
        Self {
            cart: None,
            order: None,
            overhead: None,
            today: None,
            uniqueness: Box::new(AssumeUnique),
        }
    }

    /// Replaces the built-in catalog for the catalog's own kind.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        let slot = match catalog.kind() {
            EntityKind::Cart => &mut self.cart,
            EntityKind::Order => &mut self.order,
            EntityKind::Overhead => &mut self.overhead,
        };
        *slot = Some(catalog);
        self
    }

    /// Pins the date `"today"` operands compare against. Without it the local date at
    /// the moment of each validation is used.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn with_uniqueness(mut self, oracle: impl UniquenessOracle + 'static) -> Self {
        self.uniqueness = Box::new(oracle);
        self
    }

    /// Fills every kind without an override from the built-in catalogs.
    pub fn build(self) -> Result<LifecycleEngine, CatalogError> {
        let fill = |catalog: Option<Catalog>, kind| match catalog {
            Some(catalog) => Ok(catalog),
            None => Catalog::builtin(kind),
        };
        Ok(LifecycleEngine {
            cart: fill(self.cart, EntityKind::Cart)?,
            order: fill(self.order, EntityKind::Order)?,
            overhead: fill(self.overhead, EntityKind::Overhead)?,
            today: self.today,
            uniqueness: self.uniqueness,
        })
    }
}

impl Default for LifecycleEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LifecycleEngine {
    pub fn builder() -> LifecycleEngineBuilder {
        LifecycleEngineBuilder::new()
    }

    pub fn catalog(&self, kind: EntityKind) -> &Catalog {
        match kind {
            EntityKind::Cart => &self.cart,
            EntityKind::Order => &self.order,
            EntityKind::Overhead => &self.overhead,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn validator(&self) -> TransitionValidator<'_> {
        TransitionValidator::new(EvaluationContext::new(
            self.today(),
            self.uniqueness.as_ref(),
        ))
    }

    pub fn transition(&self, kind: EntityKind, id: &str) -> Option<&Transition> {
        self.catalog(kind).transition(id)
    }

    pub fn validate(&self, kind: EntityKind, id: &str, data: &Value) -> ValidationResult {
        self.validator().validate_by_id(self.catalog(kind), id, data)
    }

    pub fn can_transition(
        &self,
        kind: EntityKind,
        current: &str,
        target: &str,
        data: &Value,
    ) -> ValidationResult {
        self.validator()
            .can_transition(self.catalog(kind), current, target, data)
    }

    pub fn availability(&self, kind: EntityKind, status: &str, data: &Value) -> Availability<'_> {
        self.validator()
            .availability(self.catalog(kind), status, data)
    }

    pub fn available_transitions(
        &self,
        kind: EntityKind,
        status: &str,
        data: &Value,
    ) -> Vec<&Transition> {
        self.availability(kind, status, data).available
    }

    pub fn unavailable_transitions(
        &self,
        kind: EntityKind,
        status: &str,
        data: &Value,
    ) -> Vec<Unavailable<'_>> {
        self.availability(kind, status, data).unavailable
    }
}

impl std::fmt::Debug for LifecycleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LifecycleEngine")
            .field("cart", &self.cart.transitions().len())
            .field("order", &self.order.transitions().len())
            .field("overhead", &self.overhead.transitions().len())
            .field("today", &self.today)
            .finish_non_exhaustive()
    }
}
