//! Declarative transition tables, one per entity kind, plus the service combination
//! and invoice type tables.

pub mod cart;
mod check;
pub mod combinations;
pub mod entity;
pub mod order;
pub mod overhead;
pub mod overhead_types;
pub mod transition;

pub use combinations::{ServiceCombination, service_combination, validate_service_combination};
pub use entity::*;
pub use overhead_types::{OverheadType, overhead_type, validate_overhead_type};
pub use transition::*;

use crate::error::{CatalogError, LoadError};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// An immutable, self-checked table of transitions for one entity kind.
///
/// Declaration order is preserved everywhere: it decides the order in which the UI
/// offers transitions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    kind: EntityKind,
    transitions: Vec<Transition>,
}

impl Catalog {
    /// Builds a catalog, failing fast if the table is malformed.
    pub fn new(kind: EntityKind, transitions: Vec<Transition>) -> Result<Self, CatalogError> {
        check::check_transitions(kind, &transitions)?;
        tracing::info!(%kind, transitions = transitions.len(), "transition catalog loaded");
        Ok(Self { kind, transitions })
    }

    /// The catalog shipped with the crate for `kind`.
    pub fn builtin(kind: EntityKind) -> Result<Self, CatalogError> {
        let transitions = match kind {
            EntityKind::Cart => cart::transitions(),
            EntityKind::Order => order::transitions(),
            EntityKind::Overhead => overhead::transitions(),
        };
        Self::new(kind, transitions)
    }

    /// Parses a JSON array of transitions.
    pub fn from_json(kind: EntityKind, json: &str) -> Result<Self, LoadError> {
        let transitions: Vec<Transition> = serde_json::from_str(json)?;
        Ok(Self::new(kind, transitions)?)
    }

    /// Loads a catalog from a JSON file.
    pub fn from_file(kind: EntityKind, path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(kind, &content)
    }

    /// Re-runs the load-time self-check.
    pub fn check(&self) -> Result<(), CatalogError> {
        check::check_transitions(self.kind, &self.transitions)
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn states(&self) -> &'static [&'static str] {
        self.kind.states()
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn transition(&self, id: &str) -> Option<&Transition> {
        self.transitions.iter().find(|t| t.id == id)
    }

    pub fn transitions_from(&self, status: &str) -> impl Iterator<Item = &Transition> {
        self.transitions.iter().filter(move |t| t.from == status)
    }

    pub fn transitions_to(&self, status: &str) -> impl Iterator<Item = &Transition> {
        self.transitions.iter().filter(move |t| t.to == status)
    }

    /// Whether the graph has an edge `from -> to`, regardless of its conditions.
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.transitions
            .iter()
            .any(|t| t.from == from && t.to == to)
    }
}
