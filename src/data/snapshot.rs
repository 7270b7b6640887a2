use crate::error::LoadError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
struct RawSnapshot {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    data: Value,
}

/// An entity's current status together with its data bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySnapshot {
    pub status: String,
    pub data: Value,
}

impl EntitySnapshot {
    pub fn new(status: impl Into<String>, data: Value) -> Self {
        Self {
            status: status.into(),
            data,
        }
    }

    /// Parses `{"status": ..., "data": {...}}`. When `status` is omitted it is read from
    /// `data.status`.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let raw: RawSnapshot = serde_json::from_str(json)?;
        let status = raw
            .status
            .or_else(|| raw.data.get("status")?.as_str().map(str::to_string))
            .ok_or(LoadError::MissingStatus)?;
        Ok(Self {
            status,
            data: raw.data,
        })
    }

    /// Load a snapshot from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }
}
