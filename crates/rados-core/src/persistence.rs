//! Save/Load functionality for persisting engine state
//!
//! Save files are versioned JSON. The dataset uses an internally tagged
//! object kind, which needs a self-describing format, so the same encoding
//! serves saves, snapshots and plain dataset import/export.

use std::collections::BTreeSet;
use std::io::{Read, Write};

use chrono::{DateTime, Utc};
use rados_logic::celestial::{duplicate_id, CelestialObject};
use rados_logic::config::SimulationConfig;
use rados_logic::simulation::EventLog;
use rados_logic::views::ViewState;
use rados_logic::weights::WeightsConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Version number for save file format (increment when format changes)
pub const SAVE_VERSION: u32 = 1;

/// Serializable snapshot of the engine state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveData {
    /// Save format version
    pub version: u32,
    pub dataset: Vec<CelestialObject>,
    pub weights: WeightsConfig,
    /// Simulated year
    pub year: i64,
    pub capital: f64,
    /// Ids of owned objects
    pub acquired: BTreeSet<String>,
    pub event_log: EventLog,
    /// Completion time of the ranking shown when the state was saved
    pub rankings_timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub view: ViewState,
}

/// Write `data` to `writer`, stamping the current format version.
pub fn save_state<W: Write>(writer: W, data: &SaveData) -> Result<(), SaveError> {
    let data = SaveData {
        version: SAVE_VERSION,
        ..data.clone()
    };
    serde_json::to_writer(writer, &data)?;
    Ok(())
}

/// Read a save written by [`save_state`].
///
/// The version is checked before the body is decoded so an older file
/// reports a mismatch rather than a missing field.
pub fn load_state<R: Read>(reader: R) -> Result<SaveData, SaveError> {
    let value: serde_json::Value = serde_json::from_reader(reader)?;
    let found = value
        .get("version")
        .and_then(serde_json::Value::as_u64)
        .unwrap_or(0);
    if found != u64::from(SAVE_VERSION) {
        return Err(SaveError::VersionMismatch {
            expected: SAVE_VERSION,
            found: u32::try_from(found).unwrap_or(u32::MAX),
        });
    }
    Ok(serde_json::from_value(value)?)
}

/// Parse a bare JSON array of objects. Ids must be unique.
pub fn load_dataset_json(json: &str) -> Result<Vec<CelestialObject>, SaveError> {
    let dataset: Vec<CelestialObject> = serde_json::from_str(json)?;
    if let Some(id) = duplicate_id(&dataset) {
        return Err(SaveError::DuplicateId(id.to_string()));
    }
    Ok(dataset)
}

/// Pretty-printed JSON array, loadable by [`load_dataset_json`].
pub fn dataset_to_json(dataset: &[CelestialObject]) -> Result<String, SaveError> {
    Ok(serde_json::to_string_pretty(dataset)?)
}

/// Parse a simulation config. Missing fields take their defaults.
pub fn load_config_json(json: &str) -> Result<SimulationConfig, SaveError> {
    Ok(serde_json::from_str(json)?)
}

/// Errors that can occur during save/load
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Save version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },
    #[error("Duplicate object id {0} in dataset")]
    DuplicateId(String),
}
