//! Bundled three-object dataset used on a fresh start.

use rados_logic::celestial::CelestialObject;

use crate::persistence::{load_dataset_json, SaveError};

const EXAMPLE_DATASET: &str = include_str!("../../../data/example_dataset.json");

/// Kepler-452, TRAPPIST-1 and Messier 81.
pub fn example_dataset() -> Result<Vec<CelestialObject>, SaveError> {
    load_dataset_json(EXAMPLE_DATASET)
}
