//! Whole-dataset ranking pass.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::celestial::CelestialObject;
use crate::scoring::{score_object, ScoredResult};
use crate::weights::WeightsConfig;

/// Results of one pass, best first, with the wall-clock completion time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingPass {
    pub results: Vec<ScoredResult>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankingError {
    /// A NaN input (threat level, variability) poisoned the composite.
    #[error("composite score for object {id} is not a finite number")]
    NonFiniteScore { id: String },
}

/// Score every object and sort by composite score, highest first.
///
/// The sort is stable: equal scores keep dataset order. An empty dataset
/// yields an empty list.
pub fn rank_objects(
    dataset: &[CelestialObject],
    weights: &WeightsConfig,
) -> Result<Vec<ScoredResult>, RankingError> {
    let mut results = Vec::with_capacity(dataset.len());
    for object in dataset {
        let scored = score_object(object, weights);
        if !scored.composite.is_finite() {
            return Err(RankingError::NonFiniteScore { id: scored.id });
        }
        results.push(scored);
    }
    results.sort_by(|a, b| b.composite.total_cmp(&a.composite));
    Ok(results)
}

/// [`rank_objects`] stamped with the current time.
pub fn compute_rankings(
    dataset: &[CelestialObject],
    weights: &WeightsConfig,
) -> Result<RankingPass, RankingError> {
    let results = rank_objects(dataset, weights)?;
    Ok(RankingPass {
        results,
        timestamp: Utc::now(),
    })
}
