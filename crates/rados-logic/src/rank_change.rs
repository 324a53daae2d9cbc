//! Rank movement between two consecutive ranking passes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::scoring::ScoredResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankChange {
    Up,
    Down,
    #[serde(rename = "none")]
    Unchanged,
}

/// Object id -> movement. Replaced wholesale after every pass.
pub type RankChangeMap = HashMap<String, RankChange>;

/// Classify every object in `current` against its position in `previous`.
///
/// Objects new to the ranking (or with no previous ranking at all) are
/// unchanged. Objects that dropped out of `current` get no entry.
pub fn track_rank_changes(previous: &[ScoredResult], current: &[ScoredResult]) -> RankChangeMap {
    let old_ranks: HashMap<&str, usize> = previous
        .iter()
        .enumerate()
        .map(|(i, r)| (r.id.as_str(), i))
        .collect();

    current
        .iter()
        .enumerate()
        .map(|(new_rank, r)| {
            let change = match old_ranks.get(r.id.as_str()) {
                Some(&old_rank) if new_rank < old_rank => RankChange::Up,
                Some(&old_rank) if new_rank > old_rank => RankChange::Down,
                _ => RankChange::Unchanged,
            };
            (r.id.clone(), change)
        })
        .collect()
}
