//! Read-side helpers over a ranking: sorting, search, comparison, map.

use serde::{Deserialize, Serialize};

use crate::celestial::{Coordinates, ObjectKind};
use crate::random::RandomSource;
use crate::scoring::ScoredResult;

/// Objects that can sit side by side in the comparison view.
pub const MAX_COMPARE_ITEMS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    #[serde(rename = "ERVINREMUS")]
    Composite,
    #[serde(rename = "EAI")]
    Energy,
    #[serde(rename = "HPI_best")]
    Habitability,
    #[serde(rename = "MFI")]
    Feasibility,
    #[serde(rename = "ECI")]
    Economic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            key: SortKey::Composite,
            direction: SortDirection::Desc,
        }
    }
}

impl SortConfig {
    /// Choosing the active key again flips direction; a new key starts
    /// descending.
    pub fn toggled(self, key: SortKey) -> Self {
        let direction = if self.key == key && self.direction == SortDirection::Desc {
            SortDirection::Asc
        } else {
            SortDirection::Desc
        };
        Self { key, direction }
    }
}

impl SortKey {
    pub fn value(self, result: &ScoredResult) -> f64 {
        match self {
            SortKey::Composite => result.composite,
            SortKey::Energy => result.eai,
            SortKey::Habitability => result.hpi_or_zero(),
            SortKey::Feasibility => result.mfi,
            SortKey::Economic => result.eci,
        }
    }
}

/// Stable sort by the configured key.
pub fn sort_results(results: &mut [ScoredResult], config: SortConfig) {
    results.sort_by(|a, b| {
        let (a, b) = (config.key.value(a), config.key.value(b));
        match config.direction {
            SortDirection::Asc => a.total_cmp(&b),
            SortDirection::Desc => b.total_cmp(&a),
        }
    });
}

/// Case-insensitive name search. An empty query matches everything.
pub fn filter_by_name<'a>(results: &'a [ScoredResult], query: &str) -> Vec<&'a ScoredResult> {
    let needle = query.to_lowercase();
    results
        .iter()
        .filter(|r| needle.is_empty() || r.name.to_lowercase().contains(&needle))
        .collect()
}

/// Split into (star systems, galaxies), preserving order.
pub fn split_by_kind<'a, I>(results: I) -> (Vec<&'a ScoredResult>, Vec<&'a ScoredResult>)
where
    I: IntoIterator<Item = &'a ScoredResult>,
{
    results
        .into_iter()
        .partition(|r| r.kind == ObjectKind::StarSystem)
}

/// Give every result without a map position a uniform random one.
pub fn place_on_starmap(results: &mut [ScoredResult], rng: &mut dyn RandomSource) {
    for result in results.iter_mut().filter(|r| r.coordinates.is_none()) {
        let x = rng.next_f64();
        let y = rng.next_f64();
        result.coordinates = Some(Coordinates { x, y });
    }
}

/// Ordered set of object ids chosen for side-by-side comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonList {
    ids: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonToggle {
    Added,
    Removed,
    /// Already holding [`MAX_COMPARE_ITEMS`].
    Full,
}

impl ComparisonList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the id if absent, remove it if present.
    pub fn toggle(&mut self, id: &str) -> ComparisonToggle {
        if let Some(pos) = self.ids.iter().position(|i| i == id) {
            self.ids.remove(pos);
            ComparisonToggle::Removed
        } else if self.ids.len() >= MAX_COMPARE_ITEMS {
            ComparisonToggle::Full
        } else {
            self.ids.push(id.to_string());
            ComparisonToggle::Added
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|i| i == id)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// The compared results, in comparison order.
    pub fn resolve<'a>(&self, results: &'a [ScoredResult]) -> Vec<&'a ScoredResult> {
        self.ids
            .iter()
            .filter_map(|id| results.iter().find(|r| &r.id == id))
            .collect()
    }
}

/// Presentation state that travels with a saved snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewState {
    pub star_system_sort: SortConfig,
    pub galaxy_sort: SortConfig,
    pub search_query: String,
    pub comparison: ComparisonList,
}
