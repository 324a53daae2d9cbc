//! Weight vectors for the composite score and the interactive renormalizer.
//!
//! Each vector must sum to 1. Changing one component goes through
//! [`redistribute`]: the difference is taken proportionally from the other
//! components, negatives are clamped away, and a final division by the new
//! total restores the unit sum. Repeated slider moves follow this exact
//! trajectory; subtracting evenly from the others would not.

use serde::{Deserialize, Serialize};

/// Weights for star systems (four sub-indices).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StarSystemWeights {
    pub w_eai: f64,
    pub w_hpi: f64,
    pub w_mfi: f64,
    pub w_eci: f64,
}

/// Weights for galaxies (no habitability term).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GalaxyWeights {
    pub w_eai: f64,
    pub w_mfi: f64,
    pub w_eci: f64,
}

/// Both weight vectors, as stored alongside a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightsConfig {
    pub star_system: StarSystemWeights,
    pub galaxy: GalaxyWeights,
}

/// Adjustable component of [`StarSystemWeights`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StarSystemWeight {
    Energy,
    Habitability,
    Feasibility,
    Economic,
}

/// Adjustable component of [`GalaxyWeights`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GalaxyWeight {
    Energy,
    Feasibility,
    Economic,
}

impl Default for StarSystemWeights {
    fn default() -> Self {
        Self {
            w_eai: 0.35,
            w_hpi: 0.30,
            w_mfi: 0.15,
            w_eci: 0.20,
        }
    }
}

impl Default for GalaxyWeights {
    fn default() -> Self {
        Self {
            w_eai: 0.6,
            w_mfi: 0.15,
            w_eci: 0.25,
        }
    }
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            star_system: StarSystemWeights::default(),
            galaxy: GalaxyWeights::default(),
        }
    }
}

impl StarSystemWeights {
    pub fn to_array(self) -> [f64; 4] {
        [self.w_eai, self.w_hpi, self.w_mfi, self.w_eci]
    }

    pub fn from_array(w: [f64; 4]) -> Self {
        Self {
            w_eai: w[0],
            w_hpi: w[1],
            w_mfi: w[2],
            w_eci: w[3],
        }
    }

    pub fn sum(&self) -> f64 {
        self.to_array().iter().sum()
    }

    /// Set one component and renormalize the rest. See [`redistribute`].
    pub fn with_component(self, key: StarSystemWeight, value: f64) -> Self {
        let index = match key {
            StarSystemWeight::Energy => 0,
            StarSystemWeight::Habitability => 1,
            StarSystemWeight::Feasibility => 2,
            StarSystemWeight::Economic => 3,
        };
        Self::from_array(redistribute(self.to_array(), index, value))
    }
}

impl GalaxyWeights {
    pub fn to_array(self) -> [f64; 3] {
        [self.w_eai, self.w_mfi, self.w_eci]
    }

    pub fn from_array(w: [f64; 3]) -> Self {
        Self {
            w_eai: w[0],
            w_mfi: w[1],
            w_eci: w[2],
        }
    }

    pub fn sum(&self) -> f64 {
        self.to_array().iter().sum()
    }

    /// Set one component and renormalize the rest. See [`redistribute`].
    pub fn with_component(self, key: GalaxyWeight, value: f64) -> Self {
        let index = match key {
            GalaxyWeight::Energy => 0,
            GalaxyWeight::Feasibility => 1,
            GalaxyWeight::Economic => 2,
        };
        Self::from_array(redistribute(self.to_array(), index, value))
    }
}

/// Set `weights[changed]` to `value` and renormalize so the vector sums to 1.
///
/// 1. `diff = value - old`; every other component gives up `diff` in
///    proportion to its share of the others' total (skipped when that total
///    is 0).
/// 2. Negative components are clamped to 0.
/// 3. Every component is divided by the new total.
///
/// `value` is clamped to [0,1] first. If the result would be all zeros the
/// vector is returned unchanged. Pushing one weight to 1.0 drives the others
/// toward 0; the clamp-then-divide sequence only reaches the extreme in the
/// limit.
pub fn redistribute<const N: usize>(weights: [f64; N], changed: usize, value: f64) -> [f64; N] {
    let value = value.clamp(0.0, 1.0);
    let diff = value - weights[changed];
    let other_sum: f64 = weights
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != changed)
        .map(|(_, w)| *w)
        .sum();

    let mut next = weights;
    next[changed] = value;

    if other_sum > 0.0 {
        for (i, w) in next.iter_mut().enumerate() {
            if i == changed {
                continue;
            }
            let proportion = weights[i] / other_sum;
            *w = (*w - diff * proportion).max(0.0);
        }
    }

    let total: f64 = next.iter().sum();
    if total <= 0.0 {
        return weights;
    }
    for w in next.iter_mut() {
        *w /= total;
    }
    next
}
