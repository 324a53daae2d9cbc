//! Paid interventions on a single object.
//!
//! The caller checks and deducts capital; this module only rolls for
//! success and applies the effect.

use serde::{Deserialize, Serialize};

use crate::celestial::CelestialObject;
use crate::random::RandomSource;
use crate::simulation::{EventKind, SimEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intervention {
    /// Economic value ×1.1.
    Invest,
    /// Threat level −0.1, floored at 0.
    Defend,
    /// Resource potential +0.05, capped at 1.
    Explore,
}

impl Intervention {
    /// Capital charged whether or not the intervention succeeds.
    pub fn cost(self) -> f64 {
        match self {
            Intervention::Invest => 100_000.0,
            Intervention::Defend => 75_000.0,
            Intervention::Explore => 50_000.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Intervention::Invest => "Invest in Economy",
            Intervention::Defend => "Bolster Defenses",
            Intervention::Explore => "Fund Exploration",
        }
    }

    /// Apply the effect unconditionally and describe it.
    fn apply(self, object: &mut CelestialObject) -> String {
        let name = object.name().to_string();
        let common = object.common_mut();
        match self {
            Intervention::Invest => {
                common.economic_value = Some(common.economic_value.unwrap_or(0.0) * 1.1);
                format!("Investment in {name} boosted economic value.")
            }
            Intervention::Defend => {
                common.threat_level = Some((common.threat_level.unwrap_or(0.0) - 0.1).max(0.0));
                format!("Defenses bolstered at {name}, reducing threat.")
            }
            Intervention::Explore => {
                common.resource_potential =
                    Some((common.resource_potential.unwrap_or(0.0) + 0.05).min(1.0));
                format!("Exploration at {name} yielded new resource potential.")
            }
        }
    }
}

/// Roll for success and, on success, apply `action` to `object`.
///
/// Always returns one event for the log; a failure leaves the object as it
/// was.
pub fn resolve_intervention(
    object: &mut CelestialObject,
    action: Intervention,
    year: i64,
    success_chance: f64,
    rng: &mut dyn RandomSource,
) -> SimEvent {
    if rng.chance(success_chance) {
        let message = action.apply(object);
        SimEvent::for_object(year, EventKind::Intervention, object, message)
    } else {
        let message = format!(
            "Strategic intervention at {} failed. Capital lost.",
            object.name()
        );
        SimEvent::for_object(year, EventKind::InterventionFailed, object, message)
    }
}
