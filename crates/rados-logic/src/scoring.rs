//! Composite scoring of a single object.
//!
//! Star systems combine four sub-indices, galaxies three; both are scaled by
//! the threat modifier afterwards. Every surfaced index and the composite are
//! rounded to 4 decimal places. Scoring is deterministic and stateless.

use serde::{Deserialize, Serialize};

use crate::celestial::{CelestialObject, Coordinates, Galaxy, ObjectKind, ObjectStatus, StarSystem};
use crate::indices::{
    economic_index, energy_availability_index, habitability_potential_index,
    megastructure_feasibility_index, round4, threat_modifier,
};
use crate::weights::{GalaxyWeights, StarSystemWeights, WeightsConfig};

/// Annual income per currency unit of economic value.
pub const INCOME_RATE: f64 = 1e-10;

/// One object's scored view. Regenerated wholesale on every ranking pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredResult {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ObjectKind,
    #[serde(rename = "EAI")]
    pub eai: f64,
    /// Best planet's habitability; `None` for galaxies.
    #[serde(rename = "HPI_best", default, skip_serializing_if = "Option::is_none")]
    pub hpi_best: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_planet: Option<String>,
    #[serde(rename = "MFI")]
    pub mfi: f64,
    #[serde(rename = "ECI")]
    pub eci: f64,
    /// The composite ranking key.
    #[serde(rename = "ERVINREMUS")]
    pub composite: f64,
    pub economic_value: Option<f64>,
    pub threat_level: Option<f64>,
    pub status: Option<ObjectStatus>,
    pub income: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(rename = "isProcedural", default)]
    pub is_procedural: bool,
    #[serde(rename = "isAcquired", default)]
    pub is_acquired: bool,
}

impl ScoredResult {
    /// Habitability as a sortable number (galaxies count as 0).
    pub fn hpi_or_zero(&self) -> f64 {
        self.hpi_best.unwrap_or(0.0)
    }
}

/// Passive income an object yields per simulated year.
pub fn income(economic_value: Option<f64>) -> f64 {
    economic_value.unwrap_or(0.0) * INCOME_RATE
}

/// Score any object with the weight vector for its kind.
pub fn score_object(object: &CelestialObject, weights: &WeightsConfig) -> ScoredResult {
    match object {
        CelestialObject::StarSystem(system) => score_star_system(system, &weights.star_system),
        CelestialObject::Galaxy(galaxy) => score_galaxy(galaxy, &weights.galaxy),
    }
}

/// Score a star system. The best planet's HPI stands in for the system;
/// the first planet reaching the maximum wins ties.
pub fn score_star_system(system: &StarSystem, weights: &StarSystemWeights) -> ScoredResult {
    let common = &system.common;
    let eai = energy_availability_index(system.star_l_lsun);

    let mut hpi_best = 0.0;
    let mut best_planet = None;
    for planet in &system.planets {
        let hpi = habitability_potential_index(planet.insolation_s_earth, planet.eq_temp_k);
        if hpi > hpi_best {
            hpi_best = hpi;
            best_planet = Some(planet.name.clone());
        }
    }

    let mfi = megastructure_feasibility_index(system.star_l_lsun, common.variability);
    let eci = economic_index(common.economic_value);
    let threat = threat_modifier(common.threat_level);

    let raw = weights.w_eai * eai
        + weights.w_hpi * hpi_best
        + weights.w_mfi * mfi
        + weights.w_eci * eci;

    ScoredResult {
        id: common.id.clone(),
        name: common.name.clone(),
        kind: ObjectKind::StarSystem,
        eai: round4(eai),
        hpi_best: Some(round4(hpi_best)),
        best_planet,
        mfi: round4(mfi),
        eci: round4(eci),
        composite: round4(raw * threat),
        economic_value: common.economic_value,
        threat_level: common.threat_level,
        status: common.status,
        income: income(common.economic_value),
        coordinates: None,
        is_procedural: common.is_procedural,
        is_acquired: false,
    }
}

/// Score a galaxy: no habitability term.
pub fn score_galaxy(galaxy: &Galaxy, weights: &GalaxyWeights) -> ScoredResult {
    let common = &galaxy.common;
    let eai = energy_availability_index(galaxy.total_l_lsun);
    let mfi = megastructure_feasibility_index(galaxy.total_l_lsun, common.variability);
    let eci = economic_index(common.economic_value);
    let threat = threat_modifier(common.threat_level);

    let raw = weights.w_eai * eai + weights.w_mfi * mfi + weights.w_eci * eci;

    ScoredResult {
        id: common.id.clone(),
        name: common.name.clone(),
        kind: ObjectKind::Galaxy,
        eai: round4(eai),
        hpi_best: None,
        best_planet: None,
        mfi: round4(mfi),
        eci: round4(eci),
        composite: round4(raw * threat),
        economic_value: common.economic_value,
        threat_level: common.threat_level,
        status: common.status,
        income: income(common.economic_value),
        coordinates: None,
        is_procedural: common.is_procedural,
        is_acquired: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::celestial::{ObjectCommon, Planet};

    fn planet(name: &str, insolation: f64, temp: f64) -> Planet {
        Planet {
            name: name.to_string(),
            insolation_s_earth: Some(insolation),
            eq_temp_k: Some(temp),
            ..Default::default()
        }
    }

    fn kepler() -> StarSystem {
        StarSystem {
            common: ObjectCommon {
                id: "k452".into(),
                name: "Kepler-452 System".into(),
                variability: Some(0.02),
                threat_level: Some(0.1),
                resource_potential: Some(0.8),
                economic_value: Some(1.5e12),
                ..Default::default()
            },
            star_l_lsun: Some(1.2),
            planets: vec![planet("Kepler-452 b", 1.1, 265.0)],
        }
    }

    #[test]
    fn test_kepler_scores() {
        let r = score_star_system(&kepler(), &StarSystemWeights::default());
        assert_eq!(r.kind, ObjectKind::StarSystem);
        assert_eq!(r.eai, 0.2549);
        assert_eq!(r.hpi_best, Some(0.6847));
        assert_eq!(r.best_planet.as_deref(), Some("Kepler-452 b"));
        assert_eq!(r.mfi, 0.4725);
        assert_eq!(r.eci, 0.3529);
        assert_eq!(r.composite, 0.4143);
        assert_eq!(r.income, 150.0);
    }

    #[test]
    fn test_best_planet_first_maximum_wins() {
        let mut sys = kepler();
        sys.planets = vec![
            planet("cold", 0.38, 219.0),
            planet("twin-a", 1.0, 288.0),
            planet("twin-b", 1.0, 288.0),
        ];
        let r = score_star_system(&sys, &StarSystemWeights::default());
        assert_eq!(r.best_planet.as_deref(), Some("twin-a"));
        assert_eq!(r.hpi_best, Some(1.0));
    }

    #[test]
    fn test_no_planets() {
        let mut sys = kepler();
        sys.planets.clear();
        let r = score_star_system(&sys, &StarSystemWeights::default());
        assert_eq!(r.hpi_best, Some(0.0));
        assert_eq!(r.best_planet, None);
    }

    #[test]
    fn test_planet_without_data_is_never_best() {
        let mut sys = kepler();
        sys.planets = vec![Planet {
            name: "unknown".into(),
            ..Default::default()
        }];
        let r = score_star_system(&sys, &StarSystemWeights::default());
        assert_eq!(r.best_planet, None);
    }

    #[test]
    fn test_galaxy_ignores_habitability() {
        let galaxy = Galaxy {
            common: ObjectCommon {
                id: "m81".into(),
                name: "Messier 81 (M81)".into(),
                variability: Some(0.2),
                threat_level: Some(0.3),
                economic_value: Some(2.2e15),
                ..Default::default()
            },
            total_l_lsun: Some(5.0e10),
        };
        let r = score_galaxy(&galaxy, &GalaxyWeights::default());
        assert_eq!(r.kind, ObjectKind::Galaxy);
        assert_eq!(r.hpi_best, None);
        assert_eq!(r.eai, 0.9187);
        assert_eq!(r.mfi, 0.8831);
        assert_eq!(r.eci, 0.7047);
        assert_eq!(r.composite, 0.7309);
    }

    #[test]
    fn test_max_threat_halves_score() {
        let mut calm = kepler();
        calm.common.threat_level = Some(0.0);
        let mut hostile = kepler();
        hostile.common.threat_level = Some(1.0);
        let w = StarSystemWeights::default();
        let a = score_star_system(&calm, &w).composite;
        let b = score_star_system(&hostile, &w).composite;
        assert!((a / 2.0 - b).abs() < 1e-4);
    }

    #[test]
    fn test_score_object_dispatch() {
        let obj = CelestialObject::StarSystem(kepler());
        let r = score_object(&obj, &WeightsConfig::default());
        assert_eq!(r.id, "k452");
        assert_eq!(r.kind, ObjectKind::StarSystem);
    }

    #[test]
    fn test_result_json_keys() {
        let r = score_star_system(&kepler(), &StarSystemWeights::default());
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["ERVINREMUS"], 0.4143);
        assert_eq!(json["HPI_best"], 0.6847);
        assert_eq!(json["type"], "star_system");
    }
}
