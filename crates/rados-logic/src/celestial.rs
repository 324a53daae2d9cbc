//! Raw dataset types: star systems, galaxies and their planets.
//!
//! Field names follow the JSON snapshot format exactly (`star_l_lsun`,
//! `eq_temp_K`, ...) so saved datasets load without a translation layer.
//! The object kind is carried in a `"type"` tag and never changes after
//! creation.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A planet orbiting a star system.
///
/// Only insolation and equilibrium temperature feed the scoring; the rest is
/// carried through for display and for future indices.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub name: String,
    /// Stellar flux relative to Earth (1.0 = Earth).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insolation_s_earth: Option<f64>,
    /// Equilibrium temperature in Kelvin.
    #[serde(rename = "eq_temp_K", default, skip_serializing_if = "Option::is_none")]
    pub eq_temp_k: Option<f64>,
    /// Radius in Earth radii.
    #[serde(rename = "radius_Re", default, skip_serializing_if = "Option::is_none")]
    pub radius_re: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orbital_period_days: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semi_major_axis_au: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_potential: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub economic_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threat_level: Option<f64>,
}

/// Transient flag raised by anomaly events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectStatus {
    Suspect,
}

/// Fields shared by every object kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectCommon {
    /// Unique within a dataset, never reassigned.
    pub id: String,
    pub name: String,
    /// Luminosity variability, 0..1. Scoring assumes 0.5 when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variability: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_potential: Option<f64>,
    /// Currency units, >= 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub economic_value: Option<f64>,
    /// 0..1; 1.0 halves the composite score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threat_level: Option<f64>,
    #[serde(default)]
    pub status: Option<ObjectStatus>,
    /// Year at which `status` clears itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_expiry_year: Option<i64>,
    /// Object came from procedural generation rather than the seed data.
    #[serde(rename = "isProcedural", default, skip_serializing_if = "is_false")]
    pub is_procedural: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StarSystem {
    #[serde(flatten)]
    pub common: ObjectCommon,
    /// Stellar luminosity in solar units.
    #[serde(default)]
    pub star_l_lsun: Option<f64>,
    #[serde(default)]
    pub planets: Vec<Planet>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Galaxy {
    #[serde(flatten)]
    pub common: ObjectCommon,
    /// Aggregate luminosity in solar units.
    #[serde(default)]
    pub total_l_lsun: Option<f64>,
}

/// A rankable object. Adding a variant forces every scorer and view to
/// handle it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CelestialObject {
    StarSystem(StarSystem),
    Galaxy(Galaxy),
}

/// Discriminant of [`CelestialObject`], also stamped on scored results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    StarSystem,
    Galaxy,
}

impl CelestialObject {
    pub fn common(&self) -> &ObjectCommon {
        match self {
            CelestialObject::StarSystem(s) => &s.common,
            CelestialObject::Galaxy(g) => &g.common,
        }
    }

    pub fn common_mut(&mut self) -> &mut ObjectCommon {
        match self {
            CelestialObject::StarSystem(s) => &mut s.common,
            CelestialObject::Galaxy(g) => &mut g.common,
        }
    }

    pub fn id(&self) -> &str {
        &self.common().id
    }

    pub fn name(&self) -> &str {
        &self.common().name
    }

    pub fn kind(&self) -> ObjectKind {
        match self {
            CelestialObject::StarSystem(_) => ObjectKind::StarSystem,
            CelestialObject::Galaxy(_) => ObjectKind::Galaxy,
        }
    }

    /// Luminosity in solar units, whichever field the kind uses.
    pub fn luminosity(&self) -> Option<f64> {
        match self {
            CelestialObject::StarSystem(s) => s.star_l_lsun,
            CelestialObject::Galaxy(g) => g.total_l_lsun,
        }
    }
}

/// Normalized map position in [0,1) on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
}

/// Index of the object with `id`, if present.
pub fn find_index(dataset: &[CelestialObject], id: &str) -> Option<usize> {
    dataset.iter().position(|o| o.id() == id)
}

/// First id that appears more than once, in dataset order.
pub fn duplicate_id(dataset: &[CelestialObject]) -> Option<&str> {
    let mut seen = HashSet::with_capacity(dataset.len());
    dataset.iter().map(|o| o.id()).find(|id| !seen.insert(*id))
}

#[cfg(test)]
mod tests {
    use super::*;

    const GALAXY_JSON: &str = r#"{
        "id": "m81",
        "name": "Messier 81 (M81)",
        "type": "galaxy",
        "total_l_lsun": 50000000000.0,
        "variability": 0.2,
        "threat_level": 0.3,
        "economic_value": 2.2e15
    }"#;

    #[test]
    fn test_galaxy_from_tagged_json() {
        let obj: CelestialObject = serde_json::from_str(GALAXY_JSON).unwrap();
        assert_eq!(obj.kind(), ObjectKind::Galaxy);
        assert_eq!(obj.id(), "m81");
        assert_eq!(obj.luminosity(), Some(5.0e10));
        assert_eq!(obj.common().status, None);
        assert!(!obj.common().is_procedural);
    }

    #[test]
    fn test_star_system_planet_field_names() {
        let json = r#"{
            "id": "k452",
            "name": "Kepler-452 System",
            "type": "star_system",
            "star_l_lsun": 1.2,
            "status": "suspect",
            "status_expiry_year": 2803,
            "isProcedural": true,
            "planets": [
                { "name": "Kepler-452 b", "insolation_s_earth": 1.1, "eq_temp_K": 265, "radius_Re": 1.6 }
            ]
        }"#;
        let obj: CelestialObject = serde_json::from_str(json).unwrap();
        let CelestialObject::StarSystem(sys) = &obj else {
            panic!("expected a star system");
        };
        assert_eq!(sys.planets.len(), 1);
        assert_eq!(sys.planets[0].eq_temp_k, Some(265.0));
        assert_eq!(sys.planets[0].radius_re, Some(1.6));
        assert_eq!(sys.common.status, Some(ObjectStatus::Suspect));
        assert_eq!(sys.common.status_expiry_year, Some(2803));
        assert!(sys.common.is_procedural);

        let back = serde_json::to_value(&obj).unwrap();
        assert_eq!(back["type"], "star_system");
        assert_eq!(back["planets"][0]["eq_temp_K"], 265.0);
    }

    #[test]
    fn test_null_status_reads_as_none() {
        let json = r#"{ "id": "g", "name": "G", "type": "galaxy", "status": null }"#;
        let obj: CelestialObject = serde_json::from_str(json).unwrap();
        assert_eq!(obj.common().status, None);
        assert_eq!(obj.luminosity(), None);
    }

    #[test]
    fn test_find_index() {
        let dataset: Vec<CelestialObject> =
            vec![serde_json::from_str(GALAXY_JSON).unwrap()];
        assert_eq!(find_index(&dataset, "m81"), Some(0));
        assert_eq!(find_index(&dataset, "nope"), None);
    }

    #[test]
    fn test_duplicate_id() {
        let m81: CelestialObject = serde_json::from_str(GALAXY_JSON).unwrap();
        let mut other = m81.clone();
        other.common_mut().id = "m82".into();
        let mut dataset = vec![m81.clone(), other];
        assert_eq!(duplicate_id(&dataset), None);
        dataset.push(m81);
        assert_eq!(duplicate_id(&dataset), Some("m81"));
        assert_eq!(duplicate_id(&[]), None);
    }
}
