//! Simulation tuning.
//!
//! Every knob has the value the year loop was balanced with; a JSON file
//! only needs to name the fields it overrides.

use serde::{Deserialize, Serialize};

/// Tuning for the year loop and the paid interventions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Real seconds between simulated years while running.
    pub tick_interval_secs: f64,
    /// Most years a single update may run; any further due ticks are dropped.
    pub max_catch_up_ticks: u32,
    /// Simulated year on a fresh start.
    pub starting_year: i64,
    /// Capital on a fresh start.
    pub starting_capital: f64,
    /// Event log keeps this many newest entries.
    pub event_log_capacity: usize,
    /// Per-year probability of an anomaly.
    pub anomaly_chance: f64,
    /// Per-year probability of a market/threat/discovery event, rolled only
    /// when no anomaly fired.
    pub event_chance: f64,
    /// Probability that a paid intervention takes effect.
    pub intervention_success_chance: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_interval_secs: 2.0,
            max_catch_up_ticks: 10,
            starting_year: 2800,
            starting_capital: 1_000_000.0,
            event_log_capacity: 100,
            anomaly_chance: 0.02,
            event_chance: 0.1,
            intervention_success_chance: 0.8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = SimulationConfig::default();
        assert_eq!(cfg.tick_interval_secs, 2.0);
        assert_eq!(cfg.starting_year, 2800);
        assert_eq!(cfg.event_log_capacity, 100);
        assert_eq!(cfg.max_catch_up_ticks, 10);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let cfg: SimulationConfig =
            serde_json::from_str(r#"{ "tick_interval_secs": 0.5, "anomaly_chance": 0.0 }"#)
                .unwrap();
        assert_eq!(cfg.tick_interval_secs, 0.5);
        assert_eq!(cfg.anomaly_chance, 0.0);
        assert_eq!(cfg.event_chance, 0.1);
        assert_eq!(cfg.starting_capital, 1_000_000.0);
    }
}
