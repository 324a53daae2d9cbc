//! Pure sub-index functions for energy, habitability, feasibility and economy.
//!
//! Every function is total: missing or non-positive inputs degrade to the
//! neutral value instead of failing. All outputs lie in [0,1] except the
//! threat modifier, which lies in [0.5,1].

/// log10(L) range mapped onto [0,1] by the energy index.
pub const EAI_LOG_MIN: f64 = -4.0;
pub const EAI_LOG_MAX: f64 = 12.0;

/// Habitable temperature band in Kelvin and its triangular peak.
pub const HPI_TEMP_MIN_K: f64 = 240.0;
pub const HPI_TEMP_MAX_K: f64 = 310.0;
pub const HPI_TEMP_PEAK_K: f64 = 288.0;
pub const HPI_TEMP_HALF_WIDTH_K: f64 = 48.0;
/// Each habitability term is floored here before the geometric mean.
pub const HPI_TERM_FLOOR: f64 = 1e-9;

/// Variability assumed when an object does not report one.
pub const DEFAULT_VARIABILITY: f64 = 0.5;

/// log10(value) range mapped onto [0,1] by the economic index (1e9..1e18).
pub const ECI_LOG_MIN: f64 = 9.0;
pub const ECI_LOG_MAX: f64 = 18.0;

/// Score fraction removed at threat level 1.0.
pub const MAX_THREAT_PENALTY: f64 = 0.5;

/// Energy Availability Index: log-luminosity rescaled from [-4,12].
pub fn energy_availability_index(luminosity_lsun: Option<f64>) -> f64 {
    match luminosity_lsun {
        Some(l) if l > 0.0 => rescale(l.log10(), EAI_LOG_MIN, EAI_LOG_MAX),
        _ => 0.0,
    }
}

/// Habitability Potential Index for one planet.
///
/// Geometric mean of insolation closeness to Earth and a triangular
/// temperature window peaking at 288K. Either input missing yields 0.
pub fn habitability_potential_index(insolation: Option<f64>, eq_temp_k: Option<f64>) -> f64 {
    let (Some(insolation), Some(eq_temp_k)) = (insolation, eq_temp_k) else {
        return 0.0;
    };
    let closeness = (1.0 - (insolation - 1.0).abs().min(1.0)).max(0.0);
    let band = temperature_band(eq_temp_k);
    (closeness.max(HPI_TERM_FLOOR) * band.max(HPI_TERM_FLOOR)).sqrt()
}

fn temperature_band(eq_temp_k: f64) -> f64 {
    if !(HPI_TEMP_MIN_K..=HPI_TEMP_MAX_K).contains(&eq_temp_k) {
        return 0.0;
    }
    (1.0 - (eq_temp_k - HPI_TEMP_PEAK_K).abs() / HPI_TEMP_HALF_WIDTH_K).max(0.0)
}

/// Megastructure Feasibility Index: bright, stable hosts score high.
pub fn megastructure_feasibility_index(luminosity_lsun: Option<f64>, variability: Option<f64>) -> f64 {
    let eai = energy_availability_index(luminosity_lsun);
    let stability = 1.0 - variability.unwrap_or(DEFAULT_VARIABILITY).clamp(0.0, 1.0);
    (0.7 * eai + 0.3 * stability).clamp(0.0, 1.0)
}

/// Economic Index: log-value rescaled from [9,18].
pub fn economic_index(economic_value: Option<f64>) -> f64 {
    match economic_value {
        Some(v) if v > 0.0 => rescale(v.log10(), ECI_LOG_MIN, ECI_LOG_MAX),
        _ => 0.0,
    }
}

/// Multiplicative penalty applied after the weighted sum.
pub fn threat_modifier(threat_level: Option<f64>) -> f64 {
    1.0 - threat_level.unwrap_or(0.0).clamp(0.0, 1.0) * MAX_THREAT_PENALTY
}

/// Round to the 4 decimal places results are surfaced with.
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

fn rescale(value: f64, min: f64, max: f64) -> f64 {
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eai_neutral_inputs() {
        assert_eq!(energy_availability_index(None), 0.0);
        assert_eq!(energy_availability_index(Some(0.0)), 0.0);
        assert_eq!(energy_availability_index(Some(-3.0)), 0.0);
    }

    #[test]
    fn test_eai_scale() {
        // log10(1e4) = 4 -> (4 + 4) / 16
        assert!((energy_availability_index(Some(1e4)) - 0.5).abs() < 1e-12);
        assert!((energy_availability_index(Some(1.0)) - 0.25).abs() < 1e-12);
        assert_eq!(energy_availability_index(Some(1e-6)), 0.0);
        assert_eq!(energy_availability_index(Some(1e14)), 1.0);
    }

    #[test]
    fn test_hpi_peak() {
        assert!((habitability_potential_index(Some(1.0), Some(288.0)) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_hpi_outside_band() {
        let hpi = habitability_potential_index(Some(1.0), Some(200.0));
        // Only the floored term survives: sqrt(1 * 1e-9).
        assert!(hpi < 1e-4);
        assert_eq!(round4(hpi), 0.0);
    }

    #[test]
    fn test_hpi_missing_input() {
        assert_eq!(habitability_potential_index(None, Some(288.0)), 0.0);
        assert_eq!(habitability_potential_index(Some(1.0), None), 0.0);
    }

    #[test]
    fn test_hpi_band_edges() {
        // 240K and 310K are inside the band but off the triangle peak.
        let low = habitability_potential_index(Some(1.0), Some(240.0));
        assert!((low - HPI_TERM_FLOOR.sqrt()).abs() < 1e-12);
        let high = habitability_potential_index(Some(1.0), Some(310.0));
        let expected = (1.0 - 22.0 / 48.0_f64).sqrt();
        assert!((high - expected).abs() < 1e-12);
    }

    #[test]
    fn test_hpi_insolation_far_from_earth() {
        let hpi = habitability_potential_index(Some(2.5), Some(288.0));
        assert!(hpi < 1e-4);
    }

    #[test]
    fn test_mfi_default_variability() {
        // EAI(1.0) = 0.25 -> 0.7 * 0.25 + 0.3 * 0.5
        let mfi = megastructure_feasibility_index(Some(1.0), None);
        assert!((mfi - 0.325).abs() < 1e-12);
    }

    #[test]
    fn test_mfi_clamps_variability() {
        let stable = megastructure_feasibility_index(None, Some(-2.0));
        assert!((stable - 0.3).abs() < 1e-12);
        let wild = megastructure_feasibility_index(None, Some(5.0));
        assert_eq!(wild, 0.0);
    }

    #[test]
    fn test_eci() {
        assert_eq!(economic_index(None), 0.0);
        assert_eq!(economic_index(Some(0.0)), 0.0);
        assert_eq!(economic_index(Some(1e9)), 0.0);
        assert!((economic_index(Some(1e18)) - 1.0).abs() < 1e-12);
        assert_eq!(economic_index(Some(1e20)), 1.0);
        assert!((economic_index(Some(1e12)) - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_threat_modifier() {
        assert_eq!(threat_modifier(Some(1.0)), 0.5);
        assert_eq!(threat_modifier(Some(0.0)), 1.0);
        assert_eq!(threat_modifier(None), 1.0);
        assert_eq!(threat_modifier(Some(3.0)), 0.5);
        assert!((threat_modifier(Some(0.6)) - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_round4() {
        assert_eq!(round4(0.414273607), 0.4143);
        assert_eq!(round4(0.0), 0.0);
        assert_eq!(round4(1.0), 1.0);
    }
}
