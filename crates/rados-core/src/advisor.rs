//! Strategic advisor seam.
//!
//! Text generation lives outside the engine. The engine only builds prompts
//! and hands them to whatever [`StrategicAdvisor`] the host wires in; a
//! missing advisor disables the feature and never touches scoring.

use rados_logic::scoring::ScoredResult;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdvisorError {
    #[error("strategic advisor is not available")]
    Unavailable,
    #[error("strategic advisor request failed: {0}")]
    Failed(String),
}

/// Prompt in, generated text out.
pub trait StrategicAdvisor {
    fn generate(&self, prompt: &str) -> Result<String, AdvisorError>;
}

/// Advisor used when nothing is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableAdvisor;

impl StrategicAdvisor for UnavailableAdvisor {
    fn generate(&self, _prompt: &str) -> Result<String, AdvisorError> {
        Err(AdvisorError::Unavailable)
    }
}

/// Run `prompt`, logging and swallowing any failure.
pub fn consult(advisor: &dyn StrategicAdvisor, prompt: &str) -> Option<String> {
    match advisor.generate(prompt) {
        Ok(text) => Some(text),
        Err(e) => {
            log::warn!("Advisor request skipped: {}", e);
            None
        }
    }
}

fn result_json(result: &ScoredResult) -> String {
    serde_json::to_string(result).unwrap_or_default()
}

/// Strategic analysis of one object: resources, risks, opportunities, science.
pub fn analysis_prompt(result: &ScoredResult) -> String {
    format!(
        "Based on the following data for \"{}\", provide a concise strategic analysis. \
         Identify key points for resources, risks, opportunities, and science. Data: {}",
        result.name,
        result_json(result)
    )
}

/// Multi-phase mission plan for one object.
pub fn mission_prompt(result: &ScoredResult) -> String {
    format!(
        "Generate a multi-phase strategic mission plan for \"{}\". If it is a star system, \
         also identify a specific \"Point of Interest\" with coordinates as percentages and \
         a label. Data: {}",
        result.name,
        result_json(result)
    )
}

/// Containment protocol for an object flagged as suspect.
pub fn containment_prompt(result: &ScoredResult) -> String {
    format!(
        "Generate a multi-stage strategic containment protocol for a suspicious celestial \
         anomaly named \"{}\". The protocol should identify potential threats and outline \
         steps for investigation, quarantine, and neutralization. Data: {}.",
        result.name,
        result_json(result)
    )
}

/// Portfolio-wide overview over the top of the ranking.
pub fn overview_prompt(capital: f64, acquired_names: &[&str], top: &[ScoredResult]) -> String {
    format!(
        "Provide a global strategic analysis based on the current state. Portfolio value: {}, \
         Acquired Assets: {}. Analyze capital flow, top assets, and emerging threats based on \
         the full dataset: {}.",
        capital,
        acquired_names.join(", "),
        serde_json::to_string(top).unwrap_or_default()
    )
}
