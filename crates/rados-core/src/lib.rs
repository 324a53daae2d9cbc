//! RADOS Core - ranking engine and year simulation
//!
//! Owns the application state that the pure functions in `rados-logic`
//! operate on: the dataset, weight vectors, the latest ranking, capital,
//! acquired assets and the event log. A fixed-interval scheduler turns real
//! elapsed time into simulated years while the engine is running.
//!
//! # Example
//!
//! ```rust,no_run
//! use rados_core::prelude::*;
//!
//! let mut engine = SimulationEngine::new();
//! engine.load_seed_dataset().expect("bundled dataset");
//! engine.start();
//!
//! loop {
//!     engine.update(1.0 / 60.0); // 60 FPS
//! }
//! ```

pub mod advisor;
pub mod engine;
pub mod error;
pub mod persistence;
pub mod random;
pub mod scheduler;
pub mod seed;
pub mod snapshots;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::engine::{SimulationEngine, SimulationStatus};
    pub use crate::error::EngineError;
    pub use crate::random::{SeededRandom, ThreadRandom};
    pub use rados_logic::celestial::{CelestialObject, ObjectKind};
    pub use rados_logic::config::SimulationConfig;
    pub use rados_logic::interventions::Intervention;
    pub use rados_logic::scoring::ScoredResult;
    pub use rados_logic::weights::{GalaxyWeight, StarSystemWeight, WeightsConfig};
}
