//! Engine errors.

use rados_logic::interventions::Intervention;
use rados_logic::ranking::RankingError;
use thiserror::Error;
use uuid::Uuid;

use crate::persistence::SaveError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no object with id {0}")]
    UnknownObject(String),

    #[error("an object with id {0} already exists")]
    DuplicateObject(String),

    #[error("{action:?} costs {cost}, only {capital} capital available")]
    InsufficientCapital {
        action: Intervention,
        cost: f64,
        capital: f64,
    },

    #[error("no snapshot with id {0}")]
    UnknownSnapshot(Uuid),

    #[error("ranking failed: {0}")]
    Ranking(#[from] RankingError),

    #[error(transparent)]
    Save(#[from] SaveError),
}
