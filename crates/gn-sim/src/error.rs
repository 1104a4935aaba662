use thiserror::Error;

use gn_agent::AgentError;
use gn_core::CoreError;
use gn_obstacle::ObstacleError;
use gn_search::SearchError;
use gn_signal::SignalError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("search error: {0}")]
    Search(#[from] SearchError),

    #[error("signal error: {0}")]
    Signal(#[from] SignalError),

    #[error("obstacle error: {0}")]
    Obstacle(#[from] ObstacleError),

    #[error("agent error: {0}")]
    Agent(#[from] AgentError),
}

impl From<toml::de::Error> for SimError {
    fn from(e: toml::de::Error) -> Self {
        SimError::Config(e.to_string())
    }
}

pub type SimResult<T> = Result<T, SimError>;
