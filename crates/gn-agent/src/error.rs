use thiserror::Error;

use gn_core::CoreError;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("speed and cell size must be finite and > 0 (speed {speed}, cell size {cell_size})")]
    InvalidMotion { speed: f64, cell_size: f64 },

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type AgentResult<T> = Result<T, AgentError>;
