use thiserror::Error;

use gn_core::CoreError;

#[derive(Debug, Error)]
pub enum ObstacleError {
    #[error("invalid placement policy: {0}")]
    InvalidPolicy(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type ObstacleResult<T> = Result<T, ObstacleError>;
