use thiserror::Error;

use gn_core::CoreError;

#[derive(Debug, Error)]
pub enum SignalError {
    #[error("signal durations must be finite and > 0 (red {red}s, green {green}s)")]
    InvalidTiming { red: f64, green: f64 },

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type SignalResult<T> = Result<T, SignalError>;
