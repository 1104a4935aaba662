use thiserror::Error;

use gn_core::GridError;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("map parse error: {0}")]
    Parse(String),

    #[error("unknown cell code {code:?} at row {row}, column {col}")]
    UnknownCode { row: usize, col: usize, code: String },

    #[error("malformed grid: {0}")]
    Grid(#[from] GridError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type MapResult<T> = Result<T, MapError>;
