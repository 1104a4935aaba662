//! Framework error types.
//!
//! Sub-crates define their own error enums and either convert them into
//! `CoreError` via `From` impls or wrap `CoreError` as one variant.  Both
//! patterns are acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

use crate::Cell;

/// A grid that cannot be used to run a simulation.
///
/// Always fatal at load time: the system refuses to start rather than run
/// with an undefined start or goal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid has no cells")]
    Empty,

    #[error("row {row} has {got} cells, expected {expected}")]
    Ragged { row: usize, expected: usize, got: usize },

    #[error("grid has no start cell")]
    MissingStart,

    #[error("grid has no goal cell")]
    MissingGoal,

    #[error("grid has more than one start cell: {first} and {second}")]
    DuplicateStart { first: Cell, second: Cell },

    #[error("grid has more than one goal cell: {first} and {second}")]
    DuplicateGoal { first: Cell, second: Cell },

    #[error("cell {cell} is outside the {rows}x{cols} grid")]
    OutOfBounds { cell: Cell, rows: usize, cols: usize },
}

/// The top-level error type for `gn-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A tick was requested with a negative or non-finite time step.
    #[error("invalid tick duration {0}: must be finite and >= 0")]
    InvalidDt(f64),

    #[error("malformed grid: {0}")]
    Grid(#[from] GridError),
}

/// Shorthand result type for all `gn-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;

/// Result of grid construction.
pub type GridResult<T> = Result<T, GridError>;
