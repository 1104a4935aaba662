//! Search-subsystem error type.
//!
//! An unreachable goal is *not* an error — it is an empty [`Path`].  Only
//! broken preconditions end up here.
//!
//! [`Path`]: crate::Path

use thiserror::Error;

use gn_core::Cell;

/// Errors produced by `gn-search`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("{endpoint} cell {cell} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        endpoint: &'static str,
        cell:     Cell,
        rows:     usize,
        cols:     usize,
    },

    #[error("unknown search strategy {0:?}: expected \"bfs\", \"dfs\" or \"astar\"")]
    UnknownStrategy(String),
}

pub type SearchResult<T> = Result<T, SearchError>;
