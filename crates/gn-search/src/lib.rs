//! `gn-search` — route search over the occupancy grid.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                 |
//! |----------------|----------------------------------------------------------|
//! | [`strategy`]   | `SearchStrategy` — closed enum: BFS, DFS, A*             |
//! | [`path`]       | `Path` — ordered cells, empty on failure                 |
//! | [`neighbors`]  | fixed-order 4-neighbourhood shared by all strategies     |
//! | [`search`]     | `search` entry point, BFS/DFS frontiers, A*              |
//! | [`error`]      | `SearchError`, `SearchResult<T>`                         |
//!
//! # Contract
//!
//! `search(grid, strategy, start, goal, blocked)` returns:
//!
//! - `Ok([start])` when `start == goal`,
//! - `Ok(path)` with `path[0] == start` and `path.last() == goal` on success,
//! - `Ok(Path::empty())` when the goal is unreachable (a normal outcome),
//! - `Err(SearchError::OutOfBounds)` only when an endpoint lies off the grid.
//!
//! Results are deterministic: the neighbour order is fixed (up, down, left,
//! right), the A* heap breaks ties on `(f, row, col)`, and the blocked set is
//! only ever queried, never iterated.

pub mod error;
pub mod neighbors;
pub mod path;
pub mod search;
pub mod strategy;


pub use error::{SearchError, SearchResult};
pub use neighbors::DIRECTIONS;
pub use path::Path;
pub use search::search;
pub use strategy::SearchStrategy;
