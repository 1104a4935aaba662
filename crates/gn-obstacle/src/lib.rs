//! `gn-obstacle` — injects transient blockages onto the agent's route.
//!
//! # Crate layout
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`policy`]      | `PlacementPolicy` — when and how far ahead to place   |
//! | [`scheduler`]   | `ObstacleScheduler`, `choose_cell`                    |
//! | [`error`]       | `ObstacleError`, `ObstacleResult<T>`                  |
//!
//! # Placement rule (summary)
//!
//! ```text
//! fire iff  elapsed >= delay_secs
//!      and  path_index >= min_path_index
//!      and  placements < max_placements
//!      and  some cell in path[scan_from .. len-1] is plain Open, not blocked
//!           and not under the agent
//!
//! scan_from = max(min(path_index + lookahead_steps, len - 2), path_index)
//! ```
//!
//! The goal cell and the cell the agent currently occupies are never
//! candidates.  Placed obstacles never expire; the
//! only way to clear them is a new run.

pub mod error;
pub mod policy;
pub mod scheduler;


pub use error::{ObstacleError, ObstacleResult};
pub use policy::PlacementPolicy;
pub use scheduler::{choose_cell, ObstacleScheduler};
