//! `gn-core` — foundational types for the `gridnav` route-following framework.
//!
//! This crate is a dependency of every other `gn-*` crate.  It intentionally
//! has no `gn-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`cell`]        | `Cell`, `CellKind`                                    |
//! | [`grid`]        | `Grid` (immutable), `GridBuilder`                     |
//! | [`blocked`]     | `BlockedSet` — transient obstacles                    |
//! | [`point`]       | `Point` — continuous (sub-cell) position              |
//! | [`time`]        | `Tick`, `SimClock`, `check_dt`                        |
//! | [`rng`]         | `SimRng` (seeded, deterministic)                      |
//! | [`error`]       | `CoreError`, `GridError`, result aliases              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod blocked;
pub mod cell;
pub mod error;
pub mod grid;
pub mod point;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use blocked::BlockedSet;
pub use cell::{Cell, CellKind};
pub use error::{CoreError, CoreResult, GridError, GridResult};
pub use grid::{Grid, GridBuilder};
pub use point::Point;
pub use rng::SimRng;
pub use time::{check_dt, SimClock, Tick};
