//! `gn-map` — reading grids from integer code matrices.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`codes`]   | code ↔ `CellKind` mapping                                 |
//! | [`loader`]  | `load_grid_csv`, `load_grid_reader`, `parse_grid_text`, `grid_to_text` |
//! | [`demo`]    | `DEMO_CITY`, `demo_city` — a small built-in street map    |
//! | [`error`]   | `MapError`, `MapResult<T>`                                |
//!
//! # Codes
//!
//! | Code | Meaning             | `CellKind`      |
//! |------|---------------------|-----------------|
//! | `0`  | road                | `Open`          |
//! | `1`  | wall / building     | `Blocked`       |
//! | `2`  | water               | `Blocked`       |
//! | `3`  | start               | `Start`         |
//! | `4`  | goal                | `Goal`          |
//! | `5`  | intersection        | `Intersection`  |
//! | `6`  | traffic-light post  | `SignalPost`    |
//! | `7`  | crosswalk           | `Crosswalk`     |

pub mod codes;
pub mod demo;
pub mod error;
pub mod loader;

#[cfg(test)]
mod tests;

pub use codes::{code_of, kind_from_code};
pub use demo::{demo_city, DEMO_CITY};
pub use error::{MapError, MapResult};
pub use loader::{grid_to_text, load_grid_csv, load_grid_reader, parse_grid_text};
