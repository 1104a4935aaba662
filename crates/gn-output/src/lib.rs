//! `gn-output` — simulation output writers for the gridnav framework.
//!
//! | Backend | Files created                          |
//! |---------|----------------------------------------|
//! | CSV     | `agent_frames.csv`, `events.csv`       |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `gn_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use gn_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run_until_done(dt, max_ticks, &mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AgentFrameRow, EventKind, EventRow};
pub use writer::OutputWriter;
