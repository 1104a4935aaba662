//! `gn-signal` — periodic traffic signals.
//!
//! # Crate layout
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`signal`]      | `Signal`, `SignalState`, `SignalTiming`               |
//! | [`controller`]  | `SignalController` — one `Signal` per signal post     |
//! | [`error`]       | `SignalError`, `SignalResult<T>`                      |
//!
//! # Cycle
//!
//! ```text
//! RED --(timer >= red_secs)--> GREEN --(timer >= green_secs)--> RED
//! ```
//!
//! Every signal starts RED with a zero timer.  The timer resets to zero on
//! each transition, and one `update(dt)` applies at most one transition no
//! matter how large `dt` is.  With very coarse steps the cycle therefore
//! runs slower than wall time; callers that care should step finely.

pub mod controller;
pub mod error;
pub mod signal;

#[cfg(test)]
mod tests;

pub use controller::SignalController;
pub use error::{SignalError, SignalResult};
pub use signal::{Signal, SignalState, SignalTiming, PHASE_EPSILON};
