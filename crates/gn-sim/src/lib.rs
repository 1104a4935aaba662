//! `gn-sim` — tick orchestrator for the gridnav framework.
//!
//! # Tick loop
//!
//! ```text
//! per tick (dt seconds):
//!   ① Signals   — SignalController::update(dt)
//!   ② Obstacles — ObstacleScheduler::advance(dt); maybe_fire(...) while the
//!                 route is active
//!   ③ Agent     — AgentController::tick(dt, signals, blocked) → replan?
//!   ④ Replan    — search(grid, strategy, agent cell, goal, blocked);
//!                 AgentController::set_path(result)
//!                 empty result → RouteStatus::NoRoute, agent idles in place
//! ```
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`world`]     | `World` — grid, blocked set, signals                     |
//! | [`config`]    | `SimConfig` and its TOML sections                        |
//! | [`frame`]     | `Frame`, `RouteStatus`, `TickReport`, `RunSummary`       |
//! | [`observer`]  | `SimObserver` trait, `NoopObserver`                      |
//! | [`builder`]   | `SimBuilder`                                             |
//! | [`sim`]       | `Sim` — runs and the tick loop                           |
//! | [`error`]     | `SimError`, `SimResult<T>`                               |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use gn_sim::{NoopObserver, SimBuilder, SimConfig};
//!
//! let mut sim = SimBuilder::new(grid).config(SimConfig::default()).build()?;
//! let summary = sim.run_until_done(1.0 / 60.0, 100_000, &mut NoopObserver)?;
//! println!("{} after {} ticks", summary.outcome, summary.ticks);
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod frame;
pub mod observer;
pub mod sim;
pub mod world;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use config::{AgentConfig, ObstacleConfig, RunConfig, SignalConfig, SimConfig};
pub use error::{SimError, SimResult};
pub use frame::{Frame, RouteStatus, RunSummary, TickReport};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use world::World;
