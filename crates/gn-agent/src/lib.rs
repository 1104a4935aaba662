//! `gn-agent` — the route-following agent.
//!
//! # Crate layout
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`state`]       | `MotionState`, `Heading`                              |
//! | [`agent`]       | `Agent` — position, path, path index                  |
//! | [`controller`]  | `AgentController` — per-tick motion and replan flag   |
//! | [`error`]       | `AgentError`, `AgentResult<T>`                        |
//!
//! # Tick model
//!
//! Each call to [`AgentController::tick`] runs these checks in order and
//! stops at the first that applies:
//!
//! 1. the agent stands on a RED signal → `HaltedAtSignal`, no motion;
//! 2. the path is empty or exhausted → `Idle`;
//! 3. the next path cell is blocked → `HaltedAtObstacle`, replan requested
//!    once per blocking condition;
//! 4. otherwise move `speed` toward the centre of the next path cell,
//!    snapping onto it when closer than `speed`.
//!
//! The controller only reads signals and the blocked set.  Replanning itself
//! is the caller's job: it searches and hands the result to
//! [`AgentController::set_path`].

pub mod agent;
pub mod controller;
pub mod error;
pub mod state;


pub use agent::Agent;
pub use controller::{AgentController, MotionParams};
pub use error::{AgentError, AgentResult};
pub use state::{Heading, MotionState};
