//! Simulation time model.
//!
//! # Design
//!
//! The frame loop drives the simulation with a variable time step `dt`
//! (seconds, `f64`).  Two clocks are kept side by side in [`SimClock`]:
//!
//! - a monotonically increasing integer [`Tick`] (one per frame), used for
//!   labelling output rows and for `max_ticks` limits, and
//! - the accumulated elapsed seconds, used by every timed rule (signal
//!   phases, obstacle delay).
//!
//! A negative or non-finite `dt` is a caller bug and is rejected by
//! [`check_dt`] instead of being clamped.

use std::fmt;

use crate::{CoreError, CoreResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute frame counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── dt validation ─────────────────────────────────────────────────────────────

/// Accept `dt` if it is finite and `>= 0`, otherwise fail with
/// [`CoreError::InvalidDt`].
#[inline]
pub fn check_dt(dt: f64) -> CoreResult<f64> {
    if dt.is_finite() && dt >= 0.0 {
        Ok(dt)
    } else {
        Err(CoreError::InvalidDt(dt))
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Frame counter plus accumulated simulated seconds.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The current tick — advanced by [`SimClock::advance`] each frame.
    pub current_tick: Tick,
    /// Simulated seconds since the clock was created or last reset.
    pub elapsed_secs: f64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one frame of `dt` seconds.
    pub fn advance(&mut self, dt: f64) -> CoreResult<()> {
        let dt = check_dt(dt)?;
        self.current_tick = self.current_tick + 1;
        self.elapsed_secs += dt;
        Ok(())
    }

    /// Back to tick 0, zero seconds.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2}s)", self.current_tick, self.elapsed_secs)
    }
}
