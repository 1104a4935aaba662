//! A single timed signal.

use std::fmt;

use gn_core::Cell;

use crate::{SignalError, SignalResult};

/// Slack, in seconds, absorbed when comparing a phase timer built from
/// summed `dt` steps against its duration.
pub const PHASE_EPSILON: f64 = 1e-9;

// ── SignalState ───────────────────────────────────────────────────────────────

/// The two phases of a signal.  Agents on a RED signal cell do not move.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SignalState {
    #[default]
    Red,
    Green,
}

impl SignalState {
    pub fn is_red(self) -> bool {
        self == SignalState::Red
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SignalState::Red   => "red",
            SignalState::Green => "green",
        }
    }
}

impl fmt::Display for SignalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── SignalTiming ──────────────────────────────────────────────────────────────

/// Phase durations in seconds, shared by every signal on a map.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignalTiming {
    pub red_secs:   f64,
    pub green_secs: f64,
}

impl SignalTiming {
    /// Checked constructor: both durations must be finite and positive.
    pub fn new(red_secs: f64, green_secs: f64) -> SignalResult<Self> {
        Self { red_secs, green_secs }.validated()
    }

    pub fn validated(self) -> SignalResult<Self> {
        let ok = |d: f64| d.is_finite() && d > 0.0;
        if ok(self.red_secs) && ok(self.green_secs) {
            Ok(self)
        } else {
            Err(SignalError::InvalidTiming { red: self.red_secs, green: self.green_secs })
        }
    }

    /// Full RED + GREEN period.
    pub fn cycle_secs(&self) -> f64 {
        self.red_secs + self.green_secs
    }
}

impl Default for SignalTiming {
    /// 4 s red, 2.5 s green.
    fn default() -> Self {
        Self { red_secs: 4.0, green_secs: 2.5 }
    }
}

// ── Signal ────────────────────────────────────────────────────────────────────

/// One signal anchored on a `SignalPost` cell.
#[derive(Clone, Debug, PartialEq)]
pub struct Signal {
    pub position: Cell,
    state:        SignalState,
    /// Seconds spent in the current phase.
    timer:        f64,
    timing:       SignalTiming,
}

impl Signal {
    /// A fresh signal: RED, timer zero.
    pub fn new(position: Cell, timing: SignalTiming) -> Self {
        Self { position, state: SignalState::Red, timer: 0.0, timing }
    }

    pub fn state(&self) -> SignalState {
        self.state
    }

    pub fn timer(&self) -> f64 {
        self.timer
    }

    pub fn timing(&self) -> SignalTiming {
        self.timing
    }

    /// Add `dt` to the phase timer and apply at most one transition.
    ///
    /// A timer within [`PHASE_EPSILON`] of the phase length counts as
    /// expired, so `n` ticks of `duration / n` seconds always flip on the
    /// `n`-th tick.
    ///
    /// Returns the new state if a transition happened.  `dt` is assumed
    /// already validated by the caller.
    pub(crate) fn advance(&mut self, dt: f64) -> Option<SignalState> {
        self.timer += dt;
        let limit = match self.state {
            SignalState::Red   => self.timing.red_secs,
            SignalState::Green => self.timing.green_secs,
        };
        if self.timer + PHASE_EPSILON < limit {
            return None;
        }
        self.state = match self.state {
            SignalState::Red   => SignalState::Green,
            SignalState::Green => SignalState::Red,
        };
        self.timer = 0.0;
        Some(self.state)
    }
}
