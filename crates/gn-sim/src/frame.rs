//! Per-tick views handed to observers and callers.

use std::fmt;

use gn_agent::{Heading, MotionState};
use gn_core::{BlockedSet, Cell, Point, Tick};
use gn_search::{Path, SearchStrategy};
use gn_signal::{SignalController, SignalState};

// ── RouteStatus ───────────────────────────────────────────────────────────────

/// Where the current run stands.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RouteStatus {
    /// No run started yet.
    #[default]
    Pending,
    /// The agent has a route and is following it (or waiting on a signal).
    Active,
    /// The agent reached the goal.
    Arrived,
    /// The last search found nothing; the agent stays where it is.
    NoRoute,
}

impl RouteStatus {
    /// `Arrived` and `NoRoute` end a run.
    pub fn is_terminal(self) -> bool {
        matches!(self, RouteStatus::Arrived | RouteStatus::NoRoute)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RouteStatus::Pending => "pending",
            RouteStatus::Active  => "active",
            RouteStatus::Arrived => "arrived",
            RouteStatus::NoRoute => "no_route",
        }
    }
}

impl fmt::Display for RouteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Frame ─────────────────────────────────────────────────────────────────────

/// Everything a presentation layer needs to draw one tick.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub tick:         Tick,
    pub elapsed_secs: f64,
    pub cell:         Cell,
    pub position:     Point,
    pub heading:      Heading,
    pub motion:       MotionState,
    pub path:         &'a Path,
    pub path_index:   usize,
    pub signals:      &'a SignalController,
    pub blocked:      &'a BlockedSet,
    pub status:       RouteStatus,
}

impl Frame<'_> {
    /// `(post cell, state)` for every signal, row-major.
    pub fn signal_states(&self) -> impl Iterator<Item = (Cell, SignalState)> + '_ {
        self.signals.iter().map(|s| (s.position, s.state()))
    }
}

// ── TickReport ────────────────────────────────────────────────────────────────

/// What happened during one [`Sim::tick`](crate::Sim::tick).
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    pub tick:             Tick,
    /// Signals that changed phase.
    pub signal_changes:   usize,
    /// Cell blocked this tick, if any.
    pub obstacle:         Option<Cell>,
    pub replan_requested: bool,
    /// Length of the replacement path when a replan ran (0 = no route).
    pub replanned_len:    Option<usize>,
    pub status:           RouteStatus,
}

// ── RunSummary ────────────────────────────────────────────────────────────────

/// Outcome of [`Sim::run_until_done`](crate::Sim::run_until_done).
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub strategy:     SearchStrategy,
    /// Final status: `Arrived`, `NoRoute`, or `Active` if the tick limit hit.
    pub outcome:      RouteStatus,
    pub ticks:        u64,
    pub elapsed_secs: f64,
    pub replans:      u32,
    pub obstacles:    usize,
    pub final_cell:   Cell,
}
