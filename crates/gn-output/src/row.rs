//! Plain data row types written by output backends.

use std::fmt;

use gn_core::Cell;
use gn_sim::Frame;

/// The agent's state at the end of one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentFrameRow {
    pub tick:         u64,
    pub elapsed_secs: f64,
    pub row:          usize,
    pub col:          usize,
    pub x:            f64,
    pub y:            f64,
    pub heading:      &'static str,
    pub motion:       &'static str,
    pub path_index:   usize,
    pub path_len:     usize,
    pub status:       &'static str,
    /// Size of the blocked set.
    pub blocked:      usize,
    /// Signals currently RED.
    pub red_signals:  usize,
}

impl AgentFrameRow {
    pub fn from_frame(frame: &Frame<'_>) -> Self {
        Self {
            tick:         frame.tick.0,
            elapsed_secs: frame.elapsed_secs,
            row:          frame.cell.row,
            col:          frame.cell.col,
            x:            frame.position.x,
            y:            frame.position.y,
            heading:      frame.heading.as_str(),
            motion:       frame.motion.as_str(),
            path_index:   frame.path_index,
            path_len:     frame.path.len(),
            status:       frame.status.as_str(),
            blocked:      frame.blocked.len(),
            red_signals:  frame.signal_states().filter(|(_, s)| s.is_red()).count(),
        }
    }
}

/// What an [`EventRow`] records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    RunStart,
    Obstacle,
    Replan,
    RunEnd,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::RunStart => "run_start",
            EventKind::Obstacle => "obstacle",
            EventKind::Replan   => "replan",
            EventKind::RunEnd   => "run_end",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One discrete event in a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    pub tick:   u64,
    pub kind:   EventKind,
    /// The cell the event concerns: path origin, blocked cell, replan origin,
    /// or final agent cell.  `None` for a run that starts without a route.
    pub cell:   Option<Cell>,
    /// Space-separated `key=value` details.
    pub detail: String,
}
