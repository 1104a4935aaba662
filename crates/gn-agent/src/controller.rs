//! `AgentController` — advances the agent one tick at a time.

use tracing::{debug, trace};

use gn_core::{check_dt, BlockedSet, Cell, Grid};
use gn_search::Path;
use gn_signal::SignalController;

use crate::{Agent, AgentError, AgentResult, Heading, MotionState};

/// Speed and cell geometry.
///
/// `speed` is distance per tick in the same unit as `cell_size`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MotionParams {
    pub speed:     f64,
    pub cell_size: f64,
}

impl MotionParams {
    pub fn validated(self) -> AgentResult<Self> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if ok(self.speed) && ok(self.cell_size) {
            Ok(self)
        } else {
            Err(AgentError::InvalidMotion { speed: self.speed, cell_size: self.cell_size })
        }
    }
}

impl Default for MotionParams {
    /// A tenth of a cell per tick on unit cells.
    fn default() -> Self {
        Self { speed: 0.1, cell_size: 1.0 }
    }
}

/// Owns the [`Agent`] and applies the per-tick motion rules.
#[derive(Debug, Clone)]
pub struct AgentController {
    agent:  Agent,
    params: MotionParams,
    state:  MotionState,
    /// Blocked cell a replan has already been requested for.  Cleared by
    /// `set_path`.
    replan_latch: Option<Cell>,
}

impl AgentController {
    /// A controller whose agent stands idle on `origin`.
    pub fn new(origin: Cell, params: MotionParams) -> AgentResult<Self> {
        let params = params.validated()?;
        Ok(Self {
            agent: Agent::at(origin, params.cell_size),
            params,
            state: MotionState::Idle,
            replan_latch: None,
        })
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    pub fn params(&self) -> MotionParams {
        self.params
    }

    pub fn state(&self) -> MotionState {
        self.state
    }

    /// Put the agent back on `origin` with no path, as at the start of a run.
    pub fn reset(&mut self, origin: Cell) {
        self.agent = Agent::at(origin, self.params.cell_size);
        self.state = MotionState::Idle;
        self.replan_latch = None;
    }

    /// Replace the path and restart from its first cell.
    ///
    /// A non-empty path snaps the agent onto `path[0]`.  An empty path leaves
    /// the agent where it is and makes it idle.
    pub fn set_path(&mut self, path: Path) {
        debug!(
            len = path.len(),
            from = ?path.first(),
            to = ?path.last(),
            "agent path set"
        );
        self.agent.install(path, self.params.cell_size);
        self.replan_latch = None;
        self.state = if self.agent.next_cell().is_some() {
            MotionState::Following
        } else {
            MotionState::Idle
        };
    }

    /// Run one tick.  Returns `true` iff a replan is requested.
    ///
    /// Motion is per tick: `dt` is validated but does not scale `speed`.
    ///
    /// # Errors
    ///
    /// `CoreError::InvalidDt` (wrapped) for a negative or non-finite `dt`.
    pub fn tick(
        &mut self,
        dt:      f64,
        signals: &SignalController,
        blocked: &BlockedSet,
    ) -> AgentResult<bool> {
        check_dt(dt)?;
        let size = self.params.cell_size;

        let here = self.agent.current_cell(size);
        if signals.is_red(here) {
            self.state = MotionState::HaltedAtSignal;
            return Ok(false);
        }

        let Some(target) = self.agent.next_cell() else {
            self.state = MotionState::Idle;
            return Ok(false);
        };

        if blocked.contains(target) {
            self.state = MotionState::HaltedAtObstacle;
            if self.replan_latch == Some(target) {
                return Ok(false);
            }
            self.replan_latch = Some(target);
            debug!(%target, at = %here, "next cell blocked, replan requested");
            return Ok(true);
        }

        let goal = Grid::cell_center(target, size);
        let distance = self.agent.position.distance(goal);
        if distance < self.params.speed {
            self.agent.snap_to(target, size);
            trace!(cell = %target, index = self.agent.path_index(), "reached path cell");
            self.state = if self.agent.has_arrived() {
                MotionState::Idle
            } else {
                MotionState::Following
            };
        } else {
            let (dx, dy) = self.agent.position.delta_to(goal);
            let step = self.params.speed / distance;
            self.agent.position.x += dx * step;
            self.agent.position.y += dy * step;
            self.agent.heading = Heading::from_delta(dx, dy);
            self.state = MotionState::Following;
        }
        Ok(false)
    }
}
