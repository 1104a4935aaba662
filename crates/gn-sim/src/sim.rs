//! The `Sim` struct and its tick loop.

use tracing::{info, warn};

use gn_agent::AgentController;
use gn_core::{check_dt, Cell, SimClock, Tick};
use gn_obstacle::ObstacleScheduler;
use gn_search::{search, Path, SearchStrategy};

use crate::{
    Frame, NoopObserver, RouteStatus, RunSummary, SimConfig, SimObserver, SimResult,
    TickReport, World,
};

/// The orchestrator.
///
/// `Sim` owns the [`World`], the agent controller and the obstacle scheduler,
/// and drives one tick as:
///
/// 1. **Signals** — every signal advances by `dt`.
/// 2. **Obstacles** — the scheduler may block one cell ahead of the agent.
/// 3. **Agent** — one motion step; may request a replan.
/// 4. **Replan** — on request, search from the agent's cell to the goal
///    around the current blocked set and install the result (possibly empty).
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Configuration the sim was built with.
    pub config: SimConfig,

    pub(crate) world:     World,
    pub(crate) agent:     AgentController,
    pub(crate) scheduler: ObstacleScheduler,
    pub(crate) clock:     SimClock,
    pub(crate) strategy:  SearchStrategy,
    pub(crate) status:    RouteStatus,
    pub(crate) replans:   u32,
    /// `on_run_start` already delivered for the current run.
    pub(crate) announced: bool,
}

impl Sim {
    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn agent(&self) -> &AgentController {
        &self.agent
    }

    pub fn scheduler(&self) -> &ObstacleScheduler {
        &self.scheduler
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn strategy(&self) -> SearchStrategy {
        self.strategy
    }

    pub fn status(&self) -> RouteStatus {
        self.status
    }

    pub fn replans(&self) -> u32 {
        self.replans
    }

    /// Snapshot of the current state.
    pub fn frame(&self) -> Frame<'_> {
        let agent = self.agent.agent();
        Frame {
            tick:         self.clock.current_tick,
            elapsed_secs: self.clock.elapsed_secs,
            cell:         agent.cell,
            position:     agent.position,
            heading:      agent.heading,
            motion:       self.agent.state(),
            path:         agent.path(),
            path_index:   agent.path_index(),
            signals:      &self.world.signals,
            blocked:      &self.world.blocked,
            status:       self.status,
        }
    }

    // ── Runs ──────────────────────────────────────────────────────────────

    /// Begin a new run with `strategy`.
    ///
    /// Clears the blocked set, re-arms the scheduler, resets the clock and
    /// puts the agent back on the start cell, then searches the initial
    /// route.  Signals keep their phase.
    pub fn start_run(&mut self, strategy: SearchStrategy) -> SimResult<RouteStatus> {
        let grid = &self.world.grid;
        let (start, goal) = (grid.start(), grid.goal());

        self.world.clear_blocked();
        self.scheduler.rearm();
        self.clock.reset();
        self.agent.reset(start);
        self.strategy = strategy;
        self.replans = 0;
        self.announced = false;

        let path = search(&self.world.grid, strategy, start, goal, &self.world.blocked)?;
        if path.is_empty() {
            warn!(%strategy, %start, %goal, "no route to goal, agent stays put");
            self.status = RouteStatus::NoRoute;
        } else {
            info!(%strategy, %start, %goal, len = path.len(), "run started");
            self.status = RouteStatus::Active;
        }
        self.agent.set_path(path);
        Ok(self.status)
    }

    /// Advance one tick of `dt` seconds.
    pub fn tick(&mut self, dt: f64) -> SimResult<TickReport> {
        self.step(dt, &mut NoopObserver)
    }

    /// Tick until the run ends or `max_ticks` ticks have run in this call.
    ///
    /// Starts a run with the configured strategy first if none is active.
    /// `on_run_start` fires once per run, so resuming a run after a tick
    /// limit does not announce it again.
    pub fn run_until_done<O: SimObserver>(
        &mut self,
        dt:        f64,
        max_ticks: u64,
        observer:  &mut O,
    ) -> SimResult<RunSummary> {
        check_dt(dt)?;
        if self.status == RouteStatus::Pending {
            self.start_run(self.config.run.strategy)?;
        }
        if !self.announced {
            observer.on_run_start(self.strategy, self.agent.agent().path());
            self.announced = true;
        }

        let mut ticks = 0;
        while !self.status.is_terminal() && ticks < max_ticks {
            self.step(dt, observer)?;
            ticks += 1;
        }
        if !self.status.is_terminal() {
            warn!(ticks, status = %self.status, "tick limit reached before the run ended");
        }

        let summary = self.summary();
        observer.on_run_end(&summary);
        Ok(summary)
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            strategy:     self.strategy,
            outcome:      self.status,
            ticks:        self.clock.current_tick.0,
            elapsed_secs: self.clock.elapsed_secs,
            replans:      self.replans,
            obstacles:    self.world.blocked.len(),
            final_cell:   self.agent.agent().cell,
        }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, dt: f64, observer: &mut O) -> SimResult<TickReport> {
        self.clock.advance(dt)?;
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        // ── Phase 1: signals ──────────────────────────────────────────────
        let signal_changes = self.world.signals.update(dt)?;

        // ── Phase 2: obstacle injection ───────────────────────────────────
        self.scheduler.advance(dt)?;
        let mut obstacle = None;
        if self.status == RouteStatus::Active {
            let World { grid, blocked, .. } = &mut self.world;
            let agent = self.agent.agent();
            let occupied = agent.current_cell(self.agent.params().cell_size);
            obstacle = self.scheduler.maybe_fire(grid, agent.path(), agent.path_index(), occupied, blocked);
            if let Some(cell) = obstacle {
                info!(tick = %now, %cell, "obstacle placed");
                observer.on_obstacle_placed(now, cell);
            }
        }

        // ── Phase 3: agent motion ─────────────────────────────────────────
        let replan_requested = self.agent.tick(dt, &self.world.signals, &self.world.blocked)?;

        // ── Phase 4: replan ───────────────────────────────────────────────
        let mut replanned_len = None;
        if replan_requested {
            let from = self.agent.agent().cell;
            let path = self.replan(now, from)?;
            replanned_len = Some(path.len());
            observer.on_replan(now, from, &path);
            self.agent.set_path(path);
        }

        if self.status == RouteStatus::Active && self.agent.agent().has_arrived() {
            info!(tick = %now, elapsed = self.clock.elapsed_secs, replans = self.replans, "arrived at goal");
            self.status = RouteStatus::Arrived;
        }

        observer.on_frame(&self.frame());

        Ok(TickReport {
            tick: now,
            signal_changes,
            obstacle,
            replan_requested,
            replanned_len,
            status: self.status,
        })
    }

    /// Search from `from` to the goal around the current blocked set and
    /// update the route status.
    fn replan(&mut self, now: Tick, from: Cell) -> SimResult<Path> {
        let goal = self.world.grid.goal();
        let path = search(&self.world.grid, self.strategy, from, goal, &self.world.blocked)?;
        self.replans += 1;
        if path.is_empty() {
            warn!(tick = %now, %from, %goal, "no route found, agent stays put");
            self.status = RouteStatus::NoRoute;
        } else {
            info!(tick = %now, %from, len = path.len(), "replanned around obstacle");
            self.status = RouteStatus::Active;
        }
        Ok(path)
    }
}
