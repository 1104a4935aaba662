//! Fluent builder for constructing a [`Sim`].

use gn_agent::AgentController;
use gn_core::{Grid, SimClock};
use gn_obstacle::ObstacleScheduler;
use gn_search::SearchStrategy;
use gn_signal::SignalController;

use crate::{RouteStatus, Sim, SimConfig, SimResult, World};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`Grid`] — a validated map with one start and one goal
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                                  |
/// |---------------------|------------------------------------------|
/// | `.config(c)`        | `SimConfig::default()`                   |
/// | `.strategy(s)`      | `config.run.strategy`                    |
/// | `.signals(sc)`      | one RED signal per signal post           |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(grid)
///     .config(SimConfig::load(path)?)
///     .strategy(SearchStrategy::Bfs)
///     .build()?;
/// sim.start_run(sim.strategy())?;
/// let summary = sim.run_until_done(1.0 / 60.0, 10_000, &mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    grid:     Grid,
    config:   SimConfig,
    strategy: Option<SearchStrategy>,
    signals:  Option<SignalController>,
}

impl SimBuilder {
    pub fn new(grid: Grid) -> Self {
        Self { grid, config: SimConfig::default(), strategy: None, signals: None }
    }

    pub fn config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    /// Override `config.run.strategy`.
    pub fn strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    /// Reuse an existing signal controller, e.g. to keep signal phases when
    /// rebuilding a sim for the same map.
    pub fn signals(mut self, signals: SignalController) -> Self {
        self.signals = Some(signals);
        self
    }

    /// Validate the configuration and assemble a [`Sim`] in the `Pending`
    /// state.  Call [`Sim::start_run`] (or `run_until_done`) to begin.
    pub fn build(self) -> SimResult<Sim> {
        let mut config = self.config;
        if let Some(strategy) = self.strategy {
            config.run.strategy = strategy;
        }
        config.validate()?;

        let signals = match self.signals {
            Some(sc) => sc,
            None     => SignalController::from_grid(&self.grid, config.signal_timing())?,
        };
        let scheduler = ObstacleScheduler::new(config.placement_policy())?;
        let agent = AgentController::new(self.grid.start(), config.motion_params())?;

        Ok(Sim {
            strategy:  config.run.strategy,
            config,
            world:     World::new(self.grid, signals),
            agent,
            scheduler,
            clock:     SimClock::new(),
            status:    RouteStatus::Pending,
            replans:   0,
            announced: false,
        })
    }
}
