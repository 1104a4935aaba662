//! `SimConfig` — every tunable of a run, loadable from TOML.
//!
//! ```toml
//! [agent]
//! speed     = 0.1     # cells per tick
//! cell_size = 1.0
//!
//! [signals]
//! red_secs   = 4.0
//! green_secs = 2.5
//!
//! [obstacles]
//! enabled         = true
//! delay_secs      = 6.0
//! min_path_index  = 4
//! lookahead_steps = 6
//! max_placements  = 1
//!
//! [run]
//! strategy  = "astar"
//! dt_secs   = 0.016666666666666666
//! max_ticks = 100000
//! ```
//!
//! Every section and every key is optional; missing values take the defaults
//! shown.

use std::path::Path;

use serde::{Deserialize, Serialize};

use gn_agent::MotionParams;
use gn_obstacle::PlacementPolicy;
use gn_search::SearchStrategy;
use gn_signal::SignalTiming;

use crate::{SimError, SimResult};

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    #[serde(default)]
    pub agent:     AgentConfig,
    #[serde(default)]
    pub signals:   SignalConfig,
    #[serde(default)]
    pub obstacles: ObstacleConfig,
    #[serde(default)]
    pub run:       RunConfig,
}

/// Agent motion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Distance per tick, in the unit of `cell_size` (default: 0.1).
    #[serde(default = "default_speed")]
    pub speed: f64,

    /// Side length of one cell in the continuous frame (default: 1.0).
    #[serde(default = "default_cell_size")]
    pub cell_size: f64,
}

/// Signal phase durations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignalConfig {
    /// Seconds each signal stays RED (default: 4.0).
    #[serde(default = "default_red_secs")]
    pub red_secs: f64,

    /// Seconds each signal stays GREEN (default: 2.5).
    #[serde(default = "default_green_secs")]
    pub green_secs: f64,
}

/// Transient obstacle placement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObstacleConfig {
    /// Master switch (default: true).
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Seconds before the first placement (default: 6.0).
    #[serde(default = "default_delay_secs")]
    pub delay_secs: f64,

    /// Minimum agent path index before placing (default: 4).
    #[serde(default = "default_min_path_index")]
    pub min_path_index: usize,

    /// Cells ahead of the agent where the scan begins (default: 6).
    #[serde(default = "default_lookahead_steps")]
    pub lookahead_steps: usize,

    /// Placements per run (default: 1).
    #[serde(default = "default_max_placements")]
    pub max_placements: u32,
}

/// Run control for drivers such as the headless binary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Search strategy for the initial route and every replan (default: astar).
    #[serde(default)]
    pub strategy: SearchStrategy,

    /// Seconds per tick (default: 1/60).
    #[serde(default = "default_dt_secs")]
    pub dt_secs: f64,

    /// Hard stop for `run_until_done` (default: 100 000).
    #[serde(default = "default_max_ticks")]
    pub max_ticks: u64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self { speed: default_speed(), cell_size: default_cell_size() }
    }
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self { red_secs: default_red_secs(), green_secs: default_green_secs() }
    }
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        Self {
            enabled:         default_enabled(),
            delay_secs:      default_delay_secs(),
            min_path_index:  default_min_path_index(),
            lookahead_steps: default_lookahead_steps(),
            max_placements:  default_max_placements(),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            strategy:  SearchStrategy::default(),
            dt_secs:   default_dt_secs(),
            max_ticks: default_max_ticks(),
        }
    }
}

// Default value functions
fn default_speed() -> f64 {
    0.1
} // 4 px per frame on 40 px tiles
fn default_cell_size() -> f64 {
    1.0
}
fn default_red_secs() -> f64 {
    4.0
}
fn default_green_secs() -> f64 {
    2.5
}
fn default_enabled() -> bool {
    true
}
fn default_delay_secs() -> f64 {
    6.0
}
fn default_min_path_index() -> usize {
    4
}
fn default_lookahead_steps() -> usize {
    6
}
fn default_max_placements() -> u32 {
    1
}
fn default_dt_secs() -> f64 {
    1.0 / 60.0
}
fn default_max_ticks() -> u64 {
    100_000
}

impl SimConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> SimResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SimError::Config(format!("failed to read {}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> SimResult<Self> {
        let config: SimConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the tick loop cannot run with.
    pub fn validate(&self) -> SimResult<()> {
        let positive = |name: &str, v: f64| {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(SimError::Config(format!("{name} must be finite and > 0, got {v}")))
            }
        };
        positive("agent.speed", self.agent.speed)?;
        positive("agent.cell_size", self.agent.cell_size)?;
        positive("signals.red_secs", self.signals.red_secs)?;
        positive("signals.green_secs", self.signals.green_secs)?;
        positive("run.dt_secs", self.run.dt_secs)?;

        let delay = self.obstacles.delay_secs;
        if !delay.is_finite() || delay < 0.0 {
            return Err(SimError::Config(format!(
                "obstacles.delay_secs must be finite and >= 0, got {delay}"
            )));
        }
        if self.run.max_ticks == 0 {
            return Err(SimError::Config("run.max_ticks must be > 0".into()));
        }
        Ok(())
    }

    pub fn motion_params(&self) -> MotionParams {
        MotionParams { speed: self.agent.speed, cell_size: self.agent.cell_size }
    }

    pub fn signal_timing(&self) -> SignalTiming {
        SignalTiming { red_secs: self.signals.red_secs, green_secs: self.signals.green_secs }
    }

    /// The obstacle policy; `enabled = false` yields a policy that never fires.
    pub fn placement_policy(&self) -> PlacementPolicy {
        let o = &self.obstacles;
        let policy = PlacementPolicy {
            delay_secs:      o.delay_secs,
            min_path_index:  o.min_path_index,
            lookahead_steps: o.lookahead_steps,
            max_placements:  o.max_placements,
        };
        if o.enabled { policy } else { PlacementPolicy { max_placements: 0, ..policy } }
    }
}
