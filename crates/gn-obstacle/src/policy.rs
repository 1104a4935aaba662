//! `PlacementPolicy` — the tunables of the obstacle scheduler.

use crate::{ObstacleError, ObstacleResult};

/// When and where the scheduler is allowed to block a cell.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementPolicy {
    /// Seconds of simulated time before the first placement (and between
    /// placements when `max_placements > 1`).
    pub delay_secs:      f64,
    /// The agent must have reached at least this path index.
    pub min_path_index:  usize,
    /// How many cells ahead of the agent the scan begins.
    pub lookahead_steps: usize,
    /// Placements allowed per run.  Zero disables the scheduler.
    pub max_placements:  u32,
}

impl PlacementPolicy {
    /// A policy that never places anything.
    pub fn disabled() -> Self {
        Self { max_placements: 0, ..Self::default() }
    }

    pub fn validated(self) -> ObstacleResult<Self> {
        if !self.delay_secs.is_finite() || self.delay_secs < 0.0 {
            return Err(ObstacleError::InvalidPolicy(format!(
                "delay_secs must be finite and >= 0, got {}",
                self.delay_secs
            )));
        }
        Ok(self)
    }
}

impl Default for PlacementPolicy {
    /// 6 s delay, index 4, six cells of lookahead, one placement.
    fn default() -> Self {
        Self {
            delay_secs:      6.0,
            min_path_index:  4,
            lookahead_steps: 6,
            max_placements:  1,
        }
    }
}
