//! `ObstacleScheduler` and the candidate-cell scan.

use tracing::debug;

use gn_core::{check_dt, BlockedSet, Cell, CellKind, Grid};
use gn_search::Path;

use crate::{ObstacleResult, PlacementPolicy};

/// First plain-`Open`, not-yet-blocked cell on `path` at or after the scan
/// start, excluding the final (goal) cell and `occupied`.
///
/// `occupied` is the cell the agent's continuous position lies in.  Once the
/// lookahead is clamped the scan can start at `path[path_index]`, which the
/// agent may already have entered.
///
/// Pure: reads the grid, the path and the blocked set, decides nothing about
/// timing.  Returns `None` when the agent has arrived or no cell qualifies.
pub fn choose_cell(
    grid:       &Grid,
    path:       &Path,
    path_index: usize,
    occupied:   Cell,
    lookahead:  usize,
    blocked:    &BlockedSet,
) -> Option<Cell> {
    let len = path.len();
    if path_index >= len {
        return None;
    }
    let scan_from = (path_index + lookahead).min(len.saturating_sub(2)).max(path_index);
    let scan_end  = len - 1;

    path.cells()
        .get(scan_from..scan_end)?
        .iter()
        .copied()
        .find(|&c| c != occupied && grid.kind(c) == Some(CellKind::Open) && !blocked.contains(c))
}

/// Decides, tick by tick, whether to block a cell ahead of the agent.
///
/// Holds only its own timer and placement count; the blocked set it writes
/// into belongs to the caller.
#[derive(Clone, Debug)]
pub struct ObstacleScheduler {
    policy:     PlacementPolicy,
    /// Seconds since the run started or since the last placement.
    elapsed:    f64,
    placements: u32,
}

impl ObstacleScheduler {
    pub fn new(policy: PlacementPolicy) -> ObstacleResult<Self> {
        Ok(Self { policy: policy.validated()?, elapsed: 0.0, placements: 0 })
    }

    pub fn policy(&self) -> &PlacementPolicy {
        &self.policy
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed
    }

    pub fn placements(&self) -> u32 {
        self.placements
    }

    /// `true` once `max_placements` obstacles have been placed this run.
    pub fn is_spent(&self) -> bool {
        self.placements >= self.policy.max_placements
    }

    /// Reset timer and placement count.  Called at the start of every run.
    pub fn rearm(&mut self) {
        self.elapsed = 0.0;
        self.placements = 0;
    }

    /// Accumulate `dt` seconds of simulated time.
    pub fn advance(&mut self, dt: f64) -> ObstacleResult<()> {
        self.elapsed += check_dt(dt)?;
        Ok(())
    }

    /// Place an obstacle if every condition holds, returning the cell.
    ///
    /// When no candidate qualifies this tick nothing changes and the
    /// scheduler tries again on the next call.
    pub fn maybe_fire(
        &mut self,
        grid:       &Grid,
        path:       &Path,
        path_index: usize,
        occupied:   Cell,
        blocked:    &mut BlockedSet,
    ) -> Option<Cell> {
        if self.is_spent()
            || self.elapsed < self.policy.delay_secs
            || path_index < self.policy.min_path_index
        {
            return None;
        }

        let cell = choose_cell(grid, path, path_index, occupied, self.policy.lookahead_steps, blocked)?;
        blocked.inject(cell);
        self.placements += 1;
        self.elapsed = 0.0;
        debug!(
            %cell, path_index,
            placements = self.placements,
            spent = self.is_spent(),
            "obstacle placed"
        );
        Some(cell)
    }
}
