//! `World` — the shared, mostly-static state every component reads.

use gn_core::{BlockedSet, Cell, Grid};
use gn_signal::SignalController;

/// Grid, transient obstacles and signals.
///
/// Components receive shared references.  The grid never changes; the
/// blocked set grows only through [`World::inject`] and is emptied only when
/// a new run starts.
#[derive(Debug, Clone)]
pub struct World {
    pub(crate) grid:    Grid,
    pub(crate) blocked: BlockedSet,
    pub(crate) signals: SignalController,
}

impl World {
    pub fn new(grid: Grid, signals: SignalController) -> Self {
        Self { grid, blocked: BlockedSet::new(), signals }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn blocked(&self) -> &BlockedSet {
        &self.blocked
    }

    pub fn signals(&self) -> &SignalController {
        &self.signals
    }

    /// Block `cell` for the rest of the run.  Returns `false` if it already was.
    pub fn inject(&mut self, cell: Cell) -> bool {
        self.blocked.inject(cell)
    }

    pub(crate) fn clear_blocked(&mut self) {
        self.blocked = BlockedSet::new();
    }
}
