//! `SignalController` — owns every signal on the map.

use std::collections::BTreeMap;

use tracing::trace;

use gn_core::{check_dt, Cell, CellKind, Grid};

use crate::{Signal, SignalResult, SignalState, SignalTiming};

/// All signals of one grid, keyed by their post cell.
///
/// Built once per grid and kept for the life of the process; signals are
/// not reset between runs.
#[derive(Clone, Debug, Default)]
pub struct SignalController {
    signals: BTreeMap<Cell, Signal>,
}

impl SignalController {
    /// One RED signal per `SignalPost` cell in `grid`.
    pub fn from_grid(grid: &Grid, timing: SignalTiming) -> SignalResult<Self> {
        let timing = timing.validated()?;
        let signals = grid
            .cells_of(CellKind::SignalPost)
            .map(|cell| (cell, Signal::new(cell, timing)))
            .collect();
        Ok(Self { signals })
    }

    /// Advance every signal by `dt` seconds.
    ///
    /// Returns the number of signals that changed phase.
    ///
    /// # Errors
    ///
    /// `CoreError::InvalidDt` (wrapped) if `dt` is negative or non-finite.
    pub fn update(&mut self, dt: f64) -> SignalResult<usize> {
        let dt = check_dt(dt)?;
        let mut changed = 0;
        for signal in self.signals.values_mut() {
            if let Some(state) = signal.advance(dt) {
                trace!(cell = %signal.position, %state, "signal changed");
                changed += 1;
            }
        }
        Ok(changed)
    }

    /// State of the signal at `cell`, or `None` if there is no signal there.
    #[inline]
    pub fn state_at(&self, cell: Cell) -> Option<SignalState> {
        self.signals.get(&cell).map(Signal::state)
    }

    /// `true` iff a signal sits on `cell` and is RED.
    #[inline]
    pub fn is_red(&self, cell: Cell) -> bool {
        self.state_at(cell).is_some_and(SignalState::is_red)
    }

    pub fn get(&self, cell: Cell) -> Option<&Signal> {
        self.signals.get(&cell)
    }

    /// Signals in row-major order of their post cells.
    pub fn iter(&self) -> impl Iterator<Item = &Signal> + '_ {
        self.signals.values()
    }

    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }
}
