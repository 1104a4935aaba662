//! Simulation observer trait for progress reporting and data collection.

use gn_core::{Cell, Tick};
use gn_search::{Path, SearchStrategy};

use crate::{Frame, RunSummary};

/// Callbacks invoked by [`Sim::run_until_done`][crate::Sim::run_until_done]
/// at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: replan logger
///
/// ```rust,ignore
/// struct ReplanCounter(u32);
///
/// impl SimObserver for ReplanCounter {
///     fn on_replan(&mut self, tick: Tick, from: Cell, path: &Path) {
///         self.0 += 1;
///         println!("{tick}: replanned from {from}, {} cells", path.len());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once before the first tick, with the initial route.
    fn on_run_start(&mut self, _strategy: SearchStrategy, _path: &Path) {}

    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called when the obstacle scheduler blocks `cell`.
    fn on_obstacle_placed(&mut self, _tick: Tick, _cell: Cell) {}

    /// Called after every replan.  `path` is empty when no route was found.
    fn on_replan(&mut self, _tick: Tick, _from: Cell, _path: &Path) {}

    /// Called at the end of each tick with the full per-tick view.
    fn on_frame(&mut self, _frame: &Frame<'_>) {}

    /// Called once after the final tick.
    fn on_run_end(&mut self, _summary: &RunSummary) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
