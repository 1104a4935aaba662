//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use gn_core::{Cell, Tick};
use gn_search::{Path, SearchStrategy};
use gn_sim::{Frame, RunSummary, SimObserver};

use crate::row::{AgentFrameRow, EventKind, EventRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes agent frames and run events to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `run_until_done` returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:         W,
    frame_interval: u64,
    /// Latest frame skipped by the interval; written at run end.
    pending_frame:  Option<AgentFrameRow>,
    last_tick:      Tick,
    last_error:     Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer that writes every frame to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            frame_interval: 1,
            pending_frame:  None,
            last_tick:      Tick::ZERO,
            last_error:     None,
        }
    }

    /// Only write frames whose tick is a multiple of `n`.  The last frame
    /// before `on_run_end` is always written, whether the run finished or
    /// stopped on a tick limit.  `0` is treated as `1`.
    pub fn with_frame_interval(mut self, n: u64) -> Self {
        self.frame_interval = n.max(1);
        self
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn event(&mut self, kind: EventKind, cell: Option<Cell>, detail: String) {
        let row = EventRow { tick: self.last_tick.0, kind, cell, detail };
        let result = self.writer.write_event(&row);
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_run_start(&mut self, strategy: SearchStrategy, path: &Path) {
        self.event(
            EventKind::RunStart,
            path.first(),
            format!("strategy={strategy} path_len={}", path.len()),
        );
    }

    fn on_tick_start(&mut self, tick: Tick) {
        self.last_tick = tick;
    }

    fn on_obstacle_placed(&mut self, _tick: Tick, cell: Cell) {
        self.event(EventKind::Obstacle, Some(cell), String::new());
    }

    fn on_replan(&mut self, _tick: Tick, from: Cell, path: &Path) {
        let detail = if path.is_empty() {
            "no_route".to_string()
        } else {
            format!("path_len={}", path.len())
        };
        self.event(EventKind::Replan, Some(from), detail);
    }

    fn on_frame(&mut self, frame: &Frame<'_>) {
        let row = AgentFrameRow::from_frame(frame);
        if frame.tick.0 % self.frame_interval != 0 {
            self.pending_frame = Some(row);
            return;
        }
        self.pending_frame = None;
        let result = self.writer.write_frame(&row);
        self.store_err(result);
    }

    fn on_run_end(&mut self, summary: &RunSummary) {
        if let Some(row) = self.pending_frame.take() {
            let result = self.writer.write_frame(&row);
            self.store_err(result);
        }
        self.event(
            EventKind::RunEnd,
            Some(summary.final_cell),
            format!(
                "outcome={} ticks={} replans={} obstacles={}",
                summary.outcome, summary.ticks, summary.replans, summary.obstacles
            ),
        );
        let result = self.writer.finish();
        self.store_err(result);
    }
}
