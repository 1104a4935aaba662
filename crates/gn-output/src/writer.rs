//! The `OutputWriter` trait implemented by all backend writers.

use crate::{AgentFrameRow, EventRow, OutputResult};

/// Sink for frame and event rows.
///
/// Errors are stored by [`SimOutputObserver`](crate::SimOutputObserver) and
/// retrieved with `take_error` after the run.
pub trait OutputWriter {
    /// Write one per-tick agent row.
    fn write_frame(&mut self, row: &AgentFrameRow) -> OutputResult<()>;

    /// Write one run event.
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
