//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `agent_frames.csv`
//! - `events.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentFrameRow, EventRow, OutputResult};

pub const FRAMES_FILE: &str = "agent_frames.csv";
pub const EVENTS_FILE: &str = "events.csv";

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    frames:   Writer<File>,
    events:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut frames = Writer::from_path(dir.join(FRAMES_FILE))?;
        frames.write_record([
            "tick", "elapsed_secs", "row", "col", "x", "y", "heading", "motion",
            "path_index", "path_len", "status", "blocked", "red_signals",
        ])?;

        let mut events = Writer::from_path(dir.join(EVENTS_FILE))?;
        events.write_record(["tick", "kind", "row", "col", "detail"])?;

        Ok(Self { frames, events, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_frame(&mut self, row: &AgentFrameRow) -> OutputResult<()> {
        self.frames.write_record(&[
            row.tick.to_string(),
            format!("{:.4}", row.elapsed_secs),
            row.row.to_string(),
            row.col.to_string(),
            format!("{:.4}", row.x),
            format!("{:.4}", row.y),
            row.heading.to_string(),
            row.motion.to_string(),
            row.path_index.to_string(),
            row.path_len.to_string(),
            row.status.to_string(),
            row.blocked.to_string(),
            row.red_signals.to_string(),
        ])?;
        Ok(())
    }

    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        self.events.write_record(&[
            row.tick.to_string(),
            row.kind.to_string(),
            row.cell.map(|c| c.row.to_string()).unwrap_or_default(),
            row.cell.map(|c| c.col.to_string()).unwrap_or_default(),
            row.detail.clone(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.frames.flush()?;
        self.events.flush()?;
        Ok(())
    }
}
