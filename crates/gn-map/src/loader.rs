//! Grid loaders.
//!
//! # CSV format
//!
//! Headerless, one grid row per record, one code per field.  Lines starting
//! with `#` are comments.
//!
//! ```csv
//! # 3×4 street
//! 1,1,1,1
//! 3,0,6,4
//! 1,1,1,1
//! ```
//!
//! # Text format
//!
//! The same matrix with fields separated by whitespace and/or commas; `#`
//! starts a comment anywhere on a line and blank lines are ignored.
//!
//! Both formats end in [`GridBuilder::build`], so an empty, ragged, or
//! start/goal-less matrix fails with [`MapError::Grid`].

use std::io::Read;
use std::path::Path;

use tracing::debug;

use gn_core::{CellKind, Grid, GridBuilder};

use crate::{code_of, kind_from_code, MapError, MapResult};

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a grid from a headerless CSV file of cell codes.
pub fn load_grid_csv(path: &Path) -> MapResult<Grid> {
    let file = std::fs::File::open(path).map_err(MapError::Io)?;
    let grid = load_grid_reader(file)?;
    debug!(path = %path.display(), rows = grid.rows(), cols = grid.cols(), "grid loaded");
    Ok(grid)
}

/// Like [`load_grid_csv`] but accepts any `Read` source.
pub fn load_grid_reader<R: Read>(reader: R) -> MapResult<Grid> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut builder = GridBuilder::new();
    for (row, result) in csv_reader.records().enumerate() {
        let record = result.map_err(|e| MapError::Parse(e.to_string()))?;
        let kinds = record
            .iter()
            .enumerate()
            .map(|(col, field)| parse_code(row, col, field))
            .collect::<MapResult<Vec<CellKind>>>()?;
        builder.push_row(kinds);
    }
    Ok(builder.build()?)
}

/// Parse a grid from text (whitespace- or comma-separated codes).
pub fn parse_grid_text(text: &str) -> MapResult<Grid> {
    let mut builder = GridBuilder::new();
    let rows = text
        .lines()
        .map(|line| line.split('#').next().unwrap_or_default())
        .filter(|line| !line.trim().is_empty());

    for (row, line) in rows.enumerate() {
        let kinds = line
            .split(|ch: char| ch == ',' || ch.is_whitespace())
            .filter(|field| !field.is_empty())
            .enumerate()
            .map(|(col, field)| parse_code(row, col, field))
            .collect::<MapResult<Vec<CellKind>>>()?;
        builder.push_row(kinds);
    }
    Ok(builder.build()?)
}

/// Render `grid` in the text format, one line per row.
pub fn grid_to_text(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.cell_count() * 2);
    for (cell, kind) in grid.iter() {
        if cell.col > 0 {
            out.push(' ');
        }
        out.push(char::from(b'0' + code_of(kind)));
        if cell.col + 1 == grid.cols() {
            out.push('\n');
        }
    }
    out
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_code(row: usize, col: usize, field: &str) -> MapResult<CellKind> {
    field
        .parse::<u8>()
        .ok()
        .and_then(kind_from_code)
        .ok_or_else(|| MapError::UnknownCode { row, col, code: field.to_string() })
}
