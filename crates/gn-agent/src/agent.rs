//! The `Agent` value: where it is and what it is following.

use gn_core::{Cell, Grid, Point};
use gn_search::Path;

use crate::Heading;

/// Position and route of the single agent.
///
/// `path_index` points at the next cell to move toward.  It is always
/// `<= path.len()`; equality means the path is exhausted.
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    /// Last cell the agent snapped onto.
    pub cell:     Cell,
    /// Continuous position, cell centres at `(col + 0.5, row + 0.5) * size`.
    pub position: Point,
    pub heading:  Heading,

    path:       Path,
    path_index: usize,
}

impl Agent {
    /// An agent standing on the centre of `cell` with no path.
    pub fn at(cell: Cell, cell_size: f64) -> Self {
        Self {
            cell,
            position:   Grid::cell_center(cell, cell_size),
            heading:    Heading::default(),
            path:       Path::empty(),
            path_index: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn path_index(&self) -> usize {
        self.path_index
    }

    /// The cell being moved toward, or `None` when the path is exhausted.
    pub fn next_cell(&self) -> Option<Cell> {
        self.path.get(self.path_index)
    }

    /// `true` when the path is non-empty and fully walked.
    pub fn has_arrived(&self) -> bool {
        !self.path.is_empty() && self.path_index >= self.path.len()
    }

    /// Cells still to visit.
    pub fn remaining(&self) -> &[Cell] {
        self.path.cells().get(self.path_index..).unwrap_or(&[])
    }

    /// Cell containing the continuous position.
    pub fn current_cell(&self, cell_size: f64) -> Cell {
        let col = (self.position.x / cell_size).floor().max(0.0) as usize;
        let row = (self.position.y / cell_size).floor().max(0.0) as usize;
        Cell::new(row, col)
    }

    // ── Mutation (controller only) ────────────────────────────────────────

    pub(crate) fn install(&mut self, path: Path, cell_size: f64) {
        if let Some(origin) = path.first() {
            self.cell = origin;
            self.position = Grid::cell_center(origin, cell_size);
        }
        self.path = path;
        self.path_index = 0;
    }

    pub(crate) fn snap_to(&mut self, cell: Cell, cell_size: f64) {
        self.cell = cell;
        self.position = Grid::cell_center(cell, cell_size);
        self.path_index += 1;
    }
}
