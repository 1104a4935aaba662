//! The `Path` result type.

use gn_core::{BlockedSet, Cell, Grid};

/// Ordered cells from the search origin to the goal.
///
/// An empty `Path` means "no route"; it is the normal failure value, not an
/// error.  A single-cell path means origin and goal coincide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    cells: Vec<Cell>,
}

impl Path {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn first(&self) -> Option<Cell> {
        self.cells.first().copied()
    }

    pub fn last(&self) -> Option<Cell> {
        self.cells.last().copied()
    }

    /// Number of moves (`len - 1`); zero for empty and single-cell paths.
    pub fn edge_count(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// `true` if every step is an orthogonal move and every cell after the
    /// first is passable under `blocked`.
    ///
    /// The origin is exempt: a replan may legitimately start from a cell the
    /// agent is already standing on.
    pub fn is_walkable(&self, grid: &Grid, blocked: &BlockedSet) -> bool {
        let steps_ok = self.cells.windows(2).all(|w| w[0].is_adjacent(w[1]));
        let cells_ok = self.cells.iter().skip(1).all(|&c| grid.is_passable(c, blocked));
        steps_ok && cells_ok
    }
}

impl From<Vec<Cell>> for Path {
    fn from(cells: Vec<Cell>) -> Self {
        Self { cells }
    }
}
