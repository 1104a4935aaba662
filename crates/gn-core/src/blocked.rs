//! The transient blocked set.
//!
//! Backed by a `BTreeSet` rather than a hash set: every consumer that
//! iterates it (search, overlays, CSV output) sees the same row-major order on
//! every run.

use std::collections::BTreeSet;

use crate::Cell;

/// Cells that are temporarily impassable on top of the grid's static walls.
///
/// A fresh run starts from an empty set.  The only mutating operation is
/// [`inject`](Self::inject); obstacles never expire.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockedSet {
    cells: BTreeSet<Cell>,
}

impl BlockedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `cell` as blocked.  Returns `false` if it already was.
    pub fn inject(&mut self, cell: Cell) -> bool {
        self.cells.insert(cell)
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Blocked cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }
}

impl FromIterator<Cell> for BlockedSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self { cells: iter.into_iter().collect() }
    }
}
