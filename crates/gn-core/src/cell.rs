//! Grid coordinates and per-cell kinds.
//!
//! `Cell` is `Copy + Ord + Hash` so it can be used as a map key, a set
//! element, and a sort key without ceremony.  The derived ordering is
//! row-major (`row` first, then `col`), which is what gives [`BlockedSet`]
//! its deterministic iteration order.
//!
//! [`BlockedSet`]: crate::BlockedSet

use std::fmt;

// ── Cell ──────────────────────────────────────────────────────────────────────

/// A `(row, col)` coordinate into a [`Grid`](crate::Grid).
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The cell displaced by `(d_row, d_col)`, or `None` if either coordinate
    /// would go negative.  Upper bounds are the grid's business.
    #[inline]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Cell> {
        Some(Cell {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }

    /// Manhattan (L1) distance: `|Δrow| + |Δcol|`.
    #[inline]
    pub fn manhattan(self, other: Cell) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// `true` if `other` is one of the four orthogonal neighbours of `self`.
    #[inline]
    pub fn is_adjacent(self, other: Cell) -> bool {
        self.manhattan(other) == 1
    }
}

impl From<(usize, usize)> for Cell {
    #[inline]
    fn from((row, col): (usize, usize)) -> Self {
        Cell { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ── CellKind ──────────────────────────────────────────────────────────────────

/// What occupies one grid position.
///
/// Everything except [`CellKind::Blocked`] is traversable.  The special
/// traversable kinds only matter to the obstacle scheduler (which avoids them)
/// and to signal discovery (`SignalPost`).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    /// Plain road.
    #[default]
    Open,
    /// Wall, building or water — permanently impassable.
    Blocked,
    /// The agent's starting cell.  Exactly one per grid.
    Start,
    /// The agent's destination.  Exactly one per grid.
    Goal,
    /// Junction; behaves as `Open` for traversal.
    Intersection,
    /// Anchor of one traffic signal; behaves as `Open` for traversal.
    SignalPost,
    /// Pedestrian crossing; behaves as `Open` for traversal.
    Crosswalk,
}

impl CellKind {
    /// `true` for every kind except `Blocked`.
    #[inline]
    pub fn is_traversable(self) -> bool {
        !matches!(self, CellKind::Blocked)
    }

    /// `true` only for plain road — the one kind an obstacle may be dropped on.
    #[inline]
    pub fn is_plain_open(self) -> bool {
        matches!(self, CellKind::Open)
    }

    /// Lower-case label, used in logs and CSV output.
    pub fn as_str(self) -> &'static str {
        match self {
            CellKind::Open         => "open",
            CellKind::Blocked      => "blocked",
            CellKind::Start        => "start",
            CellKind::Goal         => "goal",
            CellKind::Intersection => "intersection",
            CellKind::SignalPost   => "signal_post",
            CellKind::Crosswalk    => "crosswalk",
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
