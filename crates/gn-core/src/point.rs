//! Continuous (sub-cell) position type.
//!
//! The continuous frame has `x` along columns and `y` along rows, so a cell
//! `(row, col)` with side length `s` covers `[col*s, (col+1)*s) × [row*s,
//! (row+1)*s)`.  See [`Grid::cell_center`](crate::Grid::cell_center) and
//! [`Grid::cell_at`](crate::Grid::cell_at) for the conversions.

/// A point in the continuous plane overlaying the grid.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Componentwise `other - self`.
    #[inline]
    pub fn delta_to(self, other: Point) -> (f64, f64) {
        (other.x - self.x, other.y - self.y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
