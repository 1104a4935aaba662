//! Fixed-order 4-neighbourhood.
//!
//! The order of [`DIRECTIONS`] decides tie-breaking for BFS, the exact path
//! DFS returns, and which of several equal-cost A* paths wins.  Changing it
//! changes observable results.

use gn_core::{BlockedSet, Cell, Grid};

/// `(Δrow, Δcol)` in generation order: up, down, left, right.
pub const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Passable orthogonal neighbours of `cell`, in [`DIRECTIONS`] order.
///
/// A neighbour is yielded iff it is in bounds, not a static wall, and not in
/// `blocked`.  No allocation.
#[inline]
pub fn neighbors<'a>(
    grid:    &'a Grid,
    blocked: &'a BlockedSet,
    cell:    Cell,
) -> impl Iterator<Item = Cell> + 'a {
    DIRECTIONS
        .iter()
        .filter_map(move |&(dr, dc)| cell.offset(dr, dc))
        .filter(move |&n| grid.is_passable(n, blocked))
}
