//! Plain-text rendering of a frame.

use gn_core::{Cell, CellKind, Grid};
use gn_sim::Frame;

/// One character per cell:
///
/// | Char | Meaning                         |
/// |------|---------------------------------|
/// | `@`  | agent                           |
/// | `X`  | injected obstacle               |
/// | `R` / `g` | signal post, RED / GREEN   |
/// | `*`  | remaining route                 |
/// | `S` `G` | start, goal                  |
/// | `#`  | blocked terrain                 |
/// | `+` `=` | intersection, crosswalk      |
pub fn render(grid: &Grid, frame: &Frame<'_>) -> String {
    let ahead: Vec<Cell> = frame.path.cells().iter().skip(frame.path_index).copied().collect();

    let mut out = String::with_capacity(grid.cell_count() + grid.rows());
    for (cell, kind) in grid.iter() {
        let ch = if cell == frame.cell {
            '@'
        } else if frame.blocked.contains(cell) {
            'X'
        } else if let Some(state) = frame.signals.state_at(cell) {
            if state.is_red() { 'R' } else { 'g' }
        } else {
            match kind {
                CellKind::Start        => 'S',
                CellKind::Goal         => 'G',
                CellKind::Blocked      => '#',
                _ if ahead.contains(&cell) => '*',
                CellKind::Intersection => '+',
                CellKind::Crosswalk    => '=',
                _                      => '.',
            }
        };
        out.push(ch);
        if cell.col + 1 == grid.cols() {
            out.push('\n');
        }
    }
    out
}
