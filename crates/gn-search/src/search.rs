//! `search` entry point and the three strategies.
//!
//! BFS and DFS share one loop parameterised by a [`Frontier`] (FIFO queue or
//! LIFO stack).  Both record a cell as visited when it is *enqueued*, so a
//! cell is never pushed twice.  A* uses a binary min-heap keyed on
//! `(f, cell)` with lazy deletion of stale entries.
//!
//! All three write back-pointers into a dense per-cell array ([`SearchTree`])
//! and reconstruct the path from the goal once it is popped.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use tracing::debug;

use gn_core::{BlockedSet, Cell, Grid};

use crate::neighbors::neighbors;
use crate::{Path, SearchError, SearchResult, SearchStrategy};

// ── Public entry point ────────────────────────────────────────────────────────

/// Find a route from `start` to `goal` avoiding walls and `blocked`.
///
/// Dispatches once on `strategy`.  See the crate docs for the full contract.
pub fn search(
    grid:     &Grid,
    strategy: SearchStrategy,
    start:    Cell,
    goal:     Cell,
    blocked:  &BlockedSet,
) -> SearchResult<Path> {
    check_in_bounds(grid, "start", start)?;
    check_in_bounds(grid, "goal", goal)?;

    if start == goal {
        return Ok(Path::new(vec![start]));
    }

    let outcome = match strategy {
        SearchStrategy::Bfs   => uninformed::<VecDeque<Cell>>(grid, start, goal, blocked),
        SearchStrategy::Dfs   => uninformed::<Vec<Cell>>(grid, start, goal, blocked),
        SearchStrategy::AStar => astar(grid, start, goal, blocked),
    };

    debug!(
        %strategy, %start, %goal,
        expanded = outcome.expanded,
        path_len = outcome.path.len(),
        "search finished"
    );
    Ok(outcome.path)
}

fn check_in_bounds(grid: &Grid, endpoint: &'static str, cell: Cell) -> SearchResult<()> {
    if grid.contains(cell) {
        Ok(())
    } else {
        Err(SearchError::OutOfBounds { endpoint, cell, rows: grid.rows(), cols: grid.cols() })
    }
}

// ── Shared internals ──────────────────────────────────────────────────────────

/// Path plus the number of cells popped from the frontier.
struct Outcome {
    path:     Path,
    expanded: usize,
}

/// Dense back-pointer map: `parent[i]` is the cell that discovered cell `i`.
///
/// `seen` is kept separately because the origin is seen but has no parent.
struct SearchTree<'g> {
    grid:   &'g Grid,
    seen:   Vec<bool>,
    parent: Vec<Option<Cell>>,
}

impl<'g> SearchTree<'g> {
    fn new(grid: &'g Grid, root: Cell) -> Self {
        let n = grid.cell_count();
        let mut tree = Self { grid, seen: vec![false; n], parent: vec![None; n] };
        tree.seen[grid.index(root)] = true;
        tree
    }

    #[inline]
    fn is_seen(&self, cell: Cell) -> bool {
        self.seen[self.grid.index(cell)]
    }

    #[inline]
    fn link(&mut self, cell: Cell, parent: Cell) {
        let i = self.grid.index(cell);
        self.seen[i] = true;
        self.parent[i] = Some(parent);
    }

    /// Walk parents back from `goal` to the root and reverse.
    fn reconstruct(&self, goal: Cell) -> Path {
        let mut cells = vec![goal];
        let mut cur = goal;
        while let Some(prev) = self.parent[self.grid.index(cur)] {
            cells.push(prev);
            cur = prev;
        }
        cells.reverse();
        Path::new(cells)
    }
}

// ── BFS / DFS ─────────────────────────────────────────────────────────────────

/// Push/pop discipline for the uninformed searches.
trait Frontier: Default {
    fn put(&mut self, cell: Cell);
    fn take(&mut self) -> Option<Cell>;
}

/// FIFO — breadth-first.
impl Frontier for VecDeque<Cell> {
    fn put(&mut self, cell: Cell) {
        self.push_back(cell);
    }
    fn take(&mut self) -> Option<Cell> {
        self.pop_front()
    }
}

/// LIFO — depth-first.
impl Frontier for Vec<Cell> {
    fn put(&mut self, cell: Cell) {
        self.push(cell);
    }
    fn take(&mut self) -> Option<Cell> {
        self.pop()
    }
}

fn uninformed<F: Frontier>(grid: &Grid, start: Cell, goal: Cell, blocked: &BlockedSet) -> Outcome {
    let mut tree = SearchTree::new(grid, start);
    let mut frontier = F::default();
    frontier.put(start);
    let mut expanded = 0;

    while let Some(cell) = frontier.take() {
        expanded += 1;
        if cell == goal {
            return Outcome { path: tree.reconstruct(goal), expanded };
        }
        for next in neighbors(grid, blocked, cell) {
            if !tree.is_seen(next) {
                tree.link(next, cell);
                frontier.put(next);
            }
        }
    }

    Outcome { path: Path::empty(), expanded }
}

// ── A* ────────────────────────────────────────────────────────────────────────

fn astar(grid: &Grid, start: Cell, goal: Cell, blocked: &BlockedSet) -> Outcome {
    let h = |c: Cell| c.manhattan(goal);

    let mut tree = SearchTree::new(grid, start);
    // g[i] = best known step count from start; usize::MAX for unseen cells.
    let mut g = vec![usize::MAX; grid.cell_count()];
    g[grid.index(start)] = 0;

    // Min-heap: (f, cell).  Reverse makes BinaryHeap (max) behave as min-heap.
    // Secondary key Cell (row-major) gives deterministic tie-breaking.
    let mut heap: BinaryHeap<Reverse<(usize, Cell)>> = BinaryHeap::new();
    heap.push(Reverse((h(start), start)));
    let mut expanded = 0;

    while let Some(Reverse((f, cell))) = heap.pop() {
        if cell == goal {
            return Outcome { path: tree.reconstruct(goal), expanded: expanded + 1 };
        }

        let g_cell = g[grid.index(cell)];
        // Stale heap entry: a cheaper route to `cell` was pushed after this one.
        if f > g_cell + h(cell) {
            continue;
        }
        expanded += 1;

        let g_next = g_cell + 1;
        for next in neighbors(grid, blocked, cell) {
            let i = grid.index(next);
            if g_next < g[i] {
                g[i] = g_next;
                tree.link(next, cell);
                heap.push(Reverse((g_next + h(next), next)));
            }
        }
    }

    Outcome { path: Path::empty(), expanded }
}
