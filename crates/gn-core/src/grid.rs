//! Occupancy grid representation and builder.
//!
//! # Data layout
//!
//! Cell kinds are stored row-major in a single `Vec<CellKind>`; cell
//! `(r, c)` lives at index `r * cols + c`.  The grid is immutable once built:
//! transient obstacles are tracked separately in a [`BlockedSet`] so that the
//! static map can be shared by reference for the lifetime of the process.
//!
//! # Validation
//!
//! [`GridBuilder::build`] is the only way to obtain a `Grid`, and it refuses
//! maps that are empty, ragged, or do not contain exactly one `Start` and one
//! `Goal`.  Every `Grid` value therefore has a well-defined start and goal.

use crate::{BlockedSet, Cell, CellKind, GridError, GridResult, Point, SimRng};

// ── Grid ──────────────────────────────────────────────────────────────────────

/// Immutable `rows × cols` matrix of [`CellKind`].
///
/// Do not construct directly; use [`GridBuilder`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows:  usize,
    cols:  usize,
    kinds: Vec<CellKind>,
    start: Cell,
    goal:  Cell,
}

impl Grid {
    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.kinds.len()
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Dense index of `cell` (row-major).  Caller guarantees `contains(cell)`.
    #[inline]
    pub fn index(&self, cell: Cell) -> usize {
        cell.row * self.cols + cell.col
    }

    // ── Cell queries ──────────────────────────────────────────────────────

    /// Kind at `cell`, or `None` when out of bounds.
    #[inline]
    pub fn kind(&self, cell: Cell) -> Option<CellKind> {
        self.contains(cell).then(|| self.kinds[self.index(cell)])
    }

    /// `true` if `cell` is in bounds and not statically `Blocked`.
    #[inline]
    pub fn is_traversable(&self, cell: Cell) -> bool {
        self.kind(cell).is_some_and(CellKind::is_traversable)
    }

    /// `true` if `cell` is traversable and not in the transient blocked set.
    #[inline]
    pub fn is_passable(&self, cell: Cell, blocked: &BlockedSet) -> bool {
        self.is_traversable(cell) && !blocked.contains(cell)
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// First cell (row-major) of the given kind.
    pub fn find(&self, kind: CellKind) -> Option<Cell> {
        self.cells_of(kind).next()
    }

    /// All cells of the given kind, in row-major order.
    pub fn cells_of(&self, kind: CellKind) -> impl Iterator<Item = Cell> + '_ {
        self.iter().filter(move |&(_, k)| k == kind).map(|(c, _)| c)
    }

    /// Every `(cell, kind)` pair in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, CellKind)> + '_ {
        let cols = self.cols;
        self.kinds
            .iter()
            .enumerate()
            .map(move |(i, &k)| (Cell::new(i / cols, i % cols), k))
    }

    // ── Continuous-frame conversion ───────────────────────────────────────

    /// Centre of `cell` in the continuous frame, for cells of side `cell_size`.
    #[inline]
    pub fn cell_center(cell: Cell, cell_size: f64) -> Point {
        Point::new(
            (cell.col as f64 + 0.5) * cell_size,
            (cell.row as f64 + 0.5) * cell_size,
        )
    }

    /// The cell containing `p`, or `None` if `p` lies outside this grid.
    pub fn cell_at(&self, p: Point, cell_size: f64) -> Option<Cell> {
        let col = (p.x / cell_size).floor();
        let row = (p.y / cell_size).floor();
        if row < 0.0 || col < 0.0 || !row.is_finite() || !col.is_finite() {
            return None;
        }
        let cell = Cell::new(row as usize, col as usize);
        self.contains(cell).then_some(cell)
    }
}

// ── GridBuilder ───────────────────────────────────────────────────────────────

/// Construct a [`Grid`] row by row (or cell by cell), then call
/// [`build`](Self::build).
///
/// # Example
///
/// ```
/// use gn_core::{Cell, CellKind, GridBuilder};
///
/// let grid = GridBuilder::open(3, 4)
///     .with_cell(Cell::new(0, 0), CellKind::Start)
///     .with_cell(Cell::new(2, 3), CellKind::Goal)
///     .with_cell(Cell::new(1, 1), CellKind::Blocked)
///     .build()
///     .unwrap();
/// assert_eq!(grid.rows(), 3);
/// assert_eq!(grid.goal(), Cell::new(2, 3));
/// ```
#[derive(Clone, Debug, Default)]
pub struct GridBuilder {
    rows:  Vec<Vec<CellKind>>,
    /// First out-of-bounds `with_cell` call, reported by `build`.
    error: Option<GridError>,
}

impl GridBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A `rows × cols` grid of plain `Open` cells (start and goal still to
    /// be placed).
    pub fn open(rows: usize, cols: usize) -> Self {
        Self {
            rows:  vec![vec![CellKind::Open; cols]; rows],
            error: None,
        }
    }

    /// Start from an explicit matrix of kinds.  Ragged input is accepted
    /// here and rejected by `build`.
    pub fn from_rows(rows: Vec<Vec<CellKind>>) -> Self {
        Self { rows, error: None }
    }

    /// Append one row.
    pub fn push_row(&mut self, row: Vec<CellKind>) {
        self.rows.push(row);
    }

    /// Overwrite the kind at `cell`.  Out-of-bounds cells are reported by
    /// `build` rather than panicking here, so calls can be chained.
    pub fn with_cell(mut self, cell: Cell, kind: CellKind) -> Self {
        match self.rows.get_mut(cell.row).and_then(|r| r.get_mut(cell.col)) {
            Some(slot) => *slot = kind,
            None => {
                if self.error.is_none() {
                    self.error = Some(GridError::OutOfBounds {
                        cell,
                        rows: self.rows.len(),
                        cols: self.rows.first().map_or(0, Vec::len),
                    });
                }
            }
        }
        self
    }

    /// Turn each plain `Open` cell into `Blocked` with probability `density`.
    ///
    /// Start, goal and the other special kinds are never touched, so a grid
    /// that was valid before scattering stays valid after it.
    pub fn scatter(mut self, rng: &mut SimRng, density: f64) -> Self {
        for row in &mut self.rows {
            for kind in row.iter_mut() {
                if kind.is_plain_open() && rng.gen_bool(density) {
                    *kind = CellKind::Blocked;
                }
            }
        }
        self
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Validate and produce a [`Grid`].
    pub fn build(self) -> GridResult<Grid> {
        if let Some(err) = self.error {
            return Err(err);
        }

        let rows = self.rows.len();
        let cols = self.rows.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }

        let mut kinds = Vec::with_capacity(rows * cols);
        let mut start: Option<Cell> = None;
        let mut goal:  Option<Cell> = None;

        for (r, row) in self.rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::Ragged { row: r, expected: cols, got: row.len() });
            }
            for (c, kind) in row.into_iter().enumerate() {
                let cell = Cell::new(r, c);
                match kind {
                    CellKind::Start => match start {
                        Some(first) => return Err(GridError::DuplicateStart { first, second: cell }),
                        None => start = Some(cell),
                    },
                    CellKind::Goal => match goal {
                        Some(first) => return Err(GridError::DuplicateGoal { first, second: cell }),
                        None => goal = Some(cell),
                    },
                    _ => {}
                }
                kinds.push(kind);
            }
        }

        Ok(Grid {
            rows,
            cols,
            kinds,
            start: start.ok_or(GridError::MissingStart)?,
            goal:  goal.ok_or(GridError::MissingGoal)?,
        })
    }
}
