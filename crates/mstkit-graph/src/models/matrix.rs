//! Dense square matrix of optional slots.
//!
//! Backing store for [`AdjacencyMatrixGraph`](super::matrix_graph::AdjacencyMatrixGraph):
//! - O(1) access to any `(row, col)` cell
//! - O(n) scan of a row for neighbours
//! - O(n²) copy when a vertex is pushed or removed
//!
//! Memory layout:
//! - `cells` is row-major with `dim * dim` elements
//! - `cells[row * dim + col]` holds the slot for `(row, col)`
//!
//! Resizing is an O(n²) copy on every vertex insertion and removal. This is the
//! chosen trade-off: cache-friendly row scans and a single allocation, at the
//! cost of quadratic structural mutation.

/// Row-major `dim × dim` matrix of `Option<T>`.
#[derive(Debug, Clone)]
pub struct SquareMatrix<T> {
    /// Number of rows (equals number of columns).
    dim: usize,
    /// Row-major cells (length = dim * dim).
    cells: Vec<Option<T>>,
}

impl<T> Default for SquareMatrix<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SquareMatrix<T> {
    /// Create an empty 0×0 matrix.
    pub fn new() -> Self {
        Self {
            dim: 0,
            cells: Vec::new(),
        }
    }

    /// Create an empty matrix with room for `dim` vertices.
    pub fn with_capacity(dim: usize) -> Self {
        Self {
            dim: 0,
            cells: Vec::with_capacity(dim * dim),
        }
    }

    /// Side length.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Check if the matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.dim == 0
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.dim && col < self.dim);
        row * self.dim + col
    }

    /// Get the slot at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row >= self.dim || col >= self.dim {
            return None;
        }
        self.cells[self.offset(row, col)].as_ref()
    }

    /// Replace the slot at `(row, col)`, returning the previous contents.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is out of bounds.
    pub fn replace(&mut self, row: usize, col: usize, value: Option<T>) -> Option<T> {
        assert!(
            row < self.dim && col < self.dim,
            "cell ({}, {}) outside {}x{} matrix",
            row,
            col,
            self.dim,
            self.dim
        );
        let offset = self.offset(row, col);
        std::mem::replace(&mut self.cells[offset], value)
    }

    /// Iterate over the slots of one row.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Option<&T>> + '_ {
        let range = if row < self.dim {
            row * self.dim..(row + 1) * self.dim
        } else {
            0..0
        };
        self.cells[range].iter().map(Option::as_ref)
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Iterate over occupied cells as `(row, col, value)`.
    pub fn iter_occupied(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        let dim = self.dim;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, c)| c.as_ref().map(|v| (i / dim, i % dim, v)))
    }

    /// Grow by one row and one column, both empty.
    pub fn push_vertex(&mut self) {
        let old = self.dim;
        let new = old + 1;
        let mut cells = Vec::with_capacity(new * new);
        let mut drain = std::mem::take(&mut self.cells).into_iter();
        for _ in 0..old {
            cells.extend(drain.by_ref().take(old));
            cells.push(None);
        }
        cells.extend((0..new).map(|_| None));
        self.cells = cells;
        self.dim = new;
    }

    /// Remove row `index` and column `index`.
    ///
    /// Cells past `index` shift up/left by one, so indices above `index`
    /// are decremented.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove_vertex(&mut self, index: usize) {
        assert!(index < self.dim, "vertex {} outside {}", index, self.dim);
        let old = self.dim;
        let new = old - 1;
        let mut cells = Vec::with_capacity(new * new);
        for (i, cell) in std::mem::take(&mut self.cells).into_iter().enumerate() {
            if i / old != index && i % old != index {
                cells.push(cell);
            }
        }
        self.cells = cells;
        self.dim = new;
    }

    /// Drop every row and column.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.dim = 0;
    }
}

impl<T: PartialEq> SquareMatrix<T> {
    /// Check that `(i, j)` and `(j, i)` always agree and the diagonal is empty.
    pub fn is_symmetric_loopless(&self) -> bool {
        (0..self.dim).all(|i| {
            self.get(i, i).is_none() && (i + 1..self.dim).all(|j| self.get(i, j) == self.get(j, i))
        })
    }
}
