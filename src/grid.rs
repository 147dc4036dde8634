use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

/// Errors from [`Grid`] construction and single-cell access.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Both grid dimensions must be positive.
    #[error("invalid grid dimensions {rows}x{cols}: rows and cols must be positive")]
    InvalidDimension { rows: usize, cols: usize },

    /// Single-cell query outside the grid.
    #[error("cell ({row}, {col}) is out of range for a {rows}x{cols} grid")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// Dense Game of Life field with clipped edges.
///
/// Cells are stored row-major. The next generation is computed into a
/// second buffer and swapped in, so an update never reads a partially
/// written generation.
#[derive(Debug)]
pub struct Grid {
    cells: Vec<bool>,
    next: Vec<bool>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Creates a grid of the given dimensions with every cell dead.
    pub fn blank(rows: usize, cols: usize) -> Result<Self, GridError> {
        let size = match rows.checked_mul(cols) {
            Some(size) if rows > 0 && cols > 0 => size,
            _ => return Err(GridError::InvalidDimension { rows, cols }),
        };
        Ok(Self {
            cells: vec![false; size],
            next: vec![false; size],
            rows,
            cols,
        })
    }

    /// Creates a grid where each cell is independently alive with
    /// probability `alive_probability`.
    ///
    /// `alive_probability` must lie within `[0, 1]`. Passing a seed makes
    /// the fill deterministic; `None` seeds from entropy.
    pub fn random(
        rows: usize,
        cols: usize,
        alive_probability: f64,
        seed: Option<u64>,
    ) -> Result<Self, GridError> {
        let mut grid = Self::blank(rows, cols)?;
        let mut rng = if let Some(seed) = seed {
            ChaCha8Rng::seed_from_u64(seed)
        } else {
            ChaCha8Rng::from_entropy()
        };
        for cell in grid.cells.iter_mut() {
            *cell = rng.gen_bool(alive_probability);
        }
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row-major view of the current generation.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Number of live cells in the current generation.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Coordinates of every live cell, in row-major order.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(move |(i, _)| (i / cols, i % cols))
    }

    /// Returns whether the cell at `(row, col)` is alive.
    pub fn is_alive(&self, row: usize, col: usize) -> Result<bool, GridError> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Overwrites the state of the cell at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<(), GridError> {
        let i = self.index(row, col)?;
        self.cells[i] = alive;
        Ok(())
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row < self.rows && col < self.cols {
            Ok(row * self.cols + col)
        } else {
            Err(GridError::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Number of live cells among the 8 Moore neighbors of `(row, col)`.
    ///
    /// Coordinates outside the grid are absent and contribute zero, so
    /// edge and corner cells see fewer than 8 neighbors.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> usize {
        let (r, c) = (row as isize, col as isize);
        self.alive_at(r - 1, c - 1) as usize
            + self.alive_at(r - 1, c) as usize
            + self.alive_at(r - 1, c + 1) as usize
            + self.alive_at(r, c - 1) as usize
            + self.alive_at(r, c + 1) as usize
            + self.alive_at(r + 1, c - 1) as usize
            + self.alive_at(r + 1, c) as usize
            + self.alive_at(r + 1, c + 1) as usize
    }

    // in-bounds and alive; out-of-bounds neighbors are absent, not wrapped
    fn alive_at(&self, row: isize, col: isize) -> bool {
        if row < 0 || col < 0 || row >= self.rows as isize || col >= self.cols as isize {
            return false;
        }
        self.cells[row as usize * self.cols + col as usize]
    }

    /// Advances the grid by one generation.
    ///
    /// A dead cell turns alive on exactly 3 live neighbors; a live cell
    /// survives on 2 or 3. The whole next generation is derived from the
    /// current snapshot before it replaces it.
    pub fn step(&mut self) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let neighbors = self.count_live_neighbors(row, col);
                let i = row * self.cols + col;
                self.next[i] = if self.cells[i] {
                    neighbors == 2 || neighbors == 3
                } else {
                    neighbors == 3
                };
            }
        }
        std::mem::swap(&mut self.cells, &mut self.next);
    }
}
