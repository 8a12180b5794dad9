//! Integer Matrix and Column Orchestration
//!
//! A fixed-shape M x N matrix of `i32` in row-major storage. Columns are the
//! unit of sorting: [`Matrix::sort_columns`] extracts each column, runs one
//! algorithm over it, writes it into a fresh copy of the matrix, and sums the
//! per-column statistics. The receiver is never mutated, so the same original
//! matrix can feed both the display path (keep the sorted copy) and the
//! comparison table (keep only the stats).

use std::fmt;

use rand::Rng;

use crate::algorithms::Algorithm;
use crate::stats::SortStats;

/// Upper bound (exclusive) for randomly generated matrix values.
const RANDOM_VALUE_BOUND: i32 = 100;

/// A fixed-shape matrix of signed integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<i32>,
}

impl Matrix {
    /// Build a matrix from rows. All rows must have the same length.
    ///
    /// # Panics
    /// Panics on ragged input.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Matrix {
        let row_count = rows.len();
        let col_count = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(row_count * col_count);
        for row in &rows {
            assert_eq!(row.len(), col_count, "all matrix rows must have equal length");
            data.extend_from_slice(row);
        }
        Matrix {
            rows: row_count,
            cols: col_count,
            data,
        }
    }

    /// Generate an `rows x cols` matrix with values uniform in [0, 100).
    ///
    /// The random source is injected so callers can pass a seeded RNG for
    /// deterministic output.
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let data = (0..rows * cols)
            .map(|_| rng.gen_range(0..RANDOM_VALUE_BOUND))
            .collect();
        Matrix { rows, cols, data }
    }

    /// Number of rows (M).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (N).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Value at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> i32 {
        self.data[row * self.cols + col]
    }

    /// Extract column `col` as an owned vector of length `rows()`.
    pub fn column(&self, col: usize) -> Vec<i32> {
        (0..self.rows).map(|row| self.get(row, col)).collect()
    }

    fn set_column(&mut self, col: usize, values: &[i32]) {
        debug_assert_eq!(values.len(), self.rows);
        for (row, &value) in values.iter().enumerate() {
            self.data[row * self.cols + col] = value;
        }
    }

    /// Sort every column independently with `algorithm`.
    ///
    /// Returns a new matrix with each column sorted ascending by absolute
    /// value, plus the comparison/swap totals summed across all columns.
    /// `self` is left untouched.
    pub fn sort_columns(&self, algorithm: Algorithm) -> (Matrix, SortStats) {
        let mut sorted = self.clone();
        let mut total = SortStats::default();
        for col in 0..self.cols {
            let mut column = self.column(col);
            let mut stats = SortStats::default();
            algorithm.sort(&mut column, &mut stats);
            sorted.set_column(col, &column);
            total += stats;
        }
        (sorted, total)
    }
}

impl fmt::Display for Matrix {
    /// Tab-separated rows, one per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                write!(f, "{}\t", self.get(row, col))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
