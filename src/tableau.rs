//! Dense storage for a simplex dictionary, and the handful of row/column
//! primitives the pivot operator is built from.
//!
//! The storage is oversized by one column versus the logical problem: index
//! `0` of every row is reserved for the Phase I auxiliary variable `x₀`
//! (see [`crate::phase1`]). [`Tableau`] never interprets that column itself
//! — it is just another column to the row/column primitives below — the
//! offset bookkeeping lives in [`crate::basis::Basis`].

use std::ops::RangeInclusive;

/// A `(m+1) × (n+2)` dense working area: an objective row `c` of width
/// `n+1` (columns `0..=n`, column `0` reserved for `x₀`) and a constraint
/// block `a` of shape `m × (n+2)` (columns `0..=n` plus a trailing RHS
/// column at `n+1`).
#[derive(Debug, Clone)]
pub struct Tableau {
    n: usize,
    c: Vec<f64>,
    a: Vec<Vec<f64>>,
}

impl Tableau {
    pub fn zeros(n: usize, m: usize) -> Tableau {
        Tableau {
            n,
            c: vec![0.0; n + 1],
            a: vec![vec![0.0; n + 2]; m],
        }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn rows(&self) -> usize {
        self.a.len()
    }

    pub fn rhs_col(&self) -> usize {
        self.n + 1
    }

    pub fn c(&self, col: usize) -> f64 {
        self.c[col]
    }

    pub fn set_c(&mut self, col: usize, value: f64) {
        self.c[col] = value;
    }

    pub fn a(&self, row: usize, col: usize) -> f64 {
        self.a[row][col]
    }

    pub fn set_a(&mut self, row: usize, col: usize, value: f64) {
        self.a[row][col] = value;
    }

    pub fn rhs(&self, row: usize) -> f64 {
        let col = self.rhs_col();
        self.a[row][col]
    }

    pub fn set_rhs(&mut self, row: usize, value: f64) {
        let col = self.rhs_col();
        self.a[row][col] = value;
    }

    /// Divides every element of constraint row `row` by `factor`, across
    /// the given (inclusive) column range.
    pub fn scale_constraint_row(&mut self, row: usize, factor: f64, cols: RangeInclusive<usize>) {
        for j in cols {
            self.a[row][j] /= factor;
        }
    }

    /// `a[row][j] -= factor * pivot_row[j]` for every `j` in the given
    /// range. `pivot_row` is normally a just-scaled row of this same
    /// tableau, borrowed out by the caller to satisfy the borrow checker.
    pub fn eliminate_constraint_row(
        &mut self,
        row: usize,
        factor: f64,
        pivot_row: &[f64],
        cols: RangeInclusive<usize>,
    ) {
        for j in cols {
            self.a[row][j] -= factor * pivot_row[j];
        }
    }

    /// `c[j] -= factor * pivot_row[j]` for every `j` in the given range.
    pub fn eliminate_objective_row(
        &mut self,
        factor: f64,
        pivot_row: &[f64],
        cols: RangeInclusive<usize>,
    ) {
        for j in cols {
            self.c[j] -= factor * pivot_row[j];
        }
    }

    /// Exchanges columns `col1` and `col2` across every row of the
    /// constraint block.
    pub fn swap_constraint_columns(&mut self, col1: usize, col2: usize) {
        for row in self.a.iter_mut() {
            row.swap(col1, col2);
        }
    }

    /// Exchanges columns `col1` and `col2` of the objective row.
    pub fn swap_objective_columns(&mut self, col1: usize, col2: usize) {
        self.c.swap(col1, col2);
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.a[row]
    }
}
