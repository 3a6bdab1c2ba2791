//! The simplex dictionary: a [`Tableau`] plus [`Basis`] bookkeeping plus the
//! scalar objective offset `v`, and the pivot operator that rewrites all
//! three together.

use crate::basis::Basis;
use crate::tableau::Tableau;

/// `x_B = b − N·x_N`, `objective = v + cᵀx_N`, oversized by one leftmost
/// column for the Phase I auxiliary variable. One call to [`crate::solve`]
/// owns exactly one `Dictionary`.
#[derive(Debug, Clone)]
pub struct Dictionary {
    tableau: Tableau,
    basis: Basis,
    v: f64,
}

impl Dictionary {
    pub fn new(tableau: Tableau, basis: Basis) -> Dictionary {
        debug_assert_eq!(tableau.n(), basis.n());
        debug_assert_eq!(tableau.rows(), basis.rows());
        Dictionary {
            tableau,
            basis,
            v: 0.0,
        }
    }

    pub fn tableau(&self) -> &Tableau {
        &self.tableau
    }

    pub fn tableau_mut(&mut self) -> &mut Tableau {
        &mut self.tableau
    }

    pub fn basis(&self) -> &Basis {
        &self.basis
    }

    pub fn basis_mut(&mut self) -> &mut Basis {
        &mut self.basis
    }

    pub fn v(&self) -> f64 {
        self.v
    }

    pub fn set_v(&mut self, v: f64) {
        self.v = v;
    }

    pub fn n(&self) -> usize {
        self.tableau.n()
    }

    pub fn rows(&self) -> usize {
        self.tableau.rows()
    }

    /// `x_{B[leaving_row]}` becomes non-basic and `x_{N[entering_col]}`
    /// becomes basic. `entering_col` is a *physical* tableau column (in
    /// [`Basis::active_columns`]), not a position in `N`.
    ///
    /// Precondition: `a[leaving_row][entering_col] != 0`.
    pub fn pivot(&mut self, leaving_row: usize, entering_col: usize) {
        // The constraint block's columns span the RHS too; the objective
        // row has no RHS, so it only spans the currently-active
        // structural/aux columns.
        let a_cols = self.basis.offset()..=self.tableau.rhs_col();
        let c_cols = self.basis.active_columns();
        let coef = self.tableau.a(leaving_row, entering_col);
        debug_assert_ne!(coef, 0.0, "pivot element must be nonzero");

        // Step 1: rewrite the leaving row so it expresses the new basic
        // variable. Scaling divides every column (including `entering_col`
        // and the RHS) by `coef`; the entering column is then overwritten
        // with `1/coef` rather than the `1` a uniform scale would leave,
        // per the dictionary's pivot algebra.
        self.tableau
            .scale_constraint_row(leaving_row, coef, a_cols.clone());
        self.tableau.set_a(leaving_row, entering_col, 1.0 / coef);

        // Step 2: eliminate the entering column from every other row.
        let pivot_row = self.tableau.row(leaving_row).to_vec();
        for i in 0..self.rows() {
            if i == leaving_row {
                continue;
            }
            let coef_i = self.tableau.a(i, entering_col);
            self.tableau
                .eliminate_constraint_row(i, coef_i, &pivot_row, a_cols.clone());
            self.tableau
                .set_a(i, entering_col, -coef_i * pivot_row[entering_col]);
        }

        // Step 3: eliminate the entering column from the objective row.
        let coef_c = self.tableau.c(entering_col);
        self.tableau
            .eliminate_objective_row(coef_c, &pivot_row, c_cols);
        self.tableau
            .set_c(entering_col, -coef_c * pivot_row[entering_col]);

        // Step 4: update the tracked objective value.
        self.v += coef_c * pivot_row[self.tableau.rhs_col()];

        // Step 5: swap the variable identifiers.
        let pos = self.basis.pos_in_n(entering_col);
        self.basis.swap_basis(pos, leaving_row);
    }

    /// Reads off the current solution: for each original variable `1..=n`,
    /// its value if basic, else `0`.
    pub fn extract_solution(&self) -> Vec<f64> {
        let mut x = vec![0.0; self.n()];
        for (row, &id) in self.basis.basic().iter().enumerate() {
            if id >= 1 && id <= self.n() {
                x[id - 1] = self.tableau.rhs(row);
            }
        }
        x
    }
}
