//! Phase I initialization: detect whether the origin is feasible, and if
//! not, solve the auxiliary `max -x₀` problem to either produce a feasible
//! starting dictionary or report infeasibility.

use crate::basis::Basis;
use crate::dictionary::Dictionary;
use crate::simplex;
use crate::status::PhaseError;
use crate::tableau::Tableau;
use log::debug;

/// Builds the Phase I dictionary from the user's `c` (length `n`) and `A|b`
/// (`m` rows, `n+1` columns each) and resolves it to a feasible Phase II
/// starting point, or reports infeasibility.
pub fn initialize(objective: &[f64], constraints: &[Vec<f64>]) -> Result<Dictionary, PhaseError> {
    let n = objective.len();
    let m = constraints.len();

    let mut tableau = Tableau::zeros(n, m);
    for (j, &coef) in objective.iter().enumerate() {
        tableau.set_c(j + 1, coef);
    }
    for (i, row) in constraints.iter().enumerate() {
        for (j, &coef) in row.iter().enumerate() {
            tableau.set_a(i, j + 1, coef);
        }
    }

    let basis = Basis::for_phase1(n, m);
    let mut dict = Dictionary::new(tableau, basis);

    let k = (0..m)
        .min_by(|&a, &b| {
            dict.tableau()
                .rhs(a)
                .partial_cmp(&dict.tableau().rhs(b))
                .expect("RHS entries must not be NaN")
        })
        .unwrap_or(0);

    if m == 0 || dict.tableau().rhs(k) >= 0.0 {
        dict.basis_mut().drop_aux();
        debug!("phase I: origin already feasible, skipping auxiliary problem");
        return Ok(dict);
    }

    debug!(
        "phase I: origin infeasible (row {} has rhs {}), solving auxiliary problem",
        k,
        dict.tableau().rhs(k)
    );

    let old_c: Vec<f64> = (0..=n).map(|j| dict.tableau().c(j)).collect();
    for j in 0..=n {
        dict.tableau_mut().set_c(j, 0.0);
    }
    dict.tableau_mut().set_c(0, -1.0);
    for i in 0..m {
        dict.tableau_mut().set_a(i, 0, -1.0);
    }

    dict.pivot(k, 0);
    let _ = simplex::run(&mut dict);

    if let Some(p) = dict.basis().position_of_basic(0) {
        if dict.tableau().rhs(p) > 0.0 {
            debug!("phase I: auxiliary optimum is positive, problem is infeasible");
            return Err(PhaseError::Infeasible);
        }
        dict.pivot(p, 0);
    }

    let q = dict
        .basis()
        .position_of_nonbasic(0)
        .expect("x0 must be non-basic once its auxiliary optimum reached zero");
    if q != 0 {
        dict.basis_mut().swap_nonbasic_positions(0, q);
        dict.tableau_mut().swap_objective_columns(0, q);
        dict.tableau_mut().swap_constraint_columns(0, q);
    }

    let mut c = vec![0.0; n + 1];
    let mut v = 0.0;
    for i in 1..=n {
        if let Some(q) = dict.basis().position_of_nonbasic(i) {
            c[q] += old_c[i];
        } else {
            let row = dict
                .basis()
                .position_of_basic(i)
                .expect("every original variable is basic or non-basic");
            for (j, c_j) in c.iter_mut().enumerate() {
                *c_j -= old_c[i] * dict.tableau().a(row, j);
            }
            v += old_c[i] * dict.tableau().rhs(row);
        }
    }
    for (j, &value) in c.iter().enumerate() {
        dict.tableau_mut().set_c(j, value);
    }
    dict.set_v(v);

    dict.basis_mut().drop_aux();
    debug!("phase I: feasible starting dictionary built, v={}", dict.v());
    Ok(dict)
}
