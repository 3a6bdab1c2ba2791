//! The inner simplex loop: Bland's rule entering/leaving selection, driven
//! to optimality, unboundedness, or (for Phase I) a feasible auxiliary
//! optimum.

use crate::dictionary::Dictionary;
use crate::math::float_gt;
use crate::status::PhaseError;
use log::trace;

/// What the dictionary looked like when the loop stopped pivoting.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum LoopOutcome {
    /// No entering column has positive reduced cost and every reduced cost
    /// is nonzero: the optimum is unique.
    Single,
    /// No entering column has positive reduced cost but some reduced cost
    /// is exactly zero: the optimum face has more than one vertex.
    Multi,
}

/// Scans the objective row for the entering column under Bland's rule: the
/// minimum-identifier variable among those with strictly positive reduced
/// cost. Returns the physical column and whether every reduced cost was
/// nonzero (used to classify the terminal status when none qualifies).
fn find_entering(dict: &Dictionary) -> (Option<usize>, bool) {
    let mut entering = None;
    let mut min_id = usize::MAX;
    let mut all_nonzero = true;

    for col in dict.basis().active_columns() {
        let reduced_cost = dict.tableau().c(col);
        if reduced_cost == 0.0 {
            all_nonzero = false;
        }
        if float_gt(reduced_cost, 0.0) {
            let pos = dict.basis().pos_in_n(col);
            let id = dict.basis().nonbasic_at(pos);
            if id < min_id {
                min_id = id;
                entering = Some(col);
            }
        }
    }
    (entering, all_nonzero)
}

/// Minimum-ratio test for the leaving row, breaking ties by minimum basic
/// identifier (Bland's rule again, on the leaving side).
fn find_leaving(dict: &Dictionary, entering_col: usize) -> Option<usize> {
    let mut leaving = None;
    let mut best_ratio = f64::INFINITY;
    let mut best_id = usize::MAX;

    for row in 0..dict.rows() {
        let coef = dict.tableau().a(row, entering_col);
        if float_gt(coef, 0.0) {
            let ratio = dict.tableau().rhs(row) / coef;
            let id = dict.basis().basic_at(row);
            if ratio < best_ratio || (ratio == best_ratio && id < best_id) {
                best_ratio = ratio;
                best_id = id;
                leaving = Some(row);
            }
        }
    }
    leaving
}

/// Runs pivots to termination. Used both for the real Phase II optimization
/// and, by [`crate::phase1`], for the auxiliary problem.
pub fn run(dict: &mut Dictionary) -> Result<LoopOutcome, PhaseError> {
    run_with_limit(dict, None)
}

/// As [`run`], but panics if `limit` pivots pass without termination. The
/// algorithm's own anti-cycling argument already guarantees termination, so
/// this is purely a defensive backstop against an implementation bug.
pub fn run_with_limit(
    dict: &mut Dictionary,
    limit: Option<usize>,
) -> Result<LoopOutcome, PhaseError> {
    let mut iterations: usize = 0;
    loop {
        let (entering, all_nonzero) = find_entering(dict);
        let entering_col = match entering {
            Some(col) => col,
            None => {
                return if all_nonzero {
                    Ok(LoopOutcome::Single)
                } else {
                    Ok(LoopOutcome::Multi)
                };
            }
        };

        let leaving_row = match find_leaving(dict, entering_col) {
            Some(row) => row,
            None => return Err(PhaseError::Unbounded),
        };

        trace!(
            "pivot leaving_row={} entering_col={} (entering id={})",
            leaving_row,
            entering_col,
            dict.basis().nonbasic_at(dict.basis().pos_in_n(entering_col))
        );
        dict.pivot(leaving_row, entering_col);
        debug_assert!(
            (0..dict.rows()).all(|r| dict.tableau().rhs(r) >= 0.0),
            "primal feasibility violated after pivot"
        );

        iterations += 1;
        if let Some(limit) = limit {
            assert!(
                iterations <= limit,
                "simplex iteration limit ({limit}) exceeded; this indicates a solver defect, not a property of the input"
            );
        }
    }
}
