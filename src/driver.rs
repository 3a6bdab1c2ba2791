//! The public entry point: validate shapes, run Phase I then Phase II, and
//! extract the solution vector.

use crate::config::SolverConfig;
use crate::phase1;
use crate::simplex::{self, LoopOutcome};
use crate::status::{PhaseError, Status};
use log::debug;

/// Solves `maximize cᵀx subject to Ax <= b, x >= 0` with the default
/// [`SolverConfig`].
///
/// `objective` is the `1 × n` row `c`. `constraints` is `A|b`: each row has
/// `n + 1` columns, the last being the row's RHS.
pub fn solve(objective: &[f64], constraints: &[Vec<f64>]) -> (Status, Option<Vec<f64>>) {
    solve_with_config(objective, constraints, &SolverConfig::default())
}

pub fn solve_with_config(
    objective: &[f64],
    constraints: &[Vec<f64>],
    config: &SolverConfig,
) -> (Status, Option<Vec<f64>>) {
    let n = objective.len();
    for row in constraints {
        assert_eq!(
            row.len(),
            n + 1,
            "each constraint row must have n+1 columns (A's n coefficients plus the RHS)"
        );
    }

    let mut dict = match phase1::initialize(objective, constraints) {
        Ok(dict) => dict,
        Err(PhaseError::Infeasible) => {
            debug!("solve: infeasible");
            return (Status::Infeasible, None);
        }
        Err(PhaseError::Unbounded) => unreachable!("phase I cannot report unboundedness"),
    };

    let outcome = simplex::run_with_limit(&mut dict, config.iteration_limit);

    match outcome {
        Ok(LoopOutcome::Single) => {
            let x = dict.extract_solution();
            debug!("solve: single optimum, v={}", dict.v());
            (Status::Single, Some(x))
        }
        Ok(LoopOutcome::Multi) => {
            let x = dict.extract_solution();
            debug!("solve: multiple optima, v={}", dict.v());
            (Status::Multi, Some(x))
        }
        Err(PhaseError::Unbounded) => {
            debug!("solve: unbounded");
            (Status::Unbounded, None)
        }
        Err(PhaseError::Infeasible) => unreachable!("phase II cannot report infeasibility"),
    }
}
