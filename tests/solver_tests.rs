use simplex_core::{solve, solve_with_config, SolverConfig, Status};

/// maximize x1 + 2x2 s.t. x1 + x2 <= 4, x2 <= 2
#[test]
fn unique_optimum() {
    let (status, x) = solve(&[1.0, 2.0], &[vec![1.0, 1.0, 4.0], vec![0.0, 1.0, 2.0]]);
    assert_eq!(status, Status::Single);
    let x = x.unwrap();
    assert!((x[0] - 2.0).abs() < 1e-9);
    assert!((x[1] - 2.0).abs() < 1e-9);
}

/// maximize x1 + x2 s.t. x1 + x2 <= 1: the whole edge from (1,0) to (0,1) is optimal.
#[test]
fn multiple_optima() {
    let (status, x) = solve(&[1.0, 1.0], &[vec![1.0, 1.0, 1.0]]);
    assert_eq!(status, Status::Multi);
    let x = x.unwrap();
    assert!((x[0] + x[1] - 1.0).abs() < 1e-9);
}

/// maximize x1 s.t. -x1 + x2 <= 1: x1 can grow without bound.
#[test]
fn unbounded_problem() {
    let (status, x) = solve(&[1.0, 0.0], &[vec![-1.0, 1.0, 1.0]]);
    assert_eq!(status, Status::Unbounded);
    assert!(x.is_none());
}

/// maximize x1 s.t. x1 <= -1: no x1 >= 0 satisfies the constraint.
#[test]
fn infeasible_problem() {
    let (status, x) = solve(&[1.0], &[vec![1.0, -1.0]]);
    assert_eq!(status, Status::Infeasible);
    assert!(x.is_none());
}

/// Vanderbei's example: the origin violates the fourth constraint, so Phase I
/// must build and solve the auxiliary problem before Phase II ever runs.
#[test]
fn requires_phase_one() {
    let _ = env_logger::try_init();
    let objective = vec![3.0, 1.0, 2.0];
    let constraints = vec![
        vec![1.0, 1.0, 3.0, 30.0],
        vec![2.0, 2.0, 5.0, 24.0],
        vec![4.0, 1.0, 2.0, 36.0],
        vec![-1.0, -1.0, -1.0, -1.0],
    ];
    let (status, x) = solve(&objective, &constraints);
    assert_eq!(status, Status::Single);
    let x = x.unwrap();
    let value: f64 = objective.iter().zip(&x).map(|(c, xi)| c * xi).sum();
    for (row, constraint) in constraints.iter().enumerate() {
        let lhs: f64 = constraint[..3].iter().zip(&x).map(|(a, xi)| a * xi).sum();
        assert!(
            lhs <= constraint[3] + 1e-9,
            "row {row} violated: {lhs} > {}",
            constraint[3]
        );
    }
    assert!(value > 0.0);
}

/// A degenerate Klee-Minty-style cube: without Bland's rule the classic
/// largest-coefficient pivoting rule cycles forever on this family.
#[test]
fn degenerate_problem_terminates() {
    let objective = vec![100.0, 10.0, 1.0];
    let constraints = vec![
        vec![1.0, 0.0, 0.0, 1.0],
        vec![20.0, 1.0, 0.0, 100.0],
        vec![200.0, 20.0, 1.0, 10000.0],
    ];
    let config = SolverConfig {
        iteration_limit: Some(1000),
    };
    let (status, x) = solve_with_config(&objective, &constraints, &config);
    assert!(matches!(status, Status::Single | Status::Multi));
    assert!(x.is_some());
}

/// Every variable value returned on a non-infeasible, non-unbounded status
/// must itself satisfy every constraint and be non-negative.
#[test]
fn returned_solution_is_feasible() {
    let objective = vec![5.0, 4.0];
    let constraints = vec![vec![6.0, 4.0, 24.0], vec![1.0, 2.0, 6.0]];
    let (status, x) = solve(&objective, &constraints);
    assert_eq!(status, Status::Single);
    let x = x.unwrap();
    for &xi in &x {
        assert!(xi >= -1e-9);
    }
    for constraint in &constraints {
        let n = constraint.len() - 1;
        let lhs: f64 = constraint[..n].iter().zip(&x).map(|(a, xi)| a * xi).sum();
        assert!(lhs <= constraint[n] + 1e-9);
    }
}

#[test]
#[should_panic]
fn malformed_constraint_width_is_a_contract_violation() {
    solve(&[1.0, 1.0], &[vec![1.0, 1.0]]);
}
