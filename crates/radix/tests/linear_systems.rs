//! End-to-end tests for augmented linear systems.

use radix::prelude::*;

fn matrix(rows: &[&[i64]]) -> DenseMatrix<Algebraic> {
    DenseMatrix::from_rows(
        rows.iter()
            .map(|r| r.iter().map(|&n| Algebraic::from(n)).collect())
            .collect(),
    )
}

#[test]
fn test_unique_solution() {
    let m = matrix(&[&[1, 4, 2], &[-2, 1, 14]]);
    let sol = solve_linear_system(&m, &["x", "y"]).unwrap().unwrap();
    assert_eq!(sol.to_string(), "{x: -6, y: 2}");
    assert_eq!(sol.get("y").and_then(|v| v.constant()), Some(Algebraic::from(2)));
}

#[test]
fn test_input_is_not_mutated() {
    let m = matrix(&[&[1, 4, 2], &[-2, 1, 14]]);
    let before = m.clone();
    let _ = solve_linear_system(&m, &["x", "y"]).unwrap();
    assert_eq!(m, before);
}

#[test]
fn test_degenerate_system_is_empty_mapping() {
    let m = matrix(&[&[0, 0, 0], &[0, 0, 0]]);
    let sol = solve_linear_system(&m, &["x", "y"]).unwrap();
    assert_eq!(sol.map(|s| s.len()), Some(0));
}

#[test]
fn test_inconsistent_is_none() {
    let m = matrix(&[&[1, 2, 3], &[2, 4, 7]]);
    assert_eq!(solve_linear_system(&m, &["x", "y"]).unwrap(), None);
}

#[test]
fn test_parametric_solution() {
    // x + 2y - z = 4, 2x + 4y + z = 5
    let m = matrix(&[&[1, 2, -1, 4], &[2, 4, 1, 5]]);
    let solver = Solver::with_options(SolveOptions::default().with_simplify(false));
    let sol = solver.solve_linear_system(&m, &["x", "y", "z"]).unwrap().unwrap();
    assert!(sol.get("y").is_none());
    assert_eq!(sol.to_string(), "{x: -2*y + 3, z: -1}");
}

#[test]
fn test_overdetermined() {
    let m = matrix(&[&[1, 1, 3], &[1, -1, 1], &[2, 1, 5]]);
    let sol = solve_linear_system(&m, &["x", "y"]).unwrap().unwrap();
    assert_eq!(sol.to_string(), "{x: 2, y: 1}");
}

#[test]
fn test_shape_mismatch() {
    let m = matrix(&[&[1, 4, 2], &[-2, 1, 14]]);
    assert_eq!(
        solve_linear_system(&m, &["x"]),
        Err(SolveError::ShapeMismatch {
            columns: 3,
            symbols: 1
        })
    );
}

#[test]
fn test_simplify_flag_keeps_values() {
    let m = matrix(&[&[3, 0, 1], &[0, 1, -2]]);
    let simplified = Solver::new().solve_linear_system(&m, &["x", "y"]).unwrap();
    let raw = Solver::with_options(SolveOptions::default().with_simplify(false))
        .solve_linear_system(&m, &["x", "y"])
        .unwrap();
    assert_eq!(
        simplified.as_ref().map(ToString::to_string),
        raw.as_ref().map(ToString::to_string)
    );
    assert_eq!(raw.unwrap().to_string(), "{x: 1/3, y: -2}");
}

#[test]
fn test_simplifier_never_worsens_values() {
    let plain = Solver::with_options(SolveOptions::default().with_simplify(false));
    let m = matrix(&[&[2, 4, 6, 8]]);
    for solver in [&plain, &Solver::new()] {
        let sol = solver.solve_linear_system(&m, &["x", "y", "z"]).unwrap().unwrap();
        assert_eq!(sol.to_string(), "{x: -2*y - 3*z + 4}");
    }

    let (_, r2) = NumberField::rationals().adjoin_sqrt(&Algebraic::from(2));
    let half = Algebraic::from(Rational::from_i64(1, 2));
    let m = DenseMatrix::from_rows(vec![
        vec![r2, Algebraic::from(0), Algebraic::from(1)],
        vec![Algebraic::from(-1), half, Algebraic::from(0)],
    ]);
    for solver in [&plain, &Solver::new()] {
        let sol = solver.solve_linear_system(&m, &["x", "y"]).unwrap().unwrap();
        assert_eq!(sol.to_string(), "{x: sqrt(2)/2, y: sqrt(2)}");
    }
}
