//! End-to-end tests for polynomial systems.

use std::sync::Arc;

use radix::prelude::*;
use radix::solve::normalize::polys_from_exprs;

fn solve(exprs: &[&str], gens: &[&str]) -> PolySolutions {
    solve_poly_system_str(exprs, gens).unwrap()
}

/// Every solution satisfies every input equation.
fn assert_verified(exprs: &[&str], gens: &[&str], solutions: &PolySolutions) {
    let parsed: Vec<_> = exprs.iter().map(|s| parse_expr(s).unwrap()).collect();
    let (polys, _, _) = polys_from_exprs(&parsed, gens).unwrap();
    for s in solutions {
        assert!(s.verify(&polys), "{s} does not solve {exprs:?}");
    }
}

#[test]
fn test_radical_solutions_in_order() {
    let exprs = ["x*y - 2*y", "2*y**2 - x**2"];
    let out = solve(&exprs, &["x", "y"]);
    assert_eq!(
        out.to_string(),
        "[{x: 0, y: 0}, {x: 2, y: -sqrt(2)}, {x: 2, y: sqrt(2)}]"
    );
    assert!(out.complete);
    assert_verified(&exprs, &["x", "y"], &out);
}

#[test]
fn test_parabola_and_line() {
    let exprs = ["x**2 + y", "x + 4*y"];
    let out = solve(&exprs, &["x", "y"]);
    assert_eq!(out.to_string(), "[{x: 0, y: 0}, {x: 1/4, y: -1/16}]");
    assert_verified(&exprs, &["x", "y"], &out);
}

#[test]
fn test_linear_pairs_through_elimination() {
    assert_eq!(
        solve(&["x - y + 5", "x + y - 3"], &["x", "y"]).to_string(),
        "[{x: -1, y: 4}]"
    );
    assert_eq!(
        solve(&["x - 2*y + 5", "2*x - y - 3"], &["x", "y"]).to_string(),
        "[{x: 11/3, y: 13/3}]"
    );
}

#[test]
fn test_quadratic_intersections() {
    let exprs = ["y + x**2 - 3", "-y + x - 4"];
    let out = solve(&exprs, &["x", "y"]);
    assert_eq!(
        out.to_string(),
        "[{x: -1/2 - sqrt(29)/2, y: -9/2 - sqrt(29)/2}, \
         {x: -1/2 + sqrt(29)/2, y: -9/2 + sqrt(29)/2}]"
    );
    assert_verified(&exprs, &["x", "y"], &out);
}

#[test]
fn test_generator_order_sets_elimination() {
    let exprs = ["y**2 - 4 + x", "2*y + 3*x - 7"];
    let xy = solve(&exprs, &["x", "y"]);
    let yx = solve(&exprs, &["y", "x"]);
    assert_eq!(xy.to_string(), "[{x: 11/9, y: 5/3}, {x: 3, y: -1}]");
    assert_eq!(yx.to_string(), "[{y: -1, x: 3}, {y: 5/3, x: 11/9}]");
}

#[test]
fn test_inferred_generators() {
    let out = solve(&["b - 2*a", "a**2 - 1"], &[]);
    assert_eq!(out.to_string(), "[{a: -1, b: -2}, {a: 1, b: 2}]");
}

#[test]
fn test_algebraic_coefficients() {
    let exprs = ["x**2 - 2*sqrt(2)*x + 2", "y - x"];
    let out = solve(&exprs, &[]);
    assert_eq!(out.to_string(), "[{x: sqrt(2), y: sqrt(2)}]");
    assert_verified(&exprs, &[], &out);
}

#[test]
fn test_nested_radicals() {
    // x = ±sqrt(2) ± sqrt(3)
    let exprs = ["x**4 - 10*x**2 + 1", "y - x**2"];
    let out = solve(&exprs, &["x", "y"]);
    assert_eq!(out.len(), 4);
    assert!(out.complete);
    assert_verified(&exprs, &["x", "y"], &out);
}

#[test]
fn test_three_unknowns() {
    let exprs = ["x**2 - 1", "y**2 - 2", "z - x*y"];
    let out = solve(&exprs, &["x", "y", "z"]);
    assert_eq!(out.len(), 4);
    assert_verified(&exprs, &["x", "y", "z"], &out);
    assert_eq!(out.solutions[0].to_string(), "{x: -1, y: -sqrt(2), z: sqrt(2)}");
}

#[test]
fn test_complex_solutions() {
    let exprs = ["x**2 + 1", "y - 2*x"];
    let out = solve(&exprs, &[]);
    assert_eq!(out.len(), 2);
    assert!(out.complete);
    assert_verified(&exprs, &[], &out);
}

#[test]
fn test_no_solutions_is_not_an_error() {
    let out = solve(&["x + y", "x + y - 1"], &["x", "y"]);
    assert!(out.is_empty());
    assert!(out.complete);
    let out = solve(&["x**2 + y - 1", "x**2 + y", "x*y"], &["x", "y"]);
    assert!(out.is_empty());
}

#[test]
fn test_not_zero_dimensional() {
    for exprs in [&["x - y"][..], &["x*y", "y**2 - y"][..], &["x**2 + y**2"][..]] {
        let err = solve_poly_system_str(exprs, &["x", "y"]).unwrap_err();
        assert!(matches!(err, SolveError::NotZeroDimensional { .. }), "{exprs:?}");
        assert_eq!(
            err.to_string(),
            "only zero-dimensional systems supported (finite number of solutions)"
        );
    }
}

#[test]
fn test_incomplete_is_flagged() {
    let out = solve(&["x**5 - x - 1", "y - x"], &[]);
    assert!(!out.complete);
    assert!(out.is_empty());

    let out = solve(&["(x - 1)*(x**3 - 2)", "y"], &[]);
    assert!(!out.complete);
    assert_eq!(out.to_string(), "[{x: 1, y: 0}] (incomplete)");
}

#[test]
fn test_quartic_splitting_over_q() {
    // x⁴ - x³ - 3x² + 2x + 2 = (x² - 2)(x² - x - 1)
    let exprs = ["x**4 - x**3 - 3*x**2 + 2*x + 2", "y - x"];
    let out = solve(&exprs, &["x", "y"]);
    assert!(out.complete);
    assert_eq!(out.len(), 4);
    assert_verified(&exprs, &["x", "y"], &out);
}

#[test]
fn test_malformed_input() {
    for exprs in [&["sin(x)"][..], &["x**y"][..], &["x/(y - 1)"][..], &["sqrt(x)"][..]] {
        let err = solve_poly_system_str(exprs, &["x", "y"]).unwrap_err();
        assert!(matches!(err, SolveError::Malformed { .. }), "{exprs:?}");
    }
}

#[test]
fn test_fast_path_and_elimination_agree() {
    let solver = Solver::new();
    for exprs in [
        ["y**2 - 4 + x", "2*y + 3*x - 7"],
        ["y + x**2 - 3", "-y + x - 4"],
        ["x**2 + y**2 - 5", "x*y - 2"],
        ["x**2 - 2", "y**2 - 3"],
    ] {
        let parsed: Vec<_> = exprs.iter().map(|s| parse_expr(s).unwrap()).collect();
        let (polys, gens, field) = polys_from_exprs(&parsed, &["x", "y"]).unwrap();
        let shared: Arc<[String]> = Arc::from(gens);
        let generic =
            radix::solve::generic::solve_generic(&polys, &shared, &field, &solver).unwrap();
        let fast = radix::solve::biquadratic::solve_biquadratic(
            &polys[0], &polys[1], &shared, &field, &solver,
        );
        assert_eq!(fast, radix::solve::FastPath::Applicable(generic), "{exprs:?}");
    }
}

#[test]
fn test_cold_and_warm_cache_agree() {
    let cache = Arc::new(SolveCache::new());
    let warm = Solver::new().with_cache(Arc::clone(&cache));
    let cold = Solver::new();
    for exprs in [
        &["x*y - 2*y", "2*y**2 - x**2"][..],
        &["x**2 + y**2 - 5", "x*y - 2"][..],
        &["x**2 - 1", "y**2 - 2", "z - x*y"][..],
    ] {
        let expected = cold.solve_poly_system_str(exprs, &[]).unwrap();
        for _ in 0..2 {
            assert_eq!(warm.solve_poly_system_str(exprs, &[]).unwrap(), expected);
        }
    }
    let stats = cache.stats();
    assert!(stats.hits > 0);
    assert!(stats.bases > 0);
}

#[test]
fn test_shared_cache_across_threads() {
    let cache = Arc::new(SolveCache::new());
    let solver = Solver::new().with_cache(cache);
    let expected = solver
        .solve_poly_system_str(&["x**2 + y**2 - 5", "x*y - 2"], &[])
        .unwrap();
    std::thread::scope(|scope| {
        for _ in 0..4 {
            let solver = solver.clone();
            let expected = &expected;
            scope.spawn(move || {
                let out = solver
                    .solve_poly_system_str(&["x**2 + y**2 - 5", "x*y - 2"], &[])
                    .unwrap();
                assert_eq!(&out, expected);
            });
        }
    });
}
