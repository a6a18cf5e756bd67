//! Property-based tests for the solver.

use std::sync::Arc;

use proptest::prelude::*;
use radix_integers::Rational;
use radix_rings::Algebraic;
use radix_simplify::parse_expr;

use crate::biquadratic::{solve_biquadratic, FastPath};
use crate::generic::solve_generic;
use crate::normalize::polys_from_exprs;
use crate::solver::Solver;
use crate::{SolveCache, Solution};

fn q(n: i64, d: i64) -> Algebraic {
    Algebraic::from(Rational::from_i64(n, d))
}

/// `(x - r1)(x - r2) = 0, y = a*x + b` in infix form.
fn planted(r1: i64, r2: i64, a: i64, b: i64) -> [String; 2] {
    [
        format!("(x - ({r1}))*(x - ({r2}))"),
        format!("y - ({a})*x - ({b})"),
    ]
}

fn has_point(solutions: &[Solution], x: &Algebraic, y: &Algebraic) -> bool {
    solutions
        .iter()
        .any(|s| s.get("x") == Some(x) && s.get("y") == Some(y))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn planted_points_are_found(
        r1 in -6i64..6,
        r2 in -6i64..6,
        a in -4i64..4,
        b in -4i64..4,
    ) {
        let exprs = planted(r1, r2, a, b);
        let refs: Vec<&str> = exprs.iter().map(String::as_str).collect();
        let parsed: Vec<_> = refs.iter().map(|s| parse_expr(s).unwrap()).collect();
        let (polys, _, _) = polys_from_exprs(&parsed, &["x", "y"]).unwrap();

        let out = Solver::new().solve_poly_system_str(&refs, &["x", "y"]).unwrap();
        prop_assert!(out.complete);
        prop_assert!(out.verify(&polys));
        prop_assert_eq!(out.len(), if r1 == r2 { 1 } else { 2 });
        for r in [r1, r2] {
            prop_assert!(has_point(&out.solutions, &q(r, 1), &q(a * r + b, 1)));
        }
    }

    #[test]
    fn fast_path_agrees_with_elimination(
        c in -5i64..5,
        d in 1i64..7,
        e in -3i64..3,
    ) {
        // A circle-like conic cut by a line, often with radical points.
        let exprs = [format!("x**2 + ({c})*y**2 - ({d})"), format!("x - y - ({e})")];
        let parsed: Vec<_> = exprs.iter().map(|s| parse_expr(s).unwrap()).collect();
        let (polys, gens, field) = polys_from_exprs(&parsed, &["x", "y"]).unwrap();
        let gens: Arc<[String]> = Arc::from(gens);
        let solver = Solver::new();

        let generic = solve_generic(&polys, &gens, &field, &solver);
        match solve_biquadratic(&polys[0], &polys[1], &gens, &field, &solver) {
            FastPath::Applicable(fast) => {
                let generic = generic.unwrap();
                prop_assert_eq!(&fast, &generic);
                prop_assert!(fast.verify(&polys));
            }
            FastPath::NotApplicable => {}
        }
    }

    #[test]
    fn warm_cache_changes_nothing(r1 in -4i64..4, r2 in -4i64..4, a in -3i64..3) {
        let exprs = planted(r1, r2, a, 1);
        let refs: Vec<&str> = exprs.iter().map(String::as_str).collect();
        let cold = Solver::new().solve_poly_system_str(&refs, &[]).unwrap();
        let warm_solver = Solver::new().with_cache(Arc::new(SolveCache::new()));
        let first = warm_solver.solve_poly_system_str(&refs, &[]).unwrap();
        let second = warm_solver.solve_poly_system_str(&refs, &[]).unwrap();
        prop_assert_eq!(&cold, &first);
        prop_assert_eq!(&cold, &second);
    }
}
