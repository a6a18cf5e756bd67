//! Property-based tests for the root finder.

use proptest::prelude::*;
use radix_poly::DensePoly;
use radix_rings::{Algebraic, NumberField, Ring};

use crate::finder::roots;

fn coeff() -> impl Strategy<Value = Algebraic> {
    (-6i64..6).prop_map(Algebraic::from)
}

/// `(x - a)(x² + bx + c)`, which always has a radical root set.
fn solvable_cubic() -> impl Strategy<Value = DensePoly<Algebraic>> {
    (coeff(), coeff(), coeff()).prop_map(|(a, b, c)| {
        let linear = DensePoly::new(vec![-a, Algebraic::one()]);
        let quadratic = DensePoly::new(vec![c, b, Algebraic::one()]);
        linear.mul(&quadratic)
    })
}

/// `(x² + ax + b)(x² + c)` in `x²` when `a` is zero.
fn even_quartic() -> impl Strategy<Value = DensePoly<Algebraic>> {
    (coeff(), coeff()).prop_map(|(b, c)| {
        let g = DensePoly::new(vec![c, b, Algebraic::one()]);
        DensePoly::new(vec![
            g.coeff(0),
            Algebraic::zero(),
            g.coeff(1),
            Algebraic::zero(),
            g.coeff(2),
        ])
    })
}

proptest! {
    #[test]
    fn cubic_roots_are_roots(p in solvable_cubic()) {
        let set = roots(&p, &NumberField::rationals());
        prop_assert!(set.complete);
        let total: u32 = set.iter().map(|r| r.multiplicity).sum();
        prop_assert_eq!(total as usize, p.degree());
        for r in &set {
            prop_assert!(p.eval(&r.value).is_zero());
        }
    }

    #[test]
    fn even_quartic_roots_are_roots(p in even_quartic()) {
        let set = roots(&p, &NumberField::rationals());
        prop_assert!(set.complete);
        let total: u32 = set.iter().map(|r| r.multiplicity).sum();
        prop_assert_eq!(total as usize, p.degree());
        for r in &set {
            prop_assert!(p.eval(&r.value).is_zero());
        }
    }

    #[test]
    fn roots_are_sorted(p in solvable_cubic()) {
        let set = roots(&p, &NumberField::rationals());
        for pair in set.roots.windows(2) {
            prop_assert_eq!(
                pair[0].value.canonical_cmp(&pair[1].value),
                std::cmp::Ordering::Less
            );
        }
    }
}
