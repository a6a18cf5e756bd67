//! Property-based tests for the quadratic tower `Q(√2)(√3)`.

use std::cmp::Ordering;

use proptest::prelude::*;
use radix_integers::Rational;

use crate::{Algebraic, Field, NumberField, Ring};

struct Tower {
    field: NumberField,
    r2: Algebraic,
    r3: Algebraic,
}

fn tower() -> Tower {
    let (f2, r2) = NumberField::rationals().adjoin_sqrt(&Algebraic::from(2));
    let (field, r3) = f2.adjoin_sqrt(&Algebraic::from(3));
    Tower { field, r2, r3 }
}

/// Coordinates of `a + b√2 + c√3 + d√6`.
fn coords() -> impl Strategy<Value = [(i64, i64); 4]> {
    proptest::array::uniform4((-20i64..20, 1i64..6))
}

fn element(t: &Tower, c: [(i64, i64); 4]) -> Algebraic {
    let q = |(n, d): (i64, i64)| Algebraic::from(Rational::from_i64(n, d));
    let r6 = &t.r2 * &t.r3;
    &(&q(c[0]) + &(&q(c[1]) * &t.r2)) + &(&(&q(c[2]) * &t.r3) + &(&q(c[3]) * &r6))
}

#[allow(clippy::cast_precision_loss)]
fn approx(c: [(i64, i64); 4]) -> f64 {
    let q = |(n, d): (i64, i64)| n as f64 / d as f64;
    q(c[0]) + q(c[1]) * 2f64.sqrt() + q(c[2]) * 3f64.sqrt() + q(c[3]) * 6f64.sqrt()
}

proptest! {
    #[test]
    fn tower_distributive(a in coords(), b in coords(), c in coords()) {
        let t = tower();
        let (a, b, c) = (element(&t, a), element(&t, b), element(&t, c));
        prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
    }

    #[test]
    fn tower_inverse(a in coords()) {
        let t = tower();
        let a = element(&t, a);
        prop_assume!(!a.is_zero());
        prop_assert_eq!(&a * &a.inv().unwrap(), Algebraic::one());
    }

    #[test]
    fn tower_sqrt_of_square(a in coords()) {
        let t = tower();
        let a = element(&t, a);
        let root = t.field.sqrt(&(&a * &a)).unwrap();
        prop_assert!(root == a || root == -&a);
        prop_assert_ne!(root.sign(), Some(Ordering::Less));
    }

    #[test]
    fn tower_sign_matches_float(c in coords()) {
        let t = tower();
        let value = approx(c);
        prop_assume!(value.abs() > 1e-9);
        let expected = if value > 0.0 { Ordering::Greater } else { Ordering::Less };
        prop_assert_eq!(element(&t, c).sign(), Some(expected));
    }

    #[test]
    fn canonical_order_matches_float(a in coords(), b in coords()) {
        let t = tower();
        let (fa, fb) = (approx(a), approx(b));
        prop_assume!((fa - fb).abs() > 1e-9);
        let expected = if fa < fb { Ordering::Less } else { Ordering::Greater };
        prop_assert_eq!(element(&t, a).canonical_cmp(&element(&t, b)), expected);
    }
}
