//! Property-based tests for exact integer and rational arithmetic.

use num_traits::{One, Zero};
use proptest::prelude::*;

use crate::{Integer, Rational};

fn small_int() -> impl Strategy<Value = i64> {
    -1000i64..1000i64
}

fn non_zero_int() -> impl Strategy<Value = i64> {
    prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
}

fn small_rational() -> impl Strategy<Value = Rational> {
    (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d))
}

proptest! {
    #[test]
    fn isqrt_brackets_the_root(n in 0i64..1_000_000_000i64) {
        let n = Integer::new(n);
        let r = n.isqrt().unwrap();
        let next = &r + &Integer::one();
        prop_assert!(&r * &r <= n);
        prop_assert!(&next * &next > n);
    }

    #[test]
    fn square_is_perfect(n in small_int()) {
        let n = Integer::new(n);
        prop_assert_eq!((&n * &n).perfect_sqrt(), Some(n.abs()));
    }

    #[test]
    fn square_free_split_recombines(n in non_zero_int()) {
        let n = Integer::new(n * 7);
        let (c, k) = n.square_free_split();
        prop_assert_eq!(&(&c * &c) * &k, n);
        prop_assert!(k.abs().perfect_sqrt().map_or(true, |r| r.is_one()));
    }

    #[test]
    fn divisors_divide(n in non_zero_int()) {
        let n = Integer::new(n);
        for d in n.divisors(10_000).unwrap() {
            prop_assert!((&n % &d).is_zero());
        }
    }

    #[test]
    fn rational_field_inverse(a in small_rational()) {
        prop_assume!(!a.is_zero());
        prop_assert_eq!(&a * &a.recip(), Rational::one());
    }

    #[test]
    fn rational_distributive(a in small_rational(), b in small_rational(), c in small_rational()) {
        prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
    }

    #[test]
    fn rational_display_parses_back(a in small_rational()) {
        prop_assert_eq!(a.to_string().parse::<Rational>(), Ok(a));
    }

    #[test]
    fn rational_square_free_split_recombines(a in small_rational()) {
        prop_assume!(!a.is_zero());
        let (c, k) = a.square_free_split();
        prop_assert_eq!(&(&c * &c) * &Rational::from(k), a);
    }
}
