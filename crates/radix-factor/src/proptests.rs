//! Property-based tests for factorization over Z.

use num_traits::One;
use proptest::prelude::*;
use radix_poly::DensePoly;
use radix_rings::Z;

use crate::squarefree::content;
use crate::univariate::factor;

fn small_factor() -> impl Strategy<Value = DensePoly<Z>> {
    (proptest::collection::vec(-5i64..=5, 1..=2), 1i64..=3).prop_map(|(mut cs, lead)| {
        cs.push(lead);
        DensePoly::new(cs.into_iter().map(Z::new).collect())
    })
}

fn product() -> impl Strategy<Value = (DensePoly<Z>, usize)> {
    proptest::collection::vec(small_factor(), 1..=3).prop_map(|fs| {
        let n = fs.len();
        let f = fs.iter().fold(DensePoly::one(), |acc, g| acc.mul(g));
        (f, n)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn factorization_multiplies_back((f, _) in product()) {
        prop_assert_eq!(factor(&f).to_polynomial(), f);
    }

    #[test]
    fn factors_are_primitive_and_positive((f, _) in product()) {
        for (g, _) in factor(&f).factors {
            prop_assert!(g.degree() > 0);
            prop_assert!(content(&g).is_one());
            prop_assert!(!g.leading_coeff().0.is_negative());
        }
    }

    #[test]
    fn at_least_one_factor_per_input((f, n) in product()) {
        let count: u32 = factor(&f).factors.iter().map(|(_, e)| e).sum();
        prop_assert!(count as usize >= n);
    }
}
