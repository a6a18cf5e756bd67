//! Property-based tests for Buchberger's algorithm.

use proptest::prelude::*;
use radix_poly::{Monomial, MonomialOrder, SparsePoly};
use radix_rings::Q;

use crate::buchberger::{groebner_basis, GroebnerConfig};
use crate::reduce::normal_form;

fn sparse_poly() -> impl Strategy<Value = SparsePoly<Q>> {
    proptest::collection::vec(((0u32..3, 0u32..3), -6i64..6), 1..4)
        .prop_map(|terms| {
            let terms = terms
                .into_iter()
                .map(|((a, b), c)| (Monomial::from_exponents(&[a, b]), Q::from(c)))
                .collect();
            SparsePoly::new(terms, 2, MonomialOrder::Lex)
        })
        .prop_filter("generators are nonzero", |p| !p.is_zero())
}

fn system() -> impl Strategy<Value = Vec<SparsePoly<Q>>> {
    proptest::collection::vec(sparse_poly(), 1..=3)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn generators_reduce_to_zero(polys in system()) {
        let basis = groebner_basis(&polys, &GroebnerConfig::default());
        for p in &polys {
            prop_assert!(normal_form(p, &basis).is_zero());
        }
    }

    #[test]
    fn reduced_basis_is_a_fixed_point(polys in system()) {
        let basis = groebner_basis(&polys, &GroebnerConfig::default());
        prop_assert_eq!(groebner_basis(&basis, &GroebnerConfig::default()), basis);
    }

    #[test]
    fn parallel_reduction_is_deterministic(polys in system()) {
        let parallel = GroebnerConfig { parallel_reduce: true, ..GroebnerConfig::default() };
        let sequential = GroebnerConfig { parallel_reduce: false, ..GroebnerConfig::default() };
        prop_assert_eq!(
            groebner_basis(&polys, &parallel),
            groebner_basis(&polys, &sequential)
        );
    }
}
