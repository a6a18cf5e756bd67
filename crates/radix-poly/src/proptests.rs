//! Property-based tests for polynomial arithmetic.

use proptest::prelude::*;
use radix_rings::{Ring, Q};

use crate::algorithms::{poly_div_rem, poly_gcd, squarefree_decomposition};
use crate::dense::DensePoly;
use crate::monomial::Monomial;
use crate::ordering::MonomialOrder;
use crate::sparse::SparsePoly;

fn small_coeff() -> impl Strategy<Value = Q> {
    (-20i64..20i64).prop_map(Q::from)
}

fn dense_poly() -> impl Strategy<Value = DensePoly<Q>> {
    proptest::collection::vec(small_coeff(), 1..=5).prop_map(DensePoly::new)
}

fn nonzero_dense_poly() -> impl Strategy<Value = DensePoly<Q>> {
    dense_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
}

fn sparse_poly() -> impl Strategy<Value = SparsePoly<Q>> {
    proptest::collection::vec(((0u32..3, 0u32..3), small_coeff()), 0..6).prop_map(|terms| {
        let terms = terms
            .into_iter()
            .map(|((a, b), c)| (Monomial::from_exponents(&[a, b]), c))
            .collect();
        SparsePoly::new(terms, 2, MonomialOrder::Lex)
    })
}

proptest! {
    #[test]
    fn dense_division_identity(a in dense_poly(), b in nonzero_dense_poly()) {
        let (q, r) = poly_div_rem(&a, &b);
        prop_assert_eq!(q.mul(&b).add(&r), a);
        prop_assert!(r.is_zero() || r.degree() < b.degree());
    }

    #[test]
    fn gcd_divides_both(a in nonzero_dense_poly(), b in nonzero_dense_poly()) {
        let g = poly_gcd(&a, &b);
        prop_assert!(poly_div_rem(&a, &g).1.is_zero());
        prop_assert!(poly_div_rem(&b, &g).1.is_zero());
    }

    #[test]
    fn squarefree_reconstructs(a in nonzero_dense_poly(), b in nonzero_dense_poly()) {
        let f = a.mul(&b).mul(&b);
        prop_assert_eq!(squarefree_decomposition(&f).to_polynomial(), f);
    }

    #[test]
    fn sparse_mul_distributes(a in sparse_poly(), b in sparse_poly(), c in sparse_poly()) {
        prop_assert_eq!(a.mul(&b.add(&c)), a.mul(&b).add(&a.mul(&c)));
    }

    #[test]
    fn substitution_matches_evaluation(p in sparse_poly(), x in small_coeff(), y in small_coeff()) {
        let partial = p.substitute(1, &y);
        prop_assert_eq!(partial.evaluate(&[x.clone(), Q::zero()]), p.evaluate(&[x, y]));
    }

    #[test]
    fn terms_stay_sorted(p in sparse_poly()) {
        for pair in p.terms().windows(2) {
            prop_assert_eq!(
                MonomialOrder::Lex.compare(&pair[0].0, &pair[1].0),
                std::cmp::Ordering::Greater
            );
        }
    }
}
