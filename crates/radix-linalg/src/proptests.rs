//! Property-based tests for elimination.

use proptest::prelude::*;
use radix_rings::{Ring, Q};

use crate::dense_matrix::DenseMatrix;

fn matrix(rows: usize, cols: usize) -> impl Strategy<Value = DenseMatrix<Q>> {
    proptest::collection::vec(proptest::collection::vec(-5i64..5, cols), rows).prop_map(|rows| {
        DenseMatrix::from_rows(
            rows.into_iter()
                .map(|r| r.into_iter().map(Q::from).collect())
                .collect(),
        )
    })
}

proptest! {
    #[test]
    fn rref_is_idempotent(a in matrix(4, 5)) {
        let once = a.rref();
        let twice = once.matrix.rref();
        prop_assert_eq!(&once.matrix, &twice.matrix);
        prop_assert_eq!(once.pivots, twice.pivots);
    }

    #[test]
    fn null_space_is_annihilated(a in matrix(3, 5)) {
        let null = a.null_space();
        prop_assert_eq!(null.len() + a.rank(), 5);
        for v in &null {
            prop_assert!(a.mv(v).iter().all(Ring::is_zero));
        }
    }

    #[test]
    fn solve_reproduces_rhs(a in matrix(3, 3), x in proptest::collection::vec(-5i64..5, 3)) {
        let x: Vec<Q> = x.into_iter().map(Q::from).collect();
        let b = a.mv(&x);
        let found = a.solve(&b);
        prop_assert!(found.is_some());
        prop_assert_eq!(a.mv(&found.unwrap_or_default()), b);
    }
}
