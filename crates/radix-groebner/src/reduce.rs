//! Multivariate division.

use radix_poly::SparsePoly;
use radix_rings::Field;

/// Fully reduces `p` modulo `divisors`.
///
/// Every term of the result is irreducible by every leading monomial of
/// `divisors`. Zero divisors are ignored.
#[must_use]
pub fn normal_form<F: Field>(p: &SparsePoly<F>, divisors: &[SparsePoly<F>]) -> SparsePoly<F> {
    let mut rest = p.clone();
    let mut remainder = Vec::new();
    while let Some((m, c)) = rest.leading_term().cloned() {
        let step = divisors.iter().find_map(|g| {
            let (lm, lc) = g.leading_term()?;
            m.div(lm).map(|q| (g, q, c.field_div(lc)))
        });
        match step {
            Some((g, q, factor)) => rest = rest.sub(&g.mul_term(&q, &factor)),
            None => {
                remainder.push((m, c));
                rest = rest.tail();
            }
        }
    }
    SparsePoly::new(remainder, p.num_vars(), p.order())
}

/// The S-polynomial of `f` and `g`, cancelling their leading terms.
///
/// # Panics
///
/// Panics if either polynomial is zero.
#[must_use]
pub fn s_polynomial<F: Field>(f: &SparsePoly<F>, g: &SparsePoly<F>) -> SparsePoly<F> {
    let (lm_f, lc_f) = f.leading_term().expect("nonzero polynomial");
    let (lm_g, lc_g) = g.leading_term().expect("nonzero polynomial");
    let lcm = lm_f.lcm(lm_g);
    let mf = lcm.div(lm_f).expect("lcm is a multiple");
    let mg = lcm.div(lm_g).expect("lcm is a multiple");
    f.mul_term(&mf, &lc_f.inv().expect("nonzero leading coefficient"))
        .sub(&g.mul_term(&mg, &lc_g.inv().expect("nonzero leading coefficient")))
}
