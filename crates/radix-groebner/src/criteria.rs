//! Buchberger's criteria for skipping S-polynomials.

use radix_poly::Monomial;
use rustc_hash::FxHashSet;

/// First criterion: coprime leading monomials give an S-polynomial that
/// reduces to zero.
#[must_use]
pub fn product_criterion(lm_f: &Monomial, lm_g: &Monomial) -> bool {
    lm_f.is_coprime(lm_g)
}

/// Second (chain) criterion.
///
/// The pair `(i, j)` with least common multiple `lcm` is redundant if some
/// other basis element `k` has a leading monomial dividing `lcm` and
/// neither `(i, k)` nor `(j, k)` is still waiting to be processed.
#[must_use]
pub fn chain_criterion(
    i: usize,
    j: usize,
    lcm: &Monomial,
    leading: &[Monomial],
    pending: &FxHashSet<(usize, usize)>,
) -> bool {
    let key = |a: usize, b: usize| (a.min(b), a.max(b));
    leading.iter().enumerate().any(|(k, lm)| {
        k != i
            && k != j
            && lm.divides(lcm)
            && !pending.contains(&key(i, k))
            && !pending.contains(&key(j, k))
    })
}
