//! Shortcut for two equations of degree at most two in each of two unknowns.

use std::sync::Arc;

use radix_poly::SparsePoly;
use radix_rings::{Algebraic, NumberField};
use tracing::trace;

use crate::solution::{PolySolutions, Solution};
use crate::solver::Solver;

/// Outcome of [`solve_biquadratic`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FastPath {
    /// The fast path solved the system; the list may be empty.
    Applicable(PolySolutions),
    /// The basis does not have the expected shape.
    NotApplicable,
}

/// True for two polynomials in two generators, each of degree at most two
/// in each generator.
#[must_use]
pub fn is_biquadratic(polys: &[SparsePoly<Algebraic>], num_gens: usize) -> bool {
    polys.len() == 2
        && num_gens == 2
        && polys.iter().all(|p| p.degree_list().iter().all(|&d| d <= 2))
}

/// Solves `{f, g}` in generators `(x, y)` from a lex basis `[p(x, y), q(y)]`.
///
/// The roots `y₀` of `q` are computed first, then the roots of `p(x, y₀)`
/// over the field of each `y₀`.
#[must_use]
pub fn solve_biquadratic(
    f: &SparsePoly<Algebraic>,
    g: &SparsePoly<Algebraic>,
    gens: &Arc<[String]>,
    field: &NumberField,
    solver: &Solver,
) -> FastPath {
    let basis = solver.groebner(&[f.clone(), g.clone()]);
    if basis.len() == 1 && basis[0].is_ground() {
        return FastPath::Applicable(PolySolutions::empty());
    }
    let [p, q] = basis.as_slice() else {
        trace!(len = basis.len(), "basis is not a pair");
        return FastPath::NotApplicable;
    };
    if !p
        .leading_monomial()
        .is_some_and(|m| m.is_pure_in(0) && m.exponent(0) > 0)
    {
        return FastPath::NotApplicable;
    }
    let Some(q) = q.to_univariate(1) else {
        return FastPath::NotApplicable;
    };

    let mut result = PolySolutions::empty();
    let ys = solver.roots(&q, field);
    result.complete &= ys.complete;
    for y in ys.iter() {
        let Some(p_y) = p.substitute(1, &y.value).to_univariate(0) else {
            return FastPath::NotApplicable;
        };
        let xs = solver.roots(&p_y, &y.field);
        result.complete &= xs.complete;
        for x in xs.iter() {
            let values = vec![x.value.clone(), y.value.clone()];
            result.solutions.push(Solution::new(Arc::clone(gens), values));
        }
    }
    result.sort();
    FastPath::Applicable(result)
}
