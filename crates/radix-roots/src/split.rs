//! Splitting along factors over Q.
//!
//! A square-free `f` over a quadratic tower divides its norm `N(f)`,
//! which has rational coefficients. Each irreducible factor `q` of the
//! norm over Q meets `f` in `gcd(f, q)`, and these gcds multiply to `f`.

use radix_factor::factor;
use radix_poly::algorithms::{poly_div_rem, poly_gcd};
use radix_poly::DensePoly;
use radix_rings::{Algebraic, NumberField, Q};
use tracing::trace;

use crate::rational::norm;

/// The nontrivial factors of a square-free `f` over `field` cut out by
/// the irreducible factors of its norm over Q.
///
/// Returns `None` when no such splitting into two or more parts exists.
#[must_use]
pub fn split_over_q(
    f: &DensePoly<Algebraic>,
    field: &NumberField,
) -> Option<Vec<DensePoly<Algebraic>>> {
    let n = norm(f, field)?;
    let rational = DensePoly::new(
        n.coeffs()
            .iter()
            .map(|c| c.as_rational().cloned().map(Q))
            .collect::<Option<Vec<_>>>()?,
    );
    let integral = radix_factor::from_rational(&rational);
    let factorization = factor(&integral);
    if factorization.factors.len() < 2 {
        return None;
    }
    let mut rest = f.clone();
    let mut parts = Vec::new();
    for (q, _) in &factorization.factors {
        if rest.degree() == 0 {
            break;
        }
        let q = q.map_coeffs(|c| Algebraic::from(c.0.clone()));
        let g = poly_gcd(&rest, &q);
        if g.degree() > 0 {
            rest = poly_div_rem(&rest, &g).0;
            parts.push(g);
        }
    }
    if rest.degree() > 0 {
        parts.push(rest);
    }
    trace!(degree = f.degree(), parts = parts.len(), "split over Q");
    (parts.len() >= 2).then_some(parts)
}
