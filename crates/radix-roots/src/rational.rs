//! Rational root test.
//!
//! A rational root `p/q` of an integer polynomial has `p | a₀` and
//! `q | aₙ`. Polynomials with algebraic coefficients are first mapped to
//! their norm over Q, whose rational roots include every rational root
//! of the input polynomial.

use radix_integers::{Integer, Rational};
use radix_poly::DensePoly;
use radix_rings::{Algebraic, NumberField, Ring};

/// Multiplies `f` by its conjugates over every step of `field`.
///
/// Returns `None` if a coefficient does not lie in `field`.
#[must_use]
pub fn norm(f: &DensePoly<Algebraic>, field: &NumberField) -> Option<DensePoly<Algebraic>> {
    if !f.coeffs().iter().all(|c| field.contains(c)) {
        return None;
    }
    let mut g = f.clone();
    for ext in field.extensions() {
        if g.coeffs().iter().all(|c| c.level() < ext.depth()) {
            continue;
        }
        let conj = g.map_coeffs(|c| c.conjugate_over(ext));
        g = g.mul(&conj);
    }
    g.coeffs().iter().all(|c| c.as_rational().is_some()).then_some(g)
}

/// Scales a polynomial with rational coefficients to primitive integer form.
fn integer_coeffs(f: &DensePoly<Algebraic>) -> Option<Vec<Integer>> {
    let rationals: Vec<&Rational> = f
        .coeffs()
        .iter()
        .map(Algebraic::as_rational)
        .collect::<Option<_>>()?;
    let den = rationals
        .iter()
        .fold(Integer::new(1), |acc, q| acc.lcm(&q.denominator()));
    let ints: Vec<Integer> = rationals
        .iter()
        .map(|q| {
            let scaled = &Rational::from_integer(den.clone()) * *q;
            scaled.to_integer()
        })
        .collect::<Option<_>>()?;
    let g = ints.iter().fold(Integer::new(0), |acc, c| acc.gcd(c));
    if g == Integer::new(0) {
        return None;
    }
    Some(ints.iter().map(|c| c / &g).collect())
}

/// Candidate rational roots `±p/q` of `f`, ascending and deduplicated.
///
/// Returns `None` when the constant or leading coefficient is too large
/// to enumerate its divisors within `divisor_limit`.
#[must_use]
pub fn candidates(
    f: &DensePoly<Algebraic>,
    field: &NumberField,
    divisor_limit: u64,
) -> Option<Vec<Rational>> {
    let n = norm(f, field)?;
    let k = n.trailing_zeros();
    let n = n.shift_down(k);
    let ints = integer_coeffs(&n)?;
    let (first, last) = (ints.first()?, ints.last()?);
    let ps = first.divisors(divisor_limit)?;
    let qs = last.divisors(divisor_limit)?;

    let mut out = Vec::with_capacity(2 * ps.len() * qs.len() + 1);
    if k > 0 {
        out.push(Rational::from_i64(0, 1));
    }
    for p in &ps {
        for q in &qs {
            let r = Rational::new(p.clone(), q.clone());
            out.push(-&r);
            out.push(r);
        }
    }
    out.sort();
    out.dedup();
    Some(out)
}

/// Rational roots of `f` in ascending order.
///
/// Returns `None` if the candidate set could not be enumerated.
#[must_use]
pub fn rational_roots(
    f: &DensePoly<Algebraic>,
    field: &NumberField,
    divisor_limit: u64,
) -> Option<Vec<Rational>> {
    if f.is_zero() {
        return None;
    }
    let roots = candidates(f, field, divisor_limit)?
        .into_iter()
        .filter(|r| f.eval(&Algebraic::from(r.clone())).is_zero())
        .collect();
    Some(roots)
}
