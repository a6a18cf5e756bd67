//! Hensel lifting for polynomial factorization.
//!
//! Lifts a factorization modulo p to a factorization modulo pᵏ. The
//! factors are split into a binary tree; each node lifts a pair
//! `f ≡ g·h` one power of p at a time from the Bézout relation
//! `s·g + t·h ≡ 1 (mod p)`.

use num_traits::{One, Zero};
use radix_integers::Integer;
use radix_poly::DensePoly;
use radix_rings::Z;

use crate::modular::{ModPoly, PrimeField};

/// Result of Hensel lifting.
#[derive(Clone, Debug)]
pub struct HenselLiftResult {
    /// Monic lifted factors, coefficients in `[0, modulus)`.
    pub factors: Vec<DensePoly<Z>>,
    /// The final modulus pᵏ.
    pub modulus: Integer,
}

/// Lifts the monic factorization `f ≡ lc(f)·∏ factors (mod p)` to modulus `pᵏ`.
///
/// # Panics
///
/// Panics if `p` divides the leading coefficient of `f`.
#[must_use]
pub fn hensel_lift(
    f: &DensePoly<Z>,
    factors: &[ModPoly],
    field: PrimeField,
    k: u32,
) -> HenselLiftResult {
    let modulus = Integer::from(field.modulus()).pow(k.max(1));
    let lc_inv = inverse_mod(&f.leading_coeff().0, &modulus)
        .expect("leading coefficient is a unit modulo p");
    let monic = reduce(&f.scale(&Z(lc_inv)), &modulus);
    HenselLiftResult {
        factors: lift_tree(&monic, factors, field, k),
        modulus,
    }
}

fn lift_tree(
    f: &DensePoly<Z>,
    factors: &[ModPoly],
    field: PrimeField,
    k: u32,
) -> Vec<DensePoly<Z>> {
    if factors.len() < 2 {
        return factors.iter().map(|_| f.clone()).collect();
    }
    let (left, right) = factors.split_at(factors.len() / 2);
    let g0 = product(left, field);
    let h0 = product(right, field);
    let (g, h) = lift_pair(f, &g0, &h0, field, k);
    let mut out = lift_tree(&g, left, field, k);
    out.extend(lift_tree(&h, right, field, k));
    out
}

/// Lifts `f ≡ g0·h0 (mod p)` with monic, coprime `g0, h0` to `f ≡ g·h (mod pᵏ)`.
fn lift_pair(
    f: &DensePoly<Z>,
    g0: &[u64],
    h0: &[u64],
    field: PrimeField,
    k: u32,
) -> (DensePoly<Z>, DensePoly<Z>) {
    let p = Integer::from(field.modulus());
    let (_, s, t) = field.poly_ext_gcd(g0, h0);
    let mut g = to_z(g0);
    let mut h = to_z(h0);
    let mut m = p.clone();
    for _ in 1..k {
        let e = f.sub(&g.mul(&h)).map_coeffs(|c| Z(&c.0 / &m));
        let e = field.poly_from_z(&e);
        let (q, dg) = field.poly_div_rem(&field.poly_mul(&e, &t), g0);
        let dh = field.poly_add(&field.poly_mul(&e, &s), &field.poly_mul(&q, h0));
        let step = Z(m.clone());
        g = g.add(&to_z(&dg).scale(&step));
        h = h.add(&to_z(&dh).scale(&step));
        m = &m * &p;
    }
    (g, h)
}

fn product(factors: &[ModPoly], field: PrimeField) -> ModPoly {
    factors.iter().fold(vec![1], |acc, f| field.poly_mul(&acc, f))
}

fn to_z(f: &[u64]) -> DensePoly<Z> {
    DensePoly::new(f.iter().map(|&c| Z(Integer::from(c))).collect())
}

/// The residue of `n` in `[0, m)`.
pub(crate) fn reduce_int(n: &Integer, m: &Integer) -> Integer {
    let r = n % m;
    if r.is_negative() {
        r + m
    } else {
        r
    }
}

/// Reduces every coefficient into `[0, m)`.
pub(crate) fn reduce(f: &DensePoly<Z>, m: &Integer) -> DensePoly<Z> {
    f.map_coeffs(|c| Z(reduce_int(&c.0, m)))
}

/// The inverse of `a` modulo `m`, if they are coprime.
fn inverse_mod(a: &Integer, m: &Integer) -> Option<Integer> {
    let (mut r0, mut r1) = (reduce_int(a, m), m.clone());
    let (mut s0, mut s1) = (Integer::one(), Integer::zero());
    while !r1.is_zero() {
        let q = &r0 / &r1;
        let r = &r0 - &(&q * &r1);
        let s = &s0 - &(&q * &s1);
        r0 = std::mem::replace(&mut r1, r);
        s0 = std::mem::replace(&mut s1, s);
    }
    r0.is_one().then(|| reduce_int(&s0, m))
}
