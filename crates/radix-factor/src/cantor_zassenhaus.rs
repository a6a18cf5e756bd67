//! Cantor-Zassenhaus factorization over Z/pZ.
//!
//! Distinct-degree factorization groups the irreducible factors of a
//! square-free polynomial by degree; equal-degree factorization then
//! splits each group with random gcds. The random source is a
//! fixed-seed `ChaCha8Rng`, so results are reproducible.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::modular::{degree, ModPoly, PrimeField};

const SEED: u64 = 0x5eed_cafe;

/// Random splitting attempts per factor before giving up.
const MAX_ATTEMPTS: usize = 200;

/// The monic irreducible factors of a square-free `f` over Z/pZ.
///
/// Factors are returned grouped by ascending degree.
///
/// # Panics
///
/// Panics if `f` is zero.
#[must_use]
pub fn factor_mod_p(f: &[u64], field: PrimeField) -> Vec<ModPoly> {
    let f = field.monic(f);
    let n = degree(&f).expect("cannot factor the zero polynomial");
    if n <= 1 {
        return if n == 1 { vec![f] } else { Vec::new() };
    }
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    let mut out = Vec::new();
    for (d, group) in distinct_degree(&f, field) {
        equal_degree(&group, d, field, &mut rng, &mut out);
    }
    out
}

/// Splits `f` into products of the irreducible factors of each degree.
fn distinct_degree(f: &[u64], field: PrimeField) -> Vec<(usize, ModPoly)> {
    let x: ModPoly = vec![0, 1];
    let mut rest = f.to_vec();
    let mut x_pow = x.clone();
    let mut out = Vec::new();
    let mut d = 0;
    while degree(&rest).is_some_and(|n| n >= 2 * (d + 1)) {
        d += 1;
        x_pow = field.poly_pow_mod(&x_pow, field.modulus(), &rest);
        let g = field.poly_gcd(&rest, &field.poly_sub(&x_pow, &x));
        if degree(&g).is_some_and(|k| k > 0) {
            rest = field.poly_div_rem(&rest, &g).0;
            x_pow = field.poly_rem(&x_pow, &rest);
            out.push((d, g));
        }
    }
    if let Some(n) = degree(&rest).filter(|&n| n > 0) {
        out.push((n, rest));
    }
    out
}

/// Splits a product of irreducible factors of degree `d` into those factors.
fn equal_degree(
    f: &[u64],
    d: usize,
    field: PrimeField,
    rng: &mut ChaCha8Rng,
    out: &mut Vec<ModPoly>,
) {
    let mut pending = vec![f.to_vec()];
    while let Some(g) = pending.pop() {
        let n = degree(&g).unwrap_or(0);
        if n <= d {
            out.push(g);
            continue;
        }
        match split(&g, d, field, rng) {
            Some(h) => {
                let rest = field.poly_div_rem(&g, &h).0;
                pending.push(rest);
                pending.push(h);
            }
            None => out.push(g),
        }
    }
    out.sort_by_key(|g| (g.len(), g.clone()));
}

/// A proper monic factor of `f`, found as `gcd(f, a^((p^d - 1)/2) - 1)`.
fn split(f: &[u64], d: usize, field: PrimeField, rng: &mut ChaCha8Rng) -> Option<ModPoly> {
    let n = f.len() - 1;
    let p = field.modulus();
    for _ in 0..MAX_ATTEMPTS {
        let a: ModPoly = (0..n).map(|_| rng.gen_range(0..p)).collect();
        let a = field.monic(&field.poly_rem(&a, f));
        if degree(&a).map_or(true, |k| k == 0) {
            continue;
        }
        let g = field.poly_gcd(f, &a);
        if is_proper(&g, n) {
            return Some(g);
        }
        // (p^d - 1)/2 = (1 + p + … + p^(d-1)) · (p - 1)/2
        let mut frob = a.clone();
        let mut norm = a;
        for _ in 1..d {
            frob = field.poly_pow_mod(&frob, p, f);
            norm = field.poly_rem(&field.poly_mul(&norm, &frob), f);
        }
        let b = field.poly_pow_mod(&norm, (p - 1) / 2, f);
        let g = field.poly_gcd(f, &field.poly_sub(&b, &[1]));
        if is_proper(&g, n) {
            return Some(g);
        }
    }
    None
}

fn is_proper(g: &[u64], n: usize) -> bool {
    degree(g).is_some_and(|k| k > 0 && k < n)
}
