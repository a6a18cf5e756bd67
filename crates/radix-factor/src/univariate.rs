//! Factorization of univariate polynomials over Z.
//!
//! A square-free primitive polynomial is factored modulo a small prime
//! with Cantor-Zassenhaus, the factors are Hensel-lifted far enough to
//! recover any true factor, and Zassenhaus' subset search combines them
//! into the irreducible factors over Z.

use num_traits::{One, Zero};
use radix_integers::Integer;
use radix_poly::DensePoly;
use radix_rings::Z;
use tracing::{debug, warn};

use crate::cantor_zassenhaus::factor_mod_p;
use crate::hensel::{hensel_lift, reduce, HenselLiftResult};
use crate::modular::{ModPoly, PrimeField};
use crate::squarefree::{content, primitive_part, squarefree_parts};

/// Number of suitable primes compared when picking a modulus.
const PRIME_TRIALS: usize = 3;

/// Primes tried before giving up on a suitable modulus.
const PRIME_LIMIT: usize = 200;

/// A factorization `content · ∏ fᵢ^eᵢ` over Z.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Factorization {
    /// Signed content; zero only for the zero polynomial.
    pub content: Integer,
    /// Irreducible primitive factors with positive leading coefficients,
    /// ordered by degree and then coefficients.
    pub factors: Vec<(DensePoly<Z>, u32)>,
}

impl Factorization {
    /// Multiplies the factorization back out.
    #[must_use]
    pub fn to_polynomial(&self) -> DensePoly<Z> {
        self.factors
            .iter()
            .fold(DensePoly::constant(Z(self.content.clone())), |acc, (f, e)| {
                acc.mul(&f.pow(*e))
            })
    }
}

/// Factors an integer polynomial into irreducibles.
#[must_use]
pub fn factor(f: &DensePoly<Z>) -> Factorization {
    if f.degree() == 0 {
        return Factorization {
            content: f.leading_coeff().0.clone(),
            factors: Vec::new(),
        };
    }
    let mut c = content(f);
    if f.leading_coeff().0.is_negative() {
        c = -c;
    }
    let mut factors: Vec<(DensePoly<Z>, u32)> = squarefree_parts(&primitive_part(f))
        .into_iter()
        .flat_map(|(part, e)| factor_squarefree(&part).into_iter().map(move |g| (g, e)))
        .collect();
    factors.sort_by(|(a, _), (b, _)| {
        a.degree()
            .cmp(&b.degree())
            .then_with(|| a.coeffs().cmp(b.coeffs()))
    });
    Factorization { content: c, factors }
}

/// The irreducible factors of a square-free primitive `f` of positive degree.
#[must_use]
pub fn factor_squarefree(f: &DensePoly<Z>) -> Vec<DensePoly<Z>> {
    let f = primitive_part(f);
    if f.degree() <= 1 {
        return vec![f];
    }
    let Some((field, modular)) = choose_prime(&f) else {
        warn!(degree = f.degree(), "no suitable prime, leaving polynomial unfactored");
        return vec![f];
    };
    if modular.len() == 1 {
        return vec![f];
    }
    let k = precision(&f, field.modulus());
    debug!(
        degree = f.degree(),
        prime = field.modulus(),
        precision = k,
        modular = modular.len(),
        "lifting modular factorization"
    );
    let lifted = hensel_lift(&f, &modular, field, k);
    recombine(f, lifted)
}

/// The prime with the fewest modular factors among the first few that
/// keep `f` square-free and its degree unchanged.
fn choose_prime(f: &DensePoly<Z>) -> Option<(PrimeField, Vec<ModPoly>)> {
    let mut best: Option<(PrimeField, Vec<ModPoly>)> = None;
    let mut trials = 0;
    for p in odd_primes().take(PRIME_LIMIT) {
        let field = PrimeField::new(p);
        if field.reduce(&f.leading_coeff().0) == 0 {
            continue;
        }
        let fp = field.poly_from_z(f);
        if !field.is_squarefree(&fp) {
            continue;
        }
        let modular = factor_mod_p(&fp, field);
        if modular.len() == 1 {
            return Some((field, modular));
        }
        if best.as_ref().map_or(true, |(_, b)| modular.len() < b.len()) {
            best = Some((field, modular));
        }
        trials += 1;
        if trials == PRIME_TRIALS {
            break;
        }
    }
    best
}

fn odd_primes() -> impl Iterator<Item = u64> {
    (3u64..)
        .step_by(2)
        .filter(|&n| (3..).step_by(2).take_while(|d| d * d <= n).all(|d| n % d != 0))
}

/// Smallest `k` with `pᵏ` above twice the coefficient bound of any
/// factor scaled to leading coefficient `lc(f)`.
fn precision(f: &DensePoly<Z>, p: u64) -> u32 {
    let n = f.degree();
    let max = f
        .coeffs()
        .iter()
        .map(|c| c.0.abs())
        .max()
        .unwrap_or_else(Integer::one);
    let n_u32 = u32::try_from(n).unwrap_or(u32::MAX);
    let bound = &(&(&Integer::new(2).pow(n_u32 + 1) * &Integer::from(n as u64 + 1)) * &max)
        * &f.leading_coeff().0.abs();
    let p = Integer::from(p);
    let mut k = 1;
    let mut pk = p.clone();
    while pk <= bound {
        pk = &pk * &p;
        k += 1;
    }
    k
}

/// Combines lifted factors into true factors by trial division.
fn recombine(f: DensePoly<Z>, lifted: HenselLiftResult) -> Vec<DensePoly<Z>> {
    let HenselLiftResult {
        factors: mut modular,
        modulus,
    } = lifted;
    let half = &modulus / &Integer::new(2);
    let mut f = f;
    let mut out = Vec::new();
    let mut size = 1;
    'sizes: while 2 * size <= modular.len() {
        for subset in Combinations::new(modular.len(), size) {
            let lc = DensePoly::constant(f.leading_coeff().clone());
            let candidate = subset
                .iter()
                .fold(lc, |acc, &i| reduce(&acc.mul(&modular[i]), &modulus));
            let candidate = primitive_part(&symmetric(&candidate, &modulus, &half));
            if let Some(q) = exact_div(&f, &candidate) {
                out.push(candidate);
                f = q;
                for &i in subset.iter().rev() {
                    modular.remove(i);
                }
                continue 'sizes;
            }
        }
        size += 1;
    }
    out.push(primitive_part(&f));
    out
}

/// Coefficients moved from `[0, m)` into `(-m/2, m/2]`.
fn symmetric(f: &DensePoly<Z>, m: &Integer, half: &Integer) -> DensePoly<Z> {
    f.map_coeffs(|c| if &c.0 > half { Z(&c.0 - m) } else { c.clone() })
}

/// `f / g` over Z, if `g` divides `f` exactly.
fn exact_div(f: &DensePoly<Z>, g: &DensePoly<Z>) -> Option<DensePoly<Z>> {
    let (n, m) = (f.degree(), g.degree());
    if g.is_zero() || m > n {
        return None;
    }
    let lead = &g.leading_coeff().0;
    let mut rem: Vec<Integer> = f.coeffs().iter().map(|c| c.0.clone()).collect();
    let mut quot = vec![Integer::zero(); n - m + 1];
    for i in (0..quot.len()).rev() {
        let top = &rem[i + m];
        if !(top % lead).is_zero() {
            return None;
        }
        let q = top / lead;
        for (j, c) in g.coeffs().iter().enumerate() {
            rem[i + j] = &rem[i + j] - &(&q * &c.0);
        }
        quot[i] = q;
    }
    rem.iter()
        .all(Zero::is_zero)
        .then(|| DensePoly::new(quot.into_iter().map(Z).collect()))
}

/// Index subsets of a fixed size in lexicographic order.
struct Combinations {
    n: usize,
    indices: Vec<usize>,
    started: bool,
}

impl Combinations {
    fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            started: false,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        let k = self.indices.len();
        if k > self.n {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.indices.clone());
        }
        let i = (0..k).rev().find(|&i| self.indices[i] < self.n - k + i)?;
        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(self.indices.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zpoly(cs: &[i64]) -> DensePoly<Z> {
        DensePoly::new(cs.iter().map(|&c| Z::new(c)).collect())
    }

    #[test]
    fn test_two_quadratics() {
        // (x² - 2)(x² - x - 1) = x⁴ - x³ - 3x² + 2x + 2
        let mut factors = factor_squarefree(&zpoly(&[2, 2, -3, -1, 1]));
        factors.sort_by(|a, b| a.coeffs().cmp(b.coeffs()));
        assert_eq!(factors, vec![zpoly(&[-2, 0, 1]), zpoly(&[-1, -1, 1])]);
    }

    #[test]
    fn test_irreducible_but_split_modulo_every_prime() {
        // x⁴ + 1 and x⁴ - 10x² + 1 factor modulo every prime
        for f in [zpoly(&[1, 0, 0, 0, 1]), zpoly(&[1, 0, -10, 0, 1])] {
            assert_eq!(factor_squarefree(&f), vec![f.clone()]);
        }
    }

    #[test]
    fn test_leading_coefficient() {
        // 6x² + 5x + 1 = (2x + 1)(3x + 1)
        let mut factors = factor_squarefree(&zpoly(&[1, 5, 6]));
        factors.sort_by(|a, b| a.coeffs().cmp(b.coeffs()));
        assert_eq!(factors, vec![zpoly(&[1, 2]), zpoly(&[1, 3])]);
    }

    #[test]
    fn test_factor_with_content_and_multiplicity() {
        // -2 (x - 1)² (x + 1) (x² + 1) = -2x⁵ + 2x⁴ + 2x - 2
        let f = zpoly(&[-2, 2, 0, 0, 2, -2]);
        let result = factor(&f);
        assert_eq!(result.content, Integer::new(-2));
        assert_eq!(
            result.factors,
            vec![(zpoly(&[-1, 1]), 2), (zpoly(&[1, 1]), 1), (zpoly(&[1, 0, 1]), 1)]
        );
        assert_eq!(result.to_polynomial(), f);
    }

    #[test]
    fn test_combinations() {
        let all: Vec<Vec<usize>> = Combinations::new(4, 2).collect();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0], vec![0, 1]);
        assert_eq!(all[5], vec![2, 3]);
        assert_eq!(Combinations::new(2, 3).count(), 0);
    }
}
