//! Content, primitive parts and square-free decomposition over Z.
//!
//! The decomposition runs over Q with Yun's algorithm and clears
//! denominators afterwards; by Gauss's lemma the primitive parts are the
//! square-free factors over Z.

use num_traits::{One, Zero};
use radix_integers::{Integer, Rational};
use radix_poly::algorithms::squarefree_decomposition;
use radix_poly::DensePoly;
use radix_rings::{Q, Z};

/// The non-negative gcd of the coefficients.
#[must_use]
pub fn content(f: &DensePoly<Z>) -> Integer {
    f.coeffs()
        .iter()
        .fold(Integer::zero(), |acc, c| acc.gcd(&c.0))
}

/// `f` divided by its content, with a positive leading coefficient.
///
/// The zero polynomial is returned unchanged.
#[must_use]
pub fn primitive_part(f: &DensePoly<Z>) -> DensePoly<Z> {
    let mut c = content(f);
    if c.is_zero() {
        return f.clone();
    }
    if f.leading_coeff().0.is_negative() {
        c = -c;
    }
    f.map_coeffs(|a| Z(&a.0 / &c))
}

/// The primitive integer polynomial with the same roots as `f`.
#[must_use]
pub fn from_rational(f: &DensePoly<Q>) -> DensePoly<Z> {
    let den = f
        .coeffs()
        .iter()
        .fold(Integer::one(), |acc, c| acc.lcm(&c.0.denominator()));
    let den = Rational::from_integer(den);
    let scaled = f.map_coeffs(|c| {
        let n = (&den * &c.0)
            .to_integer()
            .expect("denominators divide their lcm");
        Z(n)
    });
    primitive_part(&scaled)
}

/// The square-free factors of a primitive `f` with their multiplicities.
///
/// Every factor is primitive with a positive leading coefficient and has
/// positive degree; the multiplicities are strictly increasing.
#[must_use]
pub fn squarefree_parts(f: &DensePoly<Z>) -> Vec<(DensePoly<Z>, u32)> {
    if f.is_zero() {
        return Vec::new();
    }
    let over_q = f.map_coeffs(|c| Q::from_integer(c.0.clone()));
    squarefree_decomposition(&over_q)
        .factors
        .iter()
        .filter(|sf| sf.factor.degree() > 0)
        .map(|sf| (from_rational(&sf.factor), sf.multiplicity))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zpoly(cs: &[i64]) -> DensePoly<Z> {
        DensePoly::new(cs.iter().map(|&c| Z::new(c)).collect())
    }

    #[test]
    fn test_content_and_primitive_part() {
        let f = zpoly(&[6, -4, -2]);
        assert_eq!(content(&f), Integer::new(2));
        assert_eq!(primitive_part(&f), zpoly(&[-3, 2, 1]));
        assert_eq!(primitive_part(&DensePoly::zero()), DensePoly::zero());
    }

    #[test]
    fn test_from_rational() {
        let f = DensePoly::new(vec![Q::new(1, 2), Q::new(-1, 3), Q::new(2, 1)]);
        assert_eq!(from_rational(&f), zpoly(&[3, -2, 12]));
    }

    #[test]
    fn test_squarefree_parts() {
        // (x - 1)²(2x + 1) = 2x³ - 3x² + 1
        let parts = squarefree_parts(&zpoly(&[1, 0, -3, 2]));
        assert_eq!(parts, vec![(zpoly(&[1, 2]), 1), (zpoly(&[-1, 1]), 2)]);
    }
}
