//! Euclidean division and gcd over a field.

use radix_rings::Field;

use crate::dense::DensePoly;

/// Divides `a` by `b`, returning `(quotient, remainder)`.
///
/// # Panics
///
/// Panics if `b` is the zero polynomial.
#[must_use]
pub fn poly_div_rem<F: Field>(a: &DensePoly<F>, b: &DensePoly<F>) -> (DensePoly<F>, DensePoly<F>) {
    assert!(!b.is_zero(), "division by zero polynomial");
    if a.degree() < b.degree() {
        return (DensePoly::zero(), a.clone());
    }

    let lead_inv = b.leading_coeff().inv().expect("nonzero leading coefficient");
    let bn = b.coeffs().len();
    let mut rem = a.coeffs().to_vec();
    let mut quot = vec![F::zero(); rem.len() - bn + 1];

    for shift in (0..quot.len()).rev() {
        let top = rem[shift + bn - 1].clone();
        if top.is_zero() {
            continue;
        }
        let factor = top * lead_inv.clone();
        for (k, bc) in b.coeffs().iter().enumerate() {
            rem[shift + k] = rem[shift + k].clone() - factor.clone() * bc.clone();
        }
        quot[shift] = factor;
    }

    rem.truncate(bn - 1);
    (DensePoly::new(quot), DensePoly::new(rem))
}

/// Scales to a monic polynomial; zero stays zero.
#[must_use]
pub fn make_monic<F: Field>(p: &DensePoly<F>) -> DensePoly<F> {
    match p.leading_coeff().inv() {
        Some(inv) if !p.is_zero() => p.scale(&inv),
        _ => p.clone(),
    }
}

/// Monic greatest common divisor.
#[must_use]
pub fn poly_gcd<F: Field>(a: &DensePoly<F>, b: &DensePoly<F>) -> DensePoly<F> {
    let mut p = a.clone();
    let mut q = b.clone();
    while !q.is_zero() {
        let (_, r) = poly_div_rem(&p, &q);
        p = q;
        q = r;
    }
    make_monic(&p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use radix_rings::Q;

    fn poly(cs: &[i64]) -> DensePoly<Q> {
        DensePoly::new(cs.iter().map(|&c| Q::from(c)).collect())
    }

    #[test]
    fn test_div_rem() {
        // x³ - 1 = (x - 1)(x² + x + 1)
        let (q, r) = poly_div_rem(&poly(&[-1, 0, 0, 1]), &poly(&[-1, 1]));
        assert_eq!(q, poly(&[1, 1, 1]));
        assert!(r.is_zero());

        // x² + 1 = x·(x) + 1
        let (q, r) = poly_div_rem(&poly(&[1, 0, 1]), &poly(&[0, 1]));
        assert_eq!(q, poly(&[0, 1]));
        assert_eq!(r, poly(&[1]));
    }

    #[test]
    fn test_gcd_is_monic() {
        // gcd(2(x-1)(x-2), 3(x-1)(x+5)) = x - 1
        let a = poly(&[4, -6, 2]);
        let b = poly(&[-15, 12, 3]);
        assert_eq!(poly_gcd(&a, &b), poly(&[-1, 1]));
        assert_eq!(poly_gcd(&poly(&[0]), &poly(&[0, 3])), poly(&[0, 1]));
    }
}
