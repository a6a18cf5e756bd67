//! Linear and quadratic factors.

use radix_poly::DensePoly;
use radix_rings::{Algebraic, Field, NumberField};

/// The root of `c₁x + c₀`.
///
/// # Panics
///
/// Panics if `p` is not of degree one.
#[must_use]
pub fn linear_root(p: &DensePoly<Algebraic>) -> Algebraic {
    assert_eq!(p.degree(), 1, "linear_root needs a degree-one polynomial");
    -(&p.coeff(0) / p.leading_coeff())
}

/// Both roots of `ax² + bx + c` together with the field they live in.
///
/// The discriminant's square root is adjoined to `field` unless it is
/// already a square there. The root with `+√disc` comes first.
///
/// # Panics
///
/// Panics if `p` is not of degree two.
#[must_use]
pub fn quadratic_roots(
    p: &DensePoly<Algebraic>,
    field: &NumberField,
) -> (NumberField, [Algebraic; 2]) {
    assert_eq!(p.degree(), 2, "quadratic_roots needs a degree-two polynomial");
    let a = p.coeff(2);
    let b = p.coeff(1);
    let c = p.coeff(0);
    let disc = &(&b * &b) - &(&(&a * &c) * &Algebraic::from(4));
    let (ext, s) = field.adjoin_sqrt(&disc);
    let denom = (&a * &Algebraic::from(2))
        .inv()
        .expect("leading coefficient is nonzero");
    let plus = &(&(-&b) + &s) * &denom;
    let minus = &(&(-&b) - &s) * &denom;
    (ext, [plus, minus])
}

#[cfg(test)]
mod tests {
    use super::*;
    use radix_integers::Rational;
    use radix_rings::Ring;

    fn poly(cs: &[i64]) -> DensePoly<Algebraic> {
        DensePoly::new(cs.iter().map(|&c| Algebraic::from(c)).collect())
    }

    #[test]
    fn test_linear() {
        // 3x + 2
        assert_eq!(
            linear_root(&poly(&[2, 3])),
            Algebraic::from(Rational::from_i64(-2, 3))
        );
    }

    #[test]
    fn test_rational_quadratic_stays_in_field() {
        // x² - 5x + 6
        let (field, [r1, r2]) = quadratic_roots(&poly(&[6, -5, 1]), &NumberField::rationals());
        assert_eq!(field.depth(), 0);
        assert_eq!(r1, Algebraic::from(3));
        assert_eq!(r2, Algebraic::from(2));
    }

    #[test]
    fn test_irrational_quadratic() {
        // y² + y - 7: roots -1/2 ± √29/2
        let (field, [r1, r2]) = quadratic_roots(&poly(&[-7, 1, 1]), &NumberField::rationals());
        assert_eq!(field.depth(), 1);
        assert_eq!(r1.to_string(), "-1/2 + sqrt(29)/2");
        assert_eq!(r2.to_string(), "-1/2 - sqrt(29)/2");
        let p = poly(&[-7, 1, 1]);
        assert!(p.eval(&r1).is_zero());
        assert!(p.eval(&r2).is_zero());
    }

    #[test]
    fn test_complex_quadratic() {
        // x² + 1
        let (field, [r1, r2]) = quadratic_roots(&poly(&[1, 0, 1]), &NumberField::rationals());
        assert!(!field.is_real());
        assert_eq!(&r1 + &r2, Algebraic::zero());
        assert_eq!(&r1 * &r2, Algebraic::one());
    }
}
