//! Arbitrary precision rational numbers.

use dashu::base::{Abs, Inverse, Signed as DashuSigned, UnsignedAbs};
use dashu::integer::IBig;
use dashu::rational::RBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;
use thiserror::Error;

use crate::Integer;

/// An arbitrary precision rational number.
///
/// Always stored in lowest terms with a positive denominator, so the
/// derived equality and hash are structural.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rational(RBig);

/// Failure to read a rational literal such as `-3/4`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseRationalError {
    /// The numerator or denominator is not an integer.
    #[error("invalid integer literal `{0}`")]
    InvalidInteger(String),
    /// The denominator is zero.
    #[error("zero denominator in `{0}`")]
    ZeroDenominator(String),
}

impl Rational {
    /// Creates `numerator / denominator` in lowest terms.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(numerator: Integer, denominator: Integer) -> Self {
        assert!(!denominator.is_zero(), "denominator cannot be zero");
        let negative = denominator.is_negative();
        let r = RBig::from_parts(numerator.into_inner(), denominator.into_inner().unsigned_abs());
        if negative {
            Self(-r)
        } else {
            Self(r)
        }
    }

    /// Embeds an integer.
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self(RBig::from(n.into_inner()))
    }

    /// Creates a rational from i64 parts.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn from_i64(numerator: i64, denominator: i64) -> Self {
        Self::new(Integer::new(numerator), Integer::new(denominator))
    }

    /// The numerator, carrying the sign.
    #[must_use]
    pub fn numerator(&self) -> Integer {
        Integer::from(self.0.numerator().clone())
    }

    /// The (positive) denominator.
    #[must_use]
    pub fn denominator(&self) -> Integer {
        Integer::from(IBig::from(self.0.denominator().clone()))
    }

    /// True if the denominator is one.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.denominator().is_one()
    }

    /// Converts to an integer if the denominator is one.
    #[must_use]
    pub fn to_integer(&self) -> Option<Integer> {
        self.is_integer().then(|| self.numerator())
    }

    /// Absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns `1/x`.
    ///
    /// # Panics
    ///
    /// Panics if the rational is zero.
    #[must_use]
    pub fn recip(&self) -> Self {
        assert!(!self.is_zero(), "cannot take reciprocal of zero");
        Self(self.0.clone().inv())
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.0.is_zero() {
            0
        } else if DashuSigned::is_positive(&self.0) {
            1
        } else {
            -1
        }
    }

    /// True if strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Raises to an integer power; negative exponents invert first.
    ///
    /// # Panics
    ///
    /// Panics on a negative power of zero.
    #[must_use]
    pub fn pow(&self, exp: i32) -> Self {
        let base = if exp < 0 { self.recip() } else { self.clone() };
        Self(base.0.pow(exp.unsigned_abs() as usize))
    }

    /// Exact square root if both numerator and denominator are squares.
    #[must_use]
    pub fn perfect_sqrt(&self) -> Option<Self> {
        let n = self.numerator().perfect_sqrt()?;
        let d = self.denominator().perfect_sqrt()?;
        Some(Self::new(n, d))
    }

    /// Writes `x = c² · k` with rational `c > 0` and square-free integer `k`.
    ///
    /// `√x` is then `c·√k`, which keeps adjoined radicands canonical.
    #[must_use]
    pub fn square_free_split(&self) -> (Self, Integer) {
        // p/q = p·q / q², so only p·q needs splitting.
        let q = self.denominator();
        let (c, k) = (&self.numerator() * &q).square_free_split();
        (Self::new(c, q), k)
    }

    /// Unwrap into the underlying `RBig`.
    #[must_use]
    pub fn into_inner(self) -> RBig {
        self.0
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0.is_one()
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}

impl FromStr for Rational {
    type Err = ParseRationalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let int = |part: &str| {
            part.trim()
                .parse::<Integer>()
                .map_err(|_| ParseRationalError::InvalidInteger(s.to_string()))
        };
        match s.split_once('/') {
            None => Ok(Self::from_integer(int(s)?)),
            Some((num, den)) => {
                let den = int(den)?;
                if den.is_zero() {
                    return Err(ParseRationalError::ZeroDenominator(s.to_string()));
                }
                Ok(Self::new(int(num)?, den))
            }
        }
    }
}

macro_rules! rational_binop {
    ($($trait:ident :: $method:ident),* $(,)?) => {$(
        impl $trait for Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Rational {
                Rational($trait::$method(self.0, rhs.0))
            }
        }

        impl $trait<&Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Rational {
                Rational($trait::$method(self.0, &rhs.0))
            }
        }

        impl $trait<&Rational> for &Rational {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Rational {
                Rational($trait::$method(&self.0, &rhs.0))
            }
        }
    )*};
}

rational_binop!(Add::add, Sub::sub, Mul::mul, Div::div);

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational(-self.0)
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational(-&self.0)
    }
}

impl From<Integer> for Rational {
    fn from(n: Integer) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(Integer::new(n))
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(Integer::from(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowest_terms() {
        let r = Rational::from_i64(4, -6);
        assert_eq!(r.numerator(), Integer::new(-2));
        assert_eq!(r.denominator(), Integer::new(3));
    }

    #[test]
    fn test_display_and_parse() {
        assert_eq!(Rational::from_i64(3, 1).to_string(), "3");
        assert_eq!(Rational::from_i64(-2, 3).to_string(), "-2/3");
        assert_eq!("-2/3".parse::<Rational>(), Ok(Rational::from_i64(-2, 3)));
        assert_eq!("41".parse::<Rational>(), Ok(Rational::from(41)));
        assert!(matches!(
            "1/0".parse::<Rational>(),
            Err(ParseRationalError::ZeroDenominator(_))
        ));
        assert!(matches!(
            "x".parse::<Rational>(),
            Err(ParseRationalError::InvalidInteger(_))
        ));
    }

    #[test]
    fn test_pow() {
        assert_eq!(Rational::from_i64(2, 3).pow(2), Rational::from_i64(4, 9));
        assert_eq!(Rational::from_i64(2, 3).pow(-1), Rational::from_i64(3, 2));
        assert_eq!(Rational::from_i64(2, 3).pow(0), Rational::one());
    }

    #[test]
    fn test_perfect_sqrt() {
        assert_eq!(
            Rational::from_i64(9, 4).perfect_sqrt(),
            Some(Rational::from_i64(3, 2))
        );
        assert_eq!(Rational::from_i64(1, 2).perfect_sqrt(), None);
        assert_eq!(Rational::from_i64(-1, 4).perfect_sqrt(), None);
    }

    #[test]
    fn test_square_free_split() {
        // 29/4 = (1/2)² · 29
        assert_eq!(
            Rational::from_i64(29, 4).square_free_split(),
            (Rational::from_i64(1, 2), Integer::new(29))
        );
        // 1/2 = (1/2)² · 2
        assert_eq!(
            Rational::from_i64(1, 2).square_free_split(),
            (Rational::from_i64(1, 2), Integer::new(2))
        );
        assert_eq!(
            Rational::from(-8).square_free_split(),
            (Rational::from(2), Integer::new(-2))
        );
    }
}
