//! The field of rational numbers Q.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{One, Zero};
use radix_integers::{Integer, Rational};

use crate::traits::{Field, Ring};

/// The field of rational numbers.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Q(pub Rational);

impl Q {
    /// Creates `num / den`.
    ///
    /// # Panics
    ///
    /// Panics if `den` is zero.
    #[must_use]
    pub fn new(num: i64, den: i64) -> Self {
        Self(Rational::from_i64(num, den))
    }

    /// Embeds an integer.
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self(Rational::from_integer(n))
    }

    /// Returns the inner rational.
    #[must_use]
    pub fn into_inner(self) -> Rational {
        self.0
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        self.0.signum()
    }
}

impl Ring for Q {
    fn zero() -> Self {
        Self(Rational::zero())
    }

    fn one() -> Self {
        Self(Rational::one())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    fn is_one(&self) -> bool {
        self.0.is_one()
    }

    fn from_i64(n: i64) -> Self {
        Self(Rational::from(n))
    }
}

impl Field for Q {
    fn inv(&self) -> Option<Self> {
        (!self.is_zero()).then(|| Self(self.0.recip()))
    }
}

impl Add for Q {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Q {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Q {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl Neg for Q {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl From<i64> for Q {
    fn from(value: i64) -> Self {
        Self(Rational::from(value))
    }
}

impl From<Rational> for Q {
    fn from(value: Rational) -> Self {
        Self(value)
    }
}

impl fmt::Display for Q {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_ops() {
        let a = Q::new(2, 3);
        let b = Q::new(3, 4);
        assert_eq!(a.clone() + b.clone(), Q::new(17, 12));
        assert_eq!(a.clone() * b.clone(), Q::new(1, 2));
        assert_eq!(a.field_div(&b), Q::new(8, 9));
    }

    #[test]
    fn test_inverse() {
        assert_eq!(Q::new(3, 5).inv(), Some(Q::new(5, 3)));
        assert_eq!(Q::zero().inv(), None);
    }

    #[test]
    fn test_pow() {
        assert_eq!(Q::new(-1, 2).pow(3), Q::new(-1, 8));
        assert!(Q::new(7, 3).pow(0).is_one());
    }
}
