//! The ring of integers Z.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{One, Zero};
use radix_integers::Integer;

use crate::traits::Ring;

/// The ring of integers.
///
/// Integer polynomials are the input of factorization over Q; norms of
/// algebraic polynomials are cleared of denominators into this ring.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Z(pub Integer);

impl Z {
    /// Creates a new integer.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(Integer::new(value))
    }

    /// Returns the inner integer.
    #[must_use]
    pub fn into_inner(self) -> Integer {
        self.0
    }
}

impl Ring for Z {
    fn zero() -> Self {
        Self(Integer::zero())
    }

    fn one() -> Self {
        Self(Integer::one())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    fn is_one(&self) -> bool {
        self.0.is_one()
    }

    fn from_i64(n: i64) -> Self {
        Self::new(n)
    }
}

impl Add for Z {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Z {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Z {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl Neg for Z {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl From<i64> for Z {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Integer> for Z {
    fn from(value: Integer) -> Self {
        Self(value)
    }
}

impl fmt::Display for Z {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
