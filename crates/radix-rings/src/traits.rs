//! Algebraic structure traits.
//!
//! Polynomials, matrices and root finders are generic over these.

use std::fmt::{Debug, Display};
use std::ops::{Add, Mul, Neg, Sub};

/// A commutative ring with identity.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative and commutative with identity `one()`
/// - Multiplication distributes over addition
pub trait Ring:
    Clone
    + Eq
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Embeds an integer.
    fn from_i64(n: i64) -> Self;

    /// Computes `self^n` by repeated squaring.
    fn pow(&self, n: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;
        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            exp >>= 1;
            if exp > 0 {
                base = base.clone() * base;
            }
        }
        result
    }
}

/// A ring in which every nonzero element is invertible.
pub trait Field: Ring {
    /// The multiplicative inverse, or `None` for zero.
    fn inv(&self) -> Option<Self>;

    /// Divides by another element.
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero.
    fn field_div(&self, other: &Self) -> Self {
        self.clone() * other.inv().expect("division by zero")
    }
}
