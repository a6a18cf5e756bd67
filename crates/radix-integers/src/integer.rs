//! Arbitrary precision integers.
//!
//! A thin wrapper around `dashu::integer::IBig` with the handful of
//! number-theoretic helpers used by root finding and field towers.

use dashu::base::{Abs, BitTest, Gcd, Signed as DashuSigned};
use dashu::integer::IBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};
use std::str::FromStr;

/// Trial division bound used by [`Integer::square_free_split`].
const SQUARE_FREE_TRIAL_LIMIT: u64 = 10_000;

/// An arbitrary precision integer.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Integer(IBig);

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Parses an integer in the given base.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid integer.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self, dashu::base::error::ParseError> {
        IBig::from_str_radix(s, radix).map(Self)
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
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

    /// Returns true if this integer is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Number of bits in the magnitude.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        self.0.bit_len()
    }

    /// Greatest common divisor, always non-negative.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        Self(IBig::from(self.0.clone().gcd(other.0.clone())))
    }

    /// Least common multiple, always non-negative.
    #[must_use]
    pub fn lcm(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        (&(self / &self.gcd(other)) * other).abs()
    }

    /// Raises to a non-negative power.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self(self.0.pow(exp as usize))
    }

    /// Converts to an i64 when it fits.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        i64::try_from(self.0.clone()).ok()
    }

    /// Unwrap into the underlying `IBig`.
    #[must_use]
    pub fn into_inner(self) -> IBig {
        self.0
    }

    /// Floor of the square root of a non-negative integer.
    ///
    /// Returns `None` for negative input.
    #[must_use]
    pub fn isqrt(&self) -> Option<Self> {
        if self.is_negative() {
            return None;
        }
        if self.0 < IBig::from(2) {
            return Some(self.clone());
        }
        // Newton iteration from a power of two above the root.
        let shift = self.bit_len().div_ceil(2);
        let mut x = Self(IBig::ONE << shift);
        loop {
            let y = Self((&x.0 + &self.0 / &x.0) >> 1);
            if y >= x {
                return Some(x);
            }
            x = y;
        }
    }

    /// Exact square root, if this integer is a perfect square.
    #[must_use]
    pub fn perfect_sqrt(&self) -> Option<Self> {
        let root = self.isqrt()?;
        (&root * &root == *self).then_some(root)
    }

    /// Splits `n` as `c² · k` with `c > 0` and `k` carrying the sign of `n`.
    ///
    /// Small prime squares are removed by trial division; a cofactor that is
    /// itself a perfect square is absorbed too. `k` is square-free whenever
    /// every prime above the trial bound occurs at most once.
    #[must_use]
    pub fn square_free_split(&self) -> (Self, Self) {
        if self.is_zero() {
            return (Self::one(), Self::zero());
        }
        let mut rest = self.abs();
        let mut outside = Self::one();
        let mut p = 2u64;
        while p <= SQUARE_FREE_TRIAL_LIMIT {
            let pi = Self::from(p);
            if &pi * &pi > rest {
                break;
            }
            let sq = &pi * &pi;
            while (&rest % &sq).is_zero() {
                rest = &rest / &sq;
                outside = &outside * &pi;
            }
            p += if p == 2 { 1 } else { 2 };
        }
        if let Some(r) = rest.perfect_sqrt() {
            outside = &outside * &r;
            rest = Self::one();
        }
        if self.is_negative() {
            rest = -rest;
        }
        (outside, rest)
    }

    /// Positive divisors of `|self|` in increasing order.
    ///
    /// Returns `None` for zero, or when enumerating would need trial
    /// division beyond `limit`.
    #[must_use]
    pub fn divisors(&self, limit: u64) -> Option<Vec<Self>> {
        if self.is_zero() {
            return None;
        }
        let n = self.abs();
        let root = n.isqrt()?;
        if root > Self::from(limit) {
            return None;
        }
        let bound = root.to_i64()?;
        let mut low = Vec::new();
        let mut high = Vec::new();
        for d in 1..=bound {
            let di = Self::new(d);
            if (&n % &di).is_zero() {
                let q = &n / &di;
                if q != di {
                    high.push(q);
                }
                low.push(di);
            }
        }
        low.extend(high.into_iter().rev());
        Some(low)
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Integer {
    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0.is_one()
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({})", self.0)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Integer {
    type Err = dashu::base::error::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(s.trim(), 10)
    }
}

macro_rules! integer_binop {
    ($($trait:ident :: $method:ident),* $(,)?) => {$(
        impl $trait for Integer {
            type Output = Integer;

            fn $method(self, rhs: Integer) -> Integer {
                Integer($trait::$method(self.0, rhs.0))
            }
        }

        impl $trait<&Integer> for Integer {
            type Output = Integer;

            fn $method(self, rhs: &Integer) -> Integer {
                Integer($trait::$method(self.0, &rhs.0))
            }
        }

        impl $trait<&Integer> for &Integer {
            type Output = Integer;

            fn $method(self, rhs: &Integer) -> Integer {
                Integer($trait::$method(&self.0, &rhs.0))
            }
        }
    )*};
}

integer_binop!(Add::add, Sub::sub, Mul::mul, Div::div, Rem::rem);

impl Neg for Integer {
    type Output = Integer;

    fn neg(self) -> Integer {
        Integer(-self.0)
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Integer {
        Integer(-&self.0)
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<u64> for Integer {
    fn from(value: u64) -> Self {
        Self(IBig::from(value))
    }
}

impl From<IBig> for Integer {
    fn from(value: IBig) -> Self {
        Self(value)
    }
}
