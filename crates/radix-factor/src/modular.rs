//! Polynomial arithmetic over the prime field Z/pZ.
//!
//! Polynomials are coefficient vectors in ascending degree order with no
//! trailing zeros, so the zero polynomial is the empty vector. Primes are
//! kept below 2³¹, which lets every product of two residues fit in a
//! `u64`.

use radix_integers::Integer;
use radix_poly::DensePoly;
use radix_rings::Z;

/// A polynomial over Z/pZ.
pub type ModPoly = Vec<u64>;

/// Largest prime accepted by [`PrimeField::new`].
pub const MAX_PRIME: u64 = (1 << 31) - 1;

/// The field Z/pZ for an odd prime `p`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrimeField {
    p: u64,
}

impl PrimeField {
    /// The field of residues modulo `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p` is even or larger than [`MAX_PRIME`]. Primality is
    /// the caller's responsibility.
    #[must_use]
    pub fn new(p: u64) -> Self {
        assert!(p % 2 == 1 && p <= MAX_PRIME, "modulus must be an odd prime below 2^31");
        Self { p }
    }

    /// The characteristic.
    #[must_use]
    pub fn modulus(&self) -> u64 {
        self.p
    }

    /// The residue of an integer.
    #[must_use]
    pub fn reduce(&self, n: &Integer) -> u64 {
        let p = Integer::from(self.p);
        let mut r = n % &p;
        if r.is_negative() {
            r = r + &p;
        }
        r.to_i64()
            .and_then(|v| u64::try_from(v).ok())
            .expect("residue lies in [0, p)")
    }

    /// Sum of two residues.
    #[must_use]
    pub fn add(&self, a: u64, b: u64) -> u64 {
        (a + b) % self.p
    }

    /// Difference of two residues.
    #[must_use]
    pub fn sub(&self, a: u64, b: u64) -> u64 {
        (a + self.p - b) % self.p
    }

    /// Product of two residues.
    #[must_use]
    pub fn mul(&self, a: u64, b: u64) -> u64 {
        a * b % self.p
    }

    /// `a^e` by repeated squaring.
    #[must_use]
    pub fn pow(&self, mut a: u64, mut e: u64) -> u64 {
        let mut out = 1;
        while e > 0 {
            if e & 1 == 1 {
                out = self.mul(out, a);
            }
            a = self.mul(a, a);
            e >>= 1;
        }
        out
    }

    /// The inverse of a nonzero residue.
    #[must_use]
    pub fn inv(&self, a: u64) -> Option<u64> {
        (a % self.p != 0).then(|| self.pow(a, self.p - 2))
    }

    /// Reduces an integer polynomial coefficientwise.
    #[must_use]
    pub fn poly_from_z(&self, f: &DensePoly<Z>) -> ModPoly {
        normalized(f.coeffs().iter().map(|c| self.reduce(&c.0)).collect())
    }

    /// Sum of two polynomials.
    #[must_use]
    pub fn poly_add(&self, a: &[u64], b: &[u64]) -> ModPoly {
        let len = a.len().max(b.len());
        let at = |v: &[u64], i: usize| v.get(i).copied().unwrap_or(0);
        normalized((0..len).map(|i| self.add(at(a, i), at(b, i))).collect())
    }

    /// Difference of two polynomials.
    #[must_use]
    pub fn poly_sub(&self, a: &[u64], b: &[u64]) -> ModPoly {
        let len = a.len().max(b.len());
        let at = |v: &[u64], i: usize| v.get(i).copied().unwrap_or(0);
        normalized((0..len).map(|i| self.sub(at(a, i), at(b, i))).collect())
    }

    /// Product of two polynomials.
    #[must_use]
    pub fn poly_mul(&self, a: &[u64], b: &[u64]) -> ModPoly {
        if a.is_empty() || b.is_empty() {
            return Vec::new();
        }
        let mut out = vec![0; a.len() + b.len() - 1];
        for (i, &x) in a.iter().enumerate() {
            if x == 0 {
                continue;
            }
            for (j, &y) in b.iter().enumerate() {
                out[i + j] = self.add(out[i + j], self.mul(x, y));
            }
        }
        normalized(out)
    }

    /// Multiplies every coefficient by `c`.
    #[must_use]
    pub fn poly_scale(&self, a: &[u64], c: u64) -> ModPoly {
        normalized(a.iter().map(|&x| self.mul(x, c)).collect())
    }

    /// Quotient and remainder of Euclidean division.
    ///
    /// # Panics
    ///
    /// Panics if `b` is zero.
    #[must_use]
    pub fn poly_div_rem(&self, a: &[u64], b: &[u64]) -> (ModPoly, ModPoly) {
        let lead = b.last().copied().expect("division by the zero polynomial");
        let lead_inv = self.inv(lead).expect("leading coefficient is nonzero");
        if a.len() < b.len() {
            return (Vec::new(), a.to_vec());
        }
        let mut rem = a.to_vec();
        let mut quot = vec![0; a.len() - b.len() + 1];
        for i in (0..quot.len()).rev() {
            let c = self.mul(rem[i + b.len() - 1], lead_inv);
            quot[i] = c;
            if c == 0 {
                continue;
            }
            for (j, &y) in b.iter().enumerate() {
                rem[i + j] = self.sub(rem[i + j], self.mul(c, y));
            }
        }
        (normalized(quot), normalized(rem))
    }

    /// Remainder of Euclidean division.
    #[must_use]
    pub fn poly_rem(&self, a: &[u64], b: &[u64]) -> ModPoly {
        self.poly_div_rem(a, b).1
    }

    /// Scales a nonzero polynomial to leading coefficient one.
    #[must_use]
    pub fn monic(&self, a: &[u64]) -> ModPoly {
        match a.last().and_then(|&c| self.inv(c)) {
            Some(inv) => self.poly_scale(a, inv),
            None => a.to_vec(),
        }
    }

    /// Monic greatest common divisor.
    #[must_use]
    pub fn poly_gcd(&self, a: &[u64], b: &[u64]) -> ModPoly {
        let mut a = a.to_vec();
        let mut b = b.to_vec();
        while !b.is_empty() {
            let r = self.poly_rem(&a, &b);
            a = std::mem::replace(&mut b, r);
        }
        self.monic(&a)
    }

    /// Monic `g = gcd(a, b)` together with `s, t` such that `s·a + t·b = g`.
    #[must_use]
    pub fn poly_ext_gcd(&self, a: &[u64], b: &[u64]) -> (ModPoly, ModPoly, ModPoly) {
        let (mut r0, mut r1) = (a.to_vec(), b.to_vec());
        let (mut s0, mut s1) = (vec![1], Vec::new());
        let (mut t0, mut t1) = (Vec::new(), vec![1]);
        while !r1.is_empty() {
            let (q, r) = self.poly_div_rem(&r0, &r1);
            let s = self.poly_sub(&s0, &self.poly_mul(&q, &s1));
            let t = self.poly_sub(&t0, &self.poly_mul(&q, &t1));
            r0 = std::mem::replace(&mut r1, r);
            s0 = std::mem::replace(&mut s1, s);
            t0 = std::mem::replace(&mut t1, t);
        }
        let Some(inv) = r0.last().and_then(|&c| self.inv(c)) else {
            return (r0, s0, t0);
        };
        (
            self.poly_scale(&r0, inv),
            self.poly_scale(&s0, inv),
            self.poly_scale(&t0, inv),
        )
    }

    /// `a^e mod f`.
    #[must_use]
    pub fn poly_pow_mod(&self, a: &[u64], mut e: u64, f: &[u64]) -> ModPoly {
        let mut out = self.poly_rem(&[1], f);
        let mut base = self.poly_rem(a, f);
        while e > 0 {
            if e & 1 == 1 {
                out = self.poly_rem(&self.poly_mul(&out, &base), f);
            }
            base = self.poly_rem(&self.poly_mul(&base, &base), f);
            e >>= 1;
        }
        out
    }

    /// Formal derivative.
    #[must_use]
    pub fn derivative(&self, a: &[u64]) -> ModPoly {
        normalized(
            a.iter()
                .enumerate()
                .skip(1)
                .map(|(i, &c)| self.mul(c, i as u64 % self.p))
                .collect(),
        )
    }

    /// True if `a` has no repeated factor over the algebraic closure.
    #[must_use]
    pub fn is_squarefree(&self, a: &[u64]) -> bool {
        degree(&self.poly_gcd(a, &self.derivative(a))) == Some(0)
    }
}

/// Degree of a polynomial, `None` for zero.
#[must_use]
pub fn degree(a: &[u64]) -> Option<usize> {
    a.len().checked_sub(1)
}

fn normalized(mut v: ModPoly) -> ModPoly {
    while v.last() == Some(&0) {
        v.pop();
    }
    v
}
