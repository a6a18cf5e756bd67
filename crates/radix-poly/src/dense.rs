//! Dense univariate polynomials.

use radix_rings::Ring;

/// A dense univariate polynomial.
///
/// Coefficients are stored in ascending degree order and never carry
/// trailing zeros; the zero polynomial is `[0]`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct DensePoly<R: Ring> {
    coeffs: Vec<R>,
}

impl<R: Ring> DensePoly<R> {
    /// Creates a polynomial from ascending coefficients.
    #[must_use]
    pub fn new(mut coeffs: Vec<R>) -> Self {
        while coeffs.len() > 1 && coeffs.last().is_some_and(Ring::is_zero) {
            coeffs.pop();
        }
        if coeffs.is_empty() {
            coeffs.push(R::zero());
        }
        Self { coeffs }
    }

    /// The zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            coeffs: vec![R::zero()],
        }
    }

    /// The constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self {
            coeffs: vec![R::one()],
        }
    }

    /// A constant polynomial.
    #[must_use]
    pub fn constant(c: R) -> Self {
        Self::new(vec![c])
    }

    /// The polynomial `x`.
    #[must_use]
    pub fn x() -> Self {
        Self::new(vec![R::zero(), R::one()])
    }

    /// The monomial `c·xⁿ`.
    #[must_use]
    pub fn monomial(c: R, n: usize) -> Self {
        let mut coeffs = vec![R::zero(); n + 1];
        coeffs[n] = c;
        Self::new(coeffs)
    }

    /// Degree, zero for constants.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// True for the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    /// The leading coefficient.
    #[must_use]
    pub fn leading_coeff(&self) -> &R {
        &self.coeffs[self.coeffs.len() - 1]
    }

    /// Coefficient of `xⁱ`.
    #[must_use]
    pub fn coeff(&self, i: usize) -> R {
        self.coeffs.get(i).cloned().unwrap_or_else(R::zero)
    }

    /// Coefficients in ascending degree order.
    #[must_use]
    pub fn coeffs(&self) -> &[R] {
        &self.coeffs
    }

    /// Horner evaluation.
    #[must_use]
    pub fn eval(&self, x: &R) -> R {
        self.coeffs
            .iter()
            .rev()
            .fold(R::zero(), |acc, c| acc * x.clone() + c.clone())
    }

    /// Sum.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        Self::new((0..len).map(|i| self.coeff(i) + other.coeff(i)).collect())
    }

    /// Negation.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::new(self.coeffs.iter().map(|c| -c.clone()).collect())
    }

    /// Difference.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Product (schoolbook).
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let mut out = vec![R::zero(); self.coeffs.len() + other.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in other.coeffs.iter().enumerate() {
                out[i + j] = out[i + j].clone() + a.clone() * b.clone();
            }
        }
        Self::new(out)
    }

    /// Multiplies every coefficient by `c`.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        Self::new(self.coeffs.iter().map(|x| x.clone() * c.clone()).collect())
    }

    /// Raises to a non-negative power.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;
        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul(&base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.mul(&base);
            }
        }
        result
    }

    /// Formal derivative.
    #[must_use]
    pub fn derivative(&self) -> Self {
        if self.degree() == 0 {
            return Self::zero();
        }
        Self::new(
            self.coeffs
                .iter()
                .enumerate()
                .skip(1)
                .map(|(i, c)| c.clone() * R::from_i64(i64::try_from(i).unwrap_or(i64::MAX)))
                .collect(),
        )
    }

    /// Largest `k` such that `xᵏ` divides the polynomial (zero for the zero polynomial).
    #[must_use]
    pub fn trailing_zeros(&self) -> usize {
        if self.is_zero() {
            return 0;
        }
        self.coeffs.iter().take_while(|c| c.is_zero()).count()
    }

    /// Divides by `xᵏ`, dropping the lowest `k` coefficients.
    #[must_use]
    pub fn shift_down(&self, k: usize) -> Self {
        Self::new(self.coeffs.iter().skip(k).cloned().collect())
    }

    /// Returns `q` with `self(x) = q(xᵏ)`, if only powers of `xᵏ` occur.
    #[must_use]
    pub fn deflate(&self, k: usize) -> Option<Self> {
        if k < 2 {
            return None;
        }
        let only_powers = self
            .coeffs
            .iter()
            .enumerate()
            .all(|(i, c)| i % k == 0 || c.is_zero());
        only_powers.then(|| Self::new(self.coeffs.iter().step_by(k).cloned().collect()))
    }

    /// Applies `f` to every coefficient.
    #[must_use]
    pub fn map_coeffs<S: Ring>(&self, f: impl Fn(&R) -> S) -> DensePoly<S> {
        DensePoly::new(self.coeffs.iter().map(f).collect())
    }
}

impl<R: Ring> std::fmt::Display for DensePoly<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let terms: Vec<String> = self
            .coeffs
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, c)| !c.is_zero())
            .map(|(i, c)| match i {
                0 => format!("{c}"),
                1 => format!("({c})*x"),
                _ => format!("({c})*x**{i}"),
            })
            .collect();
        write!(f, "{}", terms.join(" + "))
    }
}
