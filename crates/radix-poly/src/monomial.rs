//! Exponent vectors.
//!
//! Systems handled by the solver rarely have more than a handful of
//! generators, so exponents live inline in a `SmallVec`.

use std::cmp::Ordering;

use smallvec::SmallVec;

/// A monomial `x₀^e₀ · x₁^e₁ ⋯` over a fixed number of variables.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Monomial(SmallVec<[u32; 4]>);

impl Monomial {
    /// The monomial 1.
    #[must_use]
    pub fn one(num_vars: usize) -> Self {
        Self(SmallVec::from_elem(0, num_vars))
    }

    /// The monomial `x_i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= num_vars`.
    #[must_use]
    pub fn var(i: usize, num_vars: usize) -> Self {
        assert!(i < num_vars, "variable index out of range");
        let mut m = Self::one(num_vars);
        m.0[i] = 1;
        m
    }

    /// Builds a monomial from its exponents.
    #[must_use]
    pub fn from_exponents(exps: &[u32]) -> Self {
        Self(SmallVec::from_slice(exps))
    }

    /// Number of variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.0.len()
    }

    /// Exponent of variable `i`.
    #[must_use]
    pub fn exponent(&self, i: usize) -> u32 {
        self.0[i]
    }

    /// All exponents.
    #[must_use]
    pub fn exponents(&self) -> &[u32] {
        &self.0
    }

    /// True for the monomial 1.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.0.iter().all(|&e| e == 0)
    }

    /// Sum of exponents.
    #[must_use]
    pub fn total_degree(&self) -> u32 {
        self.0.iter().sum()
    }

    /// True if only variable `i` may have a nonzero exponent.
    #[must_use]
    pub fn is_pure_in(&self, i: usize) -> bool {
        self.0.iter().enumerate().all(|(j, &e)| j == i || e == 0)
    }

    /// Adds exponents.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        Self(self.0.iter().zip(&other.0).map(|(a, b)| a + b).collect())
    }

    /// `self / other`, if `other` divides `self`.
    #[must_use]
    pub fn div(&self, other: &Self) -> Option<Self> {
        self.0
            .iter()
            .zip(&other.0)
            .map(|(a, b)| a.checked_sub(*b))
            .collect::<Option<SmallVec<_>>>()
            .map(Self)
    }

    /// True if `self` divides `other`.
    #[must_use]
    pub fn divides(&self, other: &Self) -> bool {
        self.0.iter().zip(&other.0).all(|(a, b)| a <= b)
    }

    /// Least common multiple.
    #[must_use]
    pub fn lcm(&self, other: &Self) -> Self {
        Self(self.0.iter().zip(&other.0).map(|(a, b)| *a.max(b)).collect())
    }

    /// True if the two monomials share no variable.
    #[must_use]
    pub fn is_coprime(&self, other: &Self) -> bool {
        self.0.iter().zip(&other.0).all(|(a, b)| *a == 0 || *b == 0)
    }

    /// Sets the exponent of variable `i` to zero.
    #[must_use]
    pub fn without(&self, i: usize) -> Self {
        let mut m = self.clone();
        m.0[i] = 0;
        m
    }

    /// Removes variable `i` from the exponent vector.
    #[must_use]
    pub fn remove(&self, i: usize) -> Self {
        let mut m = self.clone();
        m.0.remove(i);
        m
    }

    /// Renders the monomial with the given variable names.
    #[must_use]
    pub fn format(&self, names: &[&str]) -> String {
        let parts: Vec<String> = self
            .0
            .iter()
            .enumerate()
            .filter(|&(_, &e)| e > 0)
            .map(|(i, &e)| {
                let name = names.get(i).map_or_else(|| format!("x{i}"), ToString::to_string);
                if e == 1 {
                    name
                } else {
                    format!("{name}**{e}")
                }
            })
            .collect();
        if parts.is_empty() {
            "1".to_string()
        } else {
            parts.join("*")
        }
    }
}

/// Lexicographic comparison, first variable most significant.
#[must_use]
pub fn cmp_lex(a: &Monomial, b: &Monomial) -> Ordering {
    a.0.iter().cmp(b.0.iter())
}

/// Total degree first, lexicographic tiebreak.
#[must_use]
pub fn cmp_grlex(a: &Monomial, b: &Monomial) -> Ordering {
    a.total_degree()
        .cmp(&b.total_degree())
        .then_with(|| cmp_lex(a, b))
}

/// Total degree first, then smaller exponent in the last differing variable wins.
#[must_use]
pub fn cmp_grevlex(a: &Monomial, b: &Monomial) -> Ordering {
    a.total_degree().cmp(&b.total_degree()).then_with(|| {
        a.0.iter()
            .rev()
            .zip(b.0.iter().rev())
            .map(|(x, y)| y.cmp(x))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    })
}
