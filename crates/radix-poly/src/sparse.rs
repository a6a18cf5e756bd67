//! Sparse multivariate polynomials.
//!
//! Terms are kept sorted by the polynomial's monomial order, leading
//! term first, with like terms merged and zero coefficients dropped.
//! Two polynomials are therefore equal exactly when their term lists
//! are.

use std::fmt;

use radix_rings::{Field, Ring};

use crate::dense::DensePoly;
use crate::monomial::Monomial;
use crate::ordering::MonomialOrder;

/// A sparse multivariate polynomial.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct SparsePoly<R: Ring> {
    terms: Vec<(Monomial, R)>,
    num_vars: usize,
    order: MonomialOrder,
}

impl<R: Ring> SparsePoly<R> {
    /// Creates a polynomial from terms in any order.
    #[must_use]
    pub fn new(terms: Vec<(Monomial, R)>, num_vars: usize, order: MonomialOrder) -> Self {
        debug_assert!(terms.iter().all(|(m, _)| m.num_vars() == num_vars));
        let mut poly = Self {
            terms,
            num_vars,
            order,
        };
        poly.normalize();
        poly
    }

    /// The zero polynomial.
    #[must_use]
    pub fn zero(num_vars: usize, order: MonomialOrder) -> Self {
        Self {
            terms: Vec::new(),
            num_vars,
            order,
        }
    }

    /// The constant polynomial 1.
    #[must_use]
    pub fn one(num_vars: usize, order: MonomialOrder) -> Self {
        Self::constant(R::one(), num_vars, order)
    }

    /// A constant polynomial.
    #[must_use]
    pub fn constant(c: R, num_vars: usize, order: MonomialOrder) -> Self {
        if c.is_zero() {
            Self::zero(num_vars, order)
        } else {
            Self {
                terms: vec![(Monomial::one(num_vars), c)],
                num_vars,
                order,
            }
        }
    }

    /// The generator `x_i`.
    #[must_use]
    pub fn var(i: usize, num_vars: usize, order: MonomialOrder) -> Self {
        Self {
            terms: vec![(Monomial::var(i, num_vars), R::one())],
            num_vars,
            order,
        }
    }

    /// True for the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of nonzero terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of generators.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// The monomial order terms are sorted by.
    #[must_use]
    pub fn order(&self) -> MonomialOrder {
        self.order
    }

    /// Terms, leading term first.
    #[must_use]
    pub fn terms(&self) -> &[(Monomial, R)] {
        &self.terms
    }

    /// The leading monomial.
    #[must_use]
    pub fn leading_monomial(&self) -> Option<&Monomial> {
        self.terms.first().map(|(m, _)| m)
    }

    /// The leading coefficient.
    #[must_use]
    pub fn leading_coeff(&self) -> Option<&R> {
        self.terms.first().map(|(_, c)| c)
    }

    /// The leading term.
    #[must_use]
    pub fn leading_term(&self) -> Option<&(Monomial, R)> {
        self.terms.first()
    }

    /// Everything but the leading term.
    #[must_use]
    pub fn tail(&self) -> Self {
        Self {
            terms: self.terms.iter().skip(1).cloned().collect(),
            num_vars: self.num_vars,
            order: self.order,
        }
    }

    fn normalize(&mut self) {
        let order = self.order;
        self.terms.sort_by(|a, b| order.compare(&b.0, &a.0));
        let mut merged: Vec<(Monomial, R)> = Vec::with_capacity(self.terms.len());
        for (m, c) in self.terms.drain(..) {
            match merged.last_mut() {
                Some((last, acc)) if *last == m => *acc = acc.clone() + c,
                _ => merged.push((m, c)),
            }
        }
        merged.retain(|(_, c)| !c.is_zero());
        self.terms = merged;
    }

    /// Re-sorts the terms under another monomial order.
    #[must_use]
    pub fn with_order(&self, order: MonomialOrder) -> Self {
        Self::new(self.terms.clone(), self.num_vars, order)
    }

    /// Sum.
    ///
    /// # Panics
    ///
    /// Panics if the operands disagree on variables or order.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        self.check_compatible(other);
        let mut terms = self.terms.clone();
        terms.extend(other.terms.iter().cloned());
        Self::new(terms, self.num_vars, self.order)
    }

    /// Negation.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            terms: self.terms.iter().map(|(m, c)| (m.clone(), -c.clone())).collect(),
            num_vars: self.num_vars,
            order: self.order,
        }
    }

    /// Difference.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Product (schoolbook).
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        self.check_compatible(other);
        if self.is_zero() || other.is_zero() {
            return Self::zero(self.num_vars, self.order);
        }
        let mut terms = Vec::with_capacity(self.len() * other.len());
        for (m1, c1) in &self.terms {
            for (m2, c2) in &other.terms {
                terms.push((m1.mul(m2), c1.clone() * c2.clone()));
            }
        }
        Self::new(terms, self.num_vars, self.order)
    }

    /// Multiplies every coefficient by `c`.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        if c.is_zero() {
            return Self::zero(self.num_vars, self.order);
        }
        Self {
            terms: self
                .terms
                .iter()
                .map(|(m, x)| (m.clone(), x.clone() * c.clone()))
                .collect(),
            num_vars: self.num_vars,
            order: self.order,
        }
    }

    /// Multiplies by the term `c·m`.
    #[must_use]
    pub fn mul_term(&self, m: &Monomial, c: &R) -> Self {
        if c.is_zero() {
            return Self::zero(self.num_vars, self.order);
        }
        // Multiplying by a monomial preserves any admissible order.
        Self {
            terms: self
                .terms
                .iter()
                .map(|(m2, c2)| (m.mul(m2), c2.clone() * c.clone()))
                .collect(),
            num_vars: self.num_vars,
            order: self.order,
        }
    }

    /// Raises to a non-negative power.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        let mut result = Self::one(self.num_vars, self.order);
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

    /// Total degree, zero for constants and the zero polynomial.
    #[must_use]
    pub fn total_degree(&self) -> u32 {
        self.terms
            .iter()
            .map(|(m, _)| m.total_degree())
            .max()
            .unwrap_or(0)
    }

    /// Degree in generator `i`.
    #[must_use]
    pub fn degree_in(&self, i: usize) -> u32 {
        self.terms.iter().map(|(m, _)| m.exponent(i)).max().unwrap_or(0)
    }

    /// Degree in every generator, in generator order.
    #[must_use]
    pub fn degree_list(&self) -> Vec<u32> {
        (0..self.num_vars).map(|i| self.degree_in(i)).collect()
    }

    /// True for constants, including zero.
    #[must_use]
    pub fn is_ground(&self) -> bool {
        self.terms.iter().all(|(m, _)| m.is_one())
    }

    /// The value of a ground polynomial.
    #[must_use]
    pub fn ground_value(&self) -> Option<R> {
        if !self.is_ground() {
            return None;
        }
        Some(self.leading_coeff().cloned().unwrap_or_else(R::zero))
    }

    /// True if no generator other than `i` occurs.
    #[must_use]
    pub fn is_univariate_in(&self, i: usize) -> bool {
        self.terms.iter().all(|(m, _)| m.is_pure_in(i))
    }

    /// True if generator `i` occurs in some term.
    #[must_use]
    pub fn uses_var(&self, i: usize) -> bool {
        self.terms.iter().any(|(m, _)| m.exponent(i) > 0)
    }

    /// Substitutes the constant `value` for generator `i`.
    ///
    /// The generator stays in the variable list with degree zero; use
    /// [`SparsePoly::remove_var`] to drop it.
    #[must_use]
    pub fn substitute(&self, i: usize, value: &R) -> Self {
        let degree = self.degree_in(i) as usize;
        let mut powers = Vec::with_capacity(degree + 1);
        powers.push(R::one());
        for k in 1..=degree {
            let next = powers[k - 1].clone() * value.clone();
            powers.push(next);
        }
        let terms = self
            .terms
            .iter()
            .map(|(m, c)| (m.without(i), c.clone() * powers[m.exponent(i) as usize].clone()))
            .collect();
        Self::new(terms, self.num_vars, self.order)
    }

    /// Drops generator `i`, which must not occur.
    ///
    /// Returns `None` if the generator is still used.
    #[must_use]
    pub fn remove_var(&self, i: usize) -> Option<Self> {
        if self.uses_var(i) {
            return None;
        }
        let terms = self.terms.iter().map(|(m, c)| (m.remove(i), c.clone())).collect();
        Some(Self::new(terms, self.num_vars - 1, self.order))
    }

    /// Evaluates at a point given in generator order.
    ///
    /// # Panics
    ///
    /// Panics if `point` has the wrong length.
    #[must_use]
    pub fn evaluate(&self, point: &[R]) -> R {
        assert_eq!(point.len(), self.num_vars, "point has wrong dimension");
        self.terms.iter().fold(R::zero(), |acc, (m, c)| {
            let term = m
                .exponents()
                .iter()
                .zip(point)
                .fold(c.clone(), |t, (&e, x)| t * x.pow(e));
            acc + term
        })
    }

    /// Converts to a dense polynomial in generator `i`.
    ///
    /// Returns `None` if another generator occurs.
    #[must_use]
    pub fn to_univariate(&self, i: usize) -> Option<DensePoly<R>> {
        if !self.is_univariate_in(i) {
            return None;
        }
        let mut coeffs = vec![R::zero(); self.degree_in(i) as usize + 1];
        for (m, c) in &self.terms {
            coeffs[m.exponent(i) as usize] = c.clone();
        }
        Some(DensePoly::new(coeffs))
    }

    /// Embeds a dense polynomial as a polynomial in generator `i`.
    #[must_use]
    pub fn from_univariate(
        p: &DensePoly<R>,
        i: usize,
        num_vars: usize,
        order: MonomialOrder,
    ) -> Self {
        let terms = p
            .coeffs()
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_zero())
            .map(|(k, c)| {
                let mut exps = vec![0u32; num_vars];
                exps[i] = u32::try_from(k).unwrap_or(u32::MAX);
                (Monomial::from_exponents(&exps), c.clone())
            })
            .collect();
        Self::new(terms, num_vars, order)
    }

    /// Applies `f` to every coefficient.
    #[must_use]
    pub fn map_coeffs<S: Ring>(&self, f: impl Fn(&R) -> S) -> SparsePoly<S> {
        SparsePoly::new(
            self.terms.iter().map(|(m, c)| (m.clone(), f(c))).collect(),
            self.num_vars,
            self.order,
        )
    }

    /// Renders the polynomial with the given generator names.
    #[must_use]
    pub fn format(&self, names: &[&str]) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        let mut out = String::new();
        for (k, (m, c)) in self.terms.iter().enumerate() {
            let mut coeff = c.to_string();
            let compound = coeff.contains(' ');
            let negative = !compound && coeff.starts_with('-');
            if negative {
                coeff.remove(0);
            }
            if compound {
                coeff = format!("({coeff})");
            }
            match (k, negative) {
                (0, true) => out.push('-'),
                (0, false) => {}
                (_, true) => out.push_str(" - "),
                (_, false) => out.push_str(" + "),
            }
            if m.is_one() {
                out.push_str(&coeff);
            } else if coeff == "1" {
                out.push_str(&m.format(names));
            } else {
                out.push_str(&format!("{coeff}*{}", m.format(names)));
            }
        }
        out
    }

    fn check_compatible(&self, other: &Self) {
        assert_eq!(self.num_vars, other.num_vars, "polynomials over different generators");
        assert_eq!(self.order, other.order, "polynomials under different orders");
    }
}

impl<F: Field> SparsePoly<F> {
    /// Divides by the leading coefficient.
    #[must_use]
    pub fn monic(&self) -> Self {
        match self.leading_coeff().and_then(Field::inv) {
            Some(inv) => self.scale(&inv),
            None => self.clone(),
        }
    }
}

impl<R: Ring> fmt::Display for SparsePoly<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = (0..self.num_vars).map(|i| format!("x{i}")).collect();
        let names: Vec<&str> = names.iter().map(String::as_str).collect();
        f.write_str(&self.format(&names))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use radix_rings::Q;

    fn q(n: i64) -> Q {
        Q::from(n)
    }

    fn xy() -> (SparsePoly<Q>, SparsePoly<Q>) {
        let order = MonomialOrder::Lex;
        (SparsePoly::var(0, 2, order), SparsePoly::var(1, 2, order))
    }

    #[test]
    fn test_merge_and_cancel() {
        let (x, y) = xy();
        let p = x.add(&y).sub(&x);
        assert_eq!(p, y);
        assert!(x.sub(&x).is_zero());
    }

    #[test]
    fn test_degrees() {
        let (x, y) = xy();
        // x*y - 2*y
        let p = x.mul(&y).sub(&y.scale(&q(2)));
        assert_eq!(p.degree_list(), vec![1, 1]);
        assert_eq!(p.total_degree(), 2);
        assert!(!p.is_univariate_in(1));
        assert!(y.pow(3).is_univariate_in(1));
        assert_eq!(p.format(&["x", "y"]), "x*y - 2*y");
    }

    #[test]
    fn test_substitute_and_remove() {
        let (x, y) = xy();
        // 2*y**2 - x**2 at y = 3 gives 18 - x**2
        let p = y.pow(2).scale(&q(2)).sub(&x.pow(2));
        let s = p.substitute(1, &q(3));
        assert_eq!(s.degree_list(), vec![2, 0]);
        let trimmed = s.remove_var(1).unwrap();
        assert_eq!(trimmed.num_vars(), 1);
        assert_eq!(trimmed.format(&["x"]), "-x**2 + 18");
        assert_eq!(p.remove_var(1), None);
    }

    #[test]
    fn test_evaluate() {
        let (x, y) = xy();
        let p = x.mul(&y).sub(&y.scale(&q(2)));
        assert_eq!(p.evaluate(&[q(2), q(5)]), q(0));
        assert_eq!(p.evaluate(&[q(3), q(5)]), q(5));
    }

    #[test]
    fn test_univariate_round_trip() {
        let (_, y) = xy();
        let p = y.pow(2).sub(&SparsePoly::constant(q(2), 2, MonomialOrder::Lex));
        let dense = p.to_univariate(1).unwrap();
        assert_eq!(dense.coeffs(), &[q(-2), q(0), q(1)]);
        assert_eq!(SparsePoly::from_univariate(&dense, 1, 2, MonomialOrder::Lex), p);
    }

    #[test]
    fn test_monic() {
        let (x, _) = xy();
        let p = x.scale(&q(4)).add(&SparsePoly::constant(q(2), 2, MonomialOrder::Lex));
        assert_eq!(p.monic().leading_coeff(), Some(&q(1)));
        assert_eq!(p.monic().ground_value(), None);
        assert_eq!(SparsePoly::constant(q(5), 2, MonomialOrder::Lex).ground_value(), Some(q(5)));
    }
}
