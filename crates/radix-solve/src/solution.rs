//! Solutions of polynomial and linear systems.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use egg::RecExpr;
use radix_poly::SparsePoly;
use radix_rings::{Algebraic, Ring};
use radix_simplify::{to_infix, RadixLang};

/// A point of a zero-dimensional variety, one value per generator.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Solution {
    gens: Arc<[String]>,
    values: Vec<Algebraic>,
}

impl Solution {
    /// Creates a solution from values in generator order.
    ///
    /// # Panics
    ///
    /// Panics if the number of values differs from the number of generators.
    #[must_use]
    pub fn new(gens: Arc<[String]>, values: Vec<Algebraic>) -> Self {
        assert_eq!(gens.len(), values.len(), "one value per generator");
        Self { gens, values }
    }

    /// The generators, in order.
    #[must_use]
    pub fn generators(&self) -> &[String] {
        &self.gens
    }

    /// The values, in generator order.
    #[must_use]
    pub fn values(&self) -> &[Algebraic] {
        &self.values
    }

    /// The value of the named generator.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Algebraic> {
        let i = self.gens.iter().position(|g| g == name)?;
        self.values.get(i)
    }

    /// Pairs of generator name and value.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Algebraic)> {
        self.gens.iter().map(String::as_str).zip(&self.values)
    }

    /// True if every polynomial vanishes at this point.
    #[must_use]
    pub fn verify(&self, polys: &[SparsePoly<Algebraic>]) -> bool {
        polys.iter().all(|p| p.evaluate(&self.values).is_zero())
    }

    /// Lexicographic comparison of the values under [`Algebraic::canonical_cmp`].
    #[must_use]
    pub fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.values
            .iter()
            .zip(&other.values)
            .map(|(a, b)| a.canonical_cmp(b))
            .find(|ord| ord.is_ne())
            .unwrap_or_else(|| self.values.len().cmp(&other.values.len()))
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        write!(f, "}}")
    }
}

/// All solutions found for a polynomial system.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PolySolutions {
    /// Solutions in canonical order.
    pub solutions: Vec<Solution>,
    /// False if some root could not be expressed in radicals, in which
    /// case solutions may be missing.
    pub complete: bool,
}

impl Default for PolySolutions {
    fn default() -> Self {
        Self::empty()
    }
}

impl PolySolutions {
    /// No solutions, and none missing.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            solutions: Vec::new(),
            complete: true,
        }
    }

    /// Number of solutions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    /// True if no solution was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    /// Iterates over the solutions.
    pub fn iter(&self) -> std::slice::Iter<'_, Solution> {
        self.solutions.iter()
    }

    /// True if every solution satisfies every polynomial.
    #[must_use]
    pub fn verify(&self, polys: &[SparsePoly<Algebraic>]) -> bool {
        self.solutions.iter().all(|s| s.verify(polys))
    }

    pub(crate) fn sort(&mut self) {
        self.solutions.sort_by(Solution::canonical_cmp);
        self.solutions.dedup();
    }
}

impl<'a> IntoIterator for &'a PolySolutions {
    type Item = &'a Solution;
    type IntoIter = std::slice::Iter<'a, Solution>;

    fn into_iter(self) -> Self::IntoIter {
        self.solutions.iter()
    }
}

impl IntoIterator for PolySolutions {
    type Item = Solution;
    type IntoIter = std::vec::IntoIter<Solution>;

    fn into_iter(self) -> Self::IntoIter {
        self.solutions.into_iter()
    }
}

impl fmt::Display for PolySolutions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, s) in self.solutions.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{s}")?;
        }
        write!(f, "]")?;
        if !self.complete {
            write!(f, " (incomplete)")?;
        }
        Ok(())
    }
}

/// The value of one determined unknown of a linear system.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinearValue {
    /// Affine polynomial in the free unknowns.
    pub poly: SparsePoly<Algebraic>,
    /// The same value as an expression, simplified on request.
    pub expr: RecExpr<RadixLang>,
}

impl LinearValue {
    /// The value if it does not depend on any free unknown.
    #[must_use]
    pub fn constant(&self) -> Option<Algebraic> {
        self.poly.ground_value()
    }
}

/// Solution of a linear system: each determined unknown in terms of the
/// free ones. Free unknowns do not appear.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinearSolution {
    entries: Vec<(String, LinearValue)>,
}

impl LinearSolution {
    pub(crate) fn new(entries: Vec<(String, LinearValue)>) -> Self {
        Self { entries }
    }

    /// The value of the named unknown, if it is determined.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&LinearValue> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Number of determined unknowns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if every unknown is free.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Determined unknowns with their values, in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LinearValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }
}

impl fmt::Display for LinearSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}: {}", to_infix(&value.expr))?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use radix_integers::Rational;
    use radix_poly::MonomialOrder;
    use radix_rings::NumberField;

    fn gens() -> Arc<[String]> {
        Arc::from(vec!["x".to_string(), "y".to_string()])
    }

    fn q(n: i64) -> Algebraic {
        Algebraic::from(Rational::from_i64(n, 1))
    }

    #[test]
    fn test_display_and_lookup() {
        let (_, r2) = NumberField::rationals().adjoin_sqrt(&q(2));
        let s = Solution::new(gens(), vec![q(2), -r2]);
        assert_eq!(s.to_string(), "{x: 2, y: -sqrt(2)}");
        assert_eq!(s.get("x"), Some(&q(2)));
        assert_eq!(s.get("z"), None);
    }

    #[test]
    fn test_canonical_sort() {
        let (_, r2) = NumberField::rationals().adjoin_sqrt(&q(2));
        let mut sols = PolySolutions {
            solutions: vec![
                Solution::new(gens(), vec![q(2), r2.clone()]),
                Solution::new(gens(), vec![q(0), q(0)]),
                Solution::new(gens(), vec![q(2), -r2.clone()]),
                Solution::new(gens(), vec![q(0), q(0)]),
            ],
            complete: true,
        };
        sols.sort();
        assert_eq!(
            sols.to_string(),
            "[{x: 0, y: 0}, {x: 2, y: -sqrt(2)}, {x: 2, y: sqrt(2)}]"
        );
    }

    #[test]
    fn test_verify() {
        let order = MonomialOrder::Lex;
        let x = SparsePoly::<Algebraic>::var(0, 2, order);
        let y = SparsePoly::<Algebraic>::var(1, 2, order);
        // x - y - 1
        let f = x.sub(&y).sub(&SparsePoly::one(2, order));
        assert!(Solution::new(gens(), vec![q(3), q(2)]).verify(&[f.clone()]));
        assert!(!Solution::new(gens(), vec![q(3), q(3)]).verify(&[f]));
    }

    #[test]
    fn test_incomplete_display() {
        let sols = PolySolutions {
            solutions: Vec::new(),
            complete: false,
        };
        assert_eq!(sols.to_string(), "[] (incomplete)");
        assert!(PolySolutions::default().complete);
    }
}
