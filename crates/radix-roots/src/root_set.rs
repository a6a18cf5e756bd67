//! Root sets returned by the finder.

use std::cmp::Ordering;
use std::fmt;

use radix_rings::{Algebraic, NumberField};

/// A single root with its multiplicity.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Root {
    /// The exact value.
    pub value: Algebraic,
    /// Multiplicity as a root of the input polynomial.
    pub multiplicity: u32,
    /// A field containing `value`; an extension of the input field.
    pub field: NumberField,
}

/// The roots found for one polynomial.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RootSet {
    /// Distinct roots in canonical order.
    pub roots: Vec<Root>,
    /// False if some roots could not be expressed and are missing.
    pub complete: bool,
}

impl RootSet {
    /// An empty, complete root set.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            roots: Vec::new(),
            complete: true,
        }
    }

    /// Number of distinct roots found.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// True if no root was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Iterates over the roots.
    pub fn iter(&self) -> std::slice::Iter<'_, Root> {
        self.roots.iter()
    }

    /// Root values without multiplicities.
    #[must_use]
    pub fn values(&self) -> Vec<Algebraic> {
        self.roots.iter().map(|r| r.value.clone()).collect()
    }

    pub(crate) fn sort(&mut self) {
        self.roots.sort_by(|a, b| {
            a.value
                .canonical_cmp(&b.value)
                .then_with(|| a.multiplicity.cmp(&b.multiplicity))
        });
        self.roots
            .dedup_by(|a, b| a.value.canonical_cmp(&b.value) == Ordering::Equal);
    }
}

impl<'a> IntoIterator for &'a RootSet {
    type Item = &'a Root;
    type IntoIter = std::slice::Iter<'a, Root>;

    fn into_iter(self) -> Self::IntoIter {
        self.roots.iter()
    }
}

impl fmt::Display for RootSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, r) in self.roots.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", r.value, r.multiplicity)?;
        }
        write!(f, "}}")?;
        if !self.complete {
            write!(f, " (incomplete)")?;
        }
        Ok(())
    }
}
