//! Monomial orderings.
//!
//! Elimination needs `Lex`; the graded orders are kept for callers that
//! only want a basis and not a triangular one.

use std::cmp::Ordering;

use crate::monomial::{cmp_grevlex, cmp_grlex, cmp_lex, Monomial};

/// A monomial ordering.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum MonomialOrder {
    /// Lexicographic order with the first generator largest.
    #[default]
    Lex,
    /// Total degree, then lexicographic.
    Grlex,
    /// Total degree, then reverse lexicographic.
    Grevlex,
}

impl MonomialOrder {
    /// Compares two monomials according to this ordering.
    #[must_use]
    pub fn compare(self, a: &Monomial, b: &Monomial) -> Ordering {
        match self {
            MonomialOrder::Lex => cmp_lex(a, b),
            MonomialOrder::Grlex => cmp_grlex(a, b),
            MonomialOrder::Grevlex => cmp_grevlex(a, b),
        }
    }

    /// Short name of the ordering.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            MonomialOrder::Lex => "lex",
            MonomialOrder::Grlex => "grlex",
            MonomialOrder::Grevlex => "grevlex",
        }
    }
}

impl std::fmt::Display for MonomialOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
