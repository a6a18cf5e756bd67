//! The expression language for egg-based simplification.
//!
//! Numbers are exact rationals; `sqrt` is the only function symbol, which
//! is enough to write the coefficients of every solution the solver can
//! produce.

use std::collections::BTreeSet;

use egg::{define_language, Id, RecExpr, Symbol};
use radix_integers::Rational;

define_language! {
    /// The symbolic expression language for radix.
    pub enum RadixLang {
        // Numeric literals
        Num(Rational),
        // Variables
        Symbol(Symbol),

        // Basic arithmetic
        "+" = Add([Id; 2]),
        "-" = Sub([Id; 2]),
        "*" = Mul([Id; 2]),
        "/" = Div([Id; 2]),
        "neg" = Neg(Id),
        "^" = Pow([Id; 2]),

        "sqrt" = Sqrt(Id),
    }
}

impl RadixLang {
    /// Extracts the numeric value if this is a number.
    #[must_use]
    pub fn as_num(&self) -> Option<&Rational> {
        match self {
            RadixLang::Num(n) => Some(n),
            _ => None,
        }
    }
}

/// Names of the symbols occurring in `expr`, sorted and deduplicated.
#[must_use]
pub fn free_symbols(expr: &RecExpr<RadixLang>) -> Vec<String> {
    let names: BTreeSet<String> = expr
        .as_ref()
        .iter()
        .filter_map(|node| match node {
            RadixLang::Symbol(s) => Some(s.as_str().to_string()),
            _ => None,
        })
        .collect();
    names.into_iter().collect()
}
