//! Simplification rules organized by category.

pub mod arithmetic;
pub mod radicals;

use egg::Rewrite;

use crate::analysis::ConstantFold;
use crate::language::RadixLang;

/// Collects all simplification rules.
#[must_use]
pub fn all_rules() -> Vec<Rewrite<RadixLang, ConstantFold>> {
    let mut rules = Vec::new();
    rules.extend(arithmetic::rules());
    rules.extend(radicals::rules());
    rules
}
