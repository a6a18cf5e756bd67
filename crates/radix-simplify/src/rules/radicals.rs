//! Rules for square roots.
//!
//! `sqrt` is the principal root, so `(√a)² = a` holds for every `a`;
//! `√(a²) = a` does not and is not a rule.

use egg::{rewrite, Rewrite};

use crate::analysis::ConstantFold;
use crate::language::RadixLang;

/// Returns square-root rewrite rules.
#[must_use]
pub fn rules() -> Vec<Rewrite<RadixLang, ConstantFold>> {
    vec![
        rewrite!("sqrt-sq"; "(* (sqrt ?a) (sqrt ?a))" => "?a"),
        rewrite!("sqrt-pow"; "(^ (sqrt ?a) 2)" => "?a"),
        rewrite!("sqrt-zero"; "(sqrt 0)" => "0"),
        rewrite!("sqrt-one"; "(sqrt 1)" => "1"),
        rewrite!("sqrt-cube"; "(* (sqrt ?a) (* (sqrt ?a) ?b))" => "(* ?a ?b)"),
    ]
}
