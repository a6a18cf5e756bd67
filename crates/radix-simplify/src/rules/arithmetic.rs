//! Basic algebraic simplification rules.
//!
//! Only identities valid for every value are included; `x/x → 1` and
//! friends are left out because solution values may contain unknowns
//! that are zero.

use egg::{rewrite, Rewrite};

use crate::analysis::ConstantFold;
use crate::language::RadixLang;

/// Returns basic arithmetic rewrite rules.
#[must_use]
pub fn rules() -> Vec<Rewrite<RadixLang, ConstantFold>> {
    vec![
        // Additive identity
        rewrite!("add-zero-l"; "(+ 0 ?a)" => "?a"),
        rewrite!("add-zero-r"; "(+ ?a 0)" => "?a"),
        rewrite!("sub-zero"; "(- ?a 0)" => "?a"),
        rewrite!("sub-self"; "(- ?a ?a)" => "0"),

        // Multiplicative identity
        rewrite!("mul-one-l"; "(* 1 ?a)" => "?a"),
        rewrite!("mul-one-r"; "(* ?a 1)" => "?a"),

        // Multiplicative zero
        rewrite!("mul-zero-l"; "(* 0 ?a)" => "0"),
        rewrite!("mul-zero-r"; "(* ?a 0)" => "0"),

        // Negation
        rewrite!("neg-neg"; "(neg (neg ?a))" => "?a"),
        rewrite!("neg-as-mul"; "(neg ?a)" => "(* -1 ?a)"),
        rewrite!("mul-neg-one"; "(* -1 ?a)" => "(neg ?a)"),

        // Subtraction and addition of a negation
        rewrite!("sub-to-add"; "(- ?a ?b)" => "(+ ?a (neg ?b))"),
        rewrite!("add-neg-to-sub"; "(+ ?a (neg ?b))" => "(- ?a ?b)"),

        // Commutativity
        rewrite!("add-comm"; "(+ ?a ?b)" => "(+ ?b ?a)"),
        rewrite!("mul-comm"; "(* ?a ?b)" => "(* ?b ?a)"),

        // Associativity
        rewrite!("add-assoc-l"; "(+ (+ ?a ?b) ?c)" => "(+ ?a (+ ?b ?c))"),
        rewrite!("add-assoc-r"; "(+ ?a (+ ?b ?c))" => "(+ (+ ?a ?b) ?c)"),
        rewrite!("mul-assoc-l"; "(* (* ?a ?b) ?c)" => "(* ?a (* ?b ?c))"),
        rewrite!("mul-assoc-r"; "(* ?a (* ?b ?c))" => "(* (* ?a ?b) ?c)"),

        // Distributivity
        rewrite!("dist-l"; "(* ?a (+ ?b ?c))" => "(+ (* ?a ?b) (* ?a ?c))"),
        rewrite!("factor-l"; "(+ (* ?a ?b) (* ?a ?c))" => "(* ?a (+ ?b ?c))"),
        rewrite!("factor-one"; "(+ ?a (* ?a ?c))" => "(* ?a (+ 1 ?c))"),

        // Power rules
        rewrite!("pow-zero"; "(^ ?a 0)" => "1"),
        rewrite!("pow-one"; "(^ ?a 1)" => "?a"),
        rewrite!("pow-two"; "(^ ?a 2)" => "(* ?a ?a)"),
        rewrite!("mul-same"; "(* ?a ?a)" => "(^ ?a 2)"),

        // Division by constants
        rewrite!("div-one"; "(/ ?a 1)" => "?a"),
        rewrite!("div-neg"; "(/ (neg ?a) ?b)" => "(neg (/ ?a ?b))"),
        rewrite!("div-mul"; "(/ (* ?a ?b) ?c)" => "(* ?a (/ ?b ?c))"),

        // a + a = 2a
        rewrite!("add-same"; "(+ ?a ?a)" => "(* 2 ?a)"),

        // Negative multiplication
        rewrite!("neg-mul-l"; "(* (neg ?a) ?b)" => "(neg (* ?a ?b))"),
        rewrite!("neg-mul-both"; "(* (neg ?a) (neg ?b))" => "(* ?a ?b)"),
    ]
}
