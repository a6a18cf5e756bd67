//! Property-based tests: simplification preserves values.

use egg::{Id, RecExpr};
use proptest::prelude::*;
use radix_integers::Rational;

use crate::engine::{Simplifier, SimplifierConfig};
use crate::language::RadixLang;
use crate::parse::parse_expr;
use crate::print::to_infix;

/// Evaluates at `x = 2/3, y = -5`; `None` on division by zero or `sqrt`.
fn eval(expr: &RecExpr<RadixLang>) -> Option<Rational> {
    fn go(nodes: &[RadixLang], id: Id) -> Option<Rational> {
        let v = |i: &Id| go(nodes, *i);
        Some(match &nodes[usize::from(id)] {
            RadixLang::Num(n) => n.clone(),
            RadixLang::Symbol(s) if s.as_str() == "x" => Rational::from_i64(2, 3),
            RadixLang::Symbol(_) => Rational::from_i64(-5, 1),
            RadixLang::Add([a, b]) => &v(a)? + &v(b)?,
            RadixLang::Sub([a, b]) => &v(a)? - &v(b)?,
            RadixLang::Mul([a, b]) => &v(a)? * &v(b)?,
            RadixLang::Div([a, b]) => {
                let d = v(b)?;
                if d.signum() == 0 {
                    return None;
                }
                &v(a)? / &d
            }
            RadixLang::Neg(a) => -v(a)?,
            RadixLang::Pow([a, b]) => {
                let e = i32::try_from(v(b)?.to_integer()?.to_i64()?).ok()?;
                v(a)?.pow(e)
            }
            RadixLang::Sqrt(_) => return None,
        })
    }
    let nodes = expr.as_ref();
    go(nodes, Id::from(nodes.len().checked_sub(1)?))
}

fn infix() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        Just("x".to_string()),
        Just("y".to_string()),
        (0i64..5).prop_map(|n| n.to_string()),
    ];
    leaf.prop_recursive(3, 12, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("({a} + {b})")),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("({a} - {b})")),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("({a} * {b})")),
            inner.prop_map(|a| format!("-({a})")),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn simplify_preserves_value(s in infix()) {
        let simplifier = Simplifier::with_config(SimplifierConfig {
            iter_limit: 5,
            node_limit: 5_000,
            ..SimplifierConfig::default()
        });
        let expr = parse_expr(&s).unwrap();
        let simplified = simplifier.simplify(&expr);
        prop_assert_eq!(eval(&expr), eval(&simplified));
    }

    #[test]
    fn printed_form_evaluates_the_same(s in infix()) {
        let expr = parse_expr(&s).unwrap();
        let reparsed = parse_expr(&to_infix(&expr)).unwrap();
        prop_assert_eq!(eval(&expr), eval(&reparsed));
    }
}
