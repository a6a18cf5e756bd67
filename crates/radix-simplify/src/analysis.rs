//! Constant folding over exact rationals.

use egg::{merge_option, Analysis, DidMerge, EGraph, Id};
use radix_integers::Rational;

use crate::language::RadixLang;

/// Largest exponent folded by `^`.
const MAX_FOLDED_EXPONENT: i64 = 64;

/// E-class analysis tracking the rational value of a class, if known.
#[derive(Default, Clone, Copy, Debug)]
pub struct ConstantFold;

impl Analysis<RadixLang> for ConstantFold {
    type Data = Option<Rational>;

    fn make(egraph: &EGraph<RadixLang, Self>, enode: &RadixLang) -> Self::Data {
        let x = |i: &Id| egraph[*i].data.as_ref();
        match enode {
            RadixLang::Num(n) => Some(n.clone()),
            RadixLang::Symbol(_) => None,
            RadixLang::Add([a, b]) => Some(x(a)? + x(b)?),
            RadixLang::Sub([a, b]) => Some(x(a)? - x(b)?),
            RadixLang::Mul([a, b]) => Some(x(a)? * x(b)?),
            RadixLang::Div([a, b]) => {
                let d = x(b)?;
                if d.signum() == 0 {
                    return None;
                }
                Some(x(a)? / d)
            }
            RadixLang::Neg(a) => Some(-(x(a)?.clone())),
            RadixLang::Pow([a, b]) => {
                let base = x(a)?;
                let exp = x(b)?.to_integer()?.to_i64()?;
                if exp.abs() > MAX_FOLDED_EXPONENT || (exp < 0 && base.signum() == 0) {
                    return None;
                }
                Some(base.pow(i32::try_from(exp).ok()?))
            }
            RadixLang::Sqrt(a) => {
                let v = x(a)?;
                if v.is_negative() {
                    return None;
                }
                v.perfect_sqrt()
            }
        }
    }

    fn merge(&mut self, to: &mut Self::Data, from: Self::Data) -> DidMerge {
        merge_option(to, from, |a, b| {
            debug_assert_eq!(*a, b, "merged classes with different constants");
            DidMerge(false, false)
        })
    }

    fn modify(egraph: &mut EGraph<RadixLang, Self>, id: Id) {
        if let Some(c) = egraph[id].data.clone() {
            let added = egraph.add(RadixLang::Num(c));
            egraph.union(id, added);
        }
    }
}
