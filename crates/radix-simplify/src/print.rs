//! Infix printing in the style accepted by [`crate::parse_expr`].

use egg::{Id, RecExpr};
use radix_integers::Rational;

use crate::language::RadixLang;

const SUM: u8 = 1;
const PRODUCT: u8 = 2;
const UNARY: u8 = 3;
const POWER: u8 = 4;
const ATOM: u8 = 5;

fn num_prec(n: &Rational) -> u8 {
    if n.is_negative() {
        UNARY
    } else if n.is_integer() {
        ATOM
    } else {
        PRODUCT
    }
}

struct Printer<'a> {
    nodes: &'a [RadixLang],
}

impl Printer<'_> {
    fn node(&self, id: Id) -> &RadixLang {
        &self.nodes[usize::from(id)]
    }

    fn prec(&self, id: Id) -> u8 {
        match self.node(id) {
            RadixLang::Num(n) => num_prec(n),
            RadixLang::Symbol(_) | RadixLang::Sqrt(_) => ATOM,
            RadixLang::Add(_) | RadixLang::Sub(_) => SUM,
            RadixLang::Mul(_) | RadixLang::Div(_) => PRODUCT,
            RadixLang::Neg(_) => UNARY,
            RadixLang::Pow(_) => POWER,
        }
    }

    /// Prints `id`, parenthesized if it binds looser than `min`.
    fn wrapped(&self, id: Id, min: u8) -> String {
        let s = self.print(id);
        if self.prec(id) < min {
            format!("({s})")
        } else {
            s
        }
    }

    fn negative_num(&self, id: Id) -> Option<&Rational> {
        match self.node(id) {
            RadixLang::Num(n) if n.is_negative() => Some(n),
            _ => None,
        }
    }

    /// Renders `lhs + rhs`, folding a negative right side into `-`.
    fn sum(&self, lhs: Id, rhs: Id, negate: bool) -> String {
        let left = self.wrapped(lhs, SUM);
        let (minus, right) = match (self.node(rhs), negate) {
            (RadixLang::Neg(inner), false) => (true, self.wrapped(*inner, PRODUCT)),
            (RadixLang::Num(n), false) if n.is_negative() => (true, format_num(&-n)),
            (RadixLang::Mul([c, rest]), false) if self.negative_num(*c).is_some() => {
                let c = self.negative_num(*c).map(|n| -n).unwrap_or_default();
                let rest = self.wrapped(*rest, POWER);
                if is_one(&c) {
                    (true, rest)
                } else {
                    (true, format!("{}*{rest}", format_num(&c)))
                }
            }
            (_, negate) => (negate, self.wrapped(rhs, PRODUCT)),
        };
        let op = if minus { '-' } else { '+' };
        format!("{left} {op} {right}")
    }

    fn print(&self, id: Id) -> String {
        match self.node(id) {
            RadixLang::Num(n) => format_num(n),
            RadixLang::Symbol(s) => s.as_str().to_string(),
            RadixLang::Add([a, b]) => self.sum(*a, *b, false),
            RadixLang::Sub([a, b]) => self.sum(*a, *b, true),
            RadixLang::Mul([a, b]) => {
                format!("{}*{}", self.wrapped(*a, PRODUCT), self.wrapped(*b, POWER))
            }
            RadixLang::Div([a, b]) => {
                format!("{}/{}", self.wrapped(*a, PRODUCT), self.wrapped(*b, POWER))
            }
            RadixLang::Neg(a) => format!("-{}", self.wrapped(*a, UNARY)),
            RadixLang::Pow([a, b]) => {
                format!("{}**{}", self.wrapped(*a, ATOM), self.wrapped(*b, POWER))
            }
            RadixLang::Sqrt(a) => format!("sqrt({})", self.print(*a)),
        }
    }
}

fn is_one(n: &Rational) -> bool {
    *n == Rational::from_i64(1, 1)
}

fn format_num(n: &Rational) -> String {
    n.to_string()
}

/// Renders an expression in infix form, e.g. `x*y - 2*y`.
///
/// Returns an empty string for an empty expression.
#[must_use]
pub fn to_infix(expr: &RecExpr<RadixLang>) -> String {
    let nodes = expr.as_ref();
    if nodes.is_empty() {
        return String::new();
    }
    let printer = Printer { nodes };
    printer.print(Id::from(nodes.len() - 1))
}
