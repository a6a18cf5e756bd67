//! Conversion between expressions and polynomials over a generator list.
//!
//! Expressions are converted bottom-up over the nodes of the `RecExpr`,
//! which egg stores children-first. Constants `sqrt(c)` extend the
//! coefficient field as they are met, so every coefficient of the result
//! lives in one tower.

use std::collections::BTreeSet;

use egg::{Id, RecExpr, Symbol};
use radix_integers::Rational;
use radix_poly::{MonomialOrder, SparsePoly};
use radix_rings::{Algebraic, Field, NumberField, Ring};
use radix_simplify::{free_symbols, RadixLang};

use crate::error::NormalizeError;

/// Polynomials, their generators and the field holding every coefficient.
pub type Normalized = (Vec<SparsePoly<Algebraic>>, Vec<String>, NumberField);

/// Converts expressions to lex-ordered polynomials in `gens`.
///
/// With no generators given they are inferred from the free symbols of
/// all expressions, sorted by name.
///
/// # Errors
///
/// Returns a [`NormalizeError`] if an expression is not a polynomial in
/// the generators with coefficients in a quadratic tower over Q.
pub fn polys_from_exprs(
    exprs: &[RecExpr<RadixLang>],
    gens: &[&str],
) -> Result<Normalized, NormalizeError> {
    let gens = generators(exprs, gens)?;
    let mut converter = Converter {
        gens: &gens,
        field: NumberField::rationals(),
    };
    let polys = exprs
        .iter()
        .map(|e| converter.convert(e))
        .collect::<Result<Vec<_>, _>>()?;
    let field = converter.field;
    Ok((polys, gens, field))
}

fn generators(
    exprs: &[RecExpr<RadixLang>],
    gens: &[&str],
) -> Result<Vec<String>, NormalizeError> {
    if gens.is_empty() {
        let inferred: BTreeSet<String> = exprs.iter().flat_map(free_symbols).collect();
        if inferred.is_empty() {
            return Err(NormalizeError::NoGenerators);
        }
        return Ok(inferred.into_iter().collect());
    }
    let mut seen = BTreeSet::new();
    for g in gens {
        if !seen.insert(*g) {
            return Err(NormalizeError::DuplicateGenerator((*g).to_string()));
        }
    }
    Ok(gens.iter().map(|g| (*g).to_string()).collect())
}

struct Converter<'a> {
    gens: &'a [String],
    field: NumberField,
}

impl Converter<'_> {
    fn num_vars(&self) -> usize {
        self.gens.len()
    }

    fn constant(&self, c: Algebraic) -> SparsePoly<Algebraic> {
        SparsePoly::constant(c, self.num_vars(), MonomialOrder::Lex)
    }

    fn render(&self, p: &SparsePoly<Algebraic>) -> String {
        let names: Vec<&str> = self.gens.iter().map(String::as_str).collect();
        p.format(&names)
    }

    fn convert(
        &mut self,
        expr: &RecExpr<RadixLang>,
    ) -> Result<SparsePoly<Algebraic>, NormalizeError> {
        let mut done: Vec<SparsePoly<Algebraic>> = Vec::with_capacity(expr.as_ref().len());
        for node in expr.as_ref() {
            let poly = self.node(node, &done)?;
            done.push(poly);
        }
        Ok(done
            .pop()
            .unwrap_or_else(|| SparsePoly::zero(self.num_vars(), MonomialOrder::Lex)))
    }

    fn node(
        &mut self,
        node: &RadixLang,
        done: &[SparsePoly<Algebraic>],
    ) -> Result<SparsePoly<Algebraic>, NormalizeError> {
        let at = |id: Id| &done[usize::from(id)];
        Ok(match node {
            RadixLang::Num(n) => self.constant(Algebraic::from(n.clone())),
            RadixLang::Symbol(s) => {
                let i = self
                    .gens
                    .iter()
                    .position(|g| g == s.as_str())
                    .ok_or_else(|| NormalizeError::UnknownSymbol(s.as_str().to_string()))?;
                SparsePoly::var(i, self.num_vars(), MonomialOrder::Lex)
            }
            RadixLang::Add([a, b]) => at(*a).add(at(*b)),
            RadixLang::Sub([a, b]) => at(*a).sub(at(*b)),
            RadixLang::Mul([a, b]) => at(*a).mul(at(*b)),
            RadixLang::Neg(a) => at(*a).neg(),
            RadixLang::Div([a, b]) => {
                let divisor = at(*b)
                    .ground_value()
                    .ok_or_else(|| NormalizeError::NonConstantDivisor(self.render(at(*b))))?;
                let inv = divisor.inv().ok_or(NormalizeError::DivisionByZero)?;
                at(*a).scale(&inv)
            }
            RadixLang::Pow([a, b]) => {
                let bad = || NormalizeError::BadExponent(self.render(at(*b)));
                let exp = at(*b).ground_value().ok_or_else(bad)?;
                let exp = match &exp {
                    Algebraic::Rational(q) => q.0.to_integer().and_then(|n| n.to_i64()),
                    Algebraic::Surd(_) => None,
                }
                .and_then(|n| u32::try_from(n).ok())
                .ok_or_else(bad)?;
                at(*a).pow(exp)
            }
            RadixLang::Sqrt(a) => {
                let radicand = at(*a)
                    .ground_value()
                    .ok_or_else(|| NormalizeError::NonConstantRadical(self.render(at(*a))))?;
                let (field, root) = self.field.adjoin_sqrt(&radicand);
                self.field = field;
                self.constant(root)
            }
        })
    }
}

/// The expression form of a coefficient, printed by [`radix_simplify::to_infix`]
/// exactly as the coefficient displays: `7/2 - sqrt(29)/2`.
#[must_use]
pub fn expr_from_algebraic(x: &Algebraic) -> RecExpr<RadixLang> {
    let mut expr = RecExpr::default();
    push_algebraic(x, &mut expr);
    expr
}

/// The expression form of a polynomial in `gens`.
///
/// Terms after the first whose coefficient displays with a leading minus
/// are subtracted.
///
/// # Panics
///
/// Panics if `gens` is shorter than the polynomial's variable list.
#[must_use]
pub fn expr_from_poly(p: &SparsePoly<Algebraic>, gens: &[String]) -> RecExpr<RadixLang> {
    assert!(gens.len() >= p.num_vars(), "missing generator names");
    let mut expr = RecExpr::default();
    let mut sum: Option<Id> = None;
    for (m, c) in p.terms() {
        let subtract = sum.is_some() && leads_with_minus(c);
        let c = if subtract { -c } else { c.clone() };
        let term = push_term(&c, m.exponents(), gens, &mut expr);
        sum = Some(match sum {
            Some(acc) if subtract => expr.add(RadixLang::Sub([acc, term])),
            Some(acc) => expr.add(RadixLang::Add([acc, term])),
            None => term,
        });
    }
    if sum.is_none() {
        expr.add(RadixLang::Num(Rational::default()));
    }
    expr
}

fn push_term(
    c: &Algebraic,
    exponents: &[u32],
    gens: &[String],
    expr: &mut RecExpr<RadixLang>,
) -> Id {
    let constant = exponents.iter().all(|&e| e == 0);
    let negate = !constant && (-c).is_one();
    let mut term = if constant || !(c.is_one() || negate) {
        Some(push_algebraic(c, expr))
    } else {
        None
    };
    for (i, &e) in exponents.iter().enumerate() {
        if e == 0 {
            continue;
        }
        let mut factor = expr.add(RadixLang::Symbol(Symbol::from(gens[i].as_str())));
        if e > 1 {
            let power = expr.add(RadixLang::Num(Rational::from(i64::from(e))));
            factor = expr.add(RadixLang::Pow([factor, power]));
        }
        term = Some(match term {
            Some(acc) => expr.add(RadixLang::Mul([acc, factor])),
            None => factor,
        });
    }
    let term = term.unwrap_or_else(|| push_algebraic(c, expr));
    if negate {
        expr.add(RadixLang::Neg(term))
    } else {
        term
    }
}

/// Whether `x` displays with a leading minus sign.
fn leads_with_minus(x: &Algebraic) -> bool {
    match x {
        Algebraic::Rational(q) => q.0.is_negative(),
        Algebraic::Surd(s) => s.base().is_zero() && leads_with_minus(s.coeff()),
    }
}

fn push_algebraic(x: &Algebraic, expr: &mut RecExpr<RadixLang>) -> Id {
    let s = match x {
        Algebraic::Rational(q) => return expr.add(RadixLang::Num(q.0.clone())),
        Algebraic::Surd(s) => s,
    };
    let radicand = s.extension().radicand();
    if s.base().is_zero() {
        return push_root_term(s.coeff(), radicand, expr);
    }
    let base = push_algebraic(s.base(), expr);
    if leads_with_minus(s.coeff()) {
        let term = push_root_term(&-s.coeff(), radicand, expr);
        expr.add(RadixLang::Sub([base, term]))
    } else {
        let term = push_root_term(s.coeff(), radicand, expr);
        expr.add(RadixLang::Add([base, term]))
    }
}

/// `coeff*sqrt(radicand)`, with a rational coefficient `n/m` written
/// `n*sqrt(radicand)/m`.
fn push_root_term(coeff: &Algebraic, radicand: &Algebraic, expr: &mut RecExpr<RadixLang>) -> Id {
    let inner = push_algebraic(radicand, expr);
    let root = expr.add(RadixLang::Sqrt(inner));
    let Some(q) = coeff.as_rational() else {
        let coeff = push_algebraic(coeff, expr);
        return expr.add(RadixLang::Mul([coeff, root]));
    };
    let num = Rational::from(q.numerator());
    let den = Rational::from(q.denominator());
    let one = Rational::from(1);
    let term = if num == one {
        root
    } else if num == -&one {
        expr.add(RadixLang::Neg(root))
    } else {
        let num = expr.add(RadixLang::Num(num));
        expr.add(RadixLang::Mul([num, root]))
    };
    if den == one {
        term
    } else {
        let den = expr.add(RadixLang::Num(den));
        expr.add(RadixLang::Div([term, den]))
    }
}
