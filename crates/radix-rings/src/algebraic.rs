//! Towers of quadratic extensions.
//!
//! Solutions of zero-dimensional systems reached through quadratic
//! formulas live in fields `Q(√d₁)(√d₂)…(√dₖ)`, where each radicand is
//! an element of the previous level that is not a square there. An
//! element of level `k` is stored as `a + b·√dₖ` with `a, b` from level
//! `k - 1`, so representation inside one tower is unique and zero tests
//! are structural.
//!
//! Elements carry a handle to the extension they use, which lets values
//! of lower levels mix freely with values of higher levels of the same
//! tower. Mixing two different extensions at the same level is a logic
//! error and panics.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::sync::Arc;

use radix_integers::{Integer, Rational};

use crate::rationals::Q;
use crate::traits::{Field, Ring};

/// One step `P(√d)` of a tower, where `d ∈ P` is not a square in `P`.
#[derive(Debug)]
pub struct QuadraticExtension {
    parent: NumberField,
    radicand: Algebraic,
    depth: usize,
    real: bool,
}

impl QuadraticExtension {
    /// The field being extended.
    #[must_use]
    pub fn parent(&self) -> &NumberField {
        &self.parent
    }

    /// The element whose square root is adjoined.
    #[must_use]
    pub fn radicand(&self) -> &Algebraic {
        &self.radicand
    }

    /// Number of quadratic steps from Q up to and including this one.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// True if the whole tower up to here embeds in the reals with
    /// every adjoined root taken positive.
    #[must_use]
    pub fn is_real(&self) -> bool {
        self.real
    }

    fn cmp_structural(&self, other: &Self) -> Ordering {
        if std::ptr::eq(self, other) {
            return Ordering::Equal;
        }
        self.depth
            .cmp(&other.depth)
            .then_with(|| self.radicand.structural_cmp(&other.radicand))
            .then_with(|| match (&self.parent.top, &other.parent.top) {
                (Some(a), Some(b)) => a.cmp_structural(b),
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Less,
                (Some(_), None) => Ordering::Greater,
            })
    }
}

impl PartialEq for QuadraticExtension {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
            || (self.depth == other.depth
                && self.radicand == other.radicand
                && self.parent == other.parent)
    }
}

impl Eq for QuadraticExtension {}

impl Hash for QuadraticExtension {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.depth.hash(state);
        self.radicand.hash(state);
    }
}

/// A number field given as a (possibly empty) tower of quadratic steps over Q.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NumberField {
    top: Option<Arc<QuadraticExtension>>,
}

impl NumberField {
    /// The rational numbers.
    #[must_use]
    pub fn rationals() -> Self {
        Self { top: None }
    }

    /// The last extension step, if any.
    #[must_use]
    pub fn top(&self) -> Option<&Arc<QuadraticExtension>> {
        self.top.as_ref()
    }

    /// Number of quadratic steps above Q.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.top.as_ref().map_or(0, |ext| ext.depth)
    }

    /// Degree over Q.
    #[must_use]
    pub fn degree(&self) -> usize {
        1 << self.depth()
    }

    /// True if the tower has a real embedding with positive roots.
    #[must_use]
    pub fn is_real(&self) -> bool {
        self.top.as_ref().map_or(true, |ext| ext.real)
    }

    /// Extensions from the top of the tower downwards.
    pub fn extensions(&self) -> impl Iterator<Item = &Arc<QuadraticExtension>> {
        std::iter::successors(self.top.as_ref(), |ext| ext.parent.top.as_ref())
    }

    /// True if `x` is an element of this field.
    #[must_use]
    pub fn contains(&self, x: &Algebraic) -> bool {
        match x.extension() {
            None => true,
            Some(ext) => self
                .extensions()
                .find(|own| own.depth == ext.depth)
                .is_some_and(|own| own == ext),
        }
    }

    /// True if every step of `other` is a step of this tower.
    #[must_use]
    pub fn contains_field(&self, other: &NumberField) -> bool {
        match &other.top {
            None => true,
            Some(ext) => self
                .extensions()
                .find(|own| own.depth == ext.depth)
                .is_some_and(|own| own == ext),
        }
    }

    /// The larger of two fields from the same tower.
    ///
    /// # Panics
    ///
    /// Panics if neither field contains the other.
    #[must_use]
    pub fn join(&self, other: &NumberField) -> NumberField {
        if self.contains_field(other) {
            self.clone()
        } else {
            assert!(other.contains_field(self), "number fields from different towers");
            other.clone()
        }
    }

    /// A square root of `x` inside this field.
    ///
    /// In a real tower the non-negative root is returned.
    #[must_use]
    pub fn sqrt(&self, x: &Algebraic) -> Option<Algebraic> {
        let root = self.sqrt_any(x)?;
        Some(if root.sign() == Some(Ordering::Less) { -root } else { root })
    }

    fn sqrt_any(&self, x: &Algebraic) -> Option<Algebraic> {
        if x.is_zero() {
            return Some(Algebraic::zero());
        }
        let Some(ext) = &self.top else {
            return x.as_rational()?.perfect_sqrt().map(Algebraic::from);
        };
        let (a, b) = x.split_at(ext);
        let parent = &ext.parent;
        if b.is_zero() {
            // √a is either in the parent or a parent multiple of √d.
            if let Some(r) = parent.sqrt_any(&a) {
                return Some(r);
            }
            let s = parent.sqrt_any(&(&a / &ext.radicand))?;
            return Some(Algebraic::surd(ext, Algebraic::zero(), s));
        }
        // (p + q√d)² = a + b√d  ⇔  p² = (a ± √(a² - b²d)) / 2, q = b / 2p
        let norm = &(&a * &a) - &(&(&b * &b) * &ext.radicand);
        let r = parent.sqrt_any(&norm)?;
        let half = Algebraic::from(Rational::from_i64(1, 2));
        for t in [&a + &r, &a - &r] {
            let t = &t * &half;
            if t.is_zero() {
                continue;
            }
            if let Some(p) = parent.sqrt_any(&t) {
                let q = &(&b * &half) / &p;
                return Some(Algebraic::surd(ext, p, q));
            }
        }
        None
    }

    /// Returns a field containing `√x` together with that root.
    ///
    /// The field is `self` when `x` is already a square; otherwise a new
    /// step is adjoined. The square part of the radicand's rational content
    /// is pulled out first, so `√(29/4)` becomes `√29 / 2` and `√(4·√2)`
    /// becomes `2·√(√2)`.
    #[must_use]
    pub fn adjoin_sqrt(&self, x: &Algebraic) -> (NumberField, Algebraic) {
        if let Some(root) = self.sqrt(x) {
            return (self.clone(), root);
        }
        let (scale, radicand) = match x.as_rational() {
            Some(q) => {
                let (c, k) = q.square_free_split();
                (Algebraic::from(c), Algebraic::from(k))
            }
            None => {
                let (c, _) = x.rational_content().square_free_split();
                let c = Algebraic::from(c);
                let radicand = x / &(&c * &c);
                (c, radicand)
            }
        };
        let real = self.is_real() && radicand.sign() == Some(Ordering::Greater);
        let ext = Arc::new(QuadraticExtension {
            parent: self.clone(),
            radicand,
            depth: self.depth() + 1,
            real,
        });
        let root = Algebraic::surd(&ext, Algebraic::zero(), scale);
        (NumberField { top: Some(ext) }, root)
    }

    /// Maps `x`, possibly from another tower, into an extension of this field.
    ///
    /// Each step of `x`'s tower is rebuilt on top of `self` with
    /// [`NumberField::adjoin_sqrt`]. In real towers the positive root is
    /// chosen, so the image has the same real value as `x`.
    #[must_use]
    pub fn embed(&self, x: &Algebraic) -> (NumberField, Algebraic) {
        if self.contains(x) {
            return (self.clone(), x.clone());
        }
        let Algebraic::Surd(s) = x else {
            return (self.clone(), x.clone());
        };
        let (field, base) = self.embed(&s.base);
        let (field, coeff) = field.embed(&s.coeff);
        let (field, radicand) = field.embed(&s.ext.radicand);
        let (field, mut root) = field.adjoin_sqrt(&radicand);
        if s.ext.real && root.sign() == Some(Ordering::Less) {
            root = -root;
        }
        let value = &base + &(&coeff * &root);
        (field, value)
    }
}

impl fmt::Display for NumberField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q")?;
        let mut steps: Vec<_> = self.extensions().collect();
        steps.reverse();
        for ext in steps {
            write!(f, "(sqrt({}))", ext.radicand)?;
        }
        Ok(())
    }
}

/// The irrational part of an [`Algebraic`]: `base + coeff·√radicand`.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Surd {
    ext: Arc<QuadraticExtension>,
    base: Algebraic,
    coeff: Algebraic,
}

impl Surd {
    /// The extension whose root this value uses.
    #[must_use]
    pub fn extension(&self) -> &Arc<QuadraticExtension> {
        &self.ext
    }

    /// The part from the parent field.
    #[must_use]
    pub fn base(&self) -> &Algebraic {
        &self.base
    }

    /// The (nonzero) coefficient of the adjoined root.
    #[must_use]
    pub fn coeff(&self) -> &Algebraic {
        &self.coeff
    }
}

/// An element of a quadratic tower over Q.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Algebraic {
    /// A rational number.
    Rational(Q),
    /// `base + coeff·√d` with nonzero `coeff`.
    Surd(Arc<Surd>),
}

impl Algebraic {
    fn surd(ext: &Arc<QuadraticExtension>, base: Algebraic, coeff: Algebraic) -> Algebraic {
        if coeff.is_zero() {
            base
        } else {
            Algebraic::Surd(Arc::new(Surd {
                ext: Arc::clone(ext),
                base,
                coeff,
            }))
        }
    }

    /// The positive gcd of the rational numbers this element is built from.
    ///
    /// Zero only for zero. Dividing by the content leaves an element whose
    /// rational leaves are coprime integers.
    #[must_use]
    pub fn rational_content(&self) -> Rational {
        match self {
            Algebraic::Rational(q) => q.0.abs(),
            Algebraic::Surd(s) => {
                rational_gcd(&s.base.rational_content(), &s.coeff.rational_content())
            }
        }
    }

    /// The rational value, if this element is rational.
    #[must_use]
    pub fn as_rational(&self) -> Option<&Rational> {
        match self {
            Algebraic::Rational(q) => Some(&q.0),
            Algebraic::Surd(_) => None,
        }
    }

    /// The highest extension this value actually uses.
    #[must_use]
    pub fn extension(&self) -> Option<&Arc<QuadraticExtension>> {
        match self {
            Algebraic::Rational(_) => None,
            Algebraic::Surd(s) => Some(&s.ext),
        }
    }

    /// Depth of [`Algebraic::extension`], zero for rationals.
    #[must_use]
    pub fn level(&self) -> usize {
        self.extension().map_or(0, |ext| ext.depth)
    }

    /// The smallest field of this value's tower that contains it.
    #[must_use]
    pub fn field(&self) -> NumberField {
        NumberField {
            top: self.extension().cloned(),
        }
    }

    /// True if this value is real under the positive-root embedding.
    #[must_use]
    pub fn is_real(&self) -> bool {
        self.extension().map_or(true, |ext| ext.real)
    }

    /// Writes `self = a + b·√d` over `ext`.
    ///
    /// # Panics
    ///
    /// Panics if `self` uses a different extension of the same depth.
    #[must_use]
    pub fn split_at(&self, ext: &Arc<QuadraticExtension>) -> (Algebraic, Algebraic) {
        match self {
            Algebraic::Surd(s) if s.ext.depth == ext.depth => {
                assert!(
                    Arc::ptr_eq(&s.ext, ext) || s.ext == *ext,
                    "elements from incompatible number fields"
                );
                (s.base.clone(), s.coeff.clone())
            }
            _ => (self.clone(), Algebraic::zero()),
        }
    }

    /// The conjugate `a - b·√d` over `ext`.
    #[must_use]
    pub fn conjugate_over(&self, ext: &Arc<QuadraticExtension>) -> Algebraic {
        let (a, b) = self.split_at(ext);
        Algebraic::surd(ext, a, -b)
    }

    /// Sign of a real value, `None` if the value is not known to be real.
    #[must_use]
    pub fn sign(&self) -> Option<Ordering> {
        match self {
            Algebraic::Rational(q) => Some(q.signum().cmp(&0)),
            Algebraic::Surd(s) => {
                if !s.ext.real {
                    return None;
                }
                let sa = s.base.sign()?;
                let sb = s.coeff.sign()?;
                if sa == sb || sa == Ordering::Equal {
                    return Some(sb);
                }
                // Opposite signs: the larger of a² and b²d wins.
                let a2 = &s.base * &s.base;
                let b2d = &(&s.coeff * &s.coeff) * &s.ext.radicand;
                match (&a2 - &b2d).sign()? {
                    Ordering::Less => Some(sb),
                    _ => Some(sa),
                }
            }
        }
    }

    /// Total, deterministic order used to sort solutions.
    ///
    /// Real values are ordered by their exact value, comparing across
    /// towers through [`NumberField::embed`], and precede non-real ones.
    /// Non-real values are ordered structurally.
    #[must_use]
    pub fn canonical_cmp(&self, other: &Self) -> Ordering {
        if self == other {
            return Ordering::Equal;
        }
        match (self.is_real(), other.is_real()) {
            (true, true) => {
                let (_, lifted) = self.field().embed(other);
                match (self - &lifted).sign() {
                    Some(Ordering::Equal) | None => self.structural_cmp(other),
                    Some(ord) => ord,
                }
            }
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.structural_cmp(other),
        }
    }

    /// Order on representations, ignoring numeric value.
    #[must_use]
    pub fn structural_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Algebraic::Rational(a), Algebraic::Rational(b)) => a.cmp(b),
            (Algebraic::Rational(_), Algebraic::Surd(_)) => Ordering::Less,
            (Algebraic::Surd(_), Algebraic::Rational(_)) => Ordering::Greater,
            (Algebraic::Surd(a), Algebraic::Surd(b)) => a
                .ext
                .cmp_structural(&b.ext)
                .then_with(|| a.base.structural_cmp(&b.base))
                .then_with(|| a.coeff.structural_cmp(&b.coeff)),
        }
    }

    fn add_ref(&self, rhs: &Self) -> Self {
        match top_extension(self, rhs) {
            None => Algebraic::Rational(rational(self) + rational(rhs)),
            Some(ext) => {
                let (a0, a1) = self.split_at(&ext);
                let (b0, b1) = rhs.split_at(&ext);
                Algebraic::surd(&ext, &a0 + &b0, &a1 + &b1)
            }
        }
    }

    fn mul_ref(&self, rhs: &Self) -> Self {
        match top_extension(self, rhs) {
            None => Algebraic::Rational(rational(self) * rational(rhs)),
            Some(ext) => {
                let (a0, a1) = self.split_at(&ext);
                let (b0, b1) = rhs.split_at(&ext);
                let base = &(&a0 * &b0) + &(&(&a1 * &b1) * &ext.radicand);
                let coeff = &(&a0 * &b1) + &(&a1 * &b0);
                Algebraic::surd(&ext, base, coeff)
            }
        }
    }

    fn neg_ref(&self) -> Self {
        match self {
            Algebraic::Rational(q) => Algebraic::Rational(-q.clone()),
            Algebraic::Surd(s) => Algebraic::surd(&s.ext, s.base.neg_ref(), s.coeff.neg_ref()),
        }
    }
}

fn rational(x: &Algebraic) -> Q {
    match x {
        Algebraic::Rational(q) => q.clone(),
        Algebraic::Surd(_) => unreachable!("rational arithmetic on an irrational value"),
    }
}

fn rational_gcd(a: &Rational, b: &Rational) -> Rational {
    let (an, ad) = (a.numerator(), a.denominator());
    let (bn, bd) = (b.numerator(), b.denominator());
    Rational::new((&an * &bd).gcd(&(&bn * &ad)), &ad * &bd)
}

fn top_extension(a: &Algebraic, b: &Algebraic) -> Option<Arc<QuadraticExtension>> {
    match (a.extension(), b.extension()) {
        (None, None) => None,
        (Some(e), None) | (None, Some(e)) => Some(Arc::clone(e)),
        (Some(ea), Some(eb)) => Some(Arc::clone(if ea.depth >= eb.depth { ea } else { eb })),
    }
}

impl Ring for Algebraic {
    fn zero() -> Self {
        Algebraic::Rational(Q::zero())
    }

    fn one() -> Self {
        Algebraic::Rational(Q::one())
    }

    fn is_zero(&self) -> bool {
        matches!(self, Algebraic::Rational(q) if q.is_zero())
    }

    fn is_one(&self) -> bool {
        matches!(self, Algebraic::Rational(q) if q.is_one())
    }

    fn from_i64(n: i64) -> Self {
        Algebraic::Rational(Q::from(n))
    }
}

impl Field for Algebraic {
    fn inv(&self) -> Option<Self> {
        match self {
            Algebraic::Rational(q) => q.inv().map(Algebraic::Rational),
            Algebraic::Surd(s) => {
                // (a + b√d)⁻¹ = (a - b√d) / (a² - b²d)
                let norm = &(&s.base * &s.base) - &(&(&s.coeff * &s.coeff) * &s.ext.radicand);
                let scale = norm.inv()?;
                Some(Algebraic::surd(
                    &s.ext,
                    &s.base * &scale,
                    -(&s.coeff * &scale),
                ))
            }
        }
    }
}

macro_rules! algebraic_binop {
    ($trait:ident, $method:ident, |$a:ident, $b:ident| $body:expr) => {
        impl $trait<&Algebraic> for &Algebraic {
            type Output = Algebraic;

            fn $method(self, rhs: &Algebraic) -> Algebraic {
                let ($a, $b) = (self, rhs);
                $body
            }
        }

        impl $trait for Algebraic {
            type Output = Algebraic;

            fn $method(self, rhs: Algebraic) -> Algebraic {
                $trait::$method(&self, &rhs)
            }
        }

        impl $trait<&Algebraic> for Algebraic {
            type Output = Algebraic;

            fn $method(self, rhs: &Algebraic) -> Algebraic {
                $trait::$method(&self, rhs)
            }
        }
    };
}

algebraic_binop!(Add, add, |a, b| a.add_ref(b));
algebraic_binop!(Sub, sub, |a, b| a.add_ref(&b.neg_ref()));
algebraic_binop!(Mul, mul, |a, b| a.mul_ref(b));
algebraic_binop!(Div, div, |a, b| a.mul_ref(
    &b.inv().expect("division by zero")
));

impl Neg for Algebraic {
    type Output = Algebraic;

    fn neg(self) -> Algebraic {
        self.neg_ref()
    }
}

impl Neg for &Algebraic {
    type Output = Algebraic;

    fn neg(self) -> Algebraic {
        self.neg_ref()
    }
}

impl From<Q> for Algebraic {
    fn from(q: Q) -> Self {
        Algebraic::Rational(q)
    }
}

impl From<Rational> for Algebraic {
    fn from(q: Rational) -> Self {
        Algebraic::Rational(Q(q))
    }
}

impl From<Integer> for Algebraic {
    fn from(n: Integer) -> Self {
        Algebraic::Rational(Q::from_integer(n))
    }
}

impl From<i64> for Algebraic {
    fn from(n: i64) -> Self {
        Algebraic::Rational(Q::from(n))
    }
}

impl fmt::Debug for Algebraic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Algebraic({self})")
    }
}

impl fmt::Display for Algebraic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algebraic::Rational(q) => write!(f, "{q}"),
            Algebraic::Surd(s) => {
                let term = root_term(&s.coeff, &format!("sqrt({})", s.ext.radicand));
                if s.base.is_zero() {
                    f.write_str(&term)
                } else if let Some(rest) = term.strip_prefix('-') {
                    write!(f, "{} - {rest}", s.base)
                } else {
                    write!(f, "{} + {term}", s.base)
                }
            }
        }
    }
}

/// Renders `coeff·root` as `3*sqrt(2)/2`, `-sqrt(29)/2` or `(1 + sqrt(2))*sqrt(3)`.
///
/// A coefficient is parenthesized only when it is a sum.
fn root_term(coeff: &Algebraic, root: &str) -> String {
    let Some(q) = coeff.as_rational() else {
        return match coeff {
            Algebraic::Surd(s) if !s.base.is_zero() => format!("({coeff})*{root}"),
            _ => format!("{coeff}*{root}"),
        };
    };
    let num = q.numerator();
    let den = q.denominator();
    let mut out = String::new();
    if num.is_negative() {
        out.push('-');
    }
    let num = num.abs();
    if !num_traits::One::is_one(&num) {
        out.push_str(&format!("{num}*"));
    }
    out.push_str(root);
    if !num_traits::One::is_one(&den) {
        out.push_str(&format!("/{den}"));
    }
    out
}
