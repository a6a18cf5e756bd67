//! The root finder.

use radix_poly::algorithms::{make_monic, poly_div_rem, squarefree_decomposition};
use radix_poly::DensePoly;
use radix_rings::{Algebraic, NumberField, Ring};
use tracing::{trace, warn};

use crate::quadratic::{linear_root, quadratic_roots};
use crate::rational::rational_roots;
use crate::root_set::{Root, RootSet};
use crate::split::split_over_q;

/// Configuration for [`roots_with_config`].
#[derive(Clone, Debug)]
pub struct RootConfig {
    /// Largest trial divisor used by the rational root test.
    pub divisor_limit: u64,
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            divisor_limit: 1_000_000,
        }
    }
}

/// Roots of `p`, whose coefficients lie in `field`, with the default config.
#[must_use]
pub fn roots(p: &DensePoly<Algebraic>, field: &NumberField) -> RootSet {
    roots_with_config(p, field, &RootConfig::default())
}

/// Roots of `p`, whose coefficients lie in `field`.
///
/// The zero polynomial has every value as a root and yields an empty,
/// incomplete set. Nonzero constants have no roots.
#[must_use]
pub fn roots_with_config(
    p: &DensePoly<Algebraic>,
    field: &NumberField,
    config: &RootConfig,
) -> RootSet {
    if p.is_zero() {
        warn!("root set of the zero polynomial requested");
        return RootSet {
            roots: Vec::new(),
            complete: false,
        };
    }

    let mut set = RootSet::empty();
    let decomposition = squarefree_decomposition(p);
    for sf in &decomposition.factors {
        let mut found = Vec::new();
        let complete = squarefree_roots(&sf.factor, field, config, &mut found);
        if !complete {
            warn!(
                degree = sf.factor.degree(),
                found = found.len(),
                "factor has roots without a radical form"
            );
            set.complete = false;
        }
        set.roots.extend(found.into_iter().map(|(value, field)| Root {
            value,
            multiplicity: sf.multiplicity,
            field,
        }));
    }
    set.sort();
    trace!(degree = p.degree(), roots = set.len(), complete = set.complete, "roots");
    set
}

/// Pushes the roots of a square-free `f` onto `out`; false if some are missing.
fn squarefree_roots(
    f: &DensePoly<Algebraic>,
    field: &NumberField,
    config: &RootConfig,
    out: &mut Vec<(Algebraic, NumberField)>,
) -> bool {
    let mut f = make_monic(f);
    let k = f.trailing_zeros();
    if k > 0 {
        out.push((Algebraic::zero(), field.clone()));
        f = f.shift_down(k);
    }

    match f.degree() {
        0 => return true,
        1 => {
            out.push((linear_root(&f), field.clone()));
            return true;
        }
        2 => {
            let (ext, [a, b]) = quadratic_roots(&f, field);
            out.push((a, ext.clone()));
            out.push((b, ext));
            return true;
        }
        _ => {}
    }

    if let Some(rs) = rational_roots(&f, field, config.divisor_limit) {
        for r in rs {
            let r = Algebraic::from(r);
            let linear = DensePoly::new(vec![-&r, Algebraic::one()]);
            f = poly_div_rem(&f, &linear).0;
            out.push((r, field.clone()));
        }
        if f.degree() <= 2 {
            return squarefree_roots(&f, field, config, out);
        }
    }

    if let Some(parts) = split_over_q(&f, field) {
        trace!(degree = f.degree(), parts = parts.len(), "solving factors over Q");
        let mut complete = true;
        for part in &parts {
            complete &= squarefree_roots(part, field, config, out);
        }
        return complete;
    }

    // f(x) = g(x²): every root u of g gives ±√u.
    if let Some(g) = f.deflate(2) {
        trace!(degree = f.degree(), "solving through x² substitution");
        let mut inner = Vec::new();
        let complete = squarefree_roots(&g, field, config, &mut inner);
        for (u, u_field) in inner {
            let (ext, s) = u_field.adjoin_sqrt(&u);
            out.push((-&s, ext.clone()));
            out.push((s, ext));
        }
        return complete;
    }

    false
}
