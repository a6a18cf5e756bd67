//! Square-free decomposition.
//!
//! Writes `f = u · f₁ · f₂² · f₃³ ⋯` with every `fᵢ` monic, square-free
//! and pairwise coprime, using Yun's algorithm. Valid in characteristic
//! zero, which covers every coefficient field of the solver.

use radix_rings::Field;

use crate::algorithms::gcd::{make_monic, poly_div_rem, poly_gcd};
use crate::dense::DensePoly;

/// A factor `fᵢ` with its multiplicity `i`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SquarefreeFactor<F: Field> {
    /// The monic square-free factor.
    pub factor: DensePoly<F>,
    /// How often it divides the input.
    pub multiplicity: u32,
}

/// Result of [`squarefree_decomposition`].
#[derive(Clone, Debug)]
pub struct SquarefreeDecomposition<F: Field> {
    /// The leading coefficient of the input.
    pub unit: F,
    /// Non-constant factors by increasing multiplicity.
    pub factors: Vec<SquarefreeFactor<F>>,
}

impl<F: Field> SquarefreeDecomposition<F> {
    /// Multiplies the decomposition back out.
    #[must_use]
    pub fn to_polynomial(&self) -> DensePoly<F> {
        self.factors
            .iter()
            .fold(DensePoly::constant(self.unit.clone()), |acc, sf| {
                acc.mul(&sf.factor.pow(sf.multiplicity))
            })
    }
}

/// Yun's square-free decomposition.
#[must_use]
pub fn squarefree_decomposition<F: Field>(f: &DensePoly<F>) -> SquarefreeDecomposition<F> {
    let unit = f.leading_coeff().clone();
    if f.degree() == 0 {
        return SquarefreeDecomposition {
            unit,
            factors: Vec::new(),
        };
    }

    let f = make_monic(f);
    let df = f.derivative();
    let g = poly_gcd(&f, &df);
    let (mut a, _) = poly_div_rem(&f, &g);
    let (mut b, _) = poly_div_rem(&df, &g);

    let mut factors = Vec::new();
    let mut multiplicity = 1u32;
    while a.degree() > 0 {
        let c = b.sub(&a.derivative());
        let d = poly_gcd(&a, &c);
        if d.degree() > 0 {
            factors.push(SquarefreeFactor {
                factor: d.clone(),
                multiplicity,
            });
        }
        a = poly_div_rem(&a, &d).0;
        b = poly_div_rem(&c, &d).0;
        multiplicity += 1;
    }

    SquarefreeDecomposition { unit, factors }
}
