//! Linear systems over a number field.

use radix_linalg::{DenseMatrix, Echelon};
use radix_poly::{MonomialOrder, SparsePoly};
use radix_rings::Algebraic;
use radix_simplify::Simplifier;
use tracing::{debug, trace};

use crate::error::{NormalizeError, SolveError, SolveResult};
use crate::normalize::expr_from_poly;
use crate::solution::{LinearSolution, LinearValue};

/// Solves equations of total degree at most one in `num_vars` unknowns.
///
/// Each pivot unknown is returned with its value, an affine polynomial in
/// the free unknowns. Free unknowns are left out. Returns `None` if the
/// equations are inconsistent.
///
/// # Panics
///
/// Panics if an equation has a term of degree two or more.
#[must_use]
pub fn solve_lin_sys(
    eqs: &[SparsePoly<Algebraic>],
    num_vars: usize,
) -> Option<Vec<(usize, SparsePoly<Algebraic>)>> {
    let mut matrix = DenseMatrix::zeros(eqs.len(), num_vars + 1);
    for (row, eq) in eqs.iter().enumerate() {
        for (m, c) in eq.terms() {
            assert!(m.total_degree() <= 1, "equation is not linear");
            match (0..num_vars).find(|&i| m.exponent(i) == 1) {
                Some(col) => matrix[(row, col)] = c.clone(),
                None => matrix[(row, num_vars)] = -c.clone(),
            }
        }
    }

    let Echelon { matrix, pivots } = matrix.rref();
    trace!(rank = pivots.len(), unknowns = num_vars, "linear system reduced");
    if pivots.last() == Some(&num_vars) {
        return None;
    }

    let order = MonomialOrder::Lex;
    let free: Vec<usize> = (0..num_vars).filter(|c| !pivots.contains(c)).collect();
    let values = pivots
        .iter()
        .enumerate()
        .map(|(row, &p)| {
            let value = free.iter().fold(
                SparsePoly::constant(matrix[(row, num_vars)].clone(), num_vars, order),
                |acc, &j| {
                    let term = SparsePoly::var(j, num_vars, order).scale(&matrix[(row, j)]);
                    acc.sub(&term)
                },
            );
            (p, value)
        })
        .collect();
    Some(values)
}

/// The equations `matrix · (x₁, …, x_M, -1)ᵀ = 0`.
fn residuals(matrix: &DenseMatrix<Algebraic>, num_vars: usize) -> Vec<SparsePoly<Algebraic>> {
    let order = MonomialOrder::Lex;
    matrix
        .rows()
        .map(|row| {
            let (coeffs, rhs) = row.split_at(num_vars);
            let lhs = coeffs.iter().enumerate().fold(
                SparsePoly::zero(num_vars, order),
                |acc, (j, a)| acc.add(&SparsePoly::var(j, num_vars, order).scale(a)),
            );
            lhs.sub(&SparsePoly::constant(rhs[0].clone(), num_vars, order))
        })
        .collect()
}

/// Solves an augmented N×(M+1) system for `symbols`.
pub(crate) fn solve_augmented(
    matrix: &DenseMatrix<Algebraic>,
    symbols: &[&str],
    simplifier: Option<&Simplifier>,
) -> SolveResult<Option<LinearSolution>> {
    let num_vars = symbols.len();
    if matrix.num_cols() != num_vars + 1 {
        return Err(SolveError::ShapeMismatch {
            columns: matrix.num_cols(),
            symbols: num_vars,
        });
    }
    if let Some(dup) = symbols
        .iter()
        .enumerate()
        .find(|&(i, s)| symbols[..i].contains(s))
        .map(|(_, s)| *s)
    {
        return Err(SolveError::Malformed {
            operation: "solve_linear_system",
            expressions: vec![matrix.to_string()],
            source: NormalizeError::DuplicateGenerator(dup.to_string()),
        });
    }

    let eqs = residuals(matrix, num_vars);
    let Some(values) = solve_lin_sys(&eqs, num_vars) else {
        debug!(rows = matrix.num_rows(), "linear system is inconsistent");
        return Ok(None);
    };

    let names: Vec<String> = symbols.iter().map(|s| (*s).to_string()).collect();
    let entries = values
        .into_iter()
        .map(|(p, poly)| {
            let mut expr = expr_from_poly(&poly, &names);
            if let Some(simplifier) = simplifier {
                expr = simplifier.simplify(&expr);
            }
            (names[p].clone(), LinearValue { poly, expr })
        })
        .collect();
    Ok(Some(LinearSolution::new(entries)))
}
