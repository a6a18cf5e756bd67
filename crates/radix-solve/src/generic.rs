//! Solving zero-dimensional systems by recursive lex elimination.
//!
//! A reduced lex Gröbner basis of a zero-dimensional ideal contains exactly
//! one polynomial in the last generator alone. Each of its roots is
//! substituted into the rest of the basis, which leaves a system in one
//! generator fewer over the field of that root. Partial solutions come back
//! up the recursion by value and are extended with the root.

use std::sync::Arc;

use radix_poly::SparsePoly;
use radix_rings::{Algebraic, NumberField};
use tracing::trace;

use crate::error::{SolveError, SolveResult};
use crate::solution::{PolySolutions, Solution};
use crate::solver::Solver;

/// Points found on one branch, values in generator order.
struct Branch {
    points: Vec<Vec<Algebraic>>,
    complete: bool,
}

impl Branch {
    fn empty() -> Self {
        Self {
            points: Vec::new(),
            complete: true,
        }
    }
}

/// Solves `polys`, whose coefficients lie in `field`, for `gens`.
///
/// # Errors
///
/// Returns [`SolveError::NotZeroDimensional`] if at some depth the reduced
/// basis does not contain exactly one polynomial univariate in the last
/// generator, or the last generator is the only one constrained.
pub fn solve_generic(
    polys: &[SparsePoly<Algebraic>],
    gens: &Arc<[String]>,
    field: &NumberField,
    solver: &Solver,
) -> SolveResult<PolySolutions> {
    let branch = solve_reduced(polys, gens, field, solver)?;
    let mut result = PolySolutions {
        solutions: branch
            .points
            .into_iter()
            .map(|values| Solution::new(Arc::clone(gens), values))
            .collect(),
        complete: branch.complete,
    };
    result.sort();
    Ok(result)
}

fn solve_reduced(
    system: &[SparsePoly<Algebraic>],
    gens: &[String],
    field: &NumberField,
    solver: &Solver,
) -> SolveResult<Branch> {
    let basis = solver.groebner(system);
    if basis.len() == 1 && basis[0].is_ground() {
        trace!(depth = gens.len(), "branch is inconsistent");
        return Ok(Branch::empty());
    }

    let not_zero_dimensional = |univariate: usize| SolveError::NotZeroDimensional {
        generators: gens.to_vec(),
        univariate,
    };
    let Some(last) = gens.len().checked_sub(1) else {
        return Err(not_zero_dimensional(0));
    };
    let univariate: Vec<&SparsePoly<Algebraic>> =
        basis.iter().filter(|p| p.is_univariate_in(last)).collect();
    let [f] = univariate.as_slice() else {
        return Err(not_zero_dimensional(univariate.len()));
    };
    let dense = f
        .to_univariate(last)
        .expect("filtered for polynomials in the last generator");
    let roots = solver.roots(&dense, field);
    trace!(
        generator = %gens[last],
        degree = dense.degree(),
        roots = roots.len(),
        "eliminated"
    );

    let mut branch = Branch {
        points: Vec::new(),
        complete: roots.complete,
    };
    if basis.len() == 1 {
        if last > 0 {
            return Err(not_zero_dimensional(1));
        }
        branch.points = roots.iter().map(|r| vec![r.value.clone()]).collect();
        return Ok(branch);
    }

    for root in roots.iter() {
        let reduced: Vec<SparsePoly<Algebraic>> = basis
            .iter()
            .filter(|b| !b.is_univariate_in(last))
            .filter_map(|b| b.substitute(last, &root.value).remove_var(last))
            .filter(|b| !b.is_zero())
            .collect();
        let sub = solve_reduced(&reduced, &gens[..last], &root.field, solver)?;
        branch.complete &= sub.complete;
        branch.points.extend(sub.points.into_iter().map(|mut point| {
            point.push(root.value.clone());
            point
        }));
    }
    Ok(branch)
}
