//! The solver front end: normalization, dispatch and shared state.

use std::sync::Arc;

use egg::RecExpr;
use radix_groebner::{groebner_basis, GroebnerConfig};
use radix_linalg::DenseMatrix;
use radix_poly::{DensePoly, MonomialOrder, SparsePoly};
use radix_rings::{Algebraic, NumberField};
use radix_roots::{roots_with_config, RootSet};
use radix_simplify::{parse_expr, to_infix, RadixLang, Simplifier};
use tracing::{debug, warn};

use crate::biquadratic::{is_biquadratic, solve_biquadratic, FastPath};
use crate::cache::SolveCache;
use crate::error::{NormalizeError, SolveError, SolveResult};
use crate::generic::solve_generic;
use crate::linear::solve_augmented;
use crate::normalize::polys_from_exprs;
use crate::options::SolveOptions;
use crate::solution::{LinearSolution, PolySolutions};

/// Solver for polynomial and linear systems.
///
/// A solver is cheap to clone; clones share the cache, if any.
#[derive(Clone, Debug)]
pub struct Solver {
    options: SolveOptions,
    groebner: GroebnerConfig,
    simplifier: Simplifier,
    cache: Option<Arc<SolveCache>>,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// A solver with default options and no cache.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(SolveOptions::default())
    }

    /// A solver with the given options and no cache.
    #[must_use]
    pub fn with_options(options: SolveOptions) -> Self {
        let groebner = GroebnerConfig {
            order: MonomialOrder::Lex,
            ..options.groebner.clone()
        };
        let simplifier = Simplifier::with_config(options.simplifier.clone());
        Self {
            options,
            groebner,
            simplifier,
            cache: None,
        }
    }

    /// Memoizes bases and root sets in `cache`.
    #[must_use]
    pub fn with_cache(mut self, cache: Arc<SolveCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// The active options.
    #[must_use]
    pub fn options(&self) -> &SolveOptions {
        &self.options
    }

    /// The injected cache, if any.
    #[must_use]
    pub fn cache(&self) -> Option<&Arc<SolveCache>> {
        self.cache.as_ref()
    }

    pub(crate) fn groebner(
        &self,
        polys: &[SparsePoly<Algebraic>],
    ) -> Arc<Vec<SparsePoly<Algebraic>>> {
        let compute = || groebner_basis(polys, &self.groebner);
        match &self.cache {
            Some(cache) => cache.groebner_basis(polys, compute),
            None => Arc::new(compute()),
        }
    }

    pub(crate) fn roots(&self, p: &DensePoly<Algebraic>, field: &NumberField) -> Arc<RootSet> {
        let config = &self.options.roots;
        let compute = || roots_with_config(p, field, config);
        match &self.cache {
            Some(cache) => cache.roots(p, field, config.divisor_limit, compute),
            None => Arc::new(compute()),
        }
    }

    /// Solves a system of polynomial equations `exprs = 0` for `gens`.
    ///
    /// With no generators given they are the free symbols, sorted by name.
    /// The order of the generators fixes the elimination order: the last
    /// one is eliminated first.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Malformed`] if an expression is not a
    /// polynomial in the generators and [`SolveError::NotZeroDimensional`]
    /// if the system has infinitely many solutions.
    pub fn solve_poly_system(
        &self,
        exprs: &[RecExpr<RadixLang>],
        gens: &[&str],
    ) -> SolveResult<PolySolutions> {
        let (polys, gens, field) =
            polys_from_exprs(exprs, gens).map_err(|source| SolveError::Malformed {
                operation: "solve_poly_system",
                expressions: exprs.iter().map(to_infix).collect(),
                source,
            })?;
        self.solve_polys(&polys, &gens, &field)
    }

    /// Like [`Solver::solve_poly_system`] for equations in infix form,
    /// such as `"x*y - 2*y"`.
    ///
    /// # Errors
    ///
    /// As [`Solver::solve_poly_system`]; parse errors are reported as
    /// [`SolveError::Malformed`].
    pub fn solve_poly_system_str(
        &self,
        exprs: &[&str],
        gens: &[&str],
    ) -> SolveResult<PolySolutions> {
        let malformed = |source: NormalizeError| SolveError::Malformed {
            operation: "solve_poly_system",
            expressions: exprs.iter().map(|s| (*s).to_string()).collect(),
            source,
        };
        let parsed = exprs
            .iter()
            .map(|s| parse_expr(s))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| malformed(e.into()))?;
        let (polys, gens, field) = polys_from_exprs(&parsed, gens).map_err(malformed)?;
        self.solve_polys(&polys, &gens, &field)
    }

    /// Solves polynomials already normalized over `gens`, with coefficients
    /// in `field`.
    ///
    /// Two equations in two generators, each of degree at most two in each
    /// generator, go through the biquadratic fast path first; everything
    /// else, and fast-path misses, through generic elimination.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::NotZeroDimensional`] if the system has
    /// infinitely many solutions.
    ///
    /// # Panics
    ///
    /// Panics if a polynomial is not over `gens.len()` generators.
    pub fn solve_polys(
        &self,
        polys: &[SparsePoly<Algebraic>],
        gens: &[String],
        field: &NumberField,
    ) -> SolveResult<PolySolutions> {
        assert!(
            polys.iter().all(|p| p.num_vars() == gens.len()),
            "polynomials over the wrong number of generators"
        );
        let gens: Arc<[String]> = Arc::from(gens);

        let result = if is_biquadratic(polys, gens.len()) {
            match solve_biquadratic(&polys[0], &polys[1], &gens, field, self) {
                FastPath::Applicable(result) => {
                    debug!(solutions = result.len(), "biquadratic fast path");
                    result
                }
                FastPath::NotApplicable => {
                    debug!("biquadratic fast path not applicable, eliminating");
                    solve_generic(polys, &gens, field, self)?
                }
            }
        } else {
            debug!(equations = polys.len(), generators = gens.len(), "generic elimination");
            solve_generic(polys, &gens, field, self)?
        };

        if !result.complete {
            warn!(
                found = result.len(),
                "some roots have no radical form, solutions may be missing"
            );
        }
        Ok(result)
    }

    /// Solves the augmented system `matrix` (N×(M+1), last column the
    /// constants) for the M `symbols`.
    ///
    /// Returns `None` if the system is inconsistent. Determined unknowns
    /// are given in terms of the free ones, which are left out; a system
    /// without constraints gives the empty solution.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::ShapeMismatch`] if the matrix does not have
    /// `symbols.len() + 1` columns, and [`SolveError::Malformed`] if a
    /// symbol is repeated.
    pub fn solve_linear_system(
        &self,
        matrix: &DenseMatrix<Algebraic>,
        symbols: &[&str],
    ) -> SolveResult<Option<LinearSolution>> {
        let simplifier = self.options.simplify.then_some(&self.simplifier);
        solve_augmented(matrix, symbols, simplifier)
    }
}

/// [`Solver::solve_poly_system`] with a default solver.
///
/// # Errors
///
/// See [`Solver::solve_poly_system`].
pub fn solve_poly_system(
    exprs: &[RecExpr<RadixLang>],
    gens: &[&str],
) -> SolveResult<PolySolutions> {
    Solver::new().solve_poly_system(exprs, gens)
}

/// [`Solver::solve_poly_system_str`] with a default solver.
///
/// # Errors
///
/// See [`Solver::solve_poly_system_str`].
pub fn solve_poly_system_str(exprs: &[&str], gens: &[&str]) -> SolveResult<PolySolutions> {
    Solver::new().solve_poly_system_str(exprs, gens)
}

/// [`Solver::solve_linear_system`] with a default solver.
///
/// # Errors
///
/// See [`Solver::solve_linear_system`].
pub fn solve_linear_system(
    matrix: &DenseMatrix<Algebraic>,
    symbols: &[&str],
) -> SolveResult<Option<LinearSolution>> {
    Solver::new().solve_linear_system(matrix, symbols)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_reaches_both_solvers() {
        let solver = Solver::new();
        // Fast path.
        let out = solver
            .solve_poly_system_str(&["y + x**2 - 3", "-y + x - 4"], &["x", "y"])
            .unwrap();
        assert_eq!(out.len(), 2);
        // Fast path misses, generic elimination finishes.
        let out = solver
            .solve_poly_system_str(&["x*y - 2*y", "2*y**2 - x**2"], &["x", "y"])
            .unwrap();
        assert_eq!(
            out.to_string(),
            "[{x: 0, y: 0}, {x: 2, y: -sqrt(2)}, {x: 2, y: sqrt(2)}]"
        );
        // Not biquadratic at all.
        let out = solver
            .solve_poly_system_str(&["x**3 - 4*x", "y - x"], &[])
            .unwrap();
        assert_eq!(
            out.to_string(),
            "[{x: -2, y: -2}, {x: 0, y: 0}, {x: 2, y: 2}]"
        );
    }

    #[test]
    fn test_malformed_inputs() {
        let solver = Solver::new();
        let err = solver.solve_poly_system_str(&["x +"], &["x"]).unwrap_err();
        assert!(matches!(
            err,
            SolveError::Malformed {
                operation: "solve_poly_system",
                source: NormalizeError::Parse(_),
                ..
            }
        ));

        let exprs = [parse_expr("1/x").unwrap()];
        let err = solver.solve_poly_system(&exprs, &["x"]).unwrap_err();
        assert_eq!(
            err,
            SolveError::Malformed {
                operation: "solve_poly_system",
                expressions: vec!["1/x".to_string()],
                source: NormalizeError::NonConstantDivisor("x".to_string()),
            }
        );
    }

    #[test]
    fn test_cache_is_shared_and_transparent() {
        let cache = Arc::new(SolveCache::new());
        let cold = Solver::new();
        let warm = Solver::new().with_cache(Arc::clone(&cache));
        let system = ["x**2 + y**2 - 5", "x*y - 2"];
        let expected = cold.solve_poly_system_str(&system, &[]).unwrap();
        let first = warm.solve_poly_system_str(&system, &[]).unwrap();
        let misses = cache.stats().misses;
        let second = warm.clone().solve_poly_system_str(&system, &[]).unwrap();
        assert_eq!(first, expected);
        assert_eq!(second, expected);
        assert_eq!(cache.stats().misses, misses);
        assert!(cache.stats().hits > 0);
    }

    #[test]
    fn test_linear_simplify_flag() {
        let m = DenseMatrix::from_rows(vec![vec![
            Algebraic::from(1),
            Algebraic::from(-1),
            Algebraic::from(0),
        ]]);
        let plain = Solver::with_options(SolveOptions::default().with_simplify(false));
        let out = plain.solve_linear_system(&m, &["x", "y"]).unwrap().unwrap();
        assert_eq!(out.to_string(), "{x: y}");
        let out = Solver::new().solve_linear_system(&m, &["x", "y"]).unwrap().unwrap();
        assert_eq!(out.to_string(), "{x: y}");
    }
}
