//! # radix-solve
//!
//! Exact solving of polynomial systems with finitely many solutions.
//!
//! This crate provides:
//!
//! - **Generic elimination**: reduced lex Gröbner bases, roots of the
//!   polynomial in the last generator, back-substitution
//! - **Biquadratic fast path**: two equations of degree at most two in
//!   each of two unknowns
//! - **Linear systems**: augmented matrices, with free unknowns left as
//!   parameters
//!
//! Solutions are exact: their coordinates live in towers of quadratic
//! fields over Q. Systems with infinitely many solutions are rejected
//! with [`SolveError::NotZeroDimensional`]; roots without a radical form
//! clear [`PolySolutions::complete`] instead of being approximated.
//!
//! # Example
//!
//! ```
//! use radix_solve::solve_poly_system_str;
//!
//! let solutions = solve_poly_system_str(&["x*y - 2*y", "2*y**2 - x**2"], &["x", "y"]).unwrap();
//! assert_eq!(
//!     solutions.to_string(),
//!     "[{x: 0, y: 0}, {x: 2, y: -sqrt(2)}, {x: 2, y: sqrt(2)}]"
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod biquadratic;
pub mod cache;
pub mod error;
pub mod generic;
pub mod linear;
pub mod normalize;
pub mod options;
pub mod solution;
pub mod solver;

#[cfg(test)]
mod proptests;

pub use biquadratic::FastPath;
pub use cache::{CacheStats, SolveCache};
pub use error::{NormalizeError, SolveError, SolveResult};
pub use linear::solve_lin_sys;
pub use normalize::polys_from_exprs;
pub use options::SolveOptions;
pub use solution::{LinearSolution, LinearValue, PolySolutions, Solution};
pub use solver::{solve_linear_system, solve_poly_system, solve_poly_system_str, Solver};
