//! # Radix
//!
//! Exact solutions of polynomial systems, written in radicals.
//!
//! Radix solves systems of polynomial equations with finitely many
//! solutions. Coefficients may be rationals or square roots of
//! rationals; solutions are exact elements of towers of quadratic fields.
//!
//! ## Features
//!
//! - **Exact Arithmetic**: Big integers and rationals, quadratic towers
//! - **Elimination**: Reduced Gröbner bases by Buchberger's algorithm
//! - **Factorization**: Integer polynomials by Cantor–Zassenhaus and Hensel lifting
//! - **Root Finding**: Rational roots, quadratics, biquadratics, multiplicities
//! - **Linear Algebra**: Exact Gauss–Jordan elimination
//! - **Simplification**: Equality saturation via e-graphs
//!
//! ## Quick Start
//!
//! ```rust
//! use radix::prelude::*;
//!
//! let solutions = solve_poly_system_str(&["x**2 + y", "x + 4*y"], &["x", "y"]).unwrap();
//! assert_eq!(solutions.to_string(), "[{x: 0, y: 0}, {x: 1/4, y: -1/16}]");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use radix_factor as factor;
pub use radix_groebner as groebner;
pub use radix_integers as integers;
pub use radix_linalg as linalg;
pub use radix_poly as poly;
pub use radix_rings as rings;
pub use radix_roots as roots;
pub use radix_simplify as simplify;
pub use radix_solve as solve;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use radix_groebner::{groebner_basis, GroebnerConfig};
    pub use radix_integers::{Integer, Rational};
    pub use radix_linalg::DenseMatrix;
    pub use radix_poly::{DensePoly, MonomialOrder, SparsePoly};
    pub use radix_rings::{Algebraic, Field, NumberField, Ring, Q};
    pub use radix_roots::{roots, RootSet};
    pub use radix_simplify::{parse_expr, to_infix, Simplifier};
    pub use radix_solve::{
        solve_linear_system, solve_poly_system, solve_poly_system_str, LinearSolution,
        PolySolutions, Solution, SolveCache, SolveError, SolveOptions, Solver,
    };
}
