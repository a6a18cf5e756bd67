//! # radix-roots
//!
//! Exact roots of univariate polynomials whose coefficients live in a
//! tower of quadratic extensions of Q.
//!
//! The finder handles:
//! - Linear factors and quadratics, adjoining `√discriminant` when needed
//! - Rational roots of any degree, through the norm down to Q when the
//!   coefficients are algebraic
//! - Products of factors over Q, found by factoring the norm over Z
//! - Polynomials in `t²`, by solving for `t²` and taking square roots
//! - Repeated roots, via square-free decomposition
//!
//! Whatever is left is reported through [`RootSet::complete`]; no root is
//! ever approximated.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod finder;
pub mod quadratic;
pub mod rational;
pub mod root_set;
pub mod split;

#[cfg(test)]
mod proptests;

pub use finder::{roots, roots_with_config, RootConfig};
pub use root_set::{Root, RootSet};
