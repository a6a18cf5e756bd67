//! # radix-groebner
//!
//! Reduced Gröbner bases by Buchberger's algorithm.
//!
//! The basis is returned monic, inter-reduced and sorted by descending
//! leading monomial, so for a lexicographic order the polynomials in the
//! fewest (last) generators come last. Pair selection is deterministic:
//! the same input always produces the same basis in the same order.
//!
//! Inter-reduction of the final basis runs on rayon.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod buchberger;
pub mod criteria;
pub mod reduce;

#[cfg(test)]
mod proptests;

pub use buchberger::{groebner_basis, Buchberger, GroebnerConfig};
pub use reduce::{normal_form, s_polynomial};
