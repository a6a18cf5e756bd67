//! # radix-poly
//!
//! Polynomial arithmetic for exact solving.
//!
//! This crate provides:
//! - Sparse multivariate polynomials over any `Ring`, with the degree
//!   queries, substitution and variable trimming used by elimination
//! - Dense univariate polynomials with Euclidean division and gcd
//! - Square-free decomposition over fields of characteristic zero

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod dense;
pub mod monomial;
pub mod ordering;
pub mod sparse;

#[cfg(test)]
mod proptests;

pub use dense::DensePoly;
pub use monomial::Monomial;
pub use ordering::MonomialOrder;
pub use sparse::SparsePoly;
