//! # radix-linalg
//!
//! Exact dense linear algebra over the coefficient fields of the solver.
//!
//! This crate provides:
//! - `DenseMatrix`, a row-major matrix over any `Ring`
//! - Gauss–Jordan elimination to reduced row echelon form over a `Field`,
//!   with the pivot columns needed to read off parametric solutions
//! - Null spaces and particular solutions of `Ax = b`
//!
//! Row elimination switches to rayon once a matrix is tall enough for the
//! per-row work to pay for the fork.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod dense_matrix;

#[cfg(test)]
mod proptests;

pub use dense_matrix::{DenseMatrix, Echelon};
