//! # radix-simplify
//!
//! Symbolic expressions for the radix solver.
//!
//! This crate uses the `egg` library to provide:
//! - `RadixLang`, the expression language over exact rationals
//! - An infix parser (`x*y - 2*y`, `sqrt(2)*x**2`) and an infix printer
//! - A constant-folding e-class analysis
//! - Equality-saturation simplification with algebraic and radical rules
//!
//! ## Equality Saturation vs. Greedy Rewriting
//!
//! Unlike greedy term rewriting, equality saturation explores all
//! possible rewrite paths simultaneously, avoiding local minima
//! and the phase ordering problem.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod analysis;
pub mod cost;
pub mod engine;
pub mod language;
pub mod parse;
pub mod print;
pub mod rules;

pub use analysis::ConstantFold;
pub use engine::{SimplificationStats, Simplifier, SimplifierConfig};
pub use language::{free_symbols, RadixLang};
pub use parse::{parse_expr, ParseError};
pub use print::to_infix;

#[cfg(test)]
mod proptests;
