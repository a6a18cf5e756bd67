//! # radix-integers
//!
//! Exact integer and rational arithmetic for the radix solver.
//!
//! Both types wrap `dashu` big numbers and add the number theory the
//! solver leans on: exact square roots, square-free parts and bounded
//! divisor enumeration for the rational root test.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use rational::{ParseRationalError, Rational};
