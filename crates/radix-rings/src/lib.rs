//! # radix-rings
//!
//! Coefficient domains for exact polynomial solving.
//!
//! This crate provides:
//! - The `Ring` and `Field` traits that polynomial code is generic over
//! - `Z` and `Q`, the integers and the rational numbers
//! - `Algebraic`, elements of towers of quadratic extensions
//!   `Q(√d₁)(√d₂)…`, together with the `NumberField` they live in
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  └── Field
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algebraic;
pub mod integers;
pub mod rationals;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use algebraic::{Algebraic, NumberField, QuadraticExtension};
pub use integers::Z;
pub use rationals::Q;
pub use traits::{Field, Ring};
