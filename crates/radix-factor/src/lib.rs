//! # radix-factor
//!
//! Factorization of univariate integer polynomials.
//!
//! This crate provides:
//! - **Modular arithmetic**: polynomials over Z/pZ for word-sized primes
//! - **Cantor-Zassenhaus**: distinct- and equal-degree factorization mod p
//! - **Hensel lifting**: from a factorization mod p to one mod pᵏ
//! - **Zassenhaus recombination**: true factors over Z from lifted ones
//!
//! The root finder factors norms over Q with it, so a polynomial that
//! splits into quadratics is solved piece by piece.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cantor_zassenhaus;
pub mod hensel;
pub mod modular;
pub mod squarefree;
pub mod univariate;

#[cfg(test)]
mod proptests;

pub use cantor_zassenhaus::factor_mod_p;
pub use hensel::{hensel_lift, HenselLiftResult};
pub use modular::{ModPoly, PrimeField};
pub use squarefree::{content, from_rational, primitive_part, squarefree_parts};
pub use univariate::{factor, factor_squarefree, Factorization};
