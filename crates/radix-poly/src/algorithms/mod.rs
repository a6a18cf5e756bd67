//! Algorithms on univariate polynomials over fields.

pub mod gcd;
pub mod squarefree;

pub use gcd::{make_monic, poly_div_rem, poly_gcd};
pub use squarefree::{squarefree_decomposition, SquarefreeDecomposition, SquarefreeFactor};
