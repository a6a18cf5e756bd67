//! Error types for the solver.

use radix_simplify::ParseError;
use thiserror::Error;

/// Reasons an expression does not describe a polynomial over the generators.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// The input text could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Division by something that is not a nonzero constant.
    #[error("cannot divide by non-constant {0}")]
    NonConstantDivisor(String),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// An exponent that is not a non-negative integer.
    #[error("exponent {0} is not a non-negative integer")]
    BadExponent(String),

    /// `sqrt` applied to something other than a constant.
    #[error("cannot take the square root of non-constant {0}")]
    NonConstantRadical(String),

    /// A symbol that is not one of the generators.
    #[error("symbol {0:?} is not a generator")]
    UnknownSymbol(String),

    /// A generator name given more than once.
    #[error("generator {0:?} given more than once")]
    DuplicateGenerator(String),

    /// No generators given and none could be inferred.
    #[error("no generators")]
    NoGenerators,
}

/// Errors from the polynomial and linear solvers.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SolveError {
    /// Input does not normalize to polynomials.
    #[error("{operation} failed for {} expression(s): {source}", expressions.len())]
    Malformed {
        /// The entry point that rejected the input.
        operation: &'static str,
        /// The offending input, rendered.
        expressions: Vec<String>,
        /// What went wrong.
        #[source]
        source: NormalizeError,
    },

    /// The reduced basis does not contain exactly one polynomial
    /// univariate in the last generator.
    #[error("only zero-dimensional systems supported (finite number of solutions)")]
    NotZeroDimensional {
        /// The generators of the system at the failing depth.
        generators: Vec<String>,
        /// How many univariate polynomials were found.
        univariate: usize,
    },

    /// The augmented matrix does not have one column per symbol plus one.
    #[error("augmented matrix has {columns} columns, expected {} for {symbols} symbols", symbols + 1)]
    ShapeMismatch {
        /// Columns of the matrix.
        columns: usize,
        /// Number of symbols given.
        symbols: usize,
    },
}

/// Result alias for solver operations.
pub type SolveResult<T> = Result<T, SolveError>;
