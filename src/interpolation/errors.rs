use thiserror::Error;

use crate::polynomial::errors::PolynomialError;

#[derive(Debug, Error, PartialEq)]
pub enum InterpolationError {
    #[error("no points provided: at least one point is required")]
    NoPointsProvided,

    #[error("duplicate abscissa x={x}: points {first} and {second} share it")]
    DuplicateAbscissa { x: f64, first: usize, second: usize },

    #[error("non-finite coordinate in point at index {idx}")]
    NonFinitePoint { idx: usize },

    #[error("non-finite evaluation point at index {idx}")]
    NonFiniteEvalPoint { idx: usize },

    #[error("unequal length: x has {x_len} elements, y has {y_len}")]
    UnequalLength { x_len: usize, y_len: usize },

    #[error("invalid x_tol {got} must be finite and >= 0")]
    InvalidXTol { got: f64 },

    #[error("internal invariant violated: {0}")]
    Internal(#[from] PolynomialError),
}
