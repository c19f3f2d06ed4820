//! Input error types.
//!
//! Every variant tied to a single line carries its 1-based `line`
//! number so front ends can flag exactly that entry and carry on.
//!
//! ┌ [`InputError::InvalidPointFormat`] : not two real numbers
//! ├ [`InputError::NonFinitePoint`]     : `inf` / `NaN` coordinates
//! ├ [`InputError::DuplicateAbscissa`]  : x already given on another line
//! ├ [`InputError::NoPointsProvided`]   : nothing entered
//! └ [`InputError::Interpolation`]      : core rejected the validated set

use thiserror::Error;

use crate::interpolation::errors::InterpolationError;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("line {line}: expected a point as two numbers separated by a space, got {input:?}")]
    InvalidPointFormat { line: usize, input: String },

    #[error("line {line}: coordinates must be finite, got {input:?}")]
    NonFinitePoint { line: usize, input: String },

    #[error("line {line}: duplicate abscissa x={x}, already given on line {first_line}")]
    DuplicateAbscissa { line: usize, x: f64, first_line: usize },

    #[error("no points provided: enter at least one point")]
    NoPointsProvided,

    #[error(transparent)]
    Interpolation(#[from] InterpolationError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl InputError {
    /// 1-based line the error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            InputError::InvalidPointFormat { line, .. }
            | InputError::NonFinitePoint { line, .. }
            | InputError::DuplicateAbscissa { line, .. } => Some(*line),
            _ => None,
        }
    }
}
