//! Lagrange polynomial interpolation.
//!
//! ┌ [`polynomial`]    : value-type polynomials over `f64`
//! ├ [`interpolation`] : point validation and the Lagrange construction
//! ├ [`input`]         : line / block parsing and the interactive session
//! └ [`render`]        : point tables, plot sampling, explanation text
//!
//! The core (`polynomial`, `interpolation`) does not depend on the
//! adapters.

pub mod input;
pub mod interpolation;
pub mod polynomial;
pub mod render;

pub use interpolation::{interpolate, interpolate_points, Point, PointSet};
pub use polynomial::Polynomial;
