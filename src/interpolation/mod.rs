pub mod config;
pub mod errors;
pub mod point;
pub mod report;
pub mod traits;
pub use traits::Interpolator;
pub use point::{Point, PointSet};

pub mod lagrange;
pub use lagrange::{interpolate, interpolate_points};
