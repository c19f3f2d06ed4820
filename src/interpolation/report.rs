//! Defines the struct returned by the interpolation algorithm.
//!
//! The report carries the interpolant itself plus the metadata and
//! intermediate basis polynomials of the run.

use crate::interpolation::point::PointSet;
use crate::polynomial::Polynomial;

/// Summary of an interpolation run.
///
/// [`InterpolationReport`]
/// - `algorithm_name` : name of the interpolation method (`"lagrange"`)
/// - `n_provided`     : number of input data points `(x, y)`
/// - `n_evaluated`    : number of points at which the interpolant was evaluated
/// - `points`         : validated nodes, sorted by `x`
/// - `basis`          : `basis[i]` is 1 at `points[i].x`, 0 at every other node
/// - `polynomial`     : the interpolant
/// - `evaluated`      : interpolant values at each evaluation point
#[derive(Debug, Clone)]
pub struct InterpolationReport {
    pub algorithm_name: &'static str,
    pub n_provided: usize,
    pub n_evaluated: usize,
    pub points: PointSet,
    pub basis: Vec<Polynomial>,
    pub polynomial: Polynomial,
    pub evaluated: Vec<f64>,
}
