//! Configuration for Lagrange interpolation.
//!
//! Provides [`LagrangeCfg`] with the default duplicate-abscissa tolerance
//! [`DEFAULT_X_TOL`]: `0.0`, i.e. only equal abscissae are duplicates.
//!
//! [`LagrangeCfg`] — fields
//! - `points` : interpolation nodes, in entry order
//! - `x_eval` : x values to evaluate the interpolant at
//! - `x_tol`  : abscissae at most this far apart are duplicates
//!
//! [`LagrangeCfg::new`] initializes configuration with empty `Vec`s.
//! Setters validate what they can see locally; the cross-point checks
//! run in [`LagrangeCfg::validate`].

use crate::interpolation::errors::InterpolationError;
use crate::interpolation::point::{Point, PointSet};

pub const DEFAULT_X_TOL: f64 = 0.0;


#[derive(Debug, Clone)]
pub struct LagrangeCfg {
    points: Vec<Point>,
    x_eval: Vec<f64>,
    x_tol : f64,
}

impl Default for LagrangeCfg {
    fn default() -> Self { Self::new() }
}

impl LagrangeCfg {
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            x_eval: Vec::new(),
            x_tol : DEFAULT_X_TOL,
        }
    }

    pub fn set_points(mut self, v: &[Point]) -> Result<Self, InterpolationError> {
        if v.is_empty() {
            return Err(InterpolationError::NoPointsProvided);
        }
        if let Some(idx) = v.iter().position(|p| !p.is_finite()) {
            return Err(InterpolationError::NonFinitePoint { idx });
        }

        self.points = v.to_vec();
        Ok(self)
    }

    /// Pairs `x[i]` with `y[i]`, then behaves as [`LagrangeCfg::set_points`].
    pub fn set_xy(self, x: &[f64], y: &[f64]) -> Result<Self, InterpolationError> {
        if x.len() != y.len() {
            return Err(InterpolationError::UnequalLength { x_len: x.len(), y_len: y.len() });
        }
        let pts: Vec<Point> = x.iter().zip(y).map(|(&x, &y)| Point::new(x, y)).collect();
        self.set_points(&pts)
    }

    /// Query points. Values outside the data range are allowed; nothing
    /// is promised about their accuracy.
    pub fn set_x_eval(mut self, v: &[f64]) -> Result<Self, InterpolationError> {
        if let Some(idx) = v.iter().position(|x| !x.is_finite()) {
            return Err(InterpolationError::NonFiniteEvalPoint { idx });
        }

        self.x_eval = v.to_vec();
        Ok(self)
    }

    /// Widens the duplicate rule: `|x_i - x_j| <= v` is a duplicate.
    /// `0.0` keeps exact equality.
    pub fn set_x_tol(mut self, v: f64) -> Result<Self, InterpolationError> {
        if !v.is_finite() || v < 0.0 {
            return Err(InterpolationError::InvalidXTol { got: v });
        }

        self.x_tol = v;
        Ok(self)
    }

    /// Builds the validated [`PointSet`].
    pub fn validate(&self) -> Result<PointSet, InterpolationError> {
        PointSet::with_x_tol(self.points.clone(), self.x_tol)
    }

    // getters
    pub fn points(&self) -> &[Point] { &self.points }
    pub fn x_eval(&self) -> &[f64] { &self.x_eval }
    pub fn x_tol(&self)  -> f64 { self.x_tol }
}
