//! Interpolation nodes.
//!
//! [`Point`] is a plain `(x, y)` pair. [`PointSet`] is the validated
//! collection handed to the interpolator:
//! - non-empty
//! - every coordinate finite
//! - abscissae pairwise distinct; with a nonzero `x_tol`, farther apart
//!   than it
//!
//! Points are stored sorted by ascending `x`; arithmetic over a
//! [`PointSet`] therefore does not depend on the order of entry.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::interpolation::config::DEFAULT_X_TOL;
use crate::interpolation::errors::InterpolationError;


#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}


/// `true` if `a` and `b` count as the same abscissa: `|a - b| <= x_tol`.
/// With `x_tol = 0.0` this is plain equality, so `-0.0` matches `0.0`.
#[inline]
pub fn same_abscissa(a: f64, b: f64, x_tol: f64) -> bool {
    (a - b).abs() <= x_tol
}

/// Index of the first entry in `points` sharing the abscissa `x`.
pub fn find_duplicate(points: &[Point], x: f64, x_tol: f64) -> Option<usize> {
    points.iter().position(|p| same_abscissa(p.x, x, x_tol))
}


#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Validates with [`DEFAULT_X_TOL`].
    pub fn new(points: Vec<Point>) -> Result<Self, InterpolationError> {
        Self::with_x_tol(points, DEFAULT_X_TOL)
    }

    /// Validates `points` and sorts them by `x`.
    ///
    /// # Errors
    /// - [`InterpolationError::NoPointsProvided`] if `points` is empty.
    /// - [`InterpolationError::NonFinitePoint`] on the first non-finite
    ///   coordinate (index in entry order).
    /// - [`InterpolationError::DuplicateAbscissa`] if two abscissae differ
    ///   by at most `x_tol` (equal ones for `0.0`). Identical `(x, y)` pairs
    ///   are duplicates too.
    /// - [`InterpolationError::InvalidXTol`] if `x_tol` is negative or not finite.
    pub fn with_x_tol(points: Vec<Point>, x_tol: f64) -> Result<Self, InterpolationError> {
        if !x_tol.is_finite() || x_tol < 0.0 {
            return Err(InterpolationError::InvalidXTol { got: x_tol });
        }
        if points.is_empty() {
            return Err(InterpolationError::NoPointsProvided);
        }
        if let Some(idx) = points.iter().position(|p| !p.is_finite()) {
            return Err(InterpolationError::NonFinitePoint { idx });
        }

        // sort entry indices so duplicates report positions the user typed
        let mut order: Vec<usize> = (0..points.len()).collect();
        order.sort_by(|&a, &b| {
            points[a].x.total_cmp(&points[b].x).then(a.cmp(&b))
        });

        for w in order.windows(2) {
            let (a, b) = (w[0], w[1]);
            if same_abscissa(points[a].x, points[b].x, x_tol) {
                let (first, second) = match a.cmp(&b) {
                    Ordering::Less => (a, b),
                    _              => (b, a),
                };
                return Err(InterpolationError::DuplicateAbscissa {
                    x: points[second].x,
                    first,
                    second,
                });
            }
        }

        let sorted = order.into_iter().map(|i| points[i]).collect();
        Ok(Self { points: sorted })
    }

    /// Pairs `x[i]` with `y[i]`.
    pub fn from_xy(x: &[f64], y: &[f64]) -> Result<Self, InterpolationError> {
        if x.len() != y.len() {
            return Err(InterpolationError::UnequalLength { x_len: x.len(), y_len: y.len() });
        }
        Self::new(x.iter().zip(y).map(|(&x, &y)| Point::new(x, y)).collect())
    }

    // getters
    pub fn points(&self) -> &[Point] { &self.points }
    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
    pub fn iter(&self) -> std::slice::Iter<'_, Point> { self.points.iter() }

    /// `(min x, max x)`. Always defined since the set is non-empty.
    pub fn x_extent(&self) -> (f64, f64) {
        (self.points[0].x, self.points[self.points.len() - 1].x)
    }

    pub fn into_points(self) -> Vec<Point> { self.points }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter { self.points.iter() }
}
