//! Lagrange Interpolation
//!
//! Implements global polynomial interpolation in
//! [Lagrange form](https://en.wikipedia.org/wiki/Lagrange_polynomial).
//!
//! For nodes `(x_0, y_0) ... (x_{n-1}, y_{n-1})` each basis polynomial
//!
//! ```text
//! l_i(x) = prod_{j != i} (x - x_j) / (x_i - x_j)
//! ```
//!
//! equals 1 at `x_i` and 0 at every other node. The interpolant is
//! `P(x) = sum_i y_i * l_i(x)`, of degree at most `n - 1`.

use tracing::{debug, trace, warn};

use crate::interpolation::config::LagrangeCfg;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::point::{Point, PointSet};
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::traits::Interpolator;
use crate::polynomial::{Polynomial, DEFAULT_NORMALIZE_TOL};

const ALGORITHM: &str = "lagrange";


/// Builds `l_i` for every node of `points`.
///
/// `denom` is a product of `n - 1` nonzero differences for a validated
/// set, so [`Polynomial::divide_by_scalar`] cannot fail here; if it does
/// the error surfaces as [`InterpolationError::Internal`].
///
/// The exception is underflow: many abscissae packed very closely (e.g.
/// 45 nodes spaced `1e-11` apart) drive the product of differences below
/// the smallest `f64`, `denom` rounds to `0.0` and the call returns
/// `Internal(DivisionByZero)`.
pub fn basis_polynomials(points: &PointSet) -> Result<Vec<Polynomial>, InterpolationError> {
    let pts = points.points();
    let mut basis = Vec::with_capacity(pts.len());

    for (i, pi) in pts.iter().enumerate() {
        let mut numer = Polynomial::constant(1.0);
        let mut denom = 1.0;

        for (j, pj) in pts.iter().enumerate() {
            if i == j {
                continue;
            }
            numer = numer.multiply_by_monomial(pj.x);
            denom *= pi.x - pj.x;
        }

        trace!(i, x = pi.x, denom, "basis denominator");
        let li = numer.divide_by_scalar(denom)?;
        debug!(i, basis = %li, "basis polynomial");
        basis.push(li);
    }

    Ok(basis)
}

/// Sums `y_i * l_i`. `basis[i]` must belong to `points[i]`.
pub fn combine(points: &PointSet, basis: &[Polynomial]) -> Polynomial {
    points
        .iter()
        .zip(basis)
        .fold(Polynomial::zero(), |acc, (p, li)| &acc + &li.scale(p.y))
}


/// Performs Lagrange interpolation.
///
/// # Behavior
/// - Validates the configured points into a [`PointSet`] (sorted by `x`).
/// - Builds one basis polynomial per node and sums them weighted by `y`.
/// - Evaluates the interpolant at every point of `cfg.x_eval()`.
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"lagrange"`
/// - `n_provided`     : number of (x, y) data points
/// - `n_evaluated`    : number of evaluation points
/// - `polynomial`     : the interpolant, with its `basis` and `points`
/// - `evaluated`      : interpolated values at each evaluation point
///
/// # Errors
/// - [`InterpolationError::NoPointsProvided`] if no points were configured.
/// - [`InterpolationError::DuplicateAbscissa`] if two nodes share an `x`.
pub fn interpolate(cfg: LagrangeCfg) -> Result<InterpolationReport, InterpolationError> {
    let points = cfg.validate()?;
    let evals  = cfg.x_eval();

    let n_provided  = points.len();
    let n_evaluated = evals.len();
    debug!(n_provided, n_evaluated, "lagrange interpolation");

    let basis      = basis_polynomials(&points)?;
    let polynomial = combine(&points, &basis);

    let lead = polynomial.coefficients()[polynomial.len() - 1];
    let scale = polynomial.coefficients().iter().fold(0.0_f64, |m, c| m.max(c.abs()));
    if n_provided > 1 && lead != 0.0 && lead.abs() <= DEFAULT_NORMALIZE_TOL * scale {
        warn!(lead, "leading coefficient is cancellation residue");
    }

    let evaluated = polynomial.eval_many(evals);

    Ok(InterpolationReport {
        algorithm_name: ALGORITHM,
        n_provided,
        n_evaluated,
        points,
        basis,
        polynomial,
        evaluated,
    })
}

/// Interpolates `points` with the default configuration and returns only
/// the polynomial.
pub fn interpolate_points(points: &[Point]) -> Result<Polynomial, InterpolationError> {
    let cfg = LagrangeCfg::new().set_points(points)?;
    Ok(interpolate(cfg)?.polynomial)
}
