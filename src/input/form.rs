//! Block input: a newline-separated list of points.
//!
//! Every line is checked and every failure is collected, so a form can
//! re-display all problems at once. Blank lines are ignored.

use tracing::debug;

use crate::input::errors::InputError;
use crate::input::parse::parse_point;
use crate::interpolation::point::{find_duplicate, Point, PointSet};


/// Parses `text` into a validated [`PointSet`].
///
/// # Errors
/// All per-line errors in line order, or `[NoPointsProvided]` when the
/// block holds no points and no errors.
pub fn parse_block(text: &str, x_tol: f64) -> Result<PointSet, Vec<InputError>> {
    let mut accepted: Vec<Point> = Vec::new();
    let mut lines: Vec<usize> = Vec::new();
    let mut errors = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        if raw.trim().is_empty() {
            continue;
        }

        let point = match parse_point(line, raw) {
            Ok(p)  => p,
            Err(e) => { errors.push(e); continue; }
        };

        if let Some(i) = find_duplicate(&accepted, point.x, x_tol) {
            errors.push(InputError::DuplicateAbscissa { line, x: point.x, first_line: lines[i] });
            continue;
        }
        accepted.push(point);
        lines.push(line);
    }

    debug!(accepted = accepted.len(), rejected = errors.len(), "parsed point block");

    if !errors.is_empty() {
        return Err(errors);
    }
    if accepted.is_empty() {
        return Err(vec![InputError::NoPointsProvided]);
    }

    PointSet::with_x_tol(accepted, x_tol).map_err(|e| vec![InputError::from(e)])
}
