//! Line-level point parsing.
//!
//! A point is two real numbers separated by whitespace, optionally with
//! a single comma between them: `1 2`, `-0.5 3e2`, `1, 2`.

use crate::input::errors::InputError;
use crate::interpolation::point::Point;


fn parse_coord(token: &str) -> Option<f64> {
    token.parse::<f64>().ok()
}

/// Parses one trimmed, non-empty line.
///
/// # Errors
/// - [`InputError::InvalidPointFormat`] unless the line holds exactly two
///   numbers.
/// - [`InputError::NonFinitePoint`] if either number is `inf` or `NaN`.
pub fn parse_point(line: usize, input: &str) -> Result<Point, InputError> {
    let invalid = || InputError::InvalidPointFormat { line, input: input.to_string() };

    let normalized = input.trim().replacen(',', " ", 1);
    let mut tokens = normalized.split_whitespace();

    let (x, y) = match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(x), Some(y), None) => (x, y),
        _ => return Err(invalid()),
    };

    let x = parse_coord(x).ok_or_else(invalid)?;
    let y = parse_coord(y).ok_or_else(invalid)?;

    let point = Point::new(x, y);
    if !point.is_finite() {
        return Err(InputError::NonFinitePoint { line, input: input.to_string() });
    }
    Ok(point)
}
