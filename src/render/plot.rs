//! Plot sampling.
//!
//! [`sample`] evaluates the interpolant over a linearly spaced grid that
//! covers the x-extent of the nodes ([`DEFAULT_SAMPLES`] points) and keeps
//! the nodes alongside as a scatter overlay. The result serializes to JSON
//! for external plotting ([`write_json`]) or renders as a coarse terminal
//! chart ([`ascii`]).

use std::io::Write;

use serde::Serialize;

use crate::interpolation::point::{Point, PointSet};
use crate::interpolation::traits::Interpolator;
use crate::polynomial::Polynomial;
use crate::render::errors::RenderError;

pub const DEFAULT_SAMPLES: usize = 100;

/// Half-width of the window drawn around a single node.
const SINGLE_POINT_PAD: f64 = 1.0;


#[derive(Debug, Clone, Serialize)]
pub struct PlotData {
    pub polynomial: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub points: Vec<Point>,
}


/// `n` evenly spaced values from `start` to `end`, both included.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Samples `poly` over the extent of `points`.
///
/// # Errors
/// - [`RenderError::InvalidSamples`] if `samples < 2`.
pub fn sample(points: &PointSet, poly: &Polynomial, samples: usize) -> Result<PlotData, RenderError> {
    if samples < 2 {
        return Err(RenderError::InvalidSamples { got: samples });
    }

    let (mut lo, mut hi) = points.x_extent();
    if lo == hi {
        lo -= SINGLE_POINT_PAD;
        hi += SINGLE_POINT_PAD;
    }

    let x = linspace(lo, hi, samples);
    let y = poly.eval_many(&x);

    Ok(PlotData {
        polynomial: poly.to_string(),
        x,
        y,
        points: points.points().to_vec(),
    })
}

pub fn write_json<W: Write>(data: &PlotData, writer: W) -> Result<(), RenderError> {
    serde_json::to_writer_pretty(writer, data)?;
    Ok(())
}


fn cell(v: f64, lo: f64, hi: f64, cells: usize) -> usize {
    if hi <= lo {
        return cells / 2;
    }
    let t = ((v - lo) / (hi - lo)).clamp(0.0, 1.0);
    (t * (cells - 1) as f64).round() as usize
}

/// Draws the sampled curve (`*`) with the nodes (`o`) on a
/// `width` x `height` character grid.
pub fn ascii(data: &PlotData, width: usize, height: usize) -> Result<String, RenderError> {
    if width < 2 || height < 2 {
        return Err(RenderError::InvalidCanvas { width, height });
    }

    let all_y = data.y.iter().chain(data.points.iter().map(|p| &p.y));
    let (y_lo, y_hi) = all_y.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
        (lo.min(v), hi.max(v))
    });
    let x_lo = data.x.first().copied().unwrap_or(0.0);
    let x_hi = data.x.last().copied().unwrap_or(0.0);

    let mut grid = vec![vec![' '; width]; height];
    let mut plot = |x: f64, y: f64, mark: char| {
        let col = cell(x, x_lo, x_hi, width);
        let row = height - 1 - cell(y, y_lo, y_hi, height);
        grid[row][col] = mark;
    };

    for (&x, &y) in data.x.iter().zip(&data.y) {
        plot(x, y, '*');
    }
    for p in &data.points {
        plot(p.x, p.y, 'o');
    }

    let mut out = String::with_capacity((width + 1) * height);
    for row in grid {
        out.extend(row.into_iter());
        out.push('\n');
    }
    Ok(out)
}
