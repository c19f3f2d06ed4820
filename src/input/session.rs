//! Interactive text session.
//!
//! Prompts for points one per line (`Point N: `) until an empty line,
//! re-prompting the same number when a line is rejected. The accepted
//! points are tabulated and the interpolant printed. [`Session::run`]
//! wraps this in the "1 to try, 0 to exit" menu.
//!
//! Reader and writer are generic so the session runs over stdin/stdout
//! in the binary and over byte buffers in tests.

use std::io::{BufRead, Write};

use owo_colors::{OwoColorize, Stream};
use tracing::{debug, info};

use crate::input::errors::InputError;
use crate::input::parse::parse_point;
use crate::interpolation::config::{LagrangeCfg, DEFAULT_X_TOL};
use crate::interpolation::lagrange::interpolate;
use crate::interpolation::point::{find_duplicate, Point, PointSet};
use crate::interpolation::report::InterpolationReport;
use crate::polynomial::DEFAULT_NORMALIZE_TOL;
use crate::render::explain::EXPLANATION;
use crate::render::table::points_table;

const RULE_WIDTH: usize = 50;


/// Session options
///
/// - `x_tol`     : abscissae at most this far apart are duplicates
/// - `precision` : digits per coefficient, `None` for shortest round-trip
/// - `color`     : colour error messages
/// - `explain`   : print the method explanation after the banner
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    pub x_tol: f64,
    pub precision: Option<usize>,
    pub color: bool,
    pub explain: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self { x_tol: DEFAULT_X_TOL, precision: None, color: false, explain: true }
    }
}


pub struct Session<R, W> {
    reader: R,
    writer: W,
    opts: SessionOptions,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(reader: R, writer: W, opts: SessionOptions) -> Self {
        Self { reader, writer, opts }
    }

    pub fn into_writer(self) -> W { self.writer }

    /// `None` on end of input.
    fn read_line(&mut self) -> Result<Option<String>, InputError> {
        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }

    fn error(&mut self, msg: &str) -> Result<(), InputError> {
        if self.opts.color {
            writeln!(self.writer, "{}", msg.if_supports_color(Stream::Stdout, |t| t.red()))?;
        } else {
            writeln!(self.writer, "{}", msg)?;
        }
        Ok(())
    }

    /// Reads points until an empty line.
    ///
    /// Format and duplicate errors are reported and the same point number
    /// is asked again. An empty line before any point asks again too.
    ///
    /// # Errors
    /// - [`InputError::NoPointsProvided`] if input ends before any point.
    /// - [`InputError::Io`] on read/write failure.
    pub fn collect_points(&mut self) -> Result<PointSet, InputError> {
        writeln!(
            self.writer,
            "Please enter the points as coordinates in the format 'x y'.\n\
             Press Enter without typing anything to finish."
        )?;

        let mut points: Vec<Point> = Vec::new();
        let mut line_no = 0;

        loop {
            write!(self.writer, "Point {}: ", points.len() + 1)?;
            self.writer.flush()?;

            let Some(input) = self.read_line()? else { break };
            line_no += 1;

            if input.is_empty() {
                if points.is_empty() {
                    self.error(&InputError::NoPointsProvided.to_string())?;
                    continue;
                }
                break;
            }

            let point = match parse_point(line_no, &input) {
                Ok(p) => p,
                Err(e) => {
                    debug!(error = %e, "rejected point");
                    self.error("Please enter a valid point as two numbers separated by a space.")?;
                    continue;
                }
            };

            if let Some(idx) = find_duplicate(&points, point.x, self.opts.x_tol) {
                self.error(&format!(
                    "Duplicate x-value {}: already given for point {}.",
                    point.x,
                    idx + 1
                ))?;
                continue;
            }

            points.push(point);
        }

        if points.is_empty() {
            return Err(InputError::NoPointsProvided);
        }

        writeln!(self.writer, "{}", points_table(&points))?;
        Ok(PointSet::with_x_tol(points, self.opts.x_tol)?)
    }

    /// Interpolates `points` and prints the normalized polynomial.
    pub fn report(&mut self, points: &PointSet) -> Result<InterpolationReport, InputError> {
        let cfg = LagrangeCfg::new()
            .set_points(points.points())?
            .set_x_tol(self.opts.x_tol)?;
        let report = interpolate(cfg)?;

        let shown = report.polynomial.normalized(DEFAULT_NORMALIZE_TOL);
        match self.opts.precision {
            Some(p) => writeln!(self.writer, "Lagrange Polynomial: {:.*}", p, shown)?,
            None    => writeln!(self.writer, "Lagrange Polynomial: {}", shown)?,
        }
        info!(n = report.n_provided, degree = shown.degree(), "interpolated");
        Ok(report)
    }

    /// One round of entry plus interpolation.
    pub fn run_once(&mut self) -> Result<InterpolationReport, InputError> {
        let points = self.collect_points()?;
        self.report(&points)
    }

    /// Menu loop. Returns the report of the last completed round.
    pub fn run(&mut self) -> Result<Option<InterpolationReport>, InputError> {
        writeln!(self.writer, "Welcome to your personal Lagrange Polynomial Generator!")?;
        if self.opts.explain {
            writeln!(self.writer, "{}", EXPLANATION)?;
        }

        let mut last = None;
        loop {
            writeln!(self.writer, "{}", "-".repeat(RULE_WIDTH))?;
            write!(self.writer, "Enter 1 to try the program, 0 to exit: ")?;
            self.writer.flush()?;

            match self.read_line()?.as_deref() {
                Some("1") => match self.run_once() {
                    Ok(report) => last = Some(report),
                    Err(InputError::NoPointsProvided) => {
                        self.error(&InputError::NoPointsProvided.to_string())?;
                        break;
                    }
                    Err(e) => return Err(e),
                },
                _ => break,
            }
        }

        writeln!(self.writer, "Goodbye!")?;
        Ok(last)
    }
}
