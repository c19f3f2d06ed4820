//! Single-variable polynomials over `f64`.
//!
//! Provides [`Polynomial`], a value type holding coefficients in
//! ascending power order: `coeffs[k]` multiplies `x^k`.
//!
//! [`Polynomial`] — operations used by the Lagrange construction
//! - [`Polynomial::constant`]           : degree-0 polynomial
//! - [`Polynomial::multiply_by_monomial`] : `p(x) * (x - root)`
//! - `+` / `*`                          : coefficient-wise sum, scalar product
//! - [`Polynomial::divide_by_scalar`]   : fails on a zero divisor
//! - [`Polynomial::evaluate`]           : Horner's scheme
//!
//! Rendering lives in [`format`].

pub mod errors;
pub mod format;

use std::ops::{Add, Mul};

use crate::polynomial::errors::PolynomialError;

/// Relative cutoff used when presenting an interpolant.
pub const DEFAULT_NORMALIZE_TOL: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    /// `p(x) = c` for every `x`.
    pub fn constant(c: f64) -> Self {
        Self { coeffs: vec![c] }
    }

    pub fn zero() -> Self {
        Self::constant(0.0)
    }

    /// Builds from ascending coefficients, `[c0, c1, ...]`.
    /// An empty vector becomes the zero polynomial.
    pub fn from_coefficients(coeffs: Vec<f64>) -> Self {
        if coeffs.is_empty() {
            return Self::zero();
        }
        Self { coeffs }
    }

    // getters
    pub fn coefficients(&self) -> &[f64] { &self.coeffs }
    pub fn len(&self) -> usize { self.coeffs.len() }

    /// Highest power carrying a nonzero coefficient.
    /// The zero polynomial reports degree `0`.
    pub fn degree(&self) -> usize {
        self.coeffs.iter().rposition(|&c| c != 0.0).unwrap_or(0)
    }

    /// Coefficient of `x^degree()`.
    pub fn leading_coefficient(&self) -> f64 {
        self.coeffs[self.degree()]
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|&c| c == 0.0)
    }

    /// Returns `p(x) * (x - root)`.
    ///
    /// The coefficient vector grows by exactly one entry:
    ///
    /// ```text
    /// out[k] = coeffs[k - 1] - root * coeffs[k]
    /// ```
    pub fn multiply_by_monomial(&self, root: f64) -> Self {
        let n = self.coeffs.len();
        let mut out = vec![0.0; n + 1];

        for (k, &c) in self.coeffs.iter().enumerate() {
            out[k + 1] += c;
            out[k]     -= root * c;
        }

        Self { coeffs: out }
    }

    /// Every coefficient multiplied by `k`. `k = 0` yields all zeros.
    pub fn scale(&self, k: f64) -> Self {
        Self { coeffs: self.coeffs.iter().map(|&c| c * k).collect() }
    }

    /// Every coefficient divided by `k`.
    ///
    /// # Errors
    /// - [`PolynomialError::DivisionByZero`] if `k == 0`.
    pub fn divide_by_scalar(&self, k: f64) -> Result<Self, PolynomialError> {
        if k == 0.0 {
            return Err(PolynomialError::DivisionByZero);
        }
        Ok(Self { coeffs: self.coeffs.iter().map(|&c| c / k).collect() })
    }

    /// Evaluates `p(x)` with Horner's nested form
    ///
    /// ```text
    /// p(x) = c0 + x * (c1 + x * (c2 + ... x * c_{n-1}))
    /// ```
    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
    }

    /// Zeroes coefficients whose magnitude is at most
    /// `rel_tol * max |c_k|`, then drops vanished high powers.
    ///
    /// Used to strip cancellation residue, e.g. the `x^2` term left over
    /// when three collinear points are interpolated.
    pub fn normalized(&self, rel_tol: f64) -> Self {
        let scale = self.coeffs.iter().fold(0.0_f64, |m, c| m.max(c.abs()));
        if scale == 0.0 {
            return Self::zero();
        }

        let cutoff = rel_tol * scale;
        let mut coeffs: Vec<f64> = self.coeffs
            .iter()
            .map(|&c| if c.abs() <= cutoff { 0.0 } else { c })
            .collect();

        while coeffs.len() > 1 && coeffs[coeffs.len() - 1] == 0.0 {
            coeffs.pop();
        }

        Self { coeffs }
    }
}

impl Default for Polynomial {
    fn default() -> Self { Self::zero() }
}


impl Add<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    /// Sum aligned by power; result length is the longer of the two.
    fn add(self, rhs: &Polynomial) -> Polynomial {
        let (long, short) = if self.coeffs.len() >= rhs.coeffs.len() {
            (&self.coeffs, &rhs.coeffs)
        } else {
            (&rhs.coeffs, &self.coeffs)
        };

        let mut coeffs = long.clone();
        for (acc, &c) in coeffs.iter_mut().zip(short.iter()) {
            *acc += c;
        }

        Polynomial { coeffs }
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Polynomial) -> Polynomial { &self + &rhs }
}

impl Mul<f64> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, k: f64) -> Polynomial { self.scale(k) }
}

impl Mul<f64> for Polynomial {
    type Output = Polynomial;

    fn mul(self, k: f64) -> Polynomial { self.scale(k) }
}
