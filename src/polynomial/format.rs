//! Human-readable rendering of a [`Polynomial`].
//!
//! Terms run from the highest power down, joined by `" + "`:
//!
//! ```text
//! 1.0 * x^2 + -3.0 * x + 2.0
//! ```
//!
//! Negative coefficients are not folded into `" - "`. Exactly-zero
//! terms are skipped; the zero polynomial prints its constant term.
//! A formatter precision (`{:.3}`) applies to every coefficient.

use std::fmt;

use crate::polynomial::Polynomial;


fn write_coeff(f: &mut fmt::Formatter<'_>, c: f64) -> fmt::Result {
    match f.precision() {
        Some(prec) => write!(f, "{:.*}", prec, c),
        // `{:?}` keeps the trailing `.0` on integral values
        None => write!(f, "{:?}", c),
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let coeffs = self.coefficients();
        let mut first = true;

        for (power, &c) in coeffs.iter().enumerate().rev() {
            if c == 0.0 {
                continue;
            }
            if !first {
                f.write_str(" + ")?;
            }
            first = false;

            write_coeff(f, c)?;
            match power {
                0 => {}
                1 => f.write_str(" * x")?,
                _ => write!(f, " * x^{}", power)?,
            }
        }

        if first {
            write_coeff(f, 0.0)?;
        }
        Ok(())
    }
}
