//! Plain-language description of the Lagrange method, shown by
//! `--explain` and at the start of an interactive session.

pub const EXPLANATION: &str = "\
Lagrange Polynomial Explained

What is a Lagrange polynomial?
  Interpolation finds a curve that passes exactly through a set of given
  points. The Lagrange polynomial is the unique polynomial of lowest degree
  that does so: n points with distinct x-values give degree at most n - 1.

How does it work?
  1. For each point, build a basis polynomial that equals 1 at that point's
     x-value and 0 at the x-value of every other point.
  2. Multiply each basis polynomial by its point's y-value and add them all
     together. The sum is the Lagrange polynomial.

Example
  The points (1, 2), (2, 3) and (3, 4) lie on a line, so their Lagrange
  polynomial is 1.0 * x + 1.0. It can be used to estimate values between
  1 and 3; outside that range nothing is promised.

Why it matters
  Polynomial interpolation is used in physics, engineering and computer
  graphics to approximate functions and estimate values between
  measurements.
";
