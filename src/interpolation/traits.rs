use crate::polynomial::Polynomial;

pub trait Interpolator {
    /// evaluates single point
    fn eval(&self, x: f64) -> f64;

    /// evaluates many points
    #[inline]
    fn eval_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&xq| self.eval(xq)).collect()
    }
}

impl Interpolator for Polynomial {
    #[inline]
    fn eval(&self, x: f64) -> f64 { self.evaluate(x) }
}
