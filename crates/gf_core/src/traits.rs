use anyhow::Result;
use num_complex::Complex64;

/// A power series `f(x) = Σ a_i x^i` that can report its coefficients and be evaluated.
///
/// Continuous and discrete representations are interchangeable behind this trait.
pub trait GeneratingFunction {
    /// Returns the coefficient `a_i` of `x^i`.
    fn coefficient(&self, i: usize) -> Result<f64>;

    /// Evaluates the generating function at a real point.
    fn evaluate(&self, x: f64) -> Result<f64>;

    /// Returns `a_0, ..., a_{count-1}`.
    fn coefficients(&self, count: usize) -> Result<Vec<f64>> {
        (0..count).map(|i| self.coefficient(i)).collect()
    }

    /// Sums the first `terms` terms of the series at `x`.
    fn truncated_sum(&self, x: f64, terms: usize) -> Result<f64> {
        let mut sum = 0.0;
        let mut power = 1.0;
        for i in 0..terms {
            sum += self.coefficient(i)? * power;
            power *= x;
        }
        Ok(sum)
    }
}

/// A scalar function that can be applied elementwise to a batch of complex points.
pub trait Vectorized {
    /// Evaluates the function at every point.
    /// points: sample points
    /// out: buffer to write the results (same length as `points`)
    fn apply(&self, points: &[Complex64], out: &mut [Complex64]) -> Result<()>;
}

impl<V: Vectorized + ?Sized> Vectorized for &V {
    fn apply(&self, points: &[Complex64], out: &mut [Complex64]) -> Result<()> {
        (**self).apply(points, out)
    }
}

impl<V: Vectorized + ?Sized> Vectorized for Box<V> {
    fn apply(&self, points: &[Complex64], out: &mut [Complex64]) -> Result<()> {
        (**self).apply(points, out)
    }
}
