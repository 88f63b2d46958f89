use crate::{
    contour::{self, ContourSettings},
    traits::{GeneratingFunction, Vectorized},
    vectorize::{Elementwise, FallibleElementwise},
};
use anyhow::Result;
use num_complex::Complex64;
use num_traits::Zero;

/// A generating function defined by an analytic function rather than a coefficient list.
///
/// Coefficients are recovered numerically with a Cauchy contour integral around the
/// origin, so `f` is sampled off the real axis and must be written with complex
/// arithmetic (`Complex64::exp`, not `f64::exp`). It must also be analytic on and
/// inside the contour described by the settings.
///
/// The function is vectorized once at construction and never re-wrapped.
pub struct ContinuousGF<V> {
    f: V,
    settings: ContourSettings,
}

impl<F> ContinuousGF<Elementwise<F>>
where
    F: Fn(Complex64) -> Complex64,
{
    pub fn new(f: F) -> Self {
        Self::from_vectorized(Elementwise::new(f))
    }
}

impl<F> ContinuousGF<FallibleElementwise<F>>
where
    F: Fn(Complex64) -> Result<Complex64>,
{
    /// Builds from a function that may fail; failures propagate out of every
    /// operation that samples it.
    pub fn try_new(f: F) -> Self {
        Self::from_vectorized(FallibleElementwise::new(f))
    }
}

impl<V: Vectorized> ContinuousGF<V> {
    /// Uses a function that already supports batched application as-is.
    pub fn from_vectorized(f: V) -> Self {
        Self {
            f,
            settings: ContourSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: ContourSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &ContourSettings {
        &self.settings
    }

    /// The `n`-th derivative at `z` using explicit contour settings.
    pub fn differentiate(
        &self,
        z: Complex64,
        n: usize,
        settings: &ContourSettings,
    ) -> Result<Complex64> {
        contour::differentiate(&self.f, z, n, settings)
    }

    /// The `n`-th derivative at `z` using the stored settings.
    pub fn derivative(&self, z: Complex64, n: usize) -> Result<Complex64> {
        self.differentiate(z, n, &self.settings)
    }

    /// Applies the function directly at a complex point.
    pub fn evaluate_complex(&self, z: Complex64) -> Result<Complex64> {
        let mut out = [Complex64::zero()];
        self.f.apply(&[z], &mut out)?;
        Ok(out[0])
    }
}

impl<V: Vectorized> GeneratingFunction for ContinuousGF<V> {
    fn coefficient(&self, i: usize) -> Result<f64> {
        // a_i = f^(i)(0) / i!; the factorial weight cancels, so skip it.
        let mean = contour::contour_mean(&self.f, Complex64::zero(), i, &self.settings)?;
        Ok(mean.re)
    }

    fn evaluate(&self, x: f64) -> Result<f64> {
        Ok(self.evaluate_complex(Complex64::new(x, 0.0))?.re)
    }

    /// Uses one FFT over the contour when its samples coincide with the per-index
    /// estimator's and cover every requested index; otherwise one estimate per index.
    fn coefficients(&self, count: usize) -> Result<Vec<f64>> {
        let samples = self.settings.sample_count()?;
        if self.settings.closes_evenly() && count <= samples {
            contour::fft_coefficients(&self.f, count, &self.settings)
        } else {
            (0..count).map(|i| self.coefficient(i)).collect()
        }
    }
}
