use crate::{error::GfError, traits::Vectorized};
use anyhow::Result;
use num_complex::Complex64;
use num_traits::Zero;
use rustfft::FftPlanner;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::{debug, warn};

/// How the estimator reacts to sampling that cannot produce a trustworthy estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StabilityGuard {
    /// Trust the caller's radius and step.
    #[default]
    Off,
    /// Log the problem and carry on.
    Warn,
    /// Fail with a `GfError`.
    Strict,
}

/// Sampling parameters for the circular contour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContourSettings {
    /// Radius of the circle around the evaluation point.
    pub radius: f64,
    /// Angular step as a fraction of a full turn.
    pub step: f64,
    pub guard: StabilityGuard,
}

impl Default for ContourSettings {
    fn default() -> Self {
        Self {
            radius: 1.0,
            step: 1e-2,
            guard: StabilityGuard::Off,
        }
    }
}

impl ContourSettings {
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn with_guard(mut self, guard: StabilityGuard) -> Self {
        self.guard = guard;
        self
    }

    /// Number of points sampled on the contour, `ceil(1 / step)`.
    pub fn sample_count(&self) -> Result<usize> {
        if !(self.step > 0.0 && self.step.is_finite()) {
            return Err(GfError::InvalidStep(self.step).into());
        }
        let samples = (1.0 / self.step).ceil();
        if !samples.is_finite() || samples > usize::MAX as f64 {
            return Err(GfError::InvalidStep(self.step).into());
        }
        Ok(samples as usize)
    }

    /// Whether `ceil(1 / step)` samples at `2πk·step` cover exactly one turn, so they
    /// coincide with the evenly spaced points `2πk/K`.
    pub fn closes_evenly(&self) -> bool {
        match self.sample_count() {
            Ok(samples) => (samples as f64 * self.step - 1.0).abs() <= 4.0 * f64::EPSILON,
            Err(_) => false,
        }
    }

    fn check_radius(&self) -> Result<()> {
        if self.radius == 0.0 {
            return Err(GfError::ZeroRadius.into());
        }
        if !self.radius.is_finite() {
            return Err(GfError::InvalidRadius(self.radius).into());
        }
        Ok(())
    }

    /// Offsets `r * exp(2πi * k * step)` for `k = 0..ceil(1 / step)`.
    pub fn offsets(&self) -> Result<Vec<Complex64>> {
        self.check_radius()?;
        let samples = self.sample_count()?;
        Ok((0..samples)
            .map(|k| Complex64::from_polar(self.radius, 2.0 * PI * k as f64 * self.step))
            .collect())
    }
}

pub fn factorial(n: usize) -> f64 {
    (1..=n).map(|k| k as f64).product()
}

/// Discretized Cauchy integral without the factorial weight:
/// `mean_k f(z + x_k) / x_k^n`.
pub fn contour_mean<V: Vectorized + ?Sized>(
    f: &V,
    z: Complex64,
    n: usize,
    settings: &ContourSettings,
) -> Result<Complex64> {
    let offsets = settings.offsets()?;
    let samples = offsets.len();
    if n >= samples {
        enforce(settings.guard, GfError::Undersampled { order: n, samples })?;
    }

    let points: Vec<Complex64> = offsets.iter().map(|x| z + x).collect();
    let mut values = vec![Complex64::zero(); samples];
    f.apply(&points, &mut values)?;
    check_values(settings.guard, &values)?;

    let order = u32::try_from(n)?;
    let sum: Complex64 = values
        .iter()
        .zip(&offsets)
        .map(|(value, x)| *value / x.powu(order))
        .sum();
    debug!(%z, order = n, radius = settings.radius, samples, "evaluated contour mean");
    Ok(sum / samples as f64)
}

/// Estimates the `n`-th derivative of `f` at `z` from samples on a circle of radius
/// `settings.radius`:
///
///   f^(n)(z) ≈ n! · mean_k f(z + x_k) / x_k^n
///
/// Accuracy depends on the circle staying inside the region where `f` is analytic
/// and on the step being fine enough for the order. Neither is checked unless a
/// `StabilityGuard` is set.
///
/// The weight `n!` is an `f64`, so orders above 170 fail with
/// `GfError::FactorialOverflow`. Use `contour_mean` for the unweighted value.
pub fn differentiate<V: Vectorized + ?Sized>(
    f: &V,
    z: Complex64,
    n: usize,
    settings: &ContourSettings,
) -> Result<Complex64> {
    let weight = factorial(n);
    if !weight.is_finite() {
        return Err(GfError::FactorialOverflow { order: n }.into());
    }
    Ok(contour_mean(f, z, n, settings)? * weight)
}

/// Recovers `a_0..a_{count-1}` of the series at the origin from one batch of samples.
///
/// Samples sit at `2πk/K` with `K = ceil(1 / step)`, so a forward FFT of the values
/// gives every coefficient at once: `a_n = Re(F_n) / (K r^n)`. These match the
/// per-index estimate only when `settings.closes_evenly()`.
pub fn fft_coefficients<V: Vectorized + ?Sized>(
    f: &V,
    count: usize,
    settings: &ContourSettings,
) -> Result<Vec<f64>> {
    settings.check_radius()?;
    let samples = settings.sample_count()?;
    if count > samples {
        return Err(GfError::TooManyCoefficients {
            requested: count,
            samples,
        }
        .into());
    }

    let points: Vec<Complex64> = (0..samples)
        .map(|k| Complex64::from_polar(settings.radius, 2.0 * PI * k as f64 / samples as f64))
        .collect();
    let mut values = vec![Complex64::zero(); samples];
    f.apply(&points, &mut values)?;
    check_values(settings.guard, &values)?;

    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(samples);
    fft.process(&mut values);
    debug!(count, radius = settings.radius, samples, "extracted coefficients by FFT");

    let scale = samples as f64;
    let mut radius_power = 1.0;
    let mut coefficients = Vec::with_capacity(count);
    for value in values.iter().take(count) {
        coefficients.push(value.re / (scale * radius_power));
        radius_power *= settings.radius;
    }
    Ok(coefficients)
}

fn check_values(guard: StabilityGuard, values: &[Complex64]) -> Result<()> {
    if guard == StabilityGuard::Off {
        return Ok(());
    }
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => enforce(guard, GfError::NonFiniteSample { index }),
        None => Ok(()),
    }
}

fn enforce(guard: StabilityGuard, violation: GfError) -> Result<()> {
    match guard {
        StabilityGuard::Off => Ok(()),
        StabilityGuard::Warn => {
            warn!("{violation}");
            Ok(())
        }
        StabilityGuard::Strict => Err(violation.into()),
    }
}
