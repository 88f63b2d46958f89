use crate::{error::GfError, traits::Vectorized};
use anyhow::{Context, Result};
use num_complex::Complex64;

/// Lifts an infallible scalar function to batched elementwise application.
#[derive(Clone, Copy)]
pub struct Elementwise<F> {
    f: F,
}

impl<F> Elementwise<F>
where
    F: Fn(Complex64) -> Complex64,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> Vectorized for Elementwise<F>
where
    F: Fn(Complex64) -> Complex64,
{
    fn apply(&self, points: &[Complex64], out: &mut [Complex64]) -> Result<()> {
        check_lengths(points, out)?;
        for (slot, &z) in out.iter_mut().zip(points) {
            *slot = (self.f)(z);
        }
        Ok(())
    }
}

/// Lifts a fallible scalar function to batched elementwise application.
/// The first failing point aborts the batch.
#[derive(Clone, Copy)]
pub struct FallibleElementwise<F> {
    f: F,
}

impl<F> FallibleElementwise<F>
where
    F: Fn(Complex64) -> Result<Complex64>,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> Vectorized for FallibleElementwise<F>
where
    F: Fn(Complex64) -> Result<Complex64>,
{
    fn apply(&self, points: &[Complex64], out: &mut [Complex64]) -> Result<()> {
        check_lengths(points, out)?;
        for (slot, &z) in out.iter_mut().zip(points) {
            *slot = (self.f)(z).with_context(|| format!("Function evaluation failed at {z}."))?;
        }
        Ok(())
    }
}

fn check_lengths(points: &[Complex64], out: &[Complex64]) -> Result<()> {
    if points.len() != out.len() {
        return Err(GfError::BufferLength {
            expected: points.len(),
            actual: out.len(),
        }
        .into());
    }
    Ok(())
}
