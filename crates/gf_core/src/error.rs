use thiserror::Error;

/// Failures raised by the contour estimator itself, as opposed to failures of the
/// user function, which propagate unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GfError {
    #[error("Contour radius must be non-zero.")]
    ZeroRadius,
    #[error("Contour radius must be finite, got {0}.")]
    InvalidRadius(f64),
    #[error("Angular step must be positive and finite, got {0}.")]
    InvalidStep(f64),
    #[error("Buffer length mismatch. Expected {expected}, got {actual}.")]
    BufferLength { expected: usize, actual: usize },
    #[error("Derivative order {order} needs more than {samples} contour samples.")]
    Undersampled { order: usize, samples: usize },
    #[error("Non-finite function value at contour sample {index}.")]
    NonFiniteSample { index: usize },
    #[error("Requested {requested} coefficients from only {samples} contour samples.")]
    TooManyCoefficients { requested: usize, samples: usize },
    #[error("Factorial weight for derivative order {order} overflows f64.")]
    FactorialOverflow { order: usize },
}
