pub mod continuous;
pub mod contour;
pub mod error;
pub mod vectorize;
/// The `gf_core` crate turns an analytic function into a generating function whose
/// power-series coefficients are recovered numerically.
/// No symbolic differentiation is involved: derivatives come from sampling the function
/// on a circle in the complex plane and applying a discretized Cauchy integral.
///
/// Key components:
/// - **Traits**: `GeneratingFunction` (coefficient/evaluate contract), `Vectorized` (batched application).
/// - **Vectorize**: Elementwise adapters lifting scalar closures to batched form.
/// - **Contour**: Sampling settings, the Cauchy derivative estimator, and FFT batch extraction.
/// - **Continuous**: `ContinuousGF`, the function-backed generating function.
pub mod traits;

pub use continuous::ContinuousGF;
pub use contour::{ContourSettings, StabilityGuard};
pub use error::GfError;
pub use traits::{GeneratingFunction, Vectorized};
