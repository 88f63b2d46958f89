//! Property tests: coefficients recovered from the contour estimator match the series
//! they were built from.

use gf_core::{ContinuousGF, ContourSettings, GeneratingFunction};
use num_complex::Complex64;
use proptest::prelude::*;

fn horner(coefficients: &[f64], z: Complex64) -> Complex64 {
    coefficients
        .iter()
        .rev()
        .fold(Complex64::new(0.0, 0.0), |acc, &c| acc * z + c)
}

fn arb_polynomial() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-10.0f64..10.0, 1..9)
}

proptest! {
    /// Every coefficient of a modest-degree polynomial comes back, and higher ones vanish.
    #[test]
    fn polynomial_coefficients_are_recovered(coefficients in arb_polynomial()) {
        let owned = coefficients.clone();
        let gf = ContinuousGF::new(move |z: Complex64| horner(&owned, z));
        for (i, &c) in coefficients.iter().enumerate() {
            prop_assert!((gf.coefficient(i).unwrap() - c).abs() < 1e-6);
        }
        for i in coefficients.len()..coefficients.len() + 4 {
            prop_assert!(gf.coefficient(i).unwrap().abs() < 1e-6);
        }
    }

    /// The batched FFT path agrees with the per-index estimator.
    #[test]
    fn batched_extraction_matches_polynomial(coefficients in arb_polynomial()) {
        let owned = coefficients.clone();
        let gf = ContinuousGF::new(move |z: Complex64| horner(&owned, z));
        let batch = gf.coefficients(coefficients.len() + 2).unwrap();
        for (i, &c) in coefficients.iter().enumerate() {
            prop_assert!((batch[i] - c).abs() < 1e-6);
        }
        prop_assert!(batch[coefficients.len()].abs() < 1e-6);
    }

    /// Evaluation is direct application, never a series reconstruction.
    #[test]
    fn evaluate_matches_direct_application(x in -5.0f64..5.0) {
        let f = |z: Complex64| (Complex64::i() * z).exp() + z.sinh();
        let gf = ContinuousGF::new(f);
        prop_assert_eq!(gf.evaluate(x).unwrap(), f(Complex64::new(x, 0.0)).re);
    }

    /// Inside the radius of convergence a truncated series reproduces the function.
    #[test]
    fn truncated_series_matches_geometric(x in -0.4f64..0.4) {
        let gf = ContinuousGF::new(|z: Complex64| (Complex64::new(1.0, 0.0) - z).inv())
            .with_settings(ContourSettings::default().with_radius(0.5));
        let series = gf.truncated_sum(x, 40).unwrap();
        prop_assert!((series - gf.evaluate(x).unwrap()).abs() < 1e-6);
    }
}

#[test]
fn shared_across_threads() {
    let gf = ContinuousGF::new(|z: Complex64| z.exp());
    let expected: Vec<f64> = (0..6).map(|i| gf.coefficient(i).unwrap()).collect();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| (0..6).map(|i| gf.coefficient(i).unwrap()).collect::<Vec<_>>()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
