//! Regression targets: `(x, y_true)` pairs and synthetic noisy data.

use ndarray::Array1;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{FitError, Result};
use crate::polynomial::Polynomial;

/// Fixed `(x, y_true)` targets of a fit, stored column-wise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleSet {
    xs: Array1<f64>,
    ys: Array1<f64>,
}

impl SampleSet {
    /// Creates a sample set from equal-length columns.
    ///
    /// # Errors
    ///
    /// Returns `FitError::SampleLengthMismatch` if the columns differ in length.
    pub fn new(xs: Array1<f64>, ys: Array1<f64>) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(FitError::SampleLengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        Ok(Self { xs, ys })
    }

    /// Samples `poly` exactly at `xs`.
    pub fn from_polynomial(poly: &Polynomial, xs: Array1<f64>) -> Self {
        let ys = poly.evaluate(&xs);
        Self { xs, ys }
    }

    /// Adds uniform noise to every target, drawn between `floor(-s / 2)` (inclusive)
    /// and `floor(s / 2)` (exclusive) with `s = noise_scale`.
    ///
    /// The range is not symmetric for odd or fractional scales: `s = 3` gives
    /// `[-2, 1)` and `s = 1.5` gives `[-1, 0)`. A negative scale swaps the ends.
    /// An empty range (`s = 0`) or a non-finite scale leaves the targets untouched.
    pub fn with_uniform_noise<R: Rng + ?Sized>(mut self, noise_scale: f64, rng: &mut R) -> Self {
        let low = (-noise_scale / 2.0).floor();
        let high = (noise_scale / 2.0).floor();
        if low.is_finite() && high.is_finite() && low != high {
            self.ys
                .mapv_inplace(|y| y + low + (high - low) * rng.random::<f64>());
        }
        self
    }

    /// Abscissas.
    pub fn xs(&self) -> &Array1<f64> {
        &self.xs
    }

    /// Targets.
    pub fn ys(&self) -> &Array1<f64> {
        &self.ys
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns `true` when no samples are present.
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Iterates over `(x, y_true)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }
}

/// `n` evenly spaced points over `[start, stop]`, both ends included.
pub fn linspace(start: f64, stop: f64, n: usize) -> Array1<f64> {
    match n {
        0 => Array1::zeros(0),
        1 => Array1::from(vec![start]),
        _ => Array1::linspace(start, stop, n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_length_mismatch() {
        let err = SampleSet::new(array![1.0, 2.0], array![1.0]).unwrap_err();
        assert_eq!(err, FitError::SampleLengthMismatch { xs: 2, ys: 1 });
    }

    #[test]
    fn test_empty_set_is_allowed_here() {
        let s = SampleSet::new(Array1::zeros(0), Array1::zeros(0)).unwrap();
        assert!(s.is_empty());
    }

    #[test]
    fn test_linspace_inclusive() {
        let xs = linspace(-3.0, 3.0, 7);
        assert_eq!(xs.len(), 7);
        assert_abs_diff_eq!(xs[0], -3.0);
        assert_abs_diff_eq!(xs[3], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(xs[6], 3.0, epsilon = 1e-12);
        assert_eq!(linspace(1.0, 2.0, 1), array![1.0]);
        assert!(linspace(1.0, 2.0, 0).is_empty());
    }

    #[test]
    fn test_from_polynomial() {
        let p: Polynomial = "1 0 -1".parse().unwrap();
        let s = SampleSet::from_polynomial(&p, array![-2.0, -1.0, 0.0, 1.0, 2.0]);
        assert_eq!(s.ys(), &array![3.0, 0.0, -1.0, 0.0, 3.0]);
        assert_eq!(s.iter().nth(2), Some((0.0, -1.0)));
    }

    #[test]
    fn test_uniform_noise_range() {
        let p: Polynomial = "2 1".parse().unwrap();
        let clean = SampleSet::from_polynomial(&p, linspace(-3.0, 3.0, 40));
        let mut rng = StdRng::seed_from_u64(7);
        let noisy = clean.clone().with_uniform_noise(4.0, &mut rng);
        assert_eq!(noisy.xs(), clean.xs());
        for (n, c) in noisy.ys().iter().zip(clean.ys().iter()) {
            let d = n - c;
            assert!((-2.0..2.0).contains(&d), "noise {d} outside [-2, 2)");
        }
        assert_ne!(noisy.ys(), clean.ys());
    }

    fn noise_of(scale: f64, seed: u64) -> Vec<f64> {
        let zero = Polynomial::from(vec![0.0]);
        let clean = SampleSet::from_polynomial(&zero, linspace(0.0, 1.0, 400));
        let mut rng = StdRng::seed_from_u64(seed);
        clean.with_uniform_noise(scale, &mut rng).ys().to_vec()
    }

    fn min_max(values: &[f64]) -> (f64, f64) {
        values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }

    #[test]
    fn test_odd_noise_scale_is_skewed_low() {
        // floor(-1.5) = -2, floor(1.5) = 1
        let noise = noise_of(3.0, 11);
        assert!(noise.iter().all(|d| (-2.0..1.0).contains(d)));
        let (lo, hi) = min_max(&noise);
        assert!(lo < -1.5, "lower tail not reached: {lo}");
        assert!(hi > 0.5, "upper tail not reached: {hi}");
    }

    #[test]
    fn test_fractional_noise_scale_is_negative_only() {
        // floor(-0.75) = -1, floor(0.75) = 0
        let noise = noise_of(1.5, 5);
        assert!(noise.iter().all(|d| (-1.0..0.0).contains(d)));
        let (lo, _) = min_max(&noise);
        assert!(lo < -0.5);
    }

    #[test]
    fn test_negative_noise_scale_swaps_ends() {
        // floor(1.5) = 1, floor(-1.5) = -2
        let noise = noise_of(-3.0, 2);
        assert!(noise.iter().all(|&d| d > -2.0 && d <= 1.0));
        assert!(noise.iter().any(|&d| d != 0.0));
    }

    #[test]
    fn test_zero_noise_scale_is_noop() {
        let p: Polynomial = "1".parse().unwrap();
        let clean = SampleSet::from_polynomial(&p, linspace(0.0, 1.0, 5));
        let mut rng = StdRng::seed_from_u64(1);
        let noisy = clean.clone().with_uniform_noise(0.0, &mut rng);
        assert_eq!(noisy, clean);
    }
}
