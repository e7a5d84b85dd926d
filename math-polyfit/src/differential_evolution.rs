use crate::engine::FitRun;
use crate::{FitReport, PolyFitConfig, Result, SampleSet};

/// Fits `config.dimension` polynomial coefficients to `samples`.
///
/// Convenience wrapper that builds a [`FitRun`] and drives it to completion.
/// Progress snapshots are not surfaced here; iterate a [`FitRun`] directly
/// to observe them.
///
/// # Errors
///
/// Returns the configuration or sample errors reported by [`FitRun::new`].
///
/// # Example
///
/// ```rust
/// use math_audio_polyfit::{Bounds, PolyFitConfigBuilder, SampleSet, differential_evolution};
/// use ndarray::array;
///
/// let samples = SampleSet::new(array![-1.0, 0.0, 1.0, 2.0], array![-1.0, 1.0, 3.0, 5.0]).unwrap();
/// let config = PolyFitConfigBuilder::new()
///     .dimension(2)
///     .bounds(Bounds::new(-5.0, 5.0).unwrap())
///     .popsize(30)
///     .maxiter(150)
///     .seed(42)
///     .build()
///     .expect("invalid config");
///
/// let report = differential_evolution(&samples, config).expect("fit failed");
/// assert!(report.fun < 0.1);
/// ```
pub fn differential_evolution(samples: &SampleSet, config: PolyFitConfig) -> Result<FitReport> {
    Ok(FitRun::new(samples, config)?.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Bounds, FitError, PolyFitConfigBuilder};
    use ndarray::{Array1, array};

    #[test]
    fn test_line_fit() {
        let samples =
            SampleSet::new(array![-1.0, 0.0, 1.0, 2.0], array![-1.0, 1.0, 3.0, 5.0]).unwrap();
        let config = PolyFitConfigBuilder::new()
            .dimension(2)
            .bounds(Bounds::new(-5.0, 5.0).unwrap())
            .popsize(30)
            .maxiter(150)
            .seed(42)
            .build()
            .unwrap();
        let report = differential_evolution(&samples, config).unwrap();
        assert!(report.fun < 0.1, "f={}", report.fun);
        assert!((report.x[0] - 2.0).abs() < 0.2);
        assert!((report.x[1] - 1.0).abs() < 0.2);
    }

    #[test]
    fn test_empty_samples_rejected() {
        let samples = SampleSet::new(Array1::zeros(0), Array1::zeros(0)).unwrap();
        let err = differential_evolution(&samples, PolyFitConfigBuilder::new().build().unwrap())
            .unwrap_err();
        assert_eq!(err, FitError::EmptySampleSet);
    }
}
