//! Objective function: mean absolute error between a candidate curve and
//! the sample targets.

use std::cell::Cell;

use ndarray::ArrayView1;

use crate::error::{FitError, Result};
use crate::polynomial::evaluate_at;
use crate::samples::SampleSet;

/// Mean absolute error of `coeffs` against `(xs, y_true)`.
///
/// # Errors
///
/// Returns `FitError::EmptySampleSet` if `y_true` is empty and
/// `FitError::SampleLengthMismatch` if the columns differ in length.
pub fn mean_absolute_error(
    coeffs: ArrayView1<'_, f64>,
    xs: ArrayView1<'_, f64>,
    y_true: ArrayView1<'_, f64>,
) -> Result<f64> {
    if y_true.is_empty() {
        return Err(FitError::EmptySampleSet);
    }
    if xs.len() != y_true.len() {
        return Err(FitError::SampleLengthMismatch {
            xs: xs.len(),
            ys: y_true.len(),
        });
    }
    Ok(mae_unchecked(coeffs, xs, y_true))
}

fn mae_unchecked(
    coeffs: ArrayView1<'_, f64>,
    xs: ArrayView1<'_, f64>,
    ys: ArrayView1<'_, f64>,
) -> f64 {
    let total: f64 = xs
        .iter()
        .zip(ys.iter())
        .map(|(&x, &y)| (y - evaluate_at(coeffs, x)).abs())
        .sum();
    total / ys.len() as f64
}

/// Mean-absolute-error objective over a borrowed sample set.
///
/// Construction rejects an empty sample set, so evaluation itself never fails.
#[derive(Debug)]
pub struct Objective<'a> {
    samples: &'a SampleSet,
    nfev: Cell<usize>,
}

impl<'a> Objective<'a> {
    /// Builds the objective.
    ///
    /// # Errors
    ///
    /// Returns `FitError::EmptySampleSet` if `samples` holds no points.
    pub fn new(samples: &'a SampleSet) -> Result<Self> {
        if samples.is_empty() {
            return Err(FitError::EmptySampleSet);
        }
        Ok(Self {
            samples,
            nfev: Cell::new(0),
        })
    }

    /// Fitness of a candidate; lower is better and 0 is an exact fit.
    pub fn fitness(&self, coeffs: ArrayView1<'_, f64>) -> f64 {
        self.nfev.set(self.nfev.get() + 1);
        mae_unchecked(coeffs, self.samples.xs().view(), self.samples.ys().view())
    }

    /// Number of fitness evaluations performed so far.
    pub fn nfev(&self) -> usize {
        self.nfev.get()
    }

    /// The borrowed targets.
    pub fn samples(&self) -> &'a SampleSet {
        self.samples
    }
}
