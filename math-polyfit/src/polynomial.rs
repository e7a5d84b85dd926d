//! Polynomial model: coefficient vectors evaluated at sample abscissas.
//!
//! Coefficients are ordered from the highest degree down to the constant
//! term, so `[1, 0, -1]` is `x^2 - 1`.

use std::fmt;
use std::str::FromStr;

use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::error::{FitError, Result};

/// Evaluates `sum_i coeffs[i] * x^(D-1-i)` at a single point (Horner scheme).
///
/// An empty coefficient vector is the zero polynomial.
pub fn evaluate_at(coeffs: ArrayView1<'_, f64>, x: f64) -> f64 {
    coeffs.iter().fold(0.0, |acc, &c| acc * x + c)
}

/// Evaluates the polynomial at every element of `xs`.
pub fn evaluate(coeffs: ArrayView1<'_, f64>, xs: ArrayView1<'_, f64>) -> Array1<f64> {
    xs.mapv(|x| evaluate_at(coeffs, x))
}

/// A polynomial given by its coefficients, highest degree first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polynomial {
    coeffs: Array1<f64>,
}

impl Polynomial {
    /// Wraps a coefficient vector.
    pub fn new(coeffs: Array1<f64>) -> Self {
        Self { coeffs }
    }

    /// Coefficients, highest degree first.
    pub fn coefficients(&self) -> &Array1<f64> {
        &self.coeffs
    }

    /// Number of coefficients (degree + 1).
    pub fn dimension(&self) -> usize {
        self.coeffs.len()
    }

    /// Polynomial degree; `None` for the empty polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    /// Value at a single point.
    pub fn evaluate_at(&self, x: f64) -> f64 {
        evaluate_at(self.coeffs.view(), x)
    }

    /// Values at every point of `xs`.
    pub fn evaluate(&self, xs: &Array1<f64>) -> Array1<f64> {
        evaluate(self.coeffs.view(), xs.view())
    }
}

impl From<Vec<f64>> for Polynomial {
    fn from(coeffs: Vec<f64>) -> Self {
        Self::new(Array1::from(coeffs))
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.coeffs.len();
        if d == 0 {
            return write!(f, "0");
        }
        for (i, &c) in self.coeffs.iter().enumerate() {
            let power = d - 1 - i;
            if i == 0 {
                write!(f, "{c}")?;
            } else if c < 0.0 {
                write!(f, " - {}", -c)?;
            } else {
                write!(f, " + {c}")?;
            }
            match power {
                0 => {}
                1 => write!(f, "x")?,
                p => write!(f, "x^{p}")?,
            }
        }
        Ok(())
    }
}

/// Parses a whitespace-separated coefficient list such as `"5 -20 5 50"`.
impl FromStr for Polynomial {
    type Err = FitError;

    fn from_str(s: &str) -> Result<Self> {
        let coeffs = s
            .split_whitespace()
            .map(|tok| {
                tok.parse::<f64>()
                    .map_err(|e| FitError::Parse(format!("coefficient '{tok}': {e}")))
            })
            .collect::<Result<Vec<f64>>>()?;
        if coeffs.is_empty() {
            return Err(FitError::Parse("no coefficients given".into()));
        }
        Ok(Self::from(coeffs))
    }
}
