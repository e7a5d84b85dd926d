//! Uniform coefficient bounds shared by every dimension.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FitError, Result};

/// Search interval applied to every coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Lower bound (inclusive)
    pub low: f64,
    /// Upper bound (inclusive for clipping, exclusive for sampling)
    pub high: f64,
}

impl Bounds {
    /// Creates validated bounds.
    ///
    /// # Errors
    ///
    /// Returns `FitError::InvalidBounds` unless both values are finite, `low < high`
    /// and the width `high - low` is itself finite.
    pub fn new(low: f64, high: f64) -> Result<Self> {
        let finite = low.is_finite() && high.is_finite() && (high - low).is_finite();
        if !finite || low >= high {
            return Err(FitError::InvalidBounds { low, high });
        }
        Ok(Self { low, high })
    }

    /// Symmetric bounds `[-half_width, half_width]`.
    pub fn symmetric(half_width: f64) -> Result<Self> {
        Self::new(-half_width, half_width)
    }

    /// Width of the interval.
    pub fn span(&self) -> f64 {
        self.high - self.low
    }

    /// Check if a value is within the closed interval.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }

    /// Clamp a value into the closed interval.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.low, self.high)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        Self::new(self.low, self.high).map(|_| ())
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            low: -50.0,
            high: 50.0,
        }
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

/// Parses a `"low high"` pair.
impl FromStr for Bounds {
    type Err = FitError;

    fn from_str(s: &str) -> Result<Self> {
        let values = s
            .split_whitespace()
            .map(|tok| {
                tok.parse::<f64>()
                    .map_err(|e| FitError::Parse(format!("bound '{tok}': {e}")))
            })
            .collect::<Result<Vec<f64>>>()?;
        match values.as_slice() {
            [low, high] => Self::new(*low, *high),
            _ => Err(FitError::Parse(format!(
                "expected two bounds 'low high', got {} value(s)",
                values.len()
            ))),
        }
    }
}
