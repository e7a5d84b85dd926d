//! Error types for the polynomial fitting engine.
//!
//! Configuration problems are reported before the first generation runs.
//! Numeric trouble met during a run is counted and surfaced through the
//! progress snapshots instead of aborting the loop.

use thiserror::Error;

/// Errors that can occur while configuring or running a polynomial fit.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FitError {
    /// Population size must be strictly positive.
    #[error("invalid population size: {pop_size} (must be > 0)")]
    InvalidPopulationSize {
        /// The invalid population size
        pop_size: usize,
    },

    /// Number of coefficients must be strictly positive.
    #[error("invalid dimension: {dimension} (must be > 0)")]
    InvalidDimension {
        /// The invalid dimension
        dimension: usize,
    },

    /// Bounds must be finite with low < high.
    #[error("invalid bounds: low ({low}) must be < high ({high})")]
    InvalidBounds {
        /// Lower bound
        low: f64,
        /// Upper bound
        high: f64,
    },

    /// The sample set holds no points.
    #[error("sample set is empty")]
    EmptySampleSet,

    /// x and y arrays of a sample set have different lengths.
    #[error("sample length mismatch: {xs} x values, {ys} y values")]
    SampleLengthMismatch {
        /// Number of x values
        xs: usize,
        /// Number of y values
        ys: usize,
    },

    /// Iteration budget must be strictly positive.
    #[error("invalid iteration count: {iterations} (must be > 0)")]
    InvalidIterations {
        /// The invalid iteration count
        iterations: usize,
    },

    /// Crossover probability is out of [0, 1].
    #[error("invalid crossover rate: {rate} (must be in [0, 1])")]
    InvalidCrossoverRate {
        /// The invalid crossover rate
        rate: f64,
    },

    /// Scale factor must be a positive finite number.
    #[error("invalid scale factor: {factor} (must be > 0)")]
    InvalidScaleFactor {
        /// The invalid scale factor
        factor: f64,
    },

    /// Progress cadence must be strictly positive.
    #[error("invalid progress cadence: {cadence} (must be > 0)")]
    InvalidCadence {
        /// The invalid cadence
        cadence: usize,
    },

    /// Not enough individuals to pick three distinct agents besides the target.
    #[error("population size ({pop_size}) must be >= 4")]
    InsufficientPopulation {
        /// The population size
        pop_size: usize,
    },

    /// Fitness evaluated to NaN or infinity.
    #[error("non-finite fitness: {count} evaluation(s) at generation {generation}")]
    NumericOverflow {
        /// Generation where the values were met (0 = initial population)
        generation: usize,
        /// Number of non-finite evaluations
        count: usize,
    },

    /// Text input could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),
}

/// A specialized `Result` type for polynomial fitting.
pub type Result<T> = std::result::Result<T, FitError>;

impl FitError {
    /// Returns `true` for every argument validation error.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            FitError::InvalidPopulationSize { .. }
                | FitError::InvalidDimension { .. }
                | FitError::InvalidBounds { .. }
                | FitError::EmptySampleSet
                | FitError::SampleLengthMismatch { .. }
                | FitError::InvalidIterations { .. }
                | FitError::InvalidCrossoverRate { .. }
                | FitError::InvalidScaleFactor { .. }
                | FitError::InvalidCadence { .. }
        )
    }

    /// Returns `true` if the population is too small for rand/1 mutation.
    pub fn is_population_error(&self) -> bool {
        matches!(self, FitError::InsufficientPopulation { .. })
    }

    /// Returns `true` for non-finite fitness errors.
    pub fn is_numeric_error(&self) -> bool {
        matches!(self, FitError::NumericOverflow { .. })
    }
}
