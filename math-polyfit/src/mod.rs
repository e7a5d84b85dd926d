//! Polynomial curve fitting with Differential Evolution.
//!
//! This crate fits the coefficients of a polynomial to noisy samples by
//! minimizing the mean absolute error with a rand/1/bin Differential
//! Evolution loop. Slots are updated in place, so later slots of a
//! generation already see the survivors of earlier ones.
//!
//! # Features
//!
//! - Seeded, explicitly owned random generator for reproducible runs
//! - Lazy progress: [`FitRun`] is an iterator of [`Progress`] records
//! - Clamp-to-bounds mutation and greedy parent-favouring selection
//! - Non-finite fitness detection reported with every snapshot
//!
//! # Example
//!
//! ```rust
//! use math_audio_polyfit::{Bounds, FitRun, PolyFitConfigBuilder, Progress, SampleSet};
//! use ndarray::array;
//!
//! // x^2 - 1
//! let samples = SampleSet::new(
//!     array![-2.0, -1.0, 0.0, 1.0, 2.0],
//!     array![3.0, 0.0, -1.0, 0.0, 3.0],
//! )
//! .unwrap();
//! let config = PolyFitConfigBuilder::new()
//!     .dimension(3)
//!     .bounds(Bounds::new(-5.0, 5.0).unwrap())
//!     .popsize(50)
//!     .maxiter(200)
//!     .recombination(0.8)
//!     .scale_factor(0.6)
//!     .disp(true)
//!     .seed(42)
//!     .build()
//!     .expect("invalid config");
//!
//! for progress in FitRun::new(&samples, config).expect("invalid run") {
//!     match progress {
//!         Progress::Snapshot(s) => println!("gen {:3} best={:.4}", s.generation, s.fun),
//!         Progress::Completed(report) => assert!(report.fun < 0.1),
//!     }
//! }
//! ```
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod error;
pub use error::{FitError, Result};

use ndarray::Array1;
use serde::Serialize;

/// Argmin helpers that rank non-finite values last.
mod argmin;
/// Uniform search interval for the coefficients.
pub mod bounds;
/// Binomial crossover with a pure per-dimension threshold.
pub mod crossover_binomial;
/// One-call fitting entry point.
pub mod differential_evolution;
/// Utilities for selecting distinct random indices from a population.
mod distinct_indices;
/// Generational loop and progress iterator.
pub mod engine;
/// Uniform random initialization.
mod init_random;
/// Rand/1 mutation: random base plus one scaled difference vector.
pub mod mutant_rand1;
/// Mean absolute error objective.
pub mod objective;
/// Polynomial evaluation and parsing.
pub mod polynomial;
/// Population storage.
pub mod population;
/// Sample sets and synthetic data.
pub mod samples;
/// Greedy parent/offspring selection.
pub mod selection_greedy;


pub use bounds::Bounds;
pub use differential_evolution::differential_evolution;
pub use engine::{BestCandidate, FitRun, Progress, Snapshot};
pub use mutant_rand1::MIN_POPULATION;
pub use objective::Objective;
pub use polynomial::Polynomial;
pub use population::Population;
pub use samples::{SampleSet, linspace};

/// Configuration of a polynomial fit.
///
/// Defaults reproduce the reference setup: 100 members, CR = 0.8, F = 0.5,
/// 300 generations, bounds [-50, 50], six coefficients, a snapshot every
/// 20 generations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolyFitConfig {
    /// Number of candidates (N >= 4).
    pub popsize: usize,
    /// Crossover probability CR in [0, 1].
    pub recombination: f64,
    /// Mutation scale factor F > 0.
    pub scale_factor: f64,
    /// Number of generations; the loop always runs all of them.
    pub maxiter: usize,
    /// Coefficient bounds shared by every dimension.
    pub bounds: Bounds,
    /// Number of coefficients (degree + 1).
    pub dimension: usize,
    /// Emit progress snapshots and log them at info level.
    pub disp: bool,
    /// Snapshot cadence in generations.
    pub progress_every: usize,
    /// Optional random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for PolyFitConfig {
    fn default() -> Self {
        Self {
            popsize: 100,
            recombination: 0.8,
            scale_factor: 0.5,
            maxiter: 300,
            bounds: Bounds::default(),
            dimension: 6,
            disp: false,
            progress_every: 20,
            seed: None,
        }
    }
}

impl PolyFitConfig {
    /// Checks every parameter.
    ///
    /// # Errors
    ///
    /// `InvalidPopulationSize` for an empty population,
    /// `InsufficientPopulation` below [`MIN_POPULATION`], and the matching
    /// invalid-argument variant for any other parameter out of range.
    pub fn validate(&self) -> Result<()> {
        if self.popsize == 0 {
            return Err(FitError::InvalidPopulationSize {
                pop_size: self.popsize,
            });
        }
        if self.dimension == 0 {
            return Err(FitError::InvalidDimension {
                dimension: self.dimension,
            });
        }
        if self.popsize < MIN_POPULATION {
            return Err(FitError::InsufficientPopulation {
                pop_size: self.popsize,
            });
        }
        self.bounds.validate()?;
        if self.maxiter == 0 {
            return Err(FitError::InvalidIterations {
                iterations: self.maxiter,
            });
        }
        if !(0.0..=1.0).contains(&self.recombination) {
            return Err(FitError::InvalidCrossoverRate {
                rate: self.recombination,
            });
        }
        if !(self.scale_factor.is_finite() && self.scale_factor > 0.0) {
            return Err(FitError::InvalidScaleFactor {
                factor: self.scale_factor,
            });
        }
        if self.progress_every == 0 {
            return Err(FitError::InvalidCadence {
                cadence: self.progress_every,
            });
        }
        Ok(())
    }
}

/// Fluent builder for [`PolyFitConfig`].
///
/// # Example
///
/// ```rust
/// use math_audio_polyfit::{Bounds, PolyFitConfigBuilder};
///
/// let config = PolyFitConfigBuilder::new()
///     .popsize(50)
///     .maxiter(200)
///     .recombination(0.8)
///     .scale_factor(0.6)
///     .bounds(Bounds::new(-5.0, 5.0).unwrap())
///     .dimension(3)
///     .seed(42)
///     .build();
/// assert!(config.is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PolyFitConfigBuilder {
    cfg: PolyFitConfig,
}

impl PolyFitConfigBuilder {
    /// Creates a new builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }
    /// Sets the population size.
    pub fn popsize(mut self, v: usize) -> Self {
        self.cfg.popsize = v;
        self
    }
    /// Sets the crossover probability (CR).
    pub fn recombination(mut self, v: f64) -> Self {
        self.cfg.recombination = v;
        self
    }
    /// Sets the mutation scale factor (F).
    pub fn scale_factor(mut self, v: f64) -> Self {
        self.cfg.scale_factor = v;
        self
    }
    /// Sets the number of generations.
    pub fn maxiter(mut self, v: usize) -> Self {
        self.cfg.maxiter = v;
        self
    }
    /// Sets the coefficient bounds.
    pub fn bounds(mut self, v: Bounds) -> Self {
        self.cfg.bounds = v;
        self
    }
    /// Sets the number of coefficients.
    pub fn dimension(mut self, v: usize) -> Self {
        self.cfg.dimension = v;
        self
    }
    /// Enables/disables progress snapshots.
    pub fn disp(mut self, v: bool) -> Self {
        self.cfg.disp = v;
        self
    }
    /// Sets the snapshot cadence in generations.
    pub fn progress_every(mut self, v: usize) -> Self {
        self.cfg.progress_every = v;
        self
    }
    /// Sets the random seed for reproducibility.
    pub fn seed(mut self, v: u64) -> Self {
        self.cfg.seed = Some(v);
        self
    }
    /// Builds and returns the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by [`PolyFitConfig::validate`].
    pub fn build(self) -> Result<PolyFitConfig> {
        self.cfg.validate()?;
        Ok(self.cfg)
    }
}

/// Result of a polynomial fit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitReport {
    /// Best coefficients, highest degree first.
    pub x: Array1<f64>,
    /// Mean absolute error of `x`.
    pub fun: f64,
    /// Generation that found `x`; `None` if it came from the initial population.
    pub best_generation: Option<usize>,
    /// Number of generations performed.
    pub nit: usize,
    /// Number of fitness evaluations performed.
    pub nfev: usize,
    /// Number of evaluations that produced NaN or infinity.
    pub non_finite: usize,
    /// Best fitness after each generation.
    pub history: Vec<f64>,
}

impl FitReport {
    /// The fitted polynomial.
    pub fn polynomial(&self) -> Polynomial {
        Polynomial::new(self.x.clone())
    }

    /// Fitted curve evaluated at `xs`, for plotting against the samples.
    pub fn predict(&self, xs: &Array1<f64>) -> Array1<f64> {
        polynomial::evaluate(self.x.view(), xs.view())
    }
}
