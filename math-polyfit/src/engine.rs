//! Generational loop of the polynomial fitting engine.
//!
//! [`FitRun`] owns the population, the best candidate and the random
//! generator of one run. It is an iterator: each call to `next` advances the
//! loop until the next progress snapshot is due, then yields it. Once the
//! iteration budget is spent it yields a single [`Progress::Completed`]
//! record and is exhausted afterwards. Dropping the run early abandons it.
//!
//! Slots are updated in place and in order: within one generation the mutant
//! built for slot `j` may draw on slots `< j` that were already replaced in
//! the same generation.

use std::iter::FusedIterator;

use ndarray::Array1;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use crate::argmin::{argmin, rank};
use crate::crossover_binomial::binomial_crossover;
use crate::error::{FitError, Result};
use crate::mutant_rand1::mutant_rand1;
use crate::objective::Objective;
use crate::population::Population;
use crate::samples::SampleSet;
use crate::selection_greedy::greedy_selection;
use crate::{FitReport, PolyFitConfig};

/// Lowest-fitness vector seen so far in a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestCandidate {
    /// Coefficients, highest degree first
    pub x: Array1<f64>,
    /// Mean absolute error of `x`
    pub fitness: f64,
    /// Generation that produced it; `None` for the initial population
    pub generation: Option<usize>,
}

/// Periodic progress record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Zero-based generation just completed
    pub generation: usize,
    /// Best coefficients so far
    pub x: Array1<f64>,
    /// Best fitness so far
    pub fun: f64,
    /// Non-finite fitness evaluations since the previous snapshot
    pub non_finite: usize,
}

impl Snapshot {
    /// The numeric problem met since the previous snapshot, if any.
    pub fn numeric_issue(&self) -> Option<FitError> {
        (self.non_finite > 0).then_some(FitError::NumericOverflow {
            generation: self.generation,
            count: self.non_finite,
        })
    }
}

/// Item yielded by [`FitRun`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Progress {
    /// Emitted every `progress_every` generations when progress display is on.
    Snapshot(Snapshot),
    /// Emitted once, after the last generation.
    Completed(FitReport),
}

/// State of a single optimization run.
pub struct FitRun<'a> {
    config: PolyFitConfig,
    objective: Objective<'a>,
    population: Population,
    best: BestCandidate,
    rng: StdRng,
    generation: usize,
    history: Vec<f64>,
    non_finite_total: usize,
    non_finite_pending: usize,
    completed: bool,
}

impl<'a> FitRun<'a> {
    /// Validates the configuration, draws and scores the initial population.
    ///
    /// # Errors
    ///
    /// Any configuration error from [`PolyFitConfig::validate`],
    /// `FitError::EmptySampleSet` for empty targets, and
    /// `FitError::NumericOverflow` if no initial member has a finite fitness.
    pub fn new(samples: &'a SampleSet, config: PolyFitConfig) -> Result<Self> {
        config.validate()?;
        let objective = Objective::new(samples)?;

        let mut rng: StdRng = match config.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => {
                let mut thread_rng = rand::rng();
                StdRng::from_rng(&mut thread_rng)
            }
        };

        if config.disp {
            log::info!(
                "DE Init: {} coefficients, population={}, maxiter={}, bounds={}",
                config.dimension,
                config.popsize,
                config.maxiter,
                config.bounds
            );
            log::info!(
                "  F={:.3}, CR={:.3}, {} samples",
                config.scale_factor,
                config.recombination,
                samples.len()
            );
        }

        let mut population =
            Population::initialize(config.popsize, &config.bounds, config.dimension, &mut rng)?;
        let non_finite = population
            .evaluate_all(&objective)
            .iter()
            .filter(|f| !f.is_finite())
            .count();
        if non_finite == population.size() {
            return Err(FitError::NumericOverflow {
                generation: 0,
                count: non_finite,
            });
        }
        if non_finite > 0 {
            log::warn!(
                "{} of {} initial members have a non-finite fitness",
                non_finite,
                population.size()
            );
        }

        let (best_idx, best_f) = argmin(population.fitness());
        let best = BestCandidate {
            x: population.member(best_idx).to_owned(),
            fitness: best_f,
            generation: None,
        };

        if config.disp {
            log::info!("  Initial best: fitness={:.6e} at index {}", best_f, best_idx);
        }

        Ok(Self {
            history: Vec::with_capacity(config.maxiter),
            config,
            objective,
            population,
            best,
            rng,
            generation: 0,
            non_finite_total: non_finite,
            non_finite_pending: non_finite,
            completed: false,
        })
    }

    /// Runs one generation: mutation, crossover and selection for every slot
    /// in order, then the global best update.
    fn step(&mut self) {
        let f = self.config.scale_factor;
        let cr = self.config.recombination;
        let mut non_finite = 0usize;
        let mut accepted = 0usize;

        for j in 0..self.population.size() {
            let mutant = mutant_rand1(
                j,
                self.population.members(),
                &self.config.bounds,
                f,
                &mut self.rng,
            );
            let offspring =
                binomial_crossover(mutant.view(), self.population.member(j), cr, &mut self.rng);
            let survivor = greedy_selection(self.population.member(j), offspring, &self.objective);
            non_finite += survivor.non_finite;
            if survivor.replaced {
                accepted += 1;
            }
            self.population.replace(j, survivor.x.view(), survivor.fitness);
        }

        let (gen_idx, gen_f) = argmin(self.population.fitness());
        if rank(gen_f) < rank(self.best.fitness) {
            log::debug!(
                "DE gen {:4}  improved best_f {:.6e} -> {:.6e}",
                self.generation,
                self.best.fitness,
                gen_f
            );
            self.best = BestCandidate {
                x: self.population.member(gen_idx).to_owned(),
                fitness: gen_f,
                generation: Some(self.generation),
            };
        }
        if non_finite > 0 {
            log::warn!(
                "DE gen {:4}  {} non-finite fitness evaluation(s)",
                self.generation,
                non_finite
            );
        }
        log::trace!(
            "DE gen {:4}  accepted={}/{}",
            self.generation,
            accepted,
            self.population.size()
        );

        self.history.push(self.best.fitness);
        self.non_finite_total += non_finite;
        self.non_finite_pending += non_finite;
        self.generation += 1;
    }

    fn snapshot(&mut self, generation: usize) -> Snapshot {
        let snap = Snapshot {
            generation,
            x: self.best.x.clone(),
            fun: self.best.fitness,
            non_finite: self.non_finite_pending,
        };
        self.non_finite_pending = 0;
        snap
    }

    /// Drives the remaining generations without yielding and returns the report.
    pub fn finish(mut self) -> FitReport {
        while self.generation < self.config.maxiter {
            self.step();
        }
        self.report()
    }

    /// Report of the current state.
    pub fn report(&self) -> FitReport {
        FitReport {
            x: self.best.x.clone(),
            fun: self.best.fitness,
            best_generation: self.best.generation,
            nit: self.generation,
            nfev: self.objective.nfev(),
            non_finite: self.non_finite_total,
            history: self.history.clone(),
        }
    }

    /// Best candidate so far.
    pub fn best(&self) -> &BestCandidate {
        &self.best
    }

    /// Number of generations completed.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Current population.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Configuration of this run.
    pub fn config(&self) -> &PolyFitConfig {
        &self.config
    }
}

impl Iterator for FitRun<'_> {
    type Item = Progress;

    fn next(&mut self) -> Option<Progress> {
        if self.completed {
            return None;
        }
        while self.generation < self.config.maxiter {
            let generation = self.generation;
            self.step();
            if self.config.disp && generation % self.config.progress_every == 0 {
                let snap = self.snapshot(generation);
                log::info!(
                    "DE gen {:4}  best_f={:.6e}  non_finite={}",
                    snap.generation,
                    snap.fun,
                    snap.non_finite
                );
                return Some(Progress::Snapshot(snap));
            }
        }
        self.completed = true;
        if self.config.disp {
            log::info!(
                "DE finished: {} generations, best_f={:.6e}",
                self.generation,
                self.best.fitness
            );
        }
        Some(Progress::Completed(self.report()))
    }
}

impl FusedIterator for FitRun<'_> {}
