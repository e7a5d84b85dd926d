//! Candidate coefficient vectors and their index-aligned fitness values.

use ndarray::{Array1, Array2, ArrayView1};
use rand::Rng;

use crate::argmin::argmin;
use crate::bounds::Bounds;
use crate::error::{FitError, Result};
use crate::init_random::init_random;
use crate::objective::Objective;

/// One generation of candidates.
///
/// Row `i` of `members` is scored by `fitness[i]`. Both always hold `size()` entries.
#[derive(Debug, Clone)]
pub struct Population {
    members: Array2<f64>,
    fitness: Array1<f64>,
}

impl Population {
    /// Draws `size` vectors of `dimension` coefficients uniformly in `[low, high)`.
    ///
    /// Fitness values start at `+inf` until [`evaluate_all`](Self::evaluate_all) runs.
    ///
    /// # Errors
    ///
    /// `InvalidPopulationSize` for `size == 0`, `InvalidDimension` for
    /// `dimension == 0`, `InvalidBounds` unless `low < high`.
    pub fn initialize<R: Rng + ?Sized>(
        size: usize,
        bounds: &Bounds,
        dimension: usize,
        rng: &mut R,
    ) -> Result<Self> {
        if size == 0 {
            return Err(FitError::InvalidPopulationSize { pop_size: size });
        }
        if dimension == 0 {
            return Err(FitError::InvalidDimension { dimension });
        }
        bounds.validate()?;
        Ok(Self {
            members: init_random(dimension, size, bounds, rng),
            fitness: Array1::from_elem(size, f64::INFINITY),
        })
    }

    /// Scores every member in population order, stores and returns the values.
    pub fn evaluate_all(&mut self, objective: &Objective<'_>) -> &Array1<f64> {
        for (row, f) in self.members.rows().into_iter().zip(self.fitness.iter_mut()) {
            *f = objective.fitness(row);
        }
        &self.fitness
    }

    /// Index of the lowest fitness, first occurrence on ties.
    pub fn best_index(&self) -> usize {
        argmin(&self.fitness).0
    }

    /// Overwrites slot `i` in place.
    pub fn replace(&mut self, i: usize, x: ArrayView1<'_, f64>, fitness: f64) {
        self.members.row_mut(i).assign(&x);
        self.fitness[i] = fitness;
    }

    /// Member `i`.
    pub fn member(&self, i: usize) -> ArrayView1<'_, f64> {
        self.members.row(i)
    }

    /// All members, one per row.
    pub fn members(&self) -> &Array2<f64> {
        &self.members
    }

    /// Fitness values, index aligned with [`members`](Self::members).
    pub fn fitness(&self) -> &Array1<f64> {
        &self.fitness
    }

    /// Number of members.
    pub fn size(&self) -> usize {
        self.members.nrows()
    }

    /// Coefficients per member.
    pub fn dimension(&self) -> usize {
        self.members.ncols()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples::SampleSet;
    use ndarray::array;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_initialize_shape_and_bounds() {
        let bounds = Bounds::new(-5.0, 5.0).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let pop = Population::initialize(30, &bounds, 3, &mut rng).unwrap();
        assert_eq!(pop.size(), 30);
        assert_eq!(pop.dimension(), 3);
        assert_eq!(pop.fitness().len(), 30);
        assert!(pop.members().iter().all(|&v| (-5.0..5.0).contains(&v)));
    }

    #[test]
    fn test_initialize_rejects_invalid_arguments() {
        let bounds = Bounds::new(-1.0, 1.0).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            Population::initialize(0, &bounds, 3, &mut rng).unwrap_err(),
            FitError::InvalidPopulationSize { pop_size: 0 }
        );
        assert_eq!(
            Population::initialize(5, &bounds, 0, &mut rng).unwrap_err(),
            FitError::InvalidDimension { dimension: 0 }
        );
        let inverted = Bounds {
            low: 1.0,
            high: 1.0,
        };
        assert!(matches!(
            Population::initialize(5, &inverted, 2, &mut rng),
            Err(FitError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn test_initialize_is_seeded() {
        let bounds = Bounds::new(-1.0, 1.0).unwrap();
        let a = Population::initialize(8, &bounds, 2, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = Population::initialize(8, &bounds, 2, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a.members(), b.members());
    }

    #[test]
    fn test_evaluate_all_and_best_index() {
        let samples = SampleSet::new(array![0.0, 1.0], array![1.0, 1.0]).unwrap();
        let obj = Objective::new(&samples).unwrap();
        let bounds = Bounds::new(-1.0, 1.0).unwrap();
        let mut pop = Population::initialize(4, &bounds, 1, &mut StdRng::seed_from_u64(0)).unwrap();
        pop.replace(0, array![3.0].view(), 0.0);
        pop.replace(1, array![1.0].view(), 0.0);
        pop.replace(2, array![1.0].view(), 0.0);
        pop.replace(3, array![0.0].view(), 0.0);

        let fitness = pop.evaluate_all(&obj).clone();
        assert_eq!(fitness, array![2.0, 0.0, 0.0, 1.0]);
        assert_eq!(pop.best_index(), 1);
        assert_eq!(obj.nfev(), 4);
    }

    #[test]
    fn test_replace_in_place() {
        let bounds = Bounds::new(-1.0, 1.0).unwrap();
        let mut pop = Population::initialize(4, &bounds, 2, &mut StdRng::seed_from_u64(2)).unwrap();
        let before = pop.member(1).to_owned();
        pop.replace(2, array![0.5, -0.5].view(), 0.25);
        assert_eq!(pop.member(2), array![0.5, -0.5]);
        assert_eq!(pop.fitness()[2], 0.25);
        assert_eq!(pop.member(1), before);
    }
}
