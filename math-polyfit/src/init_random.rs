use ndarray::Array2;
use rand::Rng;

use crate::bounds::Bounds;

/// Uniform samples in `[low, high)` for an `npop x n` population.
pub(crate) fn init_random<R: Rng + ?Sized>(
    n: usize,
    npop: usize,
    bounds: &Bounds,
    rng: &mut R,
) -> Array2<f64> {
    Array2::from_shape_simple_fn((npop, n), || rng.random_range(bounds.low..bounds.high))
}
