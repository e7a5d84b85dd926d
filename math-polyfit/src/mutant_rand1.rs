use ndarray::{Array1, Array2, ArrayView1, Zip};
use rand::Rng;

use crate::bounds::Bounds;
use crate::distinct_indices::distinct_indices;

/// Smallest population that leaves three agents besides the target.
pub const MIN_POPULATION: usize = 4;

/// `a + f * (b - c)`, clamped element-wise into `bounds`.
pub fn mutate(
    a: ArrayView1<'_, f64>,
    b: ArrayView1<'_, f64>,
    c: ArrayView1<'_, f64>,
    bounds: &Bounds,
    f: f64,
) -> Array1<f64> {
    Zip::from(a)
        .and(b)
        .and(c)
        .map_collect(|&x0, &x1, &x2| bounds.clamp(x0 + f * (x1 - x2)))
}

/// rand/1 mutant for slot `i`, reading the population as it is right now.
///
/// The population must hold at least [`MIN_POPULATION`] rows; the engine
/// rejects smaller configurations before the first generation.
pub(crate) fn mutant_rand1<R: Rng + ?Sized>(
    i: usize,
    pop: &Array2<f64>,
    bounds: &Bounds,
    f: f64,
    rng: &mut R,
) -> Array1<f64> {
    let idxs = distinct_indices(i, 3, pop.nrows(), rng);
    mutate(
        pop.row(idxs[0]),
        pop.row(idxs[1]),
        pop.row(idxs[2]),
        bounds,
        f,
    )
}
