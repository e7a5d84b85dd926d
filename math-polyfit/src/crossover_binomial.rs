use ndarray::{Array1, ArrayView1, Zip};
use rand::Rng;

/// Per-dimension mix of `trial` and `parent`.
///
/// Slot `j` takes `trial[j]` when a fresh uniform draw in `[0, 1)` is below
/// `cr`, otherwise `parent[j]`. No index is forced to come from `trial`.
pub fn binomial_crossover<R: Rng + ?Sized>(
    trial: ArrayView1<'_, f64>,
    parent: ArrayView1<'_, f64>,
    cr: f64,
    rng: &mut R,
) -> Array1<f64> {
    Zip::from(trial).and(parent).map_collect(|&t, &p| {
        if rng.random::<f64>() < cr { t } else { p }
    })
}
