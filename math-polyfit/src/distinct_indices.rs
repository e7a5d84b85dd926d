use rand::Rng;
use rand::seq::index;

/// `count` distinct indices in `0..pool_size`, none equal to `exclude`.
///
/// Callers guarantee `count <= pool_size - 1`.
pub(crate) fn distinct_indices<R: Rng + ?Sized>(
    exclude: usize,
    count: usize,
    pool_size: usize,
    rng: &mut R,
) -> Vec<usize> {
    debug_assert!(count <= pool_size.saturating_sub(1));
    // sample from the pool without `exclude`, then shift past it
    index::sample(rng, pool_size - 1, count)
        .into_iter()
        .map(|idx| if idx >= exclude { idx + 1 } else { idx })
        .collect()
}
