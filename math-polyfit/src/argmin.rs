use ndarray::Array1;

/// Ranking key: NaN and infinities never beat a finite fitness.
#[inline]
pub(crate) fn rank(f: f64) -> f64 {
    if f.is_finite() { f } else { f64::INFINITY }
}

/// Index and value of the smallest fitness; ties keep the first occurrence.
///
/// The returned value is the raw fitness at that index. An empty array yields
/// `(0, f64::INFINITY)`.
pub(crate) fn argmin(v: &Array1<f64>) -> (usize, f64) {
    let mut best_i = 0usize;
    let mut best_v = f64::INFINITY;
    for (i, &val) in v.iter().enumerate() {
        if rank(val) < rank(best_v) {
            best_v = val;
            best_i = i;
        }
    }
    (best_i, v.get(best_i).copied().unwrap_or(f64::INFINITY))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_first_minimum_wins() {
        assert_eq!(argmin(&array![3.0, 1.0, 2.0, 1.0]), (1, 1.0));
    }

    #[test]
    fn test_non_finite_never_wins() {
        assert_eq!(argmin(&array![f64::NAN, 5.0, f64::NEG_INFINITY]), (1, 5.0));
        let (i, v) = argmin(&array![f64::NAN, f64::INFINITY]);
        assert_eq!(i, 0);
        assert!(v.is_nan());
    }
}
