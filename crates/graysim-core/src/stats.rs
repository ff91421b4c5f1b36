// crates/graysim-core/src/stats.rs
//
// Population statistics over flattened sample vectors. Divisor is N, not
// N-1; the similarity formula depends on that exact choice.

/// Arithmetic mean. Precondition: `seq` is non-empty. Decoders reject
/// non-positive dimensions, so an empty sample vector cannot reach here.
pub fn mean(seq: &[f64]) -> f64 {
    debug_assert!(!seq.is_empty());
    seq.iter().sum::<f64>() / seq.len() as f64
}

/// Population variance against a precomputed mean.
pub fn variance(seq: &[f64], mean: f64) -> f64 {
    debug_assert!(!seq.is_empty());
    seq.iter().map(|&v| (v - mean) * (v - mean)).sum::<f64>() / seq.len() as f64
}

/// Population covariance over paired elements. Equal lengths are the
/// caller's contract (enforced upstream by the dimension gate).
pub fn covariance(a: &[f64], b: &[f64], mean_a: f64, mean_b: f64) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| (x - mean_a) * (y - mean_b))
        .sum::<f64>()
        / a.len() as f64
}
