//! Batch-local min-max normalization
//!
//! Raw samples from a distribution live on arbitrary scales (Pareto values are unbounded,
//! Zipf ranks start at 1). Before encoding, each batch is rescaled into `[0, 1]` using the
//! minimum and maximum of that batch only. Output index `i` always corresponds to input
//! index `i`.

/// Rescale real samples into `[0, 1]`
///
/// A degenerate batch (all values equal) maps to all zeros.
pub fn normalize(values: &[f64]) -> Vec<f64> {
    let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = hi - lo;

    if span == 0.0 {
        return vec![0.0; values.len()];
    }

    values.iter().map(|v| (v - lo) / span).collect()
}

/// Rescale integer ranks into `[0, 1]`
///
/// The span is `max - min`, or 1 when every rank is identical, which again yields zeros.
pub fn normalize_ranks(ranks: &[u64]) -> Vec<f64> {
    let lo = ranks.iter().copied().min().unwrap_or(0);
    let hi = ranks.iter().copied().max().unwrap_or(0);
    let span = match hi - lo {
        0 => 1,
        s => s,
    };

    ranks
        .iter()
        .map(|&r| (r - lo) as f64 / span as f64)
        .collect()
}
