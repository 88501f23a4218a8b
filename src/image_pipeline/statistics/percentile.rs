use rayon::prelude::*;

/// Linearly interpolated `lower` and `upper` percentiles (both in `[0, 100]`).
///
/// The input is copied and sorted, so the result does not depend on input
/// order. An empty input yields `(0.0, 0.0)`.
pub fn percentile_bounds(values: &[f64], lower: f64, upper: f64) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }

    let mut sorted = values.to_vec();
    sorted.par_sort_unstable_by(f64::total_cmp);

    (interpolate(&sorted, lower), interpolate(&sorted, upper))
}

fn interpolate(sorted: &[f64], percentile: f64) -> f64 {
    let last = sorted.len() - 1;
    let rank = last as f64 * (percentile / 100.0);
    let index = (rank.floor() as usize).min(last);
    let weight = rank - index as f64;
    let next = (index + 1).min(last);

    sorted[index] * (1.0 - weight) + sorted[next] * weight
}
