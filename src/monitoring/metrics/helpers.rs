//! Helper functions for metrics calculations

/// Nearest-rank percentile over ascending `sorted_values`.
///
/// `percentile` is expressed in `0..=100`. The rank is
/// `ceil(percentile / 100 * n)`, clamped to the valid index range, so the
/// result is always one of the samples; there is no interpolation.
pub(super) fn nearest_rank_percentile(sorted_values: &[f64], percentile: f64) -> f64 {
    if sorted_values.is_empty() {
        return 0.0;
    }

    let n = sorted_values.len();
    // multiply before dividing so integral percentiles stay exact
    let rank = (percentile * n as f64 / 100.0).ceil() as i64;
    let index = (rank - 1).clamp(0, n as i64 - 1) as usize;

    sorted_values[index]
}

/// Calculate average of f64 values, 0 for an empty slice
pub(super) fn calculate_average(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}
