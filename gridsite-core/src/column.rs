//! Column-at-a-time helpers shared by validation and scoring.
//!
//! Quantiles use linear interpolation between the closest ranks, matching the
//! convention of common dataframe libraries.

/// Return a copy of `values` sorted ascending with a total order.
#[must_use]
pub fn sorted(values: &[f64]) -> Vec<f64> {
    let mut copy = values.to_vec();
    copy.sort_by(f64::total_cmp);
    copy
}

/// Interpolated quantile `q` of an ascending slice.
///
/// Returns `None` for an empty slice. `q` is clamped to `0.0..=1.0`.
///
/// # Examples
/// ```
/// use gridsite_core::column::quantile;
///
/// assert_eq!(quantile(&[1.0, 2.0, 3.0, 4.0], 0.5), Some(2.5));
/// assert_eq!(quantile(&[], 0.5), None);
/// ```
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "quantile positions are interpolated between integer ranks"
)]
#[must_use]
pub fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;
    let position = q.clamp(0.0, 1.0) * last as f64;
    let lower_rank = position.floor();
    let fraction = position - lower_rank;
    let lower = *sorted.get(lower_rank as usize)?;
    let upper = *sorted.get(position.ceil() as usize)?;
    Some(lower + (upper - lower) * fraction)
}

/// Median of the values, or `None` when the slice is empty.
#[must_use]
pub fn median(values: &[f64]) -> Option<f64> {
    quantile(&sorted(values), 0.5)
}

/// Keep the entries of `column` whose mask flag is set.
///
/// The mask and column are zipped, so a shorter mask drops the tail.
#[must_use]
pub fn take<T: Clone>(column: &[T], mask: &[bool]) -> Vec<T> {
    column
        .iter()
        .zip(mask)
        .filter(|&(_, keep)| *keep)
        .map(|(value, _)| value.clone())
        .collect()
}

/// Read a numeric cell, falling back to `0.0` when the index is out of range.
#[must_use]
pub fn value_at(column: &[f64], index: usize) -> f64 {
    column.get(index).copied().unwrap_or_default()
}
