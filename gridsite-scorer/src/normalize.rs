//! Column normalisation primitives.

use gridsite_core::column::{quantile, sorted};

/// Lower clipping percentile for [`robust_min_max`].
pub const LOWER_PERCENTILE: f64 = 0.05;
/// Upper clipping percentile for [`robust_min_max`].
pub const UPPER_PERCENTILE: f64 = 0.95;
/// Score given to every row of a column with no spread.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Scale a column into `0.0..=1.0`, clipping to the 5th and 95th
/// percentiles first so outliers do not compress the bulk of the values.
///
/// A column with no spread after clipping maps every value to
/// [`NEUTRAL_SCORE`]. An empty column yields an empty result.
///
/// # Examples
/// ```
/// use gridsite_scorer::robust_min_max;
///
/// let scores = robust_min_max(&[10.0, 50.0, 90.0]);
/// assert_eq!(scores, vec![0.0, 0.5, 1.0]);
/// assert_eq!(robust_min_max(&[7.0, 7.0]), vec![0.5, 0.5]);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "min-max scaling subtracts and divides by the clipped range"
)]
#[must_use]
pub fn robust_min_max(values: &[f64]) -> Vec<f64> {
    let ordered = sorted(values);
    let (Some(low), Some(high)) = (
        quantile(&ordered, LOWER_PERCENTILE),
        quantile(&ordered, UPPER_PERCENTILE),
    ) else {
        return Vec::new();
    };
    let range = high - low;
    if range <= 0.0 {
        return vec![NEUTRAL_SCORE; values.len()];
    }
    values
        .iter()
        .map(|value| ((value.clamp(low, high) - low) / range).clamp(0.0, 1.0))
        .collect()
}

/// Turn "lower is better" scores into "higher is better" ones.
#[expect(clippy::float_arithmetic, reason = "inversion is `1 - s`")]
#[must_use]
pub fn invert_score(scores: &[f64]) -> Vec<f64> {
    scores.iter().map(|score| 1.0 - score).collect()
}

/// Robust-normalise then invert, for metrics where lower raw values win.
pub(crate) fn lower_is_better(values: &[f64]) -> Vec<f64> {
    invert_score(&robust_min_max(values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[expect(
        clippy::float_arithmetic,
        reason = "tests compare floating point values"
    )]
    fn outliers_saturate_at_the_bounds() {
        let mut values: Vec<f64> = (1..=19).map(f64::from).collect();
        values.push(10_000.0);
        let scores = robust_min_max(&values);
        let last = scores.last().copied().expect("non-empty");
        let first = scores.first().copied().expect("non-empty");
        assert!((last - 1.0).abs() < 1e-12);
        assert!(first.abs() < 1e-12);
        let middle = scores.get(9).copied().expect("twenty scores");
        assert!(middle > 0.0 && middle < 1.0, "got {middle}");
    }

    #[rstest]
    fn empty_columns_stay_empty() {
        assert!(robust_min_max(&[]).is_empty());
        assert!(invert_score(&[]).is_empty());
    }

    #[rstest]
    fn single_values_are_neutral() {
        assert_eq!(robust_min_max(&[42.0]), vec![NEUTRAL_SCORE]);
    }

    #[rstest]
    fn lower_raw_values_score_higher() {
        assert_eq!(lower_is_better(&[10.0, 50.0, 90.0]), vec![1.0, 0.5, 0.0]);
    }
}
