//! Weighted composites of the component scores.

use gridsite_core::{Component, WeightVector};

use crate::ComponentScores;

/// Weighted sum of the component columns, with `variability` standing in for
/// the variability column, clipped to `0.0..=1.0`.
///
/// Pass [`ComponentScores::variability`] for the baseline composite and the
/// effective variability column for the scenario composite. Both use the same
/// summation order, so identical inputs give bit-identical composites.
#[expect(
    clippy::float_arithmetic,
    reason = "composites are weighted sums of score columns"
)]
#[must_use]
pub fn composite_scores(
    scores: &ComponentScores,
    variability: &[f64],
    weights: &WeightVector,
) -> Vec<f64> {
    let mut composite = vec![0.0; scores.len()];
    for component in Component::ALL {
        let column = match component {
            Component::Variability => variability,
            other => scores.get(other),
        };
        let weight = weights.get(component);
        for (acc, value) in composite.iter_mut().zip(column) {
            *acc += weight * value;
        }
    }
    for acc in &mut composite {
        *acc = acc.clamp(0.0, 1.0);
    }
    composite
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn scores(value: f64) -> ComponentScores {
        ComponentScores {
            cost: vec![value],
            land: vec![value],
            emissions: vec![value],
            policy: vec![value],
            queue: vec![value],
            variability: vec![value],
        }
    }

    #[rstest]
    #[expect(
        clippy::float_arithmetic,
        reason = "tests compare floating point values"
    )]
    fn uniform_scores_give_the_same_composite() {
        let weights = WeightVector::try_from_fn(|_| 1.0).expect("valid weights");
        let composite = composite_scores(&scores(0.4), &[0.4], &weights);
        let value = composite.first().copied().expect("one row");
        assert!((value - 0.4).abs() < 1e-12);
    }

    #[rstest]
    fn variability_column_is_substituted() {
        let weights = WeightVector::try_from_fn(|component| {
            if component == Component::Variability { 1.0 } else { 0.0 }
        })
        .expect("valid weights");
        assert_eq!(composite_scores(&scores(0.0), &[0.9], &weights), vec![0.9]);
    }
}
