//! Resource scenario adjustment of the variability score.

use gridsite_core::is_non_rto;

/// Apply a variability adjustment factor to baseline variability scores.
///
/// For market nodes the remaining penalty `1 - baseline` is scaled by `vaf`,
/// so a smaller factor yields a higher score. Nodes carrying the non-RTO
/// price-variance sentinel keep their baseline score. A factor of `1.0`
/// reproduces the baseline exactly.
///
/// # Examples
/// ```
/// use gridsite_core::NON_RTO_PRICE_VARIANCE;
/// use gridsite_scorer::effective_variability;
///
/// let effective = effective_variability(&[0.5, 0.5], &[0.3, NON_RTO_PRICE_VARIANCE], 0.4);
/// assert!((effective[0] - 0.8).abs() < 1e-12);
/// assert_eq!(effective[1], 0.5);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "the scenario scales the baseline penalty"
)]
#[must_use]
pub fn effective_variability(baseline: &[f64], price_variance: &[f64], vaf: f64) -> Vec<f64> {
    baseline
        .iter()
        .zip(price_variance)
        .map(|(&score, &variance)| {
            if is_non_rto(variance) {
                score
            } else {
                // Same as `1 - vaf * (1 - score)`, but exact when `vaf` is 1.
                (score + (1.0 - vaf) * (1.0 - score)).clamp(0.0, 1.0)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridsite_core::{NON_RTO_PRICE_VARIANCE, ResourceConfig};
    use rstest::rstest;

    #[rstest]
    fn no_resources_leave_scores_unchanged() {
        let baseline = [0.0, 0.13, 0.77, 1.0];
        let variance = [0.9, 0.4, 0.2, 0.0];
        let vaf = ResourceConfig::None.variability_adjustment_factor();
        assert_eq!(effective_variability(&baseline, &variance, vaf), baseline.to_vec());
    }

    #[rstest]
    #[case(ResourceConfig::Solar)]
    #[case(ResourceConfig::Battery)]
    #[case(ResourceConfig::SolarBattery)]
    #[case(ResourceConfig::FirmGen)]
    fn resources_never_lower_market_scores(#[case] config: ResourceConfig) {
        let baseline = [0.0, 0.25, 0.5, 1.0];
        let variance = [0.8, 0.6, 0.4, 0.1];
        let effective =
            effective_variability(&baseline, &variance, config.variability_adjustment_factor());
        for (before, after) in baseline.iter().zip(&effective) {
            assert!(after >= before, "{config}: {before} -> {after}");
        }
    }

    #[rstest]
    fn non_rto_nodes_ignore_resources() {
        let effective = effective_variability(&[0.5], &[NON_RTO_PRICE_VARIANCE], 0.25);
        assert_eq!(effective, vec![0.5]);
    }
}
