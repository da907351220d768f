//! Property-based tests for weights, normalisation and ranking.
//!
//! # Invariants tested
//!
//! - **Weight normalisation:** resolved weights are positive and sum to one
//!   for every load type, size band and emissions preference.
//! - **Bounded scores:** robust normalisation stays inside `0.0..=1.0` and a
//!   constant column is neutral.
//! - **Inversion:** a score and its inversion sum to one.
//! - **Price monotonicity:** among otherwise identical nodes, a dearer node
//!   only ranks above a cheaper one when their composites tie.
//! - **Scenario uplift:** on-site resources never lower a variability score.
#![expect(
    clippy::float_arithmetic,
    reason = "property assertions compare floating point values"
)]

use gridsite_core::test_support::nodes_priced;
use gridsite_core::{Component, LoadType, RankingRequest, ResourceConfig};
use gridsite_scorer::{
    NEUTRAL_SCORE, effective_variability, invert_score, rank_nodes, resolve_weights,
    robust_min_max,
};
use proptest::prelude::*;

fn load_type() -> impl Strategy<Value = LoadType> {
    prop::sample::select(LoadType::ALL.to_vec())
}

fn resource_config() -> impl Strategy<Value = ResourceConfig> {
    prop::sample::select(ResourceConfig::ALL.to_vec())
}

proptest! {
    #[test]
    fn weights_sum_to_one(
        load_type in load_type(),
        size in prop::sample::select(vec![20.0_f64, 100.0, 400.0]),
        preference in 0_u8..=100,
    ) {
        let weights = resolve_weights(load_type, size, f64::from(preference))
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert!((weights.total() - 1.0).abs() < 1e-9);
        for component in Component::ALL {
            prop_assert!(weights.get(component) > 0.0, "{component:?}");
        }
    }

    #[test]
    fn robust_scores_are_bounded(values in prop::collection::vec(-1e6_f64..1e6, 0..64)) {
        let scores = robust_min_max(&values);
        prop_assert_eq!(scores.len(), values.len());
        for score in &scores {
            prop_assert!((0.0..=1.0).contains(score), "score {}", score);
        }
    }

    #[test]
    fn constant_columns_are_neutral(value in -1e6_f64..1e6, len in 1_usize..32) {
        prop_assert_eq!(robust_min_max(&vec![value; len]), vec![NEUTRAL_SCORE; len]);
    }

    #[test]
    fn inversion_complements_the_score(values in prop::collection::vec(-1e6_f64..1e6, 1..64)) {
        let scores = robust_min_max(&values);
        for (score, inverted) in scores.iter().zip(invert_score(&scores)) {
            prop_assert!((score + inverted - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn cheaper_nodes_never_rank_lower(
        prices in prop::collection::vec(1.0_f64..200.0, 2..24),
        load_type in load_type(),
    ) {
        let request = RankingRequest::new(load_type, 100.0).with_top_n(prices.len());
        let ranked = rank_nodes(&nodes_priced(&prices), &request)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        for pair in ranked.records.windows(2) {
            if let [better, worse] = pair {
                prop_assert!(better.score_scenario >= worse.score_scenario);
                prop_assert!(
                    better.metrics.avg_lmp <= worse.metrics.avg_lmp
                        || better.score_scenario.to_bits() == worse.score_scenario.to_bits(),
                    "{} at {} ranked above {} at {}",
                    better.node,
                    better.metrics.avg_lmp,
                    worse.node,
                    worse.metrics.avg_lmp
                );
            }
        }
    }

    #[test]
    fn resources_never_lower_variability(
        baseline in prop::collection::vec(0.0_f64..=1.0, 1..32),
        variance in 0.0_f64..10.0,
        config in resource_config(),
    ) {
        let variances = vec![variance; baseline.len()];
        let effective =
            effective_variability(&baseline, &variances, config.variability_adjustment_factor());
        for (before, after) in baseline.iter().zip(&effective) {
            prop_assert!(after >= before);
            prop_assert!(*after <= 1.0);
        }
    }
}
