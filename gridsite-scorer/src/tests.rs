//! Unit tests for the ranking entry points.

use super::*;
use gridsite_core::test_support::{NodeBuilder, nodes_priced, three_state_nodes};
use gridsite_core::{DataError, LoadType, LocationFilter, NodeTable, ResourceConfig};
use rstest::{fixture, rstest};

fn validated(raw: &RawNodeTable) -> NodeTable {
    let (table, _) = validate_nodes(raw).expect("valid nodes");
    table
}

/// A node that loses on every quality axis to the default node.
fn weak_node(id: &str) -> gridsite_core::NodeRecord {
    [
        (Metric::AvgLmp, 90.0),
        (Metric::EmissionsIntensity, 900.0),
        (Metric::QueuePendingMw, 9_000.0),
        (Metric::QueuePressureIndex, 9.0),
        (Metric::QueueAdvancedShare, 0.0),
        (Metric::QueueGreenShare, 0.0),
        (Metric::StateCleanEnergyFriendly, 0.0),
        (Metric::StateDcIncentiveLevel, 0.0),
        (Metric::HasHostingCapacityMap, 0.0),
    ]
    .into_iter()
    .fold(NodeBuilder::new(id), |builder, (metric, value)| {
        builder.metric(metric, Some(value))
    })
    .build()
}

#[fixture]
fn request() -> RankingRequest {
    RankingRequest::new(LoadType::CommercialCampus, 100.0)
}

#[rstest]
fn cheaper_nodes_rank_first(request: RankingRequest) {
    let ranked = rank_nodes(
        &nodes_priced(&[10.0, 50.0, 90.0]),
        &request.with_emissions_preference(0.0),
    )
    .expect("ranking succeeds");
    assert_eq!(ranked.node_ids().collect::<Vec<_>>(), ["N0", "N1", "N2"]);
    let ranks: Vec<usize> = ranked.records.iter().map(|r| r.rank_scenario).collect();
    assert_eq!(ranks, [1, 2, 3]);
    let costs: Vec<f64> = ranked.records.iter().map(|r| r.cost_score).collect();
    assert_eq!(costs, [1.0, 0.5, 0.0]);
}

#[rstest]
fn repeated_calls_give_identical_output(request: RankingRequest) {
    let nodes = three_state_nodes();
    let with_resources = request.with_resource_config(ResourceConfig::SolarBattery);
    let first = rank_nodes(&nodes, &with_resources).expect("ranking succeeds");
    let second = rank_nodes(&nodes, &with_resources).expect("ranking succeeds");
    assert_eq!(first, second);
    #[cfg(feature = "serde")]
    assert_eq!(
        serde_json::to_vec(&first).expect("serialisable"),
        serde_json::to_vec(&second).expect("serialisable")
    );
}

#[rstest]
fn no_resources_leave_the_scenario_equal_to_the_baseline(request: RankingRequest) {
    let ranked = rank_nodes(&three_state_nodes(), &request).expect("ranking succeeds");
    assert!(!ranked.is_empty());
    assert_eq!(ranked.variability_adjustment, 1.0);
    for record in &ranked.records {
        assert_eq!(
            record.score_scenario.to_bits(),
            record.score_baseline.to_bits(),
            "{}",
            record.node
        );
        assert_eq!(record.rank_scenario, record.rank_baseline);
        assert_eq!(
            record.effective_price_variability_penalty_score,
            record.price_variability_penalty_score
        );
    }
}

#[rstest]
#[case(ResourceConfig::Solar)]
#[case(ResourceConfig::Battery)]
#[case(ResourceConfig::SolarBattery)]
#[case(ResourceConfig::FirmGen)]
fn resources_never_lower_a_composite(request: RankingRequest, #[case] config: ResourceConfig) {
    let ranked = rank_nodes(&three_state_nodes(), &request.with_resource_config(config))
        .expect("ranking succeeds");
    for record in &ranked.records {
        assert!(
            record.score_scenario >= record.score_baseline,
            "{}: {} < {}",
            record.node,
            record.score_scenario,
            record.score_baseline
        );
    }
}

#[rstest]
fn non_rto_nodes_keep_a_neutral_variability_score(request: RankingRequest) {
    let nodes: RawNodeTable = [
        NodeBuilder::new("MKT_1")
            .metric(Metric::PriceVariance, Some(0.2))
            .build(),
        NodeBuilder::new("MKT_2")
            .metric(Metric::PriceVariance, Some(0.8))
            .build(),
        NodeBuilder::new("VERT_1").non_rto().build(),
    ]
    .into_iter()
    .collect();
    let ranker = NodeRanker::new(RankingConfig {
        quality_threshold: None,
        ..RankingConfig::default()
    })
    .expect("valid config");
    let ranked = ranker
        .rank(
            &validated(&nodes),
            &request.with_resource_config(ResourceConfig::SolarBattery),
        )
        .expect("ranking succeeds");
    let vertical = ranked
        .records
        .iter()
        .find(|record| record.node == "VERT_1")
        .expect("non-RTO node ranked");
    assert_eq!(vertical.price_variability_penalty_score, NEUTRAL_SCORE);
    assert_eq!(
        vertical.effective_price_variability_penalty_score,
        NEUTRAL_SCORE
    );
    assert_eq!(vertical.iso, "");
}

#[rstest]
fn filters_that_match_nothing_give_an_empty_table(request: RankingRequest) {
    let filter = LocationFilter::states(["NY"]).expect("valid state");
    let ranked = rank_nodes(&three_state_nodes(), &request.with_location_filter(filter))
        .expect("ranking succeeds");
    assert!(ranked.is_empty());
    assert_eq!(ranked.candidates, 0);
    assert_eq!(ranked.eligible, 0);
}

#[rstest]
fn top_n_truncates_after_ranking(request: RankingRequest) {
    let ranked = rank_nodes(&three_state_nodes(), &request.with_top_n(2)).expect("ranking succeeds");
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked.candidates, 6);
    let ranks: Vec<usize> = ranked.records.iter().map(|r| r.rank_scenario).collect();
    assert_eq!(ranks, [1, 2]);
}

#[rstest]
fn invalid_requests_fail_before_validation(request: RankingRequest) {
    let err = rank_nodes(&RawNodeTable::default(), &request.with_top_n(0))
        .expect_err("top_n of zero is rejected");
    assert!(matches!(err, RankingError::Config(_)), "got {err:?}");
    assert_eq!(err.field(), Some("top_n"));
}

#[rstest]
fn empty_tables_are_a_data_error(request: RankingRequest) {
    let err = rank_nodes(&RawNodeTable::default(), &request).expect_err("no nodes");
    assert_eq!(
        err,
        RankingError::Data(DataError::NoValidData {
            total_rows: 0,
            dropped: 0,
        })
    );
}

#[rstest]
#[case(None, 3)]
#[case(Some(DEFAULT_QUALITY_THRESHOLD), 2)]
fn quality_threshold_drops_nodes_weak_on_every_axis(
    request: RankingRequest,
    #[case] quality_threshold: Option<f64>,
    #[case] expected: usize,
) {
    let nodes: RawNodeTable = [
        NodeBuilder::new("GOOD_1").build(),
        NodeBuilder::new("GOOD_2").build(),
        weak_node("WEAK_1"),
    ]
    .into_iter()
    .collect();
    let ranker = NodeRanker::new(RankingConfig {
        quality_threshold,
        ..RankingConfig::default()
    })
    .expect("valid config");
    let ranked = ranker
        .rank(&validated(&nodes), &request)
        .expect("ranking succeeds");
    assert_eq!(ranked.len(), expected);
    assert_eq!(ranked.eligible, expected);
    assert_eq!(ranked.candidates, 3);
}

#[rstest]
fn baseline_ranks_cover_only_eligible_nodes(request: RankingRequest) {
    let nodes: RawNodeTable = [
        NodeBuilder::new("GOOD_1").avg_lmp(30.0).build(),
        NodeBuilder::new("GOOD_2").avg_lmp(35.0).build(),
        weak_node("WEAK_1"),
    ]
    .into_iter()
    .collect();
    let ranked = rank_nodes(&nodes, &request).expect("ranking succeeds");
    let mut baseline: Vec<usize> = ranked.records.iter().map(|r| r.rank_baseline).collect();
    baseline.sort_unstable();
    assert_eq!(baseline, [1, 2]);
}

#[rstest]
fn ties_break_on_node_identifier(request: RankingRequest) {
    let nodes: RawNodeTable = ["B", "C", "A"]
        .into_iter()
        .map(|id| NodeBuilder::new(id).build())
        .collect();
    let ranked = rank_nodes(&nodes, &request).expect("ranking succeeds");
    assert_eq!(ranked.node_ids().collect::<Vec<_>>(), ["A", "B", "C"]);
}

#[rstest]
fn rankers_reject_unusable_configuration() {
    let err = NodeRanker::new(RankingConfig {
        quality_threshold: Some(2.0),
        ..RankingConfig::default()
    })
    .expect_err("threshold above one");
    assert!(matches!(err, ConfigError::InvalidConfig { .. }));
}

#[rstest]
fn weights_are_reported_with_the_result(request: RankingRequest) {
    let ranked = rank_nodes(&nodes_priced(&[20.0, 30.0]), &request).expect("ranking succeeds");
    let expected = resolve_weights(LoadType::CommercialCampus, 100.0, 50.0).expect("valid");
    assert_eq!(ranked.weights, expected);
}

#[rstest]
fn lowering_a_price_never_lowers_the_node_scores(request: RankingRequest) {
    let score_of = |prices: &[f64]| {
        rank_nodes(&nodes_priced(prices), &request)
            .expect("ranking succeeds")
            .records
            .into_iter()
            .find(|record| record.node == "N1")
            .expect("N1 ranked")
    };
    let before = score_of(&[10.0, 50.0, 90.0]);
    let after = score_of(&[10.0, 30.0, 90.0]);
    assert!(after.cost_score >= before.cost_score);
    assert!(after.score_baseline >= before.score_baseline);
    assert!(after.score_scenario >= before.score_scenario);
}
