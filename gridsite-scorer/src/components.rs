//! The six per-node component scores.
//!
//! Each score is a column in `0.0..=1.0` where higher is better. Scores are
//! normalised against the candidate set they are computed for, so the same
//! node can score differently under different location filters.

use gridsite_core::column::take;
use gridsite_core::{Component, LoadType, Metric, NodeTable, is_non_rto};

use crate::QueueWeights;
use crate::normalize::{NEUTRAL_SCORE, lower_is_better, robust_min_max};

/// Policy indicators blended into the policy score for a load type.
#[must_use]
pub const fn policy_blend(load_type: LoadType) -> &'static [(Metric, f64)] {
    match load_type {
        LoadType::DataCenterAlwaysOn | LoadType::DataCenterFlexible => &[
            (Metric::PolicyFitDatacenter, 0.5),
            (Metric::StateDcIncentiveLevel, 0.3),
            (Metric::HasHostingCapacityMap, 0.2),
        ],
        LoadType::H2ElectrolyzerFirm => &[
            (Metric::PolicyFitElectrolyzer, 0.5),
            (Metric::IsH2HubState, 0.3),
            (Metric::StateCleanEnergyFriendly, 0.2),
        ],
        LoadType::IndustrialContinuous | LoadType::IndustrialFlexible => &[
            (Metric::StateCleanEnergyFriendly, 0.5),
            (Metric::HasHostingCapacityMap, 0.5),
        ],
        LoadType::CommercialCampus => &[
            (Metric::StateCleanEnergyFriendly, 0.4),
            (Metric::StateDcIncentiveLevel, 0.3),
            (Metric::HasHostingCapacityMap, 0.3),
        ],
    }
}

/// Component score columns for one candidate set.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentScores {
    /// Inverted normalised energy price.
    pub cost: Vec<f64>,
    /// Inverted normalised land price.
    pub land: Vec<f64>,
    /// Inverted normalised carbon intensity.
    pub emissions: Vec<f64>,
    /// Load-type blend of normalised policy indicators.
    pub policy: Vec<f64>,
    /// Weighted blend of the four queue sub-metrics.
    pub queue: Vec<f64>,
    /// Baseline price variability score; neutral for non-RTO nodes.
    pub variability: Vec<f64>,
}

impl ComponentScores {
    /// Score every node in `table`.
    #[must_use]
    pub fn compute(table: &NodeTable, load_type: LoadType, queue_weights: QueueWeights) -> Self {
        Self {
            cost: lower_is_better(table.metric(Metric::AvgLmp)),
            land: lower_is_better(table.metric(Metric::LandPricePerAcre)),
            emissions: lower_is_better(table.metric(Metric::EmissionsIntensity)),
            policy: policy_score(table, load_type),
            queue: queue_score(table, queue_weights),
            variability: variability_score(table.metric(Metric::PriceVariance)),
        }
    }

    /// The column for `component`.
    #[must_use]
    pub fn get(&self, component: Component) -> &[f64] {
        match component {
            Component::Cost => &self.cost,
            Component::Land => &self.land,
            Component::Emissions => &self.emissions,
            Component::Policy => &self.policy,
            Component::Queue => &self.queue,
            Component::Variability => &self.variability,
        }
    }

    /// Number of scored nodes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.cost.len()
    }

    /// Whether no node was scored.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cost.is_empty()
    }
}

/// Weighted sum of columns divided by the total weight, clipped to
/// `0.0..=1.0`.
#[expect(
    clippy::float_arithmetic,
    reason = "blending multiplies and sums score columns"
)]
fn blend(terms: &[(f64, Vec<f64>)], rows: usize) -> Vec<f64> {
    let total: f64 = terms.iter().map(|(weight, _)| weight).sum();
    let mut blended = vec![0.0; rows];
    for (weight, column) in terms {
        for (acc, value) in blended.iter_mut().zip(column) {
            *acc += weight * value;
        }
    }
    if total > 0.0 {
        for acc in &mut blended {
            *acc = (*acc / total).clamp(0.0, 1.0);
        }
    }
    blended
}

fn policy_score(table: &NodeTable, load_type: LoadType) -> Vec<f64> {
    let terms: Vec<(f64, Vec<f64>)> = policy_blend(load_type)
        .iter()
        .map(|&(metric, weight)| (weight, robust_min_max(table.metric(metric))))
        .collect();
    blend(&terms, table.len())
}

fn queue_score(table: &NodeTable, weights: QueueWeights) -> Vec<f64> {
    let terms = [
        (
            weights.pending_mw,
            lower_is_better(table.metric(Metric::QueuePendingMw)),
        ),
        (
            weights.advanced_share,
            robust_min_max(table.metric(Metric::QueueAdvancedShare)),
        ),
        (
            weights.pressure,
            lower_is_better(table.metric(Metric::QueuePressureIndex)),
        ),
        (
            weights.green_share,
            robust_min_max(table.metric(Metric::QueueGreenShare)),
        ),
    ];
    blend(&terms, table.len())
}

/// Inverted normalised price variance over RTO nodes only. Non-RTO nodes get
/// the neutral score.
fn variability_score(price_variance: &[f64]) -> Vec<f64> {
    let in_market: Vec<bool> = price_variance
        .iter()
        .map(|value| !is_non_rto(*value))
        .collect();
    let mut market_scores = lower_is_better(&take(price_variance, &in_market)).into_iter();
    in_market
        .iter()
        .map(|&rto| {
            if rto {
                market_scores.next().unwrap_or(NEUTRAL_SCORE)
            } else {
                NEUTRAL_SCORE
            }
        })
        .collect()
}
