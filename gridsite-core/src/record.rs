//! Ranking output.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{NodeMetrics, WeightVector};

/// One ranked node with the scores and raw inputs behind its position.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ScoreRecord {
    /// Node identifier.
    pub node: String,
    /// State code.
    pub state: String,
    /// County label.
    pub county: String,
    /// Market operator label.
    pub iso: String,
    /// Energy cost score.
    pub cost_score: f64,
    /// Land cost score.
    pub land_score: f64,
    /// Carbon intensity score.
    pub emissions_score: f64,
    /// Policy support score.
    pub policy_score: f64,
    /// Interconnection queue score.
    pub queue_score: f64,
    /// Price variability score with no on-site resources.
    pub price_variability_penalty_score: f64,
    /// Price variability score under the requested resource scenario.
    pub effective_price_variability_penalty_score: f64,
    /// Composite using the baseline variability score.
    pub score_baseline: f64,
    /// Composite using the effective variability score.
    pub score_scenario: f64,
    /// Position by baseline composite, starting at 1.
    pub rank_baseline: usize,
    /// Position by scenario composite, starting at 1.
    pub rank_scenario: usize,
    /// Validated inputs for this node.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub metrics: NodeMetrics<f64>,
}

/// Result of a ranking call, ordered by scenario rank.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RankedTable {
    /// Ranked nodes, best first. At most the requested count.
    pub records: Vec<ScoreRecord>,
    /// Component weights used for both composites.
    pub weights: WeightVector,
    /// Variability adjustment factor of the resource scenario.
    pub variability_adjustment: f64,
    /// Nodes remaining after the location filter.
    pub candidates: usize,
    /// Candidates that passed the quality threshold.
    pub eligible: usize,
}

impl RankedTable {
    /// Number of ranked nodes returned.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no node was ranked.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Node identifiers in scenario-rank order.
    pub fn node_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.iter().map(|record| record.node.as_str())
    }
}
