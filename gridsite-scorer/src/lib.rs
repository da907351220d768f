//! Scoring and ranking of grid nodes for large-load siting.
//!
//! A ranking call runs a fixed sequence of whole-column stages over a
//! validated [`NodeTable`]:
//! 1. restrict the candidates with the request's location filter;
//! 2. compute six [`ComponentScores`] normalised against the candidates;
//! 3. derive a [`WeightVector`](gridsite_core::WeightVector) with
//!    [`resolve_weights`];
//! 4. adjust the variability score for the on-site resource scenario;
//! 5. combine the scores into baseline and scenario composites;
//! 6. drop candidates that are weak on every quality axis, sort, rank, and
//!    truncate.
//!
//! No stage mutates its input, so one validated table can serve many
//! concurrent calls.
//!
//! # Examples
//!
//! ```
//! use gridsite_core::{LoadType, RankingRequest, ResourceConfig};
//! use gridsite_core::test_support::nodes_priced;
//! use gridsite_scorer::rank_nodes;
//!
//! let nodes = nodes_priced(&[90.0, 10.0, 50.0]);
//! let request = RankingRequest::new(LoadType::CommercialCampus, 100.0)
//!     .with_emissions_preference(0.0)
//!     .with_resource_config(ResourceConfig::None);
//! let ranked = rank_nodes(&nodes, &request)?;
//! assert_eq!(ranked.node_ids().collect::<Vec<_>>(), ["N1", "N2", "N0"]);
//! # Ok::<(), gridsite_scorer::RankingError>(())
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use gridsite_core::{
    ConfigError, Metric, NodeTable, RankedTable, RankingRequest, RawNodeTable,
    apply_location_filter, validate_nodes,
};
use log::{debug, info};

mod components;
mod composite;
mod config;
mod error;
mod normalize;
mod ranker;
mod scenario;
mod weights;

pub use components::{ComponentScores, policy_blend};
pub use composite::composite_scores;
pub use config::{DEFAULT_QUALITY_THRESHOLD, QueueWeights, RankingConfig};
pub use error::RankingError;
pub use normalize::{
    LOWER_PERCENTILE, NEUTRAL_SCORE, UPPER_PERCENTILE, invert_score, robust_min_max,
};
pub use ranker::quality_mask;
pub use scenario::effective_variability;
pub use weights::{
    HIGH_EMISSIONS_PREFERENCE, LARGE_LOAD_LIMIT_MW, Multipliers, SMALL_LOAD_LIMIT_MW, SizeBand,
    resolve_weights,
};

use ranker::ScoredCandidates;

/// Ranks validated node tables under a fixed configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeRanker {
    config: RankingConfig,
}

impl NodeRanker {
    /// Build a ranker after validating `config`.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidConfig`] when the configuration is
    /// unusable.
    pub fn new(config: RankingConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration in use.
    #[must_use]
    pub const fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Rank the nodes of `table` for `request`.
    ///
    /// An empty candidate set, whether from the location filter or the
    /// quality filter, yields an empty [`RankedTable`].
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the request is invalid. The request is
    /// checked before any scoring work.
    pub fn rank(
        &self,
        table: &NodeTable,
        request: &RankingRequest,
    ) -> Result<RankedTable, ConfigError> {
        request.validate()?;
        let weights = resolve_weights(
            request.load_type,
            request.load_size_mw,
            request.emissions_preference,
        )?;
        let vaf = request.resource_config.variability_adjustment_factor();
        let candidates = apply_location_filter(table, &request.location_filter);
        let scores =
            ComponentScores::compute(&candidates, request.load_type, self.config.queue_weights);
        let effective = effective_variability(
            &scores.variability,
            candidates.metric(Metric::PriceVariance),
            vaf,
        );
        let baseline = composite_scores(&scores, &scores.variability, &weights);
        let scenario = composite_scores(&scores, &effective, &weights);
        let eligible = quality_mask(&scores, self.config.quality_threshold);
        let eligible_count = eligible.iter().filter(|keep| **keep).count();
        debug!(
            "{eligible_count} of {} candidates pass the quality threshold",
            candidates.len()
        );

        let scored = ScoredCandidates {
            table: &candidates,
            scores,
            effective_variability: effective,
            baseline,
            scenario,
        };
        let records = scored.rank(&eligible, request.top_n);
        info!(
            "Ranked {} of {} nodes for {} ({} MW, {} resources)",
            records.len(),
            table.len(),
            request.load_type,
            request.load_size_mw,
            request.resource_config
        );
        Ok(RankedTable {
            records,
            weights,
            variability_adjustment: vaf,
            candidates: candidates.len(),
            eligible: eligible_count,
        })
    }
}

/// Validate `nodes` and rank them with the default configuration.
///
/// # Errors
/// - [`RankingError::Config`] when the request is invalid; checked first.
/// - [`RankingError::Data`] when the node table cannot be validated.
pub fn rank_nodes(
    nodes: &RawNodeTable,
    request: &RankingRequest,
) -> Result<RankedTable, RankingError> {
    request.validate()?;
    let (table, report) = validate_nodes(nodes)?;
    debug!(
        "Validation kept {} of {} nodes",
        report.retained, report.total_rows
    );
    Ok(NodeRanker::default().rank(&table, request)?)
}

#[cfg(test)]
mod tests;
