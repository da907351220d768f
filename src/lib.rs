//! Facade crate for the grid node siting engine.
//!
//! This crate re-exports the node data model, validation and request types
//! from `gridsite-core` together with the scoring and ranking entry points
//! from `gridsite-scorer`.
//!
//! # Examples
//!
//! ```
//! use gridsite_engine::{
//!     LoadType, LocationFilter, NodeRecord, RankingRequest, RawNodeTable, rank_nodes,
//! };
//!
//! let nodes: RawNodeTable = [
//!     ("TX_1", 29.76, -95.37, 28.0),
//!     ("TX_2", 32.78, -96.80, 31.0),
//! ]
//! .into_iter()
//! .map(|(id, latitude, longitude, price)| {
//!     let mut record = NodeRecord::new(id, "TX", latitude, longitude);
//!     record.metrics.avg_lmp = Some(price);
//!     record.metrics.land_price_per_acre = Some(3_000.0);
//!     record.metrics.emissions_intensity = Some(420.0);
//!     record
//! })
//! .collect();
//! let request = RankingRequest::new(LoadType::DataCenterFlexible, 80.0)
//!     .with_location_filter(LocationFilter::states(["Texas"])?);
//! let ranked = rank_nodes(&nodes, &request)?;
//! assert_eq!(ranked.node_ids().next(), Some("TX_1"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]

pub use gridsite_core::{
    Component, ConfigError, DataError, LoadType, LocationFilter, LocationParams, Metric,
    NON_RTO_PRICE_VARIANCE, NodeMetrics, NodeRecord, NodeTable, RadialFilter, RankedTable,
    RankingParams, RankingRequest, RawNodeTable, ResourceConfig, ScoreRecord, StateCode,
    ValidationReport, WeightVector, apply_location_filter, haversine_km, validate_nodes,
};
pub use gridsite_scorer::{
    ComponentScores, NodeRanker, QueueWeights, RankingConfig, RankingError, rank_nodes,
    resolve_weights,
};

#[cfg(feature = "test-support")]
pub use gridsite_core::test_support;
