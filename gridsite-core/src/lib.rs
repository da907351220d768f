//! Core domain types for the Gridsite node-ranking engine.
//!
//! The crate owns everything that describes *what* is being ranked:
//! - [`RawNodeTable`] and [`NodeRecord`] hold caller-supplied node data with
//!   nullable cells, arranged as columns.
//! - [`validate_nodes`] turns a raw table into a fully populated
//!   [`NodeTable`], dropping, imputing, and clipping as required.
//! - [`RankingRequest`] and its closed enums ([`LoadType`],
//!   [`ResourceConfig`], [`LocationFilter`]) describe a ranking call.
//! - [`apply_location_filter`] restricts a table by state or by great-circle
//!   radius.
//! - [`ScoreRecord`] and [`RankedTable`] carry ranking output.
//!
//! Every operation works on whole columns and returns new values; a validated
//! [`NodeTable`] is never mutated, so it can be shared across threads and
//! reused for many ranking calls.
//!
//! # Examples
//!
//! ```
//! use gridsite_core::{NodeRecord, RawNodeTable, validate_nodes};
//!
//! let mut record = NodeRecord::new("ALPHA_NODE", "CA", 37.7, -122.4);
//! record.metrics.avg_lmp = Some(31.5);
//! record.metrics.land_price_per_acre = Some(12_000.0);
//! record.metrics.emissions_intensity = Some(210.0);
//!
//! let raw: RawNodeTable = std::iter::once(record).collect();
//! let (table, report) = validate_nodes(&raw)?;
//! assert_eq!(table.len(), 1);
//! assert_eq!(report.retained, 1);
//! # Ok::<(), gridsite_core::DataError>(())
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod column;
mod component;
mod error;
mod node;
mod record;
mod request;
pub mod spatial;
mod states;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
mod validate;

pub use component::{Component, WeightVector};
pub use error::{ConfigError, DataError};
pub use node::{
    Metric, NON_RTO_PRICE_VARIANCE, NodeMetrics, NodeRecord, NodeTable, RawNodeTable, is_non_rto,
};
pub use record::{RankedTable, ScoreRecord};
pub use request::{
    LoadType, LocationFilter, LocationParams, RadialFilter, RankingParams, RankingRequest,
    ResourceConfig, validate_emissions_preference, validate_load_size,
};
pub use spatial::{EARTH_RADIUS_KM, apply_location_filter, haversine_km};
pub use states::StateCode;
pub use validate::{ValidationReport, validate_nodes};
