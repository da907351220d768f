//! The validated node table.

use geo::Point;

use super::{Metric, NodeMetrics};
use crate::column::{take, value_at};

/// Fully populated node columns produced by [`crate::validate_nodes`].
///
/// Every cell is present and inside its clip domain, and node identifiers are
/// unique. The table is read-only; filtering produces a new table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeTable {
    pub(crate) ids: Vec<String>,
    pub(crate) states: Vec<String>,
    pub(crate) counties: Vec<String>,
    pub(crate) isos: Vec<String>,
    pub(crate) metrics: NodeMetrics<Vec<f64>>,
}

impl NodeTable {
    /// Number of nodes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the table holds no nodes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Node identifiers.
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Upper-case two-letter state codes.
    #[must_use]
    pub fn states(&self) -> &[String] {
        &self.states
    }

    /// County labels; empty when unknown.
    #[must_use]
    pub fn counties(&self) -> &[String] {
        &self.counties
    }

    /// Market operator labels; empty for unknown or non-RTO nodes.
    #[must_use]
    pub fn isos(&self) -> &[String] {
        &self.isos
    }

    /// One numeric column.
    #[must_use]
    pub fn metric(&self, metric: Metric) -> &[f64] {
        self.metrics.get(metric)
    }

    /// All numeric columns.
    #[must_use]
    pub const fn metrics(&self) -> &NodeMetrics<Vec<f64>> {
        &self.metrics
    }

    /// Numeric attributes of the node at `index`.
    #[must_use]
    pub fn row_metrics(&self, index: usize) -> NodeMetrics<f64> {
        self.metrics.map_ref(|_, column| value_at(column, index))
    }

    /// Location of the node at `index` (`x` is longitude, `y` latitude).
    #[must_use]
    pub fn location(&self, index: usize) -> Point<f64> {
        Point::new(
            value_at(&self.metrics.longitude, index),
            value_at(&self.metrics.latitude, index),
        )
    }

    /// Row index of the node with identifier `id`.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.ids.iter().position(|candidate| candidate == id)
    }

    /// Keep only the rows whose mask flag is set, preserving order.
    #[must_use]
    pub fn select(&self, mask: &[bool]) -> Self {
        Self {
            ids: take(&self.ids, mask),
            states: take(&self.states, mask),
            counties: take(&self.counties, mask),
            isos: take(&self.isos, mask),
            metrics: self.metrics.map_ref(|_, column| take(column, mask)),
        }
    }
}
