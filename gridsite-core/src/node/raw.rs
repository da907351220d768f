//! Caller-supplied node data, before validation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Metric, NodeMetrics};
use crate::DataError;

/// One node as supplied by the caller. Every cell may be absent.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct NodeRecord {
    /// Unique node identifier.
    #[cfg_attr(feature = "serde", serde(rename = "node"))]
    pub id: Option<String>,
    /// State code or name.
    pub state: Option<String>,
    /// County label, informational only.
    #[cfg_attr(feature = "serde", serde(rename = "county_state_pairs", alias = "county"))]
    pub county: Option<String>,
    /// Market operator label. Absent for nodes outside organised markets.
    pub iso: Option<String>,
    /// Numeric attributes.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub metrics: NodeMetrics<Option<f64>>,
}

impl NodeRecord {
    /// Start a record with the identity and location fields filled in.
    ///
    /// # Examples
    /// ```
    /// use gridsite_core::NodeRecord;
    ///
    /// let record = NodeRecord::new("N1", "TX", 31.0, -97.0);
    /// assert_eq!(record.metrics.latitude, Some(31.0));
    /// assert!(record.metrics.avg_lmp.is_none());
    /// ```
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        state: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id: Some(id.into()),
            state: Some(state.into()),
            county: None,
            iso: None,
            metrics: NodeMetrics {
                latitude: Some(latitude),
                longitude: Some(longitude),
                ..NodeMetrics::default()
            },
        }
    }
}

/// Columnar node data with nullable cells.
///
/// Build one by collecting [`NodeRecord`]s or by filling the public columns
/// directly. Columns must all have the same length; [`crate::validate_nodes`]
/// rejects a table where they do not.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawNodeTable {
    /// Node identifiers.
    pub ids: Vec<Option<String>>,
    /// State codes or names.
    pub states: Vec<Option<String>>,
    /// County labels.
    pub counties: Vec<Option<String>>,
    /// Market operator labels.
    pub isos: Vec<Option<String>>,
    /// Numeric columns.
    pub metrics: NodeMetrics<Vec<Option<f64>>>,
}

impl RawNodeTable {
    /// Append one record as a new row.
    pub fn push(&mut self, record: NodeRecord) {
        let NodeRecord {
            id,
            state,
            county,
            iso,
            metrics,
        } = record;
        self.ids.push(id);
        self.states.push(state);
        self.counties.push(county);
        self.isos.push(iso);
        for metric in Metric::ALL {
            self.metrics.get_mut(metric).push(*metrics.get(metric));
        }
    }

    /// Number of rows, taken from the identifier column.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the table has no rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Confirm every column has one value per row.
    ///
    /// # Errors
    /// Returns [`DataError::InconsistentColumns`] naming the first column
    /// whose length differs from the identifier column.
    pub fn check_shape(&self) -> Result<(), DataError> {
        let expected = self.len();
        let text_columns = [
            ("state", self.states.len()),
            ("county_state_pairs", self.counties.len()),
            ("iso", self.isos.len()),
        ];
        let metric_columns = Metric::ALL
            .into_iter()
            .map(|metric| (metric.as_str(), self.metrics.get(metric).len()));
        for (column, found) in text_columns.into_iter().chain(metric_columns) {
            if found != expected {
                return Err(DataError::InconsistentColumns {
                    column,
                    expected,
                    found,
                });
            }
        }
        Ok(())
    }
}

impl Extend<NodeRecord> for RawNodeTable {
    fn extend<I: IntoIterator<Item = NodeRecord>>(&mut self, iter: I) {
        for record in iter {
            self.push(record);
        }
    }
}

impl FromIterator<NodeRecord> for RawNodeTable {
    fn from_iter<I: IntoIterator<Item = NodeRecord>>(iter: I) -> Self {
        let mut table = Self::default();
        table.extend(iter);
        table
    }
}
