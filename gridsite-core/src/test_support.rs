//! Node builders shared by unit tests, behaviour tests and benchmarks.
//!
//! Every builder starts from a fully populated, unremarkable node so a test
//! only states the fields it cares about.

use crate::{Metric, NON_RTO_PRICE_VARIANCE, NodeMetrics, NodeRecord, RawNodeTable};

/// Metric values given to every node built by [`NodeBuilder`].
#[must_use]
pub fn default_metrics() -> NodeMetrics<Option<f64>> {
    NodeMetrics::from_fn(|metric| {
        Some(match metric {
            Metric::Latitude => 39.0,
            Metric::Longitude => -98.0,
            Metric::AvgLmp => 40.0,
            Metric::LandPricePerAcre => 5_000.0,
            Metric::EmissionsIntensity => 400.0,
            Metric::QueuePendingMw => 1_000.0,
            Metric::QueuePressureIndex => 1.0,
            Metric::PriceVariance => 0.5,
            Metric::QueueAdvancedShare
            | Metric::QueueGreenShare
            | Metric::PolicyFitDatacenter
            | Metric::PolicyFitElectrolyzer
            | Metric::StateDcIncentiveLevel
            | Metric::StateCleanEnergyFriendly
            | Metric::IsH2HubState
            | Metric::HasHostingCapacityMap => 0.5,
        })
    })
}

/// Builder for a single [`NodeRecord`].
///
/// # Examples
/// ```
/// use gridsite_core::test_support::NodeBuilder;
///
/// let record = NodeBuilder::new("N1").state("TX").avg_lmp(22.0).build();
/// assert_eq!(record.metrics.avg_lmp, Some(22.0));
/// ```
#[derive(Debug, Clone)]
pub struct NodeBuilder {
    record: NodeRecord,
}

impl NodeBuilder {
    /// Start a node in Kansas with default metrics.
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self {
            record: NodeRecord {
                id: Some(id.to_owned()),
                state: Some("KS".to_owned()),
                county: Some(format!("{id} County")),
                iso: Some("SPP".to_owned()),
                metrics: default_metrics(),
            },
        }
    }

    /// Set the state.
    #[must_use]
    pub fn state(mut self, state: &str) -> Self {
        self.record.state = Some(state.to_owned());
        self
    }

    /// Set the market operator label.
    #[must_use]
    pub fn iso(mut self, iso: &str) -> Self {
        self.record.iso = Some(iso.to_owned());
        self
    }

    /// Set the coordinates.
    #[must_use]
    pub const fn location(mut self, latitude: f64, longitude: f64) -> Self {
        self.record.metrics.latitude = Some(latitude);
        self.record.metrics.longitude = Some(longitude);
        self
    }

    /// Set the average locational marginal price.
    #[must_use]
    pub const fn avg_lmp(mut self, price: f64) -> Self {
        self.record.metrics.avg_lmp = Some(price);
        self
    }

    /// Mark the node as outside an organised market.
    #[must_use]
    pub fn non_rto(mut self) -> Self {
        self.record.iso = None;
        self.record.metrics.price_variance = Some(NON_RTO_PRICE_VARIANCE);
        self
    }

    /// Set any metric. `None` leaves the cell missing.
    #[must_use]
    pub fn metric(mut self, metric: Metric, value: Option<f64>) -> Self {
        *self.record.metrics.get_mut(metric) = value;
        self
    }

    /// Finish the record.
    #[must_use]
    pub fn build(self) -> NodeRecord {
        self.record
    }
}

/// Identical nodes that differ only in price, named `N0`, `N1`, and so on.
#[must_use]
pub fn nodes_priced(prices: &[f64]) -> RawNodeTable {
    prices
        .iter()
        .enumerate()
        .map(|(index, &price)| NodeBuilder::new(&format!("N{index}")).avg_lmp(price).build())
        .collect()
}

/// A small table spread over California, Texas and Wisconsin.
///
/// Holds three California nodes, two in Texas and one in Wisconsin, with
/// distinct prices and locations.
#[must_use]
pub fn three_state_nodes() -> RawNodeTable {
    [
        ("CA_1", "CA", 37.77, -122.42, 45.0),
        ("CA_2", "CA", 34.05, -118.24, 52.0),
        ("CA_3", "CA", 38.58, -121.49, 38.0),
        ("TX_1", "TX", 29.76, -95.37, 28.0),
        ("TX_2", "TX", 32.78, -96.80, 31.0),
        ("WI_1", "WI", 43.07, -89.40, 35.0),
    ]
    .into_iter()
    .map(|(id, state, latitude, longitude, price)| {
        NodeBuilder::new(id)
            .state(state)
            .location(latitude, longitude)
            .avg_lmp(price)
            .build()
    })
    .collect()
}
