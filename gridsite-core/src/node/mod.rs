//! Node data: numeric metric columns, raw input tables, and the validated
//! working table.
//!
//! Numeric data lives in [`NodeMetrics`], one field per [`Metric`]. The same
//! shape carries a single row (`NodeMetrics<f64>`), a nullable raw column set
//! (`NodeMetrics<Vec<Option<f64>>>`), or a clean column set
//! (`NodeMetrics<Vec<f64>>`).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod raw;
mod table;

pub use raw::{NodeRecord, RawNodeTable};
pub use table::NodeTable;

/// Price-variance value marking a node outside an organised market.
///
/// Resource scenarios never scale the variability exposure of these nodes.
pub const NON_RTO_PRICE_VARIANCE: f64 = -1.0;

/// Report whether a price-variance value is the non-RTO sentinel.
///
/// # Examples
/// ```
/// use gridsite_core::{NON_RTO_PRICE_VARIANCE, is_non_rto};
///
/// assert!(is_non_rto(NON_RTO_PRICE_VARIANCE));
/// assert!(!is_non_rto(0.0));
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "sentinel detection compares within machine epsilon"
)]
#[must_use]
pub fn is_non_rto(price_variance: f64) -> bool {
    (price_variance - NON_RTO_PRICE_VARIANCE).abs() < f64::EPSILON
}

/// Numeric node attributes.
///
/// Critical metrics must be present for a row to survive validation; the
/// remainder are imputed from column medians when missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "snake_case"))]
pub enum Metric {
    /// Latitude in decimal degrees.
    Latitude,
    /// Longitude in decimal degrees.
    Longitude,
    /// Average locational marginal price, $/MWh.
    AvgLmp,
    /// Average land price, $/acre.
    LandPricePerAcre,
    /// Grid carbon intensity, kg CO2/MWh.
    EmissionsIntensity,
    /// Interconnection capacity waiting in the queue, MW.
    QueuePendingMw,
    /// Share of queued projects at an advanced study stage.
    QueueAdvancedShare,
    /// Queue congestion pressure index.
    QueuePressureIndex,
    /// Share of queued capacity that is renewable generation or storage.
    QueueGreenShare,
    /// Price-variance indicator, or [`NON_RTO_PRICE_VARIANCE`].
    PriceVariance,
    /// Data-center policy fit.
    PolicyFitDatacenter,
    /// Electrolyzer policy fit.
    PolicyFitElectrolyzer,
    /// State data-center incentive level.
    StateDcIncentiveLevel,
    /// State clean-energy friendliness.
    StateCleanEnergyFriendly,
    /// Whether the state hosts a hydrogen hub.
    IsH2HubState,
    /// Whether the utility publishes a hosting-capacity map.
    HasHostingCapacityMap,
}

impl Metric {
    /// Every metric, critical ones first.
    pub const ALL: [Self; 16] = [
        Self::Latitude,
        Self::Longitude,
        Self::AvgLmp,
        Self::LandPricePerAcre,
        Self::EmissionsIntensity,
        Self::QueuePendingMw,
        Self::QueueAdvancedShare,
        Self::QueuePressureIndex,
        Self::QueueGreenShare,
        Self::PriceVariance,
        Self::PolicyFitDatacenter,
        Self::PolicyFitElectrolyzer,
        Self::StateDcIncentiveLevel,
        Self::StateCleanEnergyFriendly,
        Self::IsH2HubState,
        Self::HasHostingCapacityMap,
    ];

    /// Column name used by the source data.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
            Self::AvgLmp => "avg_lmp",
            Self::LandPricePerAcre => "avg_price_per_acre",
            Self::EmissionsIntensity => "county_emissions_intensity_kg_per_mwh",
            Self::QueuePendingMw => "queue_pending_mw",
            Self::QueueAdvancedShare => "queue_advanced_share",
            Self::QueuePressureIndex => "queue_pressure_index",
            Self::QueueGreenShare => "queue_renewable_storage_share",
            Self::PriceVariance => "price_variance_score",
            Self::PolicyFitDatacenter => "policy_fit_datacenter",
            Self::PolicyFitElectrolyzer => "policy_fit_electrolyzer",
            Self::StateDcIncentiveLevel => "state_dc_incentive_level",
            Self::StateCleanEnergyFriendly => "state_clean_energy_friendly",
            Self::IsH2HubState => "is_h2_hub_state",
            Self::HasHostingCapacityMap => "has_hosting_capacity_map",
        }
    }

    /// Whether a missing value drops the row instead of being imputed.
    #[must_use]
    pub const fn is_critical(self) -> bool {
        matches!(
            self,
            Self::Latitude
                | Self::Longitude
                | Self::AvgLmp
                | Self::LandPricePerAcre
                | Self::EmissionsIntensity
        )
    }

    /// Inclusive valid range; values outside it are clipped.
    #[must_use]
    pub const fn domain(self) -> (f64, f64) {
        match self {
            Self::Latitude => (-90.0, 90.0),
            Self::Longitude => (-180.0, 180.0),
            Self::AvgLmp => (f64::NEG_INFINITY, f64::INFINITY),
            Self::LandPricePerAcre
            | Self::EmissionsIntensity
            | Self::QueuePendingMw
            | Self::QueuePressureIndex
            | Self::PriceVariance => (0.0, f64::INFINITY),
            Self::QueueAdvancedShare
            | Self::QueueGreenShare
            | Self::PolicyFitDatacenter
            | Self::PolicyFitElectrolyzer
            | Self::StateDcIncentiveLevel
            | Self::StateCleanEnergyFriendly
            | Self::IsH2HubState
            | Self::HasHostingCapacityMap => (0.0, 1.0),
        }
    }

    /// Value imputed when a non-critical column has no values at all.
    #[must_use]
    pub const fn fallback(self) -> f64 {
        match self {
            Self::PriceVariance => NON_RTO_PRICE_VARIANCE,
            _ => 0.0,
        }
    }

    /// Clip `value` into [`Metric::domain`].
    ///
    /// The non-RTO sentinel passes through unchanged for
    /// [`Metric::PriceVariance`].
    #[must_use]
    pub fn clip(self, value: f64) -> f64 {
        if self == Self::PriceVariance && is_non_rto(value) {
            return value;
        }
        let (low, high) = self.domain();
        value.clamp(low, high)
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One value of type `T` per [`Metric`].
///
/// Field names follow Rust conventions; serialised names follow the source
/// data columns (see [`Metric::as_str`]).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(default, bound(deserialize = "T: Deserialize<'de> + Default"))
)]
pub struct NodeMetrics<T> {
    /// Latitude in decimal degrees.
    pub latitude: T,
    /// Longitude in decimal degrees.
    pub longitude: T,
    /// Average locational marginal price, $/MWh.
    pub avg_lmp: T,
    /// Average land price, $/acre.
    #[cfg_attr(feature = "serde", serde(rename = "avg_price_per_acre"))]
    pub land_price_per_acre: T,
    /// Grid carbon intensity, kg CO2/MWh.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "county_emissions_intensity_kg_per_mwh")
    )]
    pub emissions_intensity: T,
    /// Interconnection capacity waiting in the queue, MW.
    pub queue_pending_mw: T,
    /// Share of queued projects at an advanced study stage.
    pub queue_advanced_share: T,
    /// Queue congestion pressure index.
    pub queue_pressure_index: T,
    /// Share of queued capacity that is renewable generation or storage.
    #[cfg_attr(feature = "serde", serde(rename = "queue_renewable_storage_share"))]
    pub queue_green_share: T,
    /// Price-variance indicator.
    #[cfg_attr(feature = "serde", serde(rename = "price_variance_score"))]
    pub price_variance: T,
    /// Data-center policy fit.
    pub policy_fit_datacenter: T,
    /// Electrolyzer policy fit.
    pub policy_fit_electrolyzer: T,
    /// State data-center incentive level.
    pub state_dc_incentive_level: T,
    /// State clean-energy friendliness.
    pub state_clean_energy_friendly: T,
    /// Hydrogen hub membership flag.
    pub is_h2_hub_state: T,
    /// Hosting-capacity map availability flag.
    pub has_hosting_capacity_map: T,
}

impl<T> NodeMetrics<T> {
    /// Build a value for every metric from a function.
    #[must_use]
    pub fn from_fn<F>(mut value_of: F) -> Self
    where
        F: FnMut(Metric) -> T,
    {
        Self {
            latitude: value_of(Metric::Latitude),
            longitude: value_of(Metric::Longitude),
            avg_lmp: value_of(Metric::AvgLmp),
            land_price_per_acre: value_of(Metric::LandPricePerAcre),
            emissions_intensity: value_of(Metric::EmissionsIntensity),
            queue_pending_mw: value_of(Metric::QueuePendingMw),
            queue_advanced_share: value_of(Metric::QueueAdvancedShare),
            queue_pressure_index: value_of(Metric::QueuePressureIndex),
            queue_green_share: value_of(Metric::QueueGreenShare),
            price_variance: value_of(Metric::PriceVariance),
            policy_fit_datacenter: value_of(Metric::PolicyFitDatacenter),
            policy_fit_electrolyzer: value_of(Metric::PolicyFitElectrolyzer),
            state_dc_incentive_level: value_of(Metric::StateDcIncentiveLevel),
            state_clean_energy_friendly: value_of(Metric::StateCleanEnergyFriendly),
            is_h2_hub_state: value_of(Metric::IsH2HubState),
            has_hosting_capacity_map: value_of(Metric::HasHostingCapacityMap),
        }
    }

    /// Borrow the value for `metric`.
    #[must_use]
    pub const fn get(&self, metric: Metric) -> &T {
        match metric {
            Metric::Latitude => &self.latitude,
            Metric::Longitude => &self.longitude,
            Metric::AvgLmp => &self.avg_lmp,
            Metric::LandPricePerAcre => &self.land_price_per_acre,
            Metric::EmissionsIntensity => &self.emissions_intensity,
            Metric::QueuePendingMw => &self.queue_pending_mw,
            Metric::QueueAdvancedShare => &self.queue_advanced_share,
            Metric::QueuePressureIndex => &self.queue_pressure_index,
            Metric::QueueGreenShare => &self.queue_green_share,
            Metric::PriceVariance => &self.price_variance,
            Metric::PolicyFitDatacenter => &self.policy_fit_datacenter,
            Metric::PolicyFitElectrolyzer => &self.policy_fit_electrolyzer,
            Metric::StateDcIncentiveLevel => &self.state_dc_incentive_level,
            Metric::StateCleanEnergyFriendly => &self.state_clean_energy_friendly,
            Metric::IsH2HubState => &self.is_h2_hub_state,
            Metric::HasHostingCapacityMap => &self.has_hosting_capacity_map,
        }
    }

    /// Mutably borrow the value for `metric`.
    pub fn get_mut(&mut self, metric: Metric) -> &mut T {
        match metric {
            Metric::Latitude => &mut self.latitude,
            Metric::Longitude => &mut self.longitude,
            Metric::AvgLmp => &mut self.avg_lmp,
            Metric::LandPricePerAcre => &mut self.land_price_per_acre,
            Metric::EmissionsIntensity => &mut self.emissions_intensity,
            Metric::QueuePendingMw => &mut self.queue_pending_mw,
            Metric::QueueAdvancedShare => &mut self.queue_advanced_share,
            Metric::QueuePressureIndex => &mut self.queue_pressure_index,
            Metric::QueueGreenShare => &mut self.queue_green_share,
            Metric::PriceVariance => &mut self.price_variance,
            Metric::PolicyFitDatacenter => &mut self.policy_fit_datacenter,
            Metric::PolicyFitElectrolyzer => &mut self.policy_fit_electrolyzer,
            Metric::StateDcIncentiveLevel => &mut self.state_dc_incentive_level,
            Metric::StateCleanEnergyFriendly => &mut self.state_clean_energy_friendly,
            Metric::IsH2HubState => &mut self.is_h2_hub_state,
            Metric::HasHostingCapacityMap => &mut self.has_hosting_capacity_map,
        }
    }

    /// Derive a new set of values from the existing ones.
    #[must_use]
    pub fn map_ref<U, F>(&self, mut transform: F) -> NodeMetrics<U>
    where
        F: FnMut(Metric, &T) -> U,
    {
        NodeMetrics::from_fn(|metric| transform(metric, self.get(metric)))
    }
}
