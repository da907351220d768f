//! Ranking requests and the closed types that describe them.
//!
//! [`RankingRequest`] is the typed form used by the engine. [`RankingParams`]
//! mirrors the loosely typed shape an HTTP or CLI layer receives and converts
//! into a request with `TryFrom`, naming the offending field on failure.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use geo::Point;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{ConfigError, StateCode};

const DEFAULT_EMISSIONS_PREFERENCE: f64 = 50.0;
const DEFAULT_TOP_N: usize = 10;

/// Category of electrical load being sited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum LoadType {
    /// Data center with a flat, always-on load.
    DataCenterAlwaysOn,
    /// Data center able to shift or curtail load.
    DataCenterFlexible,
    /// Electrolyzer running on firm supply.
    H2ElectrolyzerFirm,
    /// Industrial plant with continuous load.
    IndustrialContinuous,
    /// Industrial plant with flexible load.
    IndustrialFlexible,
    /// Commercial campus.
    CommercialCampus,
}

impl LoadType {
    /// Every load type.
    pub const ALL: [Self; 6] = [
        Self::DataCenterAlwaysOn,
        Self::DataCenterFlexible,
        Self::H2ElectrolyzerFirm,
        Self::IndustrialContinuous,
        Self::IndustrialFlexible,
        Self::CommercialCampus,
    ];

    /// Return the load type key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DataCenterAlwaysOn => "data_center_always_on",
            Self::DataCenterFlexible => "data_center_flexible",
            Self::H2ElectrolyzerFirm => "h2_electrolyzer_firm",
            Self::IndustrialContinuous => "industrial_continuous",
            Self::IndustrialFlexible => "industrial_flexible",
            Self::CommercialCampus => "commercial_campus",
        }
    }
}

impl FromStr for LoadType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|load_type| load_type.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| ConfigError::UnknownLoadType {
                value: s.to_owned(),
            })
    }
}

impl fmt::Display for LoadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// On-site resources that reduce exposure to wholesale price variability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ResourceConfig {
    /// Grid supply only.
    #[default]
    None,
    /// On-site solar.
    Solar,
    /// On-site battery storage.
    Battery,
    /// Solar paired with storage.
    #[cfg_attr(feature = "serde", serde(alias = "solar+battery"))]
    SolarBattery,
    /// Firm on-site generation.
    FirmGen,
}

impl ResourceConfig {
    /// Every resource configuration.
    pub const ALL: [Self; 5] = [
        Self::None,
        Self::Solar,
        Self::Battery,
        Self::SolarBattery,
        Self::FirmGen,
    ];

    /// Return the resource configuration key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Solar => "solar",
            Self::Battery => "battery",
            Self::SolarBattery => "solar_battery",
            Self::FirmGen => "firm_gen",
        }
    }

    /// Fraction of baseline price-variability exposure that remains.
    ///
    /// # Examples
    /// ```
    /// use gridsite_core::ResourceConfig;
    ///
    /// assert_eq!(ResourceConfig::None.variability_adjustment_factor(), 1.0);
    /// assert_eq!(ResourceConfig::FirmGen.variability_adjustment_factor(), 0.25);
    /// ```
    #[must_use]
    pub const fn variability_adjustment_factor(self) -> f64 {
        match self {
            Self::None => 1.0,
            Self::Solar => 0.7,
            Self::Battery => 0.6,
            Self::SolarBattery => 0.4,
            Self::FirmGen => 0.25,
        }
    }
}

impl FromStr for ResourceConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        if key == "solar+battery" {
            return Ok(Self::SolarBattery);
        }
        Self::ALL
            .into_iter()
            .find(|config| config.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| ConfigError::UnknownResourceConfig {
                value: s.to_owned(),
            })
    }
}

impl fmt::Display for ResourceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A circle on the Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialFilter {
    center: Point<f64>,
    radius_km: f64,
}

impl RadialFilter {
    /// Build a radial filter around (`latitude`, `longitude`).
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] when a coordinate is outside its
    /// range or the radius is not a positive finite number.
    pub fn new(latitude: f64, longitude: f64, radius_km: f64) -> Result<Self, ConfigError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(ConfigError::invalid("lat", "must be between -90 and 90"));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(ConfigError::invalid("lon", "must be between -180 and 180"));
        }
        if !radius_km.is_finite() || radius_km <= 0.0 {
            return Err(ConfigError::invalid("radius_km", "must be a positive number"));
        }
        Ok(Self {
            center: Point::new(longitude, latitude),
            radius_km,
        })
    }

    /// Circle center; `x` is longitude and `y` latitude.
    #[must_use]
    pub const fn center(&self) -> Point<f64> {
        self.center
    }

    /// Radius in kilometres.
    #[must_use]
    pub const fn radius_km(&self) -> f64 {
        self.radius_km
    }
}

/// Geographic restriction on candidate nodes.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LocationFilter {
    /// Every node is a candidate.
    #[default]
    None,
    /// Nodes in one of these states.
    ByStates(BTreeSet<StateCode>),
    /// Nodes within a great-circle radius.
    ByRadius(RadialFilter),
}

impl LocationFilter {
    /// Build a state filter from codes or full state names.
    ///
    /// # Errors
    /// Returns [`ConfigError::UnknownState`] for an unrecognised entry and
    /// [`ConfigError::InvalidValue`] for an empty list.
    ///
    /// # Examples
    /// ```
    /// use gridsite_core::LocationFilter;
    ///
    /// let filter = LocationFilter::states(["CA", "Texas"])?;
    /// assert!(matches!(filter, LocationFilter::ByStates(ref set) if set.len() == 2));
    /// # Ok::<(), gridsite_core::ConfigError>(())
    /// ```
    pub fn states<I, S>(states: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let codes = states
            .into_iter()
            .map(|state| state.as_ref().parse::<StateCode>())
            .collect::<Result<BTreeSet<_>, _>>()?;
        if codes.is_empty() {
            return Err(ConfigError::invalid("states", "must name at least one state"));
        }
        Ok(Self::ByStates(codes))
    }

    /// Build a radial filter.
    ///
    /// # Errors
    /// See [`RadialFilter::new`].
    pub fn radius(latitude: f64, longitude: f64, radius_km: f64) -> Result<Self, ConfigError> {
        RadialFilter::new(latitude, longitude, radius_km).map(Self::ByRadius)
    }
}

/// Check a load size and return it unchanged.
///
/// # Errors
/// Returns [`ConfigError::InvalidValue`] unless the size is positive and
/// finite.
pub fn validate_load_size(load_size_mw: f64) -> Result<f64, ConfigError> {
    if load_size_mw.is_finite() && load_size_mw > 0.0 {
        Ok(load_size_mw)
    } else {
        Err(ConfigError::invalid("load_size_mw", "must be a positive number"))
    }
}

/// Check an emissions preference and return it unchanged.
///
/// # Errors
/// Returns [`ConfigError::InvalidValue`] unless the preference lies in
/// `0.0..=100.0`.
pub fn validate_emissions_preference(preference: f64) -> Result<f64, ConfigError> {
    if (0.0..=100.0).contains(&preference) {
        Ok(preference)
    } else {
        Err(ConfigError::invalid(
            "emissions_preference",
            "must be between 0 and 100",
        ))
    }
}

/// A fully typed ranking request.
///
/// # Examples
/// ```
/// use gridsite_core::{LoadType, LocationFilter, RankingRequest, ResourceConfig};
///
/// let request = RankingRequest::new(LoadType::DataCenterAlwaysOn, 120.0)
///     .with_location_filter(LocationFilter::states(["TX"])?)
///     .with_resource_config(ResourceConfig::SolarBattery)
///     .with_top_n(5);
/// request.validate()?;
/// # Ok::<(), gridsite_core::ConfigError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RankingRequest {
    /// Category of load.
    pub load_type: LoadType,
    /// Load size, MW.
    pub load_size_mw: f64,
    /// Geographic restriction.
    pub location_filter: LocationFilter,
    /// Emissions sensitivity on a 0 to 100 scale.
    pub emissions_preference: f64,
    /// On-site resource scenario.
    pub resource_config: ResourceConfig,
    /// Number of ranked nodes to return.
    pub top_n: usize,
}

impl RankingRequest {
    /// Start a request with no location filter, a neutral emissions
    /// preference of 50, no on-site resources, and ten results.
    #[must_use]
    pub const fn new(load_type: LoadType, load_size_mw: f64) -> Self {
        Self {
            load_type,
            load_size_mw,
            location_filter: LocationFilter::None,
            emissions_preference: DEFAULT_EMISSIONS_PREFERENCE,
            resource_config: ResourceConfig::None,
            top_n: DEFAULT_TOP_N,
        }
    }

    /// Replace the location filter.
    #[must_use]
    pub fn with_location_filter(mut self, location_filter: LocationFilter) -> Self {
        self.location_filter = location_filter;
        self
    }

    /// Replace the emissions preference.
    #[must_use]
    pub const fn with_emissions_preference(mut self, preference: f64) -> Self {
        self.emissions_preference = preference;
        self
    }

    /// Replace the resource scenario.
    #[must_use]
    pub const fn with_resource_config(mut self, resource_config: ResourceConfig) -> Self {
        self.resource_config = resource_config;
        self
    }

    /// Replace the result count.
    #[must_use]
    pub const fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Check every field.
    ///
    /// # Errors
    /// Returns the first [`ConfigError`] found, naming the field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_load_size(self.load_size_mw)?;
        validate_emissions_preference(self.emissions_preference)?;
        if self.top_n == 0 {
            return Err(ConfigError::invalid("top_n", "must be a positive integer"));
        }
        if matches!(&self.location_filter, LocationFilter::ByStates(states) if states.is_empty()) {
            return Err(ConfigError::invalid("states", "must name at least one state"));
        }
        Ok(())
    }
}

/// Location filter fields as received from an outer layer.
///
/// Supply either `states`, or all of `lat`, `lon` and `radius_km`, or
/// nothing.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize), serde(default))]
pub struct LocationParams {
    /// State codes or names.
    pub states: Option<Vec<String>>,
    /// Center latitude.
    pub lat: Option<f64>,
    /// Center longitude.
    pub lon: Option<f64>,
    /// Radius, km.
    pub radius_km: Option<f64>,
}

impl TryFrom<LocationParams> for LocationFilter {
    type Error = ConfigError;

    fn try_from(params: LocationParams) -> Result<Self, Self::Error> {
        let LocationParams {
            states,
            lat,
            lon,
            radius_km,
        } = params;
        let radial = lat.is_some() || lon.is_some() || radius_km.is_some();
        match states {
            Some(_) if radial => Err(ConfigError::ConflictingLocationModes),
            Some(names) => Self::states(names),
            None if !radial => Ok(Self::None),
            None => {
                let latitude = lat.ok_or(ConfigError::MissingField { field: "lat" })?;
                let longitude = lon.ok_or(ConfigError::MissingField { field: "lon" })?;
                let radius = radius_km.ok_or(ConfigError::MissingField { field: "radius_km" })?;
                Self::radius(latitude, longitude, radius)
            }
        }
    }
}

/// Ranking parameters as received from an outer layer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct RankingParams {
    /// Load type key.
    pub load_type: String,
    /// Load size, MW.
    pub load_size_mw: f64,
    /// Optional location filter.
    #[cfg_attr(feature = "serde", serde(default))]
    pub location_filter: Option<LocationParams>,
    /// Emissions preference, 0 to 100.
    #[cfg_attr(feature = "serde", serde(default = "default_emissions_preference"))]
    pub emissions_preference: f64,
    /// Resource configuration key.
    #[cfg_attr(feature = "serde", serde(default = "default_resource_config"))]
    pub resource_config: String,
    /// Number of results.
    #[cfg_attr(feature = "serde", serde(default = "default_top_n"))]
    pub top_n: i64,
}

#[cfg(feature = "serde")]
const fn default_emissions_preference() -> f64 {
    DEFAULT_EMISSIONS_PREFERENCE
}

#[cfg(feature = "serde")]
fn default_resource_config() -> String {
    ResourceConfig::None.as_str().to_owned()
}

#[cfg(feature = "serde")]
fn default_top_n() -> i64 {
    i64::try_from(DEFAULT_TOP_N).unwrap_or(i64::MAX)
}

impl TryFrom<RankingParams> for RankingRequest {
    type Error = ConfigError;

    fn try_from(params: RankingParams) -> Result<Self, Self::Error> {
        let load_type = params.load_type.parse::<LoadType>()?;
        let resource_config = params.resource_config.parse::<ResourceConfig>()?;
        let location_filter = params
            .location_filter
            .map_or(Ok(LocationFilter::None), LocationFilter::try_from)?;
        let top_n = usize::try_from(params.top_n)
            .map_err(|_| ConfigError::invalid("top_n", "must be a positive integer"))?;
        let request = Self {
            load_type,
            load_size_mw: params.load_size_mw,
            location_filter,
            emissions_preference: params.emissions_preference,
            resource_config,
            top_n,
        };
        request.validate()?;
        Ok(request)
    }
}
