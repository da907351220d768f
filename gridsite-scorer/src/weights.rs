//! Component weight derivation.
//!
//! Every component starts from an equal base weight. Three multiplicative
//! layers then adjust it: load type, load size band, and emissions
//! preference. The product is renormalised to sum to one.

use gridsite_core::{
    Component, ConfigError, LoadType, WeightVector, validate_emissions_preference,
    validate_load_size,
};
#[cfg(feature = "serde")]
use serde::Serialize;

/// Loads below this size, MW, are small.
pub const SMALL_LOAD_LIMIT_MW: f64 = 50.0;
/// Loads above this size, MW, are large.
pub const LARGE_LOAD_LIMIT_MW: f64 = 150.0;
/// Preferences above this value also trim the cost and queue weights.
pub const HIGH_EMISSIONS_PREFERENCE: f64 = 80.0;

const HIGH_PREFERENCE_TRIM: f64 = 0.9;
const COMPONENT_COUNT: f64 = 6.0;

/// Size classification of a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "snake_case"))]
pub enum SizeBand {
    /// Below 50 MW.
    Small,
    /// 50 MW to 150 MW inclusive.
    Medium,
    /// Above 150 MW.
    Large,
}

impl SizeBand {
    /// Classify a load size in MW.
    ///
    /// # Examples
    /// ```
    /// use gridsite_scorer::SizeBand;
    ///
    /// assert_eq!(SizeBand::from_load_size(49.9), SizeBand::Small);
    /// assert_eq!(SizeBand::from_load_size(150.0), SizeBand::Medium);
    /// assert_eq!(SizeBand::from_load_size(150.1), SizeBand::Large);
    /// ```
    #[must_use]
    pub fn from_load_size(load_size_mw: f64) -> Self {
        if load_size_mw < SMALL_LOAD_LIMIT_MW {
            Self::Small
        } else if load_size_mw > LARGE_LOAD_LIMIT_MW {
            Self::Large
        } else {
            Self::Medium
        }
    }
}

/// One multiplier per component.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Multipliers {
    /// Energy cost multiplier.
    pub cost: f64,
    /// Land cost multiplier.
    pub land: f64,
    /// Carbon intensity multiplier.
    pub emissions: f64,
    /// Policy support multiplier.
    pub policy: f64,
    /// Queue congestion multiplier.
    pub queue: f64,
    /// Price variability multiplier.
    pub variability: f64,
}

impl Multipliers {
    /// Multipliers that change nothing.
    pub const NEUTRAL: Self = Self::new(1.0, 1.0, 1.0, 1.0, 1.0, 1.0);

    const fn new(
        cost: f64,
        land: f64,
        emissions: f64,
        policy: f64,
        queue: f64,
        variability: f64,
    ) -> Self {
        Self {
            cost,
            land,
            emissions,
            policy,
            queue,
            variability,
        }
    }

    /// Load-type layer.
    #[must_use]
    pub const fn for_load_type(load_type: LoadType) -> Self {
        match load_type {
            LoadType::DataCenterAlwaysOn => Self::new(1.2, 1.7, 1.0, 1.2, 1.3, 1.4),
            LoadType::DataCenterFlexible => Self::new(1.4, 1.3, 1.0, 1.1, 1.1, 0.7),
            LoadType::H2ElectrolyzerFirm => Self::new(1.5, 0.3, 1.7, 1.3, 1.6, 1.0),
            LoadType::IndustrialContinuous => Self::new(1.5, 1.0, 0.9, 1.0, 1.3, 1.2),
            LoadType::IndustrialFlexible => Self::new(1.5, 1.0, 0.9, 1.0, 1.2, 0.6),
            LoadType::CommercialCampus => Self::NEUTRAL,
        }
    }

    /// Load-size layer.
    #[must_use]
    pub const fn for_size_band(band: SizeBand) -> Self {
        match band {
            SizeBand::Small => Self {
                queue: 0.8,
                variability: 0.8,
                ..Self::NEUTRAL
            },
            SizeBand::Medium => Self::NEUTRAL,
            SizeBand::Large => Self {
                queue: 1.4,
                variability: 1.3,
                ..Self::NEUTRAL
            },
        }
    }

    /// Emissions-preference layer for a preference in `0.0..=100.0`.
    ///
    /// The emissions multiplier rises linearly from 0.5 to 2.0. Above
    /// [`HIGH_EMISSIONS_PREFERENCE`] cost and queue are trimmed by 10%.
    #[expect(
        clippy::float_arithmetic,
        reason = "the preference maps linearly onto the multiplier"
    )]
    #[must_use]
    pub fn for_emissions_preference(preference: f64) -> Self {
        let emissions = 0.5 + 1.5 * preference / 100.0;
        let trim = if preference > HIGH_EMISSIONS_PREFERENCE {
            HIGH_PREFERENCE_TRIM
        } else {
            1.0
        };
        Self {
            cost: trim,
            emissions,
            queue: trim,
            ..Self::NEUTRAL
        }
    }

    /// Multiplier for `component`.
    #[must_use]
    pub const fn get(&self, component: Component) -> f64 {
        match component {
            Component::Cost => self.cost,
            Component::Land => self.land,
            Component::Emissions => self.emissions,
            Component::Policy => self.policy,
            Component::Queue => self.queue,
            Component::Variability => self.variability,
        }
    }
}

/// Derive the component weights for a load.
///
/// # Errors
/// Returns [`ConfigError::InvalidValue`] when the load size is not positive
/// or the emissions preference is outside `0.0..=100.0`.
///
/// # Examples
/// ```
/// use gridsite_core::{Component, LoadType};
/// use gridsite_scorer::resolve_weights;
///
/// let weights = resolve_weights(LoadType::CommercialCampus, 100.0, 0.0)?;
/// assert!((weights.total() - 1.0).abs() < 1e-9);
/// assert!(weights.get(Component::Emissions) < weights.get(Component::Cost));
/// # Ok::<(), gridsite_core::ConfigError>(())
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "weights are products of layer multipliers"
)]
pub fn resolve_weights(
    load_type: LoadType,
    load_size_mw: f64,
    emissions_preference: f64,
) -> Result<WeightVector, ConfigError> {
    let size = validate_load_size(load_size_mw)?;
    let preference = validate_emissions_preference(emissions_preference)?;
    let layers = [
        Multipliers::for_load_type(load_type),
        Multipliers::for_size_band(SizeBand::from_load_size(size)),
        Multipliers::for_emissions_preference(preference),
    ];
    let base = 1.0 / COMPONENT_COUNT;
    WeightVector::try_from_fn(|component| {
        layers
            .iter()
            .fold(base, |weight, layer| weight * layer.get(component))
    })
    .ok_or_else(|| ConfigError::InvalidConfig {
        reason: format!("weights for {load_type} at {size} MW do not normalise"),
    })
}
