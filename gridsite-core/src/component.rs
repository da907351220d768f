//! Score components and the weight vector that blends them.
//!
//! The six components are fixed; [`Component::ALL`] lists them in the order
//! used for reporting.
//!
//! # Examples
//! ```
//! use gridsite_core::{Component, WeightVector};
//!
//! let weights = WeightVector::try_from_fn(|_| 2.0).expect("positive weights");
//! assert!((weights.get(Component::Cost) - 1.0 / 6.0).abs() < 1e-12);
//! assert_eq!(Component::Queue.as_str(), "queue");
//! ```

#[cfg(feature = "serde")]
use serde::Serialize;

/// A single factor contributing to a node's suitability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "snake_case"))]
pub enum Component {
    /// Energy cost, from the average locational marginal price.
    Cost,
    /// Land cost per acre.
    Land,
    /// Grid carbon intensity.
    Emissions,
    /// Jurisdictional policy support.
    Policy,
    /// Interconnection queue congestion.
    Queue,
    /// Exposure to wholesale price variability.
    Variability,
}

impl Component {
    /// Every component in reporting order.
    pub const ALL: [Self; 6] = [
        Self::Cost,
        Self::Land,
        Self::Emissions,
        Self::Policy,
        Self::Queue,
        Self::Variability,
    ];

    /// Return the component as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cost => "cost",
            Self::Land => "land",
            Self::Emissions => "emissions",
            Self::Policy => "policy",
            Self::Queue => "queue",
            Self::Variability => "variability",
        }
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalised, non-negative weights for the six components.
///
/// Construction divides by the total, so the weights always sum to `1.0`
/// within floating-point tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct WeightVector {
    cost: f64,
    land: f64,
    emissions: f64,
    policy: f64,
    queue: f64,
    variability: f64,
}

impl WeightVector {
    /// Build a weight vector from raw per-component weights.
    ///
    /// Returns `None` when any weight is negative or non-finite, or when the
    /// weights sum to zero.
    #[expect(
        clippy::float_arithmetic,
        reason = "normalisation divides every weight by the total"
    )]
    #[must_use]
    pub fn try_from_fn<F>(weight_of: F) -> Option<Self>
    where
        F: FnMut(Component) -> f64,
    {
        let raw = Component::ALL.map(weight_of);
        if raw.iter().any(|weight| !weight.is_finite() || *weight < 0.0) {
            return None;
        }
        let total: f64 = raw.iter().sum();
        if !total.is_finite() || total <= 0.0 {
            return None;
        }
        let [cost, land, emissions, policy, queue, variability] = raw.map(|weight| weight / total);
        Some(Self {
            cost,
            land,
            emissions,
            policy,
            queue,
            variability,
        })
    }

    /// Return the weight for `component`.
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

    /// Iterate over `(component, weight)` pairs in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (Component, f64)> + '_ {
        Component::ALL
            .into_iter()
            .map(|component| (component, self.get(component)))
    }

    /// Sum of all weights; `1.0` up to rounding.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.iter().map(|(_, weight)| weight).sum()
    }
}
