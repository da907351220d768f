//! Tunable ranking constants.

use gridsite_core::ConfigError;
#[cfg(feature = "serde")]
use serde::Deserialize;

/// Quality threshold applied when the configuration does not override it.
pub const DEFAULT_QUALITY_THRESHOLD: f64 = 0.3;

/// Relative weights of the four queue sub-metrics.
///
/// The weights are divided by their total when blended, so only their ratios
/// matter.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize), serde(default))]
pub struct QueueWeights {
    /// Weight of the inverted pending capacity score.
    pub pending_mw: f64,
    /// Weight of the advanced-stage share score.
    pub advanced_share: f64,
    /// Weight of the inverted queue pressure score.
    pub pressure: f64,
    /// Weight of the renewable and storage share score.
    pub green_share: f64,
}

impl QueueWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidConfig`] when any weight is negative or
    /// not finite, or when the weights sum to zero.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(ConfigError::InvalidConfig {
                reason: "queue weights must be finite, non-negative and not all zero".to_owned(),
            })
        }
    }

    fn is_valid(self) -> bool {
        let weights = self.as_array();
        weights
            .iter()
            .all(|weight| weight.is_finite() && *weight >= 0.0)
            && self.total() > 0.0
    }

    pub(crate) const fn as_array(self) -> [f64; 4] {
        [
            self.pending_mw,
            self.advanced_share,
            self.pressure,
            self.green_share,
        ]
    }

    pub(crate) fn total(self) -> f64 {
        self.as_array().iter().sum()
    }
}

impl Default for QueueWeights {
    fn default() -> Self {
        Self {
            pending_mw: 0.4,
            advanced_share: 0.2,
            pressure: 0.2,
            green_share: 0.2,
        }
    }
}

/// Configuration for [`NodeRanker`](crate::NodeRanker).
///
/// # Examples
/// ```
/// use gridsite_scorer::RankingConfig;
///
/// let config = RankingConfig {
///     quality_threshold: None,
///     ..RankingConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize), serde(default))]
pub struct RankingConfig {
    /// Minimum score at least one of cost, queue, emissions or policy must
    /// reach for a node to be ranked. `None` disables the filter.
    pub quality_threshold: Option<f64>,
    /// Blend of the queue sub-metrics.
    pub queue_weights: QueueWeights,
}

impl RankingConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidConfig`] when the quality threshold is
    /// outside `0.0..=1.0` or the queue weights are unusable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(threshold) = self.quality_threshold
            && !(0.0..=1.0).contains(&threshold)
        {
            return Err(ConfigError::InvalidConfig {
                reason: format!("quality threshold {threshold} is outside 0..=1"),
            });
        }
        self.queue_weights.validate()?;
        Ok(())
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            quality_threshold: Some(DEFAULT_QUALITY_THRESHOLD),
            queue_weights: QueueWeights::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(QueueWeights { pending_mw: -0.1, ..QueueWeights::default() })]
    #[case(QueueWeights { pressure: f64::NAN, ..QueueWeights::default() })]
    #[case(QueueWeights { pending_mw: 0.0, advanced_share: 0.0, pressure: 0.0, green_share: 0.0 })]
    fn rejects_unusable_queue_weights(#[case] weights: QueueWeights) {
        let err = weights.validate().expect_err("invalid weights");
        assert!(matches!(err, ConfigError::InvalidConfig { .. }));
    }

    #[rstest]
    #[case(Some(1.5))]
    #[case(Some(-0.1))]
    #[case(Some(f64::NAN))]
    fn rejects_out_of_range_thresholds(#[case] quality_threshold: Option<f64>) {
        let config = RankingConfig {
            quality_threshold,
            ..RankingConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserialises_with_defaults() {
        let config: RankingConfig =
            serde_json::from_str(r#"{"queue_weights": {"pending_mw": 0.7}}"#).expect("valid json");
        assert_eq!(config.quality_threshold, Some(DEFAULT_QUALITY_THRESHOLD));
        assert_eq!(config.queue_weights.pending_mw, 0.7);
        assert_eq!(config.queue_weights.green_share, 0.2);

        let disabled: RankingConfig =
            serde_json::from_str(r#"{"quality_threshold": null}"#).expect("valid json");
        assert_eq!(disabled.quality_threshold, None);
    }
}
