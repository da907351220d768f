//! Error types for node data and ranking configuration.

use thiserror::Error;

/// Problems with the node table itself. Fatal for the ranking call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    /// One or more critical columns hold no usable values at all.
    #[error("critical columns are absent from the node table: {}", .columns.join(", "))]
    MissingColumns {
        /// Source names of the absent columns.
        columns: Vec<&'static str>,
    },
    /// Every row was dropped during validation.
    #[error("no valid nodes remain after validation ({dropped} of {total_rows} rows dropped)")]
    NoValidData {
        /// Rows in the raw table.
        total_rows: usize,
        /// Rows removed for missing critical fields or duplicate identifiers.
        dropped: usize,
    },
    /// A raw column does not have one value per row.
    #[error("column {column} has {found} values but the table has {expected} rows")]
    InconsistentColumns {
        /// Source name of the offending column.
        column: &'static str,
        /// Row count taken from the identifier column.
        expected: usize,
        /// Length of the offending column.
        found: usize,
    },
}

/// Invalid request parameters or ranking configuration.
///
/// Each variant names the offending field so callers can surface it directly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The load type key is not recognised.
    #[error("unknown load type '{value}'")]
    UnknownLoadType {
        /// Key supplied by the caller.
        value: String,
    },
    /// The resource configuration key is not recognised.
    #[error("unknown resource configuration '{value}'")]
    UnknownResourceConfig {
        /// Key supplied by the caller.
        value: String,
    },
    /// A state filter entry is neither a state code nor a state name.
    #[error("unknown state '{value}'")]
    UnknownState {
        /// Entry supplied by the caller.
        value: String,
    },
    /// The location filter lacks a field its mode requires.
    #[error("location filter is missing required field '{field}'")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },
    /// The location filter mixes state and radius fields.
    #[error("location filter cannot combine 'states' with 'lat'/'lon'/'radius_km'")]
    ConflictingLocationModes,
    /// A field is present but outside its valid domain.
    #[error("{field} is invalid: {reason}")]
    InvalidValue {
        /// Name of the offending field.
        field: &'static str,
        /// Human-readable description of the constraint.
        reason: String,
    },
    /// The ranking configuration is unusable.
    #[error("ranking configuration is invalid: {reason}")]
    InvalidConfig {
        /// Human-readable description of the problem.
        reason: String,
    },
}

impl ConfigError {
    /// Name of the request field the error refers to, when there is one.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::UnknownLoadType { .. } => Some("load_type"),
            Self::UnknownResourceConfig { .. } => Some("resource_config"),
            Self::UnknownState { .. } | Self::ConflictingLocationModes => Some("location_filter"),
            Self::MissingField { field } | Self::InvalidValue { field, .. } => Some(*field),
            Self::InvalidConfig { .. } => None,
        }
    }

    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn missing_columns_lists_every_column() {
        let err = DataError::MissingColumns {
            columns: vec!["avg_lmp", "state"],
        };
        assert_eq!(
            err.to_string(),
            "critical columns are absent from the node table: avg_lmp, state"
        );
    }

    #[rstest]
    #[case(ConfigError::UnknownLoadType { value: "x".into() }, Some("load_type"))]
    #[case(ConfigError::MissingField { field: "radius_km" }, Some("radius_km"))]
    #[case(ConfigError::invalid("top_n", "must be positive"), Some("top_n"))]
    #[case(ConfigError::InvalidConfig { reason: "bad".into() }, None)]
    fn errors_name_the_offending_field(
        #[case] err: ConfigError,
        #[case] expected: Option<&'static str>,
    ) {
        assert_eq!(err.field(), expected);
    }
}
