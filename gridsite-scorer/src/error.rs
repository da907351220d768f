//! Errors raised by a ranking call.

use gridsite_core::{ConfigError, DataError};
use thiserror::Error;

/// Failure of [`rank_nodes`](crate::rank_nodes).
///
/// No partial result accompanies an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankingError {
    /// The node table could not be validated.
    #[error(transparent)]
    Data(#[from] DataError),
    /// The request or ranking configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl RankingError {
    /// Name of the offending request field, for configuration errors that
    /// have one.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::Data(_) => None,
            Self::Config(err) => err.field(),
        }
    }
}
