// crates/geoparse-core/src/error.rs
use thiserror::Error;

/// Errors produced by `geoparse-core`.
///
/// Only [`GeoError::InvalidArgument`] can come out of a query; "nothing
/// matched" is always an empty result, never an error. The remaining
/// variants belong to dataset and alias loading.
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GeoError>;

impl GeoError {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        GeoError::InvalidArgument(msg.into())
    }

    /// True for errors raised at the call boundary because of bad input.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, GeoError::InvalidArgument(_))
    }
}
