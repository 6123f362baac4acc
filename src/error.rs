//! Error types for clustering operations.
//!
//! Both kinds fail fast: no retry is attempted and no partial centroid list
//! is ever returned alongside an error.

use thiserror::Error;

/// Result type alias using [`ClusterError`].
pub type Result<T> = std::result::Result<T, ClusterError>;

/// Errors that can occur while clustering.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClusterError {
    /// Invalid parameter value provided.
    ///
    /// Raised for `k == 0`, `k >= len(data)`, a seed list whose length is not
    /// `k`, and malformed pixel buffers.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The deterministic seeding scan could not find enough distinct values.
    #[error("seeding exhausted: required {required} distinct centroids, found {found}")]
    SeedingExhausted {
        /// Number of centroids requested.
        required: usize,
        /// Number of pairwise-distinct values found before the scan gave up.
        found: usize,
    },
}

impl ClusterError {
    /// Creates a new `InvalidParameter` error.
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Creates a new `SeedingExhausted` error.
    pub fn seeding_exhausted(required: usize, found: usize) -> Self {
        Self::SeedingExhausted { required, found }
    }

    /// Returns true if this is an `InvalidParameter` error.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter(_))
    }

    /// Returns true if this is a `SeedingExhausted` error.
    pub fn is_seeding_exhausted(&self) -> bool {
        matches!(self, Self::SeedingExhausted { .. })
    }
}
