//! Distance functions for dense f32 feature vectors.
//!
//! These back [`PointStrategy`](crate::point::PointStrategy) and
//! [`ColorStrategy`](crate::color::ColorStrategy). Every metric here is
//! non-negative, which is all the clustering engine requires of a distance.

pub mod scalar;

pub use scalar::{
    cosine_distance, euclidean_distance, euclidean_distance_squared, manhattan_distance,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Supported distance metrics for feature vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DistanceMetric {
    /// Euclidean (L2) distance: sqrt(sum((a[i] - b[i])^2))
    #[default]
    Euclidean,
    /// Squared Euclidean distance: sum((a[i] - b[i])^2)
    /// Ranks neighbors identically to Euclidean without the sqrt.
    EuclideanSquared,
    /// Manhattan (L1) distance: sum(|a[i] - b[i]|)
    Manhattan,
    /// Cosine distance: 1 - cosine_similarity(a, b)
    /// Range [0, 2] where 0 means identical direction.
    Cosine,
}

impl DistanceMetric {
    /// Compute the distance between two vectors using this metric.
    ///
    /// # Panics
    /// Panics if the vectors have different dimensions.
    #[inline]
    pub fn compute(&self, a: &[f32], b: &[f32]) -> f32 {
        match self {
            DistanceMetric::Euclidean => euclidean_distance(a, b),
            DistanceMetric::EuclideanSquared => euclidean_distance_squared(a, b),
            DistanceMetric::Manhattan => manhattan_distance(a, b),
            // Rounding can push 1 - cos slightly below zero for parallel vectors.
            DistanceMetric::Cosine => cosine_distance(a, b).max(0.0),
        }
    }
}
