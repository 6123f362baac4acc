//! Clustering strategy for dense feature vectors of any dimensionality.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::distance::{scalar, DistanceMetric};
use crate::strategy::Strategy;

/// How a group of points is reduced to its representative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Averaging {
    /// Component-wise arithmetic mean.
    #[default]
    Mean,
    /// Mean, then snapped to the nearest member of the group.
    ///
    /// Keeps every centroid on a real data point.
    Medoid,
}

/// [`Strategy`] over `Vec<f32>` points.
///
/// Equality is exact component-wise equality, so a centroid counts as
/// converged once its group produces a bit-identical representative.
///
/// # Panics
/// Distance and averaging panic if points have different dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PointStrategy {
    /// Metric used for nearest-centroid comparison and medoid snapping.
    pub metric: DistanceMetric,
    /// Group reduction.
    pub averaging: Averaging,
}

impl PointStrategy {
    /// Create a strategy with the given metric and averaging.
    pub fn new(metric: DistanceMetric, averaging: Averaging) -> Self {
        Self { metric, averaging }
    }
}

impl Strategy<Vec<f32>> for PointStrategy {
    #[inline]
    fn distance(&self, a: &Vec<f32>, b: &Vec<f32>) -> f64 {
        f64::from(self.metric.compute(a, b))
    }

    fn average(&self, group: &[&Vec<f32>]) -> Vec<f32> {
        let mean = scalar::mean(group);
        match self.averaging {
            Averaging::Mean => mean,
            Averaging::Medoid => {
                match scalar::nearest_member(group, &mean, |a, b| self.metric.compute(a, b)) {
                    Some(i) => group[i].clone(),
                    None => mean,
                }
            }
        }
    }

    #[inline]
    fn equals(&self, a: &Vec<f32>, b: &Vec<f32>) -> bool {
        a == b
    }
}
