//! Statistics describing a completed clustering run.
//!
//! Use [`RunStatistics`] to see how a run ended and how evenly the data was
//! split:
//!
//! ```
//! use kcluster::{ColorStrategy, KMeans, Rgba};
//!
//! let data = vec![Rgba([0, 0, 0, 255]), Rgba([255, 255, 255, 255]), Rgba([0, 0, 0, 255])];
//! let (_, stats) = KMeans::new(2).fit_with_stats(&data, &ColorStrategy).unwrap();
//!
//! assert!(stats.converged());
//! println!("{}", stats.summary());
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::Centroid;

/// Why the iteration loop stopped.
///
/// Both outcomes return the current centroid list; the distinction is only
/// reported here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Termination {
    /// No centroid changed value during the last iteration.
    Converged,
    /// The iteration cap was reached before convergence.
    MaxIterationsReached,
}

/// Statistics about a finished clustering run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunStatistics {
    /// Number of completed assign/aggregate iterations.
    pub iterations: usize,
    /// How the run ended.
    pub termination: Termination,
    /// Centroids whose value did not change in the last iteration.
    pub stable_centroids: usize,
    /// Number of clusters.
    pub num_clusters: usize,
    /// Number of clustered items.
    pub num_items: usize,
    /// Smallest cluster size.
    pub size_min: usize,
    /// Largest cluster size.
    pub size_max: usize,
    /// Mean cluster size.
    pub size_mean: f64,
    /// Standard deviation of cluster sizes.
    pub size_std: f64,
    /// Clusters with no assigned items.
    pub empty_clusters: usize,
}

impl RunStatistics {
    pub(crate) fn from_run<T>(
        centroids: &[Centroid<T>],
        iterations: usize,
        termination: Termination,
        stable_centroids: usize,
    ) -> Self {
        let sizes: Vec<usize> = centroids.iter().map(|c| c.count).collect();
        let num_clusters = sizes.len();
        let num_items: usize = sizes.iter().sum();

        let (size_mean, size_std) = if num_clusters == 0 {
            (0.0, 0.0)
        } else {
            let mean = num_items as f64 / num_clusters as f64;
            let variance = sizes
                .iter()
                .map(|&s| {
                    let diff = s as f64 - mean;
                    diff * diff
                })
                .sum::<f64>()
                / num_clusters as f64;
            (mean, variance.sqrt())
        };

        Self {
            iterations,
            termination,
            stable_centroids,
            num_clusters,
            num_items,
            size_min: sizes.iter().copied().min().unwrap_or(0),
            size_max: sizes.iter().copied().max().unwrap_or(0),
            size_mean,
            size_std,
            empty_clusters: sizes.iter().filter(|&&s| s == 0).count(),
        }
    }

    /// Statistics for an empty input, where no iteration runs.
    pub(crate) fn empty() -> Self {
        Self::from_run::<()>(&[], 0, Termination::Converged, 0)
    }

    /// Return true if the run stopped because nothing changed.
    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }

    /// Create a human-readable summary.
    pub fn summary(&self) -> String {
        format!(
            "RunStatistics:\n  \
             Iterations: {} ({:?}, {}/{} stable)\n  \
             Items: {}\n  \
             Clusters: {} (min={}, max={}, mean={:.1}, std={:.1}, empty={})",
            self.iterations,
            self.termination,
            self.stable_centroids,
            self.num_clusters,
            self.num_items,
            self.num_clusters,
            self.size_min,
            self.size_max,
            self.size_mean,
            self.size_std,
            self.empty_clusters,
        )
    }
}
