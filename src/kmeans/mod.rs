//! K-Means clustering over caller-defined data.
//!
//! Implements Lloyd's algorithm with deterministic spaced seeding. The
//! engine never looks inside a data item: distance, averaging and equality
//! all come from a [`Strategy`]. A run goes
//! `seed -> (assign -> aggregate)*` and stops when every centroid keeps its
//! value for one iteration or the iteration cap is reached.

mod iteration;
mod seed;

use tracing::{debug, trace};

use crate::constants::kmeans::DEFAULT_MAX_ITERATIONS;
use crate::error::{ClusterError, Result};
use crate::metrics::{RunStatistics, Termination};
use crate::strategy::{FnStrategy, Strategy};
use crate::types::Centroid;

/// K-Means clustering configuration.
///
/// ```
/// use kcluster::{FnStrategy, KMeans};
///
/// let strategy = FnStrategy::new(
///     |a: &f64, b: &f64| (a - b).abs(),
///     |group: &[&f64]| group.iter().copied().sum::<f64>() / group.len() as f64,
///     |a: &f64, b: &f64| a == b,
/// );
///
/// let data = vec![1.0, 1.5, 9.0, 10.0];
/// let centroids = KMeans::new(2).with_max_iterations(10).fit(&data, &strategy).unwrap();
///
/// assert_eq!(centroids.len(), 2);
/// assert_eq!(centroids[0].indexes, vec![0, 1]);
/// assert_eq!(centroids[1].indexes, vec![2, 3]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KMeans {
    /// Number of clusters.
    k: usize,
    /// Maximum iterations before stopping.
    max_iters: usize,
}

impl KMeans {
    /// Create a new K-Means configuration with the default iteration cap.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iters: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Set the iteration cap. At least one iteration always runs.
    pub fn with_max_iterations(mut self, max_iters: usize) -> Self {
        self.max_iters = max_iters;
        self
    }

    /// Number of clusters.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Iteration cap.
    pub fn max_iterations(&self) -> usize {
        self.max_iters
    }

    /// Seed deterministically from `data`, then iterate to a fixed point.
    ///
    /// Returns one centroid per slot in seed order. Empty `data` yields an
    /// empty result regardless of `k`.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` unless `0 < k < data.len()`; `SeedingExhausted` if
    /// fewer than `k` distinct values are reachable by the seeding scan.
    pub fn fit<T, S>(&self, data: &[T], strategy: &S) -> Result<Vec<Centroid<T>>>
    where
        T: Clone,
        S: Strategy<T> + ?Sized,
    {
        self.fit_with_stats(data, strategy).map(|(centroids, _)| centroids)
    }

    /// Like [`fit`](Self::fit), also returning run statistics.
    pub fn fit_with_stats<T, S>(
        &self,
        data: &[T],
        strategy: &S,
    ) -> Result<(Vec<Centroid<T>>, RunStatistics)>
    where
        T: Clone,
        S: Strategy<T> + ?Sized,
    {
        if data.is_empty() {
            return Ok((Vec::new(), RunStatistics::empty()));
        }

        let seeds = seed::select(self.k, data, strategy)?;
        debug!(
            k = self.k,
            items = data.len(),
            positions = ?seeds.positions,
            "seeded centroids"
        );

        Ok(self.run(seeds.values, data, strategy))
    }

    /// Skip seeding and iterate from caller-supplied initial values.
    ///
    /// Seeds need not be distinct or taken from `data`.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `k == 0` or `seeds.len() != k`.
    pub fn fit_from_seeds<T, S>(
        &self,
        seeds: Vec<T>,
        data: &[T],
        strategy: &S,
    ) -> Result<Vec<Centroid<T>>>
    where
        S: Strategy<T> + ?Sized,
    {
        self.fit_from_seeds_with_stats(seeds, data, strategy)
            .map(|(centroids, _)| centroids)
    }

    /// Like [`fit_from_seeds`](Self::fit_from_seeds), also returning run
    /// statistics.
    pub fn fit_from_seeds_with_stats<T, S>(
        &self,
        seeds: Vec<T>,
        data: &[T],
        strategy: &S,
    ) -> Result<(Vec<Centroid<T>>, RunStatistics)>
    where
        S: Strategy<T> + ?Sized,
    {
        if self.k == 0 {
            return Err(ClusterError::invalid_parameter("k must be at least 1"));
        }
        if seeds.len() != self.k {
            return Err(ClusterError::invalid_parameter(format!(
                "expected {} initial centroids, got {}",
                self.k,
                seeds.len()
            )));
        }
        if data.is_empty() {
            return Ok((Vec::new(), RunStatistics::empty()));
        }

        Ok(self.run(seeds, data, strategy))
    }

    /// The iteration loop. `seeds` holds exactly `k` values and `data` is
    /// non-empty.
    fn run<T, S>(
        &self,
        seeds: Vec<T>,
        data: &[T],
        strategy: &S,
    ) -> (Vec<Centroid<T>>, RunStatistics)
    where
        S: Strategy<T> + ?Sized,
    {
        let mut centroids: Vec<Centroid<T>> = seeds.into_iter().map(Centroid::new).collect();
        let mut group: Vec<&T> = Vec::with_capacity(data.len());
        let mut iterations = 0;

        let (termination, stable) = loop {
            for centroid in centroids.iter_mut() {
                centroid.reset();
            }

            iteration::assign(&mut centroids, data, strategy);
            let stable = iteration::aggregate(&mut centroids, data, strategy, &mut group);
            iterations += 1;
            trace!(iteration = iterations, stable, k = self.k, "iteration complete");

            if stable == self.k {
                break (Termination::Converged, stable);
            }
            if iterations >= self.max_iters {
                break (Termination::MaxIterationsReached, stable);
            }
        };

        debug!(iterations, ?termination, "clustering finished");
        let stats = RunStatistics::from_run(&centroids, iterations, termination, stable);
        (centroids, stats)
    }
}

/// Cluster `data` into `k` groups with three strategy closures.
///
/// Uses the default iteration cap; see [`KMeans`] to change it.
///
/// # Errors
///
/// Same as [`KMeans::fit`].
pub fn cluster_from_data<T, D, A, E>(
    k: usize,
    data: &[T],
    distance: D,
    average: A,
    equals: E,
) -> Result<Vec<Centroid<T>>>
where
    T: Clone,
    D: Fn(&T, &T) -> f64,
    A: Fn(&[&T]) -> T,
    E: Fn(&T, &T) -> bool,
{
    KMeans::new(k).fit(data, &FnStrategy::new(distance, average, equals))
}

/// Cluster `data` starting from `seeds` instead of seeding from the data.
///
/// Uses the default iteration cap; see [`KMeans`] to change it.
///
/// # Errors
///
/// Same as [`KMeans::fit_from_seeds`].
pub fn cluster_from_seeds<T, D, A, E>(
    k: usize,
    seeds: Vec<T>,
    data: &[T],
    distance: D,
    average: A,
    equals: E,
) -> Result<Vec<Centroid<T>>>
where
    D: Fn(&T, &T) -> f64,
    A: Fn(&[&T]) -> T,
    E: Fn(&T, &T) -> bool,
{
    KMeans::new(k).fit_from_seeds(seeds, data, &FnStrategy::new(distance, average, equals))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> impl Strategy<f64> {
        FnStrategy::new(
            |a: &f64, b: &f64| (a - b).abs(),
            |group: &[&f64]| group.iter().copied().sum::<f64>() / group.len() as f64,
            |a: &f64, b: &f64| a == b,
        )
    }

    #[test]
    fn test_kmeans_builder() {
        let kmeans = KMeans::new(4);
        assert_eq!(kmeans.k(), 4);
        assert_eq!(kmeans.max_iterations(), DEFAULT_MAX_ITERATIONS);
        assert_eq!(kmeans.with_max_iterations(7).max_iterations(), 7);
    }

    #[test]
    fn test_fit_two_groups() {
        let data = vec![0.0, 0.5, 1.0, 20.0, 21.0, 22.0];
        let (centroids, stats) = KMeans::new(2).fit_with_stats(&data, &line()).unwrap();

        assert_eq!(centroids.len(), 2);
        assert_eq!(centroids[0].indexes, vec![0, 1, 2]);
        assert_eq!(centroids[1].indexes, vec![3, 4, 5]);
        assert!((centroids[0].value - 0.5).abs() < 1e-12);
        assert!((centroids[1].value - 21.0).abs() < 1e-12);
        assert!(stats.converged());
        assert_eq!(stats.stable_centroids, 2);
    }

    #[test]
    fn test_empty_data_short_circuits() {
        let data: Vec<f64> = Vec::new();
        assert!(KMeans::new(3).fit(&data, &line()).unwrap().is_empty());
        assert!(KMeans::new(0).fit(&data, &line()).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_k() {
        let data = vec![1.0, 2.0, 3.0];
        assert!(KMeans::new(3).fit(&data, &line()).unwrap_err().is_invalid_parameter());
        assert!(KMeans::new(0).fit(&data, &line()).unwrap_err().is_invalid_parameter());
    }

    #[test]
    fn test_iteration_cap() {
        // Mean updates on this spread keep moving for more than one pass.
        let data: Vec<f64> = (0..40).map(|i| (i * i) as f64).collect();
        let (centroids, stats) = KMeans::new(4)
            .with_max_iterations(1)
            .fit_with_stats(&data, &line())
            .unwrap();

        assert_eq!(stats.iterations, 1);
        assert_eq!(stats.termination, Termination::MaxIterationsReached);
        assert_eq!(centroids.iter().map(|c| c.count).sum::<usize>(), data.len());
    }

    #[test]
    fn test_zero_cap_still_runs_once() {
        let data = vec![0.0, 1.0, 10.0];
        let (centroids, stats) = KMeans::new(2)
            .with_max_iterations(0)
            .fit_with_stats(&data, &line())
            .unwrap();
        assert_eq!(stats.iterations, 1);
        assert_eq!(centroids.iter().map(|c| c.count).sum::<usize>(), 3);
    }

    #[test]
    fn test_fit_from_seeds_validation() {
        let data = vec![1.0, 2.0, 3.0];
        let err = KMeans::new(2).fit_from_seeds(vec![1.0], &data, &line()).unwrap_err();
        assert!(err.is_invalid_parameter());

        let err = KMeans::new(0).fit_from_seeds(vec![], &data, &line()).unwrap_err();
        assert!(err.is_invalid_parameter());

        let empty: Vec<f64> = Vec::new();
        let result = KMeans::new(1).fit_from_seeds(vec![5.0], &empty, &line()).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_fit_from_seeds_with_unreachable_seed() {
        let data = vec![1.0, 2.0, 3.0];
        let (centroids, stats) = KMeans::new(2)
            .fit_from_seeds_with_stats(vec![2.0, 1000.0], &data, &line())
            .unwrap();

        assert_eq!(centroids[0].count, 3);
        assert_eq!(centroids[1].count, 0);
        assert_eq!(centroids[1].value, 1000.0);
        assert_eq!(stats.empty_clusters, 1);
        assert!(stats.converged());
    }

    #[test]
    fn test_free_functions() {
        let data = vec![1u8, 1, 200, 200, 1];
        let result = cluster_from_data(
            2,
            &data,
            |a: &u8, b: &u8| (*a as f64 - *b as f64).abs(),
            |group: &[&u8]| *group[0],
            |a: &u8, b: &u8| a == b,
        )
        .unwrap();

        assert_eq!(result[0].value, 1);
        assert_eq!(result[0].indexes, vec![0, 1, 4]);
        assert_eq!(result[1].indexes, vec![2, 3]);

        let again = cluster_from_seeds(
            2,
            vec![result[0].value, result[1].value],
            &data,
            |a: &u8, b: &u8| (*a as f64 - *b as f64).abs(),
            |group: &[&u8]| *group[0],
            |a: &u8, b: &u8| a == b,
        )
        .unwrap();
        assert_eq!(again, result);
    }
}
