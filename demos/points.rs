//! Clustering 2D points and integers with custom strategies.
//!
//! Run with: cargo run --example points

use kcluster::{cluster_from_data, Averaging, DistanceMetric, KMeans, PointStrategy};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    println!("=== Point Clustering Demo ===\n");

    // Three loose groups around (0, 0), (8, 1) and (4, 9)
    let points: Vec<Vec<f32>> = (0..30)
        .map(|i| {
            let (cx, cy) = [(0.0, 0.0), (8.0, 1.0), (4.0, 9.0)][i % 3];
            let jitter = (i / 3) as f32 * 0.1;
            vec![cx + jitter, cy - jitter]
        })
        .collect();

    for averaging in [Averaging::Mean, Averaging::Medoid] {
        let strategy = PointStrategy::new(DistanceMetric::Euclidean, averaging);
        match KMeans::new(3).fit_with_stats(&points, &strategy) {
            Ok((centroids, stats)) => {
                println!("{:?} averaging, {} iterations:", averaging, stats.iterations);
                for c in &centroids {
                    println!("  ({:.2}, {:.2}) <- {} points", c.value[0], c.value[1], c.count);
                }
                println!();
            }
            Err(e) => eprintln!("{:?}: {}", averaging, e),
        }
    }

    println!("=== Closure Strategies ===\n");

    let numbers = vec![3i64, 5, 4, 100, 104, 98, 51, 49, 50];
    let result = cluster_from_data(
        3,
        &numbers,
        |a: &i64, b: &i64| (a - b).abs() as f64,
        |group: &[&i64]| group.iter().copied().sum::<i64>() / group.len() as i64,
        |a: &i64, b: &i64| a == b,
    );

    match result {
        Ok(centroids) => {
            for c in &centroids {
                let members: Vec<i64> = c.indexes.iter().map(|&i| numbers[i]).collect();
                println!("  {} <- {:?}", c.value, members);
            }
        }
        Err(e) => eprintln!("{}", e),
    }
}
