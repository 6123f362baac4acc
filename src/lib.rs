//! kcluster: deterministic k-means clustering over any data type.
//!
//! The engine groups a sequence of opaque items into exactly `k` clusters
//! with Lloyd's algorithm. It knows nothing about the items themselves:
//! distance, averaging and equality are supplied by the caller through the
//! [`Strategy`] trait or three plain closures.
//!
//! # Features
//!
//! - **Deterministic Seeding**: spaced sampling through the input, no randomness
//! - **Generic Data**: colors, points, vectors or anything with a [`Strategy`]
//! - **Partition Guarantees**: every item lands in exactly one [`Centroid`]
//! - **Ready-made Strategies**: [`ColorStrategy`] for RGBA palettes,
//!   [`PointStrategy`] for f32 feature vectors
//! - **Palettes**: [`Palette`] ordering, shares and highlight masks
//!
//! # Example
//!
//! ```
//! use kcluster::{ColorStrategy, KMeans, Rgba};
//!
//! let black = Rgba::new(0, 0, 0, 255);
//! let white = Rgba::new(255, 255, 255, 255);
//! let pixels = vec![black, white, black, white];
//!
//! let centroids = KMeans::new(2).fit(&pixels, &ColorStrategy).unwrap();
//!
//! assert_eq!(centroids[0].value, black);
//! assert_eq!(centroids[0].indexes, vec![0, 2]);
//! assert_eq!(centroids[1].indexes, vec![1, 3]);
//! ```

pub mod color;
pub mod constants;
pub mod distance;
pub mod error;
pub mod kmeans;
pub mod metrics;
pub mod palette;
pub mod point;
pub mod strategy;
pub mod types;

// Re-export commonly used types at crate root
pub use color::{ColorStrategy, Rgba};
pub use distance::DistanceMetric;
pub use error::{ClusterError, Result};
pub use kmeans::{cluster_from_data, cluster_from_seeds, KMeans};
pub use metrics::{RunStatistics, Termination};
pub use palette::{extract_palette, Palette, PaletteEntry};
pub use point::{Averaging, PointStrategy};
pub use strategy::{FnStrategy, Strategy};
pub use types::Centroid;
