//! Named constants for configuration values.
//!
//! This module centralizes default values used throughout the crate,
//! making them easier to find and tune.

/// Constants for k-means clustering.
pub mod kmeans {
    /// Default iteration cap for a clustering run.
    pub const DEFAULT_MAX_ITERATIONS: usize = 50;
}

/// Constants for RGBA color handling.
pub mod color {
    /// Number of interleaved channels per pixel (red, green, blue, alpha).
    pub const CHANNELS: usize = 4;
}

/// Constants for palette presentation.
pub mod palette {
    /// Alpha assigned to pixels outside the highlighted palette entry.
    pub const HIGHLIGHT_DIM_ALPHA: u8 = 20;
}
