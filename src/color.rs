//! RGBA colors and the color-quantization strategy.
//!
//! The strategy here matches the classic palette-extraction setup: Euclidean
//! distance over all four channels, a channel-wise mean snapped back to the
//! nearest real pixel in the group, and exact equality.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::color::CHANNELS;
use crate::error::{ClusterError, Result};
use crate::strategy::Strategy;

/// An 8-bit-per-channel RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct Rgba(pub [u8; CHANNELS]);

impl Rgba {
    /// Create a color from its channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    /// Split an interleaved RGBA buffer into colors, in pixel order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the buffer length is not a multiple of 4.
    pub fn from_bytes(bytes: &[u8]) -> Result<Vec<Rgba>> {
        if bytes.len() % CHANNELS != 0 {
            return Err(ClusterError::invalid_parameter(format!(
                "RGBA buffer length {} is not a multiple of {CHANNELS}",
                bytes.len()
            )));
        }

        Ok(bytes
            .chunks_exact(CHANNELS)
            .map(|px| Rgba([px[0], px[1], px[2], px[3]]))
            .collect())
    }

    /// Channels as f64, for distance computation.
    #[inline]
    pub fn to_f64(self) -> [f64; CHANNELS] {
        self.0.map(f64::from)
    }

    /// Hex notation, `#rrggbbaa`.
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.0;
        write!(f, "#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

impl From<[u8; CHANNELS]> for Rgba {
    #[inline]
    fn from(channels: [u8; CHANNELS]) -> Self {
        Self(channels)
    }
}

impl From<Rgba> for [u8; CHANNELS] {
    #[inline]
    fn from(color: Rgba) -> Self {
        color.0
    }
}

/// [`Strategy`] for palette extraction over [`Rgba`] pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorStrategy;

impl Strategy<Rgba> for ColorStrategy {
    #[inline]
    fn distance(&self, a: &Rgba, b: &Rgba) -> f64 {
        squared_distance(&a.to_f64(), &b.to_f64()).sqrt()
    }

    /// Channel-wise mean, snapped to the nearest pixel of the group.
    ///
    /// Mean and distances are kept in f64. The first pixel wins exact ties.
    /// An empty group yields transparent black.
    fn average(&self, group: &[&Rgba]) -> Rgba {
        if group.is_empty() {
            return Rgba::default();
        }

        let mut sums = [0.0f64; CHANNELS];
        for color in group {
            for (sum, x) in sums.iter_mut().zip(color.to_f64()) {
                *sum += x;
            }
        }
        let n = group.len() as f64;
        let mean = sums.map(|s| s / n);

        let mut best: Option<(&Rgba, f64)> = None;
        for &color in group {
            let d = squared_distance(&color.to_f64(), &mean);
            if best.map_or(true, |(_, best_d)| d < best_d) {
                best = Some((color, d));
            }
        }
        best.map(|(color, _)| *color).unwrap_or_default()
    }

    #[inline]
    fn equals(&self, a: &Rgba, b: &Rgba) -> bool {
        a == b
    }
}

#[inline]
fn squared_distance(a: &[f64; CHANNELS], b: &[f64; CHANNELS]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| {
            let diff = x - y;
            diff * diff
        })
        .sum()
}
