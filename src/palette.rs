//! Color palettes built from clustering results.
//!
//! A [`Palette`] orders color centroids by how many pixels they cover and
//! can produce highlight buffers that fade every pixel outside one entry.
//! Decoding images into RGBA buffers is left to the caller.

use crate::color::{ColorStrategy, Rgba};
use crate::constants::color::CHANNELS;
use crate::constants::palette::HIGHLIGHT_DIM_ALPHA;
use crate::error::{ClusterError, Result};
use crate::kmeans::KMeans;
use crate::types::Centroid;

/// One color of a palette.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteEntry {
    /// Representative color.
    pub color: Rgba,
    /// Number of pixels assigned to this color.
    pub count: usize,
    /// Fraction of all pixels, in [0, 1].
    pub share: f64,
    /// Pixel positions assigned to this color.
    pub indexes: Vec<usize>,
}

impl PaletteEntry {
    /// Share of all pixels as a percentage with two decimals, e.g. `"12.50%"`.
    pub fn percent_label(&self) -> String {
        format!("{:.2}%", self.share * 100.0)
    }
}

/// Palette entries ordered by pixel count, largest first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
    total: usize,
}

impl Palette {
    /// Build a palette from color centroids.
    ///
    /// Entries are sorted by `count` descending; equal counts keep their
    /// centroid slot order.
    pub fn from_centroids(centroids: Vec<Centroid<Rgba>>) -> Self {
        let total: usize = centroids.iter().map(|c| c.count).sum();
        let mut entries: Vec<PaletteEntry> = centroids
            .into_iter()
            .map(|c| PaletteEntry {
                color: c.value,
                count: c.count,
                share: if total == 0 {
                    0.0
                } else {
                    c.count as f64 / total as f64
                },
                indexes: c.indexes,
            })
            .collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count));

        Self { entries, total }
    }

    /// Entries, largest first.
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return true if the palette has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of pixels covered.
    pub fn total_pixels(&self) -> usize {
        self.total
    }

    /// Copy `rgba` with every pixel outside entry `entry` faded to
    /// [`HIGHLIGHT_DIM_ALPHA`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `entry` is out of range or `rgba` does
    /// not hold exactly the pixels this palette was built from.
    pub fn highlight(&self, entry: usize, rgba: &[u8]) -> Result<Vec<u8>> {
        let selected = self.entries.get(entry).ok_or_else(|| {
            ClusterError::invalid_parameter(format!(
                "palette entry {entry} out of range (palette has {} entries)",
                self.entries.len()
            ))
        })?;
        if rgba.len() != self.total * CHANNELS {
            return Err(ClusterError::invalid_parameter(format!(
                "RGBA buffer holds {} bytes, expected {} for {} pixels",
                rgba.len(),
                self.total * CHANNELS,
                self.total
            )));
        }

        let mut member = vec![false; self.total];
        for &i in &selected.indexes {
            if let Some(m) = member.get_mut(i) {
                *m = true;
            }
        }

        let mut out = rgba.to_vec();
        for (px, &is_member) in out.chunks_exact_mut(CHANNELS).zip(&member) {
            if !is_member {
                px[CHANNELS - 1] = HIGHLIGHT_DIM_ALPHA;
            }
        }
        Ok(out)
    }
}

/// Extract a `k`-color palette from an interleaved RGBA buffer.
///
/// # Errors
///
/// Returns `InvalidParameter` for a partial trailing pixel or an invalid `k`,
/// and `SeedingExhausted` if the image has fewer than `k` reachable distinct
/// colors.
pub fn extract_palette(k: usize, rgba: &[u8], max_iterations: usize) -> Result<Palette> {
    let pixels = Rgba::from_bytes(rgba)?;
    let centroids = KMeans::new(k)
        .with_max_iterations(max_iterations)
        .fit(&pixels, &ColorStrategy)?;
    Ok(Palette::from_centroids(centroids))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::kmeans::DEFAULT_MAX_ITERATIONS;

    fn image() -> Vec<u8> {
        // 3 red, 1 blue
        vec![
            255, 0, 0, 255, //
            0, 0, 255, 255, //
            255, 0, 0, 255, //
            255, 0, 0, 255,
        ]
    }

    #[test]
    fn test_sorted_by_count() {
        let centroids = vec![
            Centroid {
                value: Rgba::new(1, 1, 1, 1),
                count: 1,
                indexes: vec![2],
            },
            Centroid {
                value: Rgba::new(2, 2, 2, 2),
                count: 2,
                indexes: vec![0, 3],
            },
            Centroid {
                value: Rgba::new(3, 3, 3, 3),
                count: 1,
                indexes: vec![1],
            },
        ];
        let palette = Palette::from_centroids(centroids);

        let colors: Vec<Rgba> = palette.entries().iter().map(|e| e.color).collect();
        assert_eq!(
            colors,
            vec![Rgba::new(2, 2, 2, 2), Rgba::new(1, 1, 1, 1), Rgba::new(3, 3, 3, 3)]
        );
        assert_eq!(palette.total_pixels(), 4);
        assert_eq!(palette.entries()[0].percent_label(), "50.00%");
        assert_eq!(palette.entries()[1].percent_label(), "25.00%");
    }

    #[test]
    fn test_extract_palette() {
        let palette = extract_palette(2, &image(), DEFAULT_MAX_ITERATIONS).unwrap();

        assert_eq!(palette.len(), 2);
        assert_eq!(palette.entries()[0].color, Rgba::new(255, 0, 0, 255));
        assert_eq!(palette.entries()[0].indexes, vec![0, 2, 3]);
        assert_eq!(palette.entries()[1].color, Rgba::new(0, 0, 255, 255));
        assert_eq!(palette.entries()[1].percent_label(), "25.00%");
    }

    #[test]
    fn test_highlight_fades_non_members() {
        let bytes = image();
        let palette = extract_palette(2, &bytes, DEFAULT_MAX_ITERATIONS).unwrap();

        let blue = palette.highlight(1, &bytes).unwrap();
        assert_eq!(&blue[0..4], &[255, 0, 0, HIGHLIGHT_DIM_ALPHA]);
        assert_eq!(&blue[4..8], &[0, 0, 255, 255]);
        assert_eq!(&blue[8..12], &[255, 0, 0, HIGHLIGHT_DIM_ALPHA]);
        assert_eq!(&blue[12..16], &[255, 0, 0, HIGHLIGHT_DIM_ALPHA]);
    }

    #[test]
    fn test_highlight_validation() {
        let bytes = image();
        let palette = extract_palette(2, &bytes, DEFAULT_MAX_ITERATIONS).unwrap();

        assert!(palette.highlight(2, &bytes).unwrap_err().is_invalid_parameter());
        assert!(palette.highlight(0, &bytes[..8]).unwrap_err().is_invalid_parameter());
    }

    #[test]
    fn test_extract_palette_errors() {
        assert!(extract_palette(2, &[1, 2, 3], 10).unwrap_err().is_invalid_parameter());
        let flat = vec![9u8; 16];
        assert!(extract_palette(2, &flat, 10).unwrap_err().is_seeding_exhausted());
        assert!(extract_palette(3, &[], 10).unwrap().is_empty());
    }
}
