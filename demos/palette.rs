//! Palette extraction from a synthetic RGBA image.
//!
//! Run with: cargo run --example palette
//! Set RUST_LOG=kcluster=trace to watch each iteration.

use kcluster::constants::kmeans::DEFAULT_MAX_ITERATIONS;
use kcluster::{extract_palette, ColorStrategy, KMeans, Rgba};

/// A 64x48 image: a horizontal sky gradient over a green field with a red sun.
fn synthetic_image(width: usize, height: usize) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            let dx = x as i32 - 48;
            let dy = y as i32 - 10;
            let px = if dx * dx + dy * dy < 36 {
                [220, 40, 30, 255]
            } else if y < height * 2 / 3 {
                let t = (y * 60 / height) as u8;
                [90 + t, 150 + t, 235, 255]
            } else {
                [40, 140 + (x % 3) as u8 * 5, 50, 255]
            };
            bytes.extend_from_slice(&px);
        }
    }
    bytes
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    println!("=== Palette Extraction Demo ===\n");

    let (width, height) = (64, 48);
    let bytes = synthetic_image(width, height);
    println!("Generated a {}x{} RGBA image\n", width, height);

    for k in [3, 5] {
        let start = std::time::Instant::now();
        let palette = match extract_palette(k, &bytes, DEFAULT_MAX_ITERATIONS) {
            Ok(palette) => palette,
            Err(e) => {
                eprintln!("k={}: {}", k, e);
                continue;
            }
        };
        let elapsed = start.elapsed();

        println!("k = {} ({:.2?})", k, elapsed);
        for entry in palette.entries() {
            println!("  {}  {:>7}", entry.color, entry.percent_label());
        }

        match palette.highlight(0, &bytes) {
            Ok(mask) => {
                let faded = mask.chunks_exact(4).filter(|px| px[3] != 255).count();
                println!("  highlighting {} fades {} pixels\n", palette.entries()[0].color, faded);
            }
            Err(e) => eprintln!("  highlight failed: {}\n", e),
        }
    }

    println!("=== Run Statistics ===\n");

    let pixels = match Rgba::from_bytes(&bytes) {
        Ok(pixels) => pixels,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };
    match KMeans::new(4).fit_with_stats(&pixels, &ColorStrategy) {
        Ok((_, stats)) => println!("{}", stats.summary()),
        Err(e) => eprintln!("{}", e),
    }

    println!("\n=== Error Handling ===\n");

    let flat = vec![128u8; 16 * 4];
    match extract_palette(2, &flat, DEFAULT_MAX_ITERATIONS) {
        Ok(_) => println!("unexpected success on a single-color image"),
        Err(e) => println!("single-color image with k=2: {}", e),
    }
    match extract_palette(16, &flat, DEFAULT_MAX_ITERATIONS) {
        Ok(_) => println!("unexpected success with k = pixel count"),
        Err(e) => println!("k equal to pixel count: {}", e),
    }
}
