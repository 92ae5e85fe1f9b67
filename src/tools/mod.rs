//! Host-side helpers
//!
//! File loading and buffer inspection for the diagnostic binary and tests.
//! The core pipeline never performs I/O; everything here sits at the host
//! boundary and uses the `image` crate for decoding.

use crate::models::Bitmap;
use crate::models::bitmap::{blue, green, red};
use image::GenericImageView;
use std::env;
use std::path::Path;

fn max_dim_from_env() -> Option<u32> {
    match env::var("DOCSCAN_MAX_DIM") {
        Ok(value) => match value.trim().parse::<u32>() {
            Ok(0) => None,
            Ok(v) => Some(v),
            Err(_) => None,
        },
        Err(_) => None,
    }
}

/// Load an image file into an ARGB bitmap.
///
/// Honors `DOCSCAN_MAX_DIM` by downscaling oversized images before
/// conversion (0 or unset disables the cap).
pub fn load_bitmap<P: AsRef<Path>>(path: P) -> Result<Bitmap, image::ImageError> {
    let img = image::open(path)?;
    let rgba = if let Some(max_dim) = max_dim_from_env() {
        let (orig_w, orig_h) = img.dimensions();
        if orig_w.max(orig_h) > max_dim {
            img.resize(max_dim, max_dim, image::imageops::FilterType::Triangle)
                .to_rgba8()
        } else {
            img.to_rgba8()
        }
    } else {
        img.to_rgba8()
    };
    let (width, height) = rgba.dimensions();
    Ok(Bitmap::from_rgba8(
        &rgba.into_raw(),
        width as usize,
        height as usize,
    ))
}

/// Summary statistics for a bitmap's luminance.
#[derive(Debug, Clone, Copy)]
pub struct LumaStats {
    /// Minimum luminance value.
    pub min: u8,
    /// Maximum luminance value.
    pub max: u8,
    /// Average luminance value.
    pub mean: f32,
}

/// Compute min/max/mean luminance over a bitmap.
pub fn luma_stats(bitmap: &Bitmap) -> LumaStats {
    let mut min = 255u8;
    let mut max = 0u8;
    let mut sum = 0u64;
    let count = bitmap.width() * bitmap.height();
    if count == 0 {
        return LumaStats {
            min: 0,
            max: 0,
            mean: 0.0,
        };
    }

    for y in 0..bitmap.height() {
        for x in 0..bitmap.width() {
            let p = bitmap.get(x, y);
            let lum = ((76 * red(p) + 150 * green(p) + 29 * blue(p)) >> 8).min(255) as u8;
            min = min.min(lum);
            max = max.max(lum);
            sum += lum as u64;
        }
    }

    LumaStats {
        min,
        max,
        mean: sum as f32 / count as f32,
    }
}
