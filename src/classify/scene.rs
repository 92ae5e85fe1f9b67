use super::{EDGE_JUMP, luma_grid};
use crate::models::{Bitmap, SceneKind};

const SAMPLE_SIDE: usize = 64;
const MIN_EDGE_DENSITY: f32 = 0.12;
const MIN_ASPECT: f32 = 0.6;
const MAX_ASPECT: f32 = 1.7;

/// Classify an image as a document page or an item photo.
///
/// A document shows dense text edges at a 64x64 downsample and a roughly
/// page-like aspect ratio. The aspect test uses the original dimensions,
/// not the downsampled ones.
pub fn classify_scene(src: &Bitmap) -> SceneKind {
    let (grid, w, h) = luma_grid(src, SAMPLE_SIDE);

    let mut edges = 0usize;
    let total = if w >= 2 && h >= 2 { (w - 1) * (h - 1) } else { 0 };
    if total > 0 {
        for y in 0..h - 1 {
            for x in 0..w - 1 {
                let lum = grid[y * w + x];
                let lum_right = grid[y * w + x + 1];
                let lum_down = grid[(y + 1) * w + x];
                if (lum - lum_right).abs() > EDGE_JUMP || (lum - lum_down).abs() > EDGE_JUMP {
                    edges += 1;
                }
            }
        }
    }

    let edge_density = if total == 0 {
        0.0
    } else {
        edges as f32 / total as f32
    };
    let aspect = src.width() as f32 / src.height() as f32;

    if edge_density > MIN_EDGE_DENSITY && (MIN_ASPECT..=MAX_ASPECT).contains(&aspect) {
        SceneKind::Document
    } else {
        SceneKind::ItemPhoto
    }
}
