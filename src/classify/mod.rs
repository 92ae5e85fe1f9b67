//! Scene and layout classification heuristics
//!
//! Both classifiers work on a small downsampled luminance grid and count
//! sharp luminance jumps between a pixel and its right/bottom neighbors.
//! They never fail: degenerate inputs (a grid too small to sample) report
//! zero edge density and fall into the conservative class.

mod layout;
mod scene;

pub use layout::classify_layout;
pub use scene::classify_scene;

use crate::geometry;
use crate::models::Bitmap;
use crate::models::bitmap::{blue, green, red};

/// Luminance jump that counts as an edge, over [0, 1] values.
pub(crate) const EDGE_JUMP: f32 = 0.2;

/// Downsample to at most `max_side` per axis and return the Rec.709
/// luminance grid in [0, 1] together with its dimensions.
///
/// The reduction is area-averaged so heavy shrinks fold every source pixel
/// into the grid rather than point-sampling a few of them.
pub(crate) fn luma_grid(src: &Bitmap, max_side: usize) -> (Vec<f32>, usize, usize) {
    let w = src.width().min(max_side);
    let h = src.height().min(max_side);

    let scaled;
    let work = if w == src.width() && h == src.height() {
        src
    } else {
        scaled = geometry::resize_area(src, w, h);
        &scaled
    };

    let mut grid = Vec::with_capacity(w * h);
    for y in 0..h {
        for x in 0..w {
            let p = work.get(x, y);
            let lum = 0.2126 * red(p) as f32 + 0.7152 * green(p) as f32 + 0.0722 * blue(p) as f32;
            grid.push(lum / 255.0);
        }
    }

    (grid, w, h)
}
