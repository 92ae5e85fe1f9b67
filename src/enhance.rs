//! Legibility enhancement for document images
//!
//! Linear contrast/brightness adjustment followed by a size-gated Laplacian
//! sharpen. Applied only to `Document` scenes; item photos pass through.

use crate::models::bitmap::{alpha, blue, green, pack_argb, red};
use crate::models::{Bitmap, SceneKind};

const DOCUMENT_CONTRAST: f32 = 1.2;
const DOCUMENT_BRIGHTNESS: f32 = 10.0;
/// Images larger than this many pixels skip the sharpen pass.
const SHARPEN_MAX_PIXELS: usize = 2_000_000;

/// Linear per-channel contrast/brightness adjustment; alpha is preserved.
///
/// Each color channel maps to `clamp((c - 128) * contrast + 128 + brightness)`.
pub fn adjust_contrast(src: &Bitmap, contrast: f32, brightness: f32) -> Bitmap {
    let adjust = |c: u32| -> u32 {
        ((c as f32 - 128.0) * contrast + 128.0 + brightness).clamp(0.0, 255.0) as u32
    };

    let mut out = Bitmap::new(src.width(), src.height());
    for y in 0..src.height() {
        for x in 0..src.width() {
            let p = src.get(x, y);
            out.set(
                x,
                y,
                pack_argb(alpha(p), adjust(red(p)), adjust(green(p)), adjust(blue(p))),
            );
        }
    }
    out
}

/// Discrete Laplacian sharpen: `5*center - left - right - up - down` per
/// channel on interior pixels; border pixels are copied unchanged.
pub fn sharpen(src: &Bitmap) -> Bitmap {
    let w = src.width();
    let h = src.height();
    let mut out = src.clone();
    if w < 3 || h < 3 {
        return out;
    }

    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let center = src.get(x, y);
            let left = src.get(x - 1, y);
            let right = src.get(x + 1, y);
            let up = src.get(x, y - 1);
            let down = src.get(x, y + 1);

            let channel = |f: fn(u32) -> u32| -> u32 {
                let v = 5 * f(center) as i32
                    - f(left) as i32
                    - f(right) as i32
                    - f(up) as i32
                    - f(down) as i32;
                v.clamp(0, 255) as u32
            };

            out.set(
                x,
                y,
                pack_argb(alpha(center), channel(red), channel(green), channel(blue)),
            );
        }
    }
    out
}

/// Enhance a document image for recognition.
///
/// Returns `None` for non-document scenes (the caller keeps its buffer).
/// Documents get the fixed contrast boost; the sharpen pass only runs when
/// the image is small enough to afford it.
pub fn enhance(src: &Bitmap, scene: SceneKind) -> Option<Bitmap> {
    if scene != SceneKind::Document {
        return None;
    }

    let contrasted = adjust_contrast(src, DOCUMENT_CONTRAST, DOCUMENT_BRIGHTNESS);
    if src.width() * src.height() <= SHARPEN_MAX_PIXELS {
        Some(sharpen(&contrasted))
    } else {
        Some(contrasted)
    }
}
