//! Document quad detection
//!
//! Finds the four corners of a photographed page with a Sobel edge map,
//! histogram-based magnitude thresholding and extremal-corner scoring:
//! - Downsample so the larger side is at most 512 pixels
//! - Sobel gradients on the grayscale image, magnitude `(|gx| + |gy|) / 4`
//! - Keep the strongest ~15% of interior pixels
//! - Take the qualifying pixels closest to each image corner
//!
//! No sub-pixel refinement and no outlier rejection; a missing corner means
//! "not found" and the caller falls back to the unrectified image.

mod corners;

pub use corners::{MAX_WARP_SIDE, estimate_warp_size, order_corners};

use crate::geometry;
use crate::models::bitmap::{blue, green, red};
use crate::models::{Bitmap, Point};

/// Larger-side cap for the detection working image.
const MAX_DETECT_SIDE: usize = 512;
/// Fraction of interior pixels the magnitude threshold must admit.
const EDGE_PIXEL_FRACTION: f32 = 0.15;

/// Grayscale coefficients: Y = (76*R + 150*G + 29*B) >> 8
const COEF_R: i32 = 76;
const COEF_G: i32 = 150;
const COEF_B: i32 = 29;

/// Detect the 4 corners of a document in the image.
///
/// Returns corners in source-image coordinates, approximately ordered
/// TL, TR, BR, BL; run [`order_corners`] before warping. `None` when no
/// qualifying pixel exists for one of the corners.
pub fn find_document_quad(src: &Bitmap) -> Option<[Point; 4]> {
    let src_w = src.width();
    let src_h = src.height();
    if src_w < 3 || src_h < 3 {
        return None;
    }

    let scale = (MAX_DETECT_SIDE as f32 / src_w.max(src_h) as f32).min(1.0);
    let scaled;
    let work = if scale < 1.0 {
        let dw = ((src_w as f32 * scale) as usize).max(3);
        let dh = ((src_h as f32 * scale) as usize).max(3);
        scaled = geometry::resize_area(src, dw, dh);
        &scaled
    } else {
        src
    };

    let w = work.width();
    let h = work.height();
    let gray = to_grayscale(work);

    // Sobel pass over interior pixels; borders keep magnitude 0
    let mut magnitude = vec![0u8; w * h];
    let mut histogram = [0u32; 256];
    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let tl = gray[(y - 1) * w + x - 1] as i32;
            let tc = gray[(y - 1) * w + x] as i32;
            let tr = gray[(y - 1) * w + x + 1] as i32;
            let ml = gray[y * w + x - 1] as i32;
            let mr = gray[y * w + x + 1] as i32;
            let bl = gray[(y + 1) * w + x - 1] as i32;
            let bc = gray[(y + 1) * w + x] as i32;
            let br = gray[(y + 1) * w + x + 1] as i32;

            let gx = -tl + tr - 2 * ml + 2 * mr - bl + br;
            let gy = -tl - 2 * tc - tr + bl + 2 * bc + br;
            let mag = ((gx.abs() + gy.abs()) / 4).clamp(0, 255);

            magnitude[y * w + x] = mag as u8;
            histogram[mag as usize] += 1;
        }
    }

    let threshold = select_threshold(&histogram, (w - 2) * (h - 2))?;

    // Extremal-corner scoring over qualifying pixels: for each image corner,
    // keep the qualifying pixel minimizing its Manhattan distance to it.
    let mut best: [Option<(usize, usize)>; 4] = [None; 4];
    let mut best_score = [usize::MAX; 4];
    for y in 1..h - 1 {
        for x in 1..w - 1 {
            if magnitude[y * w + x] < threshold {
                continue;
            }
            let scores = [
                x + y,                     // top-left
                (w - 1 - x) + y,           // top-right
                (w - 1 - x) + (h - 1 - y), // bottom-right
                x + (h - 1 - y),           // bottom-left
            ];
            for (i, &score) in scores.iter().enumerate() {
                if score < best_score[i] {
                    best_score[i] = score;
                    best[i] = Some((x, y));
                }
            }
        }
    }

    let inv_x = src_w as f32 / w as f32;
    let inv_y = src_h as f32 / h as f32;
    let mut points = [Point::default(); 4];
    for (i, corner) in best.iter().enumerate() {
        let (x, y) = (*corner)?;
        points[i] = Point::new(x as f32, y as f32).scaled(inv_x, inv_y);
    }

    Some(points)
}

/// BT.601 grayscale plane of a bitmap.
fn to_grayscale(src: &Bitmap) -> Vec<u8> {
    let mut gray = Vec::with_capacity(src.width() * src.height());
    for y in 0..src.height() {
        for x in 0..src.width() {
            let p = src.get(x, y);
            let lum =
                (COEF_R * red(p) as i32 + COEF_G * green(p) as i32 + COEF_B * blue(p) as i32) >> 8;
            gray.push(lum.min(255) as u8);
        }
    }
    gray
}

/// Pick the highest magnitude whose cumulative pixel count, scanning bins
/// from 255 downward, reaches [`EDGE_PIXEL_FRACTION`] of the interior.
fn select_threshold(histogram: &[u32; 256], interior_pixels: usize) -> Option<u8> {
    if interior_pixels == 0 {
        return None;
    }
    let wanted = (interior_pixels as f32 * EDGE_PIXEL_FRACTION).ceil() as u64;

    let mut cumulative = 0u64;
    for threshold in (0..=255u32).rev() {
        cumulative += histogram[threshold as usize] as u64;
        if cumulative >= wanted {
            return Some(threshold as u8);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::bitmap::pack_argb;

    #[test]
    fn test_tiny_image_not_found() {
        assert!(find_document_quad(&Bitmap::new(2, 2)).is_none());
        assert!(find_document_quad(&Bitmap::new(0, 0)).is_none());
    }

    #[test]
    fn test_threshold_selection() {
        let mut histogram = [0u32; 256];
        histogram[0] = 850;
        histogram[200] = 150;
        // 15% of 1000 = 150, available exactly at bin 200
        assert_eq!(select_threshold(&histogram, 1000), Some(200));

        histogram[200] = 100;
        histogram[0] = 900;
        // Bin 200 alone falls short; the scan drops to bin 0
        assert_eq!(select_threshold(&histogram, 1000), Some(0));

        assert!(select_threshold(&[0u32; 256], 0).is_none());
    }

    #[test]
    fn test_textured_square_corners() {
        // White frame around a centered checkerboard square: all strong
        // gradients live inside the square, so the extremal corners land on
        // its boundary region.
        let white = pack_argb(255, 255, 255, 255);
        let black = pack_argb(255, 0, 0, 0);
        let mut bmp = Bitmap::from_pixels(200, 200, vec![white; 200 * 200]);
        for y in 40..160 {
            for x in 40..160 {
                if (x / 4 + y / 4) % 2 == 0 {
                    bmp.set(x, y, black);
                }
            }
        }

        let corners = find_document_quad(&bmp).expect("quad should be found");
        let expected = [
            Point::new(40.0, 40.0),
            Point::new(159.0, 40.0),
            Point::new(159.0, 159.0),
            Point::new(40.0, 159.0),
        ];
        for (got, want) in corners.iter().zip(expected.iter()) {
            assert!(
                got.distance(want) < 10.0,
                "corner {got:?} too far from {want:?}"
            );
        }
    }

    #[test]
    fn test_large_image_corners_after_reduction() {
        // 1024x1024 source forces the working image down to 512; the
        // checkerboard cells are block-aligned so the area average keeps
        // their contrast and the corners map back within tolerance.
        let white = pack_argb(255, 255, 255, 255);
        let black = pack_argb(255, 0, 0, 0);
        let mut bmp = Bitmap::from_pixels(1024, 1024, vec![white; 1024 * 1024]);
        for y in 150..850 {
            for x in 150..850 {
                if (x / 16 + y / 16) % 2 == 0 {
                    bmp.set(x, y, black);
                }
            }
        }

        let corners = find_document_quad(&bmp).expect("quad should be found");
        let expected = [
            Point::new(150.0, 150.0),
            Point::new(849.0, 150.0),
            Point::new(849.0, 849.0),
            Point::new(150.0, 849.0),
        ];
        for (got, want) in corners.iter().zip(expected.iter()) {
            assert!(
                got.distance(want) < 20.0,
                "corner {got:?} too far from {want:?}"
            );
        }
    }

    #[test]
    fn test_flat_image_degrades_to_interior() {
        // Zero gradients everywhere drop the threshold to 0, which admits
        // every interior pixel; the extremes collapse toward the image frame
        let bmp = Bitmap::from_pixels(3, 3, vec![pack_argb(255, 128, 128, 128); 9]);
        let corners = find_document_quad(&bmp).expect("threshold 0 admits the interior");
        assert_eq!(corners[0], corners[1]);
    }
}
