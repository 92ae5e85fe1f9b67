//! Pixel-buffer geometry primitives
//!
//! Rotation, cropping, bilinear resizing and perspective warping over ARGB
//! bitmaps. Every function is pure: the source bitmap is only read, and the
//! result is a newly allocated buffer. Operations that can be handed
//! degenerate geometry return `None` instead of a buffer.

/// Perspective transform estimation (DLT solve over 4 correspondences)
pub mod transform;

pub use transform::PerspectiveTransform;

use crate::models::{Bitmap, Point, Quad, bitmap};

/// Interpolate one 8-bit channel between four neighbors.
fn lerp_channel(c00: u32, c10: u32, c01: u32, c11: u32, fx: f32, fy: f32) -> u32 {
    let top = c00 as f32 + (c10 as f32 - c00 as f32) * fx;
    let bottom = c01 as f32 + (c11 as f32 - c01 as f32) * fx;
    (top + (bottom - top) * fy).round().clamp(0.0, 255.0) as u32
}

/// Sample a bitmap at fractional coordinates with bilinear filtering.
///
/// Coordinates are clamped to the valid pixel range, so samples taken just
/// outside the image reuse the border pixels.
pub(crate) fn sample_bilinear(src: &Bitmap, x: f32, y: f32) -> u32 {
    let w = src.width();
    let h = src.height();
    if w == 0 || h == 0 {
        return 0;
    }

    let x = x.clamp(0.0, (w - 1) as f32);
    let y = y.clamp(0.0, (h - 1) as f32);
    let x0 = x.floor() as usize;
    let y0 = y.floor() as usize;
    let x1 = (x0 + 1).min(w - 1);
    let y1 = (y0 + 1).min(h - 1);
    let fx = x - x0 as f32;
    let fy = y - y0 as f32;

    let p00 = src.get(x0, y0);
    let p10 = src.get(x1, y0);
    let p01 = src.get(x0, y1);
    let p11 = src.get(x1, y1);

    bitmap::pack_argb(
        lerp_channel(
            bitmap::alpha(p00),
            bitmap::alpha(p10),
            bitmap::alpha(p01),
            bitmap::alpha(p11),
            fx,
            fy,
        ),
        lerp_channel(
            bitmap::red(p00),
            bitmap::red(p10),
            bitmap::red(p01),
            bitmap::red(p11),
            fx,
            fy,
        ),
        lerp_channel(
            bitmap::green(p00),
            bitmap::green(p10),
            bitmap::green(p01),
            bitmap::green(p11),
            fx,
            fy,
        ),
        lerp_channel(
            bitmap::blue(p00),
            bitmap::blue(p10),
            bitmap::blue(p01),
            bitmap::blue(p11),
            fx,
            fy,
        ),
    )
}

/// Resize a bitmap with bilinear filtering.
///
/// Returns a clone when the target size equals the source size.
pub fn resize_bilinear(src: &Bitmap, dst_width: usize, dst_height: usize) -> Bitmap {
    if dst_width == src.width() && dst_height == src.height() {
        return src.clone();
    }

    let mut out = Bitmap::new(dst_width, dst_height);
    if src.width() == 0 || src.height() == 0 || dst_width == 0 || dst_height == 0 {
        return out;
    }

    let sx_ratio = src.width() as f32 / dst_width as f32;
    let sy_ratio = src.height() as f32 / dst_height as f32;

    for y in 0..dst_height {
        let sy = (y as f32 + 0.5) * sy_ratio - 0.5;
        for x in 0..dst_width {
            let sx = (x as f32 + 0.5) * sx_ratio - 0.5;
            out.set(x, y, sample_bilinear(src, sx, sy));
        }
    }

    out
}

/// Reduce a bitmap by averaging `factor` x `factor` pixel blocks.
///
/// Output dimensions are the source dimensions divided by `factor` (floored
/// at 1); trailing rows and columns that do not fill a whole block are folded
/// into the last block so no source pixel is dropped. A factor of 0 or 1, or
/// an empty bitmap, returns a clone.
pub fn downsample(src: &Bitmap, factor: usize) -> Bitmap {
    if factor <= 1 || src.width() == 0 || src.height() == 0 {
        return src.clone();
    }

    let dst_w = (src.width() / factor).max(1);
    let dst_h = (src.height() / factor).max(1);
    let mut out = Bitmap::new(dst_w, dst_h);

    for y in 0..dst_h {
        let y0 = y * factor;
        let y1 = if y + 1 == dst_h { src.height() } else { y0 + factor };
        for x in 0..dst_w {
            let x0 = x * factor;
            let x1 = if x + 1 == dst_w { src.width() } else { x0 + factor };

            let (mut a, mut r, mut g, mut b) = (0u64, 0u64, 0u64, 0u64);
            for sy in y0..y1 {
                for sx in x0..x1 {
                    let p = src.get(sx, sy);
                    a += bitmap::alpha(p) as u64;
                    r += bitmap::red(p) as u64;
                    g += bitmap::green(p) as u64;
                    b += bitmap::blue(p) as u64;
                }
            }
            let count = ((y1 - y0) * (x1 - x0)) as u64;
            out.set(
                x,
                y,
                bitmap::pack_argb(
                    (a / count) as u32,
                    (r / count) as u32,
                    (g / count) as u32,
                    (b / count) as u32,
                ),
            );
        }
    }

    out
}

/// Resize a bitmap to exactly `dst_width` x `dst_height`, area-averaged.
///
/// When shrinking, box-averages by the largest whole factor that still covers
/// the target before the bilinear pass, so heavy reductions fold every source
/// pixel into the result instead of point-sampling four taps per output
/// pixel. Degenerate and enlarging cases fall through to plain bilinear.
pub(crate) fn resize_area(src: &Bitmap, dst_width: usize, dst_height: usize) -> Bitmap {
    if dst_width == 0 || dst_height == 0 || src.width() == 0 || src.height() == 0 {
        return resize_bilinear(src, dst_width, dst_height);
    }

    let factor = (src.width() / dst_width)
        .min(src.height() / dst_height)
        .max(1);
    if factor == 1 {
        return resize_bilinear(src, dst_width, dst_height);
    }

    let reduced = downsample(src, factor);
    resize_bilinear(&reduced, dst_width, dst_height)
}

/// Rotate a bitmap about its center by `angle_deg` degrees.
///
/// The output grows to the rotated bounding box so that no source content is
/// cropped; uncovered pixels stay transparent black. An angle that is a
/// multiple of 360 returns an unrotated copy.
pub fn rotate(src: &Bitmap, angle_deg: f32) -> Bitmap {
    if angle_deg.rem_euclid(360.0) == 0.0 || src.width() == 0 || src.height() == 0 {
        return src.clone();
    }

    let w = src.width();
    let h = src.height();
    let theta = angle_deg.to_radians();
    let (sin, cos) = theta.sin_cos();

    let new_w = ((w as f32 * cos.abs() + h as f32 * sin.abs()).round()).max(1.0) as usize;
    let new_h = ((w as f32 * sin.abs() + h as f32 * cos.abs()).round()).max(1.0) as usize;

    let cx = (w as f32 - 1.0) / 2.0;
    let cy = (h as f32 - 1.0) / 2.0;
    let ncx = (new_w as f32 - 1.0) / 2.0;
    let ncy = (new_h as f32 - 1.0) / 2.0;

    let mut out = Bitmap::new(new_w, new_h);
    for y in 0..new_h {
        for x in 0..new_w {
            let dx = x as f32 - ncx;
            let dy = y as f32 - ncy;
            // Inverse rotation back into source coordinates
            let sx = cos * dx + sin * dy + cx;
            let sy = -sin * dx + cos * dy + cy;
            if sx >= -0.5 && sx <= w as f32 - 0.5 && sy >= -0.5 && sy <= h as f32 - 0.5 {
                out.set(x, y, sample_bilinear(src, sx, sy));
            }
        }
    }

    out
}

/// Crop a rectangular region given as `[left, top, right, bottom]`.
///
/// `left`/`top` are clamped into the image, `right`/`bottom` are clamped to
/// keep at least a 1x1 region. Returns `None` when fewer than 4 box values
/// are given or the bitmap is empty.
pub fn crop(src: &Bitmap, bounds: &[i32]) -> Option<Bitmap> {
    if bounds.len() < 4 {
        return None;
    }
    let w = src.width() as i32;
    let h = src.height() as i32;
    if w == 0 || h == 0 {
        return None;
    }

    let left = bounds[0].clamp(0, w - 1);
    let top = bounds[1].clamp(0, h - 1);
    let right = bounds[2].clamp(left + 1, w);
    let bottom = bounds[3].clamp(top + 1, h);
    if right <= left || bottom <= top {
        return None;
    }

    let out_w = (right - left) as usize;
    let out_h = (bottom - top) as usize;
    let mut out = Bitmap::new(out_w, out_h);
    for y in 0..out_h {
        for x in 0..out_w {
            out.set(x, y, src.get(left as usize + x, top as usize + y));
        }
    }

    Some(out)
}

/// Warp the region inside `quad` (corners ordered TL, TR, BR, BL) onto an
/// upright `dst_width` x `dst_height` rectangle.
///
/// Fails when either destination dimension is <= 1 or the quad corners are
/// degenerate (collinear points admit no unique perspective transform).
pub fn warp_perspective(src: &Bitmap, quad: &Quad, dst_width: u32, dst_height: u32) -> Option<Bitmap> {
    if dst_width <= 1 || dst_height <= 1 {
        return None;
    }
    if src.width() == 0 || src.height() == 0 {
        return None;
    }

    let dw = dst_width as f32;
    let dh = dst_height as f32;
    let dst_pts = [
        Point::new(0.0, 0.0),
        Point::new(dw, 0.0),
        Point::new(dw, dh),
        Point::new(0.0, dh),
    ];

    // Reject degenerate source quads before allocating the output: the
    // forward map must exist, and the inverse map drives the resample.
    let forward = PerspectiveTransform::from_points(&quad.corners, &dst_pts)?;
    if !forward.is_finite() {
        return None;
    }
    let inverse = PerspectiveTransform::from_points(&dst_pts, &quad.corners)?;
    if !inverse.is_finite() {
        return None;
    }

    let mut out = Bitmap::new(dst_width as usize, dst_height as usize);
    for y in 0..dst_height as usize {
        for x in 0..dst_width as usize {
            let src_pt = inverse.apply(&Point::new(x as f32, y as f32));
            out.set(x, y, sample_bilinear(src, src_pt.x, src_pt.y));
        }
    }

    Some(out)
}
