//! Pixel-to-tensor normalization
//!
//! Converts ARGB bitmaps into the planar float layout recognition models
//! consume: all red values, then all green, then all blue, each plane in
//! row-major order (length `3 * width * height`).

use crate::geometry;
use crate::models::{Bitmap, bitmap};

/// Per-channel normalization scheme applied after scaling pixels to [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizeSpec {
    /// `(v - 0.5) / 0.5` on every channel; output lands in [-1, 1].
    Fixed,
    /// `(v - mean[c]) / std[c]` channel-wise on the raw [0, 1] value.
    MeanStd {
        /// Per-channel means in R, G, B order.
        mean: [f32; 3],
        /// Per-channel standard deviations in R, G, B order.
        std: [f32; 3],
    },
}

impl Default for NormalizeSpec {
    fn default() -> Self {
        NormalizeSpec::Fixed
    }
}

impl NormalizeSpec {
    fn apply(&self, v: f32, channel: usize) -> f32 {
        match self {
            NormalizeSpec::Fixed => (v - 0.5) / 0.5,
            NormalizeSpec::MeanStd { mean, std } => (v - mean[channel]) / std[channel],
        }
    }
}

/// Detector-oriented normalization result.
///
/// Carries the tensor together with the resize geometry so detection output
/// can be mapped back onto the source image.
#[derive(Debug, Clone)]
pub struct DetectorInput {
    /// Planar RGB tensor of length `3 * width * height`.
    pub tensor: Vec<f32>,
    /// Tensor width (multiple of 32, at least 32).
    pub width: usize,
    /// Tensor height (multiple of 32, at least 32).
    pub height: usize,
    /// Horizontal scale-back factor: `source_width / width`.
    pub scale_w: f32,
    /// Vertical scale-back factor: `source_height / height`.
    pub scale_h: f32,
}

/// Convert a bitmap into a planar RGB float tensor of `3 * tw * th` values.
///
/// The bitmap is resized first when its dimensions differ from the target
/// (area-averaged when shrinking, bilinear otherwise); an equal-size bitmap
/// is read as is. The caller's bitmap is never consumed.
pub fn to_tensor(src: &Bitmap, target_width: usize, target_height: usize, spec: &NormalizeSpec) -> Vec<f32> {
    let resized;
    let work = if src.width() == target_width && src.height() == target_height {
        src
    } else {
        resized = geometry::resize_area(src, target_width, target_height);
        &resized
    };

    let plane = target_width * target_height;
    let mut tensor = vec![0.0f32; 3 * plane];

    for y in 0..target_height {
        for x in 0..target_width {
            let p = work.get(x, y);
            let idx = y * target_width + x;
            let r = bitmap::red(p) as f32 / 255.0;
            let g = bitmap::green(p) as f32 / 255.0;
            let b = bitmap::blue(p) as f32 / 255.0;
            tensor[idx] = spec.apply(r, 0);
            tensor[plane + idx] = spec.apply(g, 1);
            tensor[2 * plane + idx] = spec.apply(b, 2);
        }
    }

    tensor
}

/// Build a detection-model input whose larger side is capped at `max_side`.
///
/// Target dimensions are the scaled source dimensions rounded down to a
/// multiple of 32 and floored at 32; the returned scale-back factors map
/// detector coordinates onto the source image.
pub fn for_detector(src: &Bitmap, max_side: usize, spec: &NormalizeSpec) -> DetectorInput {
    let longest = src.width().max(src.height()).max(1);
    let scale = (max_side as f32 / longest as f32).min(1.0);

    let width = round_down_32(src.width() as f32 * scale);
    let height = round_down_32(src.height() as f32 * scale);

    let tensor = to_tensor(src, width, height, spec);
    DetectorInput {
        tensor,
        width,
        height,
        scale_w: src.width() as f32 / width as f32,
        scale_h: src.height() as f32 / height as f32,
    }
}

fn round_down_32(v: f32) -> usize {
    ((v as usize) / 32 * 32).max(32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::bitmap::pack_argb;

    fn solid(w: usize, h: usize, argb: u32) -> Bitmap {
        Bitmap::from_pixels(w, h, vec![argb; w * h])
    }

    #[test]
    fn test_fixed_spec_mid_gray_is_zero() {
        let src = solid(4, 4, pack_argb(255, 128, 128, 128));
        let tensor = to_tensor(&src, 4, 4, &NormalizeSpec::Fixed);
        assert_eq!(tensor.len(), 3 * 4 * 4);
        for v in tensor {
            assert!(v.abs() < 0.01, "mid gray should normalize near zero, got {v}");
        }
    }

    #[test]
    fn test_fixed_spec_range() {
        let mut pixels = Vec::new();
        for i in 0..64u32 {
            pixels.push(pack_argb(255, (i * 4) % 256, (i * 7) % 256, 255 - (i * 3) % 256));
        }
        let src = Bitmap::from_pixels(8, 8, pixels);
        let tensor = to_tensor(&src, 8, 8, &NormalizeSpec::Fixed);
        for v in tensor {
            assert!((-1.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn test_resize_before_normalize() {
        let src = solid(16, 16, pack_argb(255, 255, 0, 0));
        let tensor = to_tensor(&src, 4, 4, &NormalizeSpec::Fixed);
        assert_eq!(tensor.len(), 3 * 4 * 4);
        // Red plane saturated high, green plane saturated low
        assert!((tensor[0] - 1.0).abs() < 0.01);
        assert!((tensor[16] + 1.0).abs() < 0.01);
    }

    #[test]
    fn test_mean_std_uses_raw_scaled_value() {
        let src = solid(2, 2, pack_argb(255, 255, 128, 0));
        let spec = NormalizeSpec::MeanStd {
            mean: [0.5, 0.5, 0.5],
            std: [0.25, 0.25, 0.25],
        };
        let tensor = to_tensor(&src, 2, 2, &spec);
        // (1.0 - 0.5) / 0.25 = 2.0
        assert!((tensor[0] - 2.0).abs() < 0.01);
        // (0.0 - 0.5) / 0.25 = -2.0 on the blue plane
        assert!((tensor[8] + 2.0).abs() < 0.01);
    }

    #[test]
    fn test_detector_input_geometry() {
        let src = solid(1000, 500, pack_argb(255, 50, 50, 50));
        let input = for_detector(&src, 512, &NormalizeSpec::Fixed);
        assert_eq!(input.width % 32, 0);
        assert_eq!(input.height % 32, 0);
        assert!(input.width <= 512);
        assert_eq!(input.tensor.len(), 3 * input.width * input.height);
        assert!((input.scale_w - 1000.0 / input.width as f32).abs() < 1e-5);
    }

    #[test]
    fn test_detector_input_floors_at_32() {
        let src = solid(10, 10, pack_argb(255, 0, 0, 0));
        let input = for_detector(&src, 512, &NormalizeSpec::Fixed);
        assert_eq!((input.width, input.height), (32, 32));
    }
}
