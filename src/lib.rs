//! docscan_prep - On-device document image preprocessing for OCR
//!
//! A pure Rust preprocessing pipeline that turns a photographed document or
//! item image into the numeric tensor an OCR recognition model expects:
//! scene/layout classification, perspective rectification of skewed pages,
//! legibility enhancement, and planar RGB tensor encoding. Built for tight
//! mobile memory/latency budgets with graceful degradation at every stage.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// External backend capability traits (layout, rectification)
pub mod backend;
/// Scene and layout classification heuristics
pub mod classify;
/// Document quad detection, corner ordering, warp sizing
pub mod detector;
/// Contrast adjustment and Laplacian sharpening
pub mod enhance;
/// Rotation, cropping, resizing and perspective warping
pub mod geometry;
/// Core data structures (Bitmap, Point, Quad, scene/layout tags)
pub mod models;
/// Pixel-to-tensor normalization
pub mod normalize;
/// Pipeline orchestration
pub mod pipeline;
/// Decode-time downsample planning
pub mod sampling;
/// Host-side helpers for loading images and inspecting buffers
pub mod tools;

mod debug;

pub use backend::{LayoutBackend, RectifyBackend};
pub use models::{Bitmap, LayoutKind, Point, Quad, SceneKind};
pub use normalize::{DetectorInput, NormalizeSpec};
pub use pipeline::{PipelineTelemetry, Processor};

/// Run the full preprocessing pipeline on one image.
///
/// Classifies the scene, rectifies and enhances document pages, and encodes
/// the result as a planar RGB tensor of length `3 * model_width *
/// model_height`. Equivalent to a throwaway [`Processor`] without backends.
pub fn process(
    image: &Bitmap,
    model_width: usize,
    model_height: usize,
    spec: &NormalizeSpec,
) -> Vec<f32> {
    Processor::new(model_width, model_height)
        .with_spec(spec.clone())
        .process(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::bitmap::pack_argb;

    #[test]
    fn test_process_tensor_contract() {
        let image = Bitmap::from_pixels(20, 20, vec![pack_argb(255, 128, 128, 128); 400]);
        let tensor = process(&image, 16, 16, &NormalizeSpec::Fixed);
        assert_eq!(tensor.len(), 3 * 16 * 16);
        for v in tensor {
            assert!((-1.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn test_process_empty_image() {
        let tensor = process(&Bitmap::new(0, 0), 8, 8, &NormalizeSpec::Fixed);
        assert_eq!(tensor.len(), 3 * 8 * 8);
    }
}
