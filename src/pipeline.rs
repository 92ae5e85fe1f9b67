//! Pipeline orchestration
//!
//! Ties the stages together: classify the scene, rectify documents through
//! quad detection + perspective warp, enhance, and normalize into the model
//! tensor. Every stage degrades to its input on failure; only allocation
//! failure aborts.

use rayon::prelude::*;

use crate::backend::{LayoutBackend, RectifyBackend};
use crate::debug::debug_enabled;
use crate::models::{Bitmap, LayoutKind, Point, SceneKind};
use crate::normalize::{self, NormalizeSpec};
use crate::{classify, detector, enhance, geometry};

/// Stage-level counters for one pipeline invocation.
#[derive(Debug, Clone, Copy)]
pub struct PipelineTelemetry {
    /// Scene classification result.
    pub scene: SceneKind,
    /// Whether a backend supplied the quad (as opposed to the heuristic).
    pub backend_quad: bool,
    /// Whether 4 corner points were found.
    pub quad_detected: bool,
    /// Whether the perspective warp succeeded.
    pub warp_applied: bool,
    /// Whether contrast/sharpen enhancement ran.
    pub enhance_applied: bool,
}

/// Document preprocessing pipeline with optional injected backends.
pub struct Processor {
    model_width: usize,
    model_height: usize,
    spec: NormalizeSpec,
    layout_backend: Option<Box<dyn LayoutBackend>>,
    rectify_backend: Option<Box<dyn RectifyBackend>>,
}

impl Processor {
    /// Create a processor producing tensors of the given model dimensions
    /// with the fixed [-1, 1] normalization scheme and no backends.
    pub fn new(model_width: usize, model_height: usize) -> Self {
        Self {
            model_width,
            model_height,
            spec: NormalizeSpec::Fixed,
            layout_backend: None,
            rectify_backend: None,
        }
    }

    /// Use an explicit normalization scheme.
    pub fn with_spec(mut self, spec: NormalizeSpec) -> Self {
        self.spec = spec;
        self
    }

    /// Inject an external layout classification backend.
    pub fn with_layout_backend(mut self, backend: Box<dyn LayoutBackend>) -> Self {
        self.layout_backend = Some(backend);
        self
    }

    /// Inject an external rectification backend.
    pub fn with_rectify_backend(mut self, backend: Box<dyn RectifyBackend>) -> Self {
        self.rectify_backend = Some(backend);
        self
    }

    /// Run the full pipeline and return the recognition input tensor.
    pub fn process(&self, image: &Bitmap) -> Vec<f32> {
        self.process_with_telemetry(image).0
    }

    /// Like [`Processor::process`] but also reports which stages ran and
    /// which fell back.
    pub fn process_with_telemetry(&self, image: &Bitmap) -> (Vec<f32>, PipelineTelemetry) {
        let scene = classify::classify_scene(image);
        let mut tel = PipelineTelemetry {
            scene,
            backend_quad: false,
            quad_detected: false,
            warp_applied: false,
            enhance_applied: false,
        };

        let corrected = if scene == SceneKind::Document {
            self.detect_quad(image, &mut tel).and_then(|points| {
                tel.quad_detected = true;
                let quad = detector::order_corners(points);
                let (w, h) = detector::estimate_warp_size(&quad);
                let warped = geometry::warp_perspective(image, &quad, w, h);
                tel.warp_applied = warped.is_some();
                warped
            })
        } else {
            None
        };

        // Failed detection or warp falls back to the unrectified input
        let base = corrected.as_ref().unwrap_or(image);

        let enhanced = enhance::enhance(base, scene);
        tel.enhance_applied = enhanced.is_some();
        let ready = enhanced.as_ref().unwrap_or(base);

        if debug_enabled() {
            eprintln!(
                "PIPELINE: scene={:?} quad={} warp={} enhance={} out={}x{}",
                tel.scene,
                tel.quad_detected,
                tel.warp_applied,
                tel.enhance_applied,
                self.model_width,
                self.model_height
            );
        }

        let tensor = normalize::to_tensor(ready, self.model_width, self.model_height, &self.spec);
        (tensor, tel)
    }

    /// Process independent images in parallel across a worker pool.
    ///
    /// The per-image pipeline stays single-threaded; parallelism is across
    /// images only.
    pub fn process_batch(&self, images: &[Bitmap]) -> Vec<Vec<f32>> {
        images.par_iter().map(|image| self.process(image)).collect()
    }

    /// Classify the scene of an image.
    pub fn classify_scene(&self, image: &Bitmap) -> SceneKind {
        classify::classify_scene(image)
    }

    /// Classify document layout, preferring the injected backend.
    pub fn classify_layout(&self, image: &Bitmap) -> LayoutKind {
        if let Some(backend) = &self.layout_backend {
            if let Some(kind) = backend.classify(image) {
                return kind;
            }
        }
        classify::classify_layout(image)
    }

    /// Detect document corners, preferring the injected backend when it
    /// returns at least 4 points.
    fn detect_quad(&self, image: &Bitmap, tel: &mut PipelineTelemetry) -> Option<[Point; 4]> {
        if let Some(backend) = &self.rectify_backend {
            if let Some(points) = backend.detect_quad(image) {
                if points.len() >= 4 {
                    tel.backend_quad = true;
                    return Some([points[0], points[1], points[2], points[3]]);
                }
            }
        }
        detector::find_document_quad(image)
    }
}
