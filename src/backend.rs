//! Optional external backends
//!
//! Hosts can inject model-backed implementations of layout classification
//! and document rectification. The processor queries an injected backend
//! first and falls back to the built-in heuristic when it returns `None`
//! (or too few points). Backends are owned by the caller and must be
//! thread-safe so batch processing can share them across workers.

use crate::models::{Bitmap, LayoutKind, Point};

/// External layout classification capability.
pub trait LayoutBackend: Send + Sync {
    /// Classify the layout of a document image, or `None` to defer to the
    /// built-in heuristic.
    fn classify(&self, image: &Bitmap) -> Option<LayoutKind>;
}

/// External document rectification capability.
pub trait RectifyBackend: Send + Sync {
    /// Detect document corner points, or `None`/fewer than 4 points to defer
    /// to the built-in detector. Only the first 4 points are used.
    fn detect_quad(&self, image: &Bitmap) -> Option<Vec<Point>>;
}
