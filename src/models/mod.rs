pub mod bitmap;
pub mod point;
pub mod quad;
pub mod tags;

pub use bitmap::Bitmap;
pub use point::Point;
pub use quad::Quad;
pub use tags::{LayoutKind, SceneKind};
