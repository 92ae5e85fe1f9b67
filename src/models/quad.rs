use super::Point;

/// Four corner points of a (possibly skewed) quadrilateral region.
///
/// After [`crate::detector::order_corners`] the corners are canonical:
/// index 0 = top-left, 1 = top-right, 2 = bottom-right, 3 = bottom-left,
/// forming a simple quadrilateral. A freshly constructed quad only
/// guarantees "4 points".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    /// Corner points; canonical order is TL, TR, BR, BL.
    pub corners: [Point; 4],
}

impl Quad {
    /// Create a quad from 4 corner points.
    pub fn new(corners: [Point; 4]) -> Self {
        Self { corners }
    }

    /// Top-left corner (valid after canonical ordering).
    pub fn top_left(&self) -> Point {
        self.corners[0]
    }

    /// Top-right corner (valid after canonical ordering).
    pub fn top_right(&self) -> Point {
        self.corners[1]
    }

    /// Bottom-right corner (valid after canonical ordering).
    pub fn bottom_right(&self) -> Point {
        self.corners[2]
    }

    /// Bottom-left corner (valid after canonical ordering).
    pub fn bottom_left(&self) -> Point {
        self.corners[3]
    }
}
