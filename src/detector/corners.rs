use crate::models::{Point, Quad};

/// Hard cap on either warp target dimension, in pixels.
pub const MAX_WARP_SIDE: u32 = 4096;

/// Canonicalize 4 unordered corner points into TL, TR, BR, BL order.
///
/// Points are sorted by angle around their centroid, then rotated so the
/// corner minimizing `x + y` comes first. Any input permutation of the same
/// simple quadrilateral yields the same ordering.
pub fn order_corners(points: [Point; 4]) -> Quad {
    let cx = points.iter().map(|p| p.x).sum::<f32>() / 4.0;
    let cy = points.iter().map(|p| p.y).sum::<f32>() / 4.0;

    let mut sorted = points;
    sorted.sort_by(|a, b| {
        let aa = (a.y - cy).atan2(a.x - cx);
        let ab = (b.y - cy).atan2(b.x - cx);
        aa.partial_cmp(&ab).unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut start = 0;
    for i in 1..4 {
        if sorted[i].x + sorted[i].y < sorted[start].x + sorted[start].y {
            start = i;
        }
    }

    Quad::new([
        sorted[start],
        sorted[(start + 1) % 4],
        sorted[(start + 2) % 4],
        sorted[(start + 3) % 4],
    ])
}

/// Derive warp target dimensions from the edge lengths of an ordered quad.
///
/// Width is the longer of the top and bottom edges, height the longer of the
/// left and right edges; both truncated, floored at 1 and capped at
/// [`MAX_WARP_SIDE`].
pub fn estimate_warp_size(quad: &Quad) -> (u32, u32) {
    let tl = quad.top_left();
    let tr = quad.top_right();
    let br = quad.bottom_right();
    let bl = quad.bottom_left();

    let width = tl.distance(&tr).max(bl.distance(&br));
    let height = tl.distance(&bl).max(tr.distance(&br));

    (
        (width as u32).clamp(1, MAX_WARP_SIDE),
        (height as u32).clamp(1, MAX_WARP_SIDE),
    )
}
