use super::{EDGE_JUMP, luma_grid};
use crate::models::{Bitmap, LayoutKind};

const SAMPLE_SIDE: usize = 96;
const MIN_MEAN_DENSITY: f32 = 0.18;
const MIN_AXIS_DENSITY: f32 = 0.08;

/// Classify a document image as a table or free-form text.
///
/// Tables show sustained edge activity along both axes; anything else,
/// including a grid too small to sample, is treated as a text label.
pub fn classify_layout(src: &Bitmap) -> LayoutKind {
    let (grid, w, h) = luma_grid(src, SAMPLE_SIDE);

    let total = if w >= 2 && h >= 2 { (w - 1) * (h - 1) } else { 0 };
    if total == 0 {
        return LayoutKind::TextLabel;
    }

    let mut horizontal_edges = 0usize;
    let mut vertical_edges = 0usize;
    for y in 0..h - 1 {
        for x in 0..w - 1 {
            let lum = grid[y * w + x];
            if (lum - grid[y * w + x + 1]).abs() > EDGE_JUMP {
                horizontal_edges += 1;
            }
            if (lum - grid[(y + 1) * w + x]).abs() > EDGE_JUMP {
                vertical_edges += 1;
            }
        }
    }

    let horizontal_density = horizontal_edges as f32 / total as f32;
    let vertical_density = vertical_edges as f32 / total as f32;
    let edge_density = (horizontal_density + vertical_density) / 2.0;

    if edge_density > MIN_MEAN_DENSITY
        && horizontal_density > MIN_AXIS_DENSITY
        && vertical_density > MIN_AXIS_DENSITY
    {
        LayoutKind::Table
    } else {
        LayoutKind::TextLabel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::bitmap::pack_argb;

    fn grid_lines(w: usize, h: usize, step: usize) -> Bitmap {
        let black = pack_argb(255, 0, 0, 0);
        let white = pack_argb(255, 255, 255, 255);
        let mut bmp = Bitmap::new(w, h);
        for y in 0..h {
            for x in 0..w {
                let on_line = x % step == 0 || y % step == 0;
                bmp.set(x, y, if on_line { black } else { white });
            }
        }
        bmp
    }

    #[test]
    fn test_ruled_grid_is_table() {
        // 96x96 input avoids resampling; rules every 4 pixels give both
        // axes well over the density floor
        let bmp = grid_lines(96, 96, 4);
        assert_eq!(classify_layout(&bmp), LayoutKind::Table);
    }

    #[test]
    fn test_horizontal_rules_only_is_text() {
        let black = pack_argb(255, 0, 0, 0);
        let white = pack_argb(255, 255, 255, 255);
        let mut bmp = Bitmap::new(96, 96);
        for y in 0..96 {
            for x in 0..96 {
                bmp.set(x, y, if y % 6 == 0 { black } else { white });
            }
        }
        // Plenty of vertical jumps but almost no horizontal ones
        assert_eq!(classify_layout(&bmp), LayoutKind::TextLabel);
    }

    #[test]
    fn test_solid_is_text() {
        let bmp = Bitmap::from_pixels(96, 96, vec![pack_argb(255, 200, 200, 200); 96 * 96]);
        assert_eq!(classify_layout(&bmp), LayoutKind::TextLabel);
    }

    #[test]
    fn test_degenerate_is_text() {
        assert_eq!(classify_layout(&Bitmap::new(1, 1)), LayoutKind::TextLabel);
    }
}
