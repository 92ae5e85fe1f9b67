/// Caller-owned pixel buffer with packed 32-bit ARGB color.
///
/// Every transform in this crate treats a `Bitmap` as immutable input and
/// returns a new buffer; nothing mutates a caller's bitmap in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

/// Pack four 8-bit channels into an ARGB pixel.
pub const fn pack_argb(a: u32, r: u32, g: u32, b: u32) -> u32 {
    ((a & 0xff) << 24) | ((r & 0xff) << 16) | ((g & 0xff) << 8) | (b & 0xff)
}

/// Alpha channel of a packed ARGB pixel.
pub const fn alpha(argb: u32) -> u32 {
    (argb >> 24) & 0xff
}

/// Red channel of a packed ARGB pixel.
pub const fn red(argb: u32) -> u32 {
    (argb >> 16) & 0xff
}

/// Green channel of a packed ARGB pixel.
pub const fn green(argb: u32) -> u32 {
    (argb >> 8) & 0xff
}

/// Blue channel of a packed ARGB pixel.
pub const fn blue(argb: u32) -> u32 {
    argb & 0xff
}

impl Bitmap {
    /// Create a bitmap filled with transparent black.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height],
        }
    }

    /// Create a bitmap from a row-major ARGB pixel vector.
    ///
    /// # Panics
    /// Panics if `pixels.len() != width * height`.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<u32>) -> Self {
        assert_eq!(pixels.len(), width * height, "pixel count mismatch");
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a bitmap from raw RGB bytes (3 bytes per pixel), alpha forced to 255.
    pub fn from_rgb8(rgb: &[u8], width: usize, height: usize) -> Self {
        let mut pixels = Vec::with_capacity(width * height);
        for i in 0..width * height {
            let idx = i * 3;
            pixels.push(pack_argb(
                255,
                rgb[idx] as u32,
                rgb[idx + 1] as u32,
                rgb[idx + 2] as u32,
            ));
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a bitmap from raw RGBA bytes (4 bytes per pixel).
    pub fn from_rgba8(rgba: &[u8], width: usize, height: usize) -> Self {
        let mut pixels = Vec::with_capacity(width * height);
        for i in 0..width * height {
            let idx = i * 4;
            pixels.push(pack_argb(
                rgba[idx + 3] as u32,
                rgba[idx] as u32,
                rgba[idx + 1] as u32,
                rgba[idx + 2] as u32,
            ));
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Bitmap width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Bitmap height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel at (x, y), or transparent black when out of bounds.
    pub fn get(&self, x: usize, y: usize) -> u32 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.pixels[y * self.width + x]
    }

    /// Set pixel at (x, y); out-of-bounds writes are ignored.
    pub fn set(&mut self, x: usize, y: usize, argb: u32) {
        if x >= self.width || y >= self.height {
            return;
        }
        self.pixels[y * self.width + x] = argb;
    }

    /// Raw row-major ARGB pixels.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }
}

impl Default for Bitmap {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_unpack() {
        let p = pack_argb(255, 10, 20, 30);
        assert_eq!(alpha(p), 255);
        assert_eq!(red(p), 10);
        assert_eq!(green(p), 20);
        assert_eq!(blue(p), 30);
    }

    #[test]
    fn test_get_set() {
        let mut bmp = Bitmap::new(4, 4);
        bmp.set(1, 2, pack_argb(255, 1, 2, 3));
        assert_eq!(red(bmp.get(1, 2)), 1);
        assert_eq!(bmp.get(0, 0), 0);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut bmp = Bitmap::new(4, 4);
        bmp.set(10, 10, 0xffff_ffff); // Should not panic
        assert_eq!(bmp.get(10, 10), 0);
    }

    #[test]
    fn test_from_rgb8() {
        let rgb = [255u8, 0, 0, 0, 255, 0];
        let bmp = Bitmap::from_rgb8(&rgb, 2, 1);
        assert_eq!(red(bmp.get(0, 0)), 255);
        assert_eq!(green(bmp.get(1, 0)), 255);
        assert_eq!(alpha(bmp.get(1, 0)), 255);
    }
}
