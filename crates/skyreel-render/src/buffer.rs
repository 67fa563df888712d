//! RGBA frame buffer.

use skyreel_composition::Color;

/// A frame of RGBA pixels with f64 components (row-major).
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data (RGBA, row-major).
    pub data: Vec<Color>,
}

impl FrameBuffer {
    /// Create a new frame buffer filled with a color.
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        let size = (width * height) as usize;
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    /// Create a new frame buffer filled with opaque black.
    pub fn new_black(width: u32, height: u32) -> Self {
        Self::new(width, height, Color::black())
    }

    /// Get a pixel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Color {
        let idx = (y * self.width + x) as usize;
        self.data[idx]
    }

    /// Set a pixel at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let idx = (y * self.width + x) as usize;
        self.data[idx] = color;
    }

    /// Composite a color over the existing pixel (source-over).
    #[inline]
    pub fn blend(&mut self, x: u32, y: u32, color: Color) {
        if color.a <= 0.0 {
            return;
        }
        let under = self.get(x, y);
        self.set(x, y, color.over(&under));
    }

    /// Flatten to 8-bit RGBA bytes.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len() * 4);
        for color in &self.data {
            out.extend_from_slice(&color.to_rgba8());
        }
        out
    }

    /// Nearest-neighbor downscale by an integer factor.
    ///
    /// Used by GIF export to keep file sizes manageable. A factor of 1
    /// returns a copy.
    pub fn downscale(&self, factor: u32) -> FrameBuffer {
        if factor <= 1 {
            return self.clone();
        }
        let w = (self.width / factor).max(1);
        let h = (self.height / factor).max(1);
        let mut out = FrameBuffer::new_black(w, h);
        for y in 0..h {
            for x in 0..w {
                out.set(x, y, self.get(x * factor, y * factor));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_composites_over() {
        let mut buf = FrameBuffer::new_black(2, 2);
        buf.blend(0, 0, Color::rgba(1.0, 1.0, 1.0, 0.5));
        let px = buf.get(0, 0);
        assert!((px.r - 0.5).abs() < 1e-9);
        // Fully transparent blend leaves the pixel alone.
        buf.blend(1, 1, Color::rgba(1.0, 0.0, 0.0, 0.0));
        assert_eq!(buf.get(1, 1), Color::black());
    }

    #[test]
    fn rgba8_layout_is_row_major() {
        let mut buf = FrameBuffer::new_black(2, 1);
        buf.set(1, 0, Color::white());
        let bytes = buf.to_rgba8();
        assert_eq!(bytes, vec![0, 0, 0, 255, 255, 255, 255, 255]);
    }

    #[test]
    fn downscale_halves_dimensions() {
        let buf = FrameBuffer::new_black(8, 6);
        let small = buf.downscale(2);
        assert_eq!((small.width, small.height), (4, 3));
    }
}
