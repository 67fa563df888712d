//! Color utilities shared by the composition and the rasterizer.

/// RGBA color with f64 components (0.0 to 1.0 range).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    /// Create a new color with alpha = 1.0.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a new color with alpha.
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from 8-bit components.
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Create white.
    pub const fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    /// Create black.
    pub const fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// Returns this color with its alpha multiplied by `factor`.
    pub fn faded(self, factor: f64) -> Self {
        Self {
            a: self.a * factor.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Linear interpolation between two colors.
    pub fn lerp(&self, other: &Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Source-over alpha compositing: `self` drawn on top of `under`.
    pub fn over(&self, under: &Color) -> Color {
        let a = self.a + under.a * (1.0 - self.a);
        if a <= 0.0 {
            return Color::rgba(0.0, 0.0, 0.0, 0.0);
        }
        Color {
            r: (self.r * self.a + under.r * under.a * (1.0 - self.a)) / a,
            g: (self.g * self.a + under.g * under.a * (1.0 - self.a)) / a,
            b: (self.b * self.a + under.b * under.a * (1.0 - self.a)) / a,
            a,
        }
    }

    /// Convert to 8-bit RGBA bytes.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let to8 = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [to8(self.r), to8(self.g), to8(self.b), to8(self.a)]
    }
}
