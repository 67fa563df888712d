//! The layer model: what a scene emits for one frame.
//!
//! A [`Layer`] is a positioned primitive (fill, rectangle, circle, text,
//! checker pattern) with an opacity and an affine transform. Scenes produce
//! plain layer lists; they never draw anything themselves.

use crate::color::Color;

/// Axis-aligned placement of a layer before its transform is applied,
/// in canvas coordinates (top-left origin).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Center of the rectangle.
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

/// Uniform scale and rotation about a pivot point in canvas coordinates.
///
/// Grouped elements (e.g. all parts of one post card) share the same pivot
/// so they move as a unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: f64,
    pub rotation_deg: f64,
    pub pivot_x: f64,
    pub pivot_y: f64,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        scale: 1.0,
        rotation_deg: 0.0,
        pivot_x: 0.0,
        pivot_y: 0.0,
    };

    /// Scale about a pivot, no rotation.
    pub fn scale_about(scale: f64, pivot_x: f64, pivot_y: f64) -> Self {
        Self {
            scale,
            rotation_deg: 0.0,
            pivot_x,
            pivot_y,
        }
    }

    /// Scale and rotate about a pivot.
    pub fn scale_rotate_about(scale: f64, rotation_deg: f64, pivot_x: f64, pivot_y: f64) -> Self {
        Self {
            scale,
            rotation_deg,
            pivot_x,
            pivot_y,
        }
    }

    pub fn is_identity(&self) -> bool {
        self.scale == 1.0 && self.rotation_deg == 0.0
    }
}

/// Horizontal text anchoring relative to the layer rect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// The drawable primitive a layer carries.
#[derive(Debug, Clone, PartialEq)]
pub enum LayerKind {
    /// Full-canvas solid fill; the layer rect is ignored.
    Fill { color: Color },
    /// Full-canvas two-color checkerboard with the given cell size.
    Checker { a: Color, b: Color, cell: f64 },
    /// Solid rectangle with rounded corners.
    Rect { color: Color, corner_radius: f64 },
    /// Solid ellipse inscribed in the layer rect.
    Circle { color: Color },
    /// Bitmap-font text. `size` is the glyph height in pixels; the rect's
    /// `x`/`y` anchor the first baseline row.
    Text {
        content: String,
        color: Color,
        size: f64,
        align: TextAlign,
    },
}

/// One drawable element of a scene frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub kind: LayerKind,
    pub rect: Rect,
    pub transform: Transform,
    pub opacity: f64,
}

impl Layer {
    /// Full-canvas fill.
    pub fn fill(color: Color) -> Self {
        Self {
            kind: LayerKind::Fill { color },
            rect: Rect::new(0.0, 0.0, 0.0, 0.0),
            transform: Transform::IDENTITY,
            opacity: 1.0,
        }
    }

    /// Full-canvas checkerboard.
    pub fn checker(a: Color, b: Color, cell: f64) -> Self {
        Self {
            kind: LayerKind::Checker { a, b, cell },
            rect: Rect::new(0.0, 0.0, 0.0, 0.0),
            transform: Transform::IDENTITY,
            opacity: 1.0,
        }
    }

    /// Solid rectangle.
    pub fn rect(rect: Rect, color: Color, corner_radius: f64) -> Self {
        Self {
            kind: LayerKind::Rect {
                color,
                corner_radius,
            },
            rect,
            transform: Transform::IDENTITY,
            opacity: 1.0,
        }
    }

    /// Solid ellipse inscribed in `rect`.
    pub fn circle(rect: Rect, color: Color) -> Self {
        Self {
            kind: LayerKind::Circle { color },
            rect,
            transform: Transform::IDENTITY,
            opacity: 1.0,
        }
    }

    /// Left-aligned text anchored at `(x, y)`.
    pub fn text(content: impl Into<String>, x: f64, y: f64, size: f64, color: Color) -> Self {
        Self {
            kind: LayerKind::Text {
                content: content.into(),
                color,
                size,
                align: TextAlign::Left,
            },
            rect: Rect::new(x, y, 0.0, size),
            transform: Transform::IDENTITY,
            opacity: 1.0,
        }
    }

    /// Text centered horizontally on `center_x`.
    pub fn text_centered(
        content: impl Into<String>,
        center_x: f64,
        y: f64,
        size: f64,
        color: Color,
    ) -> Self {
        Self {
            kind: LayerKind::Text {
                content: content.into(),
                color,
                size,
                align: TextAlign::Center,
            },
            rect: Rect::new(center_x, y, 0.0, size),
            transform: Transform::IDENTITY,
            opacity: 1.0,
        }
    }

    /// Builder-style opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Builder-style transform.
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }
}
