//! Layer rasterization.
//!
//! Transformed layers are drawn by inverse mapping: for every pixel inside
//! the transformed bounding box, the canvas point is mapped back into the
//! layer's local space and the primitive is sampled there. All sampling is
//! pure arithmetic, so output is deterministic.

use skyreel_composition::{Color, Layer, LayerKind, Rect, SceneFrame, TextAlign, Transform, VideoConfig};

use crate::buffer::FrameBuffer;
use crate::font;

/// Draw every layer of a scene frame onto the buffer, bottom to top.
pub fn draw_scene_frame(buffer: &mut FrameBuffer, frame: &SceneFrame, config: &VideoConfig) {
    for layer in &frame.layers {
        draw_layer(buffer, layer, config);
    }
}

fn draw_layer(buffer: &mut FrameBuffer, layer: &Layer, config: &VideoConfig) {
    if layer.opacity <= 0.0 {
        return;
    }
    match &layer.kind {
        LayerKind::Fill { color } => {
            let color = color.faded(layer.opacity);
            for y in 0..buffer.height {
                for x in 0..buffer.width {
                    buffer.blend(x, y, color);
                }
            }
        }
        LayerKind::Checker { a, b, cell } => {
            let cell = cell.max(1.0);
            let a = a.faded(layer.opacity);
            let b = b.faded(layer.opacity);
            for y in 0..buffer.height {
                for x in 0..buffer.width {
                    let cx = (x as f64 / cell) as u64;
                    let cy = (y as f64 / cell) as u64;
                    buffer.blend(x, y, if (cx + cy) % 2 == 0 { a } else { b });
                }
            }
        }
        LayerKind::Rect {
            color,
            corner_radius,
        } => {
            let color = color.faded(layer.opacity);
            draw_shape(buffer, layer.rect, &layer.transform, config, |lx, ly| {
                sample_rounded_rect(&layer.rect, *corner_radius, lx, ly).then_some(color)
            });
        }
        LayerKind::Circle { color } => {
            let color = color.faded(layer.opacity);
            draw_shape(buffer, layer.rect, &layer.transform, config, |lx, ly| {
                sample_ellipse(&layer.rect, lx, ly).then_some(color)
            });
        }
        LayerKind::Text {
            content,
            color,
            size,
            align,
        } => {
            let color = color.faded(layer.opacity);
            let glyphs: Vec<Option<&[u8; 7]>> = content.chars().map(font::glyph).collect();
            let width = font::text_width(content, *size);
            let origin_x = match align {
                TextAlign::Left => layer.rect.x,
                TextAlign::Center => layer.rect.x - width / 2.0,
            };
            let bounds = Rect::new(origin_x, layer.rect.y, width, *size);
            let cell = size / font::GLYPH_H as f64;
            draw_shape(buffer, bounds, &layer.transform, config, |lx, ly| {
                sample_text(&glyphs, &bounds, cell, lx, ly).then_some(color)
            });
        }
    }
}

/// Rasterize one primitive: walk the transformed bounding box and sample the
/// primitive in local coordinates.
fn draw_shape<F>(
    buffer: &mut FrameBuffer,
    bounds: Rect,
    transform: &Transform,
    config: &VideoConfig,
    sample: F,
) where
    F: Fn(f64, f64) -> Option<Color>,
{
    if transform.scale <= 0.0 {
        return;
    }

    let (x0, y0, x1, y1) = transformed_bbox(&bounds, transform, config);
    if x0 > x1 || y0 > y1 {
        return;
    }

    let theta = transform.rotation_deg.to_radians();
    let (sin, cos) = theta.sin_cos();
    let inv_scale = 1.0 / transform.scale;
    let identity = transform.is_identity();

    for py in y0..=y1 {
        for px in x0..=x1 {
            // Sample at the pixel center.
            let wx = px as f64 + 0.5;
            let wy = py as f64 + 0.5;
            let (lx, ly) = if identity {
                (wx, wy)
            } else {
                // Inverse transform: undo rotation, then scale, about the pivot.
                let dx = wx - transform.pivot_x;
                let dy = wy - transform.pivot_y;
                let rx = dx * cos + dy * sin;
                let ry = -dx * sin + dy * cos;
                (
                    transform.pivot_x + rx * inv_scale,
                    transform.pivot_y + ry * inv_scale,
                )
            };
            if let Some(color) = sample(lx, ly) {
                buffer.blend(px, py, color);
            }
        }
    }
}

/// Canvas-space bounding box of a transformed rect, clamped to the canvas.
fn transformed_bbox(
    bounds: &Rect,
    transform: &Transform,
    config: &VideoConfig,
) -> (u32, u32, u32, u32) {
    let theta = transform.rotation_deg.to_radians();
    let (sin, cos) = theta.sin_cos();

    let corners = [
        (bounds.x, bounds.y),
        (bounds.x + bounds.w, bounds.y),
        (bounds.x, bounds.y + bounds.h),
        (bounds.x + bounds.w, bounds.y + bounds.h),
    ];

    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for (cx, cy) in corners {
        let dx = (cx - transform.pivot_x) * transform.scale;
        let dy = (cy - transform.pivot_y) * transform.scale;
        let wx = transform.pivot_x + dx * cos - dy * sin;
        let wy = transform.pivot_y + dx * sin + dy * cos;
        min_x = min_x.min(wx);
        min_y = min_y.min(wy);
        max_x = max_x.max(wx);
        max_y = max_y.max(wy);
    }

    // One pixel of slack for the pixel-center sampling.
    let x0 = (min_x - 1.0).max(0.0) as u32;
    let y0 = (min_y - 1.0).max(0.0) as u32;
    let x1 = (max_x + 1.0).min(config.width as f64 - 1.0).max(0.0) as u32;
    let y1 = (max_y + 1.0).min(config.height as f64 - 1.0).max(0.0) as u32;
    (x0, y0, x1, y1)
}

fn sample_rounded_rect(rect: &Rect, radius: f64, lx: f64, ly: f64) -> bool {
    if lx < rect.x || lx >= rect.x + rect.w || ly < rect.y || ly >= rect.y + rect.h {
        return false;
    }
    let r = radius.min(rect.w / 2.0).min(rect.h / 2.0);
    if r <= 0.0 {
        return true;
    }
    // Distance check only applies inside the corner squares.
    let cx = lx.clamp(rect.x + r, rect.x + rect.w - r);
    let cy = ly.clamp(rect.y + r, rect.y + rect.h - r);
    let dx = lx - cx;
    let dy = ly - cy;
    dx * dx + dy * dy <= r * r
}

fn sample_ellipse(rect: &Rect, lx: f64, ly: f64) -> bool {
    let rx = rect.w / 2.0;
    let ry = rect.h / 2.0;
    if rx <= 0.0 || ry <= 0.0 {
        return false;
    }
    let (cx, cy) = rect.center();
    let nx = (lx - cx) / rx;
    let ny = (ly - cy) / ry;
    nx * nx + ny * ny <= 1.0
}

fn sample_text(glyphs: &[Option<&[u8; 7]>], bounds: &Rect, cell: f64, lx: f64, ly: f64) -> bool {
    if lx < bounds.x || ly < bounds.y || ly >= bounds.y + bounds.h {
        return false;
    }
    let row = ((ly - bounds.y) / cell) as usize;
    if row >= font::GLYPH_H as usize {
        return false;
    }
    let col = ((lx - bounds.x) / cell) as usize;
    let char_idx = col / font::ADVANCE as usize;
    let col_in_glyph = col % font::ADVANCE as usize;
    if col_in_glyph >= font::GLYPH_W as usize {
        return false;
    }
    match glyphs.get(char_idx) {
        Some(Some(pattern)) => (pattern[row] >> (font::GLYPH_W as usize - 1 - col_in_glyph)) & 1 == 1,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyreel_composition::Layer;

    fn small_config() -> VideoConfig {
        VideoConfig {
            fps: 30,
            width: 64,
            height: 64,
        }
    }

    #[test]
    fn fill_covers_whole_canvas() {
        let config = small_config();
        let mut buf = FrameBuffer::new_black(config.width, config.height);
        let mut frame = SceneFrame::new();
        frame.push(Layer::fill(Color::white()));
        draw_scene_frame(&mut buf, &frame, &config);
        assert_eq!(buf.get(0, 0), Color::white());
        assert_eq!(buf.get(63, 63), Color::white());
    }

    #[test]
    fn rect_stays_inside_its_bounds() {
        let config = small_config();
        let mut buf = FrameBuffer::new_black(config.width, config.height);
        let mut frame = SceneFrame::new();
        frame.push(Layer::rect(Rect::new(16.0, 16.0, 16.0, 16.0), Color::white(), 0.0));
        draw_scene_frame(&mut buf, &frame, &config);
        assert_eq!(buf.get(20, 20), Color::white());
        assert_eq!(buf.get(8, 8), Color::black());
        assert_eq!(buf.get(40, 40), Color::black());
    }

    #[test]
    fn rounded_corner_is_cut() {
        let config = small_config();
        let mut buf = FrameBuffer::new_black(config.width, config.height);
        let mut frame = SceneFrame::new();
        frame.push(Layer::rect(Rect::new(10.0, 10.0, 40.0, 40.0), Color::white(), 12.0));
        draw_scene_frame(&mut buf, &frame, &config);
        // The extreme corner pixel lies outside the rounding radius.
        assert_eq!(buf.get(10, 10), Color::black());
        // The rect center is filled.
        assert_eq!(buf.get(30, 30), Color::white());
    }

    #[test]
    fn circle_fills_center_not_corner() {
        let config = small_config();
        let mut buf = FrameBuffer::new_black(config.width, config.height);
        let mut frame = SceneFrame::new();
        frame.push(Layer::circle(Rect::new(16.0, 16.0, 32.0, 32.0), Color::white()));
        draw_scene_frame(&mut buf, &frame, &config);
        assert_eq!(buf.get(32, 32), Color::white());
        assert_eq!(buf.get(17, 17), Color::black());
    }

    #[test]
    fn zero_scale_draws_nothing() {
        let config = small_config();
        let mut buf = FrameBuffer::new_black(config.width, config.height);
        let mut frame = SceneFrame::new();
        frame.push(
            Layer::rect(Rect::new(0.0, 0.0, 64.0, 64.0), Color::white(), 0.0)
                .with_transform(Transform::scale_about(0.0, 32.0, 32.0)),
        );
        draw_scene_frame(&mut buf, &frame, &config);
        assert_eq!(buf.get(32, 32), Color::black());
    }

    #[test]
    fn half_scale_shrinks_about_pivot() {
        let config = small_config();
        let mut buf = FrameBuffer::new_black(config.width, config.height);
        let mut frame = SceneFrame::new();
        frame.push(
            Layer::rect(Rect::new(16.0, 16.0, 32.0, 32.0), Color::white(), 0.0)
                .with_transform(Transform::scale_about(0.5, 32.0, 32.0)),
        );
        draw_scene_frame(&mut buf, &frame, &config);
        // Shrinks to 16x16 centered at the pivot.
        assert_eq!(buf.get(32, 32), Color::white());
        assert_eq!(buf.get(26, 26), Color::white());
        assert_eq!(buf.get(20, 20), Color::black());
    }

    #[test]
    fn text_marks_glyph_pixels() {
        let config = small_config();
        let mut buf = FrameBuffer::new_black(config.width, config.height);
        let mut frame = SceneFrame::new();
        // 'T' at size 7 has its full top row set.
        frame.push(Layer::text("T", 10.0, 10.0, 7.0, Color::white()));
        draw_scene_frame(&mut buf, &frame, &config);
        assert_eq!(buf.get(12, 10), Color::white());
        // Below the glyph stays untouched.
        assert_eq!(buf.get(12, 30), Color::black());
    }
}
