//! Animated GIF export.

use std::path::Path;

use gif::{Encoder, Frame, Repeat};
use skyreel_composition::Timeline;

use crate::compose::Renderer;
use crate::error::RenderError;

/// GIF export settings.
#[derive(Debug, Clone, Copy)]
pub struct GifOptions {
    /// Encode every Nth composition frame.
    pub every: u32,
    /// Integer downscale factor applied to each frame.
    pub scale: u32,
}

impl Default for GifOptions {
    fn default() -> Self {
        // Every other frame at quarter resolution keeps the file workable.
        Self { every: 2, scale: 4 }
    }
}

/// Render the whole timeline into a looping GIF at `path`.
pub fn export_gif(
    renderer: &Renderer,
    timeline: &Timeline,
    path: &Path,
    options: GifOptions,
) -> Result<(), RenderError> {
    let every = options.every.max(1);
    let scale = options.scale.max(1);
    let out_w = (renderer.config().width / scale).max(1) as u16;
    let out_h = (renderer.config().height / scale).max(1) as u16;

    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);
    let mut encoder = Encoder::new(writer, out_w, out_h, &[])?;
    encoder.set_repeat(Repeat::Infinite)?;

    // Delay is in hundredths of a second per encoded frame.
    let delay = (every * 100 / renderer.config().fps).max(1) as u16;

    let mut frame_index = 0;
    while frame_index < timeline.duration_in_frames() {
        let buffer = renderer.render_frame(timeline, frame_index)?.downscale(scale);
        let mut rgba = buffer.to_rgba8();
        let mut frame = Frame::from_rgba_speed(out_w, out_h, &mut rgba, 10);
        frame.delay = delay;
        encoder.write_frame(&frame)?;
        frame_index += every;
    }

    Ok(())
}
