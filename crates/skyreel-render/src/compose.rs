//! Frame composition: scene evaluation plus transition blending.

use skyreel_composition::{
    Color, FrameSample, Presentation, Scene, Timeline, VideoConfig, WipeDirection,
};

use crate::buffer::FrameBuffer;
use crate::error::RenderError;
use crate::raster::draw_scene_frame;

/// Renders composition frames to pixel buffers.
pub struct Renderer {
    config: VideoConfig,
}

impl Renderer {
    pub fn new(config: VideoConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &VideoConfig {
        &self.config
    }

    /// Rasterize one global frame of the timeline.
    pub fn render_frame(&self, timeline: &Timeline, frame: u32) -> Result<FrameBuffer, RenderError> {
        let sample = timeline
            .sample(frame)
            .ok_or(RenderError::FrameOutOfRange {
                frame,
                duration: timeline.duration_in_frames(),
            })?;

        match sample {
            FrameSample::Single { scene, local_frame } => {
                Ok(self.render_scene(scene, local_frame))
            }
            FrameSample::Blend {
                outgoing,
                outgoing_frame,
                incoming,
                incoming_frame,
                transition,
                progress,
            } => {
                let mut base = self.render_scene(outgoing, outgoing_frame);
                let top = self.render_scene(incoming, incoming_frame);
                match transition.presentation {
                    Presentation::Fade => {
                        // Incoming composited over outgoing with alpha = progress.
                        for y in 0..base.height {
                            for x in 0..base.width {
                                base.blend(x, y, top.get(x, y).faded(progress));
                            }
                        }
                    }
                    Presentation::Wipe(direction) => {
                        for y in 0..base.height {
                            for x in 0..base.width {
                                if wipe_reveals(direction, progress, x, y, &self.config) {
                                    base.set(x, y, top.get(x, y));
                                }
                            }
                        }
                    }
                }
                Ok(base)
            }
        }
    }

    fn render_scene(&self, scene: &dyn Scene, local_frame: u32) -> FrameBuffer {
        let mut buffer = FrameBuffer::new(self.config.width, self.config.height, Color::black());
        let frame = scene.render(local_frame, &self.config);
        draw_scene_frame(&mut buffer, &frame, &self.config);
        buffer
    }
}

/// Whether a wipe at `progress` has revealed the incoming scene at a pixel.
fn wipe_reveals(
    direction: WipeDirection,
    progress: f64,
    x: u32,
    y: u32,
    config: &VideoConfig,
) -> bool {
    let w = config.width as f64;
    let h = config.height as f64;
    match direction {
        WipeDirection::FromLeft => (x as f64) < progress * w,
        WipeDirection::FromRight => (x as f64) >= (1.0 - progress) * w,
        WipeDirection::FromTop => (y as f64) < progress * h,
        WipeDirection::FromBottom => (y as f64) >= (1.0 - progress) * h,
    }
}
