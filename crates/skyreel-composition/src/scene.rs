//! Scene abstraction and fixed video configuration.

use crate::layer::Layer;

/// Fixed per-composition render parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoConfig {
    /// Frames per second.
    pub fps: u32,
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            fps: 30,
            width: 1920,
            height: 1080,
        }
    }
}

impl VideoConfig {
    pub fn center_x(&self) -> f64 {
        self.width as f64 / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.height as f64 / 2.0
    }
}

/// The layers a scene produced for one frame, bottom to top.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SceneFrame {
    pub layers: Vec<Layer>,
}

impl SceneFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, layer: Layer) {
        self.layers.push(layer);
    }
}

/// A self-contained, time-bounded segment of the composition.
///
/// `render` must be a pure function of its arguments: no interior
/// mutability, no I/O, no dependence on other scenes. The frame argument is
/// scene-local (0 at the scene's first frame) and may be evaluated in any
/// order.
pub trait Scene: Send + Sync + std::fmt::Debug {
    /// Stable identifier used in manifests and logs.
    fn name(&self) -> &'static str;

    /// Declared duration in frames.
    fn duration_in_frames(&self) -> u32;

    /// Evaluate the scene at a scene-local frame index.
    fn render(&self, frame: u32, config: &VideoConfig) -> SceneFrame;
}
