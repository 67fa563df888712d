//! Skyreel software rasterizer.
//!
//! Turns the pure layer lists produced by `skyreel-composition` into pixels:
//! per-layer affine transforms by inverse mapping, alpha compositing,
//! transition blending, and deterministic PNG/GIF encoding. Identical input
//! always produces byte-identical output.

pub mod buffer;
pub mod compose;
pub mod error;
pub mod font;
pub mod gif;
pub mod png;
pub mod raster;

pub use buffer::FrameBuffer;
pub use compose::Renderer;
pub use error::RenderError;
