//! Render error types.

use thiserror::Error;

/// Errors from rasterization and encoding.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Frame index at or beyond the composition duration.
    #[error("frame {frame} is out of range (composition has {duration} frames)")]
    FrameOutOfRange { frame: u32, duration: u32 },

    /// Filesystem error while writing output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// GIF encoding error.
    #[error("GIF encoding error: {0}")]
    GifEncoding(#[from] gif::EncodingError),
}

impl RenderError {
    /// Stable error code for diagnostics.
    pub fn code(&self) -> &'static str {
        match self {
            RenderError::FrameOutOfRange { .. } => "RENDER_001",
            RenderError::Io(_) => "RENDER_002",
            RenderError::PngEncoding(_) => "RENDER_003",
            RenderError::GifEncoding(_) => "RENDER_004",
        }
    }
}
