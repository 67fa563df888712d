//! Deterministic PNG writer.
//!
//! Fixed compression and filter settings so the same frame always encodes to
//! the same bytes.

use std::io::Write;
use std::path::Path;

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};

use crate::buffer::FrameBuffer;
use crate::error::RenderError;

/// Write a frame buffer to a PNG file.
pub fn write_frame(buffer: &FrameBuffer, path: &Path) -> Result<(), RenderError> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);
    write_frame_to_writer(buffer, writer)
}

/// Write a frame buffer to any writer.
pub fn write_frame_to_writer<W: Write>(buffer: &FrameBuffer, writer: W) -> Result<(), RenderError> {
    let mut encoder = Encoder::new(writer, buffer.width, buffer.height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(Compression::Default);
    encoder.set_filter(FilterType::NoFilter);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&buffer.to_rgba8())?;
    Ok(())
}
