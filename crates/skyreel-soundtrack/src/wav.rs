//! WAV container writer.
//!
//! Writes 16-bit PCM WAV files with no timestamps or variable metadata, so
//! the same PCM bytes always produce the same file.

use std::io::{self, Write};
use std::path::Path;

use crate::error::{SoundtrackError, SoundtrackResult};

/// WAV file format parameters.
#[derive(Debug, Clone, Copy)]
pub struct WavFormat {
    /// Number of channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (always 16 for this implementation).
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Creates a stereo WAV format.
    pub fn stereo(sample_rate: u32) -> Self {
        Self {
            channels: 2,
            sample_rate,
            bits_per_sample: 16,
        }
    }

    /// The format the music service streams: 2 channels at 48 kHz.
    pub fn soundtrack() -> Self {
        Self::stereo(48_000)
    }

    fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }
}

/// Writes a complete WAV file to a writer.
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let data_size = pcm_data.len() as u32;
    let file_size = 36 + data_size; // Total file size minus 8 bytes for RIFF header

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // Chunk size (16 for PCM)
    writer.write_all(&1u16.to_le_bytes())?; // Audio format (1 = PCM)
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Writes a WAV file to disk.
pub fn write_wav_file(path: &Path, format: &WavFormat, pcm_data: &[u8]) -> SoundtrackResult<()> {
    let file = std::fs::File::create(path).map_err(|e| SoundtrackError::io(path, e))?;
    let mut writer = io::BufWriter::new(file);
    write_wav(&mut writer, format, pcm_data).map_err(|e| SoundtrackError::io(path, e))?;
    writer.flush().map_err(|e| SoundtrackError::io(path, e))
}
