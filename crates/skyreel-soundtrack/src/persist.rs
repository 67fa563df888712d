//! Persistence of captured audio.
//!
//! Chunks are concatenated in arrival order, wrapped in a WAV container,
//! transcoded to MP3, and the WAV is deleted on success. Each step has a
//! fallback: WAV write failure dumps raw PCM, transcode failure keeps the
//! WAV, and both print the manual ffmpeg command. Zero chunks writes nothing
//! at all.

use std::path::{Path, PathBuf};

use crate::error::{SoundtrackError, SoundtrackResult};
use crate::transcode::{manual_mp3_command, manual_pcm_command, Transcoder};
use crate::wav::{write_wav_file, WavFormat};

/// Name of the intermediate WAV file.
pub const WAV_FILE: &str = "bluesky-soundtrack.wav";
/// Name of the raw PCM fallback dump.
pub const PCM_FILE: &str = "bluesky-soundtrack.pcm";
/// Name of the MP3 deliverable.
pub const MP3_FILE: &str = "soundtrack.mp3";

/// How a capture run ended up on disk.
#[derive(Debug)]
pub enum PersistOutcome {
    /// No audio arrived; nothing was written.
    NoAudio,
    /// The MP3 deliverable exists and the WAV was cleaned up.
    Transcoded {
        mp3: PathBuf,
        /// Duration reported by ffprobe, if the probe succeeded.
        duration_secs: Option<f64>,
    },
    /// Transcoding failed; the WAV was kept for a manual retry.
    WavKept { wav: PathBuf, mp3_command: String },
    /// The WAV write itself failed; raw PCM was dumped instead.
    RawDump { pcm: PathBuf, mp3_command: String },
}

/// Persist the captured chunks into `output_dir`.
///
/// Only I/O failures that leave nothing usable on disk surface as errors;
/// every partial-success path is reported through [`PersistOutcome`].
pub fn persist_chunks(
    chunks: &[Vec<u8>],
    output_dir: &Path,
    transcoder: &Transcoder,
) -> SoundtrackResult<PersistOutcome> {
    if chunks.is_empty() {
        eprintln!("no audio data received");
        eprintln!("this could mean:");
        eprintln!("  1. the API key does not have access to Lyria music generation");
        eprintln!("  2. the model is not available in your region");
        eprintln!("  3. there was a connection issue");
        return Ok(PersistOutcome::NoAudio);
    }

    let total: usize = chunks.iter().map(Vec::len).sum();
    eprintln!("total audio data: {total} bytes in {} chunks", chunks.len());

    std::fs::create_dir_all(output_dir).map_err(|e| SoundtrackError::io(output_dir, e))?;

    let mut pcm = Vec::with_capacity(total);
    for chunk in chunks {
        pcm.extend_from_slice(chunk);
    }

    let wav = output_dir.join(WAV_FILE);
    let mp3 = output_dir.join(MP3_FILE);

    if let Err(err) = write_wav_file(&wav, &WavFormat::soundtrack(), &pcm) {
        eprintln!("error writing WAV: {err}");
        let pcm_path = output_dir.join(PCM_FILE);
        std::fs::write(&pcm_path, &pcm).map_err(|e| SoundtrackError::io(&pcm_path, e))?;
        let mp3_command = manual_pcm_command(&pcm_path, &mp3);
        eprintln!("saved raw PCM to {}", pcm_path.display());
        eprintln!("convert manually with:\n  {mp3_command}");
        return Ok(PersistOutcome::RawDump {
            pcm: pcm_path,
            mp3_command,
        });
    }
    eprintln!("WAV saved to {}", wav.display());

    match transcoder.to_mp3(&wav, &mp3) {
        Ok(()) => {
            let duration_secs = match transcoder.probe_duration(&mp3) {
                Ok(secs) => {
                    eprintln!("final soundtrack duration: {secs:.1} seconds");
                    Some(secs)
                }
                Err(err) => {
                    eprintln!("warning: could not probe duration: {err}");
                    None
                }
            };
            if let Err(err) = std::fs::remove_file(&wav) {
                eprintln!("warning: could not remove intermediate WAV: {err}");
            }
            eprintln!("soundtrack ready at {}", mp3.display());
            Ok(PersistOutcome::Transcoded { mp3, duration_secs })
        }
        Err(err) => {
            let mp3_command = manual_mp3_command(&wav, &mp3);
            eprintln!("error converting to MP3: {err}");
            eprintln!("convert manually with:\n  {mp3_command}");
            Ok(PersistOutcome::WavKept { wav, mp3_command })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unusable_transcoder() -> Transcoder {
        Transcoder::with_paths("/nonexistent/ffmpeg", "/nonexistent/ffprobe")
    }

    #[test]
    fn zero_chunks_writes_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("music");

        let outcome = persist_chunks(&[], &out, &unusable_transcoder()).unwrap();

        assert!(matches!(outcome, PersistOutcome::NoAudio));
        // Not even the directory is created.
        assert!(!out.exists());
    }

    #[test]
    fn wav_payload_concatenates_chunks_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().to_path_buf();
        let chunks = vec![vec![1u8, 2], vec![3], vec![4, 5, 6]];

        // Transcode fails, so the WAV survives for inspection.
        let outcome = persist_chunks(&chunks, &out, &unusable_transcoder()).unwrap();
        let wav = match outcome {
            PersistOutcome::WavKept { wav, .. } => wav,
            other => panic!("unexpected outcome: {other:?}"),
        };

        let bytes = std::fs::read(&wav).unwrap();
        let total: usize = chunks.iter().map(Vec::len).sum();
        assert_eq!(bytes.len(), 44 + total);
        assert_eq!(&bytes[44..], &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn transcode_failure_keeps_wav_and_prints_command() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().to_path_buf();

        let outcome = persist_chunks(&[vec![0u8; 4]], &out, &unusable_transcoder()).unwrap();

        match outcome {
            PersistOutcome::WavKept { wav, mp3_command } => {
                assert!(wav.exists());
                assert!(mp3_command.contains("libmp3lame"));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn transcode_success_removes_wav() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("music");

        let fake_ffmpeg = dir.path().join("fake-ffmpeg");
        std::fs::write(&fake_ffmpeg, "#!/bin/sh\ntouch \"$7\"\n").unwrap();
        std::fs::set_permissions(&fake_ffmpeg, std::fs::Permissions::from_mode(0o755)).unwrap();

        let fake_ffprobe = dir.path().join("fake-ffprobe");
        std::fs::write(&fake_ffprobe, "#!/bin/sh\necho '24.0'\n").unwrap();
        std::fs::set_permissions(&fake_ffprobe, std::fs::Permissions::from_mode(0o755)).unwrap();

        let transcoder = Transcoder::with_paths(&fake_ffmpeg, &fake_ffprobe);
        let outcome = persist_chunks(&[vec![0u8; 4]], &out, &transcoder).unwrap();

        match outcome {
            PersistOutcome::Transcoded { mp3, duration_secs } => {
                assert!(mp3.exists());
                assert_eq!(duration_secs, Some(24.0));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert!(!out.join(WAV_FILE).exists(), "WAV should be cleaned up");
    }
}
