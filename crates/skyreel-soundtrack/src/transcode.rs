//! ffmpeg/ffprobe subprocess orchestration.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use crate::error::{SoundtrackError, SoundtrackResult};

/// Default timeout for a transcode run.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Environment variable overriding the ffmpeg binary path.
pub const FFMPEG_ENV: &str = "SKYREEL_FFMPEG";
/// Environment variable overriding the ffprobe binary path.
pub const FFPROBE_ENV: &str = "SKYREEL_FFPROBE";

/// Locates and runs ffmpeg/ffprobe.
#[derive(Debug, Clone)]
pub struct Transcoder {
    ffmpeg_path: Option<PathBuf>,
    ffprobe_path: Option<PathBuf>,
    timeout: Duration,
}

impl Transcoder {
    /// Explicit binary paths; nothing is looked up.
    pub fn with_paths(ffmpeg: impl Into<PathBuf>, ffprobe: impl Into<PathBuf>) -> Self {
        Self {
            ffmpeg_path: Some(ffmpeg.into()),
            ffprobe_path: Some(ffprobe.into()),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Reads the `SKYREEL_FFMPEG`/`SKYREEL_FFPROBE` overrides; unset
    /// variables fall back to a PATH lookup at call time.
    pub fn from_env() -> Self {
        Self {
            ffmpeg_path: std::env::var_os(FFMPEG_ENV).map(PathBuf::from),
            ffprobe_path: std::env::var_os(FFPROBE_ENV).map(PathBuf::from),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Sets the subprocess timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn find_ffmpeg(&self) -> SoundtrackResult<PathBuf> {
        resolve_tool(self.ffmpeg_path.as_deref(), "ffmpeg", FFMPEG_ENV)
    }

    fn find_ffprobe(&self) -> SoundtrackResult<PathBuf> {
        resolve_tool(self.ffprobe_path.as_deref(), "ffprobe", FFPROBE_ENV)
    }

    /// Whether ffmpeg can be resolved at all.
    pub fn ffmpeg_available(&self) -> bool {
        self.find_ffmpeg().is_ok()
    }

    /// Whether ffprobe can be resolved at all.
    pub fn ffprobe_available(&self) -> bool {
        self.find_ffprobe().is_ok()
    }

    /// Transcode a WAV file to a 192 kbps MP3.
    pub fn to_mp3(&self, wav: &Path, mp3: &Path) -> SoundtrackResult<()> {
        let ffmpeg = self.find_ffmpeg()?;

        let mut cmd = Command::new(&ffmpeg);
        cmd.arg("-i")
            .arg(wav)
            .arg("-acodec")
            .arg("libmp3lame")
            .arg("-b:a")
            .arg("192k")
            .arg(mp3)
            .arg("-y")
            .stdout(Stdio::null())
            .stderr(Stdio::piped());

        let child = cmd.spawn().map_err(|e| SoundtrackError::SpawnFailed {
            tool: "ffmpeg",
            source: e,
        })?;
        let (status, stderr) = wait_with_timeout(child, "ffmpeg", self.timeout)?;

        if !status.success() {
            return Err(SoundtrackError::SubprocessFailed {
                tool: "ffmpeg",
                exit_code: status.code().unwrap_or(-1),
                stderr,
            });
        }
        Ok(())
    }

    /// Duration of an audio file in seconds, via ffprobe.
    pub fn probe_duration(&self, path: &Path) -> SoundtrackResult<f64> {
        let ffprobe = self.find_ffprobe()?;

        let output = Command::new(&ffprobe)
            .arg("-v")
            .arg("error")
            .arg("-show_entries")
            .arg("format=duration")
            .arg("-of")
            .arg("default=noprint_wrappers=1:nokey=1")
            .arg(path)
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| SoundtrackError::SpawnFailed {
                tool: "ffprobe",
                source: e,
            })?;

        if !output.status.success() {
            return Err(SoundtrackError::SubprocessFailed {
                tool: "ffprobe",
                exit_code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let trimmed = stdout.trim();
        trimmed.parse().map_err(|_| SoundtrackError::ProbeParse {
            output: trimmed.to_string(),
        })
    }
}

/// The manual transcode command printed when automation fails.
pub fn manual_mp3_command(wav: &Path, mp3: &Path) -> String {
    format!(
        "ffmpeg -i \"{}\" -acodec libmp3lame -b:a 192k \"{}\"",
        wav.display(),
        mp3.display()
    )
}

/// The manual command for a raw PCM dump (no WAV header to describe it).
pub fn manual_pcm_command(pcm: &Path, mp3: &Path) -> String {
    format!(
        "ffmpeg -f s16le -ar 48000 -ac 2 -i \"{}\" -acodec libmp3lame -b:a 192k \"{}\"",
        pcm.display(),
        mp3.display()
    )
}

fn resolve_tool(
    configured: Option<&Path>,
    tool: &'static str,
    env_override: &'static str,
) -> SoundtrackResult<PathBuf> {
    if let Some(path) = configured {
        return Ok(path.to_path_buf());
    }
    which::which(tool).map_err(|_| SoundtrackError::ToolNotFound { tool, env_override })
}

fn wait_with_timeout(
    mut child: Child,
    tool: &'static str,
    timeout: Duration,
) -> SoundtrackResult<(ExitStatus, String)> {
    let start = Instant::now();

    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) => {
                if start.elapsed() > timeout {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(SoundtrackError::SubprocessTimeout {
                        tool,
                        timeout_secs: timeout.as_secs(),
                    });
                }
                std::thread::sleep(Duration::from_millis(100));
            }
            Err(e) => return Err(SoundtrackError::SpawnFailed { tool, source: e }),
        }
    };

    let mut stderr = String::new();
    if let Some(mut err) = child.stderr.take() {
        let _ = err.read_to_string(&mut stderr);
    }

    Ok((status, stderr))
}
