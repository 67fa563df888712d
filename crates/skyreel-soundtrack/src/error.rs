//! Error types for the soundtrack pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for soundtrack operations.
pub type SoundtrackResult<T> = Result<T, SoundtrackError>;

/// Errors that can occur while capturing and persisting the soundtrack.
#[derive(Debug, Error)]
pub enum SoundtrackError {
    /// No API key was provided.
    #[error("GOOGLE_API_KEY is not set. Export it or pass --api-key before generating")]
    MissingApiKey,

    /// WebSocket handshake with the music service failed.
    #[error("failed to connect to the music service: {0}")]
    Connect(#[source] tokio_tungstenite::tungstenite::Error),

    /// WebSocket transport error after the session was established.
    #[error("WebSocket transport error: {0}")]
    Transport(#[source] tokio_tungstenite::tungstenite::Error),

    /// A server message could not be parsed.
    #[error("failed to parse server message: {0}")]
    Protocol(#[source] serde_json::Error),

    /// An audio chunk was not valid base64.
    #[error("failed to decode audio chunk: {0}")]
    ChunkDecode(#[source] base64::DecodeError),

    /// IO error during persistence.
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An external tool is not installed.
    #[error("{tool} not found. Install it or set {env_override} to its path")]
    ToolNotFound {
        tool: &'static str,
        env_override: &'static str,
    },

    /// Failed to spawn an external tool.
    #[error("failed to spawn {tool}: {source}")]
    SpawnFailed {
        tool: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// An external tool exited with a non-zero status.
    #[error("{tool} exited with status {exit_code}: {stderr}")]
    SubprocessFailed {
        tool: &'static str,
        exit_code: i32,
        stderr: String,
    },

    /// An external tool did not finish in time.
    #[error("{tool} timed out after {timeout_secs} seconds")]
    SubprocessTimeout {
        tool: &'static str,
        timeout_secs: u64,
    },

    /// ffprobe produced output that is not a duration.
    #[error("could not parse duration from ffprobe output: {output:?}")]
    ProbeParse { output: String },
}

impl SoundtrackError {
    /// Stable error code for diagnostics.
    pub fn code(&self) -> &'static str {
        match self {
            SoundtrackError::MissingApiKey => "SND_001",
            SoundtrackError::Connect(_) => "SND_002",
            SoundtrackError::Transport(_) => "SND_003",
            SoundtrackError::Protocol(_) => "SND_004",
            SoundtrackError::ChunkDecode(_) => "SND_005",
            SoundtrackError::Io { .. } => "SND_006",
            SoundtrackError::ToolNotFound { .. } => "SND_007",
            SoundtrackError::SpawnFailed { .. } => "SND_008",
            SoundtrackError::SubprocessFailed { .. } => "SND_009",
            SoundtrackError::SubprocessTimeout { .. } => "SND_010",
            SoundtrackError::ProbeParse { .. } => "SND_011",
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
