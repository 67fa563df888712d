//! Skyreel soundtrack capture pipeline.
//!
//! Connects to the Lyria realtime music model over WebSocket, streams PCM
//! chunks for a fixed wall-clock duration, and persists the result: WAV
//! container, MP3 transcode via ffmpeg, and graceful fallbacks when either
//! step fails. The pipeline runs once per invocation with no retry logic.

pub mod capture;
pub mod config;
pub mod error;
pub mod message;
pub mod persist;
pub mod session;
pub mod transcode;
pub mod wav;

pub use capture::{capture_soundtrack, run_capture, ChunkCollector};
pub use config::{CaptureConfig, GenerationConfig, WeightedPrompt};
pub use error::SoundtrackError;
pub use persist::{persist_chunks, PersistOutcome};
pub use session::{MusicSession, SessionHandler};
pub use transcode::Transcoder;
