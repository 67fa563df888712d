//! Capture configuration.

use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;

/// Realtime music model the session talks to.
pub const MUSIC_MODEL: &str = "models/lyria-realtime-exp";

/// One steering prompt with its relative weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedPrompt {
    pub text: String,
    pub weight: f64,
}

impl WeightedPrompt {
    pub fn new(text: impl Into<String>, weight: f64) -> Self {
        Self {
            text: text.into(),
            weight,
        }
    }
}

/// Music generation parameters.
///
/// The `mute_*` and `only_bass_and_drums` keys are serialized in snake_case;
/// that is the wire format the service accepts for them, unlike the rest of
/// the protocol which is camelCase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationConfig {
    pub bpm: u32,
    pub temperature: f64,
    pub guidance: f64,
    pub density: f64,
    pub brightness: f64,
    pub scale: String,
    pub mute_bass: bool,
    pub mute_drums: bool,
    pub only_bass_and_drums: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            bpm: 120,
            temperature: 1.0,
            guidance: 4.0,
            density: 0.7,
            brightness: 0.8,
            scale: "C_MAJOR_A_MINOR".to_string(),
            mute_bass: false,
            mute_drums: false,
            only_bass_and_drums: false,
        }
    }
}

/// Everything one capture run needs, passed in explicitly.
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    /// API key for the music service.
    pub api_key: String,
    /// Directory the WAV/MP3 deliverables land in.
    pub output_dir: PathBuf,
    /// Steering prompts sent once before playback starts.
    pub prompts: Vec<WeightedPrompt>,
    /// Generation parameters sent once before playback starts.
    pub generation: GenerationConfig,
    /// Wall-clock capture window.
    pub capture_duration: Duration,
    /// Pause between connecting and configuring, letting the session settle.
    pub settle_delay: Duration,
}

impl CaptureConfig {
    /// The promo soundtrack: modern electronic, 24 seconds of capture into
    /// `public/music/`.
    pub fn promo(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            output_dir: PathBuf::from("public/music"),
            prompts: vec![
                WeightedPrompt::new("modern electronic", 1.0),
                WeightedPrompt::new("tech house", 0.8),
                WeightedPrompt::new("uplifting", 0.7),
                WeightedPrompt::new("bright synths", 0.6),
            ],
            generation: GenerationConfig::default(),
            capture_duration: Duration::from_millis(24_000),
            settle_delay: Duration::from_millis(1_000),
        }
    }
}
