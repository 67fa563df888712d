//! Wire messages of the realtime music protocol.
//!
//! Client messages are camelCase JSON except the snake_case keys inside
//! [`GenerationConfig`]. Server audio arrives base64-encoded, either directly
//! under `serverContent.audioChunks` or under the legacy
//! `serverContent.modelTurn.audioChunks`; both locations are honored, in
//! that order.

use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::config::{GenerationConfig, WeightedPrompt};
use crate::error::SoundtrackError;

/// First message of a session, naming the model.
#[derive(Debug, Serialize)]
pub struct SetupMessage {
    pub setup: Setup,
}

#[derive(Debug, Serialize)]
pub struct Setup {
    pub model: String,
}

impl SetupMessage {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            setup: Setup {
                model: model.into(),
            },
        }
    }
}

/// Sets the weighted steering prompts.
#[derive(Debug, Serialize)]
pub struct PromptsMessage {
    #[serde(rename = "clientContent")]
    pub client_content: ClientContent,
}

#[derive(Debug, Serialize)]
pub struct ClientContent {
    #[serde(rename = "weightedPrompts")]
    pub weighted_prompts: Vec<WeightedPrompt>,
}

impl PromptsMessage {
    pub fn new(prompts: Vec<WeightedPrompt>) -> Self {
        Self {
            client_content: ClientContent {
                weighted_prompts: prompts,
            },
        }
    }
}

/// Sets the music generation parameters.
#[derive(Debug, Serialize)]
pub struct ConfigMessage {
    #[serde(rename = "musicGenerationConfig")]
    pub music_generation_config: GenerationConfig,
}

/// Starts or stops playback.
#[derive(Debug, Serialize)]
pub struct PlaybackMessage {
    #[serde(rename = "playbackControl")]
    pub playback_control: PlaybackControl,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlaybackControl {
    Play,
    Stop,
}

/// One message from the server. Fields we do not consume are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerMessage {
    #[serde(rename = "serverContent")]
    pub server_content: Option<ServerContent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerContent {
    #[serde(rename = "audioChunks")]
    pub audio_chunks: Option<Vec<AudioChunk>>,
    #[serde(rename = "modelTurn")]
    pub model_turn: Option<ModelTurn>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelTurn {
    #[serde(rename = "audioChunks")]
    pub audio_chunks: Option<Vec<AudioChunk>>,
}

/// Base64-encoded PCM payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AudioChunk {
    pub data: Option<String>,
}

impl ServerMessage {
    /// Decode every audio chunk the message carries, in wire order:
    /// `serverContent.audioChunks` first, then the legacy
    /// `serverContent.modelTurn.audioChunks`. Chunks without data are
    /// skipped.
    pub fn decoded_chunks(&self) -> Result<Vec<Vec<u8>>, SoundtrackError> {
        let mut out = Vec::new();
        let Some(content) = &self.server_content else {
            return Ok(out);
        };

        let engine = base64::engine::general_purpose::STANDARD;
        let mut decode_into = |chunks: &[AudioChunk]| -> Result<(), SoundtrackError> {
            for chunk in chunks {
                if let Some(data) = &chunk.data {
                    out.push(engine.decode(data).map_err(SoundtrackError::ChunkDecode)?);
                }
            }
            Ok(())
        };

        if let Some(chunks) = &content.audio_chunks {
            decode_into(chunks)?;
        }
        if let Some(turn) = &content.model_turn {
            if let Some(chunks) = &turn.audio_chunks {
                decode_into(chunks)?;
            }
        }
        Ok(out)
    }
}
