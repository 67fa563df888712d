//! Live music session over WebSocket.

use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use serde::Serialize;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use crate::config::{GenerationConfig, WeightedPrompt, MUSIC_MODEL};
use crate::error::{SoundtrackError, SoundtrackResult};
use crate::message::{
    ConfigMessage, PlaybackControl, PlaybackMessage, PromptsMessage, ServerMessage, SetupMessage,
};

const ENDPOINT: &str = "wss://generativelanguage.googleapis.com/ws/google.ai.generativelanguage.v1alpha.GenerativeService.BidiGenerateMusic";

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Callbacks invoked while the capture loop drives a session.
pub trait SessionHandler {
    /// A server message arrived.
    fn on_message(&mut self, message: &ServerMessage);

    /// The session hit a fatal error; the capture aborts after this call.
    fn on_error(&mut self, error: &SoundtrackError);

    /// The server closed the stream.
    fn on_close(&mut self);
}

/// An established session with the realtime music model.
pub struct MusicSession {
    write: SplitSink<WsStream, Message>,
    read: SplitStream<WsStream>,
}

impl MusicSession {
    /// Connect and announce the model. The key travels in the URL query.
    pub async fn connect(api_key: &str) -> SoundtrackResult<Self> {
        let url = format!("{ENDPOINT}?key={api_key}");
        let (stream, _response) = connect_async(&url)
            .await
            .map_err(SoundtrackError::Connect)?;
        let (write, read) = stream.split();

        let mut session = Self { write, read };
        session.send(&SetupMessage::new(MUSIC_MODEL)).await?;
        Ok(session)
    }

    /// Replace the weighted steering prompts.
    pub async fn set_weighted_prompts(
        &mut self,
        prompts: Vec<WeightedPrompt>,
    ) -> SoundtrackResult<()> {
        self.send(&PromptsMessage::new(prompts)).await
    }

    /// Replace the generation parameters.
    pub async fn set_generation_config(
        &mut self,
        config: &GenerationConfig,
    ) -> SoundtrackResult<()> {
        self.send(&ConfigMessage {
            music_generation_config: config.clone(),
        })
        .await
    }

    /// Start playback.
    pub async fn play(&mut self) -> SoundtrackResult<()> {
        self.send(&PlaybackMessage {
            playback_control: PlaybackControl::Play,
        })
        .await
    }

    /// Stop playback.
    pub async fn stop(&mut self) -> SoundtrackResult<()> {
        self.send(&PlaybackMessage {
            playback_control: PlaybackControl::Stop,
        })
        .await
    }

    /// Close the WebSocket.
    pub async fn close(&mut self) -> SoundtrackResult<()> {
        self.write
            .send(Message::Close(None))
            .await
            .map_err(SoundtrackError::Transport)
    }

    /// Next server message, or `None` once the stream has closed.
    ///
    /// Non-text frames (pings, binary keepalives) are skipped. Text frames
    /// that fail to parse surface as [`SoundtrackError::Protocol`].
    pub async fn next_event(&mut self) -> Option<SoundtrackResult<ServerMessage>> {
        loop {
            match self.read.next().await? {
                Ok(Message::Text(text)) => {
                    return Some(
                        serde_json::from_str(&text).map_err(SoundtrackError::Protocol),
                    );
                }
                Ok(Message::Close(_)) => return None,
                Ok(_) => continue,
                Err(err) => return Some(Err(SoundtrackError::Transport(err))),
            }
        }
    }

    async fn send<T: Serialize>(&mut self, message: &T) -> SoundtrackResult<()> {
        let json = serde_json::to_string(message).map_err(SoundtrackError::Protocol)?;
        self.write
            .send(Message::Text(json))
            .await
            .map_err(SoundtrackError::Transport)
    }
}
