//! The capture loop and the one-shot pipeline.
//!
//! Capture runs for a fixed wall-clock window: a single timer armed at the
//! deadline races the server stream, and whatever chunks arrived by the time
//! it fires are the take. The window is never cut short, even if the server
//! closes the stream early.

use std::time::Duration;

use tokio::time::Instant;

use crate::config::CaptureConfig;
use crate::error::{SoundtrackError, SoundtrackResult};
use crate::message::ServerMessage;
use crate::persist::{persist_chunks, PersistOutcome};
use crate::session::{MusicSession, SessionHandler};
use crate::transcode::Transcoder;

/// A source of server events. Implemented by [`MusicSession`]; tests drive
/// the loop with scripted sources.
pub trait EventSource {
    fn next_event(
        &mut self,
    ) -> impl std::future::Future<Output = Option<SoundtrackResult<ServerMessage>>>;
}

impl EventSource for MusicSession {
    async fn next_event(&mut self) -> Option<SoundtrackResult<ServerMessage>> {
        MusicSession::next_event(self).await
    }
}

/// Accumulates decoded PCM chunks in arrival order.
pub struct ChunkCollector {
    chunks: Vec<Vec<u8>>,
    started: std::time::Instant,
    error: Option<SoundtrackError>,
}

impl ChunkCollector {
    pub fn new() -> Self {
        Self {
            chunks: Vec::new(),
            started: std::time::Instant::now(),
            error: None,
        }
    }

    /// The chunks received so far, in arrival order.
    pub fn chunks(&self) -> &[Vec<u8>] {
        &self.chunks
    }

    /// A decode error recorded mid-stream, if any.
    pub fn take_error(&mut self) -> Option<SoundtrackError> {
        self.error.take()
    }
}

impl Default for ChunkCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionHandler for ChunkCollector {
    fn on_message(&mut self, message: &ServerMessage) {
        if self.error.is_some() {
            return;
        }
        match message.decoded_chunks() {
            Ok(decoded) => {
                let elapsed = self.started.elapsed().as_secs_f64();
                for data in decoded {
                    eprintln!("{elapsed:5.1}s  received chunk: {} bytes", data.len());
                    self.chunks.push(data);
                }
            }
            Err(err) => {
                eprintln!("failed to decode audio chunk: {err}");
                self.error = Some(err);
            }
        }
    }

    fn on_error(&mut self, error: &SoundtrackError) {
        eprintln!("session error: {error}");
    }

    fn on_close(&mut self) {
        eprintln!("music generation stream closed");
    }
}

/// Drive `source` into `handler` until `deadline`.
///
/// The deadline is a single awaited timer, not a poll loop. Transport errors
/// abort immediately; a closed stream just leaves the timer running so the
/// window keeps its full length.
pub async fn run_capture<S, H>(
    source: &mut S,
    handler: &mut H,
    deadline: Instant,
) -> SoundtrackResult<()>
where
    S: EventSource,
    H: SessionHandler,
{
    let timer = tokio::time::sleep_until(deadline);
    tokio::pin!(timer);
    let mut closed = false;

    loop {
        if closed {
            timer.as_mut().await;
            return Ok(());
        }
        tokio::select! {
            _ = timer.as_mut() => return Ok(()),
            event = source.next_event() => match event {
                Some(Ok(message)) => handler.on_message(&message),
                Some(Err(err)) => {
                    handler.on_error(&err);
                    return Err(err);
                }
                None => {
                    handler.on_close();
                    closed = true;
                }
            },
        }
    }
}

/// Run the whole pipeline once: connect, steer, capture, persist.
///
/// The capture window is anchored at the call, so connection and settle time
/// count against it, matching a fixed total wall-clock budget. A failing
/// `stop` aborts the run; a failing `close` is only logged.
pub async fn capture_soundtrack(config: &CaptureConfig) -> SoundtrackResult<PersistOutcome> {
    let deadline = Instant::now() + config.capture_duration;

    eprintln!("connecting to the music service...");
    let mut session = MusicSession::connect(&config.api_key).await?;
    tokio::time::sleep(config.settle_delay).await;

    eprintln!("setting prompts and generation parameters...");
    session.set_weighted_prompts(config.prompts.clone()).await?;
    session.set_generation_config(&config.generation).await?;
    session.play().await?;

    let mut collector = ChunkCollector::new();
    run_capture(&mut session, &mut collector, deadline).await?;

    eprintln!("stopping generation...");
    session.stop().await?;
    if let Err(err) = session.close().await {
        eprintln!("warning: error closing session: {err}");
    }

    if let Some(err) = collector.take_error() {
        return Err(err);
    }

    let transcoder = Transcoder::from_env();
    persist_chunks(collector.chunks(), &config.output_dir, &transcoder)
}

/// Convenience wrapper for callers that think in durations, not deadlines.
pub async fn run_capture_for<S, H>(
    source: &mut S,
    handler: &mut H,
    window: Duration,
) -> SoundtrackResult<()>
where
    S: EventSource,
    H: SessionHandler,
{
    run_capture(source, handler, Instant::now() + window).await
}

#[cfg(test)]
mod tests {
    use base64::Engine;
    use pretty_assertions::assert_eq;

    use super::*;

    /// Yields scripted events, then pends forever.
    struct Scripted {
        events: Vec<Option<SoundtrackResult<ServerMessage>>>,
    }

    impl Scripted {
        fn new(mut events: Vec<Option<SoundtrackResult<ServerMessage>>>) -> Self {
            events.reverse();
            Self { events }
        }
    }

    impl EventSource for Scripted {
        async fn next_event(&mut self) -> Option<SoundtrackResult<ServerMessage>> {
            match self.events.pop() {
                Some(event) => event,
                None => std::future::pending().await,
            }
        }
    }

    fn chunk_message(payload: &[u8]) -> ServerMessage {
        let data = base64::engine::general_purpose::STANDARD.encode(payload);
        serde_json::from_str(&format!(
            r#"{{"serverContent":{{"audioChunks":[{{"data":"{data}"}}]}}}}"#
        ))
        .unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn wait_resolves_at_the_window_never_before_or_after() {
        let mut source = Scripted::new(vec![]);
        let mut collector = ChunkCollector::new();
        let window = Duration::from_secs(24);
        let start = Instant::now();

        run_capture_for(&mut source, &mut collector, window)
            .await
            .unwrap();

        // Never early, and not noticeably past the deadline either.
        let elapsed = Instant::now() - start;
        assert!(elapsed >= window);
        assert!(
            elapsed <= window + Duration::from_millis(10),
            "resolved late: {elapsed:?}"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn early_close_still_waits_the_full_window() {
        // Stream ends immediately; the window must still run its course.
        let mut source = Scripted::new(vec![None]);
        let mut collector = ChunkCollector::new();
        let window = Duration::from_secs(5);
        let start = Instant::now();

        run_capture_for(&mut source, &mut collector, window)
            .await
            .unwrap();

        let elapsed = Instant::now() - start;
        assert!(elapsed >= window);
        assert!(
            elapsed <= window + Duration::from_millis(10),
            "resolved late: {elapsed:?}"
        );
        assert!(collector.chunks().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn chunks_accumulate_in_arrival_order() {
        let mut source = Scripted::new(vec![
            Some(Ok(chunk_message(&[1, 1]))),
            Some(Ok(chunk_message(&[2]))),
            Some(Ok(chunk_message(&[3, 3, 3]))),
        ]);
        let mut collector = ChunkCollector::new();

        run_capture_for(&mut source, &mut collector, Duration::from_secs(1))
            .await
            .unwrap();

        assert_eq!(
            collector.chunks(),
            &[vec![1, 1], vec![2], vec![3, 3, 3]]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn transport_error_aborts_immediately() {
        let err = SoundtrackError::Transport(tokio_tungstenite::tungstenite::Error::ConnectionClosed);
        let mut source = Scripted::new(vec![Some(Err(err))]);
        let mut collector = ChunkCollector::new();
        let start = Instant::now();

        let result =
            run_capture_for(&mut source, &mut collector, Duration::from_secs(60)).await;

        assert!(matches!(result, Err(SoundtrackError::Transport(_))));
        // Aborted well before the window elapsed.
        assert!(Instant::now() - start < Duration::from_secs(60));
    }

    #[tokio::test(start_paused = true)]
    async fn decode_error_is_recorded() {
        let bad: ServerMessage =
            serde_json::from_str(r#"{"serverContent":{"audioChunks":[{"data":"%%%"}]}}"#).unwrap();
        let mut source = Scripted::new(vec![Some(Ok(bad))]);
        let mut collector = ChunkCollector::new();

        run_capture_for(&mut source, &mut collector, Duration::from_secs(1))
            .await
            .unwrap();

        assert!(matches!(
            collector.take_error(),
            Some(SoundtrackError::ChunkDecode(_))
        ));
    }
}
