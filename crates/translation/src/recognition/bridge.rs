use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::{
    AudioGraph, AudioRoute, RecognitionEvent, RecognitionHandle, RecognizerSettings, RemoteStream,
    SpeechRecognizer,
};

/// Guard that aborts a spawned task when dropped.
///
/// `tokio::spawn` returns a `JoinHandle` whose `Drop` impl detaches (does
/// NOT abort) the task, so the relay must be aborted explicitly when the
/// session goes away.
struct AbortOnDrop(tokio::task::JoinHandle<()>);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Observable bridge state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeState {
    Idle,
    Active,
}

/// Resources of one active recognition session.
///
/// Dropping is the single teardown path: the relay task is aborted, then
/// the recognition facility stopped and the audio route closed, each
/// exactly once.
struct ActiveSession {
    stream_id: String,
    relay: Option<AbortOnDrop>,
    handle: Box<dyn RecognitionHandle>,
    route: Box<dyn AudioRoute>,
}

impl Drop for ActiveSession {
    fn drop(&mut self) {
        self.relay.take();
        self.handle.stop();
        self.route.close();
        debug!(stream = %self.stream_id, "Recognition session released");
    }
}

/// Binds a remote audio stream to the speech-recognition facility and
/// relays recognized utterances to the engine.
///
/// At most one session is active at a time; attaching a new stream (or
/// `None`) always tears the previous session down first.
pub struct RecognitionBridge {
    graph: Arc<dyn AudioGraph>,
    recognizer: Arc<dyn SpeechRecognizer>,
    default_language: String,
    active: Option<ActiveSession>,
}

impl RecognitionBridge {
    pub fn new(
        graph: Arc<dyn AudioGraph>,
        recognizer: Arc<dyn SpeechRecognizer>,
        default_language: impl Into<String>,
    ) -> Self {
        Self {
            graph,
            recognizer,
            default_language: default_language.into(),
            active: None,
        }
    }

    pub fn state(&self) -> BridgeState {
        if self.active.is_some() {
            BridgeState::Active
        } else {
            BridgeState::Idle
        }
    }

    /// Rebinds the bridge to `stream`, tearing down the current session
    /// first on every path.
    ///
    /// With no stream, or one without audio tracks, the bridge stays idle.
    /// `language` is the resolved input code; the configured default is
    /// used while the call languages are still unresolved. Recognized
    /// utterances are forwarded into `utterances`.
    pub async fn attach(
        &mut self,
        stream: Option<&RemoteStream>,
        language: Option<&str>,
        utterances: mpsc::Sender<String>,
    ) -> anyhow::Result<()> {
        self.detach();

        let Some(stream) = stream else {
            return Ok(());
        };
        if !stream.has_audio() {
            debug!(stream = %stream.id, "Stream has no audio tracks, staying idle");
            return Ok(());
        }

        let code = language.unwrap_or(&self.default_language);

        let mut route = self.graph.open_route(&stream.audio_tracks)?;

        let settings = RecognizerSettings {
            language: code.to_string(),
            continuous: true,
        };
        let (handle, mut events) = match self.recognizer.start(settings).await {
            Ok(session) => session,
            Err(e) => {
                // The processing context is already established; release it
                // before surfacing the failure.
                route.close();
                return Err(e);
            }
        };

        let relay_stream_id = stream.id.clone();
        let relay = tokio::spawn(async move {
            while let Some(event) = events.recv().await {
                match event {
                    RecognitionEvent::Transcript(text) => {
                        if utterances.send(text).await.is_err() {
                            debug!("Utterance channel closed, relay exiting");
                            return;
                        }
                    }
                    RecognitionEvent::Error(e) => {
                        warn!(stream = %relay_stream_id, error = %e, "Speech recognition error");
                    }
                }
            }
            debug!("Recognition event stream ended");
        });

        info!(stream = %stream.id, language = %code, "Recognition session started");
        self.active = Some(ActiveSession {
            stream_id: stream.id.clone(),
            relay: Some(AbortOnDrop(relay)),
            handle,
            route,
        });

        Ok(())
    }

    /// Tears down the active session, if any. Idempotent.
    pub fn detach(&mut self) {
        if let Some(session) = self.active.take() {
            info!(stream = %session.stream_id, "Tearing down recognition session");
            drop(session);
        }
    }
}
