pub mod bridge;

use async_trait::async_trait;
use tokio::sync::mpsc;

/// Opaque handle to one audio track of a remote media stream.
///
/// Track ids are assigned by the media layer; this crate only hands them
/// to the audio-graph capability, it never touches samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioTrack {
    pub id: String,
}

impl AudioTrack {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// A remote media stream handle: an id plus the audio tracks it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteStream {
    pub id: String,
    pub audio_tracks: Vec<AudioTrack>,
}

impl RemoteStream {
    pub fn new(id: impl Into<String>, audio_tracks: Vec<AudioTrack>) -> Self {
        Self {
            id: id.into(),
            audio_tracks,
        }
    }

    pub fn has_audio(&self) -> bool {
        !self.audio_tracks.is_empty()
    }
}

/// Settings handed to the recognition facility when a session starts.
#[derive(Debug, Clone)]
pub struct RecognizerSettings {
    /// Two-letter code the facility should listen for.
    pub language: String,
    /// Keep listening across utterances instead of stopping after one.
    pub continuous: bool,
}

/// Events delivered by an active recognition session.
#[derive(Debug, Clone)]
pub enum RecognitionEvent {
    /// Transcript of the most recent utterance (not the accumulated buffer).
    Transcript(String),
    /// Platform error descriptor. Does not end the session.
    Error(String),
}

/// A running recognition facility. `stop` must be called exactly once on
/// every path out of the active session.
pub trait RecognitionHandle: Send + 'static {
    fn stop(&mut self);
}

/// Platform speech-recognition capability.
#[async_trait]
pub trait SpeechRecognizer: Send + Sync + 'static {
    /// Starts a recognition session, returning the stop handle and the
    /// event stream. The sender side is dropped when the facility shuts
    /// down on its own.
    async fn start(
        &self,
        settings: RecognizerSettings,
    ) -> anyhow::Result<(Box<dyn RecognitionHandle>, mpsc::Receiver<RecognitionEvent>)>;
}

/// An established single-channel route from a set of remote tracks into a
/// dedicated destination. `close` releases the processing context and must
/// be called exactly once, on every exit path.
pub trait AudioRoute: Send + 'static {
    fn close(&mut self);
}

/// Platform audio-graph capability.
pub trait AudioGraph: Send + Sync + 'static {
    /// Routes the given tracks into a fresh destination, establishing an
    /// isolated processing context.
    fn open_route(&self, tracks: &[AudioTrack]) -> anyhow::Result<Box<dyn AudioRoute>>;
}
