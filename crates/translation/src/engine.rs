use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use tokio::sync::{Mutex as AsyncMutex, broadcast, mpsc};
use tracing::{debug, error, info, warn};

use crate::config::TranslationConfig;
use crate::languages::{CallDirectory, CallLanguages, CallRole};
use crate::recognition::bridge::{BridgeState, RecognitionBridge};
use crate::recognition::{AudioGraph, RemoteStream, SpeechRecognizer};
use crate::transcript::{Transcript, TranscriptLog};
use crate::translator::{TranslateRequest, Translator};

/// Broadcast whenever a translated utterance lands in the history.
#[derive(Debug, Clone)]
pub struct TranscriptUpdate {
    pub text: String,
}

/// One participant's live translation view: call languages, the
/// recognition session, in-flight translation requests, and the
/// transcript history.
///
/// Created once per call participant, inside a Tokio runtime (the
/// utterance pump is spawned at construction). All capabilities are
/// injected so the engine can run against platform bindings or test
/// doubles alike.
pub struct TranslationEngine {
    directory: Arc<dyn CallDirectory>,
    bridge: AsyncMutex<RecognitionBridge>,
    languages: Arc<Mutex<Option<CallLanguages>>>,
    transcripts: TranscriptLog,
    /// Combined remote stream, kept for presentation surfaces only;
    /// recognition taps the dedicated audio stream.
    combined: Mutex<Option<RemoteStream>>,
    utterance_tx: mpsc::Sender<String>,
    update_tx: broadcast::Sender<TranscriptUpdate>,
    live: Arc<AtomicBool>,
}

impl TranslationEngine {
    pub fn new(
        config: TranslationConfig,
        directory: Arc<dyn CallDirectory>,
        graph: Arc<dyn AudioGraph>,
        recognizer: Arc<dyn SpeechRecognizer>,
        translator: Arc<dyn Translator>,
    ) -> Arc<Self> {
        let (utterance_tx, utterance_rx) = mpsc::channel(64);
        let (update_tx, _) = broadcast::channel(256);

        let bridge = RecognitionBridge::new(graph, recognizer, config.default_language.clone());
        let languages = Arc::new(Mutex::new(None));
        let transcripts = TranscriptLog::new();
        let live = Arc::new(AtomicBool::new(true));

        info!(backend = %translator.name(), "Translation engine created");

        tokio::spawn(Self::pump(
            utterance_rx,
            Arc::clone(&languages),
            translator,
            transcripts.clone(),
            update_tx.clone(),
            Arc::clone(&live),
        ));

        Arc::new(Self {
            directory,
            bridge: AsyncMutex::new(bridge),
            languages,
            transcripts,
            combined: Mutex::new(None),
            utterance_tx,
            update_tx,
            live,
        })
    }

    /// Loads the call's language configuration and orients it for `role`.
    ///
    /// A missing document or a store failure is logged and leaves the
    /// languages unset; the engine stays in its loading state, no retry.
    /// Re-invoked whenever (call id, role) changes.
    pub async fn load_call(&self, call_id: &str, role: CallRole) {
        match self.directory.fetch(call_id).await {
            Ok(Some(record)) => {
                let selected = CallLanguages::select(&record, role);
                info!(
                    %call_id,
                    input = %selected.input_name,
                    output = %selected.output_name,
                    "Call languages resolved"
                );
                *self.languages.lock() = Some(selected);
            }
            Ok(None) => {
                warn!(%call_id, "Call document does not exist");
            }
            Err(e) => {
                error!(%call_id, error = %e, "Error fetching call document");
            }
        }
    }

    /// Rebinds recognition to a new remote audio stream, or detaches when
    /// `None`. The previous session is always torn down first.
    pub async fn set_remote_audio(&self, stream: Option<RemoteStream>) -> anyhow::Result<()> {
        let language = {
            let guard = self.languages.lock();
            guard
                .as_ref()
                .and_then(|l| l.input)
                .map(|code| code.code().to_string())
        };

        let mut bridge = self.bridge.lock().await;
        bridge
            .attach(stream.as_ref(), language.as_deref(), self.utterance_tx.clone())
            .await
    }

    /// Accepts both remote stream handles as delivered by the call layer.
    ///
    /// Only the dedicated audio stream drives recognition; the combined
    /// stream is stored for presentation surfaces.
    pub async fn set_streams(
        &self,
        remote_audio: Option<RemoteStream>,
        remote_combined: Option<RemoteStream>,
    ) -> anyhow::Result<()> {
        *self.combined.lock() = remote_combined;
        self.set_remote_audio(remote_audio).await
    }

    /// Tears down the recognition session and stops applying any
    /// translations still in flight. Idempotent.
    pub async fn shutdown(&self) {
        self.live.store(false, Ordering::SeqCst);
        self.bridge.lock().await.detach();
        info!("Translation engine shut down");
    }

    pub fn languages(&self) -> Option<CallLanguages> {
        self.languages.lock().clone()
    }

    /// Display name of the language this participant speaks, once loaded.
    pub fn input_language_name(&self) -> Option<String> {
        self.languages.lock().as_ref().map(|l| l.input_name.clone())
    }

    /// Display name of the language this participant reads, once loaded.
    pub fn output_language_name(&self) -> Option<String> {
        self.languages.lock().as_ref().map(|l| l.output_name.clone())
    }

    pub fn transcripts(&self) -> Vec<Transcript> {
        self.transcripts.snapshot()
    }

    /// Returns a new receiver for transcript updates.
    pub fn subscribe(&self) -> broadcast::Receiver<TranscriptUpdate> {
        self.update_tx.subscribe()
    }

    pub fn combined_stream(&self) -> Option<RemoteStream> {
        self.combined.lock().clone()
    }

    pub async fn bridge_state(&self) -> BridgeState {
        self.bridge.lock().await.state()
    }

    /// Utterance pump: receives recognized text and spawns one translate
    /// task per utterance.
    ///
    /// Translations are not serialized against each other; results apply
    /// in completion order, which may differ from the order spoken. Runs
    /// until every sender (the engine plus any active relay) is gone.
    async fn pump(
        mut utterances: mpsc::Receiver<String>,
        languages: Arc<Mutex<Option<CallLanguages>>>,
        translator: Arc<dyn Translator>,
        transcripts: TranscriptLog,
        update_tx: broadcast::Sender<TranscriptUpdate>,
        live: Arc<AtomicBool>,
    ) {
        while let Some(text) = utterances.recv().await {
            let codes = {
                let guard = languages.lock();
                guard.as_ref().and_then(|l| l.input.zip(l.output))
            };
            let Some((input, output)) = codes else {
                warn!("Call languages not resolved yet, dropping utterance");
                continue;
            };

            let request = TranslateRequest {
                text,
                input_language_code: input.code().to_string(),
                output_language_code: output.code().to_string(),
            };

            let translator = Arc::clone(&translator);
            let transcripts = transcripts.clone();
            let update_tx = update_tx.clone();
            let live = Arc::clone(&live);
            tokio::spawn(async move {
                match translator.translate(&request).await {
                    Ok(response) => {
                        if !live.load(Ordering::SeqCst) {
                            debug!("Engine shut down, dropping late translation");
                            return;
                        }
                        transcripts.push_latest(response.translated_text.clone());
                        let _ = update_tx.send(TranscriptUpdate {
                            text: response.translated_text,
                        });
                    }
                    Err(e) => {
                        warn!(
                            backend = %translator.name(),
                            error = %e,
                            "Translation request failed, dropping utterance"
                        );
                    }
                }
            });
        }
        debug!("Utterance channel closed, translation pump exiting");
    }
}

impl Drop for TranslationEngine {
    fn drop(&mut self) {
        // Late translation completions must not outlive the engine's view.
        self.live.store(false, Ordering::SeqCst);
    }
}
