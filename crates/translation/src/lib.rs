pub mod config;
pub mod engine;
pub mod lang;
pub mod languages;
pub mod recognition;
pub mod transcript;
pub mod translator;

pub use config::TranslationConfig;
pub use engine::{TranscriptUpdate, TranslationEngine};
pub use lang::Language;
pub use languages::{CallDirectory, CallLanguageRecord, CallLanguages, CallRole};
pub use recognition::bridge::{BridgeState, RecognitionBridge};
pub use recognition::{
    AudioGraph, AudioRoute, AudioTrack, RecognitionEvent, RecognitionHandle, RecognizerSettings,
    RemoteStream, SpeechRecognizer,
};
pub use transcript::{Transcript, TranscriptLog};
pub use translator::{HttpTranslator, TranslateRequest, TranslateResponse, Translator};
