pub mod http;

pub use http::HttpTranslator;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Request sent to the translation endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct TranslateRequest {
    pub text: String,
    pub input_language_code: String,
    pub output_language_code: String,
}

/// Response returned by the translation endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TranslateResponse {
    pub translated_text: String,
}

/// Trait for pluggable translation backends.
#[async_trait]
pub trait Translator: Send + Sync + 'static {
    /// Translates one recognized utterance.
    async fn translate(&self, request: &TranslateRequest) -> anyhow::Result<TranslateResponse>;

    /// Human-readable backend name.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_to_wire_field_names() {
        let request = TranslateRequest {
            text: "hello".to_string(),
            input_language_code: "ml".to_string(),
            output_language_code: "kn".to_string(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "text": "hello",
                "input_language_code": "ml",
                "output_language_code": "kn",
            })
        );
    }

    #[test]
    fn response_deserializes_from_wire_field_name() {
        let response: TranslateResponse =
            serde_json::from_str(r#"{"translated_text":"ನಮಸ್ಕಾರ"}"#).unwrap();
        assert_eq!(response.translated_text, "ನಮಸ್ಕಾರ");
    }
}
