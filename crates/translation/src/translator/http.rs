use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::{TranslateRequest, TranslateResponse, Translator};
use crate::config::TranslationConfig;

/// Remote translation backend over HTTP.
///
/// One POST per utterance to `{base_url}/api/v1/translate`, authenticated
/// with the configured bearer credential. No retry: a failed request drops
/// the utterance.
pub struct HttpTranslator {
    base_url: String,
    secret_key: String,
    http: Client,
}

impl HttpTranslator {
    pub fn new(config: &TranslationConfig) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            secret_key: config.secret_key.clone(),
            http,
        })
    }
}

#[async_trait]
impl Translator for HttpTranslator {
    async fn translate(&self, request: &TranslateRequest) -> anyhow::Result<TranslateResponse> {
        let url = format!("{}/api/v1/translate", self.base_url);

        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.secret_key))
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "Translate request failed: {} - {}",
                response.status(),
                response.text().await.unwrap_or_default()
            ));
        }

        let body: TranslateResponse = response.json().await?;
        debug!(chars = body.translated_text.chars().count(), "Translation received");
        Ok(body)
    }

    fn name(&self) -> &str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_in_base_url_is_normalized() {
        let config = TranslationConfig {
            base_url: "https://translate.example.com/".to_string(),
            ..TranslationConfig::default()
        };
        let translator = HttpTranslator::new(&config).unwrap();
        assert_eq!(translator.base_url, "https://translate.example.com");
    }
}
