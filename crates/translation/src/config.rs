use linguacall_config::Settings;
use serde::{Deserialize, Serialize};

/// Configuration for the translation pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationConfig {
    /// Base URL of the translation service (no trailing slash).
    pub base_url: String,
    /// Bearer credential sent with every translate request.
    pub secret_key: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Recognition language code used while the call languages are still
    /// unresolved.
    pub default_language: String,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8600".to_string(),
            secret_key: String::new(),
            timeout_secs: 10,
            default_language: "en".to_string(),
        }
    }
}

impl From<&Settings> for TranslationConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            base_url: settings.translator.base_url.clone(),
            secret_key: settings.translator.secret_key.clone(),
            timeout_secs: settings.translator.timeout_secs,
            default_language: settings.recognition.default_language.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_application_settings() {
        let mut settings = Settings::default();
        settings.translator.base_url = "https://translate.example.com".to_string();
        settings.translator.secret_key = "s3cret".to_string();
        settings.recognition.default_language = "hi".to_string();

        let config = TranslationConfig::from(&settings);
        assert_eq!(config.base_url, "https://translate.example.com");
        assert_eq!(config.secret_key, "s3cret");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.default_language, "hi");
    }
}
