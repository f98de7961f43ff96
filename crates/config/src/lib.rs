use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Top-level application settings.
///
/// Loaded from `config/default.toml`, then `config/{RUN_MODE}.toml`,
/// then `LINGUACALL__`-prefixed environment variables
/// (e.g. `LINGUACALL__TRANSLATOR__SECRET_KEY`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub mongo: MongoSettings,
    #[serde(default)]
    pub translator: TranslatorSettings,
    #[serde(default)]
    pub recognition: RecognitionSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoSettings {
    pub url: String,
    pub database: String,
}

impl Default for MongoSettings {
    fn default() -> Self {
        Self {
            url: "mongodb://localhost:27017".to_string(),
            database: "linguacall".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslatorSettings {
    /// Base URL of the translation service (no trailing slash).
    pub base_url: String,
    /// Bearer credential sent on every translate request.
    pub secret_key: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TranslatorSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8600".to_string(),
            secret_key: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecognitionSettings {
    /// Language code used when a call's input language is not resolved yet.
    #[serde(default = "default_language")]
    pub default_language: String,
}

impl Default for RecognitionSettings {
    fn default() -> Self {
        Self {
            default_language: default_language(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_language() -> String {
    "en".to_string()
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(Environment::with_prefix("LINGUACALL").separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn defaults_are_sane() {
        let settings = Settings::default();
        assert_eq!(settings.mongo.database, "linguacall");
        assert_eq!(settings.translator.timeout_secs, 10);
        assert_eq!(settings.recognition.default_language, "en");
    }

    #[test]
    fn deserializes_from_toml() {
        let toml = r#"
            [mongo]
            url = "mongodb://db:27017"
            database = "calls_test"

            [translator]
            base_url = "https://translate.example.com"
            secret_key = "s3cret"

            [recognition]
            default_language = "hi"
        "#;

        let settings: Settings = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.mongo.database, "calls_test");
        assert_eq!(settings.translator.base_url, "https://translate.example.com");
        assert_eq!(settings.translator.secret_key, "s3cret");
        assert_eq!(settings.translator.timeout_secs, 10);
        assert_eq!(settings.recognition.default_language, "hi");
    }
}
