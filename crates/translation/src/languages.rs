use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::lang::Language;

/// Which side of the call this participant is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallRole {
    Caller,
    Callee,
}

/// Language fields of a call document, as stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallLanguageRecord {
    pub input_language: String,
    pub output_language: String,
}

/// Read-side port onto the call document store.
#[async_trait]
pub trait CallDirectory: Send + Sync + 'static {
    /// Fetches the language record for a call. `Ok(None)` means no such
    /// call document exists (distinct from a store failure).
    async fn fetch(&self, call_id: &str) -> anyhow::Result<Option<CallLanguageRecord>>;
}

/// The stored language pair oriented for one participant, with resolved
/// codes where the names are known.
///
/// Replaced wholesale whenever (call id, role) changes; never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallLanguages {
    /// Display name of the language this participant speaks.
    pub input_name: String,
    /// Display name of the language this participant reads.
    pub output_name: String,
    pub input: Option<Language>,
    pub output: Option<Language>,
}

impl CallLanguages {
    /// Orients the stored pair for `role` and resolves both names.
    ///
    /// The caller speaks the stored input language; the callee sees the
    /// pair swapped.
    pub fn select(record: &CallLanguageRecord, role: CallRole) -> Self {
        let (input_name, output_name) = match role {
            CallRole::Caller => (
                record.input_language.clone(),
                record.output_language.clone(),
            ),
            CallRole::Callee => (
                record.output_language.clone(),
                record.input_language.clone(),
            ),
        };

        let input = Language::resolve(&input_name);
        let output = Language::resolve(&output_name);

        Self {
            input_name,
            output_name,
            input,
            output,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(input: &str, output: &str) -> CallLanguageRecord {
        CallLanguageRecord {
            input_language: input.to_string(),
            output_language: output.to_string(),
        }
    }

    #[test]
    fn caller_sees_pair_as_stored() {
        let languages = CallLanguages::select(&record("Hindi", "English"), CallRole::Caller);
        assert_eq!(languages.input_name, "Hindi");
        assert_eq!(languages.output_name, "English");
        assert_eq!(languages.input, Some(Language::Hindi));
        assert_eq!(languages.output, Some(Language::English));
    }

    #[test]
    fn callee_sees_pair_swapped() {
        let languages = CallLanguages::select(&record("Hindi", "English"), CallRole::Callee);
        assert_eq!(languages.input_name, "English");
        assert_eq!(languages.output_name, "Hindi");
        assert_eq!(languages.input, Some(Language::English));
        assert_eq!(languages.output, Some(Language::Hindi));
    }

    #[test]
    fn unknown_names_keep_display_text_without_codes() {
        let languages = CallLanguages::select(&record("Klingon", "English"), CallRole::Caller);
        assert_eq!(languages.input_name, "Klingon");
        assert_eq!(languages.input, None);
        assert_eq!(languages.output, Some(Language::English));
    }
}
