use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// One translated utterance in the displayed history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub text: String,
    /// True only for the newest entry; presentation emphasizes it.
    pub is_latest: bool,
}

/// Newest-first history of translated utterances.
///
/// Clones share the underlying list. `push_latest` demotes the previous
/// head under the same lock it inserts with, so rapid consecutive
/// completions never apply against a stale snapshot.
#[derive(Debug, Clone, Default)]
pub struct TranscriptLog {
    entries: Arc<Mutex<Vec<Transcript>>>,
}

impl TranscriptLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends a new latest entry and demotes every previous one.
    pub fn push_latest(&self, text: impl Into<String>) {
        let mut entries = self.entries.lock();
        for entry in entries.iter_mut() {
            entry.is_latest = false;
        }
        entries.insert(
            0,
            Transcript {
                text: text.into(),
                is_latest: true,
            },
        );
    }

    pub fn snapshot(&self) -> Vec<Transcript> {
        self.entries.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_latest_prepends_and_demotes() {
        let log = TranscriptLog::new();
        log.push_latest("one");
        log.push_latest("two");
        log.push_latest("three");

        let entries = log.snapshot();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].text, "three");
        assert!(entries[0].is_latest);
        assert!(entries[1..].iter().all(|t| !t.is_latest));
        assert_eq!(entries[2].text, "one");
    }

    #[test]
    fn clones_share_the_same_history() {
        let log = TranscriptLog::new();
        let shared = log.clone();
        shared.push_latest("hello");

        assert_eq!(log.len(), 1);
        assert_eq!(log.snapshot()[0].text, "hello");
    }

    #[test]
    fn empty_log_reports_empty() {
        let log = TranscriptLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
    }
}
