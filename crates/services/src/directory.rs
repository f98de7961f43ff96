use async_trait::async_trait;
use mongodb::Database;
use tracing::debug;

use linguacall_translation::{CallDirectory, CallLanguageRecord};

use crate::dao::base::DaoError;
use crate::dao::call::CallDao;

/// MongoDB-backed implementation of the engine's call-directory port.
pub struct MongoCallDirectory {
    calls: CallDao,
}

impl MongoCallDirectory {
    pub fn new(db: &Database) -> Self {
        Self {
            calls: CallDao::new(db),
        }
    }
}

#[async_trait]
impl CallDirectory for MongoCallDirectory {
    async fn fetch(&self, call_id: &str) -> anyhow::Result<Option<CallLanguageRecord>> {
        match self.calls.find_by_id(call_id).await {
            Ok(call) => Ok(Some(CallLanguageRecord {
                input_language: call.input_language,
                output_language: call.output_language,
            })),
            Err(DaoError::NotFound) => {
                debug!(%call_id, "No call document");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}
