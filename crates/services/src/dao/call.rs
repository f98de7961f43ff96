use bson::{DateTime, doc};
use linguacall_db::models::Call;
use mongodb::Database;

use super::base::{BaseDao, DaoResult};

pub struct CallDao {
    pub base: BaseDao<Call>,
}

impl CallDao {
    pub fn new(db: &Database) -> Self {
        Self {
            base: BaseDao::new(db, Call::COLLECTION),
        }
    }

    /// Creates the call document at call setup time.
    pub async fn create(
        &self,
        call_id: &str,
        input_language: String,
        output_language: String,
    ) -> DaoResult<Call> {
        let now = DateTime::now();
        let call = Call {
            id: call_id.to_string(),
            input_language,
            output_language,
            created_at: now,
            updated_at: now,
        };
        self.base.insert_one(&call).await?;
        Ok(call)
    }

    pub async fn find_by_id(&self, call_id: &str) -> DaoResult<Call> {
        self.base.find_by_id(call_id).await
    }

    /// Rewrites the language pair, e.g. when a participant changes
    /// languages in the call setup flow.
    pub async fn set_languages(
        &self,
        call_id: &str,
        input_language: &str,
        output_language: &str,
    ) -> DaoResult<bool> {
        self.base
            .update_one(
                doc! { "_id": call_id },
                doc! { "$set": {
                    "input_language": input_language,
                    "output_language": output_language,
                    "updated_at": DateTime::now(),
                } },
            )
            .await
    }
}
