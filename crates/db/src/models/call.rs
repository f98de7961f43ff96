use bson::DateTime;
use serde::{Deserialize, Serialize};

/// Per-call translation configuration, written by the signaling layer when
/// a call is set up and read once per participant to resolve languages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Call {
    /// Call identifier assigned by the signaling layer.
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name of the caller's language (e.g. "Hindi").
    pub input_language: String,
    /// Display name of the callee's language.
    pub output_language: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Call {
    pub const COLLECTION: &'static str = "calls";
}
