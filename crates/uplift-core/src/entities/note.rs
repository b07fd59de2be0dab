use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A free-form note on an experiment — the only audit surface Uplift keeps.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Note {
    pub id: String,
    pub experiment_id: String,
    pub author: Option<String>,
    pub body: String,
    pub created_at: DateTime<Utc>,
}
