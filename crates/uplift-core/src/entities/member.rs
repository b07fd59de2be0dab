use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::MemberRole;

/// A person with access to a project.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Member {
    pub id: String,
    pub project_id: String,
    pub email: String,
    pub display_name: Option<String>,
    pub role: MemberRole,
    pub created_at: DateTime<Utc>,
}
