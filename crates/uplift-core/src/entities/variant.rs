use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One arm of an experiment.
///
/// The control variant is the baseline the others are compared against.
/// Exactly-one-control per experiment is a convention, not a hard constraint;
/// the store only refuses to delete a control variant.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Variant {
    pub id: String,
    pub experiment_id: String,
    pub name: String,
    pub is_control: bool,
    /// Share of traffic routed to this variant, in percent.
    pub traffic_split: i64,
    pub target_url: Option<String>,
    pub sessions: i64,
    pub conversions: i64,
    pub uplift_pct: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Variant {
    /// Conversion rate, if any sessions were recorded.
    #[must_use]
    pub fn conversion_rate(&self) -> Option<f64> {
        if self.sessions == 0 {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        Some(self.conversions as f64 / self.sessions as f64)
    }
}
