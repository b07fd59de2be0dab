//! Variant update builder.

use serde::Serialize;

/// Partial update for a variant row.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct VariantUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traffic_split: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_url: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sessions: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversions: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uplift_pct: Option<Option<f64>>,
}

impl VariantUpdate {
    /// Whether this update touches no columns.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.traffic_split.is_none()
            && self.target_url.is_none()
            && self.sessions.is_none()
            && self.conversions.is_none()
            && self.uplift_pct.is_none()
    }
}

pub struct VariantUpdateBuilder(VariantUpdate);

impl VariantUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(VariantUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn traffic_split(mut self, split: i64) -> Self {
        self.0.traffic_split = Some(split);
        self
    }

    #[must_use]
    pub fn target_url(mut self, url: Option<String>) -> Self {
        self.0.target_url = Some(url);
        self
    }

    #[must_use]
    pub fn sessions(mut self, sessions: i64) -> Self {
        self.0.sessions = Some(sessions);
        self
    }

    #[must_use]
    pub fn conversions(mut self, conversions: i64) -> Self {
        self.0.conversions = Some(conversions);
        self
    }

    #[must_use]
    pub fn uplift_pct(mut self, uplift: Option<f64>) -> Self {
        self.0.uplift_pct = Some(uplift);
        self
    }

    #[must_use]
    pub fn build(self) -> VariantUpdate {
        self.0
    }
}

impl Default for VariantUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
