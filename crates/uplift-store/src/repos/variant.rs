//! Variant repository — CRUD with control-first ordering.
//!
//! Deleting a control variant is rejected; the transition forms rely on
//! `list_variants` returning the control first.

use chrono::Utc;

use uplift_core::entities::Variant;
use uplift_core::ids::PREFIX_VARIANT;

use crate::error::StoreError;
use crate::helpers::{get_opt_f64, get_opt_string, parse_datetime};
use crate::service::StoreService;
use crate::updates::variant::VariantUpdate;

const VARIANT_COLS: &str = "id, experiment_id, name, is_control, traffic_split, target_url, \
     sessions, conversions, uplift_pct, created_at, updated_at";

fn row_to_variant(row: &libsql::Row) -> Result<Variant, StoreError> {
    Ok(Variant {
        id: row.get(0)?,
        experiment_id: row.get(1)?,
        name: row.get(2)?,
        is_control: row.get::<i64>(3)? != 0,
        traffic_split: row.get(4)?,
        target_url: get_opt_string(row, 5)?,
        sessions: row.get(6)?,
        conversions: row.get(7)?,
        uplift_pct: get_opt_f64(row, 8)?,
        created_at: parse_datetime(&row.get::<String>(9)?)?,
        updated_at: parse_datetime(&row.get::<String>(10)?)?,
    })
}

impl StoreService {
    /// Create a variant under an experiment.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the insert fails.
    pub async fn create_variant(
        &self,
        experiment_id: &str,
        name: &str,
        is_control: bool,
        traffic_split: i64,
        target_url: Option<&str>,
    ) -> Result<Variant, StoreError> {
        let id = self.db().generate_id(PREFIX_VARIANT).await?;
        let now = Utc::now();

        self.db()
            .conn()
            .execute(
                "INSERT INTO variants (id, experiment_id, name, is_control, traffic_split, \
                 target_url, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                libsql::params![
                    id.as_str(),
                    experiment_id,
                    name,
                    i64::from(is_control),
                    traffic_split,
                    target_url,
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        tracing::debug!(variant = %id, experiment = %experiment_id, "created variant");
        self.get_variant(&id).await
    }

    /// Fetch a single variant by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NoResult` if the id does not exist.
    pub async fn get_variant(&self, id: &str) -> Result<Variant, StoreError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {VARIANT_COLS} FROM variants WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(StoreError::NoResult)?;
        row_to_variant(&row)
    }

    /// List an experiment's variants, control first.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the query fails.
    pub async fn list_variants(&self, experiment_id: &str) -> Result<Vec<Variant>, StoreError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {VARIANT_COLS} FROM variants WHERE experiment_id = ?1 \
                     ORDER BY is_control DESC, created_at, id"
                ),
                [experiment_id],
            )
            .await?;

        let mut variants = Vec::new();
        while let Some(row) = rows.next().await? {
            variants.push(row_to_variant(&row)?);
        }
        Ok(variants)
    }

    /// Apply a partial update to one variant row and return the fresh row.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write fails or the id does not exist.
    pub async fn update_variant(
        &self,
        id: &str,
        update: VariantUpdate,
    ) -> Result<Variant, StoreError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(ref name) = update.name {
            sets.push(format!("name = ?{idx}"));
            params.push(name.clone().into());
            idx += 1;
        }
        if let Some(split) = update.traffic_split {
            sets.push(format!("traffic_split = ?{idx}"));
            params.push(split.into());
            idx += 1;
        }
        if let Some(ref target_url) = update.target_url {
            sets.push(format!("target_url = ?{idx}"));
            params.push(target_url.clone().map_or(libsql::Value::Null, Into::into));
            idx += 1;
        }
        if let Some(sessions) = update.sessions {
            sets.push(format!("sessions = ?{idx}"));
            params.push(sessions.into());
            idx += 1;
        }
        if let Some(conversions) = update.conversions {
            sets.push(format!("conversions = ?{idx}"));
            params.push(conversions.into());
            idx += 1;
        }
        if let Some(uplift) = update.uplift_pct {
            sets.push(format!("uplift_pct = ?{idx}"));
            params.push(uplift.map_or(libsql::Value::Null, Into::into));
            idx += 1;
        }

        if sets.is_empty() {
            return self.get_variant(id).await;
        }

        sets.push(format!("updated_at = ?{idx}"));
        params.push(Utc::now().to_rfc3339().into());
        idx += 1;

        let sql = format!("UPDATE variants SET {} WHERE id = ?{idx}", sets.join(", "));
        params.push(id.into());

        self.db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;

        tracing::debug!(variant = %id, "updated variant");
        self.get_variant(id).await
    }

    /// Delete a variant. Control variants cannot be deleted.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ControlVariant` for control variants, or another
    /// `StoreError` if the delete fails.
    pub async fn delete_variant(&self, id: &str) -> Result<(), StoreError> {
        let variant = self.get_variant(id).await?;
        if variant.is_control {
            return Err(StoreError::ControlVariant(id.to_string()));
        }

        self.db()
            .conn()
            .execute("DELETE FROM variants WHERE id = ?1", [id])
            .await?;
        tracing::debug!(variant = %id, "deleted variant");
        Ok(())
    }
}
