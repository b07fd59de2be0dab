//! Experiment repository — CRUD, board listing, and the transition writes.
//!
//! Experiments are the center of the system: the kanban board lists them per
//! project (Archived excluded), and every stage transition lands here as a
//! single `update_experiment` call built from an [`ExperimentUpdate`].

use chrono::{NaiveDate, Utc};

use uplift_core::entities::Experiment;
use uplift_core::enums::ExperimentCategory;
use uplift_core::ids::PREFIX_EXPERIMENT;

use crate::error::StoreError;
use crate::helpers::{
    get_opt_i64, get_opt_string, parse_datetime, parse_enum, parse_optional_date,
    parse_optional_enum,
};
use crate::service::StoreService;
use crate::updates::experiment::ExperimentUpdate;

const EXPERIMENT_COLS: &str = "id, project_id, name, test_number, category, status, primary_kpi, \
     hypothesis, page_url, planned_start_date, planned_end_date, actual_start_date, \
     actual_end_date, outcome, winner_variant_id, pie_potential, pie_importance, pie_ease, \
     created_at, updated_at";

fn row_to_experiment(row: &libsql::Row) -> Result<Experiment, StoreError> {
    Ok(Experiment {
        id: row.get(0)?,
        project_id: row.get(1)?,
        name: row.get(2)?,
        test_number: row.get(3)?,
        category: parse_enum(&row.get::<String>(4)?)?,
        // NULL status reads as Backlog.
        status: parse_optional_enum(get_opt_string(row, 5)?.as_deref())?.unwrap_or_default(),
        primary_kpi: get_opt_string(row, 6)?,
        hypothesis: get_opt_string(row, 7)?,
        page_url: get_opt_string(row, 8)?,
        planned_start_date: parse_optional_date(get_opt_string(row, 9)?.as_deref())?,
        planned_end_date: parse_optional_date(get_opt_string(row, 10)?.as_deref())?,
        actual_start_date: parse_optional_date(get_opt_string(row, 11)?.as_deref())?,
        actual_end_date: parse_optional_date(get_opt_string(row, 12)?.as_deref())?,
        outcome: parse_optional_enum(get_opt_string(row, 13)?.as_deref())?,
        winner_variant_id: get_opt_string(row, 14)?,
        pie_potential: get_opt_i64(row, 15)?,
        pie_importance: get_opt_i64(row, 16)?,
        pie_ease: get_opt_i64(row, 17)?,
        created_at: parse_datetime(&row.get::<String>(18)?)?,
        updated_at: parse_datetime(&row.get::<String>(19)?)?,
    })
}

fn date_param(date: Option<NaiveDate>) -> libsql::Value {
    date.map_or(libsql::Value::Null, |d| {
        d.format("%Y-%m-%d").to_string().into()
    })
}

impl StoreService {
    /// Create an experiment in Backlog. The test number is assigned
    /// sequentially per project.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the insert fails.
    pub async fn create_experiment(
        &self,
        project_id: &str,
        name: &str,
        category: ExperimentCategory,
        primary_kpi: Option<&str>,
        hypothesis: Option<&str>,
    ) -> Result<Experiment, StoreError> {
        let id = self.db().generate_id(PREFIX_EXPERIMENT).await?;
        let now = Utc::now();

        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT COALESCE(MAX(test_number), 0) + 1 FROM experiments WHERE project_id = ?1",
                [project_id],
            )
            .await?;
        let row = rows.next().await?.ok_or(StoreError::NoResult)?;
        let test_number: i64 = row.get(0)?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO experiments (id, project_id, name, test_number, category, status, \
                 primary_kpi, hypothesis, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, 'backlog', ?6, ?7, ?8, ?9)",
                libsql::params![
                    id.as_str(),
                    project_id,
                    name,
                    test_number,
                    category.as_str(),
                    primary_kpi,
                    hypothesis,
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        tracing::debug!(experiment = %id, project = %project_id, "created experiment");
        self.get_experiment(&id).await
    }

    /// Fetch a single experiment by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NoResult` if the id does not exist.
    pub async fn get_experiment(&self, id: &str) -> Result<Experiment, StoreError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {EXPERIMENT_COLS} FROM experiments WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(StoreError::NoResult)?;
        row_to_experiment(&row)
    }

    /// List a project's experiments, test-number order. The board calls this
    /// with `include_archived = false`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the query fails.
    pub async fn list_experiments(
        &self,
        project_id: &str,
        include_archived: bool,
    ) -> Result<Vec<Experiment>, StoreError> {
        let sql = if include_archived {
            format!(
                "SELECT {EXPERIMENT_COLS} FROM experiments WHERE project_id = ?1 \
                 ORDER BY test_number"
            )
        } else {
            format!(
                "SELECT {EXPERIMENT_COLS} FROM experiments WHERE project_id = ?1 \
                 AND (status IS NULL OR status != 'archived') ORDER BY test_number"
            )
        };
        let mut rows = self.db().conn().query(&sql, [project_id]).await?;

        let mut experiments = Vec::new();
        while let Some(row) = rows.next().await? {
            experiments.push(row_to_experiment(&row)?);
        }
        Ok(experiments)
    }

    /// Apply a partial update to one experiment row and return the fresh row.
    ///
    /// An empty update is a read.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write fails or the id does not exist.
    pub async fn update_experiment(
        &self,
        id: &str,
        update: ExperimentUpdate,
    ) -> Result<Experiment, StoreError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(ref name) = update.name {
            sets.push(format!("name = ?{idx}"));
            params.push(name.clone().into());
            idx += 1;
        }
        if let Some(category) = update.category {
            sets.push(format!("category = ?{idx}"));
            params.push(category.as_str().into());
            idx += 1;
        }
        if let Some(status) = update.status {
            sets.push(format!("status = ?{idx}"));
            params.push(status.as_str().into());
            idx += 1;
        }
        if let Some(ref primary_kpi) = update.primary_kpi {
            sets.push(format!("primary_kpi = ?{idx}"));
            params.push(primary_kpi.clone().map_or(libsql::Value::Null, Into::into));
            idx += 1;
        }
        if let Some(ref hypothesis) = update.hypothesis {
            sets.push(format!("hypothesis = ?{idx}"));
            params.push(hypothesis.clone().map_or(libsql::Value::Null, Into::into));
            idx += 1;
        }
        if let Some(ref page_url) = update.page_url {
            sets.push(format!("page_url = ?{idx}"));
            params.push(page_url.clone().map_or(libsql::Value::Null, Into::into));
            idx += 1;
        }
        if let Some(date) = update.planned_start_date {
            sets.push(format!("planned_start_date = ?{idx}"));
            params.push(date_param(date));
            idx += 1;
        }
        if let Some(date) = update.planned_end_date {
            sets.push(format!("planned_end_date = ?{idx}"));
            params.push(date_param(date));
            idx += 1;
        }
        if let Some(date) = update.actual_start_date {
            sets.push(format!("actual_start_date = ?{idx}"));
            params.push(date_param(date));
            idx += 1;
        }
        if let Some(date) = update.actual_end_date {
            sets.push(format!("actual_end_date = ?{idx}"));
            params.push(date_param(date));
            idx += 1;
        }
        if let Some(outcome) = update.outcome {
            sets.push(format!("outcome = ?{idx}"));
            params.push(outcome.map_or(libsql::Value::Null, |o| o.as_str().into()));
            idx += 1;
        }
        if let Some(ref winner) = update.winner_variant_id {
            sets.push(format!("winner_variant_id = ?{idx}"));
            params.push(winner.clone().map_or(libsql::Value::Null, Into::into));
            idx += 1;
        }
        if let Some(value) = update.pie_potential {
            sets.push(format!("pie_potential = ?{idx}"));
            params.push(value.map_or(libsql::Value::Null, Into::into));
            idx += 1;
        }
        if let Some(value) = update.pie_importance {
            sets.push(format!("pie_importance = ?{idx}"));
            params.push(value.map_or(libsql::Value::Null, Into::into));
            idx += 1;
        }
        if let Some(value) = update.pie_ease {
            sets.push(format!("pie_ease = ?{idx}"));
            params.push(value.map_or(libsql::Value::Null, Into::into));
            idx += 1;
        }

        if sets.is_empty() {
            return self.get_experiment(id).await;
        }

        sets.push(format!("updated_at = ?{idx}"));
        params.push(Utc::now().to_rfc3339().into());
        idx += 1;

        let sql = format!("UPDATE experiments SET {} WHERE id = ?{idx}", sets.join(", "));
        params.push(id.into());

        self.db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;

        tracing::debug!(experiment = %id, "updated experiment");
        self.get_experiment(id).await
    }

    /// Delete an experiment; its variants and notes cascade.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the delete fails.
    pub async fn delete_experiment(&self, id: &str) -> Result<(), StoreError> {
        self.db()
            .conn()
            .execute("DELETE FROM experiments WHERE id = ?1", [id])
            .await?;
        tracing::debug!(experiment = %id, "deleted experiment");
        Ok(())
    }
}
