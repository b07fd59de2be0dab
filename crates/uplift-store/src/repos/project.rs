//! Project repository.

use chrono::Utc;

use uplift_core::entities::Project;
use uplift_core::ids::PREFIX_PROJECT;

use crate::error::StoreError;
use crate::helpers::{get_opt_string, parse_datetime};
use crate::service::StoreService;

const PROJECT_COLS: &str = "id, name, client, base_url, created_at, updated_at";

fn row_to_project(row: &libsql::Row) -> Result<Project, StoreError> {
    Ok(Project {
        id: row.get(0)?,
        name: row.get(1)?,
        client: get_opt_string(row, 2)?,
        base_url: get_opt_string(row, 3)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
        updated_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

impl StoreService {
    /// Create a project.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the insert fails.
    pub async fn create_project(
        &self,
        name: &str,
        client: Option<&str>,
        base_url: Option<&str>,
    ) -> Result<Project, StoreError> {
        let id = self.db().generate_id(PREFIX_PROJECT).await?;
        let now = Utc::now();

        self.db()
            .conn()
            .execute(
                "INSERT INTO projects (id, name, client, base_url, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                libsql::params![
                    id.as_str(),
                    name,
                    client,
                    base_url,
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        self.get_project(&id).await
    }

    /// Fetch a single project by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NoResult` if the id does not exist.
    pub async fn get_project(&self, id: &str) -> Result<Project, StoreError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {PROJECT_COLS} FROM projects WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(StoreError::NoResult)?;
        row_to_project(&row)
    }

    /// List all projects, newest first.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the query fails.
    pub async fn list_projects(&self) -> Result<Vec<Project>, StoreError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {PROJECT_COLS} FROM projects ORDER BY created_at DESC"),
                (),
            )
            .await?;

        let mut projects = Vec::new();
        while let Some(row) = rows.next().await? {
            projects.push(row_to_project(&row)?);
        }
        Ok(projects)
    }

    /// Update a project's settings fields.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write fails or the id does not exist.
    pub async fn update_project(
        &self,
        id: &str,
        name: Option<&str>,
        client: Option<Option<&str>>,
        base_url: Option<Option<&str>>,
    ) -> Result<Project, StoreError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(name) = name {
            sets.push(format!("name = ?{idx}"));
            params.push(name.into());
            idx += 1;
        }
        if let Some(client) = client {
            sets.push(format!("client = ?{idx}"));
            params.push(client.map_or(libsql::Value::Null, Into::into));
            idx += 1;
        }
        if let Some(base_url) = base_url {
            sets.push(format!("base_url = ?{idx}"));
            params.push(base_url.map_or(libsql::Value::Null, Into::into));
            idx += 1;
        }

        if sets.is_empty() {
            return self.get_project(id).await;
        }

        sets.push(format!("updated_at = ?{idx}"));
        params.push(Utc::now().to_rfc3339().into());
        idx += 1;

        let sql = format!("UPDATE projects SET {} WHERE id = ?{idx}", sets.join(", "));
        params.push(id.into());

        self.db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;

        self.get_project(id).await
    }

    /// Delete a project; members and experiments cascade.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the delete fails.
    pub async fn delete_project(&self, id: &str) -> Result<(), StoreError> {
        self.db()
            .conn()
            .execute("DELETE FROM projects WHERE id = ?1", [id])
            .await?;
        Ok(())
    }
}
