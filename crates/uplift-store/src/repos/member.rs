//! Project member repository.

use chrono::Utc;

use uplift_core::entities::Member;
use uplift_core::enums::MemberRole;
use uplift_core::ids::PREFIX_MEMBER;

use crate::error::StoreError;
use crate::helpers::{get_opt_string, parse_datetime, parse_enum};
use crate::service::StoreService;

const MEMBER_COLS: &str = "id, project_id, email, display_name, role, created_at";

fn row_to_member(row: &libsql::Row) -> Result<Member, StoreError> {
    Ok(Member {
        id: row.get(0)?,
        project_id: row.get(1)?,
        email: row.get(2)?,
        display_name: get_opt_string(row, 3)?,
        role: parse_enum(&row.get::<String>(4)?)?,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

impl StoreService {
    /// Add a member to a project.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the insert fails.
    pub async fn add_member(
        &self,
        project_id: &str,
        email: &str,
        display_name: Option<&str>,
        role: MemberRole,
    ) -> Result<Member, StoreError> {
        let id = self.db().generate_id(PREFIX_MEMBER).await?;
        let now = Utc::now();

        self.db()
            .conn()
            .execute(
                "INSERT INTO members (id, project_id, email, display_name, role, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                libsql::params![
                    id.as_str(),
                    project_id,
                    email,
                    display_name,
                    role.as_str(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {MEMBER_COLS} FROM members WHERE id = ?1"),
                [id.as_str()],
            )
            .await?;
        let row = rows.next().await?.ok_or(StoreError::NoResult)?;
        row_to_member(&row)
    }

    /// List a project's members, by join date.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the query fails.
    pub async fn list_members(&self, project_id: &str) -> Result<Vec<Member>, StoreError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {MEMBER_COLS} FROM members WHERE project_id = ?1 ORDER BY created_at"
                ),
                [project_id],
            )
            .await?;

        let mut members = Vec::new();
        while let Some(row) = rows.next().await? {
            members.push(row_to_member(&row)?);
        }
        Ok(members)
    }

    /// Remove a member from their project.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the delete fails.
    pub async fn remove_member(&self, id: &str) -> Result<(), StoreError> {
        self.db()
            .conn()
            .execute("DELETE FROM members WHERE id = ?1", [id])
            .await?;
        Ok(())
    }
}
