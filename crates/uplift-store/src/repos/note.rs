//! Note repository — the append-only feed on each experiment.

use chrono::Utc;

use uplift_core::entities::Note;
use uplift_core::ids::PREFIX_NOTE;

use crate::error::StoreError;
use crate::helpers::{get_opt_string, parse_datetime};
use crate::service::StoreService;

const NOTE_COLS: &str = "id, experiment_id, author, body, created_at";

fn row_to_note(row: &libsql::Row) -> Result<Note, StoreError> {
    Ok(Note {
        id: row.get(0)?,
        experiment_id: row.get(1)?,
        author: get_opt_string(row, 2)?,
        body: row.get(3)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

impl StoreService {
    /// Append a note to an experiment's feed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the insert fails.
    pub async fn add_note(
        &self,
        experiment_id: &str,
        author: Option<&str>,
        body: &str,
    ) -> Result<Note, StoreError> {
        let id = self.db().generate_id(PREFIX_NOTE).await?;
        let now = Utc::now();

        self.db()
            .conn()
            .execute(
                "INSERT INTO notes (id, experiment_id, author, body, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![id.as_str(), experiment_id, author, body, now.to_rfc3339()],
            )
            .await?;

        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {NOTE_COLS} FROM notes WHERE id = ?1"),
                [id.as_str()],
            )
            .await?;
        let row = rows.next().await?.ok_or(StoreError::NoResult)?;
        row_to_note(&row)
    }

    /// List an experiment's notes, newest first.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the query fails.
    pub async fn list_notes(&self, experiment_id: &str) -> Result<Vec<Note>, StoreError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {NOTE_COLS} FROM notes WHERE experiment_id = ?1 \
                     ORDER BY created_at DESC, id DESC"
                ),
                [experiment_id],
            )
            .await?;

        let mut notes = Vec::new();
        while let Some(row) = rows.next().await? {
            notes.push(row_to_note(&row)?);
        }
        Ok(notes)
    }
}
