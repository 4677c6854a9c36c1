//! Lesson repository.

use chrono::Utc;

use ensk_core::entities::Lesson;
use ensk_core::responses::Listing;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime};
use crate::service::ContentStore;

fn row_to_lesson(row: &libsql::Row) -> Result<Lesson, DatabaseError> {
    Ok(Lesson {
        id: row.get::<i64>(0)?,
        module_id: row.get::<i64>(1)?,
        title: row.get::<String>(2)?,
        summary: get_opt_string(row, 3)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

impl ContentStore {
    pub async fn insert_lesson(
        &self,
        module_id: i64,
        title: &str,
        summary: Option<&str>,
    ) -> Result<i64, DatabaseError> {
        self.db()
            .conn()
            .execute(
                "INSERT INTO lessons (module_id, title, summary, created_at) VALUES (?1, ?2, ?3, ?4)",
                libsql::params![module_id, title, summary, Utc::now().to_rfc3339()],
            )
            .await
            .map_err(DatabaseError::on_insert("module", module_id))?;
        let id = self.db().last_insert_id();
        tracing::info!(module_id, id, title, "lesson created");
        Ok(id)
    }

    pub async fn get_lesson(&self, id: i64) -> Result<Option<Lesson>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, module_id, title, summary, created_at FROM lessons WHERE id = ?1",
                [id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_lesson(&row)?)),
            None => Ok(None),
        }
    }

    /// Lessons of a module sorted by title, with the module name.
    pub async fn list_lessons(&self, module_id: i64) -> Result<Listing<Lesson>, DatabaseError> {
        let parent = self.get_module(module_id).await?.map(|m| m.name);

        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, module_id, title, summary, created_at
                 FROM lessons WHERE module_id = ?1 ORDER BY title, id",
                [module_id],
            )
            .await?;
        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(row_to_lesson(&row)?);
        }
        Ok(Listing { parent, items })
    }
}
