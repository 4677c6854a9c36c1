//! File repository: documents attached to lessons.

use chrono::Utc;

use ensk_core::entities::FileEntry;

use crate::error::DatabaseError;
use crate::helpers::parse_datetime;
use crate::service::ContentStore;

fn row_to_file(row: &libsql::Row) -> Result<FileEntry, DatabaseError> {
    Ok(FileEntry {
        id: row.get::<i64>(0)?,
        lesson_id: row.get::<i64>(1)?,
        file_type: row.get::<String>(2)?,
        path: row.get::<String>(3)?,
        original_name: row.get::<String>(4)?,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

impl ContentStore {
    /// Record a blob already placed in the media directory.
    pub async fn insert_file(
        &self,
        lesson_id: i64,
        file_type: &str,
        path: &str,
        original_name: &str,
    ) -> Result<i64, DatabaseError> {
        self.db()
            .conn()
            .execute(
                "INSERT INTO files (lesson_id, file_type, file_path, original_name, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![
                    lesson_id,
                    file_type,
                    path,
                    original_name,
                    Utc::now().to_rfc3339()
                ],
            )
            .await
            .map_err(DatabaseError::on_insert("lesson", lesson_id))?;
        let id = self.db().last_insert_id();
        tracing::info!(lesson_id, id, file_type, original_name, "file recorded");
        Ok(id)
    }

    pub async fn get_file(&self, id: i64) -> Result<Option<FileEntry>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, lesson_id, file_type, file_path, original_name, created_at
                 FROM files WHERE id = ?1",
                [id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_file(&row)?)),
            None => Ok(None),
        }
    }

    /// Files attached to a lesson, in upload order.
    pub async fn list_files(&self, lesson_id: i64) -> Result<Vec<FileEntry>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, lesson_id, file_type, file_path, original_name, created_at
                 FROM files WHERE lesson_id = ?1 ORDER BY id",
                [lesson_id],
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_file(&row)?);
        }
        Ok(results)
    }
}
