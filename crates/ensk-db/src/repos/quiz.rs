//! Quiz repository. Options are stored as a JSON array.

use chrono::Utc;

use ensk_core::entities::Quiz;

use crate::error::DatabaseError;
use crate::helpers::{parse_datetime, parse_string_list};
use crate::service::ContentStore;

fn row_to_quiz(row: &libsql::Row) -> Result<Quiz, DatabaseError> {
    let answer_index = row.get::<i64>(4)?;
    Ok(Quiz {
        id: row.get::<i64>(0)?,
        lesson_id: row.get::<i64>(1)?,
        question: row.get::<String>(2)?,
        options: parse_string_list(&row.get::<String>(3)?)?,
        answer_index: u32::try_from(answer_index).map_err(|_| {
            DatabaseError::InvalidState(format!("negative answer_index {answer_index}"))
        })?,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

impl ContentStore {
    /// Attach a question to a lesson.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidState` if `answer_index` does not point
    /// at one of `options`.
    pub async fn insert_quiz(
        &self,
        lesson_id: i64,
        question: &str,
        options: &[String],
        answer_index: u32,
    ) -> Result<i64, DatabaseError> {
        if answer_index as usize >= options.len() {
            return Err(DatabaseError::InvalidState(format!(
                "answer_index {answer_index} out of range for {} options",
                options.len()
            )));
        }
        let options_json =
            serde_json::to_string(options).map_err(|e| DatabaseError::Other(e.into()))?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO quizzes (lesson_id, question, options, answer_index, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![
                    lesson_id,
                    question,
                    options_json,
                    i64::from(answer_index),
                    Utc::now().to_rfc3339()
                ],
            )
            .await
            .map_err(DatabaseError::on_insert("lesson", lesson_id))?;
        Ok(self.db().last_insert_id())
    }

    pub async fn list_quizzes(&self, lesson_id: i64) -> Result<Vec<Quiz>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, lesson_id, question, options, answer_index, created_at
                 FROM quizzes WHERE lesson_id = ?1 ORDER BY id",
                [lesson_id],
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_quiz(&row)?);
        }
        Ok(results)
    }
}
