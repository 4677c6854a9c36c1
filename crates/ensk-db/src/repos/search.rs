//! Lesson search: `LIKE` substring match over title and summary.
//!
//! SQLite's `LIKE` is case-insensitive for ASCII letters only. `%` and `_`
//! typed by the user act as wildcards.

use ensk_core::entities::SearchHit;

use crate::error::DatabaseError;
use crate::service::ContentStore;

/// Hard cap on search results regardless of the requested limit.
pub const MAX_SEARCH_RESULTS: u32 = 20;

impl ContentStore {
    /// Lessons whose title or summary contains `term`, joined with their
    /// module name. At most `min(limit, 20)` rows.
    pub async fn search_lessons(
        &self,
        term: &str,
        limit: u32,
    ) -> Result<Vec<SearchHit>, DatabaseError> {
        let pattern = format!("%{term}%");
        let limit = limit.min(MAX_SEARCH_RESULTS);

        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT l.id, l.title, m.module_name
                 FROM lessons l
                 JOIN modules m ON l.module_id = m.id
                 WHERE l.title LIKE ?1 OR l.summary LIKE ?1
                 ORDER BY l.id
                 LIMIT ?2",
                libsql::params![pattern, i64::from(limit)],
            )
            .await?;

        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(SearchHit {
                lesson_id: row.get::<i64>(0)?,
                title: row.get::<String>(1)?,
                module_name: row.get::<String>(2)?,
            });
        }
        tracing::debug!(term, hits = results.len(), "lesson search");
        Ok(results)
    }
}
