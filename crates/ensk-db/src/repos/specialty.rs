//! Specialty repository: root of the hierarchy.

use chrono::Utc;

use ensk_core::entities::Specialty;

use crate::error::DatabaseError;
use crate::helpers::parse_datetime;
use crate::service::ContentStore;

fn row_to_specialty(row: &libsql::Row) -> Result<Specialty, DatabaseError> {
    Ok(Specialty {
        id: row.get::<i64>(0)?,
        code: row.get::<String>(1)?,
        name: row.get::<String>(2)?,
        created_at: parse_datetime(&row.get::<String>(3)?)?,
    })
}

impl ContentStore {
    /// Insert a specialty, or return the id of the one already using `code`.
    ///
    /// A duplicate code is silently ignored; the existing name is kept.
    pub async fn insert_specialty(&self, code: &str, name: &str) -> Result<i64, DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute(
                "INSERT OR IGNORE INTO specialties (code, name, created_at) VALUES (?1, ?2, ?3)",
                libsql::params![code, name, Utc::now().to_rfc3339()],
            )
            .await?;

        let mut rows = self
            .db()
            .conn()
            .query("SELECT id FROM specialties WHERE code = ?1", [code])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let id = row.get::<i64>(0)?;

        if changed == 0 {
            tracing::debug!(code, id, "specialty already exists; insert ignored");
        } else {
            tracing::info!(code, id, "specialty created");
        }
        Ok(id)
    }

    pub async fn get_specialty(&self, id: i64) -> Result<Option<Specialty>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, code, name, created_at FROM specialties WHERE id = ?1",
                [id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_specialty(&row)?)),
            None => Ok(None),
        }
    }

    /// All specialties sorted by display name.
    pub async fn list_specialties(&self) -> Result<Vec<Specialty>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, code, name, created_at FROM specialties ORDER BY name, id",
                (),
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_specialty(&row)?);
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::helpers::test_store;

    #[tokio::test]
    async fn insert_and_get() {
        let store = test_store().await;
        let id = store.insert_specialty("math", "Mathematics").await.unwrap();
        let spec = store.get_specialty(id).await.unwrap().unwrap();
        assert_eq!(spec.code, "math");
        assert_eq!(spec.name, "Mathematics");
        assert_eq!(spec.menu_label(), "Mathematics (math)");
    }

    #[tokio::test]
    async fn insert_is_idempotent_on_code() {
        let store = test_store().await;
        let first = store.insert_specialty("math", "Mathematics").await.unwrap();
        let second = store.insert_specialty("math", "Maths again").await.unwrap();
        assert_eq!(first, second);

        let all = store.list_specialties().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Mathematics");
    }

    #[tokio::test]
    async fn list_sorted_by_name() {
        let store = test_store().await;
        store.insert_specialty("phy", "Physics").await.unwrap();
        store.insert_specialty("bio", "Biology").await.unwrap();
        store.insert_specialty("math", "Mathematics").await.unwrap();

        let names: Vec<String> = store
            .list_specialties()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Biology", "Mathematics", "Physics"]);
    }

    #[tokio::test]
    async fn get_missing_is_none() {
        let store = test_store().await;
        assert!(store.get_specialty(404).await.unwrap().is_none());
    }
}
