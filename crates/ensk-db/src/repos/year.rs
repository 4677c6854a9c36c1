//! Year repository.

use chrono::Utc;

use ensk_core::entities::Year;
use ensk_core::responses::Listing;

use crate::error::DatabaseError;
use crate::helpers::parse_datetime;
use crate::service::ContentStore;

fn row_to_year(row: &libsql::Row) -> Result<Year, DatabaseError> {
    Ok(Year {
        id: row.get::<i64>(0)?,
        specialty_id: row.get::<i64>(1)?,
        label: row.get::<String>(2)?,
        created_at: parse_datetime(&row.get::<String>(3)?)?,
    })
}

impl ContentStore {
    /// Insert a year under `specialty_id`. Fails if the specialty does not exist.
    pub async fn insert_year(&self, specialty_id: i64, label: &str) -> Result<i64, DatabaseError> {
        self.db()
            .conn()
            .execute(
                "INSERT INTO years (specialty_id, year_label, created_at) VALUES (?1, ?2, ?3)",
                libsql::params![specialty_id, label, Utc::now().to_rfc3339()],
            )
            .await
            .map_err(DatabaseError::on_insert("specialty", specialty_id))?;
        let id = self.db().last_insert_id();
        tracing::info!(specialty_id, id, label, "year created");
        Ok(id)
    }

    pub async fn get_year(&self, id: i64) -> Result<Option<Year>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, specialty_id, year_label, created_at FROM years WHERE id = ?1",
                [id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_year(&row)?)),
            None => Ok(None),
        }
    }

    /// Years under a specialty in insertion order, with the specialty name.
    pub async fn list_years(&self, specialty_id: i64) -> Result<Listing<Year>, DatabaseError> {
        let parent = self.get_specialty(specialty_id).await?.map(|s| s.name);

        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, specialty_id, year_label, created_at
                 FROM years WHERE specialty_id = ?1 ORDER BY id",
                [specialty_id],
            )
            .await?;
        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(row_to_year(&row)?);
        }
        Ok(Listing { parent, items })
    }
}
