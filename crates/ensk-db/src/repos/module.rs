//! Module repository.

use chrono::Utc;

use ensk_core::entities::Module;
use ensk_core::responses::Listing;

use crate::error::DatabaseError;
use crate::helpers::parse_datetime;
use crate::service::ContentStore;

fn row_to_module(row: &libsql::Row) -> Result<Module, DatabaseError> {
    Ok(Module {
        id: row.get::<i64>(0)?,
        year_id: row.get::<i64>(1)?,
        name: row.get::<String>(2)?,
        created_at: parse_datetime(&row.get::<String>(3)?)?,
    })
}

impl ContentStore {
    pub async fn insert_module(&self, year_id: i64, name: &str) -> Result<i64, DatabaseError> {
        self.db()
            .conn()
            .execute(
                "INSERT INTO modules (year_id, module_name, created_at) VALUES (?1, ?2, ?3)",
                libsql::params![year_id, name, Utc::now().to_rfc3339()],
            )
            .await
            .map_err(DatabaseError::on_insert("year", year_id))?;
        let id = self.db().last_insert_id();
        tracing::info!(year_id, id, name, "module created");
        Ok(id)
    }

    pub async fn get_module(&self, id: i64) -> Result<Option<Module>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, year_id, module_name, created_at FROM modules WHERE id = ?1",
                [id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_module(&row)?)),
            None => Ok(None),
        }
    }

    /// Modules of a year sorted by name, with the year label.
    pub async fn list_modules(&self, year_id: i64) -> Result<Listing<Module>, DatabaseError> {
        let parent = self.get_year(year_id).await?.map(|y| y.label);

        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, year_id, module_name, created_at
                 FROM modules WHERE year_id = ?1 ORDER BY module_name, id",
                [year_id],
            )
            .await?;
        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(row_to_module(&row)?);
        }
        Ok(Listing { parent, items })
    }
}
