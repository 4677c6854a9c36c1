//! # ensk-db
//!
//! libSQL content store for the ENSK bot.
//!
//! Holds the whole content hierarchy (specialties, years, modules, lessons,
//! files) plus quizzes. Every insert autocommits; there are no transactions
//! spanning several admin steps, so a dialogue abandoned halfway keeps the
//! rows it already wrote.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Raw database handle: one libSQL database and its connection.
pub struct ContentDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl ContentDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Enables foreign keys and runs migrations automatically.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let content_db = Self { db, conn };
        content_db.run_migrations().await?;
        tracing::debug!(path, "content database opened");
        Ok(content_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Row id of the most recent successful insert on this connection.
    #[must_use]
    pub fn last_insert_id(&self) -> i64 {
        self.conn.last_insert_rowid()
    }
}
