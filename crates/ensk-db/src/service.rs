//! Store facade over `ContentDb`.
//!
//! All repository methods are implemented as `impl ContentStore` blocks in
//! `repos/`. Each method runs one statement (or a short fixed sequence)
//! and autocommits.

use crate::ContentDb;
use crate::error::DatabaseError;

pub struct ContentStore {
    db: ContentDb,
}

impl ContentStore {
    /// Open (or create) the store at `db_path`, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = ContentDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Wrap an already opened database.
    #[must_use]
    pub const fn from_db(db: ContentDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &ContentDb {
        &self.db
    }
}
