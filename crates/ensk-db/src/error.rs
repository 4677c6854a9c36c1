//! Error type for the content store.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A row could not be decoded into its entity.
    #[error("Query failed: {0}")]
    Query(String),

    /// Opening the schema failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// An insert referenced a parent row that does not exist.
    #[error("No {parent} with id {id}")]
    MissingParent { parent: &'static str, id: i64 },

    /// Arguments the schema cannot represent (e.g. a quiz answer out of range).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DatabaseError {
    /// Map a failed child insert: foreign-key violations become
    /// `MissingParent`, anything else passes through.
    pub(crate) fn on_insert(parent: &'static str, id: i64) -> impl FnOnce(libsql::Error) -> Self {
        move |err| {
            if err.to_string().contains("FOREIGN KEY constraint failed") {
                Self::MissingParent { parent, id }
            } else {
                Self::LibSql(err)
            }
        }
    }
}
