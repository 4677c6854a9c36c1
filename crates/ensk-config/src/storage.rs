//! Database file and media directory locations.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_db_path() -> String {
    "ensk_family.db".into()
}

fn default_media_dir() -> String {
    "media".into()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// libSQL database file, or `:memory:`.
    #[serde(default = "default_db_path")]
    pub db_path: String,

    /// Directory holding uploaded file blobs.
    #[serde(default = "default_media_dir")]
    pub media_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            media_dir: default_media_dir(),
        }
    }
}

impl StorageConfig {
    pub fn media_path(&self) -> PathBuf {
        PathBuf::from(&self.media_dir)
    }
}
