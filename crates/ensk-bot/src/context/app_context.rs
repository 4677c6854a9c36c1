use anyhow::Context;
use ensk_config::EnskConfig;
use ensk_db::service::ContentStore;

use crate::blob::BlobStore;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub store: ContentStore,
    pub blobs: BlobStore,
    pub config: EnskConfig,
}

impl AppContext {
    /// Open the content database and the media directory named in `config`.
    pub async fn init(config: EnskConfig) -> anyhow::Result<Self> {
        let store = ContentStore::new_local(&config.storage.db_path)
            .await
            .with_context(|| format!("failed to open database {}", config.storage.db_path))?;

        let blobs = BlobStore::open(config.storage.media_path())
            .await
            .context("failed to prepare media directory")?;

        tracing::debug!(
            db = %config.storage.db_path,
            media = %blobs.root().display(),
            "application context ready"
        );

        Ok(Self {
            store,
            blobs,
            config,
        })
    }
}
