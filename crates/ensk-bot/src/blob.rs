//! Media directory holding uploaded lesson files.
//!
//! Stored names are `{lesson_id}_{timestamp}_{sanitized original name}`, so
//! two uploads of `cours.pdf` never overwrite each other.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Utc;

pub struct BlobStore {
    root: PathBuf,
}

impl BlobStore {
    /// Use `root` as the media directory, creating it if needed.
    pub async fn open(root: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let root = root.into();
        tokio::fs::create_dir_all(&root)
            .await
            .with_context(|| format!("failed to create media directory {}", root.display()))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Copy `source` into the media directory and return the stored path.
    pub async fn store(
        &self,
        source: &Path,
        original_name: &str,
        lesson_id: i64,
    ) -> anyhow::Result<PathBuf> {
        let stamp = Utc::now().format("%Y%m%d%H%M%S%3f");
        let base = format!("{lesson_id}_{stamp}_{}", sanitize(original_name));

        let mut target = self.root.join(&base);
        let mut attempt = 1;
        while tokio::fs::try_exists(&target).await? {
            attempt += 1;
            target = self.root.join(format!("{base}.{attempt}"));
        }

        tokio::fs::copy(source, &target).await.with_context(|| {
            format!(
                "failed to copy {} into {}",
                source.display(),
                target.display()
            )
        })?;

        tracing::info!(lesson_id, path = %target.display(), "stored upload");
        Ok(target)
    }

    /// Remove a stored file whose metadata row was never written.
    pub async fn discard(&self, path: &Path) {
        if let Err(error) = tokio::fs::remove_file(path).await {
            tracing::warn!(path = %path.display(), %error, "failed to remove orphaned upload");
        } else {
            tracing::debug!(path = %path.display(), "removed orphaned upload");
        }
    }

    /// Whether a stored path still exists on disk.
    pub async fn exists(&self, path: &Path) -> bool {
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }
}

/// Keep ASCII letters, digits, `.`, `-` and `_`; everything else becomes `_`.
fn sanitize(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim_start_matches('.');

    if cleaned.is_empty() {
        "file".to_string()
    } else {
        cleaned.to_string()
    }
}
