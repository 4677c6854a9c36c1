use anyhow::Context;
use ensk_config::EnskConfig;

use crate::cli::GlobalFlags;

/// Load layered config, then apply command-line overrides on top.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<EnskConfig> {
    let config = EnskConfig::load_with_dotenv().context("failed to load ensk configuration")?;
    Ok(apply_overrides(config, flags))
}

fn apply_overrides(mut config: EnskConfig, flags: &GlobalFlags) -> EnskConfig {
    if let Some(db) = &flags.db {
        config.storage.db_path.clone_from(db);
    }
    if let Some(media) = &flags.media {
        config.storage.media_dir.clone_from(media);
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn flags(db: Option<&str>, media: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Text,
            db: db.map(str::to_string),
            media: media.map(str::to_string),
        }
    }

    #[test]
    fn flags_override_storage_paths() {
        let config = apply_overrides(
            EnskConfig::default(),
            &flags(Some("/tmp/bot.db"), Some("/tmp/media")),
        );
        assert_eq!(config.storage.db_path, "/tmp/bot.db");
        assert_eq!(config.storage.media_dir, "/tmp/media");
    }

    #[test]
    fn absent_flags_keep_config() {
        let config = apply_overrides(EnskConfig::default(), &flags(None, None));
        assert_eq!(config.storage.db_path, "ensk_family.db");
        assert_eq!(config.storage.media_dir, "media");
    }
}
