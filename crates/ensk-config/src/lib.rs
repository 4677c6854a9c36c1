//! # ensk-config
//!
//! Layered configuration loading for the ENSK bot using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ENSK_*` prefix, `__` as separator)
//! 2. Legacy `BOT_TOKEN` / `ADMIN_IDS` variables
//! 3. Project-level `./ensk.toml`
//! 4. User-level `~/.config/ensk/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ENSK_BOT__TOKEN` -> `bot.token`, `ENSK_STORAGE__DB_PATH` ->
//! `storage.db_path`, etc. The `__` (double underscore) separates nested
//! config sections.
//!
//! # Usage
//!
//! ```no_run
//! use ensk_config::EnskConfig;
//!
//! let config = EnskConfig::load_with_dotenv().expect("config");
//! if config.bot.is_admin(42) {
//!     println!("42 may add content");
//! }
//! ```

mod bot;
mod error;
mod menu;
mod storage;

pub use bot::{BotConfig, parse_admin_ids};
pub use error::ConfigError;
pub use menu::{MAX_SEARCH_LIMIT, MenuConfig};
pub use storage::StorageConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Legacy variable names accepted without the `ENSK_` prefix.
const LEGACY_ENV: [(&str, &str); 2] = [("BOT_TOKEN", "bot.token"), ("ADMIN_IDS", "bot.admin_ids")];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EnskConfig {
    #[serde(default)]
    pub bot: BotConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub menu: MenuConfig,
}

impl EnskConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would leave the bot without storage.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("storage.db_path", &self.storage.db_path),
            ("storage.media_dir", &self.storage.media_dir),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: field.into(),
                    reason: "must not be empty".into(),
                });
            }
        }
        Ok(())
    }

    /// Load configuration with `.env` file support.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from("ensk.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment = figment.merge(Self::legacy_env());
        figment = figment.merge(Env::prefixed("ENSK_").split("__"));

        figment
    }

    /// Unprefixed `BOT_TOKEN` and `ADMIN_IDS`, mapped into the `bot` section.
    fn legacy_env() -> Env {
        let names = LEGACY_ENV.map(|(name, _)| name);
        Env::raw().only(&names).map(|key| {
            LEGACY_ENV
                .iter()
                .find(|(name, _)| key.as_str().eq_ignore_ascii_case(name))
                .map_or_else(|| key.as_str().to_owned().into(), |(_, path)| (*path).into())
        })
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ensk").join("config.toml"))
    }

    /// Load `.env` from the workspace root, falling back to the current dir.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}
