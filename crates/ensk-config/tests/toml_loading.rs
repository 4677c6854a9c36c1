//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed file and env var manipulation.

use ensk_config::EnskConfig;
use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};

#[test]
fn loads_full_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[bot]
token = "toml-token"
admin_ids = [1, 2, 3]

[storage]
db_path = "content.db"
media_dir = "uploads"

[menu]
root_width = 2
year_width = 3
list_width = 2
search_limit = 10
"#,
        )?;

        let config: EnskConfig = Figment::from(Serialized::defaults(EnskConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.bot.token, "toml-token");
        assert_eq!(config.bot.admin_ids, vec![1, 2, 3]);
        assert_eq!(config.storage.db_path, "content.db");
        assert_eq!(config.storage.media_dir, "uploads");
        assert_eq!(config.menu.root_width, 2);
        assert_eq!(config.menu.year_width, 3);
        assert_eq!(config.menu.list_width, 2);
        assert_eq!(config.menu.effective_search_limit(), 10);
        Ok(())
    });
}

#[test]
fn admin_ids_accepts_csv_string_in_toml() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[bot]\nadmin_ids = \"5, 6\"\n")?;

        let config: EnskConfig = Figment::from(Serialized::defaults(EnskConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.bot.admin_ids, vec![5, 6]);
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[storage]\ndb_path = \"from-toml.db\"\n")?;
        jail.set_env("ENSK_STORAGE__DB_PATH", "from-env.db");

        let config: EnskConfig = Figment::from(Serialized::defaults(EnskConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("ENSK_").split("__"))
            .extract()?;

        assert_eq!(config.storage.db_path, "from-env.db");
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up_by_figment() {
    Jail::expect_with(|jail| {
        jail.create_file("ensk.toml", "[menu]\nyear_width = 4\n")?;

        let config = EnskConfig::load().expect("config loads");
        assert_eq!(config.menu.year_width, 4);
        assert_eq!(config.menu.root_width, 1);
        Ok(())
    });
}

#[test]
fn partial_sections_keep_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[bot]\ntoken = \"t\"\n")?;

        let config: EnskConfig = Figment::from(Serialized::defaults(EnskConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!(config.bot.is_configured());
        assert!(config.bot.admin_ids.is_empty());
        assert_eq!(config.storage.media_dir, "media");
        Ok(())
    });
}
