use ensk_config::EnskConfig;

/// Emit warnings for settings that leave the bot half-usable.
pub fn warn_unconfigured(config: &EnskConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &EnskConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.bot.is_configured() && has_env_prefix(&env_keys, "ENSK_BOT_") {
        warnings.push(
            "Bot token appears unset while ENSK_BOT* env vars exist. Use double underscores (example: ENSK_BOT__TOKEN)."
                .to_string(),
        );
    }

    if config.bot.admin_ids.is_empty() {
        if env_keys
            .iter()
            .any(|key| key == "ADMIN_IDS" || key == "ENSK_BOT__ADMIN_IDS")
        {
            warnings.push(
                "Admin list is set but contains no numeric ids; nobody can add content."
                    .to_string(),
            );
        } else {
            warnings.push(
                "No admin ids configured (ENSK_BOT__ADMIN_IDS); the admin dialogue is disabled."
                    .to_string(),
            );
        }
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}
