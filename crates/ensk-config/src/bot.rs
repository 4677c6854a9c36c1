//! Bot platform credential and administrator allow-list.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BotConfig {
    /// Bot platform credential, handed to the transport.
    ///
    /// An all-digit env value reaches serde as a number and is kept as text.
    #[serde(default, deserialize_with = "deserialize_token")]
    pub token: String,

    /// User ids allowed to run the admin dialogue.
    ///
    /// Accepts a TOML array, a single number, or a comma-separated string
    /// (`ENSK_BOT__ADMIN_IDS=111,222`). Non-numeric entries are skipped.
    #[serde(default, deserialize_with = "deserialize_admin_ids")]
    pub admin_ids: Vec<i64>,
}

impl BotConfig {
    pub fn is_configured(&self) -> bool {
        !self.token.is_empty()
    }

    /// Whether `user_id` is on the allow-list.
    pub fn is_admin(&self, user_id: i64) -> bool {
        self.admin_ids.contains(&user_id)
    }
}

/// Parse a comma-separated id list, keeping only numeric entries.
pub fn parse_admin_ids(raw: &str) -> Vec<i64> {
    raw.split(',')
        .map(str::trim)
        .filter_map(|part| part.parse::<i64>().ok())
        .collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AdminIds {
    List(Vec<i64>),
    One(i64),
    Csv(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Token {
    Text(String),
    Unsigned(u64),
    Signed(i64),
}

fn deserialize_token<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Token::deserialize(deserializer)? {
        Token::Text(token) => token,
        Token::Unsigned(n) => n.to_string(),
        Token::Signed(n) => n.to_string(),
    })
}

fn deserialize_admin_ids<'de, D>(deserializer: D) -> Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match AdminIds::deserialize(deserializer)? {
        AdminIds::List(ids) => ids,
        AdminIds::One(id) => vec![id],
        AdminIds::Csv(raw) => parse_admin_ids(&raw),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_admins() {
        let config = BotConfig::default();
        assert!(!config.is_configured());
        assert!(config.admin_ids.is_empty());
        assert!(!config.is_admin(1));
    }

    #[test]
    fn csv_skips_garbage() {
        assert_eq!(parse_admin_ids("1, 22 ,abc,,333"), vec![1, 22, 333]);
        assert!(parse_admin_ids("").is_empty());
    }
}
