//! Messaging boundary.
//!
//! A transport turns platform updates into [`Incoming`] events and delivers
//! [`Reply`] values back to a chat. Button payloads are decoded into
//! [`Selection`] here and nowhere else.

mod console;

use std::path::PathBuf;

use ensk_core::enums::Selection;
use ensk_core::reply::Reply;

pub use console::ConsoleTransport;

/// One update from a user, tagged with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Incoming {
    pub chat_id: i64,
    pub user_id: i64,
    pub event: Event,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// `/name args`, with the leading slash and any `@botname` removed.
    Command { name: String, args: String },
    Button(Selection),
    Text(String),
    /// An uploaded file, already downloaded to `path`.
    Document {
        path: PathBuf,
        file_name: String,
        caption: Option<String>,
    },
}

pub trait Transport {
    /// Next event, or `None` once the source is exhausted.
    async fn next_event(&mut self) -> anyhow::Result<Option<Incoming>>;

    async fn deliver(&mut self, chat_id: i64, reply: &Reply) -> anyhow::Result<()>;
}

/// Split `/name@bot rest` into `("name", "rest")`.
pub fn parse_command(line: &str) -> Option<(String, String)> {
    let body = line.strip_prefix('/')?;
    let (head, args) = body
        .split_once(char::is_whitespace)
        .unwrap_or((body, ""));
    let name = head.split('@').next().unwrap_or(head);
    if name.is_empty() {
        return None;
    }
    Some((name.to_ascii_lowercase(), args.trim().to_string()))
}
