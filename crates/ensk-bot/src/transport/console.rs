//! Line-oriented transport for local use and tests.
//!
//! Input syntax, one event per line:
//!
//! ```text
//! /search limits        command
//! > lesson:3            button press
//! @ ./td1.pdf | td      upload a file, optional caption after `|`
//! Analysis              anything else is plain text
//! ```

use std::path::PathBuf;

use ensk_core::enums::Selection;
use ensk_core::reply::Reply;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};

use super::{Event, Incoming, Transport, parse_command};

pub struct ConsoleTransport<R, W> {
    lines: Lines<R>,
    out: W,
    chat_id: i64,
    user_id: i64,
}

impl<R, W> ConsoleTransport<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, out: W, chat_id: i64, user_id: i64) -> Self {
        Self {
            lines: reader.lines(),
            out,
            chat_id,
            user_id,
        }
    }
}

impl<R, W> Transport for ConsoleTransport<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    async fn next_event(&mut self) -> anyhow::Result<Option<Incoming>> {
        while let Some(line) = self.lines.next_line().await? {
            if let Some(event) = parse_line(&line) {
                return Ok(Some(Incoming {
                    chat_id: self.chat_id,
                    user_id: self.user_id,
                    event,
                }));
            }
        }
        Ok(None)
    }

    async fn deliver(&mut self, _chat_id: i64, reply: &Reply) -> anyhow::Result<()> {
        self.out.write_all(render(reply).as_bytes()).await?;
        self.out.flush().await?;
        Ok(())
    }
}

/// Decode one console line. Blank lines yield nothing.
fn parse_line(line: &str) -> Option<Event> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if let Some(token) = line.strip_prefix('>') {
        return Some(Event::Button(Selection::parse(token.trim())));
    }

    if let Some(upload) = line.strip_prefix('@') {
        let (path, caption) = match upload.split_once('|') {
            Some((path, caption)) => (path.trim(), Some(caption.trim())),
            None => (upload.trim(), None),
        };
        if path.is_empty() {
            return Some(Event::Text(line.to_string()));
        }
        let path = PathBuf::from(path);
        let file_name = path
            .file_name()
            .map_or_else(|| "upload".to_string(), |n| n.to_string_lossy().into_owned());
        return Some(Event::Document {
            path,
            file_name,
            caption: caption.filter(|c| !c.is_empty()).map(str::to_string),
        });
    }

    if let Some((name, args)) = parse_command(line) {
        return Some(Event::Command { name, args });
    }

    Some(Event::Text(line.to_string()))
}

fn render(reply: &Reply) -> String {
    match reply {
        Reply::Text { text, keyboard } => {
            let mut out = format!("{text}\n");
            if let Some(keyboard) = keyboard {
                for row in &keyboard.rows {
                    let cells: Vec<String> = row
                        .iter()
                        .map(|button| format!("[{}] {}", button.token, button.label))
                        .collect();
                    out.push_str("  ");
                    out.push_str(&cells.join("   "));
                    out.push('\n');
                }
            }
            out.push('\n');
            out
        }
        Reply::Document { path, file_name } => {
            format!("📎 {file_name} ({})\n\n", path.display())
        }
    }
}
