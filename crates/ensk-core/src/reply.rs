//! Outgoing messages handed back to the transport.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::menu::Keyboard;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reply {
    /// Plain text, optionally with a button grid underneath.
    Text {
        text: String,
        keyboard: Option<Keyboard>,
    },
    /// A file from the blob store, delivered under its original name.
    Document { path: PathBuf, file_name: String },
}

impl Reply {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            keyboard: None,
        }
    }

    /// Text with a grid. An empty grid is dropped so transports never
    /// render a bare keyboard.
    #[must_use]
    pub fn menu(text: impl Into<String>, keyboard: Keyboard) -> Self {
        Self::Text {
            text: text.into(),
            keyboard: (!keyboard.is_empty()).then_some(keyboard),
        }
    }

    /// The text body, if this is a text reply.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Text { text, .. } => Some(text),
            Self::Document { .. } => None,
        }
    }

    /// The attached keyboard, if any.
    #[must_use]
    pub const fn keyboard(&self) -> Option<&Keyboard> {
        match self {
            Self::Text { keyboard, .. } => keyboard.as_ref(),
            Self::Document { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Selection;
    use crate::menu::keyboard;

    #[test]
    fn menu_drops_empty_keyboard() {
        let reply = Reply::menu("nothing", Keyboard::default());
        assert!(reply.keyboard().is_none());
        assert_eq!(reply.body(), Some("nothing"));
    }

    #[test]
    fn menu_keeps_buttons() {
        let kb = keyboard(vec![(Selection::Year(1), "Year 1".into())], 2);
        let reply = Reply::menu("Pick a year:", kb);
        assert_eq!(reply.keyboard().map(|k| k.rows.len()), Some(1));
    }
}
