//! Button grids.
//!
//! Menus are built from ordered `(token, label)` pairs and wrapped into rows
//! of at most `width` buttons. The transport decides how a grid is drawn.

use serde::{Deserialize, Serialize};

use crate::enums::Selection;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    /// Opaque token sent back when the button is pressed.
    pub token: String,
    pub label: String,
}

impl Button {
    #[must_use]
    pub fn new(selection: &Selection, label: impl Into<String>) -> Self {
        Self {
            token: selection.to_string(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyboard {
    pub rows: Vec<Vec<Button>>,
}

impl Keyboard {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All buttons in display order.
    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.rows.iter().flatten()
    }
}

/// Wrap `pairs` into rows of at most `width` buttons, preserving order.
///
/// A `width` of zero is treated as one. Empty input yields an empty grid;
/// callers handle the "nothing to show" case themselves.
#[must_use]
pub fn keyboard<I>(pairs: I, width: usize) -> Keyboard
where
    I: IntoIterator<Item = (Selection, String)>,
{
    let width = width.max(1);
    let buttons: Vec<Button> = pairs
        .into_iter()
        .map(|(selection, label)| Button::new(&selection, label))
        .collect();

    Keyboard {
        rows: buttons.chunks(width).map(<[Button]>::to_vec).collect(),
    }
}
