//! Query result shapes returned by the content store.

use serde::{Deserialize, Serialize};

/// Placeholder shown for a missing level in the admin overview.
pub const TREE_PLACEHOLDER: &str = "-";

/// Children of one node, plus the parent's display name for header text.
///
/// `parent` is `None` when the parent row does not exist. `items` may
/// still be non-empty in that case (orphaned rows are tolerated).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Listing<T> {
    pub parent: Option<String>,
    pub items: Vec<T>,
}

impl<T> Listing<T> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// One flattened row of the admin overview. Levels below a childless node
/// are `None`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TreeRow {
    pub specialty: Option<String>,
    pub year: Option<String>,
    pub module: Option<String>,
    pub lesson: Option<String>,
}

impl TreeRow {
    /// Render as `spec | year | module | lesson` with `-` for gaps.
    #[must_use]
    pub fn render(&self) -> String {
        [&self.specialty, &self.year, &self.module, &self.lesson]
            .iter()
            .map(|level| level.as_deref().unwrap_or(TREE_PLACEHOLDER))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}
