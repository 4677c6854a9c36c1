//! Menu layout settings.

use serde::{Deserialize, Serialize};

/// Hard cap on search results.
pub const MAX_SEARCH_LIMIT: u32 = 20;

const fn one() -> usize {
    1
}

const fn two() -> usize {
    2
}

const fn default_search_limit() -> u32 {
    MAX_SEARCH_LIMIT
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MenuConfig {
    /// Buttons per row on the specialty menu.
    #[serde(default = "one")]
    pub root_width: usize,

    /// Buttons per row on the year menu.
    #[serde(default = "two")]
    pub year_width: usize,

    /// Buttons per row on module, lesson, file, and search menus.
    #[serde(default = "one")]
    pub list_width: usize,

    /// Maximum search results; values above 20 are clamped.
    #[serde(default = "default_search_limit")]
    pub search_limit: u32,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            root_width: one(),
            year_width: two(),
            list_width: one(),
            search_limit: default_search_limit(),
        }
    }
}

impl MenuConfig {
    /// Search limit clamped to `1..=20`.
    pub fn effective_search_limit(&self) -> u32 {
        self.search_limit.clamp(1, MAX_SEARCH_LIMIT)
    }
}
