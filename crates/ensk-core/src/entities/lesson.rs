use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A lesson inside a module, optionally carrying a text summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Lesson {
    pub id: i64,
    pub module_id: i64,
    pub title: String,
    pub summary: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A lesson matched by a search, joined with its module name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchHit {
    pub lesson_id: i64,
    pub title: String,
    pub module_name: String,
}

impl SearchHit {
    #[must_use]
    pub fn menu_label(&self) -> String {
        format!("{} — {}", self.title, self.module_name)
    }
}
