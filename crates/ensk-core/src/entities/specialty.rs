use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Root of the content hierarchy (e.g. "Mathematics").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Specialty {
    pub id: i64,
    /// Unique slug-like code. Duplicate inserts resolve to the existing row.
    pub code: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Specialty {
    /// Button label used on the root menu.
    #[must_use]
    pub fn menu_label(&self) -> String {
        format!("{} ({})", self.name, self.code)
    }
}
