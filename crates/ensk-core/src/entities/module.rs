use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A course module taught during one year.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Module {
    pub id: i64,
    pub year_id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
