use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A study year under one specialty. The label is free text ("Year 1").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Year {
    pub id: i64,
    pub specialty_id: i64,
    pub label: String,
    pub created_at: DateTime<Utc>,
}
