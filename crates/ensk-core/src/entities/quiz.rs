use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A multiple-choice question attached to a lesson.
///
/// Stored with `options` serialized as a JSON array. No bot flow reads
/// quizzes yet; they are populated and listed through the store only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Quiz {
    pub id: i64,
    pub lesson_id: i64,
    pub question: String,
    pub options: Vec<String>,
    pub answer_index: u32,
    pub created_at: DateTime<Utc>,
}

impl Quiz {
    /// The correct option, if `answer_index` is in range.
    #[must_use]
    pub fn answer(&self) -> Option<&str> {
        self.options
            .get(self.answer_index as usize)
            .map(String::as_str)
    }
}
