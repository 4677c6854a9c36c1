use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A document attached to a lesson.
///
/// `path` points into the blob store (the media directory). The row may
/// outlive the blob; callers check existence before delivering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileEntry {
    pub id: i64,
    pub lesson_id: i64,
    /// Free-form tag such as `summary`, `tp`, `td`, `exam`, or `document`.
    pub file_type: String,
    pub path: String,
    pub original_name: String,
    pub created_at: DateTime<Utc>,
}

impl FileEntry {
    /// Button label used on the lesson's file picker.
    #[must_use]
    pub fn menu_label(&self) -> String {
        format!("{} — {}", self.file_type, self.original_name)
    }
}
