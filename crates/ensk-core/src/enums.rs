//! Menu selections and file kinds.
//!
//! A button press carries an opaque token such as `spec:3` or `lesson:12`.
//! The token is decoded once into [`Selection`] at the transport boundary
//! so handlers match on variants instead of string prefixes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// A decoded menu token.
///
/// ```text
/// spec:<id> → year:<id> → mod:<id> → lesson:<id> → file:<id>
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selection {
    Specialty(i64),
    Year(i64),
    Module(i64),
    Lesson(i64),
    File(i64),
    /// Placeholder button shown when no content exists yet.
    NoOp,
    AdminAdd,
    AdminList,
    /// Anything that failed to decode. Keeps the raw token for logging.
    Unknown(String),
}

impl Selection {
    pub const NO_OP: &'static str = "no_op";
    pub const ADMIN_ADD: &'static str = "admin:add";
    pub const ADMIN_LIST: &'static str = "admin:list";

    /// Decode a raw token. Never fails; undecodable input becomes `Unknown`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            Self::NO_OP => return Self::NoOp,
            Self::ADMIN_ADD => return Self::AdminAdd,
            Self::ADMIN_LIST => return Self::AdminList,
            _ => {}
        }

        let Some((prefix, id)) = raw.split_once(':') else {
            return Self::Unknown(raw.to_string());
        };
        let Ok(id) = id.parse::<i64>() else {
            return Self::Unknown(raw.to_string());
        };

        match prefix {
            "spec" => Self::Specialty(id),
            "year" => Self::Year(id),
            "mod" => Self::Module(id),
            "lesson" => Self::Lesson(id),
            "file" => Self::File(id),
            _ => Self::Unknown(raw.to_string()),
        }
    }

    /// Whether this selection belongs to the admin panel.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Self::AdminAdd | Self::AdminList)
    }
}

impl FromStr for Selection {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Specialty(id) => write!(f, "spec:{id}"),
            Self::Year(id) => write!(f, "year:{id}"),
            Self::Module(id) => write!(f, "mod:{id}"),
            Self::Lesson(id) => write!(f, "lesson:{id}"),
            Self::File(id) => write!(f, "file:{id}"),
            Self::NoOp => f.write_str(Self::NO_OP),
            Self::AdminAdd => f.write_str(Self::ADMIN_ADD),
            Self::AdminList => f.write_str(Self::ADMIN_LIST),
            Self::Unknown(raw) => f.write_str(raw),
        }
    }
}

// ---------------------------------------------------------------------------
// FileKind
// ---------------------------------------------------------------------------

/// Tag recorded on an uploaded file, taken from the upload caption.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    Summary,
    /// Practical work (TP).
    PracticalWork,
    /// Directed work (TD).
    DirectedWork,
    PastExam,
    Document,
    /// Caption that matched no known kind, stored verbatim.
    Other(String),
}

impl FileKind {
    /// Derive the kind from an optional caption. Empty captions mean `Document`.
    #[must_use]
    pub fn from_caption(caption: Option<&str>) -> Self {
        let Some(caption) = caption.map(str::trim).filter(|c| !c.is_empty()) else {
            return Self::Document;
        };
        match caption.to_lowercase().as_str() {
            "summary" | "résumé" | "resume" => Self::Summary,
            "tp" | "practical" => Self::PracticalWork,
            "td" | "directed" => Self::DirectedWork,
            "exam" | "past exam" => Self::PastExam,
            "document" | "doc" => Self::Document,
            _ => Self::Other(caption.to_string()),
        }
    }

    /// The tag string stored in `files.file_type`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Summary => "summary",
            Self::PracticalWork => "tp",
            Self::DirectedWork => "td",
            Self::PastExam => "exam",
            Self::Document => "document",
            Self::Other(tag) => tag,
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
