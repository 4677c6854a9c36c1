//! Admin content-entry dialogue.
//!
//! A strictly linear state machine collecting one level of the hierarchy
//! per message:
//!
//! ```text
//! await_specialty → await_year → await_module → await_lesson_title
//!                 → await_lesson_summary → await_upload_files → finished
//! ```
//!
//! The machine performs no I/O. [`Dialogue::plan`] turns an incoming message
//! into a [`Plan`] (usually one [`Insert`] for the store), the caller carries
//! it out, and [`Dialogue::advance`] consumes the old value and returns the
//! next one. Callers keep one `Dialogue` per conversation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::enums::FileKind;

/// Input that skips the lesson summary.
pub const NO_SUMMARY: &str = "-";

// ---------------------------------------------------------------------------
// DialogueState
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogueState {
    AwaitSpecialty,
    AwaitYear,
    AwaitModule,
    AwaitLessonTitle,
    AwaitLessonSummary,
    AwaitUploadFiles,
    Finished,
}

impl DialogueState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AwaitSpecialty => "await_specialty",
            Self::AwaitYear => "await_year",
            Self::AwaitModule => "await_module",
            Self::AwaitLessonTitle => "await_lesson_title",
            Self::AwaitLessonSummary => "await_lesson_summary",
            Self::AwaitUploadFiles => "await_upload_files",
            Self::Finished => "finished",
        }
    }

    /// Valid next states. Uploads loop on themselves until `/done`.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::AwaitSpecialty => &[Self::AwaitYear],
            Self::AwaitYear => &[Self::AwaitModule],
            Self::AwaitModule => &[Self::AwaitLessonTitle],
            Self::AwaitLessonTitle => &[Self::AwaitLessonSummary],
            Self::AwaitLessonSummary => &[Self::AwaitUploadFiles],
            Self::AwaitUploadFiles => &[Self::AwaitUploadFiles, Self::Finished],
            Self::Finished => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// Prompt shown when the dialogue enters this state.
    #[must_use]
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::AwaitSpecialty => {
                "Enter the specialty name (e.g. \"Mathematics\") or \"code | name\":"
            }
            Self::AwaitYear => "Enter the year label (e.g. \"Year 1\"):",
            Self::AwaitModule => "Enter the module name:",
            Self::AwaitLessonTitle => "Enter the lesson title:",
            Self::AwaitLessonSummary => "Enter the lesson summary, or \"-\" to skip:",
            Self::AwaitUploadFiles => {
                "Send the lesson files one by one. Put the file type (summary, tp, td, exam) \
                 in the caption. Send /done when finished."
            }
            Self::Finished => "Content saved. Send /admin to add more.",
        }
    }
}

impl fmt::Display for DialogueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Input / Plan
// ---------------------------------------------------------------------------

/// A message received while a dialogue is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input<'a> {
    Text(&'a str),
    Document {
        file_name: &'a str,
        caption: Option<&'a str>,
    },
    /// The `/done` command.
    Done,
}

/// One store insert requested by the dialogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insert {
    Specialty {
        code: String,
        name: String,
    },
    Year {
        specialty_id: i64,
        label: String,
    },
    Module {
        year_id: i64,
        name: String,
    },
    Lesson {
        module_id: i64,
        title: String,
        summary: Option<String>,
    },
    /// The caller copies the blob into the media directory first.
    File {
        lesson_id: i64,
        kind: FileKind,
        original_name: String,
    },
}

impl Insert {
    /// Short confirmation shown after the insert commits.
    #[must_use]
    pub fn confirmation(&self) -> String {
        match self {
            Self::Specialty { name, .. } => format!("Specialty saved: {name}"),
            Self::Year { label, .. } => format!("Year saved: {label}"),
            Self::Module { name, .. } => format!("Module saved: {name}"),
            Self::Lesson { title, .. } => format!("Lesson saved: {title}"),
            Self::File {
                kind,
                original_name,
                ..
            } => format!("File saved: {kind} — {original_name}"),
        }
    }
}

/// What the caller must do with the current message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    Insert(Insert),
    /// Keep the lesson title until the summary arrives; lessons are
    /// inserted whole.
    HoldTitle(String),
    Finish,
}

// ---------------------------------------------------------------------------
// Dialogue
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DialogueError {
    /// Blank text where a value is required. The state does not advance.
    #[error("A value is required at {0}")]
    EmptyInput(DialogueState),

    /// A file or `/done` arrived while text was expected.
    #[error("Expected text at {0}")]
    ExpectedText(DialogueState),

    /// Text arrived while collecting uploads.
    #[error("Expected a document at {0}")]
    ExpectedDocument(DialogueState),

    /// The dialogue already finished.
    #[error("Dialogue already finished")]
    Finished,

    /// An id from an earlier step is missing.
    #[error("Missing {0} from an earlier step")]
    MissingDraft(&'static str),

    /// `advance` was called with a plan that does not belong to this state.
    #[error("Plan does not match state {0}")]
    PlanMismatch(DialogueState),
}

/// Identifiers carried forward from completed steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub specialty_id: Option<i64>,
    pub year_id: Option<i64>,
    pub module_id: Option<i64>,
    pub lesson_title: Option<String>,
    pub lesson_id: Option<i64>,
    pub files_added: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dialogue {
    state: DialogueState,
    draft: Draft,
}

impl Default for Dialogue {
    fn default() -> Self {
        Self::new()
    }
}

impl Dialogue {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: DialogueState::AwaitSpecialty,
            draft: Draft::default(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> DialogueState {
        self.state
    }

    #[must_use]
    pub const fn draft(&self) -> &Draft {
        &self.draft
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state == DialogueState::Finished
    }

    #[must_use]
    pub const fn prompt(&self) -> &'static str {
        self.state.prompt()
    }

    /// Decide what to do with `input` in the current state.
    ///
    /// # Errors
    ///
    /// Returns `DialogueError` when the input is blank, of the wrong kind,
    /// or arrives after the dialogue finished.
    pub fn plan(&self, input: Input<'_>) -> Result<Plan, DialogueError> {
        let state = self.state;
        match state {
            DialogueState::Finished => Err(DialogueError::Finished),
            DialogueState::AwaitUploadFiles => match input {
                Input::Done => Ok(Plan::Finish),
                Input::Text(_) => Err(DialogueError::ExpectedDocument(state)),
                Input::Document { file_name, caption } => {
                    let lesson_id = require(self.draft.lesson_id, "lesson")?;
                    Ok(Plan::Insert(Insert::File {
                        lesson_id,
                        kind: FileKind::from_caption(caption),
                        original_name: file_name.to_string(),
                    }))
                }
            },
            _ => {
                let Input::Text(raw) = input else {
                    return Err(DialogueError::ExpectedText(state));
                };
                let text = raw.trim();
                if text.is_empty() {
                    return Err(DialogueError::EmptyInput(state));
                }
                self.plan_text(text)
            }
        }
    }

    fn plan_text(&self, text: &str) -> Result<Plan, DialogueError> {
        let plan = match self.state {
            DialogueState::AwaitSpecialty => {
                let (code, name) =
                    parse_specialty(text).ok_or(DialogueError::EmptyInput(self.state))?;
                Plan::Insert(Insert::Specialty { code, name })
            }
            DialogueState::AwaitYear => Plan::Insert(Insert::Year {
                specialty_id: require(self.draft.specialty_id, "specialty")?,
                label: text.to_string(),
            }),
            DialogueState::AwaitModule => Plan::Insert(Insert::Module {
                year_id: require(self.draft.year_id, "year")?,
                name: text.to_string(),
            }),
            DialogueState::AwaitLessonTitle => Plan::HoldTitle(text.to_string()),
            DialogueState::AwaitLessonSummary => {
                let title = self
                    .draft
                    .lesson_title
                    .clone()
                    .ok_or(DialogueError::MissingDraft("lesson title"))?;
                Plan::Insert(Insert::Lesson {
                    module_id: require(self.draft.module_id, "module")?,
                    title,
                    summary: (text != NO_SUMMARY).then(|| text.to_string()),
                })
            }
            DialogueState::AwaitUploadFiles | DialogueState::Finished => {
                return Err(DialogueError::PlanMismatch(self.state));
            }
        };
        Ok(plan)
    }

    /// Consume the dialogue after `plan` was carried out.
    ///
    /// `inserted` is the id the store returned for a `Plan::Insert`.
    ///
    /// # Errors
    ///
    /// Returns `DialogueError::PlanMismatch` if `plan` was not produced for
    /// the current state, or `MissingDraft` if an insert id is absent.
    pub fn advance(mut self, plan: &Plan, inserted: Option<i64>) -> Result<Self, DialogueError> {
        let state = self.state;
        let id = || inserted.ok_or(DialogueError::MissingDraft("inserted id"));

        let next = match (state, plan) {
            (DialogueState::AwaitSpecialty, Plan::Insert(Insert::Specialty { .. })) => {
                self.draft.specialty_id = Some(id()?);
                DialogueState::AwaitYear
            }
            (DialogueState::AwaitYear, Plan::Insert(Insert::Year { .. })) => {
                self.draft.year_id = Some(id()?);
                DialogueState::AwaitModule
            }
            (DialogueState::AwaitModule, Plan::Insert(Insert::Module { .. })) => {
                self.draft.module_id = Some(id()?);
                DialogueState::AwaitLessonTitle
            }
            (DialogueState::AwaitLessonTitle, Plan::HoldTitle(title)) => {
                self.draft.lesson_title = Some(title.clone());
                DialogueState::AwaitLessonSummary
            }
            (DialogueState::AwaitLessonSummary, Plan::Insert(Insert::Lesson { .. })) => {
                self.draft.lesson_id = Some(id()?);
                DialogueState::AwaitUploadFiles
            }
            (DialogueState::AwaitUploadFiles, Plan::Insert(Insert::File { .. })) => {
                id()?;
                self.draft.files_added += 1;
                DialogueState::AwaitUploadFiles
            }
            (DialogueState::AwaitUploadFiles, Plan::Finish) => DialogueState::Finished,
            _ => return Err(DialogueError::PlanMismatch(state)),
        };

        debug_assert!(state.can_transition_to(next));
        self.state = next;
        Ok(self)
    }
}

fn require(id: Option<i64>, what: &'static str) -> Result<i64, DialogueError> {
    id.ok_or(DialogueError::MissingDraft(what))
}

/// Split specialty input into `(code, name)`.
///
/// `"code | name"` is taken verbatim (trimmed). A bare name derives its code
/// by lower-casing and replacing spaces with underscores. Returns `None`
/// when either half of a pair is blank.
#[must_use]
pub fn parse_specialty(text: &str) -> Option<(String, String)> {
    let text = text.trim();
    let (code, name) = match text.split_once('|') {
        Some((code, name)) => (code.trim().to_string(), name.trim().to_string()),
        None => (text.to_lowercase().replace(' ', "_"), text.to_string()),
    };
    (!code.is_empty() && !name.is_empty()).then_some((code, name))
}
