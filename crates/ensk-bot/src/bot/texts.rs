//! User-facing message text.

pub const GREETING: &str = "Welcome to the ENSK Family bot 🎓\n\
    Pick a specialty to browse its lessons, or use /search <terms> to find one.";
pub const HELP: &str = "/start  browse specialties, years, modules and lessons\n\
    /search <terms>  find lessons by title or summary\n\
    /admin  admin panel (admins only)\n\
    /done  finish uploading files\n\
    /cancel  stop adding content";
pub const UNKNOWN_COMMAND: &str = "Unknown command. Send /help to see what I understand.";
pub const IDLE_TEXT: &str = "Send /start to browse lessons or /search <terms> to find one.";
pub const INTERNAL_ERROR: &str = "Something went wrong on our side. Please try again later.";

pub const NO_CONTENT_BUTTON: &str = "No content yet";
pub const WAIT_FOR_CONTENT: &str = "Nothing here yet. Please wait for the admins to add content.";
pub const UNKNOWN_OPTION: &str = "Unknown option. Send /start to open the menu again.";

pub const SPECIALTY_LEVEL: &str = "Specialty";
pub const YEAR_LEVEL: &str = "Year";
pub const MODULE_LEVEL: &str = "Module";
pub const PICK_YEAR: &str = "Pick a year:";
pub const PICK_MODULE: &str = "Pick a module:";
pub const PICK_LESSON: &str = "Pick a lesson:";
pub const NO_YEARS: &str = "No years yet for this specialty.";
pub const NO_MODULES: &str = "No modules yet for this year.";
pub const NO_LESSONS: &str = "No lessons yet for this module.";
pub const LESSON_NOT_FOUND: &str = "Lesson not found.";
pub const NO_SUMMARY: &str = "No summary yet.";
pub const FILES_HEADER: &str = "Available files:";
pub const FILE_NOT_FOUND: &str = "File not found.";
pub const FILE_GONE: &str = "This file is no longer available on the server.";

pub const SEARCH_USAGE: &str = "Usage: /search <terms>";
pub const SEARCH_EMPTY: &str = "No lessons match your search.";

pub const ADMIN_ONLY: &str = "Sorry, this is for admins only.";
pub const ADMIN_PANEL: &str = "Admin panel:";
pub const ADMIN_ADD_LABEL: &str = "➕ Add content";
pub const ADMIN_LIST_LABEL: &str = "📋 List content";
pub const TREE_HEADER: &str = "specialty | year | module | lesson";
pub const TREE_EMPTY: &str = "No content yet.";

pub const EMPTY_VALUE: &str = "A value is required.";
pub const EXPECTED_TEXT: &str = "Please answer with text.";
pub const EXPECTED_DOCUMENT: &str = "Please send a file, or /done to finish.";
pub const MORE_FILES: &str = "Send another file, or /done to finish.";
pub const NOT_IN_DIALOGUE: &str = "Nothing in progress. Send /admin to add content.";
pub const UPLOAD_OUTSIDE_DIALOGUE: &str =
    "Files are only accepted while adding content. Send /admin to start.";
pub const CANCELLED: &str = "Stopped. Steps already saved are kept.";

/// Listing header: `Level: name` above the prompt, when the parent is known.
pub fn with_parent(level: &str, parent: Option<&str>, prompt: &str) -> String {
    match parent {
        Some(parent) => format!("{level}: {parent}\n{prompt}"),
        None => prompt.to_string(),
    }
}

pub fn lesson_detail(title: &str, summary: Option<&str>) -> String {
    let summary = summary
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(NO_SUMMARY);
    format!("📘 {title}\n\n{summary}")
}

pub fn search_header(hits: usize) -> String {
    format!("Search results ({hits}):")
}

pub fn files_attached(count: u32) -> String {
    match count {
        1 => "1 file attached.".to_string(),
        n => format!("{n} files attached."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lesson_detail_falls_back_to_no_summary() {
        assert_eq!(lesson_detail("Limits", None), "📘 Limits\n\nNo summary yet.");
        assert_eq!(lesson_detail("Limits", Some("  ")), "📘 Limits\n\nNo summary yet.");
        assert_eq!(
            lesson_detail("Limits", Some("epsilon-delta")),
            "📘 Limits\n\nepsilon-delta"
        );
    }

    #[test]
    fn parent_header() {
        assert_eq!(
            with_parent(SPECIALTY_LEVEL, Some("Mathematics"), PICK_YEAR),
            "Specialty: Mathematics\nPick a year:"
        );
        assert_eq!(
            with_parent(YEAR_LEVEL, Some("Year 1"), PICK_MODULE),
            "Year: Year 1\nPick a module:"
        );
        assert_eq!(with_parent(MODULE_LEVEL, None, PICK_LESSON), "Pick a lesson:");
    }
}
