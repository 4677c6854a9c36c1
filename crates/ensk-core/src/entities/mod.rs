//! Entity structs for the content hierarchy.
//!
//! Each entity maps to a table in the libSQL database: specialty → year →
//! module → lesson → file, plus quizzes hanging off lessons. All structs
//! derive `Serialize` and `Deserialize` so the CLI can print them as JSON.

mod file;
mod lesson;
mod module;
mod quiz;
mod specialty;
mod year;

pub use file::FileEntry;
pub use lesson::{Lesson, SearchHit};
pub use module::Module;
pub use quiz::Quiz;
pub use specialty::Specialty;
pub use year::Year;
