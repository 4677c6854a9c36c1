//! Repository modules implementing reads and inserts for every content level.
//!
//! Each module adds methods to `ContentStore` via `impl ContentStore` blocks.

pub mod file;
pub mod lesson;
pub mod module;
pub mod quiz;
pub mod search;
pub mod specialty;
pub mod tree;
pub mod year;
