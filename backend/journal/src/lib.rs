//! Journal-entry persistence for mindtrace.
//!
//! Parsed insight sections the user chooses to keep are saved here as plain
//! journal records, keyed by title. Bookmark/saved state lives in this crate,
//! outside the parser.

pub mod sqlite_store;
pub mod store;
pub mod types;

pub use sqlite_store::SqliteJournal;
pub use store::{InMemoryJournal, JournalStore};
pub use types::JournalEntry;
