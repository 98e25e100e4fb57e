//! In-memory game outcome tally.

pub mod store;
pub mod types;

pub use store::WinRecordStore;
pub use types::{WinRecord, Winner};
