//! Saved-application persistence
//!
//! SQLite-backed storage of generated applications and their content.

pub mod key;
pub mod storage;

pub use key::app_id;
pub use storage::AppStore;
