//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with a single table:
//! - chests(id, video_title, chest_number)

pub mod schema;
pub mod sqlite;
pub mod handle;

pub use sqlite::ChestStore;
pub use handle::StoreHandle;
