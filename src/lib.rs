//! # Chest Tracker - collected chests per video
//!
//! Keeps a count of in-game collectible chests for each recorded video.
//!
//! Chest Tracker provides:
//! - SQLite-backed storage of one `chests` table
//! - A boxed text-table renderer for the terminal
//! - Validating prompts that never hand invalid input to the caller
//! - An interactive session loop tying the two together

pub mod entry;
pub mod storage;
pub mod ui;
pub mod session;
pub mod config;

// Re-exports for convenient access
pub use entry::{ChestEntry, ChestTable, MenuAction};
pub use storage::{ChestStore, StoreHandle};
pub use session::Session;

/// Result type alias for Chest Tracker operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Chest Tracker operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No entry found with id {0}")]
    NotFound(i64),

    #[error("Store is closed")]
    StoreClosed,

    #[error("Input stream closed")]
    InputClosed,
}
