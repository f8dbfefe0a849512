//! # Capstone - three small record-keeping tools
//!
//! Each tool is a menu-driven, single-user program:
//! - `tasks`: task list with JSON file persistence
//! - `students`: in-memory student records keyed by ID
//! - `inventory`: products and suppliers in a local SQLite database
//!
//! The library exposes the stores directly so they can be driven without
//! the menus, and the menus are generic over their input and output.

pub mod config;
pub mod inventory;
pub mod menu;
pub mod output;
pub mod prompt;
pub mod students;
pub mod tasks;
pub mod ui;

// Re-exports for convenient access
pub use inventory::InventoryStore;
pub use prompt::Prompter;
pub use students::{StudentDatabase, StudentRecord};
pub use tasks::{Task, TaskManager, TaskStatus};

/// Result type alias for Capstone operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Capstone operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validation(String),

    #[error("Student ID {0} already exists")]
    DuplicateStudent(u32),

    #[error("Supplier ID {0} does not exist")]
    UnknownSupplier(i64),

    #[error("Supplier name \"{0}\" already exists")]
    DuplicateSupplier(String),

    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Input closed")]
    InputClosed,
}

impl Error {
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }
}
