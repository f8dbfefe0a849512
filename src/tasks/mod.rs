//! Task manager - a task list persisted as one JSON document
//!
//! File layout:
//! ```json
//! { "tasks": [ { "id", "name", "description", "due_date", "status" } ], "next_id": 3 }
//! ```

pub mod manager;
pub mod menu;
pub mod task;

pub use manager::TaskManager;
pub use menu::TaskMenu;
pub use task::{parse_due_date, Task, TaskStatus, DUE_DATE_FORMAT};
