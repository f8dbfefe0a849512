//! Student records - an in-memory collection keyed by student ID

pub mod database;
pub mod menu;
pub mod record;
pub mod sample;

pub use database::{PerformanceStats, StudentDatabase};
pub use menu::StudentMenu;
pub use record::StudentRecord;
pub use sample::generate_sample;
