//! Task record and its status

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::{Error, Result};

/// Due dates are plain calendar days.
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Pending,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Completed => "completed",
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, TaskStatus::Completed)
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single task in the list.
///
/// Serialized field names are the on-disk format of the tasks file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub status: TaskStatus,
}

impl Task {
    pub fn new(id: u32, name: impl Into<String>, description: impl Into<String>, due_date: NaiveDate) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            due_date,
            status: TaskStatus::Pending,
        }
    }

    /// Case-insensitive match against name or description.
    /// `needle` must already be lowercase.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.description.to_lowercase().contains(needle)
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Description: {}", self.description)?;
        writeln!(f, "Due Date: {}", self.due_date.format(DUE_DATE_FORMAT))?;
        write!(f, "Status: {}", self.status)
    }
}

/// Table row used by the task listing.
#[derive(Tabled)]
pub struct TaskRow {
    #[tabled(rename = "ID")]
    pub id: u32,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Description")]
    pub description: String,
    #[tabled(rename = "Due")]
    pub due_date: String,
    #[tabled(rename = "Status")]
    pub status: &'static str,
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            name: task.name.clone(),
            description: task.description.clone(),
            due_date: task.due_date.format(DUE_DATE_FORMAT).to_string(),
            status: task.status.as_str(),
        }
    }
}

/// Parse a `YYYY-MM-DD` due date, rejecting impossible calendar days.
pub fn parse_due_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DUE_DATE_FORMAT).map_err(|_| Error::InvalidDate(s.trim().to_string()))
}
