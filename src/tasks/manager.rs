//! Task list with JSON file persistence

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::task::{Task, TaskStatus};
use crate::{Error, Result};

/// On-disk document. `next_id` is stored so deleted IDs are never reused.
#[derive(Debug, Deserialize)]
struct TaskFile {
    tasks: Vec<Task>,
    next_id: u32,
}

#[derive(Serialize)]
struct TaskFileRef<'a> {
    tasks: &'a [Task],
    next_id: u32,
}

/// In-memory task list, saved to its file after every mutation.
pub struct TaskManager {
    tasks: Vec<Task>,
    next_id: u32,
    path: PathBuf,
}

impl TaskManager {
    /// Load tasks from `path`.
    ///
    /// A missing file starts an empty list. An unreadable or malformed file
    /// is logged and also starts an empty list; it is replaced on the next save.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut manager = Self {
            tasks: Vec::new(),
            next_id: 1,
            path,
        };

        match manager.load() {
            Ok(true) => tracing::info!("Loaded {} tasks from {}", manager.tasks.len(), manager.path.display()),
            Ok(false) => tracing::debug!("No task file at {}, starting empty", manager.path.display()),
            Err(e) => {
                tracing::warn!("Error loading tasks from {}: {}", manager.path.display(), e);
                tracing::warn!("Starting with empty task list");
            }
        }
        manager
    }

    /// Returns `Ok(false)` when there is no file yet.
    fn load(&mut self) -> Result<bool> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(e.into()),
        };

        let file: TaskFile = serde_json::from_str(&contents)?;
        // A hand-edited file may carry a stale counter
        let max_id = file.tasks.iter().map(|t| t.id).max().unwrap_or(0);
        let after_max = max_id
            .checked_add(1)
            .ok_or_else(|| Error::validation(format!("task ID {max_id} leaves no room for new tasks")))?;
        self.next_id = file.next_id.max(after_max);
        self.tasks = file.tasks;
        Ok(true)
    }

    /// Write the whole list to disk.
    pub fn save(&self) -> Result<()> {
        let doc = TaskFileRef {
            tasks: &self.tasks,
            next_id: self.next_id,
        };
        let json = serde_json::to_string_pretty(&doc)?;
        std::fs::write(&self.path, json)?;
        tracing::debug!("Saved {} tasks to {}", self.tasks.len(), self.path.display());
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    /// All tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn add(&mut self, name: &str, description: &str, due_date: NaiveDate) -> Result<&Task> {
        let (name, description) = validate_text(name, description)?;

        let id = self.next_id;
        let next_id = id
            .checked_add(1)
            .ok_or_else(|| Error::validation("No task IDs left"))?;
        self.tasks.push(Task::new(id, name, description, due_date));
        self.next_id = next_id;
        self.save()?;

        tracing::debug!("Added task {}", id);
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    /// Returns `false` when no task has this ID.
    pub fn update(&mut self, id: u32, name: &str, description: &str, due_date: NaiveDate) -> Result<bool> {
        let (name, description) = validate_text(name, description)?;

        let Some(task) = self.find_mut(id) else {
            return Ok(false);
        };
        task.name = name.to_string();
        task.description = description.to_string();
        task.due_date = due_date;
        self.save()?;
        Ok(true)
    }

    pub fn delete(&mut self, id: u32) -> Result<bool> {
        let Some(pos) = self.tasks.iter().position(|t| t.id == id) else {
            return Ok(false);
        };
        self.tasks.remove(pos);
        self.save()?;
        Ok(true)
    }

    pub fn complete(&mut self, id: u32) -> Result<bool> {
        let Some(task) = self.find_mut(id) else {
            return Ok(false);
        };
        task.status = TaskStatus::Completed;
        self.save()?;
        Ok(true)
    }

    pub fn find(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn find_mut(&mut self, id: u32) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Case-insensitive keyword search over name and description.
    pub fn search(&self, keyword: &str) -> Vec<&Task> {
        let needle = keyword.to_lowercase();
        self.tasks.iter().filter(|t| t.matches(&needle)).collect()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.status.is_completed()).count()
    }
}

fn validate_text<'a>(name: &'a str, description: &'a str) -> Result<(&'a str, &'a str)> {
    let name = name.trim();
    let description = description.trim();
    if name.is_empty() {
        return Err(Error::validation("Task name cannot be empty"));
    }
    if description.is_empty() {
        return Err(Error::validation("Task description cannot be empty"));
    }
    Ok((name, description))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::parse_due_date;
    use pretty_assertions::assert_eq;

    fn date(s: &str) -> NaiveDate {
        parse_due_date(s).unwrap()
    }

    fn manager_in(dir: &tempfile::TempDir) -> TaskManager {
        TaskManager::open(dir.path().join("tasks.json"))
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let dir = tempfile::tempdir().unwrap();
        let mut manager = manager_in(&dir);

        assert_eq!(manager.add("A", "first", date("2025-01-01")).unwrap().id, 1);
        assert_eq!(manager.add("B", "second", date("2025-01-02")).unwrap().id, 2);
        assert_eq!(manager.next_id(), 3);
    }

    #[test]
    fn test_add_rejects_blank_fields() {
        let dir = tempfile::tempdir().unwrap();
        let mut manager = manager_in(&dir);

        assert!(matches!(manager.add("  ", "desc", date("2025-01-01")), Err(Error::Validation(_))));
        assert!(matches!(manager.add("name", "", date("2025-01-01")), Err(Error::Validation(_))));
        assert!(manager.is_empty());
        assert_eq!(manager.next_id(), 1);
    }

    #[test]
    fn test_persists_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut manager = manager_in(&dir);
            manager.add("Report", "Write the report", date("2025-03-01")).unwrap();
            manager.add("Slides", "Prepare slides", date("2025-03-02")).unwrap();
            manager.complete(1).unwrap();
        }

        let manager = manager_in(&dir);
        assert_eq!(manager.len(), 2);
        assert_eq!(manager.find(1).unwrap().status, TaskStatus::Completed);
        assert_eq!(manager.find(2).unwrap().due_date, date("2025-03-02"));
        assert_eq!(manager.next_id(), 3);
    }

    #[test]
    fn test_deleted_ids_are_not_reused() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut manager = manager_in(&dir);
            manager.add("A", "a", date("2025-01-01")).unwrap();
            manager.add("B", "b", date("2025-01-01")).unwrap();
            assert!(manager.delete(2).unwrap());
        }

        let mut manager = manager_in(&dir);
        assert_eq!(manager.add("C", "c", date("2025-01-01")).unwrap().id, 3);
    }

    #[test]
    fn test_missing_id_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let mut manager = manager_in(&dir);
        manager.add("A", "a", date("2025-01-01")).unwrap();

        assert!(manager.find(99).is_none());
        assert!(!manager.delete(99).unwrap());
        assert!(!manager.complete(99).unwrap());
        assert!(!manager.update(99, "X", "x", date("2025-01-01")).unwrap());
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_update_changes_fields() {
        let dir = tempfile::tempdir().unwrap();
        let mut manager = manager_in(&dir);
        manager.add("A", "a", date("2025-01-01")).unwrap();

        assert!(manager.update(1, " Renamed ", "new text", date("2026-06-30")).unwrap());
        let task = manager.find(1).unwrap();
        assert_eq!(task.name, "Renamed");
        assert_eq!(task.description, "new text");
        assert_eq!(task.due_date, date("2026-06-30"));
        assert_eq!(task.status, TaskStatus::Pending);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let mut manager = manager_in(&dir);
        manager.add("Buy milk", "groceries", date("2025-01-01")).unwrap();
        manager.add("Email", "Reply to MILKMAN", date("2025-01-01")).unwrap();
        manager.add("Gym", "legs", date("2025-01-01")).unwrap();

        let ids: Vec<u32> = manager.search("Milk").iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert!(manager.search("swim").is_empty());
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        std::fs::write(&path, "{ not json").unwrap();

        let mut manager = TaskManager::open(&path);
        assert!(manager.is_empty());
        manager.add("A", "a", date("2025-01-01")).unwrap();

        let reloaded = TaskManager::open(&path);
        assert_eq!(reloaded.len(), 1);
    }

    #[test]
    fn test_stale_next_id_is_repaired() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        std::fs::write(
            &path,
            r#"{"tasks":[{"id":5,"name":"A","description":"a","due_date":"2025-01-01","status":"pending"}],"next_id":2}"#,
        )
        .unwrap();

        let manager = TaskManager::open(&path);
        assert_eq!(manager.next_id(), 6);
    }

    #[test]
    fn test_max_task_id_in_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        std::fs::write(
            &path,
            r#"{"tasks":[{"id":4294967295,"name":"A","description":"a","due_date":"2025-01-01"}],"next_id":1}"#,
        )
        .unwrap();

        let manager = TaskManager::open(&path);
        assert!(manager.is_empty());
        assert_eq!(manager.next_id(), 1);
    }

    #[test]
    fn test_exhausted_id_space_rejects_add() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        std::fs::write(&path, r#"{"tasks":[],"next_id":4294967295}"#).unwrap();

        let mut manager = TaskManager::open(&path);
        assert_eq!(manager.next_id(), u32::MAX);
        assert!(matches!(manager.add("A", "a", date("2025-01-01")), Err(Error::Validation(_))));
        assert!(manager.is_empty());
        assert_eq!(manager.next_id(), u32::MAX);
    }

    #[test]
    fn test_file_format() {
        let dir = tempfile::tempdir().unwrap();
        let mut manager = manager_in(&dir);
        manager.add("A", "a", date("2025-01-01")).unwrap();

        let raw = std::fs::read_to_string(manager.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["next_id"], 2);
        assert_eq!(value["tasks"][0]["name"], "A");
        assert!(raw.contains("\n  \"tasks\""));
    }
}
