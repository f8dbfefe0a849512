use std::io::{BufRead, Write};

use super::manager::TaskManager;
use super::task::TaskRow;
use crate::menu::Menu;
use crate::prompt::Prompter;
use crate::ui::{self, Icons};
use crate::Result;

pub struct TaskMenu {
    manager: TaskManager,
}

impl TaskMenu {
    pub fn new(manager: TaskManager) -> Self {
        Self { manager }
    }

    pub fn manager(&self) -> &TaskManager {
        &self.manager
    }

    fn add<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> Result<()> {
        let name = p.non_empty("Enter task name: ")?;
        let description = p.non_empty("Enter description: ")?;
        let due_date = p.date("Enter due date (YYYY-MM-DD): ")?;

        let id = self.manager.add(&name, &description, due_date)?.id;
        ui::success(p.out(), &format!("Task {id} added successfully!"))?;
        Ok(())
    }

    fn view<R: BufRead, W: Write>(&self, p: &mut Prompter<R, W>) -> Result<()> {
        if self.manager.is_empty() {
            ui::empty(p.out(), "No tasks found")?;
            return Ok(());
        }

        let table = ui::render_table(self.manager.tasks().iter().map(TaskRow::from));
        writeln!(p.out(), "{table}")?;
        ui::summary_row(
            p.out(),
            &format!("{} Tasks:", Icons::TASK),
            &format!("{} ({} completed)", self.manager.len(), self.manager.completed_count()),
        )?;
        Ok(())
    }

    fn update<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> Result<()> {
        let id = p.integer::<u32>("Enter task ID: ", None, None)?;
        let name = p.non_empty("Enter new name: ")?;
        let description = p.non_empty("Enter new description: ")?;
        let due_date = p.date("Enter new due date (YYYY-MM-DD): ")?;

        if self.manager.update(id, &name, &description, due_date)? {
            ui::success(p.out(), "Task updated!")?;
        } else {
            ui::warn(p.out(), "Task not found")?;
        }
        Ok(())
    }

    fn delete<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> Result<()> {
        let id = p.integer::<u32>("Enter task ID to delete: ", None, None)?;
        if self.manager.delete(id)? {
            ui::success(p.out(), "Task deleted!")?;
        } else {
            ui::warn(p.out(), "Task not found")?;
        }
        Ok(())
    }

    fn complete<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> Result<()> {
        let id = p.integer::<u32>("Enter task ID to complete: ", None, None)?;
        if self.manager.complete(id)? {
            ui::success(p.out(), "Task marked complete!")?;
        } else {
            ui::warn(p.out(), "Task not found")?;
        }
        Ok(())
    }

    fn search<R: BufRead, W: Write>(&self, p: &mut Prompter<R, W>) -> Result<()> {
        let keyword = p.non_empty("Enter search keyword: ")?;
        let results = self.manager.search(&keyword);

        writeln!(p.out(), "{} Found {} tasks", Icons::SEARCH, results.len())?;
        for task in results {
            writeln!(p.out(), "{task}")?;
            writeln!(p.out(), "---")?;
        }
        Ok(())
    }
}

impl Menu for TaskMenu {
    const TITLE: &'static str = "Task Manager";
    const WELCOME: &'static str = "Welcome to Task Manager";
    const TAGLINE: &'static str = "Tasks are saved to a JSON file after every change";
    const FAREWELL: &'static str = "Thank you for using Task Manager!";
    const OPTIONS: &'static [&'static str] = &[
        "Add Task",
        "View Tasks",
        "Update Task",
        "Delete Task",
        "Complete Task",
        "Search Tasks",
        "Exit",
    ];

    fn handle<R: BufRead, W: Write>(&mut self, choice: usize, p: &mut Prompter<R, W>) -> Result<()> {
        match choice {
            1 => self.add(p),
            2 => self.view(p),
            3 => self.update(p),
            4 => self.delete(p),
            5 => self.complete(p),
            6 => self.search(p),
            _ => Ok(()),
        }
    }
}
