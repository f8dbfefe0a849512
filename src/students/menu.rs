use std::io::{BufRead, Write};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::database::StudentDatabase;
use super::record::{StudentRecord, GPA_MAX, GPA_MIN};
use super::sample::{generate_sample, MAX_SAMPLE};
use crate::menu::Menu;
use crate::prompt::Prompter;
use crate::ui::{self, Icons, SampleProgress};
use crate::Result;

pub struct StudentMenu {
    db: StudentDatabase,
    rng: StdRng,
}

impl StudentMenu {
    pub fn new(db: StudentDatabase) -> Self {
        Self::with_rng(db, StdRng::from_entropy())
    }

    pub fn with_rng(db: StudentDatabase, rng: StdRng) -> Self {
        Self { db, rng }
    }

    pub fn database(&self) -> &StudentDatabase {
        &self.db
    }

    fn add<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> Result<()> {
        let id = p.integer("Enter student ID: ", Some(1u32), None)?;
        let name = p.non_empty("Enter name: ")?;
        let gpa = p.float("Enter GPA (0.0-4.0): ", Some(GPA_MIN), Some(GPA_MAX))?;
        let major = p.non_empty("Enter major: ")?;

        self.db.add(id, &name, gpa, &major)?;
        ui::success(p.out(), "Student added successfully!")?;
        Ok(())
    }

    fn search_by_id<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> Result<()> {
        let id = p.integer::<u32>("Enter student ID: ", None, None)?;
        match self.db.get(id) {
            Some(student) => writeln!(p.out(), "{student}")?,
            None => ui::warn(p.out(), "Student not found")?,
        }
        Ok(())
    }

    fn search_by_name<R: BufRead, W: Write>(&self, p: &mut Prompter<R, W>) -> Result<()> {
        let name = p.non_empty("Enter name to search: ")?;
        let results = self.db.search_by_name(&name);
        writeln!(p.out(), "{} Found {} students:", Icons::SEARCH, results.len())?;
        print_records(p.out(), &results)
    }

    fn sort_by_gpa<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> Result<()> {
        let sorted = self.db.sorted_by_gpa();
        writeln!(p.out(), "{} Sorted by GPA (ascending):", Icons::DOWN)?;
        print_records(p.out(), &sorted)
    }

    fn display_all<R: BufRead, W: Write>(&self, p: &mut Prompter<R, W>) -> Result<()> {
        print_records(p.out(), &self.db.all())
    }

    fn average<R: BufRead, W: Write>(&self, p: &mut Prompter<R, W>) -> Result<()> {
        if self.db.is_empty() {
            ui::empty(p.out(), "No students in system")?;
        } else {
            ui::info(p.out(), "Average GPA", &format!("{:.2}", self.db.average_gpa()))?;
        }
        Ok(())
    }

    fn top<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> Result<()> {
        let n = p.integer("How many top students? ", Some(1usize), None)?;
        let top = self.db.top_by_gpa(n);
        writeln!(p.out(), "{} Top {} students:", Icons::STAR, n)?;
        print_records(p.out(), &top)
    }

    fn filter_by_major<R: BufRead, W: Write>(&self, p: &mut Prompter<R, W>) -> Result<()> {
        let major = p.non_empty("Enter major: ")?;
        let results = self.db.filter_by_major(&major);
        writeln!(p.out(), "{} Found {} students in {}:", Icons::SEARCH, results.len(), major)?;
        print_records(p.out(), &results)
    }

    fn generate<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> Result<()> {
        let count = p.integer("How many sample records? ", Some(1u32), Some(MAX_SAMPLE))?;

        let progress = SampleProgress::new(count as usize);
        let added = generate_sample(&mut self.db, &mut self.rng, count, || progress.inc());
        progress.finish();

        ui::success(p.out(), &format!("Generated {added} sample records"))?;
        if added < count as usize {
            ui::warn(p.out(), &format!("{} IDs were already taken", count as usize - added))?;
        }
        Ok(())
    }

    fn performance<R: BufRead, W: Write>(&self, p: &mut Prompter<R, W>) -> Result<()> {
        let stats = self.db.stats();
        let mut rows = vec![
            ("Total students", self.db.len().to_string()),
            ("Add operations", stats.add_count.to_string()),
            ("Search operations", stats.search_count.to_string()),
            ("Sort operations", stats.sort_count.to_string()),
        ];
        for (label, timing) in [
            ("Last search time", stats.last_search),
            ("Last sort time", stats.last_sort),
            ("Last top-N time", stats.last_top_n),
        ] {
            if let Some(elapsed) = timing {
                rows.push((label, format_seconds(elapsed)));
            }
        }

        ui::section(p.out(), &format!("{} Performance Statistics", Icons::STATS))?;
        writeln!(p.out(), "{}", ui::stats_table(&rows))?;
        Ok(())
    }

    fn remove<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> Result<()> {
        let id = p.integer::<u32>("Enter student ID to remove: ", None, None)?;
        if self.db.remove(id) {
            ui::success(p.out(), "Student removed")?;
        } else {
            ui::warn(p.out(), "Student not found")?;
        }
        Ok(())
    }
}

fn print_records(out: &mut impl Write, records: &[&StudentRecord]) -> Result<()> {
    if records.is_empty() {
        ui::empty(out, "No students to show")?;
    } else {
        writeln!(out, "{}", ui::render_table(records.iter().copied()))?;
    }
    Ok(())
}

fn format_seconds(elapsed: Duration) -> String {
    format!("{:.6} seconds", elapsed.as_secs_f64())
}

impl Menu for StudentMenu {
    const TITLE: &'static str = "Student Records System";
    const WELCOME: &'static str = "Welcome to Student Records System";
    const TAGLINE: &'static str = "Hash-map lookups, O(n log n) sorting and heap-based top-N";
    const FAREWELL: &'static str = "Thank you for using Student Records System!";
    const OPTIONS: &'static [&'static str] = &[
        "Add Student",
        "Search by ID",
        "Search by Name",
        "Sort by GPA",
        "Display All",
        "Calculate Average GPA",
        "Find Top Students",
        "Filter by Major",
        "Generate Sample Data",
        "Performance Statistics",
        "Remove Student",
        "Exit",
    ];

    fn handle<R: BufRead, W: Write>(&mut self, choice: usize, p: &mut Prompter<R, W>) -> Result<()> {
        match choice {
            1 => self.add(p),
            2 => self.search_by_id(p),
            3 => self.search_by_name(p),
            4 => self.sort_by_gpa(p),
            5 => self.display_all(p),
            6 => self.average(p),
            7 => self.top(p),
            8 => self.filter_by_major(p),
            9 => self.generate(p),
            10 => self.performance(p),
            11 => self.remove(p),
            _ => Ok(()),
        }
    }
}
