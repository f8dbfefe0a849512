//! In-memory student database
//!
//! Records live in a `HashMap` keyed by student ID, so lookups by ID are
//! constant time. Ordering is produced on demand: a full sort for GPA
//! order, and a bounded min-heap for top-N selection.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};
use std::time::{Duration, Instant};

use super::record::{is_valid_gpa, StudentRecord, GPA_MAX, GPA_MIN};
use crate::{Error, Result};

/// Operation counters and the duration of the latest timed operations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PerformanceStats {
    pub add_count: usize,
    pub search_count: usize,
    pub sort_count: usize,
    pub last_search: Option<Duration>,
    pub last_sort: Option<Duration>,
    pub last_top_n: Option<Duration>,
}

#[derive(Debug, Default)]
pub struct StudentDatabase {
    students: HashMap<u32, StudentRecord>,
    stats: PerformanceStats,
}

impl StudentDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new record. IDs are unique; GPA must be within 0.0..=4.0.
    pub fn add(&mut self, id: u32, name: &str, gpa: f64, major: &str) -> Result<()> {
        if self.students.contains_key(&id) {
            return Err(Error::DuplicateStudent(id));
        }
        if !is_valid_gpa(gpa) {
            return Err(Error::validation(format!(
                "GPA must be between {GPA_MIN:.1} and {GPA_MAX:.1}, got {gpa}"
            )));
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::validation("Student name cannot be empty"));
        }
        let major = major.trim();
        if major.is_empty() {
            return Err(Error::validation("Major cannot be empty"));
        }

        self.students.insert(id, StudentRecord::new(id, name, gpa, major));
        self.stats.add_count += 1;
        tracing::debug!("Added student {}", id);
        Ok(())
    }

    /// Hash lookup by ID.
    pub fn get(&mut self, id: u32) -> Option<&StudentRecord> {
        let start = Instant::now();
        let found = self.students.get(&id);
        self.stats.search_count += 1;
        self.stats.last_search = Some(start.elapsed());
        found
    }

    /// Case-insensitive partial match on name, ordered by ID.
    pub fn search_by_name(&self, fragment: &str) -> Vec<&StudentRecord> {
        let needle = fragment.to_lowercase();
        let mut found: Vec<_> = self
            .students
            .values()
            .filter(|s| s.name.to_lowercase().contains(&needle))
            .collect();
        found.sort_unstable_by_key(|s| s.id);
        found
    }

    /// All records by ascending GPA; equal GPAs keep ID order.
    pub fn sorted_by_gpa(&mut self) -> Vec<&StudentRecord> {
        let start = Instant::now();
        let mut sorted: Vec<_> = self.students.values().collect();
        sorted.sort_by(|a, b| a.gpa.total_cmp(&b.gpa).then(a.id.cmp(&b.id)));

        self.stats.sort_count += 1;
        self.stats.last_sort = Some(start.elapsed());
        sorted
    }

    /// Mean GPA, or 0.0 for an empty database.
    pub fn average_gpa(&self) -> f64 {
        if self.students.is_empty() {
            return 0.0;
        }
        let total: f64 = self.students.values().map(|s| s.gpa).sum();
        total / self.students.len() as f64
    }

    /// The `n` highest GPAs, best first.
    ///
    /// Keeps a min-heap of at most `n` entries whose root is the weakest
    /// record kept so far, so the scan is O(len * log n).
    pub fn top_by_gpa(&mut self, n: usize) -> Vec<&StudentRecord> {
        if n == 0 {
            return Vec::new();
        }

        let start = Instant::now();
        let mut heap: BinaryHeap<Reverse<Ranked<'_>>> =
            BinaryHeap::with_capacity(n.min(self.students.len()));
        for student in self.students.values() {
            let candidate = Ranked(student);
            if heap.len() < n {
                heap.push(Reverse(candidate));
            } else if let Some(mut weakest) = heap.peek_mut() {
                if candidate > weakest.0 {
                    *weakest = Reverse(candidate);
                }
            }
        }
        // Ascending by Reverse means descending by rank
        let top = heap.into_sorted_vec().into_iter().map(|Reverse(r)| r.0).collect();

        self.stats.last_top_n = Some(start.elapsed());
        top
    }

    /// Case-insensitive exact match on major, ordered by ID.
    pub fn filter_by_major(&self, major: &str) -> Vec<&StudentRecord> {
        let wanted = major.trim().to_lowercase();
        let mut found: Vec<_> = self
            .students
            .values()
            .filter(|s| s.major.to_lowercase() == wanted)
            .collect();
        found.sort_unstable_by_key(|s| s.id);
        found
    }

    /// Returns `false` when no record has this ID.
    pub fn remove(&mut self, id: u32) -> bool {
        self.students.remove(&id).is_some()
    }

    /// Every record, ordered by ID.
    pub fn all(&self) -> Vec<&StudentRecord> {
        let mut all: Vec<_> = self.students.values().collect();
        all.sort_unstable_by_key(|s| s.id);
        all
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn stats(&self) -> &PerformanceStats {
        &self.stats
    }
}

/// Ranking for top-N: higher GPA wins, then lower ID.
struct Ranked<'a>(&'a StudentRecord);

impl Ord for Ranked<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .gpa
            .total_cmp(&other.0.gpa)
            .then_with(|| other.0.id.cmp(&self.0.id))
    }
}

impl PartialOrd for Ranked<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Ranked<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked<'_> {}
