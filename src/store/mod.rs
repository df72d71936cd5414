//! In-memory task store backed by a CSV log file.
//!
//! The store owns the full ordered list of tasks for a session and is passed
//! by reference to the search and browsing layers. Ordering invariant: the
//! list is non-decreasing by date after every insertion, with equal dates
//! keeping their original relative order.

use std::path::{Path, PathBuf};

use crate::errors::AppResult;
use crate::models::Task;

pub const CSV_HEADER: [&str; 4] = ["Date", "Title", "Time", "Notes"];

#[derive(Debug)]
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Create an empty store bound to a log file path, without touching disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            tasks: Vec::new(),
        }
    }

    /// Load the store from its log file. A missing file is not an error:
    /// the app starts empty and creates the file on the first save.
    pub fn load(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        let mut store = Self::new(&path);

        if !path.exists() {
            return Ok(store);
        }

        let mut reader = csv::Reader::from_path(&path)?;
        for row in reader.deserialize() {
            let task: Task = row?;
            store.insert_sorted(task);
        }

        Ok(store)
    }

    /// Full rewrite of the log file: header row first, then every task in
    /// store order.
    pub fn save(&self) -> AppResult<()> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;

        writer.write_record(CSV_HEADER)?;
        for task in &self.tasks {
            writer.serialize(task)?;
        }
        writer.flush()?;

        Ok(())
    }

    /// Insert keeping the list sorted by date: scan backward from the end,
    /// shifting every task with a strictly greater date one slot right, then
    /// place the new task in the gap. Stable for equal dates.
    pub fn insert_sorted(&mut self, task: Task) {
        let mut i = self.tasks.len();
        while i > 0 && self.tasks[i - 1].date > task.date {
            i -= 1;
        }
        self.tasks.insert(i, task);
    }

    /// Replace the task at `index` in place. Does not re-sort: an edit keeps
    /// its slot even when the date changed.
    pub fn replace(&mut self, index: usize, task: Task) {
        self.tasks[index] = task;
    }

    /// Remove and return the task at `index`. Later tasks shift left.
    pub fn remove(&mut self, index: usize) -> Task {
        self.tasks.remove(index)
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
