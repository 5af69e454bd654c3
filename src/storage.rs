use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::domain::task::Task;

pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn open_default() -> Result<Self> {
        Ok(Self::new(default_data_path()?))
    }

    /// Reads the whole backing file. A missing file (or missing parent
    /// directories) is created empty; a line that does not decode to a
    /// task is skipped rather than failing the load.
    pub fn load(&self) -> io::Result<Vec<Task>> {
        if !self.path.exists() {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&self.path, "")?;
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        let mut tasks = Vec::new();
        for (number, line) in contents.lines().enumerate() {
            match Task::from_line(line) {
                Some(task) => tasks.push(task),
                None => warn!(line = number + 1, "skipping unreadable task line"),
            }
        }
        debug!(count = tasks.len(), path = %self.path.display(), "loaded tasks");
        Ok(tasks)
    }

    /// Rewrites the whole backing file, one line per task in list order.
    pub fn save(&self, tasks: &[Task]) -> io::Result<()> {
        let mut contents = String::new();
        for task in tasks {
            contents.push_str(&task.to_line());
            contents.push('\n');
        }
        fs::write(&self.path, contents)
    }
}

fn default_data_path() -> Result<PathBuf> {
    let base = dirs::data_dir().context("failed to resolve data dir")?;
    Ok(base.join("yaru").join("tasks.txt"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_and_parents_are_created_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("tasks.txt");
        let storage = Storage::new(&path);

        assert!(storage.load().unwrap().is_empty());
        assert!(path.exists());
    }

    #[test]
    fn save_then_load_round_trips_every_variant() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let storage = Storage::new(file.path());

        let mut todo = Task::todo("read book");
        todo.mark_done();
        let tasks = vec![
            todo,
            Task::deadline("return book", "2025-12-29 1800").unwrap(),
            Task::event("meeting", "2025-01-01 0900", "2025-01-01 1030").unwrap(),
        ];
        storage.save(&tasks).unwrap();

        assert_eq!(storage.load().unwrap(), tasks);
    }

    #[test]
    fn unreadable_lines_are_skipped() {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), "T | 0 | keep me\ngarbage\nQ | 1 | wrong tag\n").unwrap();

        let tasks = Storage::new(file.path()).load().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].description(), "keep me");
    }

    #[test]
    fn save_writes_one_line_per_task() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let storage = Storage::new(file.path());

        storage.save(&[Task::todo("a"), Task::todo("b")]).unwrap();

        let contents = fs::read_to_string(file.path()).unwrap();
        assert_eq!(contents, "T | 0 | a\nT | 0 | b\n");
    }
}
