//! The todo-list manager.
//!
//! An ordered list of task strings persisted as a flat text file, one task
//! per line. The whole file is rewritten on every mutation.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::error::{Result, TrazoError};

/// Starter tasks used when no list file exists yet.
const STARTER_TASKS: [&str; 5] = ["reading", "writing", "coding", "reviewing", "debugging"];

/// An ordered list of tasks backed by a flat text file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<String>,
}

impl TaskList {
    /// The built-in starter list.
    pub fn starter() -> Self {
        Self {
            tasks: STARTER_TASKS.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Load the list from `path`, falling back to the starter list when the
    /// file does not exist yet.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Self {
                tasks: content
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(str::to_string)
                    .collect(),
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::starter()),
            Err(e) => Err(TrazoError::file_open(path.to_path_buf(), e)),
        }
    }

    /// Write the list to `path`, one task per line.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut content = self.tasks.join("\n");
        if !content.is_empty() {
            content.push('\n');
        }
        fs::write(path, content)?;

        tracing::info!("Saved {} tasks to {}", self.len(), path.display());
        Ok(())
    }

    /// Append a task to the end of the list.
    pub fn add(&mut self, task: impl Into<String>) {
        self.tasks.push(task.into());
    }

    /// Remove the first task matching `task` exactly.
    pub fn remove(&mut self, task: &str) -> Result<()> {
        match self.tasks.iter().position(|t| t == task) {
            Some(index) => {
                self.tasks.remove(index);
                Ok(())
            },
            None => Err(TrazoError::task_not_found(task)),
        }
    }

    /// Number of tasks in the list.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Iterate the tasks in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tasks.iter().map(String::as_str)
    }
}

/// Print the numbered task list with a closing count.
pub fn print_list(out: &mut impl Write, list: &TaskList) -> io::Result<()> {
    for (i, task) in list.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, task)?;
    }
    writeln!(out, "{} tasks", list.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_starts_from_the_starter_list() {
        let dir = tempfile::tempdir().unwrap();
        let list = TaskList::load(&dir.path().join("absent.txt")).unwrap();
        assert_eq!(list, TaskList::starter());
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn add_and_remove_round_trip_through_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.txt");

        let mut list = TaskList::load(&path).unwrap();
        list.add("ship it");
        list.save(&path).unwrap();

        let mut reloaded = TaskList::load(&path).unwrap();
        assert_eq!(reloaded.len(), 6);
        assert_eq!(reloaded.iter().last(), Some("ship it"));

        reloaded.remove("reading").unwrap();
        reloaded.save(&path).unwrap();

        let final_list = TaskList::load(&path).unwrap();
        assert_eq!(final_list.len(), 5);
        assert!(final_list.iter().all(|t| t != "reading"));
    }

    #[test]
    fn remove_only_deletes_the_first_match() {
        let mut list = TaskList::starter();
        list.add("reading");
        list.remove("reading").unwrap();

        assert_eq!(list.iter().next(), Some("writing"));
        assert_eq!(list.iter().last(), Some("reading"));
    }

    #[test]
    fn removing_an_unknown_task_fails() {
        let mut list = TaskList::starter();
        let err = list.remove("nope").unwrap_err();
        assert!(matches!(err, TrazoError::TaskNotFound { .. }));
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn blank_lines_in_the_file_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.txt");
        fs::write(&path, "one\n\n  \ntwo\n").unwrap();

        let list = TaskList::load(&path).unwrap();
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn print_list_numbers_from_one() {
        let mut out = Vec::new();
        print_list(&mut out, &TaskList::starter()).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("1. reading\n"));
        assert!(text.ends_with("5 tasks\n"));
    }
}
