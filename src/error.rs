//! Error types for Trazo.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Trazo operations.
pub type Result<T> = std::result::Result<T, TrazoError>;

/// Errors that can occur in Trazo.
#[derive(Debug, Error)]
pub enum TrazoError {
    /// Menu selection outside the function catalog.
    #[error("Invalid option: {choice}")]
    InvalidSelection {
        /// The rejected selection, as entered.
        choice: String,
    },

    /// Failed to open a file.
    #[error("Failed to open file: {path}")]
    FileOpen {
        /// Path that could not be opened.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A record in a data file could not be parsed.
    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord {
        /// 1-based line number in the file.
        line: usize,
        /// What was wrong with the record.
        reason: String,
    },

    /// Task not present in the todo list.
    #[error("No such task: {name}")]
    TaskNotFound {
        /// The task that was asked for.
        name: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TrazoError {
    /// Create an InvalidSelection error.
    pub fn invalid_selection(choice: impl Into<String>) -> Self {
        Self::InvalidSelection {
            choice: choice.into(),
        }
    }

    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }

    /// Create a MalformedRecord error.
    pub fn malformed_record(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }

    /// Create a TaskNotFound error.
    pub fn task_not_found(name: impl Into<String>) -> Self {
        Self::TaskNotFound { name: name.into() }
    }
}
