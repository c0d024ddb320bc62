//! Task domain model.
//!
//! # Responsibility
//! - Define the single persisted record of the task list.
//! - Own the submit-boundary field validation rule.
//!
//! # Invariants
//! - `id == 0` means "not yet persisted"; the store assigns real ids.
//! - `position` is the display rank; dense 0-based after any reorder.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

/// Store-assigned integer identifier for a task row.
pub type TaskId = i64;

/// Minimum character count for title and description at submit time.
pub const MIN_FIELD_CHARS: usize = 3;

/// A single to-do item record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned id; `0` until first insert.
    pub id: TaskId,
    pub title: String,
    pub description: String,
    /// Display/iteration rank among all tasks.
    pub position: i64,
    /// Creation time in Unix epoch milliseconds.
    pub date_added: i64,
}

/// Submit-boundary validation failure for task fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    TitleTooShort { min_chars: usize },
    DescriptionTooShort { min_chars: usize },
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TitleTooShort { min_chars } => {
                write!(f, "title must be at least {min_chars} characters long")
            }
            Self::DescriptionTooShort { min_chars } => {
                write!(f, "description must be at least {min_chars} characters long")
            }
        }
    }
}

impl Error for TaskValidationError {}

impl Task {
    /// Creates an unpersisted task with defaulted position and creation time.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: 0,
            title: title.into(),
            description: description.into(),
            position: 0,
            date_added: now_epoch_ms(),
        }
    }

    /// Checks the submit-boundary rule: title and description must each reach
    /// [`MIN_FIELD_CHARS`] characters.
    ///
    /// Counts characters, not bytes, so multibyte input is not penalized.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.title.chars().count() < MIN_FIELD_CHARS {
            return Err(TaskValidationError::TitleTooShort {
                min_chars: MIN_FIELD_CHARS,
            });
        }
        if self.description.chars().count() < MIN_FIELD_CHARS {
            return Err(TaskValidationError::DescriptionTooShort {
                min_chars: MIN_FIELD_CHARS,
            });
        }
        Ok(())
    }

    /// Returns whether the task has been persisted (store-assigned id).
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
