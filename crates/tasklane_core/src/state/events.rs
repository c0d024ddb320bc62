//! UI intent and notification event types.
//!
//! # Responsibility
//! - Name the user intents the view-state holder can translate.
//! - Carry one-shot notification events back to the UI surface.

use crate::model::task::{Task, TaskId};

/// User intent dispatched from the UI surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskEvent {
    /// Submit of the add dialog.
    Add { title: String, description: String },
    /// Submit of the edit dialog with the updated record.
    Edit(Task),
    /// Confirmed delete.
    Delete(TaskId),
    /// Drag release: move the item at `from` to `to` in the current list.
    Reorder { from: usize, to: usize },
}

/// One-shot notification event for transient UI feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
