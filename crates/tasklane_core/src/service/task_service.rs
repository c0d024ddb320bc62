//! Task use-case service.
//!
//! # Responsibility
//! - Provide stable use-case entry points for UI-facing callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - The service layer adds no behavior beyond naming/indirection.
//! - Service APIs remain storage-agnostic.

use crate::model::task::{Task, TaskId};
use crate::repo::task_repo::{RepoResult, TaskRepository};

/// Use-case wrapper over the task repository.
pub struct TaskService<R: TaskRepository> {
    repo: R,
}

impl<R: TaskRepository> TaskService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Inserts a task; the store appends it at end-of-list.
    pub fn insert_task(&self, task: &Task) -> RepoResult<TaskId> {
        self.repo.insert_task(task)
    }

    /// Updates an existing task by id.
    pub fn update_task(&self, task: &Task) -> RepoResult<()> {
        self.repo.update_task(task)
    }

    /// Deletes a task by id.
    pub fn delete_task(&self, id: TaskId) -> RepoResult<()> {
        self.repo.delete_task(id)
    }

    /// Gets one task by id.
    pub fn get_task(&self, id: TaskId) -> RepoResult<Option<Task>> {
        self.repo.get_task(id)
    }

    /// Lists all tasks in display order.
    pub fn list_tasks(&self) -> RepoResult<Vec<Task>> {
        self.repo.list_tasks()
    }

    /// Persists a full ordering: `ids[i]` receives position `i`.
    pub fn persist_order(&self, ids: &[TaskId]) -> RepoResult<()> {
        self.repo.persist_order(ids)
    }
}
