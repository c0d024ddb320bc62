//! View-state holder for the task list screen.
//!
//! # Responsibility
//! - Hold the current list snapshot and loading flag.
//! - Translate UI intents into use-case calls.
//! - Redeliver the full updated list to subscribers after every write.
//! - Republish one-shot notices for transient UI feedback.
//!
//! # Invariants
//! - All persistence goes through the use-case service; never raw SQL here.
//! - Subscribers always observe whole snapshots, never deltas.
//! - Field validation happens here, at the submit boundary, not in storage.

use crate::model::task::{Task, TaskId};
use crate::repo::task_repo::{RepoResult, TaskRepository};
use crate::search::filter::filter_tasks;
use crate::service::task_service::TaskService;
use crate::state::events::{Notice, TaskEvent};
use log::info;
use std::sync::mpsc::{channel, Receiver, Sender};

const NOTICE_ADDED: &str = "Task added successfully";
const NOTICE_UPDATED: &str = "Task updated successfully";
const NOTICE_DELETED: &str = "Task deleted successfully";
const NOTICE_REORDERED: &str = "Reordered";
const NOTICE_FIELDS_TOO_SHORT: &str =
    "Title and description must be at least 3 characters long.";

/// Snapshot of the task list screen state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskListState {
    pub tasks: Vec<Task>,
    pub is_loading: bool,
}

/// Translates UI intents into persistence calls and fans snapshots back out.
pub struct TaskController<R: TaskRepository> {
    service: TaskService<R>,
    state: TaskListState,
    list_subscribers: Vec<Sender<Vec<Task>>>,
    notice_subscribers: Vec<Sender<Notice>>,
}

impl<R: TaskRepository> TaskController<R> {
    /// Creates a controller and loads the initial snapshot.
    pub fn new(service: TaskService<R>) -> RepoResult<Self> {
        let mut controller = Self {
            service,
            state: TaskListState {
                tasks: Vec::new(),
                is_loading: true,
            },
            list_subscribers: Vec::new(),
            notice_subscribers: Vec::new(),
        };
        controller.refresh()?;
        controller.state.is_loading = false;
        Ok(controller)
    }

    /// Current screen state snapshot.
    pub fn state(&self) -> &TaskListState {
        &self.state
    }

    /// Subscribes to list snapshots.
    ///
    /// The receiver immediately observes the current snapshot, then the full
    /// updated list after every successful write.
    pub fn subscribe(&mut self) -> Receiver<Vec<Task>> {
        let (tx, rx) = channel();
        // New collectors replay the current value before any redelivery.
        let _ = tx.send(self.state.tasks.clone());
        self.list_subscribers.push(tx);
        rx
    }

    /// Subscribes to one-shot notices ("Task added successfully", ...).
    pub fn notices(&mut self) -> Receiver<Notice> {
        let (tx, rx) = channel();
        self.notice_subscribers.push(tx);
        rx
    }

    /// Applies the in-memory search filter to the current snapshot.
    pub fn filtered_tasks(&self, query: &str) -> Vec<&Task> {
        filter_tasks(&self.state.tasks, query)
    }

    /// Translates one UI intent into persistence and notification effects.
    ///
    /// Validation failures are user feedback, not errors: they emit a notice
    /// and persist nothing. Persistence failures propagate to the caller.
    pub fn on_event(&mut self, event: TaskEvent) -> RepoResult<()> {
        match event {
            TaskEvent::Add { title, description } => self.add_task(title, description),
            TaskEvent::Edit(task) => self.edit_task(task),
            TaskEvent::Delete(id) => self.delete_task(id),
            TaskEvent::Reorder { from, to } => self.reorder_tasks(from, to),
        }
    }

    fn add_task(&mut self, title: String, description: String) -> RepoResult<()> {
        let task = Task::new(title, description);
        if task.validate().is_err() {
            self.notify(NOTICE_FIELDS_TOO_SHORT);
            return Ok(());
        }

        let id = self.service.insert_task(&task)?;
        info!("event=task_add module=state status=ok id={id}");
        self.refresh()?;
        self.notify(NOTICE_ADDED);
        Ok(())
    }

    fn edit_task(&mut self, task: Task) -> RepoResult<()> {
        if task.validate().is_err() {
            self.notify(NOTICE_FIELDS_TOO_SHORT);
            return Ok(());
        }

        self.service.update_task(&task)?;
        info!("event=task_edit module=state status=ok id={}", task.id);
        self.refresh()?;
        self.notify(NOTICE_UPDATED);
        Ok(())
    }

    fn delete_task(&mut self, id: TaskId) -> RepoResult<()> {
        self.service.delete_task(id)?;
        info!("event=task_delete module=state status=ok id={id}");
        self.refresh()?;
        self.notify(NOTICE_DELETED);
        Ok(())
    }

    fn reorder_tasks(&mut self, from: usize, to: usize) -> RepoResult<()> {
        let len = self.state.tasks.len();
        if from >= len || to >= len {
            // Stale gesture state can outlive the list it indexed into.
            return Ok(());
        }

        let mut ids: Vec<TaskId> = self.state.tasks.iter().map(|task| task.id).collect();
        let moved = ids.remove(from);
        ids.insert(to, moved);

        self.service.persist_order(&ids)?;
        info!("event=task_reorder module=state status=ok from={from} to={to}");
        self.refresh()?;
        self.notify(NOTICE_REORDERED);
        Ok(())
    }

    /// Reloads the snapshot from storage and redelivers it to subscribers.
    fn refresh(&mut self) -> RepoResult<()> {
        self.state.tasks = self.service.list_tasks()?;
        let snapshot = &self.state.tasks;
        self.list_subscribers
            .retain(|subscriber| subscriber.send(snapshot.clone()).is_ok());
        Ok(())
    }

    fn notify(&mut self, message: &str) {
        let notice = Notice::new(message);
        self.notice_subscribers
            .retain(|subscriber| subscriber.send(notice.clone()).is_ok());
    }
}
