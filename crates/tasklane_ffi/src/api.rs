//! FFI use-case API for the mobile UI toolkit.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to the UI layer via FRB.
//! - Keep error semantics simple for dialog-driven flows.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Submit-boundary validation runs here, before any storage work.

use log::info;
use std::path::PathBuf;
use std::sync::OnceLock;
use tasklane_core::db::open_db;
use tasklane_core::{
    core_version as core_version_inner, filter_tasks, init_logging as init_logging_inner,
    SqliteTaskRepository, Task, TaskId, TaskService,
};

const DB_FILE_NAME: &str = "tasklane.sqlite3";
const FIELDS_TOO_SHORT_MESSAGE: &str =
    "Title and description must be at least 3 characters long.";
static DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Task row shape mirrored for the UI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub position: i64,
    pub date_added: i64,
}

/// List/search response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListResponse {
    /// Tasks in display order (empty on error).
    pub items: Vec<TaskItem>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Generic action response envelope for dialog submit flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Affected task id, when one exists.
    pub task_id: Option<i64>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl TaskActionResponse {
    fn success(message: impl Into<String>, task_id: Option<i64>) -> Self {
        Self {
            ok: true,
            task_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            task_id: None,
            message: message.into(),
        }
    }
}

/// Lists all tasks in display order.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn list_tasks() -> TaskListResponse {
    match with_service(|service| service.list_tasks()) {
        Ok(tasks) => TaskListResponse {
            message: format!("{} task(s).", tasks.len()),
            items: tasks.into_iter().map(to_task_item).collect(),
        },
        Err(err) => TaskListResponse {
            items: Vec::new(),
            message: format!("list_tasks failed: {err}"),
        },
    }
}

/// Creates a task from the add-dialog submit flow.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Rejects titles/descriptions shorter than 3 characters without touching
///   storage.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn add_task(title: String, description: String) -> TaskActionResponse {
    let task = Task::new(title.trim().to_string(), description.trim().to_string());
    if task.validate().is_err() {
        return TaskActionResponse::failure(FIELDS_TOO_SHORT_MESSAGE);
    }

    match with_service(|service| service.insert_task(&task)) {
        Ok(id) => {
            info!("event=task_add module=ffi status=ok id={id}");
            TaskActionResponse::success("Task added successfully", Some(id))
        }
        Err(err) => TaskActionResponse::failure(format!("add_task failed: {err}")),
    }
}

/// Updates a task from the edit-dialog submit flow.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Rejects titles/descriptions shorter than 3 characters without touching
///   storage.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn edit_task(id: i64, title: String, description: String) -> TaskActionResponse {
    let draft = Task::new(title.trim().to_string(), description.trim().to_string());
    if draft.validate().is_err() {
        return TaskActionResponse::failure(FIELDS_TOO_SHORT_MESSAGE);
    }

    let result = with_service(|service| {
        let Some(mut task) = service.get_task(id)? else {
            return Ok(None);
        };
        task.title = draft.title.clone();
        task.description = draft.description.clone();
        service.update_task(&task)?;
        Ok(Some(task.id))
    });

    match result {
        Ok(Some(task_id)) => {
            info!("event=task_edit module=ffi status=ok id={task_id}");
            TaskActionResponse::success("Task updated successfully", Some(task_id))
        }
        Ok(None) => TaskActionResponse::failure(format!("edit_task failed: task not found: {id}")),
        Err(err) => TaskActionResponse::failure(format!("edit_task failed: {err}")),
    }
}

/// Deletes a task from the confirm-dialog flow.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn delete_task(id: i64) -> TaskActionResponse {
    match with_service(|service| service.delete_task(id)) {
        Ok(()) => {
            info!("event=task_delete module=ffi status=ok id={id}");
            TaskActionResponse::success("Task deleted successfully", Some(id))
        }
        Err(err) => TaskActionResponse::failure(format!("delete_task failed: {err}")),
    }
}

/// Commits a drag release: moves the item at `from_index` to `to_index` and
/// persists dense positions for the whole list.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Out-of-range indices fail without changing storage.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn reorder_tasks(from_index: u32, to_index: u32) -> TaskActionResponse {
    let result = with_service(|service| {
        let tasks = service.list_tasks()?;
        let from = from_index as usize;
        let to = to_index as usize;
        if from >= tasks.len() || to >= tasks.len() {
            return Ok(None);
        }

        let mut ids: Vec<TaskId> = tasks.iter().map(|task| task.id).collect();
        let moved = ids.remove(from);
        ids.insert(to, moved);
        service.persist_order(&ids)?;
        Ok(Some(moved))
    });

    match result {
        Ok(Some(moved)) => {
            info!("event=task_reorder module=ffi status=ok from={from_index} to={to_index}");
            TaskActionResponse::success("Reordered", Some(moved))
        }
        Ok(None) => TaskActionResponse::failure(format!(
            "reorder_tasks failed: indices {from_index}->{to_index} out of range"
        )),
        Err(err) => TaskActionResponse::failure(format!("reorder_tasks failed: {err}")),
    }
}

/// Filters tasks by case-insensitive substring over title or description.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - A blank query returns the full list.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn search_tasks(text: String) -> TaskListResponse {
    match with_service(|service| service.list_tasks()) {
        Ok(tasks) => {
            let hits: Vec<TaskItem> = filter_tasks(&tasks, text.trim())
                .into_iter()
                .cloned()
                .map(to_task_item)
                .collect();
            let message = if hits.is_empty() {
                "No results.".to_string()
            } else {
                format!("Found {} result(s).", hits.len())
            };
            TaskListResponse {
                items: hits,
                message,
            }
        }
        Err(err) => TaskListResponse {
            items: Vec::new(),
            message: format!("search_tasks failed: {err}"),
        },
    }
}

fn resolve_db_path() -> PathBuf {
    DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("TASKLANE_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(DB_FILE_NAME)
        })
        .clone()
}

fn with_service<T>(
    f: impl FnOnce(&TaskService<SqliteTaskRepository<'_>>) -> tasklane_core::RepoResult<T>,
) -> Result<T, String> {
    let db_path = resolve_db_path();
    let conn = open_db(&db_path).map_err(|err| format!("DB open failed: {err}"))?;
    let repo =
        SqliteTaskRepository::try_new(&conn).map_err(|err| format!("repo init failed: {err}"))?;
    let service = TaskService::new(repo);
    f(&service).map_err(|err| err.to_string())
}

fn to_task_item(task: Task) -> TaskItem {
    TaskItem {
        id: task.id,
        title: task.title,
        description: task.description,
        position: task.position,
        date_added: task.date_added,
    }
}
