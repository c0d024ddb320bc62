//! Repository layer abstraction and persistence implementation.
//!
//! # Responsibility
//! - Define the data access contract for the task list.
//! - Isolate SQLite query details from service/state orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod task_repo;
