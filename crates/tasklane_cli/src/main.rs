//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `tasklane_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use tasklane_core::db::open_db_in_memory;
use tasklane_core::{SqliteTaskRepository, Task, TaskRepository};

fn main() {
    println!("tasklane_core version={}", tasklane_core::core_version());

    // One in-memory write/read cycle proves the storage path end to end.
    match smoke_roundtrip() {
        Ok(count) => println!("tasklane_core smoke tasks={count}"),
        Err(err) => {
            eprintln!("tasklane_core smoke failed: {err}");
            std::process::exit(1);
        }
    }
}

fn smoke_roundtrip() -> Result<usize, Box<dyn std::error::Error>> {
    let conn = open_db_in_memory()?;
    let repo = SqliteTaskRepository::try_new(&conn)?;
    repo.insert_task(&Task::new("smoke task", "inserted by the CLI probe"))?;
    Ok(repo.list_tasks()?.len())
}
