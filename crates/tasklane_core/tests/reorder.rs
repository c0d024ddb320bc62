use tasklane_core::db::open_db_in_memory;
use tasklane_core::{RepoError, SqliteTaskRepository, Task, TaskId, TaskRepository};

fn seeded_repo(conn: &rusqlite::Connection, count: usize) -> (SqliteTaskRepository<'_>, Vec<TaskId>) {
    let repo = SqliteTaskRepository::try_new(conn).unwrap();
    let ids = (0..count)
        .map(|index| {
            repo.insert_task(&Task::new(format!("task {index}"), format!("body {index}")))
                .unwrap()
        })
        .collect();
    (repo, ids)
}

fn array_move(ids: &[TaskId], from: usize, to: usize) -> Vec<TaskId> {
    let mut moved = ids.to_vec();
    let id = moved.remove(from);
    moved.insert(to, id);
    moved
}

#[test]
fn persist_order_rewrites_dense_positions() {
    let conn = open_db_in_memory().unwrap();
    let (repo, ids) = seeded_repo(&conn, 5);

    // Move index 1 to index 3.
    let reordered = array_move(&ids, 1, 3);
    repo.persist_order(&reordered).unwrap();

    let tasks = repo.list_tasks().unwrap();
    let listed_ids: Vec<_> = tasks.iter().map(|task| task.id).collect();
    let positions: Vec<_> = tasks.iter().map(|task| task.position).collect();

    assert_eq!(listed_ids, reordered);
    assert_eq!(positions, vec![0, 1, 2, 3, 4]);
    assert_eq!(tasks[3].id, ids[1]);
}

#[test]
fn persist_order_moving_last_to_front() {
    let conn = open_db_in_memory().unwrap();
    let (repo, ids) = seeded_repo(&conn, 4);

    let reordered = array_move(&ids, 3, 0);
    repo.persist_order(&reordered).unwrap();

    let listed_ids: Vec<_> = repo
        .list_tasks()
        .unwrap()
        .iter()
        .map(|task| task.id)
        .collect();
    assert_eq!(listed_ids, vec![ids[3], ids[0], ids[1], ids[2]]);
}

#[test]
fn persist_order_with_unknown_id_rolls_back() {
    let conn = open_db_in_memory().unwrap();
    let (repo, ids) = seeded_repo(&conn, 3);

    let before: Vec<_> = repo
        .list_tasks()
        .unwrap()
        .iter()
        .map(|task| (task.id, task.position))
        .collect();

    let mut broken = array_move(&ids, 0, 2);
    broken[1] = 9999;
    let err = repo.persist_order(&broken).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(9999)));

    let after: Vec<_> = repo
        .list_tasks()
        .unwrap()
        .iter()
        .map(|task| (task.id, task.position))
        .collect();
    assert_eq!(before, after, "failed reorder must not leave partial writes");
}

#[test]
fn persist_order_densifies_after_delete_gap() {
    let conn = open_db_in_memory().unwrap();
    let (repo, ids) = seeded_repo(&conn, 4);

    repo.delete_task(ids[1]).unwrap();

    // Surviving rows keep their old (now gapped) positions until a reorder.
    let survivors: Vec<_> = repo
        .list_tasks()
        .unwrap()
        .iter()
        .map(|task| task.id)
        .collect();
    repo.persist_order(&survivors).unwrap();

    let positions: Vec<_> = repo
        .list_tasks()
        .unwrap()
        .iter()
        .map(|task| task.position)
        .collect();
    assert_eq!(positions, vec![0, 1, 2]);
}
