use tasklane_core::db::open_db_in_memory;
use tasklane_core::{
    SqliteTaskRepository, TaskController, TaskEvent, TaskService,
};

fn controller(conn: &rusqlite::Connection) -> TaskController<SqliteTaskRepository<'_>> {
    let repo = SqliteTaskRepository::try_new(conn).unwrap();
    TaskController::new(TaskService::new(repo)).unwrap()
}

fn add_event(title: &str, description: &str) -> TaskEvent {
    TaskEvent::Add {
        title: title.to_string(),
        description: description.to_string(),
    }
}

#[test]
fn new_controller_loads_snapshot_and_clears_loading_flag() {
    let conn = open_db_in_memory().unwrap();
    let controller = controller(&conn);

    assert!(controller.state().tasks.is_empty());
    assert!(!controller.state().is_loading);
}

#[test]
fn subscriber_receives_current_snapshot_immediately() {
    let conn = open_db_in_memory().unwrap();
    let mut controller = controller(&conn);
    controller.on_event(add_event("buy milk", "two liters")).unwrap();

    let list_rx = controller.subscribe();
    let snapshot = list_rx.try_recv().expect("replay of current snapshot");
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].title, "buy milk");
}

#[test]
fn every_successful_write_redelivers_the_full_list() {
    let conn = open_db_in_memory().unwrap();
    let mut controller = controller(&conn);
    let list_rx = controller.subscribe();
    assert_eq!(list_rx.try_recv().unwrap().len(), 0);

    controller.on_event(add_event("buy milk", "two liters")).unwrap();
    assert_eq!(list_rx.try_recv().unwrap().len(), 1);

    controller
        .on_event(add_event("call bank", "about the loan"))
        .unwrap();
    let snapshot = list_rx.try_recv().unwrap();
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot[1].title, "call bank");

    let id = snapshot[0].id;
    controller.on_event(TaskEvent::Delete(id)).unwrap();
    let snapshot = list_rx.try_recv().unwrap();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].title, "call bank");

    assert!(list_rx.try_recv().is_err(), "no extra deliveries expected");
}

#[test]
fn add_edit_delete_emit_their_notices() {
    let conn = open_db_in_memory().unwrap();
    let mut controller = controller(&conn);
    let notice_rx = controller.notices();

    controller.on_event(add_event("buy milk", "two liters")).unwrap();
    assert_eq!(
        notice_rx.try_recv().unwrap().message,
        "Task added successfully"
    );

    let mut task = controller.state().tasks[0].clone();
    task.title = "buy oat milk".to_string();
    controller.on_event(TaskEvent::Edit(task.clone())).unwrap();
    assert_eq!(
        notice_rx.try_recv().unwrap().message,
        "Task updated successfully"
    );
    assert_eq!(controller.state().tasks[0].title, "buy oat milk");

    controller.on_event(TaskEvent::Delete(task.id)).unwrap();
    assert_eq!(
        notice_rx.try_recv().unwrap().message,
        "Task deleted successfully"
    );
    assert!(controller.state().tasks.is_empty());
}

#[test]
fn short_fields_emit_validation_notice_and_persist_nothing() {
    let conn = open_db_in_memory().unwrap();
    let mut controller = controller(&conn);
    let list_rx = controller.subscribe();
    let notice_rx = controller.notices();
    assert_eq!(list_rx.try_recv().unwrap().len(), 0);

    controller.on_event(add_event("ab", "fine description")).unwrap();

    assert_eq!(
        notice_rx.try_recv().unwrap().message,
        "Title and description must be at least 3 characters long."
    );
    assert!(controller.state().tasks.is_empty());
    assert!(
        list_rx.try_recv().is_err(),
        "rejected submit must not redeliver the list"
    );
}

#[test]
fn short_description_on_edit_is_rejected_the_same_way() {
    let conn = open_db_in_memory().unwrap();
    let mut controller = controller(&conn);
    controller.on_event(add_event("buy milk", "two liters")).unwrap();
    let notice_rx = controller.notices();

    let mut task = controller.state().tasks[0].clone();
    task.description = "no".to_string();
    controller.on_event(TaskEvent::Edit(task)).unwrap();

    assert_eq!(
        notice_rx.try_recv().unwrap().message,
        "Title and description must be at least 3 characters long."
    );
    assert_eq!(controller.state().tasks[0].description, "two liters");
}

#[test]
fn reorder_event_moves_task_and_notifies() {
    let conn = open_db_in_memory().unwrap();
    let mut controller = controller(&conn);
    for index in 0..4 {
        controller
            .on_event(add_event(&format!("task {index}"), "body text"))
            .unwrap();
    }
    let notice_rx = controller.notices();

    let moved_id = controller.state().tasks[0].id;
    controller.on_event(TaskEvent::Reorder { from: 0, to: 2 }).unwrap();

    assert_eq!(notice_rx.try_recv().unwrap().message, "Reordered");
    let tasks = &controller.state().tasks;
    assert_eq!(tasks[2].id, moved_id);
    let positions: Vec<_> = tasks.iter().map(|task| task.position).collect();
    assert_eq!(positions, vec![0, 1, 2, 3]);
}

#[test]
fn reorder_with_out_of_range_index_is_a_no_op() {
    let conn = open_db_in_memory().unwrap();
    let mut controller = controller(&conn);
    controller.on_event(add_event("only task", "body text")).unwrap();
    let notice_rx = controller.notices();

    controller.on_event(TaskEvent::Reorder { from: 0, to: 7 }).unwrap();
    controller.on_event(TaskEvent::Reorder { from: 7, to: 0 }).unwrap();

    assert!(notice_rx.try_recv().is_err());
    assert_eq!(controller.state().tasks.len(), 1);
}

#[test]
fn filtered_tasks_searches_the_in_memory_snapshot() {
    let conn = open_db_in_memory().unwrap();
    let mut controller = controller(&conn);
    controller
        .on_event(add_event("errands", "pick up the dry cleaning"))
        .unwrap();
    controller
        .on_event(add_event("groceries", "milk and bread"))
        .unwrap();

    let hits = controller.filtered_tasks("DRY");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "errands");

    assert_eq!(controller.filtered_tasks("").len(), 2);
    assert!(controller.filtered_tasks("nothing here").is_empty());
}

#[test]
fn dropped_subscribers_are_pruned_without_breaking_writes() {
    let conn = open_db_in_memory().unwrap();
    let mut controller = controller(&conn);

    let list_rx = controller.subscribe();
    drop(list_rx);

    controller.on_event(add_event("buy milk", "two liters")).unwrap();
    assert_eq!(controller.state().tasks.len(), 1);
}
