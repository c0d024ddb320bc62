//! Client-side search filter over the in-memory task list.
//!
//! # Responsibility
//! - Case-insensitive substring match against title or description.
//!
//! # Invariants
//! - No indexing; recomputed over the full list on every call.
//! - A blank query matches every task.

use crate::model::task::Task;

/// Returns the tasks matching `query`, preserving list order.
pub fn filter_tasks<'a>(tasks: &'a [Task], query: &str) -> Vec<&'a Task> {
    tasks.iter().filter(|task| matches(task, query)).collect()
}

/// Case-insensitive substring match of `query` against title or description.
pub fn matches(task: &Task, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    task.title.to_lowercase().contains(&needle)
        || task.description.to_lowercase().contains(&needle)
}

#[cfg(test)]
mod tests {
    use super::{filter_tasks, matches};
    use crate::model::task::Task;

    fn task(title: &str, description: &str) -> Task {
        Task::new(title, description)
    }

    #[test]
    fn blank_query_matches_everything() {
        let tasks = vec![task("buy milk", ""), task("call bank", "about the loan")];
        assert_eq!(filter_tasks(&tasks, "").len(), 2);
    }

    #[test]
    fn match_is_case_insensitive_on_title() {
        assert!(matches(&task("Buy Milk", ""), "buy m"));
        assert!(matches(&task("buy milk", ""), "MILK"));
    }

    #[test]
    fn match_covers_description() {
        let tasks = vec![
            task("errands", "pick up the dry cleaning"),
            task("errands two", "water the plants"),
        ];
        let hits = filter_tasks(&tasks, "dry clean");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "errands");
    }

    #[test]
    fn no_match_returns_empty() {
        let tasks = vec![task("buy milk", "two liters")];
        assert!(filter_tasks(&tasks, "cheese").is_empty());
    }
}
