//! Display ordering of the task list.
//!
//! The view is recomputed from the store on every read and never written
//! back.

use crate::filter::Filter;
use crate::task::Task;
use std::cmp::Ordering;

/// Total display order:
/// 1. pending before completed,
/// 2. tasks with a due date before tasks without,
/// 3. earlier due date first,
/// 4. among undated tasks, most recently created first.
///
/// Undated tasks created at the same instant fall back to descending id.
pub fn display_order(a: &Task, b: &Task) -> Ordering {
    a.completed
        .cmp(&b.completed)
        .then_with(|| match (a.due_date, b.due_date) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => b
                .created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id)),
        })
}

/// Filter `tasks` and sort the survivors for display.
pub fn view<'a, I>(tasks: I, filter: Filter) -> Vec<&'a Task>
where
    I: IntoIterator<Item = &'a Task>,
{
    let mut shown: Vec<&Task> = tasks.into_iter().filter(|t| filter.matches(t)).collect();
    shown.sort_by(|a, b| display_order(a, b));
    shown
}
