use crate::filter::Filter;
use crate::task::{Task, TaskId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// Counts shown alongside the list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

/// The authoritative, ordered task collection.
///
/// Every mutation reports whether it changed anything; callers use that
/// signal to decide whether the collection needs saving. Blank text and
/// unknown ids are silent no-ops, never errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store from a previously saved snapshot, keeping its order.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Add a task created now. See [`TaskStore::add_at`].
    pub fn add(&mut self, text: &str, due_date: Option<NaiveDate>) -> Option<TaskId> {
        self.add_at(text, due_date, Utc::now())
    }

    /// Add a task created at `now`.
    ///
    /// New tasks are inserted at the head, so storage order is most recent
    /// first. Returns `None` without touching the store when `text` is blank.
    pub fn add_at(
        &mut self,
        text: &str,
        due_date: Option<NaiveDate>,
        now: DateTime<Utc>,
    ) -> Option<TaskId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = TaskId::issue(now, self.largest_id()).unwrap_or_else(|| self.lowest_free_id());
        self.tasks.insert(
            0,
            Task {
                id,
                text: text.to_string(),
                completed: false,
                created_at: now,
                due_date,
            },
        );
        Some(id)
    }

    /// Flip `completed` on the matching task.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        match self.find_mut(id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Remove the matching task.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let len = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() < len
    }

    /// Replace text and due date of the matching task.
    ///
    /// `due_date = None` clears the due date. Blank `text` discards the edit
    /// and leaves the task exactly as it was.
    pub fn edit(&mut self, id: TaskId, text: &str, due_date: Option<NaiveDate>) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        match self.find_mut(id) {
            Some(task) => {
                task.text = text.to_string();
                task.due_date = due_date;
                true
            }
            None => false,
        }
    }

    /// Tasks matching `filter`, in storage order.
    pub fn query(&self, filter: Filter) -> Vec<&Task> {
        self.tasks.iter().filter(|t| filter.matches(t)).collect()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Full snapshot in storage order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn stats(&self) -> Stats {
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        Stats {
            total: self.tasks.len(),
            completed,
            pending: self.tasks.len() - completed,
        }
    }

    fn find_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    fn largest_id(&self) -> Option<TaskId> {
        self.tasks.iter().map(|t| t.id).max()
    }

    /// Smallest id not taken by any task. Always exists, since the list holds
    /// fewer than `u64::MAX` tasks.
    fn lowest_free_id(&self) -> TaskId {
        let mut ids: Vec<u64> = self.tasks.iter().map(|t| t.id.get()).collect();
        ids.sort_unstable();
        let mut candidate = 0;
        for id in ids {
            if id != candidate {
                break;
            }
            candidate += 1;
        }
        TaskId::new(candidate)
    }
}
