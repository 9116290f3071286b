use crate::store::TaskStore;
use crate::task::{Task, TaskId};
use chrono::NaiveDate;

/// An in-progress edit of one task, held by the view and never persisted.
///
/// The draft starts as a copy of the task. Nothing reaches the store until
/// [`EditSession::commit`]; dropping the session (or calling
/// [`EditSession::cancel`]) discards the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    task_id: TaskId,
    draft_text: String,
    draft_due: Option<NaiveDate>,
}

impl EditSession {
    pub fn begin(task: &Task) -> Self {
        Self {
            task_id: task.id,
            draft_text: task.text.clone(),
            draft_due: task.due_date,
        }
    }

    pub fn task_id(&self) -> TaskId {
        self.task_id
    }

    pub fn draft_text(&self) -> &str {
        &self.draft_text
    }

    pub fn draft_due(&self) -> Option<NaiveDate> {
        self.draft_due
    }

    pub fn targets(&self, id: TaskId) -> bool {
        self.task_id == id
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.draft_text = text.into();
    }

    pub fn set_due(&mut self, due: NaiveDate) {
        self.draft_due = Some(due);
    }

    pub fn clear_due(&mut self) {
        self.draft_due = None;
    }

    /// Apply the draft. A blank draft leaves the task untouched.
    pub fn commit(self, store: &mut TaskStore) -> bool {
        store.edit(self.task_id, &self.draft_text, self.draft_due)
    }

    pub fn cancel(self) {}
}
