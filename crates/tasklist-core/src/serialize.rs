use crate::error::CoreError;
use crate::task::Task;
use std::collections::HashSet;

/// Encode a full snapshot as a JSON array of task records.
pub fn encode(tasks: &[Task]) -> Result<String, CoreError> {
    Ok(serde_json::to_string(tasks)?)
}

/// Decode a snapshot written by [`encode`].
///
/// The snapshot is accepted only as a whole: a record with a missing field,
/// an unparseable timestamp, blank text or an id seen earlier in the array
/// rejects the entire payload.
pub fn decode(data: &str) -> Result<Vec<Task>, CoreError> {
    let tasks: Vec<Task> = serde_json::from_str(data)?;
    let mut seen = HashSet::with_capacity(tasks.len());
    for task in &tasks {
        if task.text.trim().is_empty() {
            return Err(CoreError::BlankText(task.id.get()));
        }
        if !seen.insert(task.id) {
            return Err(CoreError::DuplicateId(task.id.get()));
        }
    }
    Ok(tasks)
}
