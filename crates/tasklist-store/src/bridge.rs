use crate::error::StoreError;
use crate::slot::SlotStore;
use tasklist_core::serialize;
use tasklist_core::task::Task;

/// Slot key used when the workspace config does not name one.
pub const DEFAULT_SLOT_KEY: &str = "tasks";

/// Mirrors a full task snapshot into a single slot of a [`SlotStore`].
///
/// The bridge never edits individual tasks: it writes whole snapshots and
/// reads whole snapshots back.
pub struct PersistenceBridge<S> {
    slots: S,
    key: String,
}

impl<S: SlotStore> PersistenceBridge<S> {
    pub fn new(slots: S, key: impl Into<String>) -> Self {
        Self {
            slots,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn slots(&self) -> &S {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> &mut S {
        &mut self.slots
    }

    /// Serialize `tasks` and overwrite the slot.
    pub fn try_save(&mut self, tasks: &[Task]) -> Result<(), StoreError> {
        let data = serialize::encode(tasks)?;
        self.slots.set(&self.key, &data)?;
        tracing::debug!(key = %self.key, count = tasks.len(), "saved tasks");
        Ok(())
    }

    /// Like [`PersistenceBridge::try_save`], but a failure is logged and
    /// swallowed. Returns whether the write landed.
    pub fn save(&mut self, tasks: &[Task]) -> bool {
        match self.try_save(tasks) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "failed to save tasks");
                false
            }
        }
    }

    /// Read the slot. `Ok(None)` when nothing was ever saved.
    pub fn try_load(&self) -> Result<Option<Vec<Task>>, StoreError> {
        match self.slots.get(&self.key)? {
            Some(data) => Ok(Some(serialize::decode(&data)?)),
            None => Ok(None),
        }
    }

    /// Load the saved snapshot, falling back to an empty list when the slot
    /// is absent, unreadable or corrupt.
    pub fn load(&self) -> Vec<Task> {
        match self.try_load() {
            Ok(Some(tasks)) => {
                tracing::debug!(key = %self.key, count = tasks.len(), "loaded tasks");
                tasks
            }
            Ok(None) => {
                tracing::debug!(key = %self.key, "no saved tasks, starting empty");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "discarding unreadable task data");
                Vec::new()
            }
        }
    }
}
