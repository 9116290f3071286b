use crate::bridge::PersistenceBridge;
use crate::config::Config;
use crate::error::StoreError;
use crate::slot::{FileSlots, SlotStore};
use chrono::{DateTime, NaiveDate, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use tasklist_core::edit::EditSession;
use tasklist_core::filter::Filter;
use tasklist_core::store::{Stats, TaskStore};
use tasklist_core::task::{Task, TaskId};
use tasklist_core::view;

pub const TASKLIST_DIR: &str = ".tasklist";

/// A task list bound to its persistence slot.
///
/// The repository is the only way the view mutates tasks. Each mutation
/// that changes the list is followed by a full save; no-ops are not saved.
/// A failed save is logged by the bridge and the in-memory list stays
/// authoritative for the rest of the session.
pub struct Repository<S = FileSlots> {
    store: TaskStore,
    bridge: PersistenceBridge<S>,
}

impl Repository<FileSlots> {
    /// Create `.tasklist/` under `path` and open it.
    pub fn init(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = path.as_ref().join(TASKLIST_DIR);
        if dir.exists() {
            return Err(StoreError::WorkspaceExists(dir.display().to_string()));
        }
        fs::create_dir_all(&dir)?;
        Config::fresh().save(&dir)?;
        Self::open(path)
    }

    /// Open the task list whose `.tasklist/` sits directly under `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = path.as_ref().join(TASKLIST_DIR);
        if !dir.is_dir() {
            return Err(StoreError::WorkspaceNotFound(
                path.as_ref().display().to_string(),
            ));
        }
        let config = Config::load(&dir)?;
        Ok(Self::open_with(FileSlots::new(dir), config.slot_key))
    }

    /// Search upward from `start` for a `.tasklist/` directory and open it.
    pub fn discover(start: impl AsRef<Path>) -> Result<Self, StoreError> {
        let mut current = start.as_ref().to_path_buf();
        loop {
            if current.join(TASKLIST_DIR).is_dir() {
                return Self::open(&current);
            }
            if !current.pop() {
                return Err(StoreError::WorkspaceNotFound(
                    start.as_ref().display().to_string(),
                ));
            }
        }
    }

    /// Directory containing `.tasklist/`.
    pub fn root(&self) -> PathBuf {
        let dir = self.bridge.slots().dir();
        dir.parent().unwrap_or(dir).to_path_buf()
    }
}

impl<S: SlotStore> Repository<S> {
    /// Load the saved snapshot from `slots` once and seed the store with it.
    pub fn open_with(slots: S, key: impl Into<String>) -> Self {
        let bridge = PersistenceBridge::new(slots, key);
        let store = TaskStore::from_tasks(bridge.load());
        Self { store, bridge }
    }

    pub fn add(&mut self, text: &str, due_date: Option<NaiveDate>) -> Option<TaskId> {
        self.add_at(text, due_date, Utc::now())
    }

    pub fn add_at(
        &mut self,
        text: &str,
        due_date: Option<NaiveDate>,
        now: DateTime<Utc>,
    ) -> Option<TaskId> {
        let id = self.store.add_at(text, due_date, now)?;
        self.persist();
        Some(id)
    }

    pub fn toggle(&mut self, id: TaskId) -> bool {
        self.persist_if(|store| store.toggle(id))
    }

    pub fn delete(&mut self, id: TaskId) -> bool {
        self.persist_if(|store| store.delete(id))
    }

    pub fn edit(&mut self, id: TaskId, text: &str, due_date: Option<NaiveDate>) -> bool {
        self.persist_if(|store| store.edit(id, text, due_date))
    }

    pub fn commit_edit(&mut self, session: EditSession) -> bool {
        self.persist_if(|store| session.commit(store))
    }

    pub fn begin_edit(&self, id: TaskId) -> Option<EditSession> {
        self.store.get(id).map(EditSession::begin)
    }

    pub fn query(&self, filter: Filter) -> Vec<&Task> {
        self.store.query(filter)
    }

    /// Filtered tasks in display order.
    pub fn view(&self, filter: Filter) -> Vec<&Task> {
        view::view(self.store.tasks(), filter)
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.store.get(id)
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    pub fn stats(&self) -> Stats {
        self.store.stats()
    }

    pub fn bridge(&self) -> &PersistenceBridge<S> {
        &self.bridge
    }

    pub fn bridge_mut(&mut self) -> &mut PersistenceBridge<S> {
        &mut self.bridge
    }

    fn persist_if(&mut self, mutate: impl FnOnce(&mut TaskStore) -> bool) -> bool {
        let changed = mutate(&mut self.store);
        if changed {
            self.persist();
        }
        changed
    }

    fn persist(&mut self) {
        self.bridge.save(self.store.tasks());
    }
}
