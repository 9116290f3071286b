//! Persistence for the task list: key/value slot media, the bridge that
//! mirrors a task snapshot into one slot, and the repository that ties a
//! `TaskStore` to that bridge.

pub mod bridge;
pub mod config;
pub mod error;
pub mod lockfile;
pub mod repository;
pub mod slot;

pub use bridge::PersistenceBridge;
pub use error::StoreError;
pub use repository::Repository;
pub use slot::{FileSlots, MemorySlots, SlotStore};
