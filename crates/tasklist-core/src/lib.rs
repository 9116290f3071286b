//! Task list engine: the task model, the mutation surface, the derived
//! display view and the snapshot codec used for persistence.

pub mod edit;
pub mod error;
pub mod filter;
pub mod serialize;
pub mod store;
pub mod task;
pub mod view;

pub use edit::EditSession;
pub use error::CoreError;
pub use filter::Filter;
pub use store::{Stats, TaskStore};
pub use task::{Task, TaskId};
