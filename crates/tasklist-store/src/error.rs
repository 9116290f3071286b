use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("core error: {0}")]
    Core(#[from] tasklist_core::error::CoreError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("task list not found (searched upward from {0})")]
    WorkspaceNotFound(String),

    #[error("task list already exists at {0}")]
    WorkspaceExists(String),

    #[error("lock file conflict: {0}")]
    LockConflict(String),

    #[error("invalid slot key '{0}': {1}")]
    InvalidKey(String, String),

    #[error("write refused for slot '{0}'")]
    WriteRefused(String),
}
