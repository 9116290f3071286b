use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid task id: {0}")]
    InvalidTaskId(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid due date '{0}' (expected YYYY-MM-DD)")]
    InvalidDueDate(String),

    #[error("task {0} has blank text")]
    BlankText(u64),

    #[error("duplicate task id: {0}")]
    DuplicateId(u64),

    #[error("unknown filter '{0}' (expected all, pending or completed)")]
    UnknownFilter(String),
}
