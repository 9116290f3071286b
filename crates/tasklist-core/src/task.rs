use crate::error::CoreError;
use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a task, unique within one collection.
///
/// Issued from the creation time in milliseconds since the Unix epoch and
/// bumped past the largest id already present, so ids only ever grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// Pick the id for a task created at `now`, given the largest id in use.
    ///
    /// `None` when `largest` is already `u64::MAX` and nothing above it is left.
    pub fn issue(now: DateTime<Utc>, largest: Option<TaskId>) -> Option<Self> {
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        match largest {
            Some(TaskId(max)) if millis <= max => max.checked_add(1).map(Self),
            _ => Some(Self(millis)),
        }
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| CoreError::InvalidTaskId(s.to_string()))
    }
}

/// A single entry in the task list.
///
/// `id` and `created_at` are fixed at creation; `text` is always stored
/// trimmed and never blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    #[serde(
        default,
        deserialize_with = "deserialize_due_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<NaiveDate>,
}

impl Task {
    /// Overdue means pending with a due date strictly before `today`.
    pub fn is_overdue_on(&self, today: NaiveDate) -> bool {
        !self.completed && self.due_date.is_some_and(|due| due < today)
    }

    /// [`Task::is_overdue_on`] against today's local calendar date.
    pub fn is_overdue(&self) -> bool {
        self.is_overdue_on(Local::now().date_naive())
    }
}

/// Parse a due date as written by the user: `YYYY-MM-DD`.
pub fn parse_due_date(s: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| CoreError::InvalidDueDate(s.to_string()))
}

/// Reconstruct a stored due date.
///
/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp (reduced to its local
/// calendar date). Empty strings are read as absent.
fn parse_stored_due_date(s: &str) -> Result<Option<NaiveDate>, CoreError> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(Some(date));
    }
    DateTime::parse_from_rfc3339(s)
        .map(|ts| Some(ts.with_timezone(&Local).date_naive()))
        .map_err(|_| CoreError::InvalidDueDate(s.to_string()))
}

fn deserialize_due_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) => parse_stored_due_date(&raw).map_err(serde::de::Error::custom),
    }
}
