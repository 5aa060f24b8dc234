//! Task domain model.
//!
//! # Responsibility
//! - Define the immutable task record (`id` + `text`).
//! - Provide text normalization shared by admission and deserialization.
//!
//! # Invariants
//! - `text` is trimmed and contains at least one non-whitespace character.
//! - A `Task` is never mutated after construction; there is no edit path.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Opaque task identifier issued by `TaskListStore`.
///
/// Callers must treat the inner string as an opaque token. Equality is the
/// only meaningful operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TaskId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Rejection reasons for user-entered task text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskTextError {
    /// Input is empty or whitespace only.
    Blank,
}

impl Display for TaskTextError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blank => write!(f, "task text must contain non-whitespace characters"),
        }
    }
}

impl Error for TaskTextError {}

/// Trims raw input and rejects blank results.
///
/// Any Unicode whitespace counts as blank, so `"\u{3000}"` is rejected too.
pub fn normalize_task_text(raw: &str) -> Result<String, TaskTextError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TaskTextError::Blank);
    }
    Ok(trimmed.to_string())
}

/// One user-entered item in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord")]
pub struct Task {
    id: TaskId,
    text: String,
}

impl Task {
    /// Creates a task from an issued id and raw text.
    ///
    /// # Errors
    /// - Returns `TaskTextError::Blank` when `raw_text` trims to nothing.
    pub fn new(id: TaskId, raw_text: &str) -> Result<Self, TaskTextError> {
        let text = normalize_task_text(raw_text)?;
        Ok(Self { id, text })
    }

    /// Builds a task from text already passed through `normalize_task_text`.
    pub(crate) fn from_normalized(id: TaskId, text: String) -> Self {
        Self { id, text }
    }

    pub fn id(&self) -> &TaskId {
        &self.id
    }

    /// Trimmed, non-blank content.
    pub fn text(&self) -> &str {
        self.text.as_str()
    }
}

/// Unchecked wire shape; converted through `Task::new` so decoding enforces
/// the same text rule as admission.
#[derive(Deserialize)]
struct TaskRecord {
    id: TaskId,
    text: String,
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskTextError;

    fn try_from(value: TaskRecord) -> Result<Self, Self::Error> {
        Task::new(value.id, value.text.as_str())
    }
}
