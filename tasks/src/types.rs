//! Domain types for the task board.
//!
//! A board is an ordered list of tasks, most recent first, plus the text
//! currently typed into the input field. Tasks are created from that text,
//! toggled between to-do and completed, and deleted. Their text never changes.

use crate::error::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a task
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a new random `TaskId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a `TaskId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Task text: trimmed, never empty.
///
/// Length is not checked here; the input field limits how much can be typed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskText(String);

impl TaskText {
    /// Trims `raw` and accepts it if anything is left.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyTask`] if `raw` is empty or whitespace only.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyTask);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The text as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TaskText {
    type Error = ValidationError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<TaskText> for String {
    fn from(text: TaskText) -> Self {
        text.0
    }
}

impl AsRef<str> for TaskText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TaskText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single task
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: TaskId,
    /// What to do
    pub text: TaskText,
    /// Whether the task is done
    pub completed: bool,
    /// When the task was added
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new, incomplete task
    #[must_use]
    pub const fn new(id: TaskId, text: TaskText, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text,
            completed: false,
            created_at,
        }
    }

    /// Flips the completion flag
    pub const fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// State of one mounted board
///
/// `tasks` is ordered most recent first. `pending_text` is whatever is in the
/// input field and becomes a task only when submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskState {
    /// All tasks, newest first
    pub tasks: Vec<Task>,
    /// Current contents of the input field
    pub pending_text: String,
}

impl TaskState {
    /// Creates a new empty board state
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tasks: Vec::new(),
            pending_text: String::new(),
        }
    }

    /// Returns the number of tasks
    #[must_use]
    pub fn count(&self) -> usize {
        self.tasks.len()
    }

    /// Returns the number of completed tasks
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    /// Returns a task by ID
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Returns the position of a task in store order
    #[must_use]
    pub fn position(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| &t.id == id)
    }

    /// Checks if a task exists
    #[must_use]
    pub fn exists(&self, id: &TaskId) -> bool {
        self.position(id).is_some()
    }

    /// Whether the add control is enabled: the pending text has visible content
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.pending_text.trim().is_empty()
    }
}

/// Everything a user can do on the board
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TaskAction {
    /// Replace the input field contents
    SetPendingText {
        /// New contents
        text: String,
    },

    /// Submit the input field (add button or return key)
    Submit,

    /// Add a task from raw text
    AddTask {
        /// Untrimmed text
        text: String,
    },

    /// Flip a task between to-do and completed
    ToggleComplete {
        /// Task to toggle
        id: TaskId,
    },

    /// Remove a task
    DeleteTask {
        /// Task to delete
        id: TaskId,
    },
}
