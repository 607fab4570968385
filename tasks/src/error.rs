//! Errors surfaced by the task board.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Title of the blocking alert shown when a submission is refused.
pub const ALERT_TITLE: &str = "Error";

/// Why a task could not be created.
///
/// This is the only way an action on the board can fail.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    /// The submitted text was empty or whitespace only
    #[error("Task cannot be empty")]
    EmptyTask,
}

/// A blocking, user-facing notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Short heading
    pub title: String,
    /// Body text
    pub message: String,
}

impl From<ValidationError> for Alert {
    fn from(error: ValidationError) -> Self {
        Self {
            title: ALERT_TITLE.to_string(),
            message: error.to_string(),
        }
    }
}

impl std::fmt::Display for Alert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}
