//! Single-screen to-do list built on the Taskboard reducer architecture.
//!
//! Users type short tasks, add them, mark them complete and delete them.
//! The screen shows a "To Do" section and, once something is done, a
//! "Completed" section. Everything lives in memory for as long as the
//! board is mounted.
//!
//! - [`reducer`]: the task store logic (add, toggle, delete, pending text)
//! - [`view`]: the sectioned projection of a snapshot
//! - [`board`]: a mounted board tying the Store and the view together
//! - [`input`], [`screen`]: the text field boundary and a plain-text renderer
//!
//! # Quick Start
//!
//! ```
//! use taskboard::{BoardConfig, TaskBoard};
//!
//! let mut board = TaskBoard::mount(&BoardConfig::default());
//!
//! board.type_text("Buy milk");
//! board.submit()?;
//!
//! let state = board.snapshot();
//! let id = state.tasks[0].id;
//! board.toggle_complete(id);
//!
//! let view = board.view();
//! assert!(view.show_empty_indicator());
//! assert_eq!(view.completed().map(|s| s.count), Some(1));
//!
//! // Blank submissions are refused and change nothing
//! assert!(board.add("   ").is_err());
//! # Ok::<(), taskboard::ValidationError>(())
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod input;
pub mod reducer;
pub mod screen;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use board::{TaskBoard, TaskStore};
pub use config::{BoardConfig, ConfigError, IdStrategy};
pub use error::{Alert, ValidationError};
pub use reducer::{TaskEnvironment, TaskReducer};
pub use types::{Task, TaskAction, TaskId, TaskState, TaskText};
pub use view::{project, Section, SectionKind, TaskView, TaskViewProjector};
