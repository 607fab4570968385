//! The mounted board: a Store plus the memoized view over its snapshots.
//!
//! A [`TaskBoard`] is created when the screen mounts and dropped when it
//! unmounts. It is the only writer of its Store. Every method runs one
//! user interaction to completion.

use crate::config::{BoardConfig, IdStrategy};
use crate::error::ValidationError;
use crate::input::clamp_input;
use crate::reducer::{TaskEnvironment, TaskReducer};
use crate::types::{TaskAction, TaskId, TaskState};
use crate::view::{TaskView, TaskViewProjector};
use std::sync::Arc;
use taskboard_core::environment::{
    IdGenerator, RandomIdGenerator, SequentialIdGenerator, SystemClock,
};
use taskboard_core::projection::Memoized;
use taskboard_runtime::{Store, StoreConfig};
use tokio::sync::{broadcast, watch};

/// Store specialised to the task board
pub type TaskStore = Store<TaskState, TaskAction, TaskEnvironment, TaskReducer>;

/// One mounted task board
pub struct TaskBoard {
    store: TaskStore,
    view: Memoized<TaskViewProjector>,
    max_input_chars: usize,
}

impl TaskBoard {
    /// Mounts an empty board with the system clock and the configured id source
    #[must_use]
    pub fn mount(config: &BoardConfig) -> Self {
        let ids: Arc<dyn IdGenerator> = match config.id_strategy {
            IdStrategy::Random => Arc::new(RandomIdGenerator),
            IdStrategy::Sequential => Arc::new(SequentialIdGenerator::new()),
        };
        Self::with_environment(TaskEnvironment::new(Arc::new(SystemClock), ids), config)
    }

    /// Mounts an empty board with an explicit environment
    #[must_use]
    pub fn with_environment(environment: TaskEnvironment, config: &BoardConfig) -> Self {
        let store_config = StoreConfig::default().with_action_buffer(config.action_buffer);
        tracing::debug!(max_input_chars = config.max_input_chars, "Mounting task board");

        Self {
            store: Store::with_config(TaskState::new(), TaskReducer::new(), environment, store_config),
            view: Memoized::new(TaskViewProjector),
            max_input_chars: config.max_input_chars,
        }
    }

    /// Replaces the input field contents, truncated to the input limit
    pub fn type_text(&mut self, raw: &str) -> Arc<TaskState> {
        let text = clamp_input(raw, self.max_input_chars);
        self.apply(TaskAction::SetPendingText { text })
    }

    /// Submits the input field
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyTask`] if the input is blank; nothing changes.
    pub fn submit(&mut self) -> Result<Arc<TaskState>, ValidationError> {
        self.dispatch(TaskAction::Submit)
    }

    /// Adds a task from raw text, bypassing the input field
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyTask`] if `raw` is blank; nothing changes.
    pub fn add(&mut self, raw: &str) -> Result<Arc<TaskState>, ValidationError> {
        self.dispatch(TaskAction::AddTask {
            text: raw.to_string(),
        })
    }

    /// Flips a task between to-do and completed; unknown ids are ignored
    pub fn toggle_complete(&mut self, id: TaskId) -> Arc<TaskState> {
        self.apply(TaskAction::ToggleComplete { id })
    }

    /// Removes a task; unknown ids are ignored
    pub fn delete(&mut self, id: TaskId) -> Arc<TaskState> {
        self.apply(TaskAction::DeleteTask { id })
    }

    /// Current snapshot
    #[must_use]
    pub fn snapshot(&self) -> Arc<TaskState> {
        self.store.snapshot()
    }

    /// Sectioned view of the current snapshot
    pub fn view(&mut self) -> Arc<TaskView> {
        let snapshot = self.store.snapshot();
        self.view.project(&snapshot)
    }

    /// Whether the add control is enabled
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.store.state(TaskState::can_submit)
    }

    /// Characters the input field accepts
    #[must_use]
    pub const fn max_input_chars(&self) -> usize {
        self.max_input_chars
    }

    /// Subscribe to published snapshots
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Arc<TaskState>> {
        self.store.subscribe()
    }

    /// Subscribe to accepted actions
    #[must_use]
    pub fn subscribe_actions(&self) -> broadcast::Receiver<TaskAction> {
        self.store.subscribe_actions()
    }

    fn dispatch(&mut self, action: TaskAction) -> Result<Arc<TaskState>, ValidationError> {
        match self.store.send(action) {
            Ok(snapshot) => Ok(snapshot),
            Err(error) => match error.into_rejection() {
                Some(rejection) => Err(rejection),
                None => {
                    tracing::error!("Task action exceeded feedback depth, ignored");
                    Ok(self.store.snapshot())
                },
            },
        }
    }

    /// Dispatches an action that cannot be refused.
    fn apply(&mut self, action: TaskAction) -> Arc<TaskState> {
        match self.dispatch(action) {
            Ok(snapshot) => snapshot,
            Err(error) => {
                tracing::error!(%error, "Total action was refused");
                self.store.snapshot()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskboard_core::Uuid;

    #[test]
    fn sequential_strategy_numbers_ids_from_one() {
        let config = BoardConfig::default().with_id_strategy(IdStrategy::Sequential);
        let mut board = TaskBoard::mount(&config);

        let state = board.add("A").unwrap();
        assert_eq!(state.tasks[0].id, TaskId::from_uuid(Uuid::from_u128(1)));
    }

    #[test]
    fn typing_is_clamped_to_limit() {
        let config = BoardConfig::default().with_max_input_chars(5);
        let mut board = TaskBoard::mount(&config);

        let state = board.type_text("abcdefgh");
        assert_eq!(state.pending_text, "abcde");
    }

    #[test]
    fn view_is_reused_until_snapshot_changes() {
        let mut board = TaskBoard::mount(&BoardConfig::default());

        let first = board.view();
        let again = board.view();
        assert!(Arc::ptr_eq(&first, &again));

        board.add("A").unwrap();
        let changed = board.view();
        assert!(!Arc::ptr_eq(&first, &changed));
        assert_eq!(changed.todo().count, 1);
    }
}
