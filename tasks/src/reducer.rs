//! Reducer logic for the task board.
//!
//! Validates submissions, creates tasks at the head of the list, and applies
//! toggles and deletions by id. Toggles and deletions of ids that are not on
//! the board are silent no-ops: the UI only offers ids it is showing.

use crate::error::ValidationError;
use crate::types::{Task, TaskAction, TaskId, TaskState, TaskText};
use std::sync::Arc;
use taskboard_core::{
    effect::{Effect, Effects},
    environment::{Clock, IdGenerator},
    reducer::Reducer,
    smallvec, SmallVec,
};

/// Environment dependencies for the task reducer
#[derive(Clone)]
pub struct TaskEnvironment {
    /// Clock for creation timestamps
    pub clock: Arc<dyn Clock>,
    /// Source of task identifiers
    pub ids: Arc<dyn IdGenerator>,
}

impl TaskEnvironment {
    /// Creates a new `TaskEnvironment`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { clock, ids }
    }
}

impl std::fmt::Debug for TaskEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskEnvironment").finish_non_exhaustive()
    }
}

/// Reducer for the task board
#[derive(Clone, Debug, Default)]
pub struct TaskReducer;

impl TaskReducer {
    /// Creates a new `TaskReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn add_task(
        state: &mut TaskState,
        raw: &str,
        env: &TaskEnvironment,
    ) -> Result<TaskId, ValidationError> {
        let text = TaskText::parse(raw).inspect_err(|error| {
            tracing::warn!(%error, "Refused task submission");
        })?;

        let id = TaskId::from_uuid(env.ids.next_id());
        state.tasks.insert(0, Task::new(id, text, env.clock.now()));
        state.pending_text.clear();

        tracing::debug!(%id, count = state.tasks.len(), "Task added");
        Ok(id)
    }

    fn toggle_task(state: &mut TaskState, id: TaskId) {
        match state.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.toggle();
                tracing::debug!(%id, completed = task.completed, "Task toggled");
            },
            None => tracing::trace!(%id, "Toggle ignored, no such task"),
        }
    }

    fn delete_task(state: &mut TaskState, id: TaskId) {
        match state.position(&id) {
            Some(index) => {
                state.tasks.remove(index);
                tracing::debug!(%id, count = state.tasks.len(), "Task deleted");
            },
            None => tracing::trace!(%id, "Delete ignored, no such task"),
        }
    }
}

impl Reducer for TaskReducer {
    type State = TaskState;
    type Action = TaskAction;
    type Environment = TaskEnvironment;
    type Error = ValidationError;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Result<Effects<Self::Action>, Self::Error> {
        match action {
            TaskAction::SetPendingText { text } => {
                state.pending_text = text;
                Ok(SmallVec::new())
            },

            TaskAction::Submit => Ok(smallvec![Effect::Send(TaskAction::AddTask {
                text: state.pending_text.clone(),
            })]),

            TaskAction::AddTask { text } => {
                Self::add_task(state, &text, env)?;
                Ok(SmallVec::new())
            },

            TaskAction::ToggleComplete { id } => {
                Self::toggle_task(state, id);
                Ok(SmallVec::new())
            },

            TaskAction::DeleteTask { id } => {
                Self::delete_task(state, id);
                Ok(SmallVec::new())
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskboard_testing::{assertions, test_clock, ReducerTest, SequentialIdGenerator};

    fn create_test_env() -> TaskEnvironment {
        TaskEnvironment::new(Arc::new(test_clock()), Arc::new(SequentialIdGenerator::new()))
    }

    fn id(n: u64) -> TaskId {
        TaskId::from_uuid(SequentialIdGenerator::nth(n))
    }

    fn task(n: u64, text: &str, completed: bool) -> Task {
        let mut task = Task::new(id(n), TaskText::parse(text).unwrap(), test_clock().now());
        task.completed = completed;
        task
    }

    fn state_with(tasks: Vec<Task>) -> TaskState {
        TaskState {
            tasks,
            pending_text: String::new(),
        }
    }

    #[test]
    fn test_add_task_success() {
        ReducerTest::new(TaskReducer::new())
            .with_env(create_test_env())
            .given_state(TaskState {
                tasks: Vec::new(),
                pending_text: "  Buy milk  ".to_string(),
            })
            .when_action(TaskAction::AddTask {
                text: "  Buy milk  ".to_string(),
            })
            .then_state(|state| {
                assert_eq!(state.count(), 1);
                let task = &state.tasks[0];
                assert_eq!(task.id, id(1));
                assert_eq!(task.text.as_str(), "Buy milk");
                assert!(!task.completed);
                assert_eq!(task.created_at, test_clock().now());
                assert!(state.pending_text.is_empty());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_add_task_prepends() {
        ReducerTest::new(TaskReducer::new())
            .with_env(create_test_env())
            .given_state(state_with(vec![task(7, "A", false)]))
            .when_action(TaskAction::AddTask {
                text: "B".to_string(),
            })
            .then_state(|state| {
                let texts: Vec<&str> = state.tasks.iter().map(|t| t.text.as_str()).collect();
                assert_eq!(texts, vec!["B", "A"]);
            })
            .run();
    }

    #[test]
    fn test_add_task_empty_text() {
        ReducerTest::new(TaskReducer::new())
            .with_env(create_test_env())
            .given_state(TaskState {
                tasks: vec![task(1, "A", false)],
                pending_text: "   ".to_string(),
            })
            .when_action(TaskAction::AddTask {
                text: "   ".to_string(),
            })
            .then_error(|error| assert_eq!(error, &ValidationError::EmptyTask))
            .then_state(|state| {
                assert_eq!(state.count(), 1);
                assert_eq!(state.pending_text, "   ");
            })
            .run();
    }

    #[test]
    fn test_submit_sends_pending_text() {
        ReducerTest::new(TaskReducer::new())
            .with_env(create_test_env())
            .given_state(TaskState {
                tasks: Vec::new(),
                pending_text: "Walk dog".to_string(),
            })
            .when_action(TaskAction::Submit)
            .then_effects(|effects| {
                assertions::assert_sends(
                    effects,
                    &[TaskAction::AddTask {
                        text: "Walk dog".to_string(),
                    }],
                );
            })
            .then_state(|state| assert_eq!(state.count(), 0))
            .run();
    }

    #[test]
    fn test_set_pending_text_does_not_validate() {
        ReducerTest::new(TaskReducer::new())
            .with_env(create_test_env())
            .given_state(TaskState::new())
            .when_action(TaskAction::SetPendingText {
                text: "  ".to_string(),
            })
            .then_state(|state| assert_eq!(state.pending_text, "  "))
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_toggle_complete_flips_only_target() {
        ReducerTest::new(TaskReducer::new())
            .with_env(create_test_env())
            .given_state(state_with(vec![task(2, "B", false), task(1, "A", false)]))
            .when_action(TaskAction::ToggleComplete { id: id(1) })
            .then_state(|state| {
                assert_eq!(state.tasks[0], task(2, "B", false));
                assert_eq!(state.tasks[1], task(1, "A", true));
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_toggle_complete_unknown_id() {
        let given = state_with(vec![task(1, "A", false)]);
        let expected = given.clone();

        ReducerTest::new(TaskReducer::new())
            .with_env(create_test_env())
            .given_state(given)
            .when_action(TaskAction::ToggleComplete { id: id(99) })
            .then_state(move |state| assert_eq!(state, &expected))
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_delete_task_preserves_order() {
        ReducerTest::new(TaskReducer::new())
            .with_env(create_test_env())
            .given_state(state_with(vec![
                task(3, "C", false),
                task(2, "B", true),
                task(1, "A", false),
            ]))
            .when_action(TaskAction::DeleteTask { id: id(2) })
            .then_state(|state| {
                assert_eq!(state.tasks, vec![task(3, "C", false), task(1, "A", false)]);
            })
            .run();
    }

    #[test]
    fn test_delete_task_unknown_id() {
        let given = state_with(vec![task(1, "A", true)]);
        let expected = given.clone();

        ReducerTest::new(TaskReducer::new())
            .with_env(create_test_env())
            .given_state(given)
            .when_action(TaskAction::DeleteTask { id: id(5) })
            .then_state(move |state| assert_eq!(state, &expected))
            .run();
    }
}
