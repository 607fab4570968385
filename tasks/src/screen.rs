//! Plain-text rendering of the board.
//!
//! Rows are numbered in display order across both sections; the number is
//! how the text front end addresses a row's checkbox and delete controls.

use crate::input::INPUT_PLACEHOLDER;
use crate::types::{Task, TaskId, TaskState};
use crate::view::{SectionKind, TaskView, EMPTY_TODO_MESSAGE};
use std::fmt::Write as _;

/// Screen heading
pub const SCREEN_TITLE: &str = "Tasks";

/// Renders the board to text.
#[must_use]
pub fn render(state: &TaskState, view: &TaskView) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{SCREEN_TITLE}");
    let _ = writeln!(out);

    let input = if state.pending_text.is_empty() {
        INPUT_PLACEHOLDER
    } else {
        state.pending_text.as_str()
    };
    let add = if state.can_submit() { "[+]" } else { "[ ]" };
    let _ = writeln!(out, "> {input}  {add}");

    let mut row = 0;
    for section in view.sections() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{} ({})", section.title, section.count);
        if section.kind == SectionKind::ToDo && section.is_empty() {
            let _ = writeln!(out, "  {EMPTY_TODO_MESSAGE}");
        }
        for task in &section.tasks {
            row += 1;
            let _ = writeln!(out, "{}", render_row(row, task));
        }
    }

    out
}

fn render_row(number: usize, task: &Task) -> String {
    let check = if task.completed { "x" } else { " " };
    format!("  {number}. [{check}] {}", task.text)
}

/// Maps a 1-based row number back to the task it shows.
#[must_use]
pub fn task_at(view: &TaskView, number: usize) -> Option<TaskId> {
    number
        .checked_sub(1)
        .and_then(|index| view.rows().nth(index))
        .map(|task| task.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TaskText;
    use crate::view::project;
    use chrono::Utc;

    fn task(text: &str, completed: bool) -> Task {
        let mut task = Task::new(TaskId::new(), TaskText::parse(text).unwrap(), Utc::now());
        task.completed = completed;
        task
    }

    #[test]
    fn empty_board_shows_placeholder_and_indicator() {
        let state = TaskState::new();
        let text = render(&state, &project(&state.tasks));

        assert_eq!(
            text,
            "Tasks\n\n> Add a new task...  [ ]\n\nTo Do (0)\n  No tasks to do\n"
        );
    }

    #[test]
    fn rows_are_numbered_across_sections() {
        let state = TaskState {
            tasks: vec![task("B", false), task("A", true)],
            pending_text: "C".to_string(),
        };
        let text = render(&state, &project(&state.tasks));

        assert!(text.contains("> C  [+]"));
        assert!(text.contains("To Do (1)\n  1. [ ] B\n"));
        assert!(text.contains("Completed (1)\n  2. [x] A\n"));
    }

    #[test]
    fn task_at_follows_display_order() {
        let tasks = vec![task("B", true), task("A", false)];
        let view = project(&tasks);

        assert_eq!(task_at(&view, 1), Some(tasks[1].id));
        assert_eq!(task_at(&view, 2), Some(tasks[0].id));
        assert_eq!(task_at(&view, 0), None);
        assert_eq!(task_at(&view, 3), None);
    }
}
