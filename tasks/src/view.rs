//! Sectioned view of the board.
//!
//! The board is shown as a "To Do" section, always present, followed by a
//! "Completed" section that only appears once something is completed. Both
//! keep store order. The view is a pure function of the task list and is
//! recomputed from the whole list for every snapshot.

use crate::types::{Task, TaskState};
use serde::Serialize;
use taskboard_core::projection::Projector;

/// Text shown under an empty "To Do" section.
pub const EMPTY_TODO_MESSAGE: &str = "No tasks to do";

/// Which section a task belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum SectionKind {
    /// Tasks not yet completed
    ToDo,
    /// Completed tasks
    Completed,
}

impl SectionKind {
    /// Section heading
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::ToDo => "To Do",
            Self::Completed => "Completed",
        }
    }

    const fn holds(self, task: &Task) -> bool {
        match self {
            Self::ToDo => !task.completed,
            Self::Completed => task.completed,
        }
    }
}

/// A titled, ordered group of tasks with its count
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Which group this is
    pub kind: SectionKind,
    /// Heading text
    pub title: &'static str,
    /// Tasks in store order
    pub tasks: Vec<Task>,
    /// Number of tasks, shown in the header badge
    pub count: usize,
}

impl Section {
    fn collect(kind: SectionKind, tasks: &[Task]) -> Self {
        let tasks: Vec<Task> = tasks.iter().filter(|t| kind.holds(t)).cloned().collect();
        Self {
            kind,
            title: kind.title(),
            count: tasks.len(),
            tasks,
        }
    }

    /// Whether the section has no tasks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Display-ready grouping of the board
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TaskView {
    sections: Vec<Section>,
}

impl TaskView {
    /// "To Do" first, then "Completed" if it has any tasks
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// The "To Do" section
    #[must_use]
    pub fn todo(&self) -> &Section {
        &self.sections[0]
    }

    /// The "Completed" section, absent when nothing is completed
    #[must_use]
    pub fn completed(&self) -> Option<&Section> {
        self.sections.get(1)
    }

    /// Whether the "To Do" section shows its empty indicator
    #[must_use]
    pub fn show_empty_indicator(&self) -> bool {
        self.todo().is_empty()
    }

    /// Total number of tasks across sections
    #[must_use]
    pub fn total(&self) -> usize {
        self.sections.iter().map(|s| s.count).sum()
    }

    /// Tasks in display order (section by section)
    pub fn rows(&self) -> impl Iterator<Item = &Task> {
        self.sections.iter().flat_map(|s| s.tasks.iter())
    }
}

/// Groups tasks into sections.
#[must_use]
pub fn project(tasks: &[Task]) -> TaskView {
    let mut sections = vec![Section::collect(SectionKind::ToDo, tasks)];

    let completed = Section::collect(SectionKind::Completed, tasks);
    if !completed.is_empty() {
        sections.push(completed);
    }

    TaskView { sections }
}

/// [`Projector`] from board state to [`TaskView`]
#[derive(Clone, Copy, Debug, Default)]
pub struct TaskViewProjector;

impl Projector for TaskViewProjector {
    type Input = TaskState;
    type Output = TaskView;

    fn project(&self, input: &TaskState) -> TaskView {
        project(&input.tasks)
    }
}
