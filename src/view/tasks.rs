use crate::client::{Task, TaskMap};

/// Placeholder shown when the backend has no tasks.
///
pub const EMPTY_PLACEHOLDER: &str = "No tasks yet.";

/// Placeholder shown when the task list could not be fetched.
///
pub const ERROR_PLACEHOLDER: &str = "Could not load tasks.";

/// One rendered row of the task list.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskEntry {
    pub id: String,
    pub description: String,
    pub completed: bool,
}

impl From<&Task> for TaskEntry {
    fn from(task: &Task) -> Self {
        TaskEntry {
            id: task.id.clone(),
            description: task.description.clone(),
            completed: task.completed,
        }
    }
}

/// What the task list area shows.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TaskListContent {
    Entries(Vec<TaskEntry>),
    Empty,
    Error,
}

impl TaskListContent {
    /// Return the placeholder text, if this content is a placeholder.
    ///
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            TaskListContent::Entries(_) => None,
            TaskListContent::Empty => Some(EMPTY_PLACEHOLDER),
            TaskListContent::Error => Some(ERROR_PLACEHOLDER),
        }
    }
}

impl Default for TaskListContent {
    fn default() -> Self {
        TaskListContent::Empty
    }
}

/// Builds task list content from a fetched task snapshot.
///
pub struct TaskListView;

impl TaskListView {
    /// Full list in backend order, or the empty placeholder for no tasks.
    ///
    pub fn render(tasks: &TaskMap) -> TaskListContent {
        if tasks.is_empty() {
            return Self::render_empty();
        }
        TaskListContent::Entries(tasks.iter().map(TaskEntry::from).collect())
    }

    pub fn render_empty() -> TaskListContent {
        TaskListContent::Empty
    }

    pub fn render_error() -> TaskListContent {
        TaskListContent::Error
    }
}
