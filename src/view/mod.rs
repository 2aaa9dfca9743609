//! View contracts the interaction controller drives.
//!
//! The controller never touches a terminal directly. The terminal state
//! implements these traits for the real front end; tests implement them with
//! a recording view.

mod tasks;

pub use tasks::{TaskEntry, TaskListContent, TaskListView, EMPTY_PLACEHOLDER, ERROR_PLACEHOLDER};

/// Input field and its character counter.
///
pub trait InputView {
    /// Show the counter text. `over_limit` is set once the input is longer
    /// than the allowed maximum.
    fn show_counter(&mut self, counter: &str, over_limit: bool);
    fn clear_input(&mut self);
}

/// The submit affordance.
///
pub trait SubmitControl {
    fn set_submit_enabled(&mut self, enabled: bool);
}

/// The surface the typed response is revealed into.
///
pub trait ResponseSurface {
    /// Replace the surface content.
    fn show_response(&mut self, text: &str);
}

/// The task list area.
///
pub trait TaskListSurface {
    /// Replace the whole list; never merged with what was shown before.
    fn show_tasks(&mut self, content: TaskListContent);
}

/// Everything the controller needs from a front end.
///
pub trait View: InputView + SubmitControl + ResponseSurface + TaskListSurface + Send + 'static {}

impl<T> View for T where T: InputView + SubmitControl + ResponseSurface + TaskListSurface + Send + 'static {}
