//! Terminal front end state.
//!
//! Holds what the screen shows. The controller writes to it through the view
//! traits; the terminal event handler edits the input line directly.

use crate::client::SubmitEndpoint;
use crate::logger::LogBuffer;
use crate::ui::Theme;
use crate::view::{InputView, ResponseSurface, SubmitControl, TaskListContent, TaskListSurface};

/// Houses data representative of the screen.
///
pub struct State {
    input: String,
    counter: String,
    over_limit: bool,
    submit_enabled: bool,
    endpoint: SubmitEndpoint,
    response: String,
    tasks: Option<TaskListContent>, // None until the first fetch settles
    logs: LogBuffer,
    theme: Theme,
}

impl State {
    pub fn new(endpoint: SubmitEndpoint, logs: LogBuffer) -> Self {
        State {
            input: String::new(),
            counter: String::new(),
            over_limit: false,
            submit_enabled: false,
            endpoint,
            response: String::new(),
            tasks: None,
            logs,
            theme: Theme::default(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    /// Remove the last character. Returns whether anything was removed.
    ///
    pub fn pop_char(&mut self) -> bool {
        self.input.pop().is_some()
    }

    pub fn counter(&self) -> &str {
        &self.counter
    }

    pub fn is_over_limit(&self) -> bool {
        self.over_limit
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    pub fn endpoint(&self) -> SubmitEndpoint {
        self.endpoint
    }

    /// Switch between the task and event endpoints, returning the new one.
    ///
    pub fn toggle_endpoint(&mut self) -> SubmitEndpoint {
        self.endpoint = self.endpoint.toggled();
        self.endpoint
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    pub fn tasks(&self) -> Option<&TaskListContent> {
        self.tasks.as_ref()
    }

    pub fn logs(&self) -> &LogBuffer {
        &self.logs
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }
}

impl InputView for State {
    fn show_counter(&mut self, counter: &str, over_limit: bool) {
        self.counter = counter.to_owned();
        self.over_limit = over_limit;
    }

    fn clear_input(&mut self) {
        self.input.clear();
    }
}

impl SubmitControl for State {
    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
    }
}

impl ResponseSurface for State {
    fn show_response(&mut self, text: &str) {
        self.response.clear();
        self.response.push_str(text);
    }
}

impl TaskListSurface for State {
    fn show_tasks(&mut self, content: TaskListContent) {
        self.tasks = Some(content);
    }
}
