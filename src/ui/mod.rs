//! User interface module.
//!
//! This module handles all UI rendering using the `ratatui` library: the
//! input line, the response pane, the task list and the log pane.

type Frame<'a> = ratatui::Frame<'a>;

mod render;
mod theme;
mod widgets;

pub use render::{render, task_lines};
pub use theme::{ColorSpec, Theme};
