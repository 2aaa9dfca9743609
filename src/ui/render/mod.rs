mod footer;
mod input;
mod log;
mod response;
mod tasks;

use self::log::log;
use super::*;
use crate::state::State;
use footer::footer;
use input::input;
use ratatui::layout::{Constraint, Direction, Layout};
use response::response;
use tasks::tasks;

pub use tasks::task_lines;

/// Render the whole screen according to state.
///
pub fn render(frame: &mut Frame, state: &State) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(8),
            Constraint::Length(1),
        ])
        .split(frame.size());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);

    input(frame, rows[0], state);
    response(frame, columns[0], state);
    tasks(frame, columns[1], state);
    log(frame, rows[2], state);
    footer(frame, rows[3], state);
}
