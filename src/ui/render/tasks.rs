use super::Frame;
use crate::state::State;
use crate::ui::theme::Theme;
use crate::ui::widgets::styling;
use crate::view::TaskListContent;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

const BLOCK_TITLE: &str = "Tasks";
const LOADING_PLACEHOLDER: &str = "Loading tasks...";

/// Render the task list according to state.
///
pub fn tasks(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme))
        .title(BLOCK_TITLE);

    let lines = match state.tasks() {
        Some(content) => task_lines(content, theme),
        None => vec![Line::from(Span::styled(
            LOADING_PLACEHOLDER,
            styling::muted_text_style(theme),
        ))],
    };
    let items: Vec<ListItem> = lines.into_iter().map(ListItem::new).collect();
    frame.render_widget(List::new(items).block(block), size);
}

/// Build one line per task in order, or a single placeholder line.
///
pub fn task_lines(content: &TaskListContent, theme: &Theme) -> Vec<Line<'static>> {
    match content {
        TaskListContent::Entries(entries) => entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let style = if entry.completed {
                    styling::completed_task_style(theme)
                } else {
                    styling::normal_text_style(theme)
                };
                Line::from(vec![
                    Span::styled(format!("{}. ", i + 1), styling::muted_text_style(theme)),
                    Span::styled(entry.description.clone(), style),
                ])
            })
            .collect(),
        TaskListContent::Empty => vec![Line::from(Span::styled(
            crate::view::EMPTY_PLACEHOLDER,
            styling::muted_text_style(theme),
        ))],
        TaskListContent::Error => vec![Line::from(Span::styled(
            crate::view::ERROR_PLACEHOLDER,
            styling::error_text_style(theme),
        ))],
    }
}
