use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph, Wrap},
};

const BLOCK_TITLE: &str = "Assistant";

/// Render the response pane the typed reply is revealed into.
///
pub fn response(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme))
        .title(BLOCK_TITLE);
    let paragraph = Paragraph::new(state.response().to_owned())
        .style(styling::normal_text_style(theme))
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(paragraph, size);
}
