use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{
        block::{Position, Title},
        Block, Borders, Paragraph,
    },
};

/// Render the input line, its counter and the submit endpoint.
///
pub fn input(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let counter_style = if state.is_over_limit() {
        styling::over_limit_style(theme)
    } else {
        styling::muted_text_style(theme)
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(
            Title::from(Span::styled(state.counter().to_owned(), counter_style))
                .position(Position::Bottom)
                .alignment(Alignment::Right),
        );
    if state.is_submit_enabled() {
        block = block
            .border_style(styling::active_block_border_style(theme))
            .title(Span::styled(
                format!("Ask ({})", state.endpoint().label()),
                styling::active_block_title_style(theme),
            ));
    } else {
        block = block
            .border_style(styling::normal_block_border_style(theme))
            .title(format!("Ask ({}) - waiting", state.endpoint().label()));
    }

    let text = Line::from(vec![
        Span::styled(state.input().to_owned(), styling::normal_text_style(theme)),
        Span::styled("_", styling::muted_text_style(theme)),
    ]);
    frame.render_widget(Paragraph::new(text).block(block), size);
}
