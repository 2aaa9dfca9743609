use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

const SHORTCUTS: &str = "Enter submit | Tab tasks/events | Ctrl-X clear tasks | Ctrl-R refresh | Esc quit";

/// Render the shortcut hints.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let line = Line::from(vec![
        Span::styled(" task-assistant ", styling::banner_style(theme)),
        Span::styled(SHORTCUTS, styling::muted_text_style(theme)),
    ]);
    frame.render_widget(Paragraph::new(line), size);
}
