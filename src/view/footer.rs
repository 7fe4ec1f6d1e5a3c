//! Footer: key hints and document identity.

use super::styles;
use crate::state::ViewerState;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Render the footer block under the list.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewerState) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(styles::MUTED_TEXT);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let hints = if state.show_help() {
        Line::default()
    } else {
        Line::from(Span::styled(
            "? help · tab/L views · j/k move · enter fold · q quit",
            styles::MUTED_TEXT,
        ))
    };

    let meta = state.meta();
    let doc_line = Line::from(Span::styled(
        format!("{} v{}", meta.title, meta.version),
        styles::APP_TITLE,
    ));

    frame.render_widget(Paragraph::new(vec![hints, doc_line]), inner);
}
