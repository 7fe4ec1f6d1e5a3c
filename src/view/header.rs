//! Header: view tabs and the application title.

use super::styles;
use crate::state::ViewerState;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

/// Application title shown at the right edge when the width allows.
const APP_TITLE: &str = "oav - OpenAPI viewer";

/// Render the tab line. The second header row stays blank.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewerState) {
    let mut spans: Vec<Span<'static>> = Vec::new();

    for (i, view) in state.header_views().into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", styles::MUTED_TEXT));
        }
        let style = if view == state.mode() {
            styles::ACTIVE_TAB
        } else {
            styles::INACTIVE_TAB
        };
        spans.push(Span::styled(format!(" {} ", view.title()), style));
    }

    // Right-align the app title, dropping it entirely on narrow terminals.
    let tabs_width: usize = spans.iter().map(Span::width).sum();
    let title_width = APP_TITLE.width();
    let total = tabs_width + title_width;
    if (area.width as usize) > total + 4 {
        let padding = area.width as usize - total;
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(APP_TITLE, styles::APP_TITLE));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
