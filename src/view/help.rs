//! Help overlay listing the keyboard shortcuts.
//!
//! A centered modal drawn over the base view. While it is open the engine
//! swallows every command except dismissal.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const SHORTCUTS: [(&str, &str); 10] = [
    ("↑/k", "Move up"),
    ("↓/j", "Move down"),
    ("gg", "Jump to the top"),
    ("G", "Jump to the bottom"),
    ("Tab/L", "Next view"),
    ("Shift+Tab/H", "Previous view"),
    ("Enter/Space", "Toggle details"),
    ("?", "Toggle help"),
    ("Esc/q", "Close help, or quit"),
    ("Ctrl+C", "Quit"),
];

/// Render the help overlay centered on the screen.
pub fn render(frame: &mut Frame) {
    let area = frame.area();
    let popup = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    frame.render_widget(Clear, popup);

    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let key_width = SHORTCUTS
        .iter()
        .map(|(key, _)| key.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines = vec![Line::default()];
    for (key, description) in SHORTCUTS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:<key_width$}"), key_style),
            Span::raw(format!("  {description}")),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta)),
        )
        .alignment(Alignment::Left);

    frame.render_widget(paragraph, popup);
}

/// A rect centered in `area` with the given percentage dimensions.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = area.width * percent_x / 100;
    let height = area.height * percent_y / 100;
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
