//! Style tables for list rows.
//!
//! The method and kind palettes are exhaustive matches over their enums, so
//! a new variant fails to compile until it is given a style. The muted
//! style doubles as the fallback look for the rarely-used methods.

use crate::model::{ComponentKind, HttpMethod};
use ratatui::style::{Color, Modifier, Style};

/// Background highlight of the cursor row.
pub const CURSOR_ROW: Style = Style::new().bg(Color::DarkGray);

/// Indented detail block under an unfolded row.
pub const DETAIL_TEXT: Style = Style::new().fg(Color::Gray);

/// Scroll markers and other de-emphasized chrome.
pub const MUTED_TEXT: Style = Style::new().fg(Color::DarkGray);

/// Active view tab in the header.
pub const ACTIVE_TAB: Style = Style::new()
    .fg(Color::White)
    .bg(Color::Magenta)
    .add_modifier(Modifier::BOLD);

/// Inactive view tab in the header.
pub const INACTIVE_TAB: Style = Style::new().fg(Color::DarkGray);

/// Right-aligned application title in the header.
pub const APP_TITLE: Style = Style::new()
    .fg(Color::Magenta)
    .add_modifier(Modifier::BOLD);

/// Badge style for an HTTP method.
pub fn method_style(method: HttpMethod) -> Style {
    let color = match method {
        HttpMethod::Get => Color::Green,
        HttpMethod::Post => Color::Blue,
        HttpMethod::Put => Color::Yellow,
        HttpMethod::Delete => Color::Red,
        HttpMethod::Patch => Color::Magenta,
        HttpMethod::Head | HttpMethod::Options | HttpMethod::Trace => Color::DarkGray,
    };
    Style::new().fg(color).add_modifier(Modifier::BOLD)
}

/// Badge style for a component kind.
pub fn kind_style(kind: ComponentKind) -> Style {
    let color = match kind {
        ComponentKind::Schema => Color::Green,
        ComponentKind::RequestBody => Color::Blue,
        ComponentKind::Response => Color::Yellow,
        ComponentKind::Parameter => Color::Magenta,
        ComponentKind::Header => Color::Red,
        ComponentKind::SecurityScheme => Color::DarkGray,
    };
    Style::new().fg(color).add_modifier(Modifier::BOLD)
}
