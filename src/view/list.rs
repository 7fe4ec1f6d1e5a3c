//! The scrollable item list.
//!
//! The visible slice is built by a pure function of the viewer state and a
//! line budget, so the marker/truncation contract is testable without a
//! terminal: a leading marker iff entries are scrolled off the top, a
//! trailing marker iff the window does not reach the collection's end, and
//! never more lines than the budget.

use super::constants::{MORE_ABOVE_MARKER, MORE_BELOW_MARKER};
use super::styles;
use crate::state::{ViewMode, ViewerState};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Render the list pane: bordered block plus the visible slice.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewerState) {
    let block = Block::default().borders(Borders::ALL).title(format!(
        " {} ({}) ",
        state.mode().title(),
        state.active_len()
    ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = build_list_lines(state, inner.height as usize);
    frame.render_widget(Paragraph::new(Text::from(lines)), inner);
}

/// Everything the list needs to draw one row, independent of entry type.
struct RowParts {
    badge: String,
    badge_style: ratatui::style::Style,
    title: String,
    folded: bool,
    detail: String,
}

fn row_parts(state: &ViewerState, index: usize) -> RowParts {
    match state.mode() {
        ViewMode::Endpoints => {
            let entry = &state.endpoints()[index];
            RowParts {
                badge: format!("{:<7}", entry.method.as_str()),
                badge_style: styles::method_style(entry.method),
                title: entry.path.clone(),
                folded: entry.folded,
                detail: entry.detail.clone(),
            }
        }
        ViewMode::Webhooks => {
            let entry = &state.webhooks()[index];
            RowParts {
                badge: format!("{:<7}", entry.method.as_str()),
                badge_style: styles::method_style(entry.method),
                title: entry.name.clone(),
                folded: entry.folded,
                detail: entry.detail.clone(),
            }
        }
        ViewMode::Components => {
            let entry = &state.components()[index];
            let title = if entry.description.is_empty() {
                entry.name.clone()
            } else {
                format!("{} - {}", entry.name, entry.description)
            };
            RowParts {
                badge: format!("{:<16}", format!("{}:", entry.kind.as_str())),
                badge_style: styles::kind_style(entry.kind),
                title,
                folded: entry.folded,
                detail: entry.detail.clone(),
            }
        }
    }
}

fn main_line(parts: &RowParts, under_cursor: bool) -> Line<'static> {
    let icon = if parts.folded { "▶" } else { "▼" };
    let line = Line::from(vec![
        Span::raw(format!("{icon} ")),
        Span::styled(parts.badge.clone(), parts.badge_style),
        Span::raw(" "),
        Span::raw(parts.title.clone()),
    ]);
    if under_cursor {
        line.style(styles::CURSOR_ROW)
    } else {
        line
    }
}

fn marker_line(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(text, styles::MUTED_TEXT))
}

/// Build at most `budget` display lines for the active collection.
///
/// The engine has already chosen a scroll offset that fits the span up to
/// the cursor; this function renders forward from that offset until the
/// budget runs out, then marks any remainder.
pub fn build_list_lines(state: &ViewerState, budget: usize) -> Vec<Line<'static>> {
    let len = state.active_len();
    let offset = state.scroll_offset().min(len);
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut cut_short = false;

    if offset > 0 {
        lines.push(marker_line(MORE_ABOVE_MARKER));
    }

    let mut index = offset;
    while index < len {
        if lines.len() >= budget {
            cut_short = true;
            break;
        }
        let parts = row_parts(state, index);
        lines.push(main_line(&parts, index == state.cursor()));

        if !parts.folded {
            for detail_line in parts.detail.lines() {
                if lines.len() >= budget {
                    cut_short = true;
                    break;
                }
                lines.push(Line::from(Span::styled(
                    format!("  {detail_line}"),
                    styles::DETAIL_TEXT,
                )));
            }
            // Blank separator after the detail block; omitting it at the
            // budget edge loses no content.
            if !cut_short && lines.len() < budget {
                lines.push(Line::default());
            }
        }

        index += 1;
    }

    if cut_short || index < len {
        if lines.len() >= budget {
            lines.truncate(budget.saturating_sub(1));
        }
        lines.push(marker_line(MORE_BELOW_MARKER));
    }

    debug_assert!(lines.len() <= budget.max(1));
    lines
}
