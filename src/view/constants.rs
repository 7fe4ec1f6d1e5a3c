//! Layout dimension constants for TUI rendering.
//!
//! Centralized so the engine's height accounting and the renderer's layout
//! stay in agreement: the scrollable content budget is the terminal height
//! minus these three chrome values.

/// Rows of the header: tab line plus one blank line.
pub const HEADER_HEIGHT: u16 = 2;

/// Rows of the footer: top border, key hints, document info, padding.
pub const FOOTER_HEIGHT: u16 = 4;

/// Rows consumed by the list block's own chrome (top and bottom border).
pub const LAYOUT_BUFFER: u16 = 2;

/// Width percentage of the help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage of the help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 70;

/// Row shown above the list when entries are scrolled off the top.
pub const MORE_ABOVE_MARKER: &str = "⬆ More items above…";

/// Row shown below the list when the window does not reach the end.
/// Doubles as the truncation marker when a row is cut mid-detail.
pub const MORE_BELOW_MARKER: &str = "⬇ More items below…";
