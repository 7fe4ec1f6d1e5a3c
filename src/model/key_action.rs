//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` lives in
/// [`crate::config::KeyBindings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Move the cursor up one entry. Default: k/↑
    MoveUp,
    /// Move the cursor down one entry. Default: j/↓
    MoveDown,
    /// First half of the `gg` jump-to-top sequence. Default: g
    TopPrefix,
    /// Jump the cursor to the last entry. Default: G
    JumpBottom,
    /// Cycle forward through the non-empty views. Default: Tab/L
    NextView,
    /// Cycle backward through the non-empty views. Default: Shift+Tab/H
    PrevView,
    /// Toggle the fold state of the entry under the cursor. Default: Enter/Space
    ToggleFold,
    /// Toggle the help modal. Default: ?
    ToggleHelp,
    /// Close the help modal, or quit when no modal is open. Default: Esc/q
    Dismiss,
    /// Quit unconditionally. Default: Ctrl+C
    Quit,
}
