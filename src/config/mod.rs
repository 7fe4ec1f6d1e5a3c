//! Keyboard bindings.
//!
//! Maps physical key events to domain actions. The bindings are fixed at
//! compile time; the viewer deliberately reads no config file.

use crate::model::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// The incoming event is normalized to press-kind with empty state, so
    /// lookups are insensitive to the extra event fields terminals set.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings
            .get(&KeyEvent::new(key.code, key.modifiers))
            .copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        // Cursor movement, vim keys and arrows.
        bindings.insert(
            KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE),
            KeyAction::MoveUp,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
            KeyAction::MoveUp,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE),
            KeyAction::MoveDown,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
            KeyAction::MoveDown,
        );

        // Jumps. `g` is the first half of the gg sequence; terminals differ
        // on whether shifted letters carry the SHIFT modifier, so `G` is
        // bound both ways.
        bindings.insert(
            KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE),
            KeyAction::TopPrefix,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('G'), KeyModifiers::NONE),
            KeyAction::JumpBottom,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT),
            KeyAction::JumpBottom,
        );

        // View cycling.
        bindings.insert(
            KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE),
            KeyAction::NextView,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('L'), KeyModifiers::NONE),
            KeyAction::NextView,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('L'), KeyModifiers::SHIFT),
            KeyAction::NextView,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::NONE),
            KeyAction::PrevView,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            KeyAction::PrevView,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('H'), KeyModifiers::NONE),
            KeyAction::PrevView,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('H'), KeyModifiers::SHIFT),
            KeyAction::PrevView,
        );

        // Fold toggling.
        bindings.insert(
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            KeyAction::ToggleFold,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE),
            KeyAction::ToggleFold,
        );

        // Help and exit.
        bindings.insert(
            KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE),
            KeyAction::ToggleHelp,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT),
            KeyAction::ToggleHelp,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            KeyAction::Dismiss,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            KeyAction::Dismiss,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            KeyAction::Quit,
        );

        Self { bindings }
    }
}
