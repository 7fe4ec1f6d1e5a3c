//! The viewer state engine.
//!
//! One value owns everything the renderer reads: the three collections, the
//! active view, cursor and scroll offset, viewport dimensions, the help
//! modal flag and the pending `gg` prefix. All mutation happens through
//! [`ViewerState::apply`] and [`ViewerState::resize`], each of which
//! re-establishes the invariants (cursor in bounds, scroll offset at most
//! the cursor, cursor row visible) before returning.

use super::key_sequence::KeySequence;
use super::visibility;
use crate::extract::Catalog;
use crate::model::{FoldableRow, KeyAction};
use std::time::Instant;
use tracing::debug;

/// Which collection is being browsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Path+method operations.
    Endpoints,
    /// Reusable components.
    Components,
    /// Named webhooks.
    Webhooks,
}

impl ViewMode {
    /// Tab label for the header.
    pub fn title(&self) -> &'static str {
        match self {
            ViewMode::Endpoints => "Requests",
            ViewMode::Components => "Components",
            ViewMode::Webhooks => "Webhooks",
        }
    }
}

/// The forward cycle order. Backward switching walks it in reverse.
const CYCLE_ORDER: [ViewMode; 3] = [ViewMode::Endpoints, ViewMode::Webhooks, ViewMode::Components];

/// Document metadata shown in the footer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocMeta {
    /// Document title.
    pub title: String,
    /// Version of the described API.
    pub version: String,
}

/// What the event loop should do after applying an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Keep running; redraw.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// All interaction state of the running viewer.
#[derive(Debug, Clone)]
pub struct ViewerState {
    endpoints: Vec<crate::model::Endpoint>,
    components: Vec<crate::model::Component>,
    webhooks: Vec<crate::model::Webhook>,
    meta: DocMeta,
    mode: ViewMode,
    cursor: usize,
    scroll_offset: usize,
    width: u16,
    height: u16,
    show_help: bool,
    key_seq: KeySequence,
}

impl ViewerState {
    /// Build the initial state: endpoints view, cursor and scroll at zero,
    /// default 80x24 viewport until the first resize event arrives.
    pub fn new(catalog: Catalog, meta: DocMeta) -> Self {
        Self {
            endpoints: catalog.endpoints,
            components: catalog.components,
            webhooks: catalog.webhooks,
            meta,
            mode: ViewMode::Endpoints,
            cursor: 0,
            scroll_offset: 0,
            width: 80,
            height: 24,
            show_help: false,
            key_seq: KeySequence::Idle,
        }
    }

    /// Active view.
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Cursor index into the active collection (0 when it is empty).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Index of the first visible entry.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Viewport width in columns.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Viewport height in rows.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Whether the help modal is open.
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Document metadata for the footer.
    pub fn meta(&self) -> &DocMeta {
        &self.meta
    }

    /// The endpoints collection.
    pub fn endpoints(&self) -> &[crate::model::Endpoint] {
        &self.endpoints
    }

    /// The components collection.
    pub fn components(&self) -> &[crate::model::Component] {
        &self.components
    }

    /// The webhooks collection.
    pub fn webhooks(&self) -> &[crate::model::Webhook] {
        &self.webhooks
    }

    /// Length of the active collection.
    pub fn active_len(&self) -> usize {
        match self.mode {
            ViewMode::Endpoints => self.endpoints.len(),
            ViewMode::Components => self.components.len(),
            ViewMode::Webhooks => self.webhooks.len(),
        }
    }

    /// Rendered height of the active collection's row at `index`.
    pub fn row_height(&self, index: usize) -> usize {
        match self.mode {
            ViewMode::Endpoints => self.endpoints[index].rendered_height(),
            ViewMode::Components => self.components[index].rendered_height(),
            ViewMode::Webhooks => self.webhooks[index].rendered_height(),
        }
    }

    /// Rows available to the scrollable list.
    pub fn content_height(&self) -> usize {
        visibility::content_height(self.height)
    }

    /// The view tabs worth showing in the header: every non-empty view,
    /// plus the active one even when its collection is empty.
    pub fn header_views(&self) -> Vec<ViewMode> {
        CYCLE_ORDER
            .into_iter()
            .filter(|&m| self.len_of(m) > 0 || m == self.mode)
            .collect()
    }

    /// Apply one keyboard action at wall-clock time `now`.
    ///
    /// While the help modal is open every action except dismissal is
    /// swallowed; `Ctrl+C` still quits.
    pub fn apply(&mut self, action: KeyAction, now: Instant) -> Outcome {
        if self.show_help {
            match action {
                KeyAction::ToggleHelp | KeyAction::Dismiss => self.show_help = false,
                KeyAction::Quit => return Outcome::Quit,
                _ => {}
            }
            self.key_seq = self.key_seq.interrupt();
            return Outcome::Continue;
        }

        // Any key other than the prefix itself drops a pending `gg` prefix.
        if !matches!(action, KeyAction::TopPrefix) {
            self.key_seq = self.key_seq.interrupt();
        }

        debug!(?action, cursor = self.cursor, "applying action");

        match action {
            KeyAction::MoveUp => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.ensure_visible();
                }
            }
            KeyAction::MoveDown => {
                if self.cursor + 1 < self.active_len() {
                    self.cursor += 1;
                    self.ensure_visible();
                }
            }
            KeyAction::TopPrefix => {
                let (next, fire) = self.key_seq.press_g(now);
                self.key_seq = next;
                if fire {
                    self.cursor = 0;
                    self.scroll_offset = 0;
                }
            }
            KeyAction::JumpBottom => {
                if self.active_len() > 0 {
                    self.cursor = self.active_len() - 1;
                    self.ensure_visible();
                }
            }
            KeyAction::NextView => self.cycle_view(true),
            KeyAction::PrevView => self.cycle_view(false),
            KeyAction::ToggleFold => {
                if self.toggle_fold_at_cursor() {
                    // The row height just changed; the cursor row may now
                    // overflow the window.
                    self.ensure_visible();
                }
            }
            KeyAction::ToggleHelp => self.show_help = true,
            KeyAction::Dismiss | KeyAction::Quit => return Outcome::Quit,
        }

        Outcome::Continue
    }

    /// Adopt new viewport dimensions and keep the cursor row visible.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.ensure_visible();
    }

    fn len_of(&self, mode: ViewMode) -> usize {
        match mode {
            ViewMode::Endpoints => self.endpoints.len(),
            ViewMode::Components => self.components.len(),
            ViewMode::Webhooks => self.webhooks.len(),
        }
    }

    /// Switch to the next non-empty view in cycle order, wrapping past
    /// empty collections. Every switch resets cursor and scroll. With all
    /// collections empty there is nothing to switch to.
    fn cycle_view(&mut self, forward: bool) {
        let start = CYCLE_ORDER
            .iter()
            .position(|&m| m == self.mode)
            .unwrap_or(0);
        for step in 1..=CYCLE_ORDER.len() {
            let index = if forward {
                (start + step) % CYCLE_ORDER.len()
            } else {
                (start + CYCLE_ORDER.len() - step) % CYCLE_ORDER.len()
            };
            let candidate = CYCLE_ORDER[index];
            if self.len_of(candidate) > 0 {
                self.mode = candidate;
                self.cursor = 0;
                self.scroll_offset = 0;
                return;
            }
        }
    }

    /// Flip the fold flag under the cursor. Returns false on an empty view.
    fn toggle_fold_at_cursor(&mut self) -> bool {
        let cursor = self.cursor;
        match self.mode {
            ViewMode::Endpoints => match self.endpoints.get_mut(cursor) {
                Some(entry) => {
                    entry.toggle_fold();
                    true
                }
                None => false,
            },
            ViewMode::Components => match self.components.get_mut(cursor) {
                Some(entry) => {
                    entry.toggle_fold();
                    true
                }
                None => false,
            },
            ViewMode::Webhooks => match self.webhooks.get_mut(cursor) {
                Some(entry) => {
                    entry.toggle_fold();
                    true
                }
                None => false,
            },
        }
    }

    fn ensure_visible(&mut self) {
        let offset = visibility::ensure_visible(
            self.cursor,
            self.scroll_offset,
            self.content_height(),
            |index| self.row_height(index),
        );
        self.scroll_offset = offset;
    }
}
