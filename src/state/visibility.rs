//! Height accounting and the cursor-visibility scan.
//!
//! Rows have variable height: a folded row is one line, an unfolded row is
//! its main line plus its detail lines plus a blank separator. The scroll
//! offset therefore cannot be derived from a fixed row height; instead the
//! engine re-sums real row heights and searches forward for the first
//! offset that fits the cursor into the content budget.

use crate::view::constants::{FOOTER_HEIGHT, HEADER_HEIGHT, LAYOUT_BUFFER};

/// Rows available to the scrollable list, given the whole terminal height.
///
/// Header, footer and the list chrome are drawn outside the scrollable
/// region; at least one content row is always reported so the engine never
/// divides by nothing on a tiny terminal.
pub fn content_height(viewport_height: u16) -> usize {
    let chrome = (HEADER_HEIGHT + FOOTER_HEIGHT + LAYOUT_BUFFER) as usize;
    (viewport_height as usize).saturating_sub(chrome).max(1)
}

/// Compute the scroll offset that keeps the cursor's row visible.
///
/// `height_of` reports the rendered height of the row at each index.
/// Rules, in order:
///
/// 1. cursor at the top of the list pins the offset to zero;
/// 2. a cursor above the window scrolls straight up to it;
/// 3. otherwise the span `offset..=cursor` is summed (plus one row for the
///    "more above" indicator whenever `offset > 0`); if it exceeds `budget`,
///    the first larger offset whose span fits is adopted (linear first-fit
///    scan). When no offset short of the cursor fits (a single unfolded
///    row taller than the whole viewport), the cursor's own start goes to
///    the top and the renderer truncates the overflow.
pub fn ensure_visible<F>(cursor: usize, scroll_offset: usize, budget: usize, height_of: F) -> usize
where
    F: Fn(usize) -> usize,
{
    if cursor == 0 {
        return 0;
    }
    if cursor < scroll_offset {
        return cursor;
    }

    let fits = |offset: usize| -> bool {
        let mut used = usize::from(offset > 0);
        for index in offset..=cursor {
            used += height_of(index);
            if used > budget {
                return false;
            }
        }
        true
    };

    if fits(scroll_offset) {
        return scroll_offset;
    }
    let mut candidate = scroll_offset + 1;
    while candidate < cursor {
        if fits(candidate) {
            return candidate;
        }
        candidate += 1;
    }
    cursor
}
