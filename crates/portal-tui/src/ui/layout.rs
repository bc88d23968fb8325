// Centralized layout constants and area splits.
// Render and mouse hit-testing both go through these helpers so they can
// never disagree about where a component is.

use ratatui::layout::{Constraint, Layout, Rect};

/// Fixed sidebar width (glyph + label + padding).
pub const SIDEBAR_WIDTH: u16 = 22;

/// Footer height (single status line at the very bottom).
pub const FOOTER_HEIGHT: u16 = 1;

/// Standard horizontal padding for main content areas (left + right)
pub const CONTENT_PADDING_H: u16 = 2;

/// Split the full frame into content and footer rows.
pub fn app_chunks(size: Rect) -> (Rect, Rect) {
    let rows = Layout::vertical([Constraint::Min(0), Constraint::Length(FOOTER_HEIGHT)]).split(size);
    (rows[0], rows[1])
}

/// Split the content row into sidebar and main columns.
pub fn content_chunks(content: Rect) -> (Rect, Rect) {
    let cols =
        Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)]).split(content);
    (cols[0], cols[1])
}

/// Apply horizontal padding to a Rect (reduces width and shifts x).
#[inline]
pub fn with_horizontal_padding(area: Rect, padding: u16) -> Rect {
    Rect {
        x: area.x + padding,
        y: area.y,
        width: area.width.saturating_sub(padding * 2),
        height: area.height,
    }
}

/// Apply content padding to a Rect (uses CONTENT_PADDING_H).
#[inline]
pub fn with_content_padding(area: Rect) -> Rect {
    with_horizontal_padding(area, CONTENT_PADDING_H)
}
