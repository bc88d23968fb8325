use portal_core::models::MODULES;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::app::{App, Focus};
use crate::ui::theme;

/// Rows of chrome above the first module row (padding + title + separator).
const HEADER_ROWS: u16 = 3;

/// Render the module navigation sidebar. The row whose id equals the active
/// module gets the selected style; an active id outside the known set simply
/// highlights nothing.
pub fn render_sidebar(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  PORTAL", theme::text_bold())));
    lines.push(Line::from(""));

    for (idx, entry) in MODULES.iter().enumerate() {
        let is_active = entry.id == app.active_module;
        let is_cursor = idx == app.sidebar_cursor && app.focus == Focus::Sidebar;

        let style = if is_active {
            theme::sidebar_selected()
        } else if is_cursor {
            theme::text_primary()
        } else {
            theme::text_muted()
        };

        let marker = if is_cursor { "›" } else { " " };
        lines.push(Line::from(Span::styled(
            format!("{} {} {}", marker, entry.glyph, entry.label),
            style,
        )));
    }

    let sidebar = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::RIGHT)
                .border_style(match app.focus {
                    Focus::Sidebar => theme::border_active(),
                    Focus::Content => theme::border_inactive(),
                }),
        )
        .style(Style::default().bg(theme::BG_SIDEBAR));

    f.render_widget(sidebar, area);
}

/// Map a mouse click inside the sidebar to the module row under it. Returns
/// the module id to activate, or `None` for chrome and empty space.
pub fn hit_test(area: Rect, column: u16, row: u16) -> Option<&'static str> {
    if column < area.x || column >= area.x + area.width {
        return None;
    }
    if row < area.y + HEADER_ROWS {
        return None;
    }
    let idx = (row - area.y - HEADER_ROWS) as usize;
    MODULES.get(idx).map(|entry| entry.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_module_row_is_clickable() {
        let area = Rect::new(0, 0, 22, 30);
        for (idx, entry) in MODULES.iter().enumerate() {
            let row = HEADER_ROWS + idx as u16;
            assert_eq!(hit_test(area, 3, row), Some(entry.id));
        }
    }

    #[test]
    fn chrome_and_empty_space_are_not_clickable() {
        let area = Rect::new(0, 0, 22, 30);
        // Title row
        assert_eq!(hit_test(area, 3, 1), None);
        // Below the last module row
        assert_eq!(hit_test(area, 3, HEADER_ROWS + MODULES.len() as u16), None);
        // Outside the sidebar column
        assert_eq!(hit_test(area, 40, HEADER_ROWS), None);
    }

    #[test]
    fn unknown_active_id_matches_no_row() {
        // The selected style is driven by this id comparison; an id outside
        // the set leaves every row unselected.
        for id in ["warehouse", ""] {
            assert!(MODULES.iter().all(|entry| entry.id != id));
        }
        assert_eq!(MODULES.iter().filter(|e| e.id == "billing").count(), 1);
    }

    #[test]
    fn hit_test_respects_area_offset() {
        let area = Rect::new(5, 2, 22, 30);
        assert_eq!(hit_test(area, 6, 2 + HEADER_ROWS), Some(MODULES[0].id));
        assert_eq!(hit_test(area, 2, 2 + HEADER_ROWS), None);
    }
}
