use portal_core::models::module_label;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::layout::with_content_padding;
use crate::ui::theme;

/// Landing pane for modules without a terminal rendering yet. Unknown module
/// ids get a generic headline rather than an error.
pub fn render_placeholder(f: &mut Frame, module_id: &str, area: Rect) {
    let area = with_content_padding(area);
    let label = module_label(module_id).unwrap_or("Not found");

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(label, theme::text_bold())),
        Line::from(""),
        Line::from(Span::styled(
            "Nothing to show here yet.",
            theme::text_muted(),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}
