use ratatui::{style::Style, widgets::Block, Frame};

use crate::ui::components::{render_footer, render_sidebar};
use crate::ui::layout::{app_chunks, content_chunks};
use crate::ui::theme;
use crate::ui::views::{render_billing, render_placeholder};
use crate::ui::App;

/// Compose the full frame: sidebar + active module content, footer at the
/// very bottom.
pub fn render(f: &mut Frame, app: &mut App) {
    f.render_widget(
        Block::default().style(Style::default().bg(theme::BG_APP)),
        f.area(),
    );

    let (content, footer) = app_chunks(f.area());
    let (sidebar, main) = content_chunks(content);

    render_sidebar(f, app, sidebar);

    match app.active_module.as_str() {
        "billing" => render_billing(f, app, main),
        other => render_placeholder(f, other, main),
    }

    render_footer(f, app, footer);
}
