// Application footer: platform status tag on the left, links in the middle,
// version metadata on the right. A transient notification takes over the
// middle column while it is active.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use portal_core::models::SystemStatus;

use crate::ui::app::App;
use crate::ui::format::truncate_with_ellipsis;
use crate::ui::notifications::{NotificationLevel, NotificationQueue};
use crate::ui::theme;

/// Hard-coded footer links, matching the web portal's footer.
const FOOTER_LINKS: &str = "Docs · API · Support";

/// Status tag text: colored dot + headline from the fixed status table.
fn status_spans(status: SystemStatus) -> Vec<Span<'static>> {
    let color = theme::system_status_color(status);
    vec![
        Span::styled(" ● ", Style::default().fg(color)),
        Span::styled(status.headline(), Style::default().fg(color)),
    ]
}

/// Version metadata, e.g. "v0.1.0 · 2026-08-28 ".
fn version_label(app: &App) -> String {
    match &app.build_time {
        Some(build_time) => format!("v{} · {} ", app.version, build_time),
        None => format!("v{} ", app.version),
    }
}

/// Middle column content: an active notification takes over from the static
/// links until it expires.
fn middle_line(notifications: &mut NotificationQueue, width: usize) -> Line<'static> {
    if let Some(notification) = notifications.current() {
        let color = match notification.level {
            NotificationLevel::Info => theme::ACCENT_PRIMARY,
            NotificationLevel::Success => theme::ACCENT_SUCCESS,
            NotificationLevel::Warning => theme::ACCENT_WARNING,
            NotificationLevel::Error => theme::ACCENT_ERROR,
        };
        let icon = notification.level.icon();
        let available = width.saturating_sub(icon.width() + 2);
        let message = truncate_with_ellipsis(&notification.message, available);
        Line::from(vec![
            Span::styled(format!(" {icon} "), Style::default().fg(color)),
            Span::styled(message, Style::default().fg(color)),
        ])
    } else {
        Line::from(Span::styled(
            format!(" {FOOTER_LINKS}"),
            theme::text_dim(),
        ))
    }
}

pub fn render_footer(f: &mut Frame, app: &mut App, area: Rect) {
    let version = version_label(app);
    let status = status_spans(app.system_status);
    let status_width: usize = status.iter().map(|s| s.content.width()).sum();

    let chunks = Layout::horizontal([
        Constraint::Length(status_width as u16 + 1),
        Constraint::Min(0),
        Constraint::Length(version.width() as u16 + 1),
    ])
    .split(area);

    let bg = Style::default().bg(theme::BG_SIDEBAR);

    f.render_widget(Paragraph::new(Line::from(status)).style(bg), chunks[0]);

    let middle = middle_line(&mut app.notifications, chunks[1].width as usize);
    f.render_widget(Paragraph::new(middle).style(bg), chunks[1]);

    // Right column: right-aligned version metadata.
    let padding = (chunks[2].width as usize).saturating_sub(version.width());
    let padded = format!("{}{}", " ".repeat(padding), version);
    f.render_widget(
        Paragraph::new(padded).style(bg.patch(theme::text_dim())),
        chunks[2],
    );
}
