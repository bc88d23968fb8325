//! Billing page: paginated invoice table plus stored payment methods.

use portal_core::models::{Invoice, PaymentMethod, PaymentMethodKind};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

use crate::ui::app::{App, Focus};
use crate::ui::format::{format_cents, format_invoice_date, truncate_with_ellipsis};
use crate::ui::layout::with_content_padding;
use crate::ui::state::LoadPhase;
use crate::ui::theme;

pub fn render_billing(f: &mut Frame, app: &App, area: Rect) {
    let area = with_content_padding(area);

    match &app.billing.phase {
        LoadPhase::Loading => {
            render_loading(f, area);
        }
        LoadPhase::Error(message) => {
            // Banner on top, then whatever content exists (none after a
            // failed load, but the layout doesn't assume that).
            let chunks =
                Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).split(area);
            render_error_banner(f, message, chunks[0]);
            render_content(f, app, chunks[1]);
        }
        LoadPhase::Ready => {
            render_content(f, app, area);
        }
    }
}

fn render_loading(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("Billing", theme::text_bold())),
        Line::from(""),
        Line::from(Span::styled("Loading billing data...", theme::text_muted())),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn render_error_banner(f: &mut Frame, message: &str, area: Rect) {
    let banner = Paragraph::new(Line::from(vec![
        Span::styled(" ✗ ", Style::default().fg(theme::ACCENT_ERROR)),
        Span::styled(message.to_string(), Style::default().fg(theme::ACCENT_ERROR)),
    ]));
    f.render_widget(banner, area);
}

fn render_content(f: &mut Frame, app: &App, area: Rect) {
    let payment_rows = app.billing.payment_methods.len() as u16;
    let chunks = Layout::vertical([
        Constraint::Length(2),                // Title
        Constraint::Min(5),                   // Invoice table
        Constraint::Length(1),                // Pagination line
        Constraint::Length(payment_rows + 2), // Payment methods
    ])
    .split(area);

    let title = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("Billing", theme::text_bold())),
    ]);
    f.render_widget(title, chunks[0]);

    render_invoice_table(f, app, chunks[1]);
    render_pagination_line(f, app, chunks[2]);
    render_payment_methods(f, app, chunks[3]);
}

fn render_invoice_table(f: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(vec![
        Cell::from("Invoice"),
        Cell::from("Date"),
        Cell::from("Description"),
        Cell::from("Amount"),
        Cell::from("Status"),
    ])
    .style(theme::text_muted());

    let selected = app.billing.selected_row;
    let content_focused = app.focus == Focus::Content;

    let rows: Vec<Row> = app
        .billing
        .visible_invoices()
        .iter()
        .enumerate()
        .map(|(idx, invoice)| {
            let row = invoice_row(invoice, area.width);
            if content_focused && idx == selected {
                row.style(Style::default().bg(theme::BG_SELECTED))
            } else {
                row
            }
        })
        .collect();

    let widths = [
        Constraint::Length(10), // Invoice id
        Constraint::Length(13), // Date
        Constraint::Min(20),    // Description
        Constraint::Length(9),  // Amount
        Constraint::Length(8),  // Status
    ];

    let table = Table::new(rows, widths).header(header).column_spacing(2);
    f.render_widget(table, area);
}

fn invoice_row<'a>(invoice: &'a Invoice, table_width: u16) -> Row<'a> {
    // Fixed columns + spacing leave the rest for the description.
    let description_width = (table_width as usize).saturating_sub(10 + 13 + 9 + 8 + 4 * 2);
    let status = invoice.status.as_str();
    Row::new(vec![
        Cell::from(Span::styled(invoice.id.as_str(), theme::text_primary())),
        Cell::from(Span::styled(
            format_invoice_date(invoice.issued_at),
            theme::text_muted(),
        )),
        Cell::from(Span::styled(
            truncate_with_ellipsis(&invoice.description, description_width),
            theme::text_primary(),
        )),
        Cell::from(Span::styled(
            format_cents(invoice.amount_cents),
            theme::text_primary(),
        )),
        Cell::from(Span::styled(status, theme::invoice_status_style(status))),
    ])
}

fn render_pagination_line(f: &mut Frame, app: &App, area: Rect) {
    let cursor = &app.billing.cursor;
    let total = app.billing.invoices.len();
    let line = Line::from(vec![
        Span::styled(
            format!(
                "Page {}/{}",
                cursor.page() + 1,
                cursor.page_count(total)
            ),
            theme::text_muted(),
        ),
        Span::styled(format!(" · {}", cursor.range_display(total)), theme::text_dim()),
        Span::styled(
            format!("  ←/→ page · s size: {} · d download · r reload", cursor.page_size()),
            theme::text_dim(),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_payment_methods(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("PAYMENT METHODS", theme::text_muted())));
    for method in &app.billing.payment_methods {
        lines.push(payment_method_line(method));
    }
    f.render_widget(Paragraph::new(lines), area);
}

fn payment_method_line(method: &PaymentMethod) -> Line<'_> {
    let glyph = match method.kind {
        PaymentMethodKind::Card => "▭",
        PaymentMethodKind::Bank => "⌂",
    };
    let mut spans = vec![
        Span::styled(format!("{glyph} "), theme::text_dim()),
        Span::styled(
            format!("{} ending {}", method.brand, method.last4),
            theme::text_primary(),
        ),
        Span::styled(
            format!(" · expires {}", method.expires_display()),
            theme::text_muted(),
        ),
    ];
    if method.is_default {
        spans.push(Span::styled(
            "  default",
            Style::default().fg(theme::ACCENT_PRIMARY),
        ));
    }
    Line::from(spans)
}
