// Centralized theme for the portal TUI.
// All colors and semantic styles live here - edit this file to change the look.

use portal_core::models::SystemStatus;
use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// App background - pure black for contrast
pub const BG_APP: Color = Color::Rgb(0, 0, 0);

/// Sidebar background - very dark, almost black
pub const BG_SIDEBAR: Color = Color::Rgb(12, 12, 12);

/// Selected row background
pub const BG_SELECTED: Color = Color::Rgb(32, 32, 32);

/// Primary text - off-white for readability
pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 220);

/// Secondary/muted text
pub const TEXT_MUTED: Color = Color::Rgb(128, 128, 128);

/// Dimmed text for hints, placeholders
pub const TEXT_DIM: Color = Color::Rgb(90, 90, 90);

/// Primary accent - muted blue (interactive elements, focus)
pub const ACCENT_PRIMARY: Color = Color::Rgb(86, 156, 214);

/// Success/positive - muted green
pub const ACCENT_SUCCESS: Color = Color::Rgb(106, 153, 85);

/// Warning - muted amber
pub const ACCENT_WARNING: Color = Color::Rgb(206, 145, 120);

/// Error - muted red
pub const ACCENT_ERROR: Color = Color::Rgb(244, 112, 112);

/// Active/focused border
pub const BORDER_ACTIVE: Color = Color::Rgb(100, 100, 100);

/// Inactive border
pub const BORDER_INACTIVE: Color = Color::Rgb(60, 60, 60);

// =============================================================================
// STYLE FUNCTIONS
// =============================================================================

pub fn text_primary() -> Style {
    Style::default().fg(TEXT_PRIMARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn text_dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn text_bold() -> Style {
    Style::default()
        .fg(TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn border_active() -> Style {
    Style::default().fg(BORDER_ACTIVE)
}

pub fn border_inactive() -> Style {
    Style::default().fg(BORDER_INACTIVE)
}

/// Style for the sidebar row of the active module.
pub fn sidebar_selected() -> Style {
    Style::default()
        .fg(ACCENT_PRIMARY)
        .bg(BG_SELECTED)
        .add_modifier(Modifier::BOLD)
}

/// Chip style for an invoice status label. Labels outside the known set get
/// the neutral style; a future wire client can deliver statuses this build
/// has never heard of.
pub fn invoice_status_style(label: &str) -> Style {
    match label {
        "paid" => Style::default().fg(ACCENT_SUCCESS),
        "pending" => Style::default().fg(ACCENT_WARNING),
        "failed" => Style::default().fg(ACCENT_ERROR),
        _ => Style::default().fg(TEXT_MUTED),
    }
}

/// Footer tag color for the platform status. Exhaustive; `SystemStatus` has
/// no unknown variant.
pub fn system_status_color(status: SystemStatus) -> Color {
    match status {
        SystemStatus::Healthy => ACCENT_SUCCESS,
        SystemStatus::Degraded => ACCENT_WARNING,
        SystemStatus::Critical => ACCENT_ERROR,
    }
}
