use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::ui::components::sidebar;
use crate::ui::layout::{app_chunks, content_chunks};
use crate::ui::{App, Focus};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Global bindings first.
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
            return;
        }
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Tab => {
            app.toggle_focus();
            return;
        }
        _ => {}
    }

    match app.focus {
        Focus::Sidebar => handle_sidebar_key(app, key),
        Focus::Content => handle_content_key(app, key),
    }
}

fn handle_sidebar_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.sidebar_cursor_up(),
        KeyCode::Down | KeyCode::Char('j') => app.sidebar_cursor_down(),
        KeyCode::Enter => app.activate_cursor_module(),
        _ => {}
    }
}

fn handle_content_key(app: &mut App, key: KeyEvent) {
    if app.active_module != "billing" {
        return;
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.billing.select_prev_row(),
        KeyCode::Down | KeyCode::Char('j') => app.billing.select_next_row(),
        KeyCode::Left | KeyCode::Char('h') => app.billing.prev_page(),
        KeyCode::Right | KeyCode::Char('l') => app.billing.next_page(),
        KeyCode::Char('s') => app.billing.cycle_page_size(),
        KeyCode::Char('d') => app.download_selected_invoice(),
        KeyCode::Char('r') => app.reload_billing(),
        _ => {}
    }
}

/// Mouse support: clicking a sidebar row activates that module. The click
/// position is resolved against the same layout math the renderer uses.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, frame_size: Rect) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let (content, _footer) = app_chunks(frame_size);
    let (sidebar_area, _main) = content_chunks(content);
    if let Some(id) = sidebar::hit_test(sidebar_area, mouse.column, mouse.row) {
        app.focus = Focus::Sidebar;
        app.set_active_module(id);
    }
}
