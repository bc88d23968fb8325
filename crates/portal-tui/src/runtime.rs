use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::input::{handle_key, handle_mouse};
use crate::render::render;
use crate::ui::{App, AppEvent, Tui};

/// Notification expiry granularity.
const TICK_INTERVAL: Duration = Duration::from_millis(250);

pub(crate) async fn run_app(
    terminal: &mut Tui,
    app: &mut App,
    events_rx: &mut mpsc::UnboundedReceiver<AppEvent>,
) -> Result<()> {
    let mut event_stream = EventStream::new();
    let mut tick_interval = tokio::time::interval(TICK_INTERVAL);

    while app.running {
        terminal.draw(|f| render(f, app))?;
        let frame_size = terminal.get_frame().area();

        tokio::select! {
            maybe_event = event_stream.next() => {
                if let Some(Ok(event)) = maybe_event {
                    match event {
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            handle_key(app, key);
                        }
                        Event::Mouse(mouse) => {
                            handle_mouse(app, mouse, frame_size);
                        }
                        // Redrawn on the next loop iteration anyway.
                        Event::Resize(_, _) => {}
                        _ => {}
                    }
                }
            }
            Some(event) = events_rx.recv() => {
                app.handle_event(event);
            }
            _ = tick_interval.tick() => {
                app.notifications.tick();
            }
        }
    }

    Ok(())
}
