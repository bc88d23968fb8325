use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{info, warn};

use portal_core::billing::{load_snapshot, BillingClient, BillingSnapshot};
use portal_core::config::PortalConfig;
use portal_core::models::{SystemStatus, MODULES};
use portal_core::pagination::PageCursor;

use crate::ui::notifications::{Notification, NotificationQueue};
use crate::ui::state::BillingState;

/// Which pane receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Content,
}

/// Results reported back by spawned tasks.
#[derive(Debug)]
pub enum AppEvent {
    BillingLoaded {
        generation: u64,
        snapshot: BillingSnapshot,
    },
    BillingFailed {
        generation: u64,
        message: String,
    },
    DownloadFinished {
        invoice_id: String,
        result: Result<(), String>,
    },
}

pub struct App {
    pub running: bool,
    /// Id of the module the content area shows. Ids outside `MODULES` are
    /// tolerated: the sidebar highlights nothing and the content area falls
    /// back to a placeholder.
    pub active_module: String,
    /// Keyboard cursor within the sidebar, independent of the active module.
    pub sidebar_cursor: usize,
    pub focus: Focus,
    pub system_status: SystemStatus,
    pub version: &'static str,
    pub build_time: Option<String>,
    pub billing: BillingState,
    pub notifications: NotificationQueue,
    default_page_size: usize,
    client: Arc<dyn BillingClient>,
    events_tx: mpsc::UnboundedSender<AppEvent>,
}

impl App {
    /// Build the app and the receiving end of its event channel. The caller
    /// (the runtime loop) owns the receiver.
    pub fn new(
        client: Arc<dyn BillingClient>,
        config: PortalConfig,
    ) -> (Self, mpsc::UnboundedReceiver<AppEvent>) {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let app = Self {
            running: true,
            active_module: MODULES[0].id.to_string(),
            sidebar_cursor: 0,
            focus: Focus::Sidebar,
            system_status: config.system_status,
            version: env!("CARGO_PKG_VERSION"),
            build_time: config.build_time,
            billing: BillingState::default(),
            notifications: NotificationQueue::default(),
            default_page_size: config.default_page_size,
            client,
            events_tx,
        };
        (app, events_rx)
    }

    /// Switch the content area to another module. Entering billing mounts the
    /// page (kicks off a load); leaving it discards the page's state.
    pub fn set_active_module(&mut self, id: &str) {
        if self.active_module == id {
            return;
        }
        if self.active_module == "billing" {
            self.billing.reset();
        }
        self.active_module = id.to_string();
        info!(module = id, "module activated");
        if id == "billing" {
            self.reload_billing();
        }
    }

    /// Start a billing load on a background task. The task reports back over
    /// the event channel with the generation it was started for.
    pub fn reload_billing(&mut self) {
        let generation = self.billing.begin_load();
        self.billing.cursor = PageCursor::new(self.default_page_size);
        let client = self.client.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let event = match load_snapshot(client.as_ref()).await {
                Ok(snapshot) => AppEvent::BillingLoaded {
                    generation,
                    snapshot,
                },
                Err(err) => AppEvent::BillingFailed {
                    generation,
                    message: err.to_string(),
                },
            };
            let _ = tx.send(event);
        });
    }

    /// Ask the document collaborator for the selected invoice.
    pub fn download_selected_invoice(&mut self) {
        let Some(invoice) = self.billing.selected_invoice() else {
            return;
        };
        let invoice_id = invoice.id.clone();
        let client = self.client.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = client
                .download_invoice(&invoice_id)
                .await
                .map_err(|e| e.to_string());
            let _ = tx.send(AppEvent::DownloadFinished { invoice_id, result });
        });
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::BillingLoaded {
                generation,
                snapshot,
            } => {
                self.billing.apply_loaded(generation, snapshot);
            }
            AppEvent::BillingFailed {
                generation,
                message,
            } => {
                warn!(%message, "billing load failed");
                self.billing.apply_failed(generation, message);
            }
            AppEvent::DownloadFinished { invoice_id, result } => match result {
                Ok(()) => self
                    .notifications
                    .push(Notification::success(format!("{invoice_id} downloaded"))),
                Err(message) => self.notifications.push(Notification::warning(message)),
            },
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Sidebar => Focus::Content,
            Focus::Content => Focus::Sidebar,
        };
    }

    pub fn sidebar_cursor_down(&mut self) {
        if self.sidebar_cursor + 1 < MODULES.len() {
            self.sidebar_cursor += 1;
        }
    }

    pub fn sidebar_cursor_up(&mut self) {
        self.sidebar_cursor = self.sidebar_cursor.saturating_sub(1);
    }

    /// Activate the module under the sidebar cursor.
    pub fn activate_cursor_module(&mut self) {
        let id = MODULES[self.sidebar_cursor].id;
        self.set_active_module(id);
    }
}
