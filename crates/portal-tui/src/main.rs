mod input;
mod render;
mod runtime;
mod ui;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use portal_core::billing::{BillingClient, MockBillingClient};
use portal_core::config::PortalConfig;
use portal_core::models::SystemStatus;

use crate::runtime::run_app;
use crate::ui::App;

#[derive(Parser)]
#[command(name = "portal-tui", version, about = "Terminal front end for the enterprise portal")]
struct Cli {
    /// Platform status shown in the footer
    #[arg(long, value_enum, default_value = "healthy")]
    system_status: StatusArg,

    /// Build timestamp shown next to the version in the footer
    #[arg(long)]
    build_time: Option<String>,

    /// Make billing data loads fail with this message (error-path demo)
    #[arg(long)]
    fail_billing: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum StatusArg {
    Healthy,
    Degraded,
    Critical,
}

impl From<StatusArg> for SystemStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Healthy => SystemStatus::Healthy,
            StatusArg::Degraded => SystemStatus::Degraded,
            StatusArg::Critical => SystemStatus::Critical,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    portal_core::tracing_setup::init_tracing()?;

    // Restore the terminal before the panic message prints, otherwise raw
    // mode swallows it.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ui::restore_terminal();
        eprintln!("{panic_info}");
        original_hook(panic_info);
    }));

    let client: Arc<dyn BillingClient> = match cli.fail_billing {
        Some(message) => Arc::new(MockBillingClient::failing(message)),
        None => Arc::new(MockBillingClient::new()),
    };

    let config = PortalConfig {
        system_status: cli.system_status.into(),
        build_time: cli.build_time,
        ..PortalConfig::default()
    };

    let (mut app, mut events_rx) = App::new(client, config);
    let mut terminal = ui::init_terminal()?;

    let result = run_app(&mut terminal, &mut app, &mut events_rx).await;

    ui::restore_terminal()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}
