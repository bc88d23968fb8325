use anyhow::Result;
use std::fs::OpenOptions;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize logging. The TUI owns stdout, so output only goes to a file,
/// and only when `PORTAL_LOG_FILE` is set. `RUST_LOG` controls the filter.
pub fn init_tracing() -> Result<()> {
    let Some(log_path) = std::env::var_os("PORTAL_LOG_FILE") else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_filter(filter);

    tracing_subscriber::registry().with(file_layer).init();
    Ok(())
}
