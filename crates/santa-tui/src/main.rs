// Secret Santa entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, not terminal)
// 2. Load config
// 3. Build the exchange from configured participants and pairing settings
// 4. Create mpsc channels
// 5. Spawn app logic task
// 6. Run the TUI until the user quits
// 7. Cleanup on exit

use std::time::Duration;

use anyhow::Context;
use tokio::sync::mpsc;
use tracing::{error, info};

use santa_core::config;
use santa_core::exchange::Exchange;
use santa_tui::app;
use santa_tui::tui;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;
    info!("Secret Santa starting up");

    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "Config loaded: \"{}\", {} initial participants, {} strategy",
        config.exchange.title,
        config.exchange.participants.len(),
        config.pairing.strategy
    );

    let exchange = Exchange::from_config(&config).context("invalid initial participants")?;
    let app_state = app::AppState::new(exchange);

    let (cmd_tx, cmd_rx) = mpsc::channel(64);
    let (ui_tx, ui_rx) = mpsc::channel(256);

    let app_handle = tokio::spawn(async move {
        if let Err(e) = app::run(cmd_rx, ui_tx, app_state).await {
            error!("Application loop error: {}", e);
        }
    });

    info!("Application ready");

    let render_interval = Duration::from_millis(config.ui.render_interval_ms);
    if let Err(e) = tui::run(ui_rx, cmd_tx, config.exchange.title.clone(), render_interval).await {
        error!("TUI error: {}", e);
    }

    // tui::run dropped cmd_tx, so the app loop ends on its own.
    let _ = tokio::time::timeout(Duration::from_secs(5), app_handle).await;

    info!("Secret Santa shut down cleanly");
    Ok(())
}

/// Initialize tracing to log to a file (not the terminal, which is used by the TUI).
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("secret-santa.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("santa_tui=info,santa_core=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
