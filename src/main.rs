#![allow(clippy::missing_errors_doc)] // Internal functions don't need # Errors docs
#![allow(clippy::must_use_candidate)] // Not all getters need #[must_use]
#![allow(clippy::module_name_repetitions)] // e.g., AutoloadControl in autoload module is fine
#![allow(clippy::cast_possible_truncation)] // We're careful with our casts

//! watchboard - terminal watchlist for tracking TV series
//!
//! A single Rust binary showing an auto-refreshing board of tracked series.
//! Dialogs (edit, info, login, error) open as overlays on top of the board
//! and pause the auto-reload while they are up.

mod app;
mod autoload;
mod cli;
mod config;
mod errors;
mod event;
mod overlay;
mod state;
mod store;
mod tui;
mod ui;

use app::App;
use clap::Parser;
use cli::{Cli, Commands};
use color_eyre::Result;
use ratatui::layout::Rect;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Get the log directory path
fn get_log_dir() -> PathBuf {
    directories::BaseDirs::new().map_or_else(
        || PathBuf::from("/tmp/watchboard/logs"),
        |dirs| dirs.cache_dir().join("watchboard").join("logs"),
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Handle subcommands
    if let Some(Commands::Completions { shell }) = cli.command {
        cli::print_completions(shell);
        return Ok(());
    }

    // Initialize error handling
    color_eyre::install()?;

    // Setup file logging with rotation (stdout belongs to the TUI)
    let log_dir = get_log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "watchboard.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let log_filter = format!("watchboard={}", cli.log_level);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(non_blocking),
        )
        .init();

    tracing::info!("Starting watchboard v{}", env!("CARGO_PKG_VERSION"));

    // Resolve configuration: CLI flags override the config file
    let config_path = cli.config.clone().unwrap_or_else(config::default_config_file);
    let file_config = config::load(&config_path)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load config {config_path:?}: {e}"))?;

    let data_file = cli
        .data_file
        .clone()
        .or(file_config.data_file.clone())
        .unwrap_or_else(store::default_data_file);
    let autoload_interval = Duration::from_secs(
        cli.autoload_interval
            .unwrap_or(file_config.autoload.interval_secs),
    );

    tracing::info!(?data_file, ?autoload_interval, "Configuration resolved");

    // Create event channel
    let (event_tx, event_rx) = mpsc::channel(100);

    run_tui(
        event_tx,
        event_rx,
        data_file,
        autoload_interval,
        cli.tick_rate,
        cli.frame_rate,
    )
    .await
}

async fn run_tui(
    event_tx: mpsc::Sender<event::Event>,
    mut event_rx: mpsc::Receiver<event::Event>,
    data_file: PathBuf,
    autoload_interval: Duration,
    tick_rate: f64,
    frame_rate: f64,
) -> Result<()> {
    use std::time::Instant;
    use tokio_util::sync::CancellationToken;

    // Calculate durations from rates
    let tick_duration = Duration::from_secs_f64(1.0 / tick_rate);
    let frame_duration = Duration::from_secs_f64(1.0 / frame_rate);

    tracing::info!(
        "TUI starting: {:.1} FPS, {:.1} ticks/sec",
        frame_rate,
        tick_rate
    );

    // Initialize terminal (raw mode, alternate screen, mouse capture)
    let mut terminal = tui::init()?;

    // RAII guard ensures terminal is restored on panic or early return
    let _guard = tui::TerminalGuard;

    // Create app state; performs the initial watchlist load
    let mut app = App::new(data_file, autoload_interval);

    // Create cancellation token for graceful shutdown
    let cancel = CancellationToken::new();

    // Spawn input event handler with cancellation support
    let input_cancel = cancel.clone();
    let input_handle = tokio::spawn(async move {
        event::input::listen(event_tx, input_cancel).await;
    });

    // Frame rate limiting state
    let mut last_frame = Instant::now();

    // Main loop
    loop {
        // Frame rate limiting with dirty flag check
        let now = Instant::now();
        if app.needs_render && now.duration_since(last_frame) >= frame_duration {
            terminal.draw(|f| ui::render(f, &app))?;
            app.rendered();
            last_frame = now;
        }

        // Handle events with tick-based timeout
        tokio::select! {
            Some(event) = event_rx.recv() => {
                let size = terminal.size()?;
                let frame = Rect::new(0, 0, size.width, size.height);
                app.handle_event(event, frame);
            }
            () = tokio::time::sleep(tick_duration) => {
                app.tick();
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Graceful shutdown: signal input listener to stop
    tracing::debug!("Shutting down input listener");
    cancel.cancel();
    input_handle.abort();

    // Restore terminal (guard will also restore on drop, but explicit is cleaner)
    tui::restore()?;
    terminal.show_cursor()?;

    Ok(())
}
