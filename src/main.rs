use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{Event, KeyEventKind};
use ratatui::DefaultTerminal;
use tokio::sync::{mpsc, watch};

use cryptotrader::config::Config;
use cryptotrader::event::AppEvent;
use cryptotrader::input::{parse_key_event, UiCommand};
use cryptotrader::ticker::{PriceTicker, RandomSource, RngSource};
use cryptotrader::ui::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {:#}", e);
            std::process::exit(1);
        }
    };

    // Log to file so it doesn't interfere with the TUI
    let log_file = config.logging.create_log_file()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                config
                    .logging
                    .level
                    .parse()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
            }),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .json()
        .init();

    tracing::info!(
        interval_ms = config.ticker.interval_ms,
        price_jitter = config.ticker.price_jitter,
        change_jitter = config.ticker.change_jitter,
        seed = ?config.ticker.seed,
        "Starting cryptotrader"
    );

    let (app_tx, mut app_rx) = mpsc::channel::<AppEvent>(64);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    // SIGINT from outside the terminal; Ctrl+C typed in raw mode arrives as a key event.
    let ctrl_c_shutdown = shutdown_tx.clone();
    let ctrl_c_log_tx = app_tx.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        tracing::info!("Ctrl+C received");
        let _ = ctrl_c_log_tx
            .send(AppEvent::LogMessage("[WARN] Ctrl+C received, shutting down".to_string()))
            .await;
        let _ = ctrl_c_shutdown.send(true);
    });

    let rng: Box<dyn RandomSource> = match config.ticker.seed {
        Some(seed) => Box::new(RngSource::seeded(seed)),
        None => Box::new(RngSource::from_os()),
    };
    let mut app_state = AppState::new(config.ticker.jitter_params(), rng);

    let ticker = PriceTicker::spawn(config.ticker.interval(), app_tx.clone());
    app_tx
        .send(AppEvent::LogMessage(format!(
            "cryptotrader started | price ticker every {} ms | simulated prices",
            config.ticker.interval_ms
        )))
        .await
        .context("app event channel closed before startup")?;

    let mut terminal = ratatui::init();
    let result = run(
        &mut terminal,
        &mut app_state,
        &mut app_rx,
        &shutdown_rx,
        Duration::from_millis(config.ui.refresh_rate_ms),
    );

    ticker.stop();
    ratatui::restore();
    result?;

    tracing::info!(ticks = app_state.tick_count, "Shutdown complete");
    println!(
        "Goodbye! Check {} for details.",
        config.logging.file
    );
    Ok(())
}

fn run(
    terminal: &mut DefaultTerminal,
    app_state: &mut AppState,
    app_rx: &mut mpsc::Receiver<AppEvent>,
    shutdown_rx: &watch::Receiver<bool>,
    refresh_rate: Duration,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app_state))?;

        // Handle input (non-blocking with timeout)
        if crossterm::event::poll(refresh_rate)? {
            if let Event::Key(key) = crossterm::event::read()? {
                if key.kind == KeyEventKind::Press {
                    match parse_key_event(&key) {
                        Some(UiCommand::Quit) => {
                            tracing::info!("User quit");
                            return Ok(());
                        }
                        Some(UiCommand::ToggleBot) => app_state.toggle_bot(),
                        None => {}
                    }
                }
            }
        }

        while let Ok(evt) = app_rx.try_recv() {
            app_state.apply(evt);
        }

        if *shutdown_rx.borrow() {
            return Ok(());
        }
    }
}
