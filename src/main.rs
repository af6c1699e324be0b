//! Haus Clock - A two-player countdown chess clock
//! 
//! This is the main entry point for the haus-clock application.

use std::sync::Arc;
use anyhow::anyhow;
use tokio::net::TcpListener;
use tracing::info;

use haus_clock::{
    config::Config,
    state::AppState,
    api::create_router,
    tasks::{clock_ticker_task, flag_watch_task},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("haus_clock={},tower_http=info", config.log_level()))
        .init();

    let clock_config = config.clock_config().map_err(|e| anyhow!(e))?;

    info!("Starting haus-clock v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, starting={}s, tick={}s",
          config.host, config.port, clock_config.starting_seconds(),
          clock_config.tick_interval_seconds());

    // One game per process, injected into the router and tasks
    let state = Arc::new(AppState::new(config.port, config.host.clone(), clock_config));

    let ticker_state = Arc::clone(&state);
    tokio::spawn(async move {
        clock_ticker_task(ticker_state).await;
    });

    let watch_state = Arc::clone(&state);
    tokio::spawn(async move {
        flag_watch_task(watch_state).await;
    });

    let app = create_router(state);

    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Clock control surface on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /press/:position    - End the turn at top|bottom");
    info!("  POST /activate/:position - Start the clock at top|bottom");
    info!("  POST /pause              - Pause the game");
    info!("  POST /resume             - Resume the game");
    info!("  POST /reset              - Reset both clocks");
    info!("  GET  /status             - Current clock and configuration");
    info!("  GET  /health             - Health check");

    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Clock stopped");
    Ok(())
}
