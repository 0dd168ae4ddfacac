//! Countdown Ledger - a countdown timer server
//! 
//! This is the main entry point for the countdown-ledger application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use countdown_ledger::{
    config::Config,
    state::AppState,
    api::create_router,
    tasks::{clock_task, timer_event_task},
    timer::format_millis,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("countdown_ledger={},tower_http=info", config.log_level()))
        .init();

    info!("Starting countdown-ledger server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, duration={}, tick={}ms",
          config.host, config.port, format_millis(config.duration), config.tick_ms);

    // Create application state
    let state = Arc::new(AppState::new(
        config.port,
        config.host.clone(),
        config.duration,
        config.tick_interval(),
    ));

    // Start the clock and notification background tasks
    tokio::spawn(clock_task(Arc::clone(&state)));
    tokio::spawn(timer_event_task(Arc::clone(&state)));

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /start  - Start or resume the timer");
    info!("  POST /pause  - Pause the timer");
    info!("  POST /stop   - Stop the timer");
    info!("  POST /reset  - Reset the timer, optionally with {{\"duration\": \"M:SS\"}}");
    info!("  GET  /status - Current timer and remaining time");
    info!("  GET  /health - Health check");

    // Setup graceful shutdown
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

    info!("Server shutdown complete");
    Ok(())
}
