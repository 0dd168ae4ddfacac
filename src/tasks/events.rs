//! Logs timer notifications for the host

use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, warn};

use crate::{
    state::{AppState, TimerEvent},
    timer::format_millis,
};

/// Background task that reports ticks and expiry
pub async fn timer_event_task(state: Arc<AppState>) {
    let mut events = state.event_tx.subscribe();

    loop {
        match events.recv().await {
            Ok(TimerEvent::Tick { time_remaining }) => {
                debug!("Time remaining: {}", format_millis(time_remaining));
            }
            Ok(TimerEvent::Expired) => {
                info!("Countdown finished");
            }
            Err(RecvError::Lagged(skipped)) => {
                warn!("Event listener skipped {} notifications", skipped);
            }
            Err(RecvError::Closed) => return,
        }
    }
}
