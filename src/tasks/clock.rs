//! Clock task that pulses a running timer

use std::sync::Arc;
use tokio::{sync::broadcast::{error::RecvError, Receiver}, time::interval};
use tracing::{debug, error, info, warn};

use crate::{state::AppState, timer::TimerState};

/// Background task that ticks the timer on a fixed cadence while it is running
pub async fn clock_task(state: Arc<AppState>) {
    info!("Starting clock task");

    let mut state_rx = state.state_change_tx.subscribe();

    // The timer may already be running before we subscribed
    let mut current = state.get_timer()
        .map(|timer| timer.state)
        .unwrap_or_default();

    loop {
        if current == TimerState::Running {
            current = run_pulses(&state, &mut state_rx).await;
            continue;
        }

        // Wait for a state change notification
        match state_rx.recv().await {
            Ok(new_state) => {
                debug!("Clock task received state change: {:?}", new_state);
                current = new_state;
            }
            Err(RecvError::Lagged(skipped)) => {
                warn!("Clock task lagged behind by {} state changes", skipped);
                current = current_state(&state);
            }
            Err(RecvError::Closed) => {
                info!("State channel closed, stopping clock task");
                return;
            }
        }
    }
}

/// Tick until the timer leaves the running state, returning the state it left for
async fn run_pulses(state: &AppState, state_rx: &mut Receiver<TimerState>) -> TimerState {
    info!("Timer running, pulsing every {}ms", state.tick_interval.as_millis());

    let mut pulse = interval(state.tick_interval);
    // The first tick completes immediately
    pulse.tick().await;

    loop {
        tokio::select! {
            _ = pulse.tick() => {
                match state.tick() {
                    Ok(timer) if timer.is_running() => {
                        debug!("Tick: {}ms remaining", timer.time_remaining);
                    }
                    Ok(timer) => {
                        info!("Timer is {:?}, stopping pulse", timer.state);
                        return timer.state;
                    }
                    Err(e) => {
                        error!("Failed to tick timer: {}", e);
                    }
                }
            }

            changed = state_rx.recv() => {
                match changed {
                    Ok(TimerState::Running) => {}
                    Ok(new_state) => {
                        info!("Timer {:?}, stopping pulse", new_state);
                        return new_state;
                    }
                    Err(RecvError::Lagged(_)) => {
                        let new_state = current_state(state);
                        if new_state != TimerState::Running {
                            return new_state;
                        }
                    }
                    Err(RecvError::Closed) => {
                        return TimerState::Stopped;
                    }
                }
            }
        }
    }
}

fn current_state(state: &AppState) -> TimerState {
    match state.get_timer() {
        Ok(timer) => timer.state,
        Err(e) => {
            error!("Failed to read timer state: {}", e);
            TimerState::Paused
        }
    }
}
