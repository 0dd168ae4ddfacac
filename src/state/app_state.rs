//! Main application state management

use std::{
    sync::Mutex,
    time::{Duration, Instant},
};
use chrono::{DateTime, Utc};
use tokio::sync::{broadcast, watch};
use tracing::{debug, info, warn};

use crate::timer::{format_millis, TimerParams, TimerState};

/// Notifications emitted while the clock drives a running timer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    /// A pulse recomputed the remaining time
    Tick { time_remaining: u64 },
    /// A pulse found the timer out of time and stopped it
    Expired,
}

/// Application state owning the single live timer snapshot
#[derive(Debug)]
pub struct AppState {
    /// Latest timer snapshot; every transition replaces it wholesale
    pub timer: Mutex<TimerParams>,
    /// Duration used when a reset does not name one, in milliseconds
    pub default_duration: u64,
    /// Cadence of the clock task
    pub tick_interval: Duration,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Mutex<Option<String>>,
    pub last_action_time: Mutex<Option<DateTime<Utc>>>,
    /// Lifecycle state changes, consumed by the clock task
    pub state_change_tx: broadcast::Sender<TimerState>,
    /// Latest snapshot for watchers
    pub timer_update_tx: watch::Sender<TimerParams>,
    /// Keep the receiver alive to prevent channel closure
    pub _timer_update_rx: watch::Receiver<TimerParams>,
    /// Tick and expiry notifications
    pub event_tx: broadcast::Sender<TimerEvent>,
}

impl AppState {
    /// Create a new AppState with a paused timer of `duration` milliseconds
    pub fn new(port: u16, host: String, duration: u64, tick_interval: Duration) -> Self {
        let timer = TimerParams::new(duration);
        let (state_change_tx, _) = broadcast::channel(100);
        let (event_tx, _) = broadcast::channel(100);
        let (timer_update_tx, timer_update_rx) = watch::channel(timer.clone());

        Self {
            timer: Mutex::new(timer),
            default_duration: duration,
            tick_interval,
            start_time: Instant::now(),
            port,
            host,
            last_action: Mutex::new(None),
            last_action_time: Mutex::new(None),
            state_change_tx,
            timer_update_tx,
            _timer_update_rx: timer_update_rx,
            event_tx,
        }
    }

    /// Apply a user-facing transition and notify listeners
    pub fn update_timer<F>(&self, action: &str, transition: F) -> Result<TimerParams, String>
    where
        F: FnOnce(TimerParams) -> TimerParams,
    {
        let mut timer = self.timer.lock()
            .map_err(|e| format!("Failed to lock timer: {}", e))?;

        let next = transition(timer.clone());
        *timer = next.clone();
        drop(timer); // Release the lock early

        // Update last action tracking
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }

        self.publish(&next);

        // Wake the clock task
        if let Err(e) = self.state_change_tx.send(next.state) {
            debug!("No state change listeners: {}", e);
        }

        Ok(next)
    }

    /// Start or resume the timer.
    ///
    /// A stopped timer's ledger is frozen, so starting it again begins a
    /// fresh countdown of the same duration instead.
    pub fn start(&self) -> Result<TimerParams, String> {
        info!("Starting timer");
        self.update_timer("start", |timer| {
            if timer.state == TimerState::Stopped {
                debug!("Restarting stopped timer with a fresh ledger");
                TimerParams::new(timer.duration).start()
            } else {
                timer.start()
            }
        })
    }

    /// Pause the timer, folding the running interval into `time_remaining`
    /// first. A timer that runs out during that refresh stays stopped.
    pub fn pause(&self) -> Result<TimerParams, String> {
        info!("Pausing timer");
        let mut expired = false;
        let timer = self.update_timer("pause", |timer| {
            let was_running = timer.is_running();
            let refreshed = timer.tick();
            if was_running && refreshed.state == TimerState::Stopped {
                expired = true;
                refreshed
            } else {
                refreshed.pause()
            }
        })?;

        if expired {
            info!("Timer expired");
            let _ = self.event_tx.send(TimerEvent::Expired);
        }

        Ok(timer)
    }

    /// Stop the timer
    pub fn stop(&self) -> Result<TimerParams, String> {
        info!("Stopping timer");
        self.update_timer("stop", TimerParams::stop)
    }

    /// Replace the timer with a fresh paused one, discarding its ledger
    pub fn reset(&self, duration: Option<u64>) -> Result<TimerParams, String> {
        let duration = duration.unwrap_or(self.default_duration);
        info!("Resetting timer to {}", format_millis(duration));
        self.update_timer("reset", |_| TimerParams::new(duration))
    }

    /// Recompute the remaining time of a running timer.
    ///
    /// Not recorded as a user action. Emits `TimerEvent::Expired` and a
    /// `Stopped` state change when this pulse runs the timer out.
    pub fn tick(&self) -> Result<TimerParams, String> {
        let mut timer = self.timer.lock()
            .map_err(|e| format!("Failed to lock timer: {}", e))?;

        if !timer.is_running() {
            return Ok(timer.clone());
        }

        let next = timer.clone().tick();
        *timer = next.clone();
        drop(timer);

        self.publish(&next);

        // Nobody listening is fine
        if next.state == TimerState::Stopped {
            info!("Timer expired");
            let _ = self.event_tx.send(TimerEvent::Expired);
            let _ = self.state_change_tx.send(next.state);
        } else {
            let _ = self.event_tx.send(TimerEvent::Tick {
                time_remaining: next.time_remaining,
            });
        }

        Ok(next)
    }

    fn publish(&self, timer: &TimerParams) {
        if let Err(e) = self.timer_update_tx.send(timer.clone()) {
            warn!("Failed to send timer update: {}", e);
        }
    }

    /// Get current timer snapshot
    pub fn get_timer(&self) -> Result<TimerParams, String> {
        self.timer.lock()
            .map(|timer| timer.clone())
            .map_err(|e| format!("Failed to lock timer: {}", e))
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}
