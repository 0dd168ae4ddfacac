//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::{format_millis, TimerParams, TimerState};

/// API response structure for timer transition endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    /// Remaining time as "M:SS" or "SS"
    pub display: String,
    pub timer: TimerParams,
}

impl TimerResponse {
    /// Create a new API response
    pub fn new(status: String, message: String, timer: TimerParams) -> Self {
        Self {
            status,
            message,
            timestamp: Utc::now(),
            display: format_millis(timer.time_remaining),
            timer,
        }
    }

    /// Create a response whose status mirrors the timer state
    pub fn from_timer(message: String, timer: TimerParams) -> Self {
        let status = match timer.state {
            TimerState::Running => "running",
            TimerState::Paused => "paused",
            TimerState::Stopped => "stopped",
        };
        Self::new(status.to_string(), message, timer)
    }

    /// Create an error response
    pub fn error(message: String, timer: TimerParams) -> Self {
        Self::new("error".to_string(), message, timer)
    }
}

/// Optional body for POST /reset
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResetRequest {
    /// New duration as "M:SS" or "SS"
    pub duration: Option<String>,
}

/// Status response with the live timer and server metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub timer: TimerParams,
    pub display: String,
    /// Active milliseconds recorded in the ledger
    pub elapsed_ms: i64,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
