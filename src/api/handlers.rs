//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use tracing::{error, info, warn};

use crate::{
    state::AppState,
    timer::{format_millis, parse_millis, TimerParams},
};
use super::responses::{HealthResponse, ResetRequest, StatusResponse, TimerResponse};

fn transition_response(
    result: Result<TimerParams, String>,
    message: &str,
) -> Result<Json<TimerResponse>, StatusCode> {
    match result {
        Ok(timer) => {
            info!("{}", message);
            Ok(Json(TimerResponse::from_timer(message.to_string(), timer)))
        }
        Err(e) => {
            error!("Failed to update timer: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /start - Start or resume the timer
pub async fn start_handler(State(state): State<Arc<AppState>>) -> Result<Json<TimerResponse>, StatusCode> {
    transition_response(state.start(), "Timer started")
}

/// Handle POST /pause - Pause the timer
pub async fn pause_handler(State(state): State<Arc<AppState>>) -> Result<Json<TimerResponse>, StatusCode> {
    transition_response(state.pause(), "Timer paused")
}

/// Handle POST /stop - Stop the timer
pub async fn stop_handler(State(state): State<Arc<AppState>>) -> Result<Json<TimerResponse>, StatusCode> {
    transition_response(state.stop(), "Timer stopped")
}

/// Handle POST /reset - Replace the timer with a fresh paused one
pub async fn reset_handler(
    State(state): State<Arc<AppState>>,
    body: Option<Json<ResetRequest>>,
) -> Result<(StatusCode, Json<TimerResponse>), StatusCode> {
    let request = body.map(|Json(request)| request).unwrap_or_default();

    let duration = match request.duration.as_deref().map(parse_millis).transpose() {
        Ok(duration) => duration,
        Err(e) => {
            warn!("Rejected reset: {}", e);
            let timer = state.get_timer().map_err(|e| {
                error!("Failed to get timer: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            })?;
            return Ok((StatusCode::BAD_REQUEST, Json(TimerResponse::error(e.to_string(), timer))));
        }
    };

    match state.reset(duration) {
        Ok(timer) => {
            let message = format!("Timer reset to {}", format_millis(timer.duration));
            info!("{}", message);
            Ok((StatusCode::OK, Json(TimerResponse::from_timer(message, timer))))
        }
        Err(e) => {
            error!("Failed to reset timer: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /status - Return the live timer
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, StatusCode> {
    // Running timers are recomputed on read so the answer is current
    let timer = match state.tick() {
        Ok(t) => t,
        Err(e) => {
            error!("Failed to get timer: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        display: format_millis(timer.time_remaining),
        elapsed_ms: timer.elapsed(),
        timer,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
