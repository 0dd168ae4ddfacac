use std::{sync::Arc, time::Duration};

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use countdown_ledger::{create_router, AppState};

fn app(duration: u64) -> (Arc<AppState>, Router) {
    let state = Arc::new(AppState::new(
        0,
        "127.0.0.1".to_string(),
        duration,
        Duration::from_millis(1000),
    ));
    let router = create_router(Arc::clone(&state));
    (state, router)
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post(router: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::post(uri).body(Body::empty()).unwrap();
    send(router, request).await
}

async fn post_json(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    send(router, request).await
}

#[tokio::test]
async fn health_reports_ok() {
    let (_, router) = app(30000);
    let (status, body) = get(&router, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn status_of_fresh_timer() {
    let (_, router) = app(90000);
    let (status, body) = get(&router, "/status").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["timer"]["state"], "paused");
    assert_eq!(body["timer"]["duration"], 90000);
    assert_eq!(body["timer"]["time_remaining"], 90000);
    assert_eq!(body["timer"]["ledger"], serde_json::json!([]));
    assert_eq!(body["display"], "1:30");
    assert_eq!(body["elapsed_ms"], 0);
    assert!(body["last_action"].is_null());
}

#[tokio::test]
async fn start_pause_stop_record_ledger() {
    let (state, router) = app(30000);

    let (status, body) = post(&router, "/start").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "running");
    assert_eq!(body["timer"]["state"], "running");

    let (_, body) = post(&router, "/pause").await;
    assert_eq!(body["status"], "paused");

    let (_, body) = post(&router, "/stop").await;
    assert_eq!(body["status"], "stopped");
    assert_eq!(body["timer"]["time_remaining"], 0);
    assert_eq!(body["display"], "00");

    let kinds: Vec<_> = body["timer"]["ledger"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["kind"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(kinds, vec!["start", "pause", "stop"]);

    let (_, status) = get(&router, "/status").await;
    assert_eq!(status["last_action"], "stop");
    assert_eq!(state.get_timer().unwrap().ledger.len(), 3);
}

#[tokio::test]
async fn status_recomputes_running_timer() {
    let (_, router) = app(30000);
    post(&router, "/start").await;
    tokio::time::sleep(Duration::from_millis(50)).await;

    let (_, body) = get(&router, "/status").await;
    let remaining = body["timer"]["time_remaining"].as_u64().unwrap();
    assert!(remaining < 30000 && remaining > 25000);
    assert_eq!(body["timer"]["state"], "running");
    // The status query must not persist its tick
    assert_eq!(body["timer"]["ledger"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn reset_with_duration() {
    let (_, router) = app(30000);
    post(&router, "/start").await;

    let (status, body) = post_json(&router, "/reset", serde_json::json!({ "duration": "1:29" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "paused");
    assert_eq!(body["timer"]["duration"], 89000);
    assert_eq!(body["timer"]["ledger"], serde_json::json!([]));
    assert_eq!(body["display"], "1:29");
}

#[tokio::test]
async fn reset_without_body_uses_default() {
    let (_, router) = app(30000);
    post_json(&router, "/reset", serde_json::json!({ "duration": "5" })).await;

    let (status, body) = post(&router, "/reset").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["timer"]["duration"], 30000);
}

#[tokio::test]
async fn reset_rejects_bad_time() {
    let (state, router) = app(30000);

    let (status, body) = post_json(&router, "/reset", serde_json::json!({ "duration": "abc" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "invalid time: 'abc'");
    assert_eq!(state.get_timer().unwrap().duration, 30000);
}

#[tokio::test]
async fn pause_reports_time_spent_running() {
    let (_, router) = app(30000);
    post(&router, "/start").await;
    tokio::time::sleep(Duration::from_millis(50)).await;

    let (status, body) = post(&router, "/pause").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "paused");
    let remaining = body["timer"]["time_remaining"].as_u64().unwrap();
    assert!(remaining < 30000 && remaining > 25000);
}

#[tokio::test]
async fn start_after_stop_begins_a_new_countdown() {
    let (_, router) = app(30000);
    post(&router, "/start").await;
    post(&router, "/stop").await;

    let (_, body) = post(&router, "/start").await;
    assert_eq!(body["status"], "running");
    assert_eq!(body["timer"]["time_remaining"], 30000);
    assert_eq!(body["timer"]["ledger"].as_array().unwrap().len(), 1);

    tokio::time::sleep(Duration::from_millis(50)).await;
    let (_, body) = get(&router, "/status").await;
    let remaining = body["timer"]["time_remaining"].as_u64().unwrap();
    assert!(remaining < 30000);
    assert_eq!(body["timer"]["state"], "running");
}
