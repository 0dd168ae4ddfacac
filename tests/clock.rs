use std::{sync::Arc, time::Duration};

use tokio::time::timeout;

use countdown_ledger::{
    state::{AppState, TimerEvent},
    tasks::clock_task,
    timer::{EventKind, TimerState},
};

fn state(duration: u64, tick_ms: u64) -> Arc<AppState> {
    Arc::new(AppState::new(
        0,
        "127.0.0.1".to_string(),
        duration,
        Duration::from_millis(tick_ms),
    ))
}

async fn next_expired(events: &mut tokio::sync::broadcast::Receiver<TimerEvent>) {
    loop {
        if events.recv().await.unwrap() == TimerEvent::Expired {
            return;
        }
    }
}

#[tokio::test]
async fn clock_runs_timer_to_expiry() {
    let state = state(100, 10);
    let mut events = state.event_tx.subscribe();
    tokio::spawn(clock_task(Arc::clone(&state)));

    state.start().unwrap();
    timeout(Duration::from_secs(5), next_expired(&mut events))
        .await
        .expect("timer should expire");

    let timer = state.get_timer().unwrap();
    assert_eq!(timer.state, TimerState::Stopped);
    assert_eq!(timer.time_remaining, 0);
    let kinds: Vec<_> = timer.ledger.entries().iter().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![EventKind::Start, EventKind::Stop]);
}

#[tokio::test]
async fn clock_picks_up_timer_started_before_it() {
    let state = state(100, 10);
    let mut events = state.event_tx.subscribe();
    state.start().unwrap();

    tokio::spawn(clock_task(Arc::clone(&state)));
    timeout(Duration::from_secs(5), next_expired(&mut events))
        .await
        .expect("timer should expire");

    assert_eq!(state.get_timer().unwrap().state, TimerState::Stopped);
}

#[tokio::test]
async fn clock_leaves_paused_timer_alone() {
    let state = state(60_000, 10);
    let mut updates = state.timer_update_tx.subscribe();
    tokio::spawn(clock_task(Arc::clone(&state)));

    state.start().unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;
    let paused = state.pause().unwrap();
    updates.borrow_and_update();

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(!updates.has_changed().unwrap());
    assert_eq!(state.get_timer().unwrap(), paused);
}
