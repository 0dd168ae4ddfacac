//! Timer parameters and their lifecycle transitions

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::{
    ledger::{EventKind, Ledger},
    tally::tally,
};

/// Lifecycle state of a timer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Running,
    #[default]
    Paused,
    Stopped,
}

/// Snapshot of a single countdown timer.
///
/// Transitions consume the snapshot and return the next one; the caller
/// threads the latest value forward. All durations are milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerParams {
    pub duration: u64,
    pub time_remaining: u64,
    pub state: TimerState,
    pub ledger: Ledger,
}

impl TimerParams {
    /// Build a fully populated timer. `time_remaining` defaults to `duration`,
    /// `state` to `Paused`, and `ledger` to empty.
    pub fn init(
        duration: u64,
        time_remaining: Option<u64>,
        state: Option<TimerState>,
        ledger: Option<Ledger>,
    ) -> Self {
        Self {
            duration,
            time_remaining: time_remaining.unwrap_or(duration),
            state: state.unwrap_or_default(),
            ledger: ledger.unwrap_or_default(),
        }
    }

    /// Paused timer with the full duration remaining and no history
    pub fn new(duration: u64) -> Self {
        Self::init(duration, None, None, None)
    }

    #[must_use]
    pub fn start(self) -> Self {
        trace!("timer start");
        Self {
            state: TimerState::Running,
            ledger: self.ledger.append(EventKind::Start),
            ..self
        }
    }

    /// Pause without touching `time_remaining`
    #[must_use]
    pub fn pause(self) -> Self {
        trace!("timer pause");
        Self {
            state: TimerState::Paused,
            ledger: self.ledger.append(EventKind::Pause),
            ..self
        }
    }

    #[must_use]
    pub fn stop(self) -> Self {
        trace!("timer stop");
        Self {
            state: TimerState::Stopped,
            time_remaining: 0,
            ledger: self.ledger.append(EventKind::Stop),
            ..self
        }
    }

    /// Recompute `time_remaining` from the ledger as of now.
    ///
    /// Only a running timer is affected. The query uses a copy of the ledger
    /// with a synthetic tick appended, which is dropped afterwards. Reaching
    /// zero stops the timer, recording a real `Stop`.
    #[must_use]
    pub fn tick(self) -> Self {
        if self.state != TimerState::Running {
            return self;
        }

        let elapsed = u64::try_from(tally(self.ledger.with_tick().entries())).unwrap_or(0);
        let remaining = self.duration.saturating_sub(elapsed);

        if remaining == 0 {
            debug!(duration = self.duration, elapsed, "timer ran out");
            return self.stop();
        }

        Self {
            time_remaining: remaining,
            ..self
        }
    }

    /// Total active milliseconds in the persisted ledger
    pub fn elapsed(&self) -> i64 {
        tally(self.ledger.entries())
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }
}
