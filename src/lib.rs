//! Countdown Ledger - a countdown timer built on an event-ledger time model
//! 
//! The `timer` module is the pure core: it records lifecycle events and
//! recomputes elapsed time from them on demand. The remaining modules host it
//! behind an HTTP API with a clock task that pulses running timers.

pub mod config;
pub mod timer;
pub mod state;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::AppState;
pub use api::create_router;
pub use timer::{TimerParams, TimerState};
pub use utils::signals::shutdown_signal;
