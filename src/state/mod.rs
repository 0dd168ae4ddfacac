//! State management module
//! 
//! This module holds the live timer snapshot shared between the HTTP handlers
//! and the clock task.

pub mod app_state;

// Re-export main types
pub use app_state::{AppState, TimerEvent};
