//! Background tasks module
//! 
//! This module contains background tasks that run alongside the HTTP server.

pub mod clock;
pub mod events;

// Re-export main functions
pub use clock::clock_task;
pub use events::timer_event_task;
