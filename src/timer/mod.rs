//! Countdown timer core
//!
//! Pure, synchronous logic: elapsed time is recomputed from a ledger of
//! lifecycle events rather than decremented on every pulse. Scheduling the
//! pulses is left to the host.

pub mod codec;
pub mod ledger;
pub mod params;
pub mod tally;

// Re-export main types
pub use codec::{format_millis, parse_millis, InvalidFormat};
pub use ledger::{EventKind, Ledger, LedgerEntry};
pub use params::{TimerParams, TimerState};
pub use tally::{tally, tally_opt};
