//! Folds a ledger into total active milliseconds
//!
//! Only time between a `Start` and the next event of a different kind counts.
//! The fold keeps an anchor entry that intervals are measured from:
//!
//! - a run of same-kind entries anchors on the first of the run, so repeated
//!   starts or ticks never move the interval start;
//! - once the anchor is a `Stop` the fold is frozen and everything after it
//!   is ignored, including later starts.

use super::ledger::{EventKind, LedgerEntry};

#[derive(Debug, Clone, Copy, Default)]
struct Accumulator<'a> {
    duration: i64,
    anchor: Option<&'a LedgerEntry>,
}

impl<'a> Accumulator<'a> {
    fn step(self, current: &'a LedgerEntry) -> Self {
        let Some(anchor) = self.anchor else {
            return Self {
                anchor: Some(current),
                ..self
            };
        };

        if anchor.kind == current.kind || anchor.kind == EventKind::Stop {
            return self;
        }

        let duration = if anchor.kind == EventKind::Start {
            self.duration + (current.timestamp - anchor.timestamp).num_milliseconds()
        } else {
            self.duration
        };

        Self {
            duration,
            anchor: Some(current),
        }
    }
}

/// Total active milliseconds recorded in `entries`.
///
/// The result is signed: wall-clock timestamps are taken as given, so a clock
/// stepped backwards can produce a negative interval.
pub fn tally(entries: &[LedgerEntry]) -> i64 {
    entries
        .iter()
        .fold(Accumulator::default(), Accumulator::step)
        .duration
}

/// `tally` for an optional ledger; absent counts as empty
pub fn tally_opt(entries: Option<&[LedgerEntry]>) -> i64 {
    entries.map(tally).unwrap_or(0)
}
