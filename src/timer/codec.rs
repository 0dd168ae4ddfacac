//! Conversion between millisecond durations and "M:SS" / "SS" display strings

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// `[minutes:]seconds`, both ASCII digit groups, anchored
static TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:([0-9]+):)?([0-9]+)$").expect("time pattern is valid")
});

/// Returned when a time string does not match `[minutes:]seconds`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid time: '{text}'")]
pub struct InvalidFormat {
    pub text: String,
}

impl InvalidFormat {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

/// Format milliseconds as "SS", or "M:SS" once at least a minute remains.
/// Sub-second precision is truncated.
pub fn format_millis(milliseconds: u64) -> String {
    let mut seconds = milliseconds / 1000;
    let minutes = seconds / 60;
    seconds -= minutes * 60;

    if minutes > 0 {
        format!("{}:{:02}", minutes, seconds)
    } else {
        format!("{:02}", seconds)
    }
}

/// Parse a "SS" or "M:SS" string into milliseconds.
///
/// No trimming is done, and signs, fractions or any surrounding text are
/// rejected. The seconds group is not bounded to 59, so `"0:90"` is 90 seconds.
pub fn parse_millis(text: &str) -> Result<u64, InvalidFormat> {
    let captures = TIME_RE
        .captures(text)
        .ok_or_else(|| InvalidFormat::new(text))?;

    let minutes = match captures.get(1) {
        Some(m) => m.as_str().parse::<u64>().map_err(|_| InvalidFormat::new(text))?,
        None => 0,
    };
    let seconds = captures[2]
        .parse::<u64>()
        .map_err(|_| InvalidFormat::new(text))?;

    minutes
        .checked_mul(60)
        .and_then(|m| m.checked_add(seconds))
        .and_then(|s| s.checked_mul(1000))
        .ok_or_else(|| InvalidFormat::new(text))
}
