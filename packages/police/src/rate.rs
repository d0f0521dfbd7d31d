//! Upstream error-rate bookkeeping.

use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};
use reqwest::header::HeaderMap;

/// Header carrying the number of calls left before the upstream error
/// limit trips.
pub const HEADER_RATE_REMAINING: &str = "X-ESI-Error-Limit-Remain";

/// Header carrying the number of seconds until the upstream error limit
/// resets.
pub const HEADER_RATE_RESET: &str = "X-ESI-Error-Limit-Reset";

/// Error-rate state reported by the upstream on a failed call.
///
/// The zero value (`remaining == 0`, no reset) is what a response without
/// rate headers produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rate {
    /// Calls remaining in the current window.
    pub remaining: u32,
    /// When the window resets. `None` when the upstream did not say.
    pub reset: Option<DateTime<Utc>>,
}

impl Rate {
    /// Reads the rate headers from `headers`.
    ///
    /// Missing or unparseable values read as zero. A reset offset of zero
    /// seconds leaves [`reset`](Self::reset) unset; anything else is added
    /// to `now`.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap, now: DateTime<Utc>) -> Self {
        let remaining = header_number::<u32>(headers, HEADER_RATE_REMAINING).unwrap_or(0);
        let reset = header_number::<i64>(headers, HEADER_RATE_RESET)
            .filter(|secs| *secs != 0)
            .and_then(TimeDelta::try_seconds)
            .and_then(|delta| now.checked_add_signed(delta));

        Self { remaining, reset }
    }

    /// Seconds from `now` until [`reset`](Self::reset), or zero when unset.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn seconds_until_reset(&self, now: DateTime<Utc>) -> f64 {
        self.reset
            .map_or(0.0, |reset| (reset - now).num_milliseconds() as f64 / 1000.0)
    }

    /// Human-readable summary with the reset countdown measured from `now`.
    #[must_use]
    pub fn describe(&self, now: DateTime<Utc>) -> String {
        format!(
            "error rate limit: {} remaining calls; reset in {:.0}s",
            self.remaining,
            self.seconds_until_reset(now)
        )
    }
}

/// Same as [`Rate::describe`] against the wall clock.
impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe(Utc::now()))
    }
}

fn header_number<T: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
}
