//! Countdown decomposition for the featured-event card.

use chrono::{DateTime, Utc};

const MILLIS_PER_SECOND: i64 = 1_000;
const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// Time left until a target instant, decomposed for display.
///
/// All components are non-negative; the terminal state (target reached or
/// passed) is all zeros.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeRemaining {
    /// Whole days remaining.
    pub days: u64,
    /// Hours remaining after whole days, `0..24`.
    pub hours: u64,
    /// Minutes remaining after whole hours, `0..60`.
    pub minutes: u64,
    /// Seconds remaining after whole minutes, `0..60`.
    pub seconds: u64,
}

impl TimeRemaining {
    /// The terminal state: the target has been reached or passed.
    pub const ZERO: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// `true` once the countdown has finished.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }
}

/// Time remaining from `now` until `target`.
///
/// Pure function of its two arguments: the caller re-invokes it on a
/// periodic schedule to animate a live countdown; there is no timing
/// behavior here. A `target` at or before `now` yields
/// [`TimeRemaining::ZERO`], never negative components.
#[must_use]
pub fn time_remaining(target: DateTime<Utc>, now: DateTime<Utc>) -> TimeRemaining {
    let diff = target.signed_duration_since(now).num_milliseconds();
    if diff <= 0 {
        return TimeRemaining::ZERO;
    }

    #[allow(clippy::cast_sign_loss)] // diff > 0 checked above
    let remainder = |value: i64| value as u64;

    TimeRemaining {
        days: remainder(diff / MILLIS_PER_DAY),
        hours: remainder((diff % MILLIS_PER_DAY) / MILLIS_PER_HOUR),
        minutes: remainder((diff % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE),
        seconds: remainder((diff % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND),
    }
}
