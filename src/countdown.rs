// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Countdown decomposition and `HH:MM:SS` formatting.

use chrono::Duration;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A non-negative span decomposed into whole hours, minutes, and seconds.
///
/// Built from a signed [`Duration`] with floor semantics; negative inputs
/// clamp to [`Countdown::ZERO`] so display code never sees a minus sign.
///
/// # Examples
///
/// ```
/// use chrono::Duration;
/// use waqt::Countdown;
///
/// let c = Countdown::from_duration(Duration::seconds(3 * 3600 + 61));
/// assert_eq!((c.hours, c.minutes, c.seconds), (3, 1, 1));
/// assert_eq!(c.to_string(), "03:01:01");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Countdown {
    /// Whole hours remaining.
    pub hours: i64,
    /// Whole minutes remaining after `hours`.
    pub minutes: i64,
    /// Whole seconds remaining after `minutes`.
    pub seconds: i64,
}

impl Countdown {
    /// Zero remaining; also the degenerate-schedule fallback.
    pub const ZERO: Countdown = Countdown {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Decompose a duration, clamping negative spans to zero.
    pub fn from_duration(span: Duration) -> Self {
        let total = span.num_seconds().max(0);
        Self {
            hours: total / 3600,
            minutes: (total % 3600) / 60,
            seconds: total % 60,
        }
    }

    /// The span collapsed back to seconds.
    #[inline]
    pub const fn total_seconds(&self) -> i64 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }

    /// The `[h, m, s]` triple.
    #[inline]
    pub const fn as_hms(&self) -> [i64; 3] {
        [self.hours, self.minutes, self.seconds]
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Countdown;
    use chrono::Duration;

    #[test]
    fn test_decomposition_floor() {
        let c = Countdown::from_duration(Duration::seconds(4 * 3600 + 31 * 60 + 59));
        assert_eq!(c.as_hms(), [4, 31, 59]);
    }

    #[test]
    fn test_subsecond_truncates() {
        let c = Countdown::from_duration(Duration::milliseconds(1_999));
        assert_eq!(c.as_hms(), [0, 0, 1]);
    }

    #[test]
    fn test_negative_clamps_to_zero() {
        let c = Countdown::from_duration(Duration::seconds(-5));
        assert_eq!(c, Countdown::ZERO);
    }

    #[test]
    fn test_display_zero_padded() {
        let c = Countdown::from_duration(Duration::seconds(7 * 60 + 3));
        assert_eq!(c.to_string(), "00:07:03");
        assert_eq!(Countdown::ZERO.to_string(), "00:00:00");
    }

    #[test]
    fn test_total_seconds_roundtrip() {
        let c = Countdown::from_duration(Duration::seconds(12_345));
        assert_eq!(c.total_seconds(), 12_345);
    }

    #[test]
    fn test_more_than_a_day_keeps_hours() {
        let c = Countdown::from_duration(Duration::hours(27) + Duration::minutes(5));
        assert_eq!(c.as_hms(), [27, 5, 0]);
    }
}
