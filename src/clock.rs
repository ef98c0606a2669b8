// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The model's notion of "now".
//!
//! [`Clock`] wraps a single `NaiveDateTime` in the schedule's local
//! wall-clock frame.  It starts at the real current instant but is otherwise
//! inert: once constructed (or fast-forwarded via [`Clock::advance`]) it is
//! an absolute value and does not track the real clock.  Callers driving a
//! live countdown re-supply real time each tick through [`Clock::set`].
//!
//! Keeping "now" an explicit, replaceable value is what makes the query
//! layer a pure function: simulated fast-forward in tests and previews uses
//! the same code path as live ticking.

use chrono::{Duration, Local, NaiveDateTime};

/// The instant all schedule queries are answered against.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Clock(NaiveDateTime);

impl Clock {
    /// A clock reading the real current local time, taken once.
    pub fn now() -> Self {
        Self(Local::now().naive_local())
    }

    /// A clock frozen at `instant`.
    #[inline]
    pub const fn at(instant: NaiveDateTime) -> Self {
        Self(instant)
    }

    /// The current reading.
    #[inline]
    pub const fn instant(&self) -> NaiveDateTime {
        self.0
    }

    /// Apply a relative offset (time travel).
    ///
    /// Negative components rewind.  After a call the clock is an absolute
    /// instant; it is not re-derived from real time on later reads.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use waqt::Clock;
    ///
    /// let noon = NaiveDate::from_ymd_opt(2026, 3, 14)
    ///     .unwrap()
    ///     .and_hms_opt(12, 0, 0)
    ///     .unwrap();
    /// let mut clock = Clock::at(noon);
    /// clock.advance(1, 30, 0);
    /// assert_eq!(clock.instant().time().to_string(), "13:30:00");
    /// ```
    pub fn advance(&mut self, hours: i64, minutes: i64, seconds: i64) {
        self.0 += Duration::hours(hours) + Duration::minutes(minutes) + Duration::seconds(seconds);
    }

    /// Replace the reading outright.
    ///
    /// This is the only resynchronization path: tick-driven callers invoke
    /// it with the real current time before each query.
    #[inline]
    pub fn set(&mut self, instant: NaiveDateTime) {
        self.0 = instant;
    }
}

impl From<NaiveDateTime> for Clock {
    #[inline]
    fn from(instant: NaiveDateTime) -> Self {
        Self::at(instant)
    }
}

#[cfg(test)]
mod tests {
    use super::Clock;
    use chrono::{Duration, NaiveDate};

    fn base() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 14)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_at_is_frozen() {
        let clock = Clock::at(base());
        assert_eq!(clock.instant(), base());
        assert_eq!(Clock::from(base()), clock);
    }

    #[test]
    fn test_advance_forward() {
        let mut clock = Clock::at(base());
        clock.advance(2, 30, 15);
        assert_eq!(
            clock.instant(),
            base() + Duration::hours(2) + Duration::minutes(30) + Duration::seconds(15)
        );
    }

    #[test]
    fn test_advance_backward() {
        let mut clock = Clock::at(base());
        clock.advance(0, -15, 0);
        assert_eq!(clock.instant(), base() - Duration::minutes(15));
    }

    #[test]
    fn test_advance_carries_across_midnight() {
        let mut clock = Clock::at(base());
        clock.advance(13, 0, 0);
        assert_eq!(
            clock.instant().date(),
            NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
        );
        assert_eq!(clock.instant().time().to_string(), "01:00:00");
    }

    #[test]
    fn test_set_replaces_reading() {
        let mut clock = Clock::at(base());
        clock.advance(5, 0, 0);
        clock.set(base());
        assert_eq!(clock.instant(), base());
    }

    #[test]
    fn test_now_is_close_to_local_now() {
        let clock = Clock::now();
        let delta = chrono::Local::now().naive_local() - clock.instant();
        assert!(delta >= Duration::zero());
        assert!(delta < Duration::seconds(5));
    }
}
