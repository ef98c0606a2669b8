// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The schedule model: period membership, next point, and countdowns.
//!
//! [`ScheduleModel`] binds one [`DailySchedule`], one [`Adjustments`], and
//! one [`Clock`], and answers every query by recomputing from those three
//! values.  Nothing derived is cached: with six points the recomputation is
//! trivial, and the answer can never go stale against a clock or settings
//! change.
//!
//! # Period layout
//!
//! The six points split the day into six half-open periods, tested in fixed
//! order with first match winning:
//!
//! ```text
//! [Dawn, Sunrise) [Sunrise, Midday) [Midday, Afternoon)
//! [Afternoon, Sunset) [Sunset, Night) [Night, next-day Dawn)
//! ```
//!
//! The last period wraps across midnight and doubles as the fallback: an
//! instant matching no earlier interval is in it by definition.
//!
//! # Fallback contract
//!
//! Queries never fail.  A schedule missing points (the provider has not
//! answered yet) yields `00:00` labels, a `Night`/`Dawn` period, and a zero
//! countdown, so a UI polling the model during data loading renders a frozen
//! placeholder instead of crashing.  Callers must not read those sentinels
//! back as real schedule entries.

use crate::clock::Clock;
use crate::countdown::Countdown;
use crate::point::Point;
use crate::schedule::{Adjustments, DailySchedule};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Label returned for points the schedule does not carry.
const SENTINEL: NaiveTime = NaiveTime::MIN;

/// Answer to [`ScheduleModel::current_period`]: the period the clock instant
/// falls in, the point that ends it, and the time left until that point.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PeriodStatus {
    /// The point that opened the current period.
    pub now: Point,
    /// The point that will close it.
    pub next: Point,
    /// Time until `next`, floor-decomposed; zero for degenerate schedules.
    pub remaining: Countdown,
}

/// One day's schedule plus adjustments plus a movable "now".
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use waqt::{DailySchedule, Point, ScheduleModel, TimePoint};
///
/// let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
/// let times = vec![
///     TimePoint::parse(Point::Dawn, "05:00").unwrap(),
///     TimePoint::parse(Point::Sunrise, "06:20").unwrap(),
///     TimePoint::parse(Point::Midday, "12:05").unwrap(),
///     TimePoint::parse(Point::Afternoon, "15:30").unwrap(),
///     TimePoint::parse(Point::Sunset, "18:10").unwrap(),
///     TimePoint::parse(Point::Night, "19:40").unwrap(),
/// ];
/// let mut model = ScheduleModel::new(DailySchedule::new(date, "", times));
///
/// model.set_clock(date.and_hms_opt(12, 30, 0).unwrap());
/// let status = model.current_period();
/// assert_eq!(status.now, Point::Midday);
/// assert_eq!(status.next, Point::Afternoon);
/// assert_eq!(status.remaining.as_hms(), [3, 0, 0]);
/// assert_eq!(model.time_until_next(), "03:00:00");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleModel {
    schedule: DailySchedule,
    adjustments: Adjustments,
    clock: Clock,
}

impl ScheduleModel {
    /// Bind a schedule with zero adjustments; the clock starts at the real
    /// current instant.
    pub fn new(schedule: DailySchedule) -> Self {
        Self::with_adjustments(schedule, Adjustments::ZERO)
    }

    /// Bind a schedule and its adjustments; the clock starts at the real
    /// current instant.  No validation: incomplete schedules build a model
    /// that answers with the documented fallbacks.
    pub fn with_adjustments(schedule: DailySchedule, adjustments: Adjustments) -> Self {
        Self {
            schedule,
            adjustments,
            clock: Clock::now(),
        }
    }

    /// The bound schedule.
    #[inline]
    pub fn schedule(&self) -> &DailySchedule {
        &self.schedule
    }

    /// The bound adjustments.
    #[inline]
    pub const fn adjustments(&self) -> Adjustments {
        self.adjustments
    }

    /// The instant queries are currently answered against.
    #[inline]
    pub const fn clock(&self) -> NaiveDateTime {
        self.clock.instant()
    }

    /// Fast-forward (or rewind) the clock by a relative offset.
    ///
    /// After this the clock is absolute: it no longer tracks real time until
    /// [`set_clock`](Self::set_clock) resynchronizes it.
    pub fn advance_clock(&mut self, hours: i64, minutes: i64, seconds: i64) {
        self.clock.advance(hours, minutes, seconds);
    }

    /// Replace the clock reading outright.
    ///
    /// Live countdown callers invoke this with the real current time on each
    /// tick; the model never refreshes itself.
    pub fn set_clock(&mut self, instant: NaiveDateTime) {
        self.clock.set(instant);
    }

    /// The point's adjusted instant anchored to `day`.
    ///
    /// Computed on full instants so an adjustment pushing the time past
    /// midnight (or before 00:00) carries into the neighboring day instead
    /// of wrapping silently.
    fn adjusted_instant(&self, day: NaiveDate, point: Point) -> Option<NaiveDateTime> {
        let base = self.schedule.time_of(point)?;
        Some(day.and_time(base) + self.adjustments.offset(point))
    }

    /// All six adjusted instants anchored to `day`, or `None` if any point
    /// is missing.
    fn adjusted_day(&self, day: NaiveDate) -> Option<[NaiveDateTime; Point::COUNT]> {
        let mut out = [NaiveDateTime::MIN; Point::COUNT];
        for p in Point::ALL {
            out[p.index()] = self.adjusted_instant(day, p)?;
        }
        Some(out)
    }

    /// The point's base time plus its adjustment, normalized mod 24 h.
    ///
    /// Returns the `00:00` sentinel when the schedule lacks the point; this
    /// is a defined fallback, not a schedule entry.
    pub fn adjusted_time_of(&self, point: Point) -> NaiveTime {
        self.adjusted_instant(self.clock().date(), point)
            .map_or(SENTINEL, |instant| instant.time())
    }

    /// [`adjusted_time_of`](Self::adjusted_time_of) formatted as `"HH:MM"`.
    pub fn adjusted_label(&self, point: Point) -> String {
        self.adjusted_time_of(point).format("%H:%M").to_string()
    }

    /// The core query: which period is the clock instant in, which point
    /// ends it, and how long until that point.
    ///
    /// The five day-interior intervals are tested in order; anything else is
    /// the wraparound `[Night, next-day Dawn)` period, which also serves as
    /// the degenerate-schedule fallback (with a zero countdown).
    pub fn current_period(&self) -> PeriodStatus {
        let at = self.clock();
        let Some(instants) = self.adjusted_day(at.date()) else {
            return PeriodStatus {
                now: Point::Night,
                next: Point::Dawn,
                remaining: Countdown::ZERO,
            };
        };

        for now in Point::ALL.iter().take(Point::COUNT - 1).copied() {
            let next = now.next();
            if instants[now.index()] <= at && at < instants[next.index()] {
                return PeriodStatus {
                    now,
                    next,
                    remaining: Countdown::from_duration(instants[next.index()] - at),
                };
            }
        }

        // Wraparound: either past Night tonight, or before Dawn after
        // midnight.  The next Dawn is tomorrow's in the first case.
        let next_dawn = if at >= instants[Point::Night.index()] {
            instants[Point::Dawn.index()] + Duration::days(1)
        } else {
            instants[Point::Dawn.index()]
        };
        PeriodStatus {
            now: Point::Night,
            next: Point::Dawn,
            remaining: Countdown::from_duration(next_dawn - at),
        }
    }

    /// The half-open instant bounds of the current period, or `None` for a
    /// degenerate schedule.
    ///
    /// For the wraparound period the bounds span midnight: `(tonight's
    /// Night, tomorrow's Dawn)` when the instant is past Night, and
    /// `(yesterday's Night, today's Dawn)` when it is before Dawn.
    pub fn current_interval(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let at = self.clock();
        let instants = self.adjusted_day(at.date())?;
        let status = self.current_period();

        if status.now != Point::Night {
            return Some((
                instants[status.now.index()],
                instants[status.next.index()],
            ));
        }

        let night = instants[Point::Night.index()];
        let dawn = instants[Point::Dawn.index()];
        if at >= night {
            Some((night, dawn + Duration::days(1)))
        } else {
            Some((night - Duration::days(1), dawn))
        }
    }

    /// Whether the clock instant is strictly after the point's adjusted
    /// instant on the clock's calendar day.
    ///
    /// Deliberately same-day-only: unlike
    /// [`current_period`](Self::current_period), the comparison never
    /// considers the wraparound into the next day.  `false` for points the
    /// schedule lacks.
    pub fn is_point_passed(&self, point: Point) -> bool {
        let at = self.clock();
        match self.adjusted_instant(at.date(), point) {
            Some(instant) => at > instant,
            None => false,
        }
    }

    /// Time until the next point as a zero-padded `"HH:MM:SS"` string.
    ///
    /// Recomputed from scratch on every call (same computation as
    /// [`current_period`](Self::current_period), never cached); always
    /// non-negative.
    pub fn time_until_next(&self) -> String {
        self.current_period().remaining.to_string()
    }
}
