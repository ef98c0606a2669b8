// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Schedule data: named time points, the daily schedule, and adjustments.
//!
//! This module provides:
//! - [`TimePoint`]: a named point paired with its wall-clock time of day
//! - [`DailySchedule`]: one day's ordered list of time points
//! - [`Adjustments`]: per-point signed minute offsets
//!
//! All values are plain wall-clock data with no timezone: the external data
//! provider computes the base times for the user's location, and this crate
//! only does interval arithmetic on them.
//!
//! A [`DailySchedule`] is deliberately allowed to be incomplete or empty.
//! While the provider is still loading, UI callers construct models over a
//! degenerate schedule and get documented fallback answers instead of errors
//! (see [`ScheduleModel`](crate::ScheduleModel)).

use crate::point::Point;
use chrono::{Duration, NaiveDate, NaiveTime, ParseResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{
    de, ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer,
};

/// Wall-clock format used by the data provider: hours and minutes only.
const WALL_FMT: &str = "%H:%M";

// ═══════════════════════════════════════════════════════════════════════════
// TimePoint
// ═══════════════════════════════════════════════════════════════════════════

/// An immutable pair of a [`Point`] and its base time of day.
///
/// The time is a bare `HH:MM` wall-clock value within a single day; the
/// schedule wraps when `Night` rolls past midnight relative to the following
/// `Dawn`, but no individual `TimePoint` carries a date.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TimePoint {
    point: Point,
    time: NaiveTime,
}

impl TimePoint {
    /// Pair a point with its time of day.
    #[inline]
    pub const fn new(point: Point, time: NaiveTime) -> Self {
        Self { point, time }
    }

    /// Parse the provider's `"HH:MM"` representation.
    ///
    /// # Examples
    ///
    /// ```
    /// use waqt::{Point, TimePoint};
    ///
    /// let dawn = TimePoint::parse(Point::Dawn, "05:00").unwrap();
    /// assert_eq!(dawn.time().to_string(), "05:00:00");
    /// assert!(TimePoint::parse(Point::Dawn, "25:99").is_err());
    /// ```
    pub fn parse(point: Point, hh_mm: &str) -> ParseResult<Self> {
        Ok(Self::new(point, NaiveTime::parse_from_str(hh_mm, WALL_FMT)?))
    }

    /// The named point.
    #[inline]
    pub const fn point(&self) -> Point {
        self.point
    }

    /// The base time of day, before any adjustment.
    #[inline]
    pub const fn time(&self) -> NaiveTime {
        self.time
    }
}

impl fmt::Display for TimePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.point, self.time.format(WALL_FMT))
    }
}

// Serde support for TimePoint.
//
// Hand-written so the wire format keeps the provider's `"HH:MM"` string
// rather than chrono's default `HH:MM:SS` serialization.
#[cfg(feature = "serde")]
impl Serialize for TimePoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("TimePoint", 2)?;
        s.serialize_field("point", &self.point)?;
        s.serialize_field("time", &self.time.format(WALL_FMT).to_string())?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for TimePoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            point: Point,
            time: String,
        }

        let raw = Raw::deserialize(deserializer)?;
        TimePoint::parse(raw.point, &raw.time).map_err(de::Error::custom)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// DailySchedule
// ═══════════════════════════════════════════════════════════════════════════

/// One calendar day's schedule: a date, a secondary-calendar display label,
/// and the ordered time points.
///
/// The secondary label (e.g. a Hijri date string) is opaque: it is carried
/// through for display and never interpreted.
///
/// A schedule normally holds all six points in day order, but shorter or
/// empty lists are accepted: the provider may not have answered yet, and the
/// query layer degrades to documented fallbacks rather than rejecting the
/// value (see [`ScheduleModel`](crate::ScheduleModel)).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DailySchedule {
    date: NaiveDate,
    secondary_label: String,
    times: Vec<TimePoint>,
}

impl DailySchedule {
    /// Bind a date, its secondary-calendar label, and the day's time points.
    ///
    /// No validation is performed: short or empty `times` lists build a
    /// degenerate but usable schedule.
    pub fn new(
        date: NaiveDate,
        secondary_label: impl Into<String>,
        times: Vec<TimePoint>,
    ) -> Self {
        Self {
            date,
            secondary_label: secondary_label.into(),
            times,
        }
    }

    /// The Gregorian date this schedule was computed for.
    #[inline]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// The opaque secondary-calendar label, unmodified.
    #[inline]
    pub fn secondary_label(&self) -> &str {
        &self.secondary_label
    }

    /// The time points present, in the order supplied.
    #[inline]
    pub fn times(&self) -> &[TimePoint] {
        &self.times
    }

    /// Base time of day for `point`, or `None` if the schedule lacks it.
    pub fn time_of(&self, point: Point) -> Option<NaiveTime> {
        self.times
            .iter()
            .find(|tp| tp.point() == point)
            .map(TimePoint::time)
    }

    /// Whether all six points are present.
    pub fn is_complete(&self) -> bool {
        Point::ALL.iter().all(|&p| self.time_of(p).is_some())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Adjustments
// ═══════════════════════════════════════════════════════════════════════════

/// Per-point signed minute offsets, index-aligned with [`Point::ALL`].
///
/// Applied additively to each point's base time before any interval or
/// countdown computation.  Defaults to all zero.
///
/// # Examples
///
/// ```
/// use waqt::{Adjustments, Point};
///
/// let mut adj = Adjustments::default();
/// adj.set(Point::Night, -10);
/// assert_eq!(adj.get(Point::Night), -10);
/// assert_eq!(adj.get(Point::Dawn), 0);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Adjustments([i32; Point::COUNT]);

impl Adjustments {
    /// No adjustment on any point.
    pub const ZERO: Adjustments = Adjustments([0; Point::COUNT]);

    /// Build from six minute offsets in day order.
    #[inline]
    pub const fn new(minutes: [i32; Point::COUNT]) -> Self {
        Self(minutes)
    }

    /// The minute offset for `point`.
    #[inline]
    pub const fn get(&self, point: Point) -> i32 {
        self.0[point.index()]
    }

    /// Replace the minute offset for `point`.
    #[inline]
    pub fn set(&mut self, point: Point, minutes: i32) {
        self.0[point.index()] = minutes;
    }

    /// The offset for `point` as a signed duration.
    #[inline]
    pub fn offset(&self, point: Point) -> Duration {
        Duration::minutes(self.get(point) as i64)
    }
}

impl From<[i32; Point::COUNT]> for Adjustments {
    #[inline]
    fn from(minutes: [i32; Point::COUNT]) -> Self {
        Self::new(minutes)
    }
}
