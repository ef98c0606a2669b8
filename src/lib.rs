// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Prayer-Time Schedule Module
//!
//! This crate models a day's fixed schedule of six named prayer-time points
//! and answers "which period are we in", "what comes next", and "how long
//! until it" against a caller-controlled clock.
//!
//! # Core types
//!
//! - [`Point`] — closed enumeration of the six named day points.
//! - [`TimePoint`] — a point paired with its base `HH:MM` time of day.
//! - [`DailySchedule`] — a date, a secondary-calendar label, and the day's
//!   time points.
//! - [`Adjustments`] — per-point signed minute offsets.
//! - [`Clock`] — the movable "now" (real at construction, then explicit).
//! - [`ScheduleModel`] — binds the three inputs and answers the queries.
//! - [`PeriodStatus`] — the `(now, next, remaining)` query result.
//! - [`Countdown`] — h/m/s decomposition with `HH:MM:SS` display.
//!
//! # The day's periods
//!
//! | Period | Interval |
//! |--------|----------|
//! | Dawn | `[Dawn, Sunrise)` |
//! | Sunrise | `[Sunrise, Midday)` |
//! | Midday | `[Midday, Afternoon)` |
//! | Afternoon | `[Afternoon, Sunset)` |
//! | Sunset | `[Sunset, Night)` |
//! | Night | `[Night, next-day Dawn)` — wraps across midnight |
//!
//! Base times come pre-computed from an external provider; this crate does
//! no astronomical calculation.  All values are naive local wall-clock data.
//!
//! # Never-fail queries
//!
//! The query layer never panics and never returns `Err`.  A schedule still
//! missing points (data is loading) degrades to documented sentinels:
//! `00:00` labels, a `Night`/`Dawn` period, and a zero countdown.  UI code
//! is written against this contract, so it is part of the public API.
//!
//! # Quick example
//!
//! ```
//! use chrono::NaiveDate;
//! use waqt::{Adjustments, DailySchedule, Point, ScheduleModel, TimePoint};
//!
//! let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
//! let times = vec![
//!     TimePoint::parse(Point::Dawn, "05:00").unwrap(),
//!     TimePoint::parse(Point::Sunrise, "06:20").unwrap(),
//!     TimePoint::parse(Point::Midday, "12:05").unwrap(),
//!     TimePoint::parse(Point::Afternoon, "15:30").unwrap(),
//!     TimePoint::parse(Point::Sunset, "18:10").unwrap(),
//!     TimePoint::parse(Point::Night, "19:40").unwrap(),
//! ];
//! let schedule = DailySchedule::new(date, "24 Ramadan 1447", times);
//!
//! let mut model = ScheduleModel::with_adjustments(schedule, Adjustments::ZERO);
//! model.set_clock(date.and_hms_opt(19, 0, 0).unwrap());
//!
//! assert_eq!(model.current_period().now, Point::Sunset);
//! assert_eq!(model.time_until_next(), "00:40:00");
//! ```

mod clock;
mod countdown;
mod model;
mod point;
mod schedule;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use clock::Clock;
pub use countdown::Countdown;
pub use model::{PeriodStatus, ScheduleModel};
pub use point::Point;
pub use schedule::{Adjustments, DailySchedule, TimePoint};
