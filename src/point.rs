// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The six named points of a daily schedule.
//!
//! [`Point`] is a closed, ordered enumeration: exactly six moments exist per
//! day and their order never changes.  Using an enum instead of bare indices
//! means "point seven" is unrepresentable, so consumers cannot hand the
//! schedule layer an out-of-range key.
//!
//! | Variant | Position | Common name |
//! |---------|----------|-------------|
//! | [`Point::Dawn`] | 0 | Fajr |
//! | [`Point::Sunrise`] | 1 | Shuruq |
//! | [`Point::Midday`] | 2 | Dhuhr |
//! | [`Point::Afternoon`] | 3 | Asr |
//! | [`Point::Sunset`] | 4 | Maghrib |
//! | [`Point::Night`] | 5 | Isha |
//!
//! The day is cyclic: [`Point::next`] wraps `Night` back to `Dawn`, which is
//! exactly the wraparound interval the period queries rely on.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the six fixed named moments of a schedule day, in day order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Point {
    /// First point of the day (Fajr).
    Dawn,
    /// Sunrise (Shuruq); ends the dawn period.
    Sunrise,
    /// Solar noon point (Dhuhr).
    Midday,
    /// Mid-afternoon point (Asr).
    Afternoon,
    /// Sunset (Maghrib).
    Sunset,
    /// Last point of the day (Isha); its period wraps into the next day's dawn.
    Night,
}

impl Point {
    /// Number of points in a schedule day.
    pub const COUNT: usize = 6;

    /// All six points in day order.
    pub const ALL: [Point; Point::COUNT] = [
        Point::Dawn,
        Point::Sunrise,
        Point::Midday,
        Point::Afternoon,
        Point::Sunset,
        Point::Night,
    ];

    /// Zero-based position within the day (`Dawn` = 0 … `Night` = 5).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The point following this one, wrapping `Night` around to `Dawn`.
    ///
    /// # Examples
    ///
    /// ```
    /// use waqt::Point;
    ///
    /// assert_eq!(Point::Midday.next(), Point::Afternoon);
    /// assert_eq!(Point::Night.next(), Point::Dawn);
    /// ```
    #[inline]
    pub const fn next(self) -> Point {
        match self {
            Point::Dawn => Point::Sunrise,
            Point::Sunrise => Point::Midday,
            Point::Midday => Point::Afternoon,
            Point::Afternoon => Point::Sunset,
            Point::Sunset => Point::Night,
            Point::Night => Point::Dawn,
        }
    }

    /// Look up a point by its day position.  Returns `None` for `i >= 6`.
    #[inline]
    pub const fn from_index(i: usize) -> Option<Point> {
        if i < Point::COUNT {
            Some(Point::ALL[i])
        } else {
            None
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Point::Dawn => "Dawn",
            Point::Sunrise => "Sunrise",
            Point::Midday => "Midday",
            Point::Afternoon => "Afternoon",
            Point::Sunset => "Sunset",
            Point::Night => "Night",
        };
        f.write_str(name)
    }
}
