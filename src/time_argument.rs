// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time arguments fed to the two series evaluators.
//!
//! * Nutation uses Julian centuries of TT since J2000.0, computed from the
//!   Julian Day of the TT calendar instant.
//! * The almanac coefficient tables use a day number within the UT year
//!   ([`AlmanacDay`]): `T` counts from 0 January, `F` is the elapsed day
//!   fraction and ΔT lifts the sum onto the tables' TT-based index.

use crate::instant::CivilTime;
use crate::scales::{TimeScale, TT, UT};
use qtty::{Centuries, Days, Seconds, Simplify};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// J2000.0 epoch: 2000-01-01T12:00:00 TT (JD 2 451 545.0).
pub const J2000: Days = Days::new(2_451_545.0);

/// One Julian century expressed in days.
pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

/// Julian Day of a Gregorian calendar instant.
///
/// January and February count as months 13 and 14 of the previous year,
/// then
///
/// ```text
/// JD = ⌊365.25 y⌋ + ⌊y/400⌋ − ⌊y/100⌋ + ⌊30.59 (m − 2)⌋ + d + 1721088.5
///      + (s/3600 + min/60 + h) / 24
/// ```
pub fn julian_day<S: TimeScale>(time: &CivilTime<S>) -> Days {
    let (mut year, mut month) = (time.year() as f64, time.month() as f64);
    if month < 3.0 {
        year -= 1.0;
        month += 12.0;
    }

    let whole = (365.25 * year).floor() + (year / 400.0).floor() - (year / 100.0).floor()
        + (30.59 * (month - 2.0)).floor()
        + time.day() as f64
        + 1_721_088.5;
    let clock = (time.second() as f64 / 3600.0 + time.minute() as f64 / 60.0 + time.hour() as f64)
        / 24.0;

    Days::new(whole + clock)
}

/// Julian centuries elapsed since J2000.0 for a Julian Day.
#[inline]
pub fn julian_centuries(jd: Days) -> Centuries {
    Centuries::new(((jd - J2000) / JULIAN_CENTURY).simplify().value())
}

/// Julian centuries of TT since J2000.0 for a TT calendar instant.
#[inline]
pub fn centuries_since_j2000(tt: &CivilTime<TT>) -> Centuries {
    julian_centuries(julian_day(tt))
}

// ═══════════════════════════════════════════════════════════════════════════
// Almanac day number
// ═══════════════════════════════════════════════════════════════════════════

/// Day index used to evaluate the almanac coefficient tables.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AlmanacDay {
    /// Days since 0 January of the UT year (1 January is day 1).
    pub day: i32,
    /// Elapsed fraction of the UT day.
    pub fraction: f64,
    /// ΔT applied to reach the TT-based index, seconds.
    pub delta_t: f64,
}

impl AlmanacDay {
    /// Day number, fraction and ΔT for a UT instant.
    pub fn new(ut: &CivilTime<UT>, delta_t: Seconds) -> Self {
        Self {
            day: day_of_year(ut.year(), ut.month(), ut.day()),
            fraction: ut.day_fraction(),
            delta_t: delta_t.value(),
        }
    }

    /// Index on UT: `T + F`. Used for the sidereal quantity `R` only.
    #[inline]
    pub fn tm_r(&self) -> f64 {
        self.day as f64 + self.fraction
    }

    /// Index on TT: `T + F + ΔT/86400`.
    #[inline]
    pub fn tm(&self) -> f64 {
        self.tm_r() + self.delta_t / 86400.0
    }
}

/// Running day number `T` of the almanac:
///
/// ```text
/// T = 30P + Q(S − Y) + P(1 − Q) + d
/// P = month − 1            Q = ⌊(month + 7) / 10⌋
/// Y = ⌊year/4 − ⌊year/4⌋ + 0.77⌋
/// S = ⌊0.55P − 0.33⌋
/// ```
///
/// with every `⌊⌋` truncating toward zero. `Y` is 0 in years divisible by
/// four, so 2100 counts a leap day even though the Gregorian calendar does
/// not.
pub fn day_of_year(year: i32, month: u32, day: u32) -> i32 {
    let p = f64::from(month) - 1.0;
    let q = ((f64::from(month) + 7.0) / 10.0).trunc();
    let quarter = f64::from(year) / 4.0;
    let y = (quarter - quarter.trunc() + 0.77).trunc();
    let s = (0.55 * p - 0.33).trunc();
    (30.0 * p + q * (s - y) + p * (1.0 - q)) as i32 + day as i32
}
