// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar instant tagged with its time scale.
//!
//! [`CivilTime<S>`] wraps a `chrono::NaiveDateTime` whose calendar fields are
//! read on the scale `S` ([`UT`] or [`TT`]). Everything downstream of time
//! input (Julian Day, almanac day number, day fraction) is derived from
//! those fields, so keeping the scale in the type stops a UT instant from
//! feeding the nutation series or a TT instant from indexing `R`.
//!
//! Accepted textual forms are the compact `YYYYMMDD` and `YYYYMMDDhhmmss`.

use crate::error::{AlmanacError, AlmanacResult};
use crate::scales::{TimeScale, TT, UT};
use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveDateTime, Timelike, Utc};
use std::marker::PhantomData;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[cfg(feature = "serde")]
const SERDE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A calendar date and time on scale `S`, resolved to the second.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilTime<S: TimeScale> {
    datetime: NaiveDateTime,
    _scale: PhantomData<S>,
}

impl<S: TimeScale> CivilTime<S> {
    // ── constructors ──────────────────────────────────────────────────

    /// Build from calendar fields, rejecting impossible dates and times.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> AlmanacResult<Self> {
        let describe = || format!("{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}");
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| AlmanacError::invalid_time(describe(), "no such calendar date"))?;
        let datetime = date
            .and_hms_opt(hour, minute, second)
            .ok_or_else(|| AlmanacError::invalid_time(describe(), "no such time of day"))?;
        Ok(Self::from_naive(datetime))
    }

    /// Wrap an existing `NaiveDateTime`, dropping sub-second precision.
    #[inline]
    pub fn from_naive(datetime: NaiveDateTime) -> Self {
        let datetime = datetime.with_nanosecond(0).unwrap_or(datetime);
        Self {
            datetime,
            _scale: PhantomData,
        }
    }

    /// Parse `YYYYMMDD` (midnight) or `YYYYMMDDhhmmss`.
    pub fn parse(input: &str) -> AlmanacResult<Self> {
        parse_compact(input).map(Self::from_naive)
    }

    // ── accessors ─────────────────────────────────────────────────────

    #[inline]
    pub fn naive(&self) -> NaiveDateTime {
        self.datetime
    }

    #[inline]
    pub fn year(&self) -> i32 {
        self.datetime.year()
    }

    #[inline]
    pub fn month(&self) -> u32 {
        self.datetime.month()
    }

    #[inline]
    pub fn day(&self) -> u32 {
        self.datetime.day()
    }

    #[inline]
    pub fn hour(&self) -> u32 {
        self.datetime.hour()
    }

    #[inline]
    pub fn minute(&self) -> u32 {
        self.datetime.minute()
    }

    #[inline]
    pub fn second(&self) -> u32 {
        self.datetime.second()
    }

    /// Fraction of the calendar day elapsed, `h/24 + m/1440 + s/86400`.
    pub fn day_fraction(&self) -> f64 {
        self.hour() as f64 / 24.0 + self.minute() as f64 / 1440.0 + self.second() as f64 / 86400.0
    }

    // ── shifting ──────────────────────────────────────────────────────

    /// Same instant shifted by whole seconds and relabelled onto scale `T`.
    pub(crate) fn shifted<T: TimeScale>(&self, seconds: i64) -> AlmanacResult<CivilTime<T>> {
        self.datetime
            .checked_add_signed(Duration::seconds(seconds))
            .map(CivilTime::from_naive)
            .ok_or_else(|| AlmanacError::invalid_time(self.to_string(), "shift leaves the calendar range"))
    }
}

// ── UT specifics ──────────────────────────────────────────────────────────

impl CivilTime<UT> {
    /// Read a UTC timestamp as Universal Time.
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        Self::from_naive(datetime.naive_utc())
    }

    /// Convert a wall-clock reading at a fixed offset from UTC into UT.
    ///
    /// `offset_hours` is positive east of Greenwich (`9.0` for JST) and must
    /// lie strictly inside ±24 h.
    pub fn from_zoned(local: NaiveDateTime, offset_hours: f64) -> AlmanacResult<Self> {
        let describe = || format!("{local} at UTC{offset_hours:+}");
        if !offset_hours.is_finite() {
            return Err(AlmanacError::invalid_time(describe(), "offset is not finite"));
        }
        let offset_secs = (offset_hours * 3600.0).round();
        let offset = FixedOffset::east_opt(offset_secs as i32)
            .ok_or_else(|| AlmanacError::invalid_time(describe(), "offset out of range"))?;
        let zoned = local
            .and_local_timezone(offset)
            .single()
            .ok_or_else(|| AlmanacError::invalid_time(describe(), "ambiguous local time"))?;
        Ok(Self::from_naive(zoned.naive_utc()))
    }

    /// The instant as a UTC timestamp.
    pub fn to_utc(&self) -> DateTime<Utc> {
        self.datetime.and_utc()
    }
}

impl CivilTime<TT> {
    /// Treat the calendar fields as Terrestrial Time directly.
    ///
    /// Nutation input is conventionally given on TT; this is a relabelling
    /// and applies no ΔT.
    pub fn assume_tt(datetime: NaiveDateTime) -> Self {
        Self::from_naive(datetime)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Parsing
// ═══════════════════════════════════════════════════════════════════════════

/// Parse the compact `YYYYMMDD[hhmmss]` form into a calendar date-time.
pub fn parse_compact(input: &str) -> AlmanacResult<NaiveDateTime> {
    let s = input.trim();
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AlmanacError::invalid_time(input, "expected digits only"));
    }
    if s.len() != 8 && s.len() != 14 {
        return Err(AlmanacError::invalid_time(
            input,
            "expected YYYYMMDD or YYYYMMDDhhmmss",
        ));
    }

    let field = |range: std::ops::Range<usize>| -> u32 {
        s.get(range)
            .and_then(|digits| digits.parse().ok())
            .unwrap_or(0)
    };
    let year = field(0..4) as i32;
    let (month, day) = (field(4..6), field(6..8));
    let (hour, minute, second) = if s.len() == 14 {
        (field(8..10), field(10..12), field(12..14))
    } else {
        (0, 0, 0)
    };

    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| AlmanacError::invalid_time(input, "no such calendar date"))?;
    date.and_hms_opt(hour, minute, second)
        .ok_or_else(|| AlmanacError::invalid_time(input, "no such time of day"))
}

impl<S: TimeScale> FromStr for CivilTime<S> {
    type Err = AlmanacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Generic trait implementations
// ═══════════════════════════════════════════════════════════════════════════

// ── Display ───────────────────────────────────────────────────────────────

impl<S: TimeScale> std::fmt::Display for CivilTime<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.datetime.format("%Y-%m-%d %H:%M:%S"), S::LABEL)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<S: TimeScale> Serialize for CivilTime<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.collect_str(&self.datetime.format(SERDE_FORMAT))
    }
}

#[cfg(feature = "serde")]
impl<'de, S: TimeScale> Deserialize<'de> for CivilTime<S> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&text, SERDE_FORMAT)
            .map(Self::from_naive)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_compact_forms() {
        let t: CivilTime<TT> = "20180101".parse().unwrap();
        assert_eq!((t.year(), t.month(), t.day()), (2018, 1, 1));
        assert_eq!((t.hour(), t.minute(), t.second()), (0, 0, 0));

        let t = CivilTime::<UT>::parse("20180615030000").unwrap();
        assert_eq!((t.month(), t.day(), t.hour()), (6, 15, 3));
    }

    #[test]
    fn parse_rejects_malformed_input() {
        for bad in ["2018011", "201801011200", "2018-01-01", "20181301", "20180230", "20180101250000", ""] {
            assert!(
                matches!(CivilTime::<UT>::parse(bad), Err(AlmanacError::InvalidTime { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn new_rejects_impossible_fields() {
        assert!(CivilTime::<UT>::new(2018, 2, 29, 0, 0, 0).is_err());
        assert!(CivilTime::<UT>::new(2018, 1, 1, 0, 60, 0).is_err());
        assert!(CivilTime::<UT>::new(2016, 2, 29, 23, 59, 59).is_ok());
    }

    #[test]
    fn day_fraction_matches_fields() {
        let noon = CivilTime::<UT>::new(2018, 3, 21, 12, 0, 0).unwrap();
        assert_eq!(noon.day_fraction(), 0.5);

        let t = CivilTime::<UT>::new(2018, 6, 15, 3, 0, 0).unwrap();
        assert!((t.day_fraction() - 0.125).abs() < 1e-15);

        let last = CivilTime::<UT>::new(2018, 12, 31, 23, 59, 59).unwrap();
        assert!(last.day_fraction() < 1.0);
    }

    #[test]
    fn zoned_input_moves_to_ut() {
        let local = parse_compact("20180615120000").unwrap();
        let ut = CivilTime::<UT>::from_zoned(local, 9.0).unwrap();
        assert_eq!((ut.day(), ut.hour()), (15, 3));

        // JST midnight on New Year lands on the previous UT year.
        let local = parse_compact("20190101000000").unwrap();
        let ut = CivilTime::<UT>::from_zoned(local, 9.0).unwrap();
        assert_eq!((ut.year(), ut.month(), ut.day(), ut.hour()), (2018, 12, 31, 15));

        assert!(CivilTime::<UT>::from_zoned(local, 25.0).is_err());
        assert!(CivilTime::<UT>::from_zoned(local, f64::NAN).is_err());
    }

    #[test]
    fn utc_roundtrip() {
        let ut = CivilTime::<UT>::new(2018, 6, 15, 3, 0, 0).unwrap();
        assert_eq!(CivilTime::<UT>::from_utc(ut.to_utc()), ut);
    }

    #[test]
    fn display_carries_scale_label() {
        let t = CivilTime::<TT>::new(2006, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(t.to_string(), "2006-01-01 00:00:00 TT");
    }

    #[test]
    fn shifted_crosses_year_boundary() {
        let ut = CivilTime::<UT>::new(2018, 12, 31, 23, 59, 0).unwrap();
        let tt: CivilTime<TT> = ut.shifted(69).unwrap();
        assert_eq!((tt.year(), tt.month(), tt.day()), (2019, 1, 1));
        assert_eq!((tt.hour(), tt.minute(), tt.second()), (0, 0, 9));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_as_iso_string() {
        let t = CivilTime::<UT>::new(2018, 6, 15, 3, 0, 0).unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"2018-06-15T03:00:00\"");
        let back: CivilTime<UT> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
