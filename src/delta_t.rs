// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # ΔT (Delta T) — UT → TT correction by calendar year
//!
//! The almanac coefficient tables are indexed by a TT-based day count, so
//! each evaluation adds **ΔT = TT − UT** to the UT day number. ΔT is taken
//! as a whole number of seconds per calendar year of the UT instant.
//!
//! ## Built-in table
//!
//! | Year | ΔT (s) | Year | ΔT (s) |
//! |------|--------|------|--------|
//! | 2008 | 65 | 2014 | 67 |
//! | 2009 | 66 | 2015 | 68 |
//! | 2010 | 66 | 2016 | 68 |
//! | 2011 | 67 | 2017 | 68 |
//! | 2012 | 67 | 2018 | 69 |
//! | 2013 | 67 | 2019 | 70 |
//!
//! Requests outside the table fail with
//! [`AlmanacError::MissingDeltaT`]; nothing is extrapolated. Additional
//! years can be supplied with [`DeltaT::insert`] or collected from
//! `(year, seconds)` pairs.
//!
//! ```rust
//! use almanac::{CivilTime, DeltaT, UT};
//!
//! let ut = CivilTime::<UT>::new(2018, 6, 15, 3, 0, 0).unwrap();
//! let tt = ut.to_tt(&DeltaT::default()).unwrap();
//! assert_eq!(tt.second(), 9); // 03:01:09 TT
//! ```

use crate::error::{AlmanacError, AlmanacResult};
use crate::instant::CivilTime;
use crate::scales::{TT, UT};
use qtty::Seconds;
use std::collections::BTreeMap;

#[rustfmt::skip]
const BUILTIN: [(i32, i32); 12] = [
    (2008, 65), (2009, 66), (2010, 66), (2011, 67),
    (2012, 67), (2013, 67), (2014, 67), (2015, 68),
    (2016, 68), (2017, 68), (2018, 69), (2019, 70),
];

/// Year → whole-second ΔT lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeltaT {
    seconds: BTreeMap<i32, i32>,
}

impl Default for DeltaT {
    fn default() -> Self {
        BUILTIN.into_iter().collect()
    }
}

impl DeltaT {
    /// A table with no entries.
    pub fn empty() -> Self {
        Self {
            seconds: BTreeMap::new(),
        }
    }

    /// Add or replace the entry for `year`.
    pub fn insert(&mut self, year: i32, seconds: i32) -> Option<i32> {
        self.seconds.insert(year, seconds)
    }

    /// ΔT for `year` as a whole number of seconds.
    pub fn whole_seconds(&self, year: i32) -> AlmanacResult<i32> {
        self.seconds
            .get(&year)
            .copied()
            .ok_or(AlmanacError::MissingDeltaT { year })
    }

    /// ΔT for `year`.
    pub fn seconds(&self, year: i32) -> AlmanacResult<Seconds> {
        self.whole_seconds(year).map(|s| Seconds::new(s as f64))
    }

    /// Years covered by the table, ascending.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.seconds.keys().copied()
    }
}

impl FromIterator<(i32, i32)> for DeltaT {
    fn from_iter<I: IntoIterator<Item = (i32, i32)>>(iter: I) -> Self {
        Self {
            seconds: iter.into_iter().collect(),
        }
    }
}

// ── UT → TT ───────────────────────────────────────────────────────────────

impl CivilTime<UT> {
    /// ΔT in effect for this instant's UT calendar year.
    #[inline]
    pub fn delta_t(&self, table: &DeltaT) -> AlmanacResult<Seconds> {
        table.seconds(self.year())
    }

    /// The same instant on Terrestrial Time: `TT = UT + ΔT(year)`.
    pub fn to_tt(&self, table: &DeltaT) -> AlmanacResult<CivilTime<TT>> {
        let dt = table.whole_seconds(self.year())?;
        self.shifted(dt as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_values() {
        let table = DeltaT::default();
        assert_eq!(table.whole_seconds(2008).unwrap(), 65);
        assert_eq!(table.whole_seconds(2013).unwrap(), 67);
        assert_eq!(table.whole_seconds(2018).unwrap(), 69);
        assert_eq!(table.seconds(2019).unwrap(), Seconds::new(70.0));
        assert_eq!(table.years().collect::<Vec<_>>(), (2008..=2019).collect::<Vec<_>>());
    }

    #[test]
    fn missing_year_is_an_error() {
        let table = DeltaT::default();
        assert!(matches!(
            table.seconds(2031),
            Err(AlmanacError::MissingDeltaT { year: 2031 })
        ));
        assert!(matches!(
            table.seconds(2007),
            Err(AlmanacError::MissingDeltaT { year: 2007 })
        ));
    }

    #[test]
    fn custom_entries() {
        let mut table = DeltaT::empty();
        assert!(table.seconds(2018).is_err());
        assert_eq!(table.insert(2020, 69), None);
        assert_eq!(table.insert(2020, 70), Some(69));
        assert_eq!(table.whole_seconds(2020).unwrap(), 70);

        let table: DeltaT = [(2030, 72)].into_iter().collect();
        assert_eq!(table.whole_seconds(2030).unwrap(), 72);
    }

    #[test]
    fn to_tt_adds_year_delta() {
        let table = DeltaT::default();
        let ut = CivilTime::<UT>::new(2018, 6, 15, 3, 0, 0).unwrap();
        assert_eq!(ut.delta_t(&table).unwrap(), Seconds::new(69.0));
        let tt = ut.to_tt(&table).unwrap();
        assert_eq!((tt.hour(), tt.minute(), tt.second()), (3, 1, 9));

        let out_of_range = CivilTime::<UT>::new(2031, 1, 1, 0, 0, 0).unwrap();
        assert!(out_of_range.to_tt(&table).is_err());
    }
}
