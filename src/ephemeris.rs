// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Almanac coefficient tables for the Sun and Moon.
//!
//! Each of the eight tracked [`Quantity`] values is tabulated per calendar
//! year as a list of rows `(a, b, C₀ … C_N)`. A row is valid on the day
//! interval `[a, b]` and evaluates as
//!
//! ```text
//! θ    = arccos((2t − (a + b)) / (b − a))        0° ≤ θ ≤ 180°
//! f(t) = Σ_{i=0}^{N} C_i · cos(i·θ)
//! ```
//!
//! where `t` is the [`AlmanacDay`] index: `tm` for every quantity except
//! the sidereal `R`, which uses `tm_r`. Right ascensions and `R` are
//! wrapped into `[0, 24)` hours.
//!
//! ## Row selection
//!
//! For a year `Y` and argument `t`:
//!
//! 1. the first row (insertion order) of year `Y` with `a ≤ ⌊t⌋ ≤ b`;
//! 2. otherwise the row of year `Y` with the largest `b`, if
//!    `b < t < b + 2`. ΔT can push `tm` of the last seconds of the year
//!    past the final row.
//!
//! Rows sharing an endpoint therefore hand over one day late: at
//! `t = 31.5` the row `[0, 31]` still wins over `[31, 59]`. Whenever the
//! chosen row ends before `t`, `b` is stretched to `t`, which puts `θ` at
//! 0°. If nothing matches the quantity evaluates to `0` and a warning is
//! logged.

use crate::error::{AlmanacError, AlmanacResult};
use crate::time_argument::AlmanacDay;
use std::f64::consts::PI;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How far past the last row of a year an argument may fall and still be
/// served by it.
const YEAR_END_SPILL: f64 = 2.0;

/// Longest stretch two rows of one quantity and year may share.
const SHARED_SPAN: f64 = 1.0;

// ═══════════════════════════════════════════════════════════════════════════
// Quantity
// ═══════════════════════════════════════════════════════════════════════════

/// A tabulated almanac quantity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Quantity {
    /// Apparent right ascension of the Sun, hours.
    SunRa,
    /// Apparent declination of the Sun, degrees.
    SunDec,
    /// Earth–Sun distance, AU.
    SunDist,
    /// Apparent right ascension of the Moon, hours.
    MoonRa,
    /// Apparent declination of the Moon, degrees.
    MoonDec,
    /// Horizontal parallax of the Moon, degrees.
    MoonHp,
    /// `R = h_G − UT + RA_m`, hours. Indexed on UT.
    R,
    /// True obliquity of the ecliptic, degrees.
    Eps,
}

impl Quantity {
    pub const ALL: [Quantity; 8] = [
        Quantity::SunRa,
        Quantity::SunDec,
        Quantity::SunDist,
        Quantity::MoonRa,
        Quantity::MoonDec,
        Quantity::MoonHp,
        Quantity::R,
        Quantity::Eps,
    ];

    /// Name used in table files.
    pub const fn name(self) -> &'static str {
        match self {
            Quantity::SunRa => "SUN_RA",
            Quantity::SunDec => "SUN_DEC",
            Quantity::SunDist => "SUN_DIST",
            Quantity::MoonRa => "MOON_RA",
            Quantity::MoonDec => "MOON_DEC",
            Quantity::MoonHp => "MOON_HP",
            Quantity::R => "R",
            Quantity::Eps => "EPS",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|q| q.name() == name)
    }

    /// Whether the value is an hour angle wrapped into `[0, 24)`.
    pub const fn is_hours(self) -> bool {
        matches!(self, Quantity::SunRa | Quantity::MoonRa | Quantity::R)
    }

    /// Whether the table is indexed by `tm_r` (UT) instead of `tm` (TT).
    pub const fn on_universal_time(self) -> bool {
        matches!(self, Quantity::R)
    }

    /// Argument to evaluate this quantity at.
    pub fn argument(self, day: &AlmanacDay) -> f64 {
        if self.on_universal_time() {
            day.tm_r()
        } else {
            day.tm()
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Rows
// ═══════════════════════════════════════════════════════════════════════════

/// One coefficient row: the series for `[a, b]` of `year`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EphemerisRow {
    pub year: i32,
    pub a: f64,
    pub b: f64,
    /// `C₀ … C_N`.
    pub coefficients: Vec<f64>,
}

impl EphemerisRow {
    pub fn new(year: i32, a: f64, b: f64, coefficients: Vec<f64>) -> Self {
        Self {
            year,
            a,
            b,
            coefficients,
        }
    }

    /// `a ≤ t ≤ b`.
    #[inline]
    pub fn contains(&self, t: f64) -> bool {
        self.a <= t && t <= self.b
    }

    /// Series value at `t`. Past `b` the interval is stretched to end at `t`.
    pub fn evaluate(&self, t: f64) -> f64 {
        cosine_series(chebyshev_angle(self.a, self.b, t), &self.coefficients)
    }
}

/// `θ = arccos((2t − (a + b)) / (b − a))` in degrees, with `b` raised to
/// `t` when `t` lies past it.
pub fn chebyshev_angle(a: f64, b: f64, t: f64) -> f64 {
    let b = if b < t { t } else { b };
    let x = (2.0 * t - (a + b)) / (b - a);
    x.clamp(-1.0, 1.0).acos() * 180.0 / PI
}

/// `Σ C_i · cos(i·θ)` for `θ` in degrees, summed from `C₀` upward.
pub fn cosine_series(theta_deg: f64, coefficients: &[f64]) -> f64 {
    coefficients
        .iter()
        .enumerate()
        .fold(0.0, |acc, (i, c)| {
            acc + c * (theta_deg * i as f64 * PI / 180.0).cos()
        })
}

/// Wrap an hour value into `[0, 24)`.
pub fn normalize_hours(hours: f64) -> f64 {
    let mut h = hours % 24.0;
    if h < 0.0 {
        h += 24.0;
    }
    if h >= 24.0 {
        h -= 24.0;
    }
    h
}

// ═══════════════════════════════════════════════════════════════════════════
// Tables
// ═══════════════════════════════════════════════════════════════════════════

/// Coefficient rows for every [`Quantity`], in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EphemerisTables {
    rows: [Vec<EphemerisRow>; 8],
}

impl EphemerisTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row, rejecting empty intervals and rows that share more
    /// than one day with an existing row of the same quantity and year.
    pub fn push(&mut self, quantity: Quantity, row: EphemerisRow) -> AlmanacResult<()> {
        if !(row.a.is_finite() && row.b.is_finite() && row.a < row.b) {
            return Err(AlmanacError::InvalidInterval {
                quantity: quantity.name(),
                year: row.year,
                a: row.a,
                b: row.b,
            });
        }
        let rows = &mut self.rows[quantity.index()];
        if let Some(prev) = rows
            .iter()
            .find(|p| p.year == row.year && row.b.min(p.b) - row.a.max(p.a) > SHARED_SPAN)
        {
            return Err(AlmanacError::OverlappingRows {
                quantity: quantity.name(),
                year: row.year,
                a: row.a,
                b: row.b,
                prev_a: prev.a,
                prev_b: prev.b,
            });
        }
        rows.push(row);
        Ok(())
    }

    pub fn rows(&self, quantity: Quantity) -> &[EphemerisRow] {
        &self.rows[quantity.index()]
    }

    pub fn len(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether every quantity has at least one row for `year`.
    pub fn covers_year(&self, year: i32) -> bool {
        self.rows
            .iter()
            .all(|rows| rows.iter().any(|r| r.year == year))
    }

    /// Row serving `quantity` at argument `t` of `year`.
    pub fn select(&self, quantity: Quantity, year: i32, t: f64) -> Option<&EphemerisRow> {
        let mut rows = self.rows(quantity).iter().filter(|r| r.year == year);
        let day = t.trunc();
        if let Some(row) = rows.clone().find(|r| r.contains(day)) {
            return Some(row);
        }
        rows.max_by(|x, y| x.b.total_cmp(&y.b))
            .filter(|last| last.b < t && t < last.b + YEAR_END_SPILL)
    }

    /// Value of `quantity` at argument `t` of `year`; hours are wrapped.
    pub fn value(&self, quantity: Quantity, year: i32, t: f64) -> f64 {
        let Some(row) = self.select(quantity, year, t) else {
            log::warn!("no {quantity} coefficients cover t={t} in {year}; using 0");
            return 0.0;
        };
        log::trace!("{quantity} {year} t={t}: row [{}, {}]", row.a, row.b);
        if t > row.b {
            log::warn!("{quantity} {year}: t={t} past row end {}; interval stretched", row.b);
        }
        let value = row.evaluate(t);
        if quantity.is_hours() {
            normalize_hours(value)
        } else {
            value
        }
    }

    /// All eight quantities for the UT year `year` at `day`.
    pub fn evaluate(&self, year: i32, day: &AlmanacDay) -> EphemerisValues {
        let v = |q: Quantity| self.value(q, year, q.argument(day));
        EphemerisValues {
            sun_ra: v(Quantity::SunRa),
            sun_dec: v(Quantity::SunDec),
            sun_dist: v(Quantity::SunDist),
            moon_ra: v(Quantity::MoonRa),
            moon_dec: v(Quantity::MoonDec),
            moon_hp: v(Quantity::MoonHp),
            r: v(Quantity::R),
            eps: v(Quantity::Eps),
        }
    }
}

/// The eight tabulated quantities at one instant.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EphemerisValues {
    pub sun_ra: f64,
    pub sun_dec: f64,
    pub sun_dist: f64,
    pub moon_ra: f64,
    pub moon_dec: f64,
    pub moon_hp: f64,
    pub r: f64,
    pub eps: f64,
}

impl EphemerisValues {
    pub fn get(&self, quantity: Quantity) -> f64 {
        match quantity {
            Quantity::SunRa => self.sun_ra,
            Quantity::SunDec => self.sun_dec,
            Quantity::SunDist => self.sun_dist,
            Quantity::MoonRa => self.moon_ra,
            Quantity::MoonDec => self.moon_dec,
            Quantity::MoonHp => self.moon_hp,
            Quantity::R => self.r,
            Quantity::Eps => self.eps,
        }
    }
}
