// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Apparent Sun and Moon for one UT instant.
//!
//! The pipeline is
//!
//! 1. `T`, `F` and ΔT of the UT instant ([`AlmanacDay`]);
//! 2. the eight tabulated quantities ([`EphemerisValues`]);
//! 3. Greenwich hour angles and semi-diameters;
//! 4. apparent ecliptic longitude and latitude, rotated with the tabulated
//!    true obliquity.
//!
//! [`Almanac`] bundles the coefficient tables and ΔT so callers can ask for
//! either product from a calendar instant.

use crate::delta_t::DeltaT;
use crate::ephemeris::{EphemerisTables, EphemerisValues};
use crate::error::AlmanacResult;
use crate::geometry::{
    equatorial_to_ecliptic, greenwich_hour_angle, moon_semi_diameter, sun_semi_diameter,
};
use crate::instant::CivilTime;
use crate::nutation::{Nutation, NutationTables};
use crate::scales::{TT, UT};
use crate::time_argument::AlmanacDay;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Apparent place of one body.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BodyPosition {
    /// Right ascension, hours in `[0, 24)`.
    pub ra: f64,
    /// Declination, degrees.
    pub dec: f64,
    /// Greenwich hour angle, hours (not wrapped).
    pub hour_angle: f64,
    /// Semi-diameter, arcminutes.
    pub semi_diameter: f64,
    /// Apparent ecliptic longitude, degrees in `[0, 360)`.
    pub lambda: f64,
    /// Apparent ecliptic latitude, degrees.
    pub beta: f64,
}

impl BodyPosition {
    fn new(ra: f64, dec: f64, semi_diameter: f64, values: &EphemerisValues, fraction: f64) -> Self {
        let ecliptic = equatorial_to_ecliptic(ra, dec, values.eps);
        Self {
            ra,
            dec,
            hour_angle: greenwich_hour_angle(values.r, ra, fraction),
            semi_diameter,
            lambda: ecliptic.lon_deg,
            beta: ecliptic.lat_deg,
        }
    }
}

/// Everything derived for one UT instant.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SunMoon {
    pub ut: CivilTime<UT>,
    /// `ut` shifted by the year's ΔT.
    pub tt: CivilTime<TT>,
    pub day: AlmanacDay,
    /// Raw tabulated values.
    pub values: EphemerisValues,
    pub sun: BodyPosition,
    pub moon: BodyPosition,
    /// `λ☉ − λ☾`, degrees. Not wrapped.
    pub lambda_sun_minus_moon: f64,
}

impl SunMoon {
    /// Evaluate the tables at `ut`.
    pub fn compute(
        ut: &CivilTime<UT>,
        tables: &EphemerisTables,
        delta_t: &DeltaT,
    ) -> AlmanacResult<Self> {
        let day = AlmanacDay::new(ut, ut.delta_t(delta_t)?);
        let tt = ut.to_tt(delta_t)?;
        log::debug!(
            "{ut}: T={} F={} tm={} tm_r={}",
            day.day,
            day.fraction,
            day.tm(),
            day.tm_r()
        );
        let values = tables.evaluate(ut.year(), &day);

        let sun = BodyPosition::new(
            values.sun_ra,
            values.sun_dec,
            sun_semi_diameter(values.sun_dist),
            &values,
            day.fraction,
        );
        let moon = BodyPosition::new(
            values.moon_ra,
            values.moon_dec,
            moon_semi_diameter(values.moon_hp),
            &values,
            day.fraction,
        );

        Ok(Self {
            ut: *ut,
            tt,
            day,
            values,
            lambda_sun_minus_moon: sun.lambda - moon.lambda,
            sun,
            moon,
        })
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Almanac
// ═══════════════════════════════════════════════════════════════════════════

/// Coefficient tables plus ΔT.
#[derive(Debug, Clone, Default)]
pub struct Almanac {
    pub nutation: NutationTables,
    pub ephemeris: EphemerisTables,
    pub delta_t: DeltaT,
}

impl Almanac {
    pub fn new(nutation: NutationTables, ephemeris: EphemerisTables, delta_t: DeltaT) -> Self {
        Self {
            nutation,
            ephemeris,
            delta_t,
        }
    }

    /// Nutation at a TT instant.
    pub fn nutation(&self, tt: &CivilTime<TT>) -> Nutation {
        self.nutation.nutation_at(tt)
    }

    /// Nutation at a UT instant, moved onto TT with the ΔT table.
    pub fn nutation_ut(&self, ut: &CivilTime<UT>) -> AlmanacResult<Nutation> {
        Ok(self.nutation(&ut.to_tt(&self.delta_t)?))
    }

    /// Apparent Sun and Moon at a UT instant.
    pub fn sun_moon(&self, ut: &CivilTime<UT>) -> AlmanacResult<SunMoon> {
        SunMoon::compute(ut, &self.ephemeris, &self.delta_t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::{EphemerisRow, Quantity};
    use crate::error::AlmanacError;

    /// Constant-valued rows covering all of 2018.
    fn flat_tables() -> EphemerisTables {
        let constants = [
            (Quantity::SunRa, 6.0),
            (Quantity::SunDec, 23.4),
            (Quantity::SunDist, 1.0),
            (Quantity::MoonRa, 18.0),
            (Quantity::MoonDec, -20.0),
            (Quantity::MoonHp, 0.95),
            (Quantity::R, 10.0),
            (Quantity::Eps, 23.4),
        ];
        let mut tables = EphemerisTables::new();
        for (q, c) in constants {
            tables
                .push(q, EphemerisRow::new(2018, 0.0, 366.0, vec![c]))
                .unwrap();
        }
        tables
    }

    #[test]
    fn derived_quantities_follow_tables() {
        let ut = CivilTime::<UT>::new(2018, 6, 15, 12, 0, 0).unwrap();
        let sm = SunMoon::compute(&ut, &flat_tables(), &DeltaT::default()).unwrap();

        assert_eq!(sm.day.day, 166);
        assert_eq!((sm.tt.hour(), sm.tt.minute(), sm.tt.second()), (12, 1, 9));
        assert_eq!(sm.values.sun_ra, 6.0);
        assert_eq!(sm.sun.hour_angle, 10.0 - 6.0 + 12.0);
        assert_eq!(sm.moon.hour_angle, 10.0 - 18.0 + 12.0);
        assert!((sm.sun.semi_diameter - 16.02).abs() < 1e-12);
        assert!((sm.sun.lambda - 90.0).abs() < 1e-9);
        assert!(sm.sun.beta.abs() < 1e-9);
        assert_eq!(sm.lambda_sun_minus_moon, sm.sun.lambda - sm.moon.lambda);
    }

    #[test]
    fn year_without_delta_t_fails() {
        let ut = CivilTime::<UT>::new(2031, 1, 1, 0, 0, 0).unwrap();
        assert!(matches!(
            SunMoon::compute(&ut, &flat_tables(), &DeltaT::default()),
            Err(AlmanacError::MissingDeltaT { year: 2031 })
        ));
    }

    #[test]
    fn uncovered_year_yields_zero_values() {
        let ut = CivilTime::<UT>::new(2017, 6, 1, 0, 0, 0).unwrap();
        let sm = SunMoon::compute(&ut, &flat_tables(), &DeltaT::default()).unwrap();
        assert_eq!(sm.values, EphemerisValues::default());
    }

    #[test]
    fn facade_nutation_on_ut_applies_delta_t() {
        let almanac = Almanac::default();
        let ut = CivilTime::<UT>::new(2018, 1, 1, 0, 0, 0).unwrap();
        let n = almanac.nutation_ut(&ut).unwrap();
        assert_eq!(n.delta_psi, 0.0);
        let far = CivilTime::<UT>::new(1990, 1, 1, 0, 0, 0).unwrap();
        assert!(almanac.nutation_ut(&far).is_err());
    }
}
