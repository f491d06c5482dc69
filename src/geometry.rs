// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Derived geometry: hour angle, semi-diameters and the equatorial ↔
//! ecliptic rotation.
//!
//! Angles cross this module's boundary in the almanac's own units (right
//! ascension and hour angle in hours, everything else in degrees,
//! semi-diameters in arcminutes). Trigonometry is done in radians
//! internally.

use std::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[inline]
fn hours_to_rad(hours: f64) -> f64 {
    hours * 15.0 * PI / 180.0
}

#[inline]
fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

#[inline]
fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Greenwich hour angle in hours: `(R − RA) + 24·F`.
///
/// Not wrapped; the result may exceed 24 h.
#[inline]
pub fn greenwich_hour_angle(r_hours: f64, ra_hours: f64, day_fraction: f64) -> f64 {
    let e = r_hours - ra_hours;
    e + day_fraction * 24.0
}

/// Sun semi-diameter in arcminutes from its distance in AU.
#[inline]
pub fn sun_semi_diameter(distance_au: f64) -> f64 {
    16.02 / distance_au
}

/// Moon semi-diameter in arcminutes from its horizontal parallax in degrees.
#[inline]
pub fn moon_semi_diameter(parallax_deg: f64) -> f64 {
    let sd = 0.2725 * deg_to_rad(parallax_deg).sin();
    sd.asin() * 60.0 * 180.0 / PI
}

/// Ecliptic longitude and latitude in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ecliptic {
    /// λ in `[0, 360)`.
    pub lon_deg: f64,
    /// β in `[−90, 90]`.
    pub lat_deg: f64,
}

/// Right ascension and declination.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Equatorial {
    /// α in hours, `[0, 24)`.
    pub ra_hours: f64,
    /// δ in degrees.
    pub dec_deg: f64,
}

/// Rotate spherical coordinates about the x axis by `eps` radians.
fn rotate_x(lon: f64, lat: f64, eps: f64) -> (f64, f64) {
    let (sin_eps, cos_eps) = (eps.sin(), eps.cos());
    let mut y = lat.sin() * sin_eps;
    y += lat.cos() * lon.sin() * cos_eps;
    let x = lat.cos() * lon.cos();
    let mut z = lat.sin() * cos_eps;
    z -= lat.cos() * lon.sin() * sin_eps;
    (y.atan2(x), z.asin())
}

/// Apparent ecliptic coordinates of an apparent place, given the true
/// obliquity in degrees:
///
/// ```text
/// λ = atan2(sin δ sin ε + cos δ sin α cos ε, cos δ cos α)
/// β = asin(sin δ cos ε − cos δ sin α sin ε)
/// ```
pub fn equatorial_to_ecliptic(ra_hours: f64, dec_deg: f64, eps_deg: f64) -> Ecliptic {
    let (lon, lat) = rotate_x(hours_to_rad(ra_hours), deg_to_rad(dec_deg), deg_to_rad(eps_deg));
    let mut lon_deg = rad_to_deg(lon);
    if lon_deg < 0.0 {
        lon_deg += 360.0;
    }
    Ecliptic {
        lon_deg,
        lat_deg: rad_to_deg(lat),
    }
}

/// Inverse of [`equatorial_to_ecliptic`]: the same rotation by `−ε`.
pub fn ecliptic_to_equatorial(lon_deg: f64, lat_deg: f64, eps_deg: f64) -> Equatorial {
    let (ra, dec) = rotate_x(deg_to_rad(lon_deg), deg_to_rad(lat_deg), -deg_to_rad(eps_deg));
    let mut ra_hours = rad_to_deg(ra) / 15.0;
    if ra_hours < 0.0 {
        ra_hours += 24.0;
    }
    if ra_hours >= 24.0 {
        ra_hours -= 24.0;
    }
    Equatorial {
        ra_hours,
        dec_deg: rad_to_deg(dec),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 23.4392911;

    #[test]
    fn hour_angle_formula() {
        assert_eq!(greenwich_hour_angle(6.0, 4.0, 0.5), 14.0);
        let h = greenwich_hour_angle(17.556715000055327, 5.563615563078451, 0.125);
        assert!((h - 14.993099436976877).abs() < 1e-12);
    }

    #[test]
    fn semi_diameters() {
        assert!((sun_semi_diameter(1.0) - 16.02).abs() < 1e-15);
        assert!((sun_semi_diameter(1.015736835528958) - 15.771801749867011).abs() < 1e-9);
        assert!((moon_semi_diameter(1.0172814430862176) - 16.631742623136795).abs() < 1e-9);
        assert_eq!(moon_semi_diameter(0.0), 0.0);
    }

    #[test]
    fn equinox_and_solstice_points() {
        let e = equatorial_to_ecliptic(0.0, 0.0, EPS);
        assert!(e.lon_deg.abs() < 1e-12 && e.lat_deg.abs() < 1e-12);

        let e = equatorial_to_ecliptic(6.0, EPS, EPS);
        assert!((e.lon_deg - 90.0).abs() < 1e-9);
        assert!(e.lat_deg.abs() < 1e-9);

        let e = equatorial_to_ecliptic(12.0, 0.0, EPS);
        assert!((e.lon_deg - 180.0).abs() < 1e-9);
    }

    #[test]
    fn longitude_is_non_negative() {
        let e = equatorial_to_ecliptic(18.743841400000004, -23.039148100000002, 23.435526100000004);
        assert!((e.lon_deg - 280.25759718354163).abs() < 1e-9);
    }

    #[test]
    fn pole_of_ecliptic() {
        let e = equatorial_to_ecliptic(18.0, 90.0 - EPS, EPS);
        assert!((e.lat_deg - 90.0).abs() < 1e-6);
    }

    #[test]
    fn inverse_rotation() {
        let e = equatorial_to_ecliptic(6.87760102683632, 20.75614427146804, 23.435163579586646);
        let q = ecliptic_to_equatorial(e.lon_deg, e.lat_deg, 23.435163579586646);
        assert!((q.ra_hours - 6.87760102683632).abs() < 1e-9);
        assert!((q.dec_deg - 20.75614427146804).abs() < 1e-9);
    }
}
