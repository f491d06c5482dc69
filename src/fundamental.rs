// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Fundamental arguments of the IAU 2000A nutation theory.
//!
//! Two independent sets, both functions of `t` = Julian centuries of TT
//! since J2000.0:
//!
//! * [`LuniSolarArguments`] — the five Delaunay arguments from quartic
//!   polynomials in arcseconds (IERS Conventions 2003), with `l′` and `D`
//!   taken from the MHB2000 fit. Each is reduced modulo one turn before
//!   conversion to radians.
//! * [`PlanetaryArguments`] — linear MHB2000 approximations of `l, F, D, Ω`
//!   plus the mean longitudes of Mercury…Neptune (IERS 2003), all reduced
//!   modulo 2π, and the unreduced general precession in longitude `pA`.
//!
//! All angles are in radians.

use qtty::Centuries;
use std::f64::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Arcseconds to radians.
pub const AS2R: f64 = 4.848_136_811_095_359_935_899_141e-6;

/// Arcseconds in a full circle.
pub const TURNAS: f64 = 1_296_000.0;

/// A set of angles evaluated at one instant.
pub trait ArgumentSet: Sized {
    /// Evaluate every argument at `t` centuries since J2000.0.
    fn at(t: Centuries) -> Self;
}

/// Quartic in `t` with arcsecond coefficients, reduced to one turn and
/// converted to radians. Evaluated in Horner form.
#[inline]
fn arcsec_polynomial(c: [f64; 5], t: f64) -> f64 {
    (c[0] + (c[1] + (c[2] + (c[3] + c[4] * t) * t) * t) * t).rem_euclid(TURNAS) * AS2R
}

/// Linear angle in radians reduced to `[0, 2π)`.
#[inline]
fn linear(c0: f64, c1: f64, t: f64) -> f64 {
    (c0 + c1 * t).rem_euclid(TAU)
}

// ═══════════════════════════════════════════════════════════════════════════
// Luni-solar (Delaunay) arguments
// ═══════════════════════════════════════════════════════════════════════════

/// The five Delaunay arguments.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LuniSolarArguments {
    /// Mean anomaly of the Moon.
    pub l: f64,
    /// Mean anomaly of the Sun.
    pub l_prime: f64,
    /// Mean argument of latitude of the Moon.
    pub f: f64,
    /// Mean elongation of the Moon from the Sun.
    pub d: f64,
    /// Mean longitude of the Moon's ascending node.
    pub omega: f64,
}

impl LuniSolarArguments {
    /// Arguments in table column order `[l, l′, F, D, Ω]`.
    pub fn as_array(&self) -> [f64; 5] {
        [self.l, self.l_prime, self.f, self.d, self.omega]
    }
}

impl ArgumentSet for LuniSolarArguments {
    fn at(t: Centuries) -> Self {
        let t = t.value();
        Self {
            l: arcsec_polynomial(
                [485_868.249036, 1_717_915_923.2178, 31.8792, 0.051635, -0.000_244_70],
                t,
            ),
            // MHB2000
            l_prime: arcsec_polynomial(
                [1_287_104.79305, 129_596_581.0481, -0.5532, 0.000136, -0.000_011_49],
                t,
            ),
            f: arcsec_polynomial(
                [335_779.526232, 1_739_527_262.8478, -12.7512, -0.001037, 0.000_004_17],
                t,
            ),
            // MHB2000
            d: arcsec_polynomial(
                [1_072_260.70369, 1_602_961_601.2090, -6.3706, 0.006593, -0.000_031_69],
                t,
            ),
            omega: arcsec_polynomial(
                [450_160.398036, -6_962_890.5431, 7.4722, 0.007702, -0.000_059_39],
                t,
            ),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Planetary arguments
// ═══════════════════════════════════════════════════════════════════════════

/// Arguments of the planetary nutation series.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanetaryArguments {
    /// Mean anomaly of the Moon (MHB2000 linear).
    pub l: f64,
    /// Mean argument of latitude of the Moon (MHB2000 linear).
    pub f: f64,
    /// Mean elongation of the Moon from the Sun (MHB2000 linear).
    pub d: f64,
    /// Mean longitude of the ascending node (MHB2000 linear).
    pub omega: f64,
    /// Mean longitude of Mercury (IERS 2003).
    pub mercury: f64,
    /// Mean longitude of Venus (IERS 2003).
    pub venus: f64,
    /// Mean longitude of the Earth (IERS 2003).
    pub earth: f64,
    /// Mean longitude of Mars (IERS 2003).
    pub mars: f64,
    /// Mean longitude of Jupiter (IERS 2003).
    pub jupiter: f64,
    /// Mean longitude of Saturn (IERS 2003).
    pub saturn: f64,
    /// Mean longitude of Uranus (IERS 2003).
    pub uranus: f64,
    /// Mean longitude of Neptune (MHB2000).
    pub neptune: f64,
    /// General accumulated precession in longitude. Not reduced.
    pub precession: f64,
}

impl PlanetaryArguments {
    /// Arguments in planetary table column order, `l′` excluded:
    /// `[l, F, D, Ω, Me, Ve, E, Ma, J, Sa, U, Ne, pA]`.
    pub fn as_array(&self) -> [f64; 13] {
        [
            self.l,
            self.f,
            self.d,
            self.omega,
            self.mercury,
            self.venus,
            self.earth,
            self.mars,
            self.jupiter,
            self.saturn,
            self.uranus,
            self.neptune,
            self.precession,
        ]
    }
}

impl ArgumentSet for PlanetaryArguments {
    fn at(t: Centuries) -> Self {
        let t = t.value();
        Self {
            l: linear(2.355_555_98, 8_328.691_426_955_4, t),
            f: linear(1.627_905_234, 8_433.466_158_131, t),
            d: linear(5.198_466_741, 7_771.377_146_812_1, t),
            omega: linear(2.182_439_20, -33.757_045, t),
            mercury: linear(4.402_608_842, 2_608.790_314_157_4, t),
            venus: linear(3.176_146_697, 1_021.328_554_621_1, t),
            earth: linear(1.753_470_314, 628.307_584_999_1, t),
            mars: linear(6.203_480_913, 334.061_242_670_0, t),
            jupiter: linear(0.599_546_497, 52.969_096_264_1, t),
            saturn: linear(0.874_016_757, 21.329_910_496_0, t),
            uranus: linear(5.481_293_872, 7.478_159_856_7, t),
            neptune: linear(5.321_159_000, 3.812_777_400_0, t),
            precession: (0.024_381_750 + 0.000_005_386_91 * t) * t,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delaunay_at_j2000_are_the_constant_terms() {
        let a = LuniSolarArguments::at(Centuries::new(0.0));
        assert!((a.l - 485_868.249036 * AS2R).abs() < 1e-15);
        assert!((a.l_prime - 1_287_104.79305 * AS2R).abs() < 1e-15);
        assert!((a.omega - 450_160.398036 * AS2R).abs() < 1e-15);
    }

    #[test]
    fn delaunay_reduced_to_one_turn() {
        for t in [-1.0, -0.1, 0.06, 0.18, 0.5, 1.0] {
            for angle in LuniSolarArguments::at(Centuries::new(t)).as_array() {
                assert!(angle.abs() < TAU, "t={t}: {angle}");
            }
        }
    }

    #[test]
    fn planetary_in_range_except_precession() {
        let a = PlanetaryArguments::at(Centuries::new(0.18));
        for angle in &a.as_array()[..12] {
            assert!((0.0..TAU).contains(angle));
        }
        let expected = (0.024_381_750 + 0.000_005_386_91 * 0.18) * 0.18;
        assert_eq!(a.precession, expected);

        // Far from J2000 pA keeps growing.
        let far = PlanetaryArguments::at(Centuries::new(300.0));
        assert!(far.precession > TAU);
    }

    #[test]
    fn linear_node_regresses() {
        let a = PlanetaryArguments::at(Centuries::new(0.0));
        let b = PlanetaryArguments::at(Centuries::new(0.01));
        let step = (b.omega - a.omega).rem_euclid(TAU);
        assert!((step - (TAU - 0.337_570_45)).abs() < 1e-9);
    }
}
