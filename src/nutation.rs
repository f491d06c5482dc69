// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! IAU 2000A nutation (MHB2000): luni-solar plus planetary series.
//!
//! Computes nutation in longitude (Δψ) and in obliquity (Δε) for a TT
//! instant from two coefficient tables supplied at runtime:
//!
//! | Table | Rows (full model) | Multipliers | Amplitudes (0.1 µas) |
//! |-------|-------------------|-------------|----------------------|
//! | luni-solar | 678 | `l l′ F D Ω` | `PS PST PC EC ECT ES` |
//! | planetary | 687 | `l l′ F D Ω Me Ve E Ma J Sa U Ne pA` | `PS PC ES EC` |
//!
//! For each luni-solar row with argument `θ`:
//!
//! ```text
//! Δψ += (PS + PST·t)·sin θ + PC·cos θ
//! Δε += (EC + ECT·t)·cos θ + ES·sin θ
//! ```
//!
//! and for each planetary row (the `l′` multiplier is not used):
//!
//! ```text
//! Δψ += PS·sin θ + PC·cos θ
//! Δε += ES·sin θ + EC·cos θ
//! ```
//!
//! Sums run over rows in reverse order and are scaled from 0.1 µas to
//! radians at the end. Any subset of rows (for example the 77-row IAU 2000B
//! truncation) can be loaded; the evaluation does not depend on the count.

use crate::fundamental::{ArgumentSet, LuniSolarArguments, PlanetaryArguments, AS2R};
use crate::instant::CivilTime;
use crate::scales::TT;
use crate::series::{sum_series, HarmonicTerm};
use crate::time_argument::centuries_since_j2000;
use qtty::Centuries;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 0.1 microarcsecond to radians.
pub const U2R: f64 = AS2R / 1e7;

/// Radians to degrees.
pub const R2D: f64 = 57.295_779_513_082_320_876_798_15;

/// Arcseconds per degree.
pub const D2S: f64 = 3600.0;

// ═══════════════════════════════════════════════════════════════════════════
// Table rows
// ═══════════════════════════════════════════════════════════════════════════

/// One row of the luni-solar table. Amplitudes in 0.1 µas.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LuniSolarTerm {
    /// Multipliers of `[l, l′, F, D, Ω]`.
    pub multipliers: [i32; 5],
    pub ps: f64,
    pub pst: f64,
    pub pc: f64,
    pub ec: f64,
    pub ect: f64,
    pub es: f64,
}

impl HarmonicTerm<2> for LuniSolarTerm {
    type Arguments = LuniSolarArguments;

    #[inline]
    fn argument(&self, a: &LuniSolarArguments) -> f64 {
        let [n0, n1, n2, n3, n4] = self.multipliers.map(f64::from);
        n0 * a.l + n1 * a.l_prime + n2 * a.f + n3 * a.d + n4 * a.omega
    }

    #[inline]
    fn contribution(&self, sin: f64, cos: f64, t: f64) -> [f64; 2] {
        [
            (self.ps + self.pst * t) * sin + self.pc * cos,
            (self.ec + self.ect * t) * cos + self.es * sin,
        ]
    }
}

/// One row of the planetary table. Amplitudes in 0.1 µas.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanetaryTerm {
    /// Multipliers of `[l, l′, F, D, Ω, Me, Ve, E, Ma, J, Sa, U, Ne, pA]`.
    /// The `l′` entry is carried but ignored.
    pub multipliers: [i32; 14],
    pub ps: f64,
    pub pc: f64,
    pub es: f64,
    pub ec: f64,
}

impl HarmonicTerm<2> for PlanetaryTerm {
    type Arguments = PlanetaryArguments;

    #[inline]
    fn argument(&self, a: &PlanetaryArguments) -> f64 {
        let n = self.multipliers.map(f64::from);
        n[0] * a.l
            + n[2] * a.f
            + n[3] * a.d
            + n[4] * a.omega
            + n[5] * a.mercury
            + n[6] * a.venus
            + n[7] * a.earth
            + n[8] * a.mars
            + n[9] * a.jupiter
            + n[10] * a.saturn
            + n[11] * a.uranus
            + n[12] * a.neptune
            + n[13] * a.precession
    }

    #[inline]
    fn contribution(&self, sin: f64, cos: f64, _t: f64) -> [f64; 2] {
        [
            self.ps * sin + self.pc * cos,
            self.es * sin + self.ec * cos,
        ]
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Result
// ═══════════════════════════════════════════════════════════════════════════

/// Nutation angles in radians.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Nutation {
    /// Nutation in longitude Δψ.
    pub delta_psi: f64,
    /// Nutation in obliquity Δε.
    pub delta_eps: f64,
    luni_solar: [f64; 2],
    planetary: [f64; 2],
}

impl Nutation {
    fn from_parts(luni_solar: [f64; 2], planetary: [f64; 2]) -> Self {
        Self {
            delta_psi: luni_solar[0] + planetary[0],
            delta_eps: luni_solar[1] + planetary[1],
            luni_solar,
            planetary,
        }
    }

    /// `[Δψ, Δε]` of the luni-solar series alone.
    pub fn luni_solar(&self) -> [f64; 2] {
        self.luni_solar
    }

    /// `[Δψ, Δε]` of the planetary series alone.
    pub fn planetary(&self) -> [f64; 2] {
        self.planetary
    }

    /// Luni-solar and planetary partial sums.
    pub fn components(&self) -> ([f64; 2], [f64; 2]) {
        (self.luni_solar, self.planetary)
    }

    pub fn delta_psi_deg(&self) -> f64 {
        self.delta_psi * R2D
    }

    pub fn delta_eps_deg(&self) -> f64 {
        self.delta_eps * R2D
    }

    pub fn delta_psi_arcsec(&self) -> f64 {
        self.delta_psi_deg() * D2S
    }

    pub fn delta_eps_arcsec(&self) -> f64 {
        self.delta_eps_deg() * D2S
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tables
// ═══════════════════════════════════════════════════════════════════════════

/// Luni-solar and planetary coefficient tables.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NutationTables {
    pub luni_solar: Vec<LuniSolarTerm>,
    pub planetary: Vec<PlanetaryTerm>,
}

impl NutationTables {
    pub fn new(luni_solar: Vec<LuniSolarTerm>, planetary: Vec<PlanetaryTerm>) -> Self {
        Self {
            luni_solar,
            planetary,
        }
    }

    /// Luni-solar `[Δψ, Δε]` in radians at `t` centuries of TT.
    pub fn luni_solar_at(&self, t: Centuries) -> [f64; 2] {
        let args = LuniSolarArguments::at(t);
        let [dp, de] = sum_series(&self.luni_solar, &args, t.value());
        [dp * U2R, de * U2R]
    }

    /// Planetary `[Δψ, Δε]` in radians at `t` centuries of TT.
    pub fn planetary_at(&self, t: Centuries) -> [f64; 2] {
        let args = PlanetaryArguments::at(t);
        let [dp, de] = sum_series(&self.planetary, &args, t.value());
        [dp * U2R, de * U2R]
    }

    /// Nutation at `t` centuries of TT since J2000.0.
    pub fn nutation(&self, t: Centuries) -> Nutation {
        let nutation = Nutation::from_parts(self.luni_solar_at(t), self.planetary_at(t));
        log::debug!(
            "nutation t={} dpsi={:e} deps={:e} ({} + {} terms)",
            t.value(),
            nutation.delta_psi,
            nutation.delta_eps,
            self.luni_solar.len(),
            self.planetary.len()
        );
        nutation
    }

    /// Nutation at a TT calendar instant.
    pub fn nutation_at(&self, tt: &CivilTime<TT>) -> Nutation {
        self.nutation(centuries_since_j2000(tt))
    }
}
