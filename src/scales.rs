// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-scale marker types.
//!
//! Each zero-sized type tags a [`CivilTime`](crate::CivilTime) with the
//! scale its calendar fields are read on.
//!
//! | Marker | Scale | Used by |
//! |--------|-------|---------|
//! | [`UT`] | Universal Time (civil clock, Earth rotation) | almanac day `T`, fraction `F`, ΔT year lookup |
//! | [`TT`] | Terrestrial Time (`TT = UT + ΔT`) | Julian centuries for nutation |

/// Marker trait for the two calendar scales the almanac works with.
pub trait TimeScale: Copy + Clone + std::fmt::Debug + PartialEq + Eq + 'static {
    /// Display label appended by [`CivilTime`](crate::CivilTime) formatting.
    const LABEL: &'static str;
}

/// Universal Time — the civil time scale tied to Earth's rotation.
///
/// Calendar input (UTC or a fixed-offset local zone such as JST) is read on
/// this scale. The sidereal quantity `R` of the ephemeris tables is indexed
/// by UT only.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UT;

impl TimeScale for UT {
    const LABEL: &'static str = "UT";
}

/// Terrestrial Time — the uniform scale of the nutation theory.
///
/// Obtained from [`UT`] with
/// [`CivilTime::<UT>::to_tt`](crate::CivilTime::to_tt), which adds the
/// tabulated ΔT of the instant's year.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TT;

impl TimeScale for TT {
    const LABEL: &'static str = "TT";
}
