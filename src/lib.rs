// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Almanac
//!
//! Apparent Sun and Moon positions from almanac coefficient tables, and
//! IAU 2000A nutation from the MHB2000 luni-solar and planetary series.
//!
//! # Core types
//!
//! - [`CivilTime<S>`] — calendar instant on a [`TimeScale`] ([`UT`] or [`TT`]).
//! - [`DeltaT`] — year → whole-second ΔT table used for UT → TT.
//! - [`NutationTables`] / [`Nutation`] — coefficient rows and the Δψ, Δε result.
//! - [`EphemerisTables`] / [`EphemerisValues`] — per-year Chebyshev-style rows
//!   for the eight tabulated [`Quantity`] values.
//! - [`SunMoon`] — the tabulated values plus hour angles, semi-diameters and
//!   apparent ecliptic coordinates for one UT instant.
//! - [`Almanac`] — tables and ΔT bundled behind one facade.
//!
//! # Units
//!
//! | Quantity | Unit |
//! |----------|------|
//! | Δψ, Δε | radians (degree and arcsecond accessors on [`Nutation`]) |
//! | right ascension, `R`, hour angle | hours |
//! | declination, obliquity, parallax, λ, β | degrees |
//! | semi-diameter | arcminutes |
//! | Sun distance | AU |
//!
//! # Example
//!
//! ```rust
//! use almanac::{tables, CivilTime, TT};
//!
//! let ls = "header\n 0 0 0 0 1 -17206.4161 -17.4666 3.3386 9205.2331 0.9086 1.5377\n";
//! let nutation = almanac::NutationTables::new(tables::parse_luni_solar(ls).unwrap(), Vec::new());
//! let tt: CivilTime<TT> = "20180101".parse().unwrap();
//! let n = nutation.nutation_at(&tt);
//! assert!(n.delta_psi_arcsec().abs() < 20.0);
//! ```

pub mod apparent;
mod delta_t;
pub mod ephemeris;
pub mod error;
pub mod format;
pub mod fundamental;
pub mod geometry;
pub(crate) mod instant;
pub mod nutation;
pub(crate) mod scales;
pub mod series;
pub mod tables;
pub mod time_argument;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use apparent::{Almanac, BodyPosition, SunMoon};
pub use delta_t::DeltaT;
pub use ephemeris::{EphemerisRow, EphemerisTables, EphemerisValues, Quantity};
pub use error::{AlmanacError, AlmanacResult};
pub use instant::{parse_compact, CivilTime};
pub use nutation::{LuniSolarTerm, Nutation, NutationTables, PlanetaryTerm};
pub use scales::{TimeScale, TT, UT};
pub use time_argument::AlmanacDay;

/// Universal Time calendar instant.
pub type UniversalTime = CivilTime<UT>;

/// Terrestrial Time calendar instant.
pub type TerrestrialTime = CivilTime<TT>;
