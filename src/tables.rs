// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Text loaders for the coefficient tables.
//!
//! ## Nutation tables
//!
//! Whitespace-separated columns. The first line is a header and is skipped;
//! blank lines are ignored.
//!
//! * luni-solar: 5 integer multipliers, then 6 amplitudes;
//! * planetary: 14 integer multipliers, then 4 amplitudes.
//!
//! Amplitudes are written in milliarcseconds with four decimals
//! (`-17206.4161`). The decimal point is removed and the digits read as an
//! integer count of 0.1 µas (`-172064161`).
//!
//! ## Ephemeris tables
//!
//! One row per line, `#` starts a comment:
//!
//! ```text
//! QUANTITY YEAR A B C0 C1 ... CN
//! SUN_RA   2018 0 31 19.8049509 1.1067892 -0.0108770
//! ```

use crate::ephemeris::{EphemerisRow, EphemerisTables, Quantity};
use crate::error::{AlmanacError, AlmanacResult};
use crate::nutation::{LuniSolarTerm, NutationTables, PlanetaryTerm};
use std::path::Path;
use std::str::FromStr;

const LUNI_SOLAR: &str = "luni-solar";
const PLANETARY: &str = "planetary";
const EPHEMERIS: &str = "ephemeris";

// ── token helpers ─────────────────────────────────────────────────────────

fn parse_token<T: FromStr>(table: &'static str, line: usize, token: &str) -> AlmanacResult<T> {
    token.parse().map_err(|_| AlmanacError::InvalidNumber {
        table,
        line,
        token: token.to_owned(),
    })
}

/// Fixed-point amplitude with the decimal point dropped.
fn parse_amplitude(table: &'static str, line: usize, token: &str) -> AlmanacResult<f64> {
    let digits = token.replacen('.', "", 1);
    let units: i64 = digits.parse().map_err(|_| AlmanacError::InvalidNumber {
        table,
        line,
        token: token.to_owned(),
    })?;
    Ok(units as f64)
}

/// Non-blank data lines after the header, with 1-based line numbers.
fn data_lines(text: &str) -> impl Iterator<Item = (usize, Vec<&str>)> {
    text.lines()
        .enumerate()
        .skip(1)
        .map(|(i, l)| (i + 1, l.split_whitespace().collect::<Vec<_>>()))
        .filter(|(_, cols)| !cols.is_empty())
}

fn expect_columns(
    table: &'static str,
    line: usize,
    cols: &[&str],
    expected: usize,
) -> AlmanacResult<()> {
    if cols.len() == expected {
        Ok(())
    } else {
        Err(AlmanacError::ColumnCount {
            table,
            line,
            expected: expected.to_string(),
            found: cols.len(),
        })
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Nutation
// ═══════════════════════════════════════════════════════════════════════════

/// Parse the luni-solar table.
pub fn parse_luni_solar(text: &str) -> AlmanacResult<Vec<LuniSolarTerm>> {
    let mut terms = Vec::new();
    for (line, cols) in data_lines(text) {
        expect_columns(LUNI_SOLAR, line, &cols, 11)?;
        let mut multipliers = [0i32; 5];
        for (m, tok) in multipliers.iter_mut().zip(&cols[..5]) {
            *m = parse_token(LUNI_SOLAR, line, tok)?;
        }
        let amp = |i: usize| parse_amplitude(LUNI_SOLAR, line, cols[i]);
        terms.push(LuniSolarTerm {
            multipliers,
            ps: amp(5)?,
            pst: amp(6)?,
            pc: amp(7)?,
            ec: amp(8)?,
            ect: amp(9)?,
            es: amp(10)?,
        });
    }
    log::debug!("parsed {} luni-solar nutation terms", terms.len());
    Ok(terms)
}

/// Parse the planetary table.
pub fn parse_planetary(text: &str) -> AlmanacResult<Vec<PlanetaryTerm>> {
    let mut terms = Vec::new();
    for (line, cols) in data_lines(text) {
        expect_columns(PLANETARY, line, &cols, 18)?;
        let mut multipliers = [0i32; 14];
        for (m, tok) in multipliers.iter_mut().zip(&cols[..14]) {
            *m = parse_token(PLANETARY, line, tok)?;
        }
        let amp = |i: usize| parse_amplitude(PLANETARY, line, cols[i]);
        terms.push(PlanetaryTerm {
            multipliers,
            ps: amp(14)?,
            pc: amp(15)?,
            es: amp(16)?,
            ec: amp(17)?,
        });
    }
    log::debug!("parsed {} planetary nutation terms", terms.len());
    Ok(terms)
}

// ═══════════════════════════════════════════════════════════════════════════
// Ephemeris
// ═══════════════════════════════════════════════════════════════════════════

/// Parse ephemeris coefficient rows.
pub fn parse_ephemeris(text: &str) -> AlmanacResult<EphemerisTables> {
    let mut tables = EphemerisTables::new();
    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        let content = raw.split('#').next().unwrap_or_default();
        let cols: Vec<&str> = content.split_whitespace().collect();
        if cols.is_empty() {
            continue;
        }
        if cols.len() < 5 {
            return Err(AlmanacError::ColumnCount {
                table: EPHEMERIS,
                line,
                expected: "at least 5".into(),
                found: cols.len(),
            });
        }
        let quantity = Quantity::from_name(cols[0]).ok_or_else(|| AlmanacError::UnknownQuantity {
            line,
            name: cols[0].to_owned(),
        })?;
        let year = parse_token(EPHEMERIS, line, cols[1])?;
        let a = parse_token(EPHEMERIS, line, cols[2])?;
        let b = parse_token(EPHEMERIS, line, cols[3])?;
        let coefficients = cols[4..]
            .iter()
            .map(|tok| parse_token(EPHEMERIS, line, tok))
            .collect::<AlmanacResult<Vec<f64>>>()?;
        tables.push(quantity, EphemerisRow::new(year, a, b, coefficients))?;
    }
    log::debug!("parsed {} ephemeris rows", tables.len());
    Ok(tables)
}

// ═══════════════════════════════════════════════════════════════════════════
// Files
// ═══════════════════════════════════════════════════════════════════════════

fn read(path: &Path) -> AlmanacResult<String> {
    std::fs::read_to_string(path).map_err(|source| AlmanacError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load both nutation tables from files.
pub fn load_nutation(
    luni_solar: impl AsRef<Path>,
    planetary: impl AsRef<Path>,
) -> AlmanacResult<NutationTables> {
    let ls = parse_luni_solar(&read(luni_solar.as_ref())?)?;
    let pl = parse_planetary(&read(planetary.as_ref())?)?;
    Ok(NutationTables::new(ls, pl))
}

/// Load ephemeris coefficient rows from a file.
pub fn load_ephemeris(path: impl AsRef<Path>) -> AlmanacResult<EphemerisTables> {
    parse_ephemeris(&read(path.as_ref())?)
}
