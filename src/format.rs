// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sexagesimal display adapters.
//!
//! ```rust
//! use almanac::format::{Dms, Hms};
//!
//! assert_eq!(Hms(5.5).to_string(), "   5 h 30 m 00.000 s");
//! assert_eq!(Dms(-23.5).to_string(), " -23 ° 30 ′ 00.000 ″");
//! ```

use std::fmt;

/// Hours rendered as `shhh h mm m ss.sss s` with an explicit sign column.
/// Hour angles are not wrapped, so negative values are routine.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Hms(pub f64);

impl fmt::Display for Hms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = split_sexagesimal(self.0.abs());
        let hours = format!("{}{h}", sign(self.0));
        write!(f, "{hours:>4} h {m:02} m {s:06.3} s")
    }
}

/// Degrees rendered as `sddd ° mm ′ ss.sss ″` with an explicit sign column.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Dms(pub f64);

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (d, m, s) = split_sexagesimal(self.0.abs());
        let degrees = format!("{}{d}", sign(self.0));
        write!(f, "{degrees:>4} ° {m:02} ′ {s:06.3} ″")
    }
}

fn sign(value: f64) -> &'static str {
    if value < 0.0 {
        "-"
    } else {
        " "
    }
}

/// Whole units, whole sixtieths and remaining 3600ths, each truncated
/// toward zero.
fn split_sexagesimal(value: f64) -> (i64, i64, f64) {
    let whole = value.trunc();
    let minutes = (value - whole) * 60.0;
    let m = minutes.trunc();
    let s = (minutes - m) * 60.0;
    (whole as i64, m as i64, s)
}
