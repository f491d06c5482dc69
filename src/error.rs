// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type shared by time input, ΔT lookup and table loading.
//!
//! | Variant | Raised by | Meaning |
//! |---------|-----------|---------|
//! | [`InvalidTime`](AlmanacError::InvalidTime) | [`CivilTime`](crate::CivilTime) constructors | malformed or impossible calendar input |
//! | [`MissingDeltaT`](AlmanacError::MissingDeltaT) | [`DeltaT::seconds`](crate::DeltaT::seconds) | year not covered by the ΔT table |
//! | [`ColumnCount`](AlmanacError::ColumnCount), [`InvalidNumber`](AlmanacError::InvalidNumber), [`UnknownQuantity`](AlmanacError::UnknownQuantity), [`InvalidInterval`](AlmanacError::InvalidInterval), [`OverlappingRows`](AlmanacError::OverlappingRows) | [`tables`](crate::tables) | corrupted coefficient data |
//! | [`Io`](AlmanacError::Io) | [`tables`](crate::tables) file loaders | table file could not be read |
//!
//! An ephemeris instant that no coefficient row covers is **not** an error:
//! the affected quantity evaluates to zero and a warning is logged.

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used by every fallible function of the crate.
pub type AlmanacResult<T> = Result<T, AlmanacError>;

#[derive(Error, Debug)]
pub enum AlmanacError {
    /// Calendar input rejected before any computation.
    #[error("invalid time {input:?}: {reason}")]
    InvalidTime { input: String, reason: &'static str },

    /// The ΔT table has no entry for the requested year.
    #[error("no ΔT entry for year {year}")]
    MissingDeltaT { year: i32 },

    /// A coefficient row does not have the column layout of its table.
    #[error("{table}, line {line}: expected {expected} columns, found {found}")]
    ColumnCount {
        table: &'static str,
        line: usize,
        expected: String,
        found: usize,
    },

    /// A token in a coefficient row is not a number of the expected kind.
    #[error("{table}, line {line}: cannot parse {token:?}")]
    InvalidNumber {
        table: &'static str,
        line: usize,
        token: String,
    },

    /// An ephemeris row names a quantity outside the eight tracked ones.
    #[error("ephemeris, line {line}: unknown quantity {name:?}")]
    UnknownQuantity { line: usize, name: String },

    /// An ephemeris row whose validity interval is empty or reversed.
    #[error("{quantity} {year}: interval [{a}, {b}] is empty")]
    InvalidInterval {
        quantity: &'static str,
        year: i32,
        a: f64,
        b: f64,
    },

    /// Two rows of the same quantity and year share interior points.
    #[error("{quantity} {year}: interval [{a}, {b}] overlaps [{prev_a}, {prev_b}]")]
    OverlappingRows {
        quantity: &'static str,
        year: i32,
        a: f64,
        b: f64,
        prev_a: f64,
        prev_b: f64,
    },

    /// A table file could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AlmanacError {
    pub(crate) fn invalid_time(input: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidTime {
            input: input.into(),
            reason,
        }
    }
}
