// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Generic periodic-series accumulator.
//!
//! A nutation series is a sum of terms `Σ_i f_i(sin θ_i, cos θ_i, t)` where
//! each argument `θ_i` is an integer combination of fundamental arguments.
//! [`HarmonicTerm`] captures one row of such a table and [`sum_series`]
//! accumulates `N` output channels (Δψ and Δε for nutation).
//!
//! Terms are summed from the last row to the first so the small amplitudes
//! at the bottom of the table are added before the large ones.

use std::f64::consts::TAU;

/// One row of a trigonometric series with `N` output channels.
pub trait HarmonicTerm<const N: usize> {
    /// Fundamental arguments the integer multipliers apply to.
    type Arguments;

    /// Argument `θ` of this term before reduction, radians.
    fn argument(&self, args: &Self::Arguments) -> f64;

    /// Contribution to each channel for the reduced argument.
    fn contribution(&self, sin: f64, cos: f64, t: f64) -> [f64; N];
}

/// Sum `terms` in reverse order at time `t`.
///
/// Each argument is reduced modulo 2π before its sine and cosine are taken.
pub fn sum_series<T, const N: usize>(terms: &[T], args: &T::Arguments, t: f64) -> [f64; N]
where
    T: HarmonicTerm<N>,
{
    let mut acc = [0.0; N];
    for term in terms.iter().rev() {
        let (sin, cos) = term.argument(args).rem_euclid(TAU).sin_cos();
        let contribution = term.contribution(sin, cos, t);
        for (total, c) in acc.iter_mut().zip(contribution) {
            *total += c;
        }
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `a·sin(kx)` in channel 0 and `b·cos(kx)` in channel 1.
    struct Term {
        k: f64,
        a: f64,
        b: f64,
    }

    impl HarmonicTerm<2> for Term {
        type Arguments = f64;

        fn argument(&self, x: &f64) -> f64 {
            self.k * x
        }

        fn contribution(&self, sin: f64, cos: f64, _t: f64) -> [f64; 2] {
            [self.a * sin, self.b * cos]
        }
    }

    #[test]
    fn empty_series_is_zero() {
        let terms: [Term; 0] = [];
        assert_eq!(sum_series(&terms, &1.0, 0.0), [0.0, 0.0]);
    }

    #[test]
    fn sums_every_term() {
        let terms = [
            Term { k: 1.0, a: 2.0, b: 3.0 },
            Term { k: 2.0, a: -1.0, b: 0.5 },
        ];
        let x = 0.7;
        let [s, c] = sum_series(&terms, &x, 0.0);
        assert!((s - (2.0 * x.sin() - (2.0 * x).sin())).abs() < 1e-15);
        assert!((c - (3.0 * x.cos() + 0.5 * (2.0 * x).cos())).abs() < 1e-15);
    }

    #[test]
    fn large_arguments_are_reduced() {
        let terms = [Term { k: 1.0, a: 1.0, b: 1.0 }];
        let x = 0.3;
        let near = sum_series(&terms, &x, 0.0);
        let far = sum_series(&terms, &(x + 1000.0 * TAU), 0.0);
        assert!((near[0] - far[0]).abs() < 1e-10);
        assert!((near[1] - far[1]).abs() < 1e-10);
    }
}
