use almanac::ephemeris::{chebyshev_angle, cosine_series, normalize_hours};
use almanac::geometry::{ecliptic_to_equatorial, equatorial_to_ecliptic};
use almanac::{parse_compact, CivilTime, EphemerisRow, EphemerisTables, Quantity, UT};
use chrono::{Datelike, NaiveDate, Timelike};
use proptest::prelude::*;

proptest! {
    #[test]
    fn hours_wrap_into_a_day(h in -1.0e4f64..1.0e4) {
        let n = normalize_hours(h);
        prop_assert!((0.0..24.0).contains(&n));
        prop_assert_eq!(normalize_hours(n), n);
        let turns = (h - n) / 24.0;
        prop_assert!((turns - turns.round()).abs() < 1e-9);
    }

    #[test]
    fn ecliptic_round_trip(ra in 0.0f64..24.0, dec in -60.0f64..60.0, eps in 22.0f64..25.0) {
        let ecl = equatorial_to_ecliptic(ra, dec, eps);
        prop_assert!((0.0..360.0).contains(&ecl.lon_deg));
        let back = ecliptic_to_equatorial(ecl.lon_deg, ecl.lat_deg, eps);
        let mut d_ra = (back.ra_hours - ra).abs();
        d_ra = d_ra.min(24.0 - d_ra);
        prop_assert!(d_ra < 1e-9, "ra {} -> {}", ra, back.ra_hours);
        prop_assert!((back.dec_deg - dec).abs() < 1e-9);
    }

    #[test]
    fn angle_spans_half_turn(a in 0.0f64..300.0, len in 1.0f64..40.0, s in -0.5f64..1.5) {
        let b = a + len;
        let theta = chebyshev_angle(a, b, a + s * len);
        prop_assert!((0.0..=180.0).contains(&theta));
    }

    #[test]
    fn constant_series_ignores_angle(c in -100.0f64..100.0, theta in 0.0f64..180.0) {
        prop_assert_eq!(cosine_series(theta, &[c]), c);
    }

    #[test]
    fn selection_is_deterministic(t in 0.0f64..367.5) {
        let mut tables = EphemerisTables::new();
        for (a, b) in [(0.0, 100.0), (100.0, 250.0), (250.0, 366.0)] {
            tables
                .push(Quantity::Eps, EphemerisRow::new(2018, a, b, vec![23.4, 0.001 * a]))
                .unwrap();
        }
        let row = tables.select(Quantity::Eps, 2018, t);
        prop_assert!(row.is_some());
        prop_assert_eq!(row, tables.select(Quantity::Eps, 2018, t));
        let v = tables.value(Quantity::Eps, 2018, t);
        prop_assert_eq!(v, tables.value(Quantity::Eps, 2018, t));
        prop_assert!(v.is_finite());
    }

    #[test]
    fn compact_timestamps_round_trip(
        y in 1901i32..2100, doy in 1u32..=365, h in 0u32..24, mi in 0u32..60, s in 0u32..60,
    ) {
        let date = NaiveDate::from_yo_opt(y, doy).unwrap();
        let text = format!(
            "{:04}{:02}{:02}{:02}{:02}{:02}",
            date.year(), date.month(), date.day(), h, mi, s
        );
        let parsed = parse_compact(&text).unwrap();
        prop_assert_eq!(parsed.date(), date);
        prop_assert_eq!((parsed.hour(), parsed.minute(), parsed.second()), (h, mi, s));

        let ut = CivilTime::<UT>::from_naive(parsed);
        let frac = ut.day_fraction();
        prop_assert!((0.0..1.0).contains(&frac));
    }
}
