// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use almanac::format::{Dms, Hms};
use almanac::{parse_compact, tables, AlmanacResult, CivilTime, DeltaT, SunMoon, TT, UT};
use chrono::Utc;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "almanac", version, about = "Nutation and apparent Sun/Moon from almanac tables")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Nutation in longitude and obliquity (IAU 2000A)
    Nutation {
        /// TT instant, YYYYMMDD or YYYYMMDDhhmmss (default: now)
        datetime: Option<String>,
        /// Luni-solar coefficient table
        #[arg(long, env = "ALMANAC_NUT_LS")]
        ls: PathBuf,
        /// Planetary coefficient table
        #[arg(long, env = "ALMANAC_NUT_PL")]
        pl: PathBuf,
    },
    /// Apparent Sun and Moon from almanac coefficients
    SunMoon {
        /// Local instant, YYYYMMDD or YYYYMMDDhhmmss (default: now)
        datetime: Option<String>,
        /// Ephemeris coefficient table
        #[arg(long, env = "ALMANAC_EPHEMERIS")]
        tables: PathBuf,
        /// Hours east of UTC of the input (9 for JST)
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        utc_offset: f64,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Nutation { datetime, ls, pl } => nutation(datetime.as_deref(), &ls, &pl),
        Commands::SunMoon {
            datetime,
            tables,
            utc_offset,
        } => sun_moon(datetime.as_deref(), &tables, utc_offset),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn nutation(datetime: Option<&str>, ls: &Path, pl: &Path) -> AlmanacResult<()> {
    let tt = match datetime {
        Some(text) => CivilTime::<TT>::parse(text)?,
        None => CivilTime::<TT>::assume_tt(Utc::now().naive_utc()),
    };
    let n = tables::load_nutation(ls, pl)?.nutation_at(&tt);

    println!("  [{tt}]");
    println!("  DeltaPsi = {} rad", n.delta_psi);
    println!("           = {} °", n.delta_psi_deg());
    println!("           = {} ″", n.delta_psi_arcsec());
    println!("  DeltaEps = {} rad", n.delta_eps);
    println!("           = {} °", n.delta_eps_deg());
    println!("           = {} ″", n.delta_eps_arcsec());
    Ok(())
}

fn sun_moon(datetime: Option<&str>, path: &Path, utc_offset: f64) -> AlmanacResult<()> {
    let ut = match datetime {
        Some(text) => CivilTime::<UT>::from_zoned(parse_compact(text)?, utc_offset)?,
        None => CivilTime::<UT>::from_utc(Utc::now()),
    };
    let ephemeris = tables::load_ephemeris(path)?;
    if !ephemeris.covers_year(ut.year()) {
        log::warn!("ephemeris has no complete coverage for {}", ut.year());
    }
    let sm = SunMoon::compute(&ut, &ephemeris, &DeltaT::default())?;
    print!("{}", render(&sm));
    Ok(())
}

fn render(sm: &SunMoon) -> String {
    let v = &sm.values;
    let mut out = String::new();
    let mut line = |s: String| {
        out.push_str(&s);
        out.push('\n');
    };
    line(format!("[ {}  {} ]", sm.ut, sm.tt));
    line(format!(
        "  T = {}  F = {:.10}  ΔT = {} s  tm = {:.10}  tm_r = {:.10}",
        sm.day.day,
        sm.day.fraction,
        sm.day.delta_t,
        sm.day.tm(),
        sm.day.tm_r()
    ));
    line("  ---".into());
    line(format!("  SUN    R.A. = {:12.8} h  (= {})", v.sun_ra, Hms(v.sun_ra)));
    line(format!("  SUN    DEC. = {:12.8} °  (= {})", v.sun_dec, Dms(v.sun_dec)));
    line(format!("  SUN   DIST. = {:12.8} AU", v.sun_dist));
    line(format!("  SUN     hG. = {:12.8} h  (= {})", sm.sun.hour_angle, Hms(sm.sun.hour_angle)));
    line(format!(
        "  SUN    S.D. = {:12.8} ′  (= {})",
        sm.sun.semi_diameter,
        Dms(sm.sun.semi_diameter / 60.0)
    ));
    line(format!("  MOON   R.A. = {:12.8} h  (= {})", v.moon_ra, Hms(v.moon_ra)));
    line(format!("  MOON   DEC. = {:12.8} °  (= {})", v.moon_dec, Dms(v.moon_dec)));
    line(format!("  MOON   H.P. = {:12.8} °  (= {})", v.moon_hp, Dms(v.moon_hp)));
    line(format!("  MOON    hG. = {:12.8} h  (= {})", sm.moon.hour_angle, Hms(sm.moon.hour_angle)));
    line(format!(
        "  MOON   S.D. = {:12.8} ′  (= {})",
        sm.moon.semi_diameter,
        Dms(sm.moon.semi_diameter / 60.0)
    ));
    line(format!("           R  = {:12.8} h  (= {})", v.r, Hms(v.r)));
    line(format!("         EPS. = {:12.8} °  (= {})", v.eps, Dms(v.eps)));
    line("  ---".into());
    line(format!("  SUN  LAMBDA ={:13.8} °  (={})", sm.sun.lambda, Dms(sm.sun.lambda)));
    line(format!("  SUN    BETA ={:13.8} °  (={})", sm.sun.beta, Dms(sm.sun.beta)));
    line(format!("  MOON LAMBDA ={:13.8} °  (={})", sm.moon.lambda, Dms(sm.moon.lambda)));
    line(format!("  MOON   BETA ={:13.8} °  (={})", sm.moon.beta, Dms(sm.moon.beta)));
    line(format!("  DIFF LAMBDA ={:13.8} °", sm.lambda_sun_minus_moon));
    out
}
