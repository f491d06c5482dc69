use almanac::format::{Dms, Hms};
use almanac::{tables, Almanac, CivilTime, DeltaT, TT, UT};
use std::path::Path;

fn main() -> almanac::AlmanacResult<()> {
    let data = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data");
    let almanac = Almanac::new(
        tables::load_nutation(data.join("nut_ls.txt"), data.join("nut_pl.txt"))?,
        tables::load_ephemeris(data.join("ephemeris_2018.txt"))?,
        DeltaT::default(),
    );

    let tt: CivilTime<TT> = "20180101".parse()?;
    let n = almanac.nutation(&tt);
    println!("{tt}: Δψ = {:.6}″  Δε = {:.6}″", n.delta_psi_arcsec(), n.delta_eps_arcsec());

    let ut = CivilTime::<UT>::new(2018, 6, 15, 3, 0, 0)?;
    let sm = almanac.sun_moon(&ut)?;
    println!("{ut}:");
    println!("  Sun  RA {}  Dec {}", Hms(sm.sun.ra), Dms(sm.sun.dec));
    println!("  Moon RA {}  Dec {}", Hms(sm.moon.ra), Dms(sm.moon.dec));
    println!("  λ☉ − λ☾ = {:.4}°", sm.lambda_sun_minus_moon);
    Ok(())
}
