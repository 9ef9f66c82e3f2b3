// demos/etrs_laea.rs

// Using the LAEA projection to map a few European capitals to the
// ETRS89-LAEA grid (EPSG:3035), and back.
// Run with:
// RUST_LOG=trace cargo run --example etrs_laea

use laea::prelude::*;

// Use Anyhow for convenient error handling
fn main() -> anyhow::Result<()> {
    // The library logs through the `log` facade: Select a backend here
    env_logger::init();

    // The context provider is the entry point to all transformation functionality
    let mut ctx = Minimal::new();

    // ETRS89-LAEA: Centered at 52°N 10°E on GRS80, with a false origin
    // keeping all of Europe in the first quadrant
    let params = Parameters::new()
        .lat_0(52.)
        .lon_0(10.)
        .x_0(4_321_000.)
        .y_0(3_210_000.);
    let etrs_laea = ctx.op(&params)?;

    // `geo` takes latitude/longitude in degrees, and stores them as
    // longitude/latitude in radians
    let cph = Coor2D::geo(55.68, 12.57); // Copenhagen
    let osl = Coor2D::geo(59.91, 10.75); // Oslo
    let lis = Coor2D::geo(38.72, -9.14); // Lisbon
    let ath = Coor2D::geo(37.98, 23.73); // Athens

    // A point on the far side of the globe, where the projection is undefined
    let antipode = Coor2D::geo(-52., -170.);

    let mut data = [cph, osl, lis, ath, antipode];
    let n = ctx.apply(etrs_laea, Fwd, &mut data)?;
    println!("etrs_laea: {n} of {} points projected", data.len());
    for coord in data {
        println!("    {:?}", coord);
    }

    // Back to geographic coordinates. The antipode stays NaN
    ctx.apply(etrs_laea, Inv, &mut data)?;
    println!("roundtrip:");
    for coord in data {
        println!("    {:?}", coord.to_geo());
    }

    // An equal area projection: The areal scale is unity everywhere
    for coord in [cph, osl, lis, ath] {
        let jacobian = ctx.jacobian(etrs_laea, coord)?;
        let scale = jacobian.areal_scale(&params.ellps, coord[1]);
        println!("areal scale at {:?}: {scale:.12}", coord.to_geo());
    }

    // Release the operator
    ctx.teardown(etrs_laea)?;
    Ok(())
}
