/// The authalic integral, *q(𝜙)*, Snyder (1987) eq. 3-12, PROJ's `pj_qsfn()`.
///
/// Evaluated for an ellipsoid of unit semimajor axis and eccentricity `e`.
/// The spherical limit, `2 sin 𝜙`, is used for `e < 1e-7`.
///
/// Inputs:
///   sin 𝜙: sine of geographic latitude
///   e: eccentricity of the ellipsoid
pub fn qs(sinphi: f64, e: f64) -> f64 {
    let es = e * e;
    let one_es = 1.0 - es;

    if e < 1e-7 {
        return 2.0 * sinphi;
    }

    let con = e * sinphi;
    let div1 = 1.0 - con * con;
    let div2 = 1.0 + con;

    one_es * (sinphi / div1 - (0.5 / e) * ((1. - con) / div2).ln())
}

// ----- Tests ---------------------------------------------------------------------
