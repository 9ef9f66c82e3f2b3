//! The ellipsoidal variant of the projection: The geographic latitude is
//! replaced by the authalic latitude, reducing the problem to the spherical
//! case on the authalic sphere.
use super::*;

// Below this, the squared distance to a polar projection center vanishes
const POLE_DEGENERACY: f64 = 1e-15;

// ----- F O R W A R D -----------------------------------------------------------------

impl Laea {
    /// Ellipsoidal forward: (λ, 𝜙) to (x, y), for unit semimajor axis
    pub fn fwd_ellipsoidal(&self, lam: f64, phi: f64) -> Result<Coor2D, Error> {
        let ell = self.released()?;
        let (sinlam, coslam) = lam.sin_cos();
        let xi = ell.ellps.latitude_geographic_to_authalic(phi, phi.sin_cos(), &ell.apa, ell.qp);
        let (sinb, cosb) = xi.sin_cos();
        let q = sinb * ell.qp;

        match self.mode {
            Mode::Oblique => {
                let b = 1. + self.sinb1 * sinb + self.cosb1 * cosb * coslam;
                let k = authalic_scale(b)?;
                let y = ell.ymf * k * (self.cosb1 * sinb - self.sinb1 * cosb * coslam);
                Ok(Coor2D::raw(ell.xmf * k * cosb * sinlam, y))
            }
            Mode::Equatorial => {
                let k = authalic_scale(1. + cosb * coslam)?;
                let y = k * sinb * ell.ymf;
                Ok(Coor2D::raw(ell.xmf * k * cosb * sinlam, y))
            }
            Mode::NorthPolar => polar(FRAC_PI_2 + phi, ell.qp - q, sinlam, coslam, -1.),
            Mode::SouthPolar => polar(phi - FRAC_PI_2, ell.qp + q, sinlam, coslam, 1.),
        }
    }

    // The ellipsoidal constants, unless released by teardown
    fn released(&self) -> Result<&Ellipsoidal, Error> {
        self.ellipsoidal
            .as_ref()
            .ok_or(Error::General("LAEA: ellipsoidal state released"))
    }
}

// The radial scaling of the equatorial and oblique aspects. `b` vanishes
// at the antipode of the projection center
fn authalic_scale(b: f64) -> Result<f64, Error> {
    if b.abs() < EPS10 {
        trace!("LAEA: antipodal point");
        return Err(Error::OutsideDomain);
    }
    Ok((2. / b).sqrt())
}

// The polar aspects: `b` vanishes at the opposite pole, `q` at the center.
// `sign` is the orientation of the y axis
fn polar(b: f64, q: f64, sinlam: f64, coslam: f64, sign: f64) -> Result<Coor2D, Error> {
    if b.abs() < EPS10 {
        trace!("LAEA: antipodal point");
        return Err(Error::OutsideDomain);
    }
    if q < POLE_DEGENERACY {
        return Ok(Coor2D::origin());
    }
    let rho = q.sqrt();
    Ok(Coor2D::raw(rho * sinlam, sign * rho * coslam))
}

// ----- I N V E R S E -----------------------------------------------------------------

impl Laea {
    /// Ellipsoidal inverse: (x, y) for unit semimajor axis, to (λ, 𝜙)
    pub fn inv_ellipsoidal(&self, x: f64, y: f64) -> Result<Coor2D, Error> {
        let ell = self.released()?;
        let center = Coor2D::raw(0., self.phi0);

        // Sine of the authalic latitude, and the rotated (x, y)
        let (ab, x, y) = match self.mode {
            Mode::Equatorial | Mode::Oblique => {
                let x = x / ell.dd;
                let y = y * ell.dd;
                let rho = x.hypot(y);
                if rho < EPS10 {
                    return Ok(center);
                }
                let arg = 0.5 * rho / ell.rq;
                if arg > 1. {
                    trace!("LAEA: point outside the projected ellipsoid");
                    return Err(Error::OutsideDomain);
                }
                let (sin_c, cos_c) = (2. * arg.asin()).sin_cos();
                if self.mode == Mode::Oblique {
                    let ab = cos_c * self.sinb1 + y * sin_c * self.cosb1 / rho;
                    let y = rho * self.cosb1 * cos_c - y * self.sinb1 * sin_c;
                    (ab, x * sin_c, y)
                } else {
                    (y * sin_c / rho, x * sin_c, rho * cos_c)
                }
            }
            Mode::NorthPolar => {
                let q = x * x + y * y;
                if q == 0. {
                    return Ok(center);
                }
                (1. - q / ell.qp, x, -y)
            }
            Mode::SouthPolar => {
                let q = x * x + y * y;
                if q == 0. {
                    return Ok(center);
                }
                (q / ell.qp - 1., x, y)
            }
        };

        // Beyond the opposite pole of a polar aspect
        if ab.abs() > 1. + EPS10 {
            trace!("LAEA: point outside the projected ellipsoid");
            return Err(Error::OutsideDomain);
        }

        let lam = x.atan2(y);
        let xi = ab.clamp(-1., 1.).asin();
        let phi = ell.ellps.latitude_authalic_to_geographic(xi, &ell.apa, ell.qp);
        Ok(Coor2D::raw(lam, phi))
    }
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;
    use std::f64::consts::PI;

    // Expected values for (λ, 𝜙) = (12°, 55°), on GRS80 with unit semimajor axis
    #[rustfmt::skip]
    const EXPECTED: [(f64, Mode, [f64; 2]); 4] = [
        ( 90., Mode::NorthPolar, [0.125_317_694_233_595_43, -0.589_573_397_541_787_5]),
        (-90., Mode::SouthPolar, [0.396_002_780_848_951_35,  1.863_046_606_219_174_4]),
        (  0., Mode::Equatorial, [0.135_315_171_215_428_7,   0.923_261_163_918_783]),
        ( 45., Mode::Oblique,    [0.120_272_468_609_044_36,  0.183_452_770_943_395_74]),
    ];

    #[test]
    fn all_aspects() -> Result<(), Error> {
        let ellps = Ellipsoid::named("GRS80")?;
        let p = Coor2D::geo(55., 12.);

        for (lat_0, mode, expected) in EXPECTED {
            let laea = Laea::new(lat_0.to_radians(), &ellps)?;
            assert_eq!(laea.mode(), mode);
            let xy = laea.fwd_ellipsoidal(p[0], p[1])?;
            assert_float_eq!(xy.0, expected, abs_all <= 1e-14);
            let back = laea.inv_ellipsoidal(xy[0], xy[1])?;
            assert_float_eq!(back.0, p.0, abs_all <= 1e-14);
        }
        Ok(())
    }

    #[test]
    fn centers_and_antipodes() -> Result<(), Error> {
        let ellps = Ellipsoid::named("GRS80")?;

        // Equatorial
        let laea = Laea::new(0., &ellps)?;
        let quarter = laea.fwd_ellipsoidal(FRAC_PI_2, 0.)?;
        assert_float_eq!(quarter.0, [2_f64.sqrt(), 0.], abs_all <= 1e-15);
        assert_eq!(laea.inv_ellipsoidal(0., 0.)?, Coor2D::origin());
        assert_eq!(laea.inv_ellipsoidal(1e-11, 0.)?, Coor2D::origin());
        assert!(matches!(
            laea.fwd_ellipsoidal(PI, 0.),
            Err(Error::OutsideDomain)
        ));
        let rim = 2. * laea.ellipsoidal().map_or(0., |e| e.rq() * e.dd());
        assert!(matches!(
            laea.inv_ellipsoidal(rim + 1e-6, 0.),
            Err(Error::OutsideDomain)
        ));
        assert!(laea.inv_ellipsoidal(rim - 1e-6, 0.)?.is_finite());

        // Oblique
        let phi0 = 52_f64.to_radians();
        let laea = Laea::new(phi0, &ellps)?;
        assert_eq!(laea.inv_ellipsoidal(0., 0.)?, Coor2D::raw(0., phi0));
        let center = laea.fwd_ellipsoidal(0., phi0)?;
        assert_float_eq!(center.0, [0., 0.], abs_all <= 1e-14);

        // North polar
        let laea = Laea::new(FRAC_PI_2, &ellps)?;
        assert_eq!(laea.inv_ellipsoidal(0., 0.)?, Coor2D::raw(0., FRAC_PI_2));
        assert!(matches!(
            laea.fwd_ellipsoidal(0.3, -FRAC_PI_2),
            Err(Error::OutsideDomain)
        ));

        // South polar
        let laea = Laea::new(-FRAC_PI_2, &ellps)?;
        assert_eq!(laea.inv_ellipsoidal(0., 0.)?, Coor2D::raw(0., -FRAC_PI_2));
        assert!(matches!(
            laea.fwd_ellipsoidal(0.3, FRAC_PI_2),
            Err(Error::OutsideDomain)
        ));

        // Polar aspects: the opposite pole is on the rim, q = 2·qp, and
        // anything beyond it is outside of the domain
        for lat_0 in [FRAC_PI_2, -FRAC_PI_2] {
            let laea = Laea::new(lat_0, &ellps)?;
            let rim = laea.ellipsoidal().map_or(0., |e| (2. * e.qp()).sqrt());
            let opposite = laea.inv_ellipsoidal(rim, 0.)?;
            assert!((opposite[1] + lat_0).abs() < 1e-12);
            assert!(matches!(
                laea.inv_ellipsoidal(3., 0.),
                Err(Error::OutsideDomain)
            ));
            assert!(matches!(
                laea.inv_ellipsoidal(0., -(rim + 1e-6)),
                Err(Error::OutsideDomain)
            ));
        }
        Ok(())
    }

    #[test]
    fn degenerate_pole() -> Result<(), Error> {
        let ellps = Ellipsoid::named("GRS80")?;

        // At, and infinitesimally close to, the center of a polar aspect,
        // q vanishes, and the origin is returned without failure
        let north = Laea::new(FRAC_PI_2, &ellps)?;
        assert_eq!(north.fwd_ellipsoidal(0.3, FRAC_PI_2)?, Coor2D::origin());
        assert_eq!(north.fwd_ellipsoidal(0., FRAC_PI_2 - 1e-9)?, Coor2D::origin());

        let south = Laea::new(-FRAC_PI_2, &ellps)?;
        assert_eq!(south.fwd_ellipsoidal(-2., -FRAC_PI_2)?, Coor2D::origin());
        Ok(())
    }
}
