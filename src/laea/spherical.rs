//! The spherical variant of the projection
use super::*;
use std::f64::consts::FRAC_PI_4;

// ----- F O R W A R D -----------------------------------------------------------------

impl Laea {
    /// Spherical forward: (λ, 𝜙) to (x, y), on the unit sphere
    pub fn fwd_spherical(&self, lam: f64, phi: f64) -> Result<Coor2D, Error> {
        let (sinphi, cosphi) = phi.sin_cos();
        let (sinlam, coslam) = lam.sin_cos();

        match self.mode {
            Mode::Equatorial => {
                let denominator = 1. + cosphi * coslam;
                azimuthal(denominator, cosphi * sinlam, sinphi)
            }
            Mode::Oblique => {
                let denominator = 1. + self.sinb1 * sinphi + self.cosb1 * cosphi * coslam;
                let northing = self.cosb1 * sinphi - self.sinb1 * cosphi * coslam;
                azimuthal(denominator, cosphi * sinlam, northing)
            }
            Mode::NorthPolar => self.polar(phi, sinlam, coslam, -1.),
            Mode::SouthPolar => self.polar(phi, sinlam, coslam, 1.),
        }
    }

    // The polar aspects differ by the orientation of the y axis, `sign`
    fn polar(&self, phi: f64, sinlam: f64, coslam: f64, sign: f64) -> Result<Coor2D, Error> {
        // The antipode of the projection center
        if (phi + self.phi0).abs() < EPS10 {
            trace!("LAEA: antipodal point");
            return Err(Error::OutsideDomain);
        }
        let z = FRAC_PI_4 - phi * 0.5;
        let k = 2. * if sign > 0. { z.cos() } else { z.sin() };
        Ok(Coor2D::raw(k * sinlam, k * sign * coslam))
    }
}

// Equatorial and oblique aspects: `denominator` vanishes at the antipode
// of the projection center
fn azimuthal(denominator: f64, easting: f64, northing: f64) -> Result<Coor2D, Error> {
    if denominator <= EPS10 {
        trace!("LAEA: point at or beyond the antipode");
        return Err(Error::OutsideDomain);
    }
    let k = (2. / denominator).sqrt();
    Ok(Coor2D::raw(k * easting, k * northing))
}

// ----- I N V E R S E -----------------------------------------------------------------

impl Laea {
    /// Spherical inverse: (x, y) on the unit sphere, to (λ, 𝜙)
    pub fn inv_spherical(&self, x: f64, y: f64) -> Result<Coor2D, Error> {
        let rho = x.hypot(y);
        if rho * 0.5 > 1. {
            trace!("LAEA: point outside the projected sphere");
            return Err(Error::OutsideDomain);
        }
        let z = 2. * (rho * 0.5).asin();

        let (lam, phi) = match self.mode {
            Mode::Equatorial => {
                let (sinz, cosz) = z.sin_cos();
                let phi = if rho <= EPS10 {
                    0.
                } else {
                    (y * sinz / rho).asin()
                };
                (longitude(x * sinz, cosz * rho), phi)
            }
            Mode::Oblique => {
                let (sinz, cosz) = z.sin_cos();
                let phi = if rho <= EPS10 {
                    self.phi0
                } else {
                    (cosz * self.sinb1 + y * sinz * self.cosb1 / rho).asin()
                };
                let x = x * sinz * self.cosb1;
                let y = (cosz - phi.sin() * self.sinb1) * rho;
                (longitude(x, y), phi)
            }
            Mode::NorthPolar => (x.atan2(-y), FRAC_PI_2 - z),
            Mode::SouthPolar => (x.atan2(y), z - FRAC_PI_2),
        };
        Ok(Coor2D::raw(lam, phi))
    }
}

// Equatorial and oblique aspects: The rotated `y` also vanishes for points
// 90° from the central meridian, so only the center itself is special cased
fn longitude(x: f64, y: f64) -> f64 {
    if y == 0. && x == 0. {
        return 0.;
    }
    x.atan2(y)
}

// ----- T E S T S ---------------------------------------------------------------------
