//! Lambert azimuthal equal area: the projection proper, on a sphere or an
//! ellipsoid of unit semimajor axis.
//!
//! Longitudes are relative to the central meridian, so the scaling by the
//! semimajor axis and `k_0`, and the false origin, are left to the caller
//! (cf. [`Op`](crate::authoring::Op)).
use crate::authoring::*;
use std::f64::consts::FRAC_PI_2;

mod ellipsoidal;
mod spherical;

/// Tolerance for classifying the aspect, and for detecting the
/// singularities of the forward and inverse mappings
pub const EPS10: f64 = 1e-10;

// ----- C O M M O N -------------------------------------------------------------------

/// The aspect of the projection, i.e. where the projection is centered
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    NorthPolar,
    SouthPolar,
    Equatorial,
    Oblique,
}

impl Mode {
    /// Classify the aspect from the latitude of origin (in radians)
    pub fn from_latitude(phi0: f64) -> Result<Mode, Error> {
        let t = phi0.abs();
        if phi0.is_nan() || t > FRAC_PI_2 + EPS10 {
            warn!("LAEA: Bad central latitude!");
            return Err(Error::InvalidParameter(
                String::from("lat_0"),
                format!("{}: |lat_0| should be <= 90°", phi0.to_degrees()),
            ));
        }

        if (t - FRAC_PI_2).abs() < EPS10 {
            return Ok(if phi0 < 0. {
                Mode::SouthPolar
            } else {
                Mode::NorthPolar
            });
        }

        if t < EPS10 {
            return Ok(Mode::Equatorial);
        }
        Ok(Mode::Oblique)
    }
}

/// The constants needed by the ellipsoidal variant of the projection, and
/// the buffer of authalic latitude coefficients owned by it
#[derive(Clone, Debug)]
pub struct Ellipsoidal {
    ellps: Ellipsoid,
    qp: f64,
    mmf: f64,
    rq: f64,
    dd: f64,
    xmf: f64,
    ymf: f64,
    apa: AuthalicCoefficients,
}

impl Ellipsoidal {
    /// The authalic integral at the pole
    #[must_use]
    pub fn qp(&self) -> f64 {
        self.qp
    }

    /// `0.5 / (1 - e²)`
    #[must_use]
    pub fn mmf(&self) -> f64 {
        self.mmf
    }

    /// `sqrt(qp / 2)`, the radius of the authalic sphere (for unit semimajor
    /// axis). Not used by the polar aspects
    #[must_use]
    pub fn rq(&self) -> f64 {
        self.rq
    }

    /// The aspect dependent scale correction
    #[must_use]
    pub fn dd(&self) -> f64 {
        self.dd
    }

    /// The (x, y) scale factors of the equatorial and oblique aspects
    #[must_use]
    pub fn scale_factors(&self) -> (f64, f64) {
        (self.xmf, self.ymf)
    }

    /// The authalic latitude coefficients
    #[must_use]
    pub fn coefficients(&self) -> &AuthalicCoefficients {
        &self.apa
    }
}

/// The state of an instantiation of the projection. Immutable after
/// construction, except for [teardown](Laea::teardown), which releases
/// the ellipsoidal state.
#[derive(Clone, Debug)]
pub struct Laea {
    mode: Mode,
    phi0: f64,
    sinb1: f64,
    cosb1: f64,
    ellipsoidal: Option<Ellipsoidal>,
}

// ----- C O N S T R U C T O R ---------------------------------------------------------

impl Laea {
    /// Instantiate the projection with latitude of origin `phi0` (radians).
    /// Only the shape of `ellps` is used: the projection works on a unit
    /// semimajor axis.
    pub fn new(phi0: f64, ellps: &Ellipsoid) -> Result<Laea, Error> {
        let mode = Mode::from_latitude(phi0)?;
        let es = ellps.eccentricity_squared();

        let mut laea = Laea {
            mode,
            phi0,
            sinb1: 0.,
            cosb1: 0.,
            ellipsoidal: None,
        };

        // Spherical case
        if es == 0.0 {
            if mode == Mode::Oblique {
                (laea.sinb1, laea.cosb1) = phi0.sin_cos();
            }
            debug!("LAEA: {mode:?} aspect, spherical");
            return Ok(laea);
        }

        // Ellipsoidal case. On failure, the freshly allocated coefficient
        // buffer is dropped on the way out
        let qp = ellps.authalic_q_at_pole();
        let apa = ellps.coefficients_for_authalic_latitude_computations()?;
        let mut ell = Ellipsoidal {
            ellps: *ellps,
            qp,
            mmf: 0.5 / (1. - es),
            rq: 0.,
            dd: 1.,
            xmf: 0.,
            ymf: 0.,
            apa,
        };

        match mode {
            Mode::NorthPolar | Mode::SouthPolar => {}
            Mode::Equatorial => {
                ell.rq = (0.5 * qp).sqrt();
                ell.dd = 1. / ell.rq;
                ell.xmf = 1.;
                ell.ymf = 0.5 * qp;
            }
            Mode::Oblique => {
                ell.rq = (0.5 * qp).sqrt();
                let (sinphi, cosphi) = phi0.sin_cos();
                let b1 = ellps.latitude_geographic_to_authalic(
                    phi0,
                    (sinphi, cosphi),
                    &ell.apa,
                    qp,
                );
                (laea.sinb1, laea.cosb1) = b1.sin_cos();
                ell.dd = cosphi / ((1. - es * sinphi * sinphi).sqrt() * ell.rq * laea.cosb1);
                ell.ymf = ell.rq / ell.dd;
                ell.xmf = ell.rq * ell.dd;
            }
        }

        debug!("LAEA: {mode:?} aspect, ellipsoidal");
        laea.ellipsoidal = Some(ell);
        Ok(laea)
    }

    // ----- L I F E C Y C L E ---------------------------------------------------------

    /// Release the ellipsoidal state, including the authalic coefficients.
    /// Repeated calls, and calls on spherical instances, are no-ops.
    pub fn teardown(&mut self) {
        if self.ellipsoidal.take().is_some() {
            debug!("LAEA: released authalic latitude coefficients");
        }
    }

    // ----- A C C E S S O R S ---------------------------------------------------------

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The latitude of origin, in radians
    #[must_use]
    pub fn phi0(&self) -> f64 {
        self.phi0
    }

    /// Sine and cosine of the authalic latitude of origin. Zero, except for
    /// the oblique aspect
    #[must_use]
    pub fn sincos_b1(&self) -> (f64, f64) {
        (self.sinb1, self.cosb1)
    }

    /// The ellipsoidal constants: `None` for spherical instances, and after
    /// teardown
    #[must_use]
    pub fn ellipsoidal(&self) -> Option<&Ellipsoidal> {
        self.ellipsoidal.as_ref()
    }
}

// ----- T E S T S ---------------------------------------------------------------------
