use super::*;

/// The defining parameters of a projection. Angles are stored in radians,
/// but given in degrees to the builder style setters:
///
/// ```
/// use laea::prelude::*;
/// let params = Parameters::new().lat_0(52.).lon_0(10.);
/// assert_eq!(params.lat_0, 52_f64.to_radians());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Parameters {
    pub ellps: Ellipsoid,
    /// Latitude of origin
    pub lat_0: f64,
    /// Central meridian
    pub lon_0: f64,
    /// False easting
    pub x_0: f64,
    /// False northing
    pub y_0: f64,
    /// Scale factor
    pub k_0: f64,
    /// Swap the forward and inverse directions
    pub inverted: bool,
}

impl Default for Parameters {
    fn default() -> Parameters {
        Parameters {
            ellps: Ellipsoid::default(),
            lat_0: 0.,
            lon_0: 0.,
            x_0: 0.,
            y_0: 0.,
            k_0: 1.,
            inverted: false,
        }
    }
}

impl Parameters {
    /// GRS80, centered at (0, 0), with unit scale and no false origin
    #[must_use]
    pub fn new() -> Parameters {
        Parameters::default()
    }

    #[must_use]
    pub fn ellps(mut self, ellps: Ellipsoid) -> Parameters {
        self.ellps = ellps;
        self
    }

    #[must_use]
    pub fn lat_0(mut self, degrees: f64) -> Parameters {
        self.lat_0 = degrees.to_radians();
        self
    }

    #[must_use]
    pub fn lon_0(mut self, degrees: f64) -> Parameters {
        self.lon_0 = degrees.to_radians();
        self
    }

    #[must_use]
    pub fn x_0(mut self, x_0: f64) -> Parameters {
        self.x_0 = x_0;
        self
    }

    #[must_use]
    pub fn y_0(mut self, y_0: f64) -> Parameters {
        self.y_0 = y_0;
        self
    }

    #[must_use]
    pub fn k_0(mut self, k_0: f64) -> Parameters {
        self.k_0 = k_0;
        self
    }

    /// Invert the operator, i.e. swap its forward and inverse directions
    #[must_use]
    pub fn inv(mut self) -> Parameters {
        self.inverted = !self.inverted;
        self
    }

    // Sanity checks for the parameters not handled by the projection itself
    pub(super) fn validate(&self) -> Result<(), Error> {
        let es = self.ellps.eccentricity_squared();
        let a = self.ellps.semimajor_axis();
        if !(a > 0. && (0. ..1.).contains(&es)) {
            warn!("LAEA: Bad ellipsoid!");
            return Err(Error::InvalidParameter(
                String::from("ellps"),
                format!("a={a}, f={}", self.ellps.flattening()),
            ));
        }

        if !(self.k_0 > 0. && self.k_0.is_finite()) {
            warn!("LAEA: Bad scale factor!");
            return Err(Error::InvalidParameter(
                String::from("k_0"),
                format!("{}: k_0 should be > 0", self.k_0),
            ));
        }

        let finite = [self.lon_0, self.x_0, self.y_0];
        if !finite.iter().all(|v| v.is_finite()) {
            warn!("LAEA: Bad false origin or central meridian!");
            return Err(Error::InvalidParameter(
                String::from("lon_0/x_0/y_0"),
                format!("{}, {}, {}", self.lon_0.to_degrees(), self.x_0, self.y_0),
            ));
        }
        Ok(())
    }
}

// ----- T E S T S ---------------------------------------------------------------------
