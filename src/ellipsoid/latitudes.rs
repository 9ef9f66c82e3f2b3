use super::*;
use std::f64::consts::FRAC_PI_2;

/// Below this third flattening, the authalic latitude is computed by the
/// Fourier series alone. Above, the forward conversion is computed in closed
/// form, and the inverse is refined by Newton iteration.
const SERIES_LIMIT: f64 = 0.01;

// Newton iteration limits for the inverse authalic latitude
const MAX_ITER: usize = 10;
const NEWTON_TOLERANCE: f64 = 1e-15;

// ----- Authalic latitude coefficients ----------------------------------------

/// Owned buffer of Fourier coefficients for conversions between geographic
/// and authalic latitudes: `POLYNOMIAL_ORDER` forward coefficients, followed
/// by `POLYNOMIAL_ORDER` inverse ones.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthalicCoefficients(Vec<f64>);

impl AuthalicCoefficients {
    /// Compute the coefficients for an ellipsoid of third flattening `n`.
    /// The buffer is allocated fallibly: If the allocator cannot provide it,
    /// we return `Error::ResourceExhausted`, rather than abort.
    pub fn new(n: f64) -> Result<AuthalicCoefficients, Error> {
        let mut buffer = Vec::new();
        if buffer.try_reserve_exact(2 * POLYNOMIAL_ORDER).is_err() {
            warn!("Cannot allocate authalic latitude coefficients");
            return Err(Error::ResourceExhausted("authalic latitude coefficients"));
        }
        let series = fourier_coefficients(n, &constants::AUTHALIC);
        buffer.extend_from_slice(&series.fwd);
        buffer.extend_from_slice(&series.inv);
        Ok(AuthalicCoefficients(buffer))
    }

    /// Coefficients for geographic-to-authalic
    pub fn fwd(&self) -> &[f64] {
        &self.0[..POLYNOMIAL_ORDER]
    }

    /// Coefficients for authalic-to-geographic
    pub fn inv(&self) -> &[f64] {
        &self.0[POLYNOMIAL_ORDER..]
    }
}

// ----- Authalic latitude -----------------------------------------------------
impl Ellipsoid {
    /// Obtain the coefficients needed for working with authalic latitudes
    pub fn coefficients_for_authalic_latitude_computations(
        &self,
    ) -> Result<AuthalicCoefficients, Error> {
        AuthalicCoefficients::new(self.third_flattening())
    }

    /// The authalic integral, *q(𝜙)*, for an ellipsoid of unit semimajor axis
    #[must_use]
    pub fn authalic_q(&self, sinphi: f64) -> f64 {
        qs(sinphi, self.eccentricity())
    }

    /// The authalic integral evaluated at the pole, *qp = q(90°)*. The
    /// surface area of the ellipsoid (of unit semimajor axis) is 2𝜋·qp
    #[must_use]
    pub fn authalic_q_at_pole(&self) -> f64 {
        self.authalic_q(1.0)
    }

    /// Geographic latitude, 𝜙, to authalic, 𝜉.
    ///
    /// `sincos` is the sine and cosine of `geographic_latitude`, typically
    /// already at hand at the call site. `qp` is the
    /// [authalic integral at the pole](Ellipsoid::authalic_q_at_pole).
    #[must_use]
    pub fn latitude_geographic_to_authalic(
        &self,
        geographic_latitude: f64,
        sincos: (f64, f64),
        coefficients: &AuthalicCoefficients,
        qp: f64,
    ) -> f64 {
        if self.third_flattening().abs() < SERIES_LIMIT {
            // sin(2𝜙) and cos(2𝜙) from the trigs of 𝜙
            let (s, c) = sincos;
            let trig = [2. * s * c, (c - s) * (c + s)];
            return geographic_latitude + fourier::sin_from_trig(trig, coefficients.fwd());
        }
        (self.authalic_q(sincos.0) / qp).clamp(-1., 1.).asin()
    }

    /// Authalic latitude, 𝜉, to geographic, 𝜙
    #[must_use]
    pub fn latitude_authalic_to_geographic(
        &self,
        authalic_latitude: f64,
        coefficients: &AuthalicCoefficients,
        qp: f64,
    ) -> f64 {
        let mut phi =
            authalic_latitude + fourier::sin(2. * authalic_latitude, coefficients.inv());
        if self.third_flattening().abs() < SERIES_LIMIT {
            return phi;
        }

        // Newton refinement, Snyder (1987) eq. 3-16
        let es = self.eccentricity_squared();
        let e = es.sqrt();
        let one_es = 1. - es;
        let q = authalic_latitude.sin() * qp;
        for _ in 0..MAX_ITER {
            let (s, c) = phi.sin_cos();
            // The iteration is singular at the poles, where the series is exact anyway
            if FRAC_PI_2 - phi.abs() < 1e-12 {
                break;
            }
            let one_minus_x = 1. - es * s * s;
            let dphi = one_minus_x * one_minus_x / (2. * c)
                * (q / one_es - s / one_minus_x - (e * s).atanh() / e);
            if !dphi.is_finite() {
                break;
            }
            phi += dphi;
            if dphi.abs() < NEWTON_TOLERANCE {
                break;
            }
        }
        phi
    }
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // Authalic latitude, 𝜉
    #[test]
    fn authalic() -> Result<(), Error> {
        let ellps = Ellipsoid::named("GRS80")?;
        let coefficients = ellps.coefficients_for_authalic_latitude_computations()?;
        let qp = ellps.authalic_q_at_pole();
        assert_eq!(coefficients.fwd().len(), POLYNOMIAL_ORDER);
        assert_eq!(coefficients.inv().len(), POLYNOMIAL_ORDER);

        let lat = 55_f64.to_radians();
        let xi = ellps.latitude_geographic_to_authalic(lat, lat.sin_cos(), &coefficients, qp);
        assert!((xi.to_degrees() - 54.879_361_594_517_796).abs() < 1e-12);
        let phi = ellps.latitude_authalic_to_geographic(xi, &coefficients, qp);
        assert!((phi.to_degrees() - 55.).abs() < 1e-12);

        // The series agrees with the closed form sin(𝜉) = q(𝜙)/qp (which
        // is ill conditioned close to the poles, hence not tested there)
        for lat in [10., 35., 45., 55., 80., -10., -35., -45., -55., -80., 0.] {
            let lat = (lat as f64).to_radians();
            let xi = ellps.latitude_geographic_to_authalic(lat, lat.sin_cos(), &coefficients, qp);
            let exact = (ellps.authalic_q(lat.sin()) / qp).asin();
            assert!((xi - exact).abs() < 1e-14);
        }

        // ...and it is invertible all the way to the poles
        for lat in [35., -35., 89.9, -89.9, 90., -90.] {
            let lat = (lat as f64).to_radians();
            let xi = ellps.latitude_geographic_to_authalic(lat, lat.sin_cos(), &coefficients, qp);
            let phi = ellps.latitude_authalic_to_geographic(xi, &coefficients, qp);
            assert!((phi - lat).abs() < 1e-14);
        }
        Ok(())
    }

    // For larger flattenings, the closed form and the Newton refinement take over
    #[test]
    fn authalic_large_flattening() -> Result<(), Error> {
        let ellps = Ellipsoid::new(1., 1. / 30.);
        assert!(ellps.third_flattening() > SERIES_LIMIT);
        let coefficients = ellps.coefficients_for_authalic_latitude_computations()?;
        let qp = ellps.authalic_q_at_pole();

        for lat in [-89., -60., -30., -1., 0., 1., 30., 60., 89.] {
            let lat = (lat as f64).to_radians();
            let xi = ellps.latitude_geographic_to_authalic(lat, lat.sin_cos(), &coefficients, qp);
            assert!((xi.sin() - ellps.authalic_q(lat.sin()) / qp).abs() < 1e-15);
            let phi = ellps.latitude_authalic_to_geographic(xi, &coefficients, qp);
            assert!((phi - lat).abs() < 1e-13);
        }

        // The pole maps to the pole
        let xi = ellps.latitude_geographic_to_authalic(FRAC_PI_2, (1., 0.), &coefficients, qp);
        assert!((xi - FRAC_PI_2).abs() < 1e-15);
        let phi = ellps.latitude_authalic_to_geographic(FRAC_PI_2, &coefficients, qp);
        assert!((phi - FRAC_PI_2).abs() < 1e-12);
        Ok(())
    }

    // On the sphere, authalic and geographic latitudes coincide
    #[test]
    fn authalic_sphere() -> Result<(), Error> {
        let sphere = Ellipsoid::named("unitsphere")?;
        let coefficients = sphere.coefficients_for_authalic_latitude_computations()?;
        let qp = sphere.authalic_q_at_pole();
        assert_eq!(qp, 2.);
        assert!(coefficients.fwd().iter().all(|c| *c == 0.));
        let lat = 42_f64.to_radians();
        let xi = sphere.latitude_geographic_to_authalic(lat, lat.sin_cos(), &coefficients, qp);
        assert!((xi - lat).abs() < 1e-15);
        Ok(())
    }
}
