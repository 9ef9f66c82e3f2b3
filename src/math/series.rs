/// The order of the Fourier series used to compute the authalic latitude
pub const POLYNOMIAL_ORDER: usize = 6;

/// Two upper triangular matrices of polynomium coefficients for computing
/// the Fourier coefficients for (a.o.) the auxiliary latitudes
#[derive(Clone, Copy, Debug, Default)]
pub struct PolynomialCoefficients {
    pub fwd: [[f64; POLYNOMIAL_ORDER]; POLYNOMIAL_ORDER],
    pub inv: [[f64; POLYNOMIAL_ORDER]; POLYNOMIAL_ORDER],
}

/// The Fourier coefficients used when computing e.g. auxiliary latitudes
#[derive(Clone, Copy, Debug, Default)]
pub struct FourierCoefficients {
    pub fwd: [f64; POLYNOMIAL_ORDER],
    pub inv: [f64; POLYNOMIAL_ORDER],
}

// --- Taylor series polynomium evaluation ----

pub mod taylor {
    use super::FourierCoefficients;
    use super::PolynomialCoefficients;
    use super::POLYNOMIAL_ORDER;

    /// Compute Fourier coefficients by evaluating their corresponding
    /// Taylor polynomiums
    pub fn fourier_coefficients(
        arg: f64,
        coefficients: &PolynomialCoefficients,
    ) -> FourierCoefficients {
        let mut result = FourierCoefficients::default();
        for i in 0..POLYNOMIAL_ORDER {
            result.fwd[i] = arg * horner(arg, &coefficients.fwd[i]);
            result.inv[i] = arg * horner(arg, &coefficients.inv[i]);
        }
        result
    }

    /// Evaluate Σ cᵢ · xⁱ using Horner's scheme
    pub fn horner(arg: f64, coefficients: &[f64]) -> f64 {
        let mut coefficients = coefficients.iter().rev();
        let Some(first) = coefficients.next() else {
            return 0.;
        };
        let mut value = *first;
        for c in coefficients {
            value = value.mul_add(arg, *c);
        }
        value
    }
}

// --- Fourier series summation using Clenshaw's recurrence ---

pub mod fourier {

    /// Evaluate Σ cᵢ sin( i · arg ), for i ∈ {order, ... , 1}, using Clenshaw summation
    pub fn sin(arg: f64, coefficients: &[f64]) -> f64 {
        let (sin_arg, cos_arg) = arg.sin_cos();
        sin_from_trig([sin_arg, cos_arg], coefficients)
    }

    /// Evaluate Σ cᵢ sin( i · arg ), for i ∈ {order, ... , 1}, using Clenshaw summation
    ///
    /// Functionally identical to [sin](crate::math::series::fourier::sin), but
    /// takes the trigonometric factors `[sin(arg), cos(arg)]` as input, for
    /// the cases where they are already at hand.
    #[inline(always)]
    pub fn sin_from_trig(trig: [f64; 2], coefficients: &[f64]) -> f64 {
        // Unpack the trigonometric factors for better readability.
        let (sin_arg, cos_arg) = (trig[0], trig[1]);
        let x = 2.0 * cos_arg;
        let mut c0 = 0.0;
        let mut c1 = 0.0;

        for c in coefficients.iter().rev() {
            (c1, c0) = (c0, x.mul_add(c0, c - c1));
        }
        sin_arg * c0
    }
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::taylor::*;
    use super::*;

    #[test]
    fn test_horner() {
        // Coefficients for 3x² + 2x + 1
        let coefficients = [1_f64, 2., 3.];
        assert_eq!(horner(1., &coefficients), 6.);
        assert_eq!(horner(2., &coefficients), 17.);
        assert_eq!(horner(-2., &coefficients), 9.);

        assert_eq!(horner(-2., &[1_f64]), 1.);
        assert_eq!(horner(-2., &[3_f64]), 3.);

        assert_eq!(horner(-2., &[]), 0.);
    }

    #[test]
    fn test_fourier_coefficients() {
        let mut polynomials = PolynomialCoefficients::default();
        polynomials.fwd[0] = [1., 2., 0., 0., 0., 0.];
        polynomials.inv[1] = [0., 3., 0., 0., 0., 0.];
        let n = 0.5;
        let coefficients = fourier_coefficients(n, &polynomials);
        // n · (1 + 2n) and n · 3n
        assert_eq!(coefficients.fwd[0], 1.0);
        assert_eq!(coefficients.inv[1], 0.75);
        assert_eq!(coefficients.fwd[1], 0.);
    }

    #[test]
    fn test_clenshaw() {
        // Coefficients for 1sin(x) + 2sin(2x) + 3sin(3x)
        let coefficients = [1., 2., 3.];
        assert_eq!(fourier::sin(0., &[]), 0.);
        assert_eq!(fourier::sin(1., &[]), 0.);
        assert_eq!(fourier::sin(0.5, &[]), 0.);

        let x = 30_f64.to_radians();

        // Clenshaw sine-series summation
        let result = 1.0 * x.sin() + 2.0 * (2.0 * x).sin() + 3.0 * (3.0 * x).sin();
        assert!((fourier::sin(x, &coefficients) - result).abs() < 1e-14);

        // With precomputed trigs
        let trig = [x.sin(), x.cos()];
        assert!((fourier::sin_from_trig(trig, &coefficients) - result).abs() < 1e-14);
    }
}
