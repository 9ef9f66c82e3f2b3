use crate::math::PolynomialCoefficients;

/// Built in ellipsoids: name, semimajor axis, reciproque flattening.
/// An rf of 0 indicates a sphere
#[rustfmt::skip]
pub(super) const ELLIPSOID_LIST: [(&str, f64, f64); 8] = [
    ("GRS80",      6_378_137.0,   298.257_222_100_882_7),
    ("WGS84",      6_378_137.0,   298.257_223_563),
    ("intl",       6_378_388.0,   297.0),
    ("bessel",     6_377_397.155, 299.152_812_8),
    ("clrk66",     6_378_206.4,   294.978_698_2),
    ("airy",       6_377_563.396, 299.324_964_6),
    ("sphere",     6_370_997.0,   0.0),
    ("unitsphere", 1.0,           0.0),
];

// The order-6 series for the authalic latitude in terms of the third
// flattening, n. From Karney (2023), "On auxiliary latitudes",
// https://doi.org/10.1080/00396265.2023.2217604
// Row i holds the Taylor coefficients (n¹...n⁶) of the Fourier coefficient
// of sin(2(i+1)·𝜙), resp. sin(2(i+1)·𝜉)
#[rustfmt::skip]
pub(super) const AUTHALIC: PolynomialCoefficients = PolynomialCoefficients {
    // Geographic latitude, 𝜙, to authalic latitude, 𝜉
    fwd: [
        [-4. / 3., -4. / 45., 88. / 315., 538. / 4725., 20824. / 467775., -44732. / 2837835.],
        [0., 34. / 45., 8. / 105., -2482. / 14175., -37192. / 467775., -12467764. / 212837625.],
        [0., 0., -1532. / 2835., -898. / 14175., 54968. / 467775., 100320856. / 1915538625.],
        [0., 0., 0., 6007. / 14175., 24496. / 467775., -5884124. / 70945875.],
        [0., 0., 0., 0., -23356. / 66825., -839792. / 19348875.],
        [0., 0., 0., 0., 0., 570284222. / 1915538625.],
    ],
    // Authalic latitude, 𝜉, to geographic latitude, 𝜙
    inv: [
        [4. / 3., 4. / 45., -16. / 35., -2582. / 14175., 60136. / 467775., 28112932. / 212837625.],
        [0., 46. / 45., 152. / 945., -11966. / 14175., -21016. / 51975., 251310128. / 638512875.],
        [0., 0., 3044. / 2835., 3802. / 14175., -94388. / 66825., -8797648. / 10945935.],
        [0., 0., 0., 6059. / 4725., 41072. / 93555., -1472637812. / 638512875.],
        [0., 0., 0., 0., 768272. / 467775., 455935736. / 638512875.],
        [0., 0., 0., 0., 0., 4210684958. / 1915538625.],
    ],
};
