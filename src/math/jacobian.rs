use crate::authoring::*;

// Step size for the numerical differentiation, in radians
const STEP: f64 = 1e-8;

/// The partial derivatives of a map projection at a point, in units of
/// the projected coordinates per radian: (∂x/∂λ, ∂y/∂𝜙, ∂x/∂𝜙, ∂y/∂λ).
///
/// Mostly based on the PROJ function [pj_deriv](https://github.com/OSGeo/PROJ/blob/master/src/deriv.cpp),
/// evaluating the mapping at four points surrounding the point of interest.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Jacobian {
    pub x_l: f64,
    pub y_p: f64,
    pub x_p: f64,
    pub y_l: f64,
}

impl Jacobian {
    /// Differentiate `forward` at `at`, given as (λ, 𝜙) in radians.
    /// Fails if `forward` fails at any of the four surrounding points.
    pub fn new<F>(forward: F, at: Coor2D) -> Result<Jacobian, Error>
    where
        F: Fn(Coor2D) -> Result<Coor2D, Error>,
    {
        let (lam, phi) = at.xy();
        let mut j = Jacobian::default();

        // North-east of POI
        let (x, y) = forward(Coor2D::raw(lam + STEP, phi + STEP))?.xy();
        j.x_l += x;
        j.y_p += y;
        j.x_p += x;
        j.y_l += y;

        // South-east of POI
        let (x, y) = forward(Coor2D::raw(lam + STEP, phi - STEP))?.xy();
        j.x_l += x;
        j.y_p -= y;
        j.x_p -= x;
        j.y_l += y;

        // South-west of POI
        let (x, y) = forward(Coor2D::raw(lam - STEP, phi - STEP))?.xy();
        j.x_l -= x;
        j.y_p -= y;
        j.x_p -= x;
        j.y_l -= y;

        // North-west of POI
        let (x, y) = forward(Coor2D::raw(lam - STEP, phi + STEP))?.xy();
        j.x_l -= x;
        j.y_p += y;
        j.x_p += x;
        j.y_l -= y;

        let d = 4. * STEP;
        j.x_l /= d;
        j.y_p /= d;
        j.x_p /= d;
        j.y_l /= d;
        Ok(j)
    }

    /// The determinant, ∂x/∂λ · ∂y/∂𝜙 - ∂x/∂𝜙 · ∂y/∂λ
    #[must_use]
    pub fn determinant(&self) -> f64 {
        self.x_l * self.y_p - self.x_p * self.y_l
    }

    /// The areal scale factor at `latitude` on `ellps`: The ratio between
    /// an infinitesimal area on the map, and the corresponding area on the
    /// ellipsoid. Identically 1 for an equal area projection with unit scale.
    #[must_use]
    pub fn areal_scale(&self, ellps: &Ellipsoid, latitude: f64) -> f64 {
        let m = ellps.meridian_radius_of_curvature(latitude);
        let n = ellps.prime_vertical_radius_of_curvature(latitude);
        self.determinant().abs() / (m * n * latitude.cos())
    }
}

// ----- Tests ---------------------------------------------------------------------
