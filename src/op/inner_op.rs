use super::*;

// ----- S T R U C T   I N N E R O P ---------------------------------------------------

/// Blueprint for the functions doing the actual transformation work.
///
/// InnerOp needs to be a newtype, rather than a type alias, since we
/// must implement the Debug-trait for InnerOp (to make auto derive
/// of the Debug-trait work for any derived type).
pub struct InnerOp(pub fn(op: &Op, operands: &mut dyn CoordinateSet) -> usize);

// Cannot autoderive the Debug trait
impl core::fmt::Debug for InnerOp {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "InnerOp")
    }
}

// Defaults to no_op
impl Default for InnerOp {
    fn default() -> InnerOp {
        InnerOp(noop_placeholder)
    }
}

fn noop_placeholder(_op: &Op, _operands: &mut dyn CoordinateSet) -> usize {
    0
}

// ----- F O R W A R D -----------------------------------------------------------------

pub(super) fn fwd_spherical(op: &Op, operands: &mut dyn CoordinateSet) -> usize {
    fwd(op, operands, Laea::fwd_spherical)
}

pub(super) fn fwd_ellipsoidal(op: &Op, operands: &mut dyn CoordinateSet) -> usize {
    fwd(op, operands, Laea::fwd_ellipsoidal)
}

// Wrap the unit sphere/ellipsoid projection with the central meridian,
// scaling, and false origin
fn fwd(op: &Op, operands: &mut dyn CoordinateSet, project: Projection) -> usize {
    let scale = op.params.ellps.semimajor_axis() * op.params.k_0;
    let lon_0 = op.params.lon_0;
    let x_0 = op.params.x_0;
    let y_0 = op.params.y_0;
    let mut successes = 0_usize;

    for i in 0..operands.len() {
        let (lam, phi) = operands.xy(i);
        let Ok(xy) = project(&op.laea, lam - lon_0, phi) else {
            operands.set_coord(i, &Coor2D::nan());
            continue;
        };
        operands.set_xy(i, scale * xy[0] + x_0, scale * xy[1] + y_0);
        successes += 1;
    }
    successes
}

// ----- I N V E R S E -----------------------------------------------------------------

pub(super) fn inv_spherical(op: &Op, operands: &mut dyn CoordinateSet) -> usize {
    inv(op, operands, Laea::inv_spherical)
}

pub(super) fn inv_ellipsoidal(op: &Op, operands: &mut dyn CoordinateSet) -> usize {
    inv(op, operands, Laea::inv_ellipsoidal)
}

fn inv(op: &Op, operands: &mut dyn CoordinateSet, project: Projection) -> usize {
    let scale = op.params.ellps.semimajor_axis() * op.params.k_0;
    let lon_0 = op.params.lon_0;
    let x_0 = op.params.x_0;
    let y_0 = op.params.y_0;
    let mut successes = 0_usize;

    for i in 0..operands.len() {
        let (x, y) = operands.xy(i);
        let Ok(lp) = project(&op.laea, (x - x_0) / scale, (y - y_0) / scale) else {
            operands.set_coord(i, &Coor2D::nan());
            continue;
        };
        operands.set_xy(i, angular::normalize_symmetric(lp[0] + lon_0), lp[1]);
        successes += 1;
    }
    successes
}

// One of the four variants of the projection proper
type Projection = fn(&Laea, f64, f64) -> Result<Coor2D, Error>;
