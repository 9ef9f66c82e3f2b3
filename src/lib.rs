//! *Lambert azimuthal equal area*, spherical and ellipsoidal.
//!
//! The projection is instantiated from a set of [`Parameters`](crate::prelude::Parameters)
//! through a [`Context`](crate::prelude::Context), and applied to any data
//! structure implementing the [`CoordinateSet`](crate::prelude::CoordinateSet)
//! trait:
//!
//! ```
//! use laea::prelude::*;
//!
//! // ETRS89-LAEA (EPSG:3035)
//! let mut ctx = Minimal::new();
//! let params = Parameters::new()
//!     .lat_0(52.)
//!     .lon_0(10.)
//!     .x_0(4_321_000.)
//!     .y_0(3_210_000.);
//! let op = ctx.op(&params)?;
//!
//! let mut data = [Coor2D::geo(50., 5.)];
//! ctx.apply(op, Fwd, &mut data)?;
//! assert!((data[0][0] - 3_962_799.45).abs() < 0.01);
//! assert!((data[0][1] - 2_999_718.85).abs() < 0.01);
//! # Ok::<(), laea::Error>(())
//! ```
//!
//! Internally, the projection works on a sphere or ellipsoid with unit
//! semimajor axis. The scaling by the semimajor axis and `k_0`, the central
//! meridian, and the false origin are handled by the [`Op`](crate::authoring::Op)
//! layer around it.

mod context;
mod coordinate;
mod ellipsoid;
mod laea;
mod math;
mod op;

/// The bread-and-butter, shrink-wrapped and ready to use
pub mod prelude {
    pub use crate::context::Context;
    pub use crate::context::Minimal;
    pub use crate::coordinate::coor2d::Coor2D;
    pub use crate::coordinate::set::CoordinateSet;
    pub use crate::coordinate::tuple::CoordinateTuple;
    pub use crate::coordinate::AngularUnits;
    pub use crate::ellipsoid::Ellipsoid;
    pub use crate::laea::Mode;
    pub use crate::op::OpHandle;
    pub use crate::op::Parameters;
    pub use crate::Direction;
    pub use crate::Direction::Fwd;
    pub use crate::Direction::Inv;
    pub use crate::Error;
}

/// Preamble for crate-internal modules, and for users who want to work
/// directly with the projection state and the latitude machinery
pub mod authoring {
    pub use crate::prelude::*;

    pub use crate::ellipsoid::latitudes::AuthalicCoefficients;
    pub use crate::laea::Ellipsoidal;
    pub use crate::laea::Laea;
    pub use crate::laea::EPS10;
    pub use crate::math::angular;
    pub use crate::math::fourier;
    pub use crate::math::jacobian::Jacobian;
    pub use crate::math::taylor;
    pub use crate::math::*;
    pub use crate::op::InnerOp;
    pub use crate::op::Op;
    pub use crate::op::OpDescriptor;

    pub use log::debug;
    pub use log::trace;
    pub use log::warn;

    pub use std::collections::BTreeMap;
}

/// The *Lambert azimuthal equal area* error messaging enumeration.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("error: {0}")]
    General(&'static str),

    #[error("{0} not found{1}")]
    NotFound(String, String),

    #[error("invalid value for parameter {0}: {1}")]
    InvalidParameter(String, String),

    #[error("resource exhausted: {0}")]
    ResourceExhausted(&'static str),

    #[error("coordinate outside projection domain")]
    OutsideDomain,
}

/// `Fwd`: Indicate that a two-way operator, function, or method,
/// should run in the *forward* direction.
/// `Inv`: Indicate that a two-way operator, function, or method,
/// should run in the *inverse* direction.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    Fwd,
    Inv,
}
