use crate::prelude::*;
pub mod coor2d;
pub mod set;
pub mod tuple;

/// Methods for changing the coordinate representation of angles.
/// The methods operate on the first two dimensions only.
pub trait AngularUnits {
    /// Transform the first two elements of a coordinate tuple from degrees to radians
    fn to_radians(self) -> Self;

    /// Transform the first two elements of a coordinate tuple from radians to degrees
    fn to_degrees(self) -> Self;

    /// Transform the internal lon/lat-in-radians to lat/lon-in-degrees
    fn to_geo(self) -> Self;
}

impl AngularUnits for Coor2D {
    fn to_radians(self) -> Self {
        Coor2D([self[0].to_radians(), self[1].to_radians()])
    }

    fn to_degrees(self) -> Self {
        Coor2D([self[0].to_degrees(), self[1].to_degrees()])
    }

    fn to_geo(self) -> Self {
        Coor2D([self[1].to_degrees(), self[0].to_degrees()])
    }
}

// ----- T E S T S ---------------------------------------------------
