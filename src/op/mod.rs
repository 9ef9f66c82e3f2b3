use crate::authoring::*;

mod inner_op;
mod op_descriptor;
mod parameters;

pub use inner_op::InnerOp;
pub use op_descriptor::OpDescriptor;
pub use parameters::Parameters;

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone)]
pub struct OpHandle(uuid::Uuid);
impl OpHandle {
    pub fn new() -> Self {
        OpHandle(uuid::Uuid::new_v4())
    }
}
impl Default for OpHandle {
    fn default() -> Self {
        OpHandle(uuid::Uuid::new_v4())
    }
}

/// The defining parameters, the projection state, and the dispatch
/// slots of an operator
#[derive(Debug)]
pub struct Op {
    pub descriptor: OpDescriptor,
    pub params: Parameters,
    pub laea: Laea,
    pub id: OpHandle,
}

impl Op {
    /// Instantiate the projection, and select its spherical or
    /// ellipsoidal variant
    pub fn new(params: &Parameters) -> Result<Op, Error> {
        params.validate()?;
        let laea = Laea::new(params.lat_0, &params.ellps)?;

        let (fwd, inv) = if laea.ellipsoidal().is_some() {
            (
                InnerOp(inner_op::fwd_ellipsoidal),
                InnerOp(inner_op::inv_ellipsoidal),
            )
        } else {
            (
                InnerOp(inner_op::fwd_spherical),
                InnerOp(inner_op::inv_spherical),
            )
        };
        let descriptor = OpDescriptor::new(fwd, inv, params.inverted);

        Ok(Op {
            descriptor,
            params: params.clone(),
            laea,
            id: OpHandle::new(),
        })
    }

    // operate fwd/inv, taking operator inversion into account.
    pub fn apply(&self, operands: &mut dyn CoordinateSet, direction: Direction) -> usize {
        let forward = direction == Direction::Fwd;
        // Short form of (inverted && !forward) || (forward && !inverted)
        if self.descriptor.inverted != forward {
            return self.descriptor.fwd.0(self, operands);
        }
        self.descriptor.inv.0(self, operands)
    }

    /// Release the projection state, and disconnect the dispatch slots.
    /// Idempotent: Repeated calls do nothing
    pub fn teardown(&mut self) {
        self.laea.teardown();
        self.descriptor.fwd = InnerOp::default();
        self.descriptor.inv = InnerOp::default();
    }
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    // ETRS89-LAEA, EPSG:3035
    fn etrs_laea() -> Parameters {
        Parameters::new()
            .lat_0(52.)
            .lon_0(10.)
            .x_0(4_321_000.)
            .y_0(3_210_000.)
    }

    #[test]
    fn apply() -> Result<(), Error> {
        let op = Op::new(&etrs_laea())?;
        assert_eq!(op.laea.mode(), Mode::Oblique);

        let geo = [Coor2D::geo(50., 5.)];
        let mut operands = geo;

        // Forward
        assert_eq!(op.apply(&mut operands, Fwd), 1);
        assert_float_eq!(
            operands[0].0,
            [3_962_799.450_955_067_8, 2_999_718.853_159_564],
            abs_all <= 1e-6
        );

        // Inverse + roundtrip
        assert_eq!(op.apply(&mut operands, Inv), 1);
        assert_float_eq!(operands[0].0, geo[0].0, abs_all <= 1e-12);
        Ok(())
    }

    #[test]
    fn inverted() -> Result<(), Error> {
        let op = Op::new(&etrs_laea().inv())?;
        let mut operands = [Coor2D::raw(4_321_000., 3_210_000.)];
        assert_eq!(op.apply(&mut operands, Fwd), 1);
        assert_float_eq!(operands[0].0, Coor2D::geo(52., 10.).0, abs_all <= 1e-12);
        assert_eq!(op.apply(&mut operands, Inv), 1);
        assert_float_eq!(operands[0].0, [4_321_000., 3_210_000.], abs_all <= 1e-6);
        Ok(())
    }

    #[test]
    fn variant_selection() -> Result<(), Error> {
        let sphere = Op::new(&Parameters::new().ellps(Ellipsoid::named("sphere")?))?;
        assert!(sphere.laea.ellipsoidal().is_none());
        let ellps = Op::new(&Parameters::new())?;
        assert!(ellps.laea.ellipsoidal().is_some());

        // The same point on the equator, 90° east of the center,
        // is at the rim of the authalic circle in both cases
        let mut operands = [Coor2D::geo(0., 90.)];
        assert_eq!(sphere.apply(&mut operands, Fwd), 1);
        assert_float_eq!(operands[0].0, [6_370_997. * 2_f64.sqrt(), 0.], abs_all <= 1e-6);
        let mut operands = [Coor2D::geo(0., 90.)];
        assert_eq!(ellps.apply(&mut operands, Fwd), 1);
        assert_float_eq!(operands[0].0, [6_378_137. * 2_f64.sqrt(), 0.], abs_all <= 1e-6);

        assert!(matches!(
            Op::new(&Parameters::new().lat_0(100.)),
            Err(Error::InvalidParameter(_, _))
        ));
        Ok(())
    }

    #[test]
    fn failures_are_stomped() -> Result<(), Error> {
        let op = Op::new(&Parameters::new().lat_0(90.))?;
        let mut operands = [Coor2D::geo(55., 12.), Coor2D::geo(-90., 0.)];
        assert_eq!(op.apply(&mut operands, Fwd), 1);
        assert!(operands[0].is_finite());
        assert!(operands[1][0].is_nan() && operands[1][1].is_nan());
        Ok(())
    }

    #[test]
    fn teardown() -> Result<(), Error> {
        let mut op = Op::new(&etrs_laea())?;
        op.teardown();
        op.teardown();
        assert!(op.laea.ellipsoidal().is_none());

        // The slots are disconnected, leaving the operands untouched
        let mut operands = [Coor2D::geo(50., 5.)];
        assert_eq!(op.apply(&mut operands, Fwd), 0);
        assert_eq!(operands[0], Coor2D::geo(50., 5.));
        assert_eq!(op.apply(&mut operands, Inv), 0);
        Ok(())
    }
}
