use super::*;

// ----- T H E   M I N I M A L   P R O V I D E R ---------------------------------------

/// A minimalistic context provider, keeping the instantiated operators
/// in a map, indexed by their handles.
#[derive(Debug, Default)]
pub struct Minimal {
    /// Instantiations of operators
    operators: BTreeMap<OpHandle, Op>,
}

fn unknown(op: OpHandle) -> Error {
    Error::NotFound(format!("{op:?}"), String::from(": Minimal: Unknown operator id"))
}

impl Context for Minimal {
    fn new() -> Minimal {
        Minimal::default()
    }

    fn op(&mut self, params: &Parameters) -> Result<OpHandle, Error> {
        let op = Op::new(params)?;
        let id = op.id;
        self.operators.insert(id, op);
        Ok(id)
    }

    fn apply(
        &self,
        op: OpHandle,
        direction: Direction,
        operands: &mut dyn CoordinateSet,
    ) -> Result<usize, Error> {
        let op = self.operators.get(&op).ok_or_else(|| unknown(op))?;
        Ok(op.apply(operands, direction))
    }

    fn params(&self, op: OpHandle) -> Result<&Parameters, Error> {
        let op = self.operators.get(&op).ok_or_else(|| unknown(op))?;
        Ok(&op.params)
    }

    fn teardown(&mut self, op: OpHandle) -> Result<(), Error> {
        let op = self.operators.get_mut(&op).ok_or_else(|| unknown(op))?;
        op.teardown();
        Ok(())
    }
}

impl Minimal {
    /// The partial derivatives of the forward operation at `at`, a (λ, 𝜙)
    /// pair in radians. Mostly based on the PROJ function
    /// [pj_deriv](https://github.com/OSGeo/PROJ/blob/master/src/deriv.cpp)
    pub fn jacobian(&self, op: OpHandle, at: Coor2D) -> Result<Jacobian, Error> {
        let op = self.operators.get(&op).ok_or_else(|| unknown(op))?;
        let forward = |coord: Coor2D| {
            let mut operands = [coord];
            if op.apply(&mut operands, Fwd) == 1 {
                return Ok(operands[0]);
            }
            Err(Error::OutsideDomain)
        };
        Jacobian::new(forward, at)
    }
}

// ----- T E S T S ------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn basic() -> Result<(), Error> {
        let mut ctx = Minimal::new();
        let params = Parameters::new().lat_0(52.).lon_0(10.);
        let op = ctx.op(&params)?;
        assert_eq!(ctx.params(op)?, &params);

        let mut data = [Coor2D::geo(55., 12.), Coor2D::geo(59., 18.)];
        let copy = data;
        assert_eq!(ctx.apply(op, Fwd, &mut data)?, 2);
        assert_eq!(ctx.apply(op, Inv, &mut data)?, 2);
        for (result, expected) in data.iter().zip(copy.iter()) {
            assert_float_eq!(result.0, expected.0, abs_all <= 1e-12);
        }

        // Unknown operators
        let stranger = OpHandle::new();
        assert!(matches!(
            ctx.apply(stranger, Fwd, &mut data),
            Err(Error::NotFound(_, _))
        ));
        assert!(ctx.params(stranger).is_err());
        assert!(ctx.teardown(stranger).is_err());
        Ok(())
    }

    #[test]
    fn teardown() -> Result<(), Error> {
        let mut ctx = Minimal::new();
        let op = ctx.op(&Parameters::new().lat_0(90.))?;
        ctx.teardown(op)?;
        ctx.teardown(op)?;

        // Still registered, but inactive
        let mut data = [Coor2D::geo(55., 12.)];
        assert_eq!(ctx.apply(op, Fwd, &mut data)?, 0);
        assert_eq!(data[0], Coor2D::geo(55., 12.));
        assert!(ctx.params(op).is_ok());
        Ok(())
    }

    #[test]
    fn jacobian() -> Result<(), Error> {
        let mut ctx = Minimal::new();
        let ellps = Ellipsoid::named("GRS80")?;
        let op = ctx.op(&Parameters::new().lat_0(52.).lon_0(10.).k_0(0.5))?;

        // Equal area: The areal scale equals k_0² everywhere
        for (lat, lon) in [(52., 10.), (55., 12.), (30., -20.), (70., 60.)] {
            let at = Coor2D::geo(lat, lon);
            let jac = ctx.jacobian(op, at)?;
            assert!((jac.areal_scale(&ellps, at[1]) - 0.25).abs() < 1e-7);
        }

        // At the center, the projection is locally true to scale, with the
        // meridian pointing north
        let at = Coor2D::geo(52., 10.);
        let jac = ctx.jacobian(op, at)?;
        let m = ellps.meridian_radius_of_curvature(at[1]);
        assert!((jac.y_p / m - 0.5).abs() < 1e-7);
        assert!(jac.x_p.abs() < 1e-3);
        Ok(())
    }
}
