use super::*;

/// The dispatch slots of an operator, i.e. the functions doing the actual
/// transformation work
#[derive(Debug, Default)]
pub struct OpDescriptor {
    pub inverted: bool,
    pub fwd: InnerOp,
    pub inv: InnerOp,
}

impl OpDescriptor {
    pub fn new(fwd: InnerOp, inv: InnerOp, inverted: bool) -> OpDescriptor {
        OpDescriptor { inverted, fwd, inv }
    }
}
