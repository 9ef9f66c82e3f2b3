use crate::authoring::*;
mod minimal;
pub use minimal::Minimal;

// ----- T H E   C O N T E X T   T R A I T ---------------------------------------------

/// The `Context` trait defines the mode of communication between the
/// projection internals and the user: Instantiation, application, and
/// teardown of operators, referred to by their `OpHandle`s.
pub trait Context {
    /// A new, empty context
    fn new() -> Self
    where
        Self: Sized;

    /// Instantiate the projection given by `params`
    fn op(&mut self, params: &Parameters) -> Result<OpHandle, Error>;

    /// Apply operation `op` to `operands`, returning the number of
    /// successfully transformed coordinates
    fn apply(
        &self,
        op: OpHandle,
        direction: Direction,
        operands: &mut dyn CoordinateSet,
    ) -> Result<usize, Error>;

    /// The parameters `op` was instantiated from
    fn params(&self, op: OpHandle) -> Result<&Parameters, Error>;

    /// Release the resources held by `op`. Subsequent applications of
    /// `op` transform nothing. Tearing down an operator twice is harmless
    fn teardown(&mut self, op: OpHandle) -> Result<(), Error>;
}
