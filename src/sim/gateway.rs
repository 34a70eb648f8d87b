use crate::model::{BodyId, EnvironmentalObject, ObjectSelector, Position};

/// The grid's mutation interface, as the solver sees it.
///
/// Each call is a single atomic grid mutation. Ordinary contention — a cell
/// already occupied, an object already gone — is expressed in the return
/// value, never by panicking.
pub trait OccupancyGateway {
    /// Place a body at a cell. Returns `true` if the cell was free and now
    /// holds the body.
    fn put_body(&mut self, position: Position, body: BodyId) -> bool;

    /// Remove a body from a cell. Returns `true` only if that exact body
    /// occupied that cell.
    fn remove_body(&mut self, position: Position, body: BodyId) -> bool;

    /// Place an object at a cell. Always succeeds; objects stack.
    fn put_object(&mut self, position: Position, object: EnvironmentalObject);

    /// Remove and return the first object at the cell matching the selector,
    /// if any.
    fn remove_object(
        &mut self,
        position: Position,
        selector: &ObjectSelector,
    ) -> Option<EnvironmentalObject>;
}
