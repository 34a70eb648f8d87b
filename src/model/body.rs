use serde::{Deserialize, Serialize};

use super::position::Position;

/// Opaque identity of a turtle body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BodyId(pub u64);

/// The physical state of one turtle on the grid.
///
/// The solver reads position and heading and reports updates through the
/// outcome sink; it never owns body lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurtleBody {
    pub id: BodyId,
    pub position: Position,
    /// Heading in radians. Accumulates as angular deltas are applied and is
    /// never normalized into a canonical range; callers that need `[0, 2π)`
    /// normalize on read.
    pub heading: f32,
}

impl TurtleBody {
    pub fn new(id: BodyId, position: Position, heading: f32) -> Self {
        Self {
            id,
            position,
            heading,
        }
    }
}
