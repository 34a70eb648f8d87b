use std::collections::BTreeMap;

use crate::model::{BodyId, TurtleBody};

use super::gateway::OccupancyGateway;
use super::sink::OutcomeSink;
use super::time::TimeSource;

/// Everything the solver may touch while resolving one tick's batch.
///
/// All handles are borrowed for the duration of the tick — the solver never
/// owns the grid, the clock, or body lifetimes. Bundled so fields can be
/// added later without changing the `solve` signature.
pub struct SolveContext<'a> {
    /// Read-only view of body physical state; updates flow through the sink.
    pub bodies: &'a BTreeMap<BodyId, TurtleBody>,
    pub grid: &'a mut dyn OccupancyGateway,
    pub sink: &'a mut dyn OutcomeSink,
    pub clock: &'a dyn TimeSource,
}
