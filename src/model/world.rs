use std::collections::BTreeMap;

use crate::id::IdGenerator;
use crate::sim::{
    CellGrid, GridBounds, InfluenceSolver, OccupancyGateway, OutcomeBuffer, SolveContext,
    TimeSource,
};

use super::body::{BodyId, TurtleBody};
use super::influence::Influence;
use super::object::{EnvironmentalObject, ObjectId};
use super::outcome::MotionOutcome;
use super::position::Position;

/// The environment model surrounding the solver: grid storage, body registry,
/// and the per-tick stepping loop.
///
/// The solver itself only borrows these pieces for one tick; `World` is where
/// they live between ticks, and where buffered motion outcomes are folded
/// back into body state.
#[derive(Debug)]
pub struct World {
    bounds: GridBounds,
    wrap: bool,
    pub grid: CellGrid,
    pub bodies: BTreeMap<BodyId, TurtleBody>,
    pub id_gen: IdGenerator,
}

impl World {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            bounds: GridBounds::new(width, height),
            wrap: false,
            grid: CellGrid::new(),
            bodies: BTreeMap::new(),
            id_gen: IdGenerator::new(),
        }
    }

    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    pub fn is_wrapped(&self) -> bool {
        self.wrap
    }

    pub fn set_wrapped(&mut self, wrap: bool) {
        self.wrap = wrap;
    }

    /// Spawn a body on a free in-bounds cell.
    ///
    /// # Panics
    /// Panics if the position is out of bounds or the cell is occupied —
    /// spawning is setup code, not tick resolution.
    pub fn add_body(&mut self, position: Position, heading: f32) -> BodyId {
        assert!(
            self.bounds.contains(position),
            "add_body: {position} is outside the grid"
        );
        let id = self.id_gen.next_body_id();
        let placed = self.grid.put_body(position, id);
        assert!(placed, "add_body: cell {position} is already occupied");
        self.bodies.insert(id, TurtleBody::new(id, position, heading));
        id
    }

    /// Place a plain object on a cell, assigning it a fresh id.
    pub fn add_object(&mut self, position: Position, data: serde_json::Value) -> ObjectId {
        let id = self.id_gen.next_object_id();
        let mut object = EnvironmentalObject::new(id, position);
        object.data = data;
        self.grid.put_object(position, object);
        id
    }

    /// Place a substance-marked object on a cell.
    pub fn add_substance(&mut self, position: Position, name: &str) -> ObjectId {
        let id = self.id_gen.next_object_id();
        let object = EnvironmentalObject::substance(id, position, name);
        self.grid.put_object(position, object);
        id
    }

    pub fn body(&self, id: BodyId) -> Option<&TurtleBody> {
        self.bodies.get(&id)
    }

    /// Resolve one tick's batch of influences.
    ///
    /// The sink is cleared first (outcomes are per-tick), then the solver
    /// runs, then every buffered motion outcome is applied back onto its
    /// body so the next tick observes the new physical state.
    pub fn step(&mut self, influences: Vec<Influence>, sink: &mut OutcomeBuffer, clock: &dyn TimeSource) {
        sink.clear();
        let solver = InfluenceSolver::with_wrap(self.bounds, self.wrap);
        let mut ctx = SolveContext {
            bodies: &self.bodies,
            grid: &mut self.grid,
            sink: &mut *sink,
            clock,
        };
        solver.solve(influences, &mut ctx);

        for (id, outcome) in sink.motions() {
            if let Some(body) = self.bodies.get_mut(&id) {
                match outcome {
                    MotionOutcome::Moved { position, heading, .. } => {
                        body.position = *position;
                        body.heading = *heading;
                    }
                    MotionOutcome::NoMotion { heading } => {
                        body.heading = *heading;
                    }
                }
            }
        }
    }
}
