//! Fluent builder for test worlds.
//!
//! Integration tests describe the starting grid declaratively and get back a
//! ready-to-step [`World`] plus a clock with a known step duration.

use crate::model::{BodyId, ObjectId, Position, World};
use crate::sim::FixedStepClock;

pub struct Scenario {
    world: World,
    step_duration: f32,
}

impl Scenario {
    /// Start a scenario on a `width` x `height` grid, wrap disabled,
    /// 1-second steps.
    pub fn grid(width: i32, height: i32) -> Self {
        Self {
            world: World::new(width, height),
            step_duration: 1.0,
        }
    }

    /// Enable toroidal wrapping.
    pub fn wrapped(mut self) -> Self {
        self.world.set_wrapped(true);
        self
    }

    pub fn step_duration(mut self, seconds: f32) -> Self {
        self.step_duration = seconds;
        self
    }

    /// Spawn a body with heading 0.
    pub fn body_at(&mut self, x: i32, y: i32) -> BodyId {
        self.world.add_body(Position::new(x, y), 0.0)
    }

    pub fn body_with_heading(&mut self, x: i32, y: i32, heading: f32) -> BodyId {
        self.world.add_body(Position::new(x, y), heading)
    }

    /// Place a plain object with no payload.
    pub fn object_at(&mut self, x: i32, y: i32) -> ObjectId {
        self.world
            .add_object(Position::new(x, y), serde_json::Value::Null)
    }

    pub fn substance_at(&mut self, x: i32, y: i32, name: &str) -> ObjectId {
        self.world.add_substance(Position::new(x, y), name)
    }

    pub fn build(self) -> (World, FixedStepClock) {
        (self.world, FixedStepClock::new(self.step_duration))
    }
}
