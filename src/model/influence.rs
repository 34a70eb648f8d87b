//! Influence types for the per-tick resolution queue.
//!
//! Bodies emit one influence per tick; the `InfluenceSolver` drains the
//! batch in order and reports outcomes through the `OutcomeSink`.

use serde::{Deserialize, Serialize};

use super::body::BodyId;
use super::object::{EnvironmentalObject, ObjectSelector};

/// A one-shot declared action, consumed exactly once within its tick.
///
/// A closed enum: the solver matches exhaustively, so an unknown influence
/// kind is a compile error rather than a runtime check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Influence {
    /// Request to move by a fractional cell displacement and turn.
    Motion {
        emitter: BodyId,
        linear_dx: f32,
        linear_dy: f32,
        /// Added to the emitter's heading, in radians; no normalization.
        angular: f32,
    },
    /// Request to pick up an object from the emitter's own cell.
    PickUp {
        emitter: BodyId,
        target: ObjectSelector,
    },
    /// Drop an object onto the emitter's own cell. Fire-and-forget.
    DropOff {
        emitter: BodyId,
        object: EnvironmentalObject,
    },
    /// Environment-driven despawn: removes the object from its own
    /// recorded position. Carries no emitter.
    RemoveObject { object: EnvironmentalObject },
}

impl Influence {
    /// The emitting body, if this influence kind has one.
    pub fn emitter(&self) -> Option<BodyId> {
        match self {
            Influence::Motion { emitter, .. }
            | Influence::PickUp { emitter, .. }
            | Influence::DropOff { emitter, .. } => Some(*emitter),
            Influence::RemoveObject { .. } => None,
        }
    }
}
