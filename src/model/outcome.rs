use serde::{Deserialize, Serialize};

use super::object::EnvironmentalObject;
use super::position::Position;

/// Result of one motion influence, produced whether or not the body moved.
///
/// `NoMotion` signals that no physical movement occurred this tick — the
/// resolved displacement was zero before any grid call. A move rejected by
/// occupancy still reports `Moved` with the old position and zero speed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionOutcome {
    Moved {
        position: Position,
        /// Heading after the angular delta, in radians, unnormalized.
        heading: f32,
        /// Cells per second over the last step; never negative.
        speed: f32,
    },
    NoMotion {
        heading: f32,
    },
}

impl MotionOutcome {
    pub fn heading(&self) -> f32 {
        match self {
            MotionOutcome::Moved { heading, .. } | MotionOutcome::NoMotion { heading } => *heading,
        }
    }

    pub fn speed(&self) -> f32 {
        match self {
            MotionOutcome::Moved { speed, .. } => *speed,
            MotionOutcome::NoMotion { .. } => 0.0,
        }
    }

    pub fn moved(&self) -> bool {
        matches!(self, MotionOutcome::Moved { speed, .. } if *speed > 0.0)
    }
}

/// Record of an object actually removed from the grid by a pick-up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickedObject {
    pub object: EnvironmentalObject,
}
