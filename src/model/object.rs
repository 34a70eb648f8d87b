use serde::{Deserialize, Serialize};

use super::position::Position;

/// Opaque identity of an environmental object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ObjectId(pub u64);

/// A free-standing object on the grid: food, pheromone, obstacle marker.
///
/// The substance marker affects no resolution logic; it exists so downstream
/// perception can classify what was picked up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalObject {
    pub id: ObjectId,
    /// The object's recorded position while free-standing on the grid.
    pub position: Position,
    /// Substance name, if this object is a consumable substance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub substance: Option<String>,
    /// Setting-specific payload (e.g. {"amount": 3.5}); opaque to resolution.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub data: serde_json::Value,
}

impl EnvironmentalObject {
    pub fn new(id: ObjectId, position: Position) -> Self {
        Self {
            id,
            position,
            substance: None,
            data: serde_json::Value::Null,
        }
    }

    pub fn substance(id: ObjectId, position: Position, name: &str) -> Self {
        Self {
            id,
            position,
            substance: Some(name.to_string()),
            data: serde_json::Value::Null,
        }
    }

    pub fn is_substance(&self) -> bool {
        self.substance.is_some()
    }
}

/// What an object removal matches against the contents of a cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectSelector {
    /// The object with exactly this id.
    Exact(ObjectId),
    /// Whichever object was placed on the cell first.
    Any,
}

impl ObjectSelector {
    pub fn matches(&self, object: &EnvironmentalObject) -> bool {
        match self {
            ObjectSelector::Exact(id) => object.id == *id,
            ObjectSelector::Any => true,
        }
    }
}
