use std::collections::HashMap;

use crate::model::{BodyId, EnvironmentalObject, ObjectSelector, Position};

use super::gateway::OccupancyGateway;

/// In-memory cell storage: at most one body per cell, objects stacked in
/// placement order.
#[derive(Debug, Default)]
pub struct CellGrid {
    bodies: HashMap<Position, BodyId>,
    objects: HashMap<Position, Vec<EnvironmentalObject>>,
}

impl CellGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn body_at(&self, position: Position) -> Option<BodyId> {
        self.bodies.get(&position).copied()
    }

    pub fn objects_at(&self, position: Position) -> &[EnvironmentalObject] {
        self.objects.get(&position).map_or(&[], Vec::as_slice)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn object_count(&self) -> usize {
        self.objects.values().map(Vec::len).sum()
    }
}

impl OccupancyGateway for CellGrid {
    fn put_body(&mut self, position: Position, body: BodyId) -> bool {
        match self.bodies.entry(position) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(body);
                true
            }
        }
    }

    fn remove_body(&mut self, position: Position, body: BodyId) -> bool {
        if self.bodies.get(&position) == Some(&body) {
            self.bodies.remove(&position);
            true
        } else {
            false
        }
    }

    fn put_object(&mut self, position: Position, mut object: EnvironmentalObject) {
        // Placement rewrites the object's recorded position.
        object.position = position;
        self.objects.entry(position).or_default().push(object);
    }

    fn remove_object(
        &mut self,
        position: Position,
        selector: &ObjectSelector,
    ) -> Option<EnvironmentalObject> {
        let stack = self.objects.get_mut(&position)?;
        let index = stack.iter().position(|o| selector.matches(o))?;
        let removed = stack.remove(index);
        if stack.is_empty() {
            self.objects.remove(&position);
        }
        Some(removed)
    }
}
