use crate::model::{BodyId, ObjectId};

/// Monotonic ID generator shared by bodies and environmental objects.
/// Guarantees globally unique IDs — no body and object ever share an ID.
#[derive(Debug)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn starting_from(start: u64) -> Self {
        Self { next: start }
    }

    pub fn next_body_id(&mut self) -> BodyId {
        BodyId(self.bump())
    }

    pub fn next_object_id(&mut self) -> ObjectId {
        ObjectId(self.bump())
    }

    fn bump(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_never_collide_across_kinds() {
        let mut id_gen = IdGenerator::new();
        let body = id_gen.next_body_id();
        let object = id_gen.next_object_id();
        let body2 = id_gen.next_body_id();
        assert_eq!(body.0, 1);
        assert_eq!(object.0, 2);
        assert_eq!(body2.0, 3);
    }

    #[test]
    fn starting_from() {
        let mut id_gen = IdGenerator::starting_from(100);
        assert_eq!(id_gen.next_body_id().0, 100);
        assert_eq!(id_gen.next_object_id().0, 101);
    }
}
