pub mod id;
pub mod model;
pub mod scenario;
pub mod sim;

pub use id::IdGenerator;
pub use model::{
    BodyId, EnvironmentalObject, Influence, MotionOutcome, ObjectId, ObjectSelector, PickedObject,
    Position, TurtleBody, World,
};
