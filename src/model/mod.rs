pub mod body;
pub mod influence;
pub mod object;
pub mod outcome;
pub mod position;
pub mod world;

pub use body::{BodyId, TurtleBody};
pub use influence::Influence;
pub use object::{EnvironmentalObject, ObjectId, ObjectSelector};
pub use outcome::{MotionOutcome, PickedObject};
pub use position::Position;
pub use world::World;
