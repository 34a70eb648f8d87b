mod bounds;
mod context;
mod gateway;
mod grid;
mod sink;
mod solver;
mod time;

pub use bounds::{BoundaryStatus, GridBounds};
pub use context::SolveContext;
pub use gateway::OccupancyGateway;
pub use grid::CellGrid;
pub use sink::{OutcomeBuffer, OutcomeSink};
pub use solver::InfluenceSolver;
pub use time::{FixedStepClock, StepTimer, TimeSource};
