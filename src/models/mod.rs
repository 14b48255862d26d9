pub mod body;
pub mod trajectory;

pub use body::BodyProperties;
pub use trajectory::{Trajectory, TrajectorySet};
