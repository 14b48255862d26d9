pub mod scene_bounds;
pub mod sphere_mesh;

pub use scene_bounds::{SceneBounds, SceneBoundsCalculator};
pub use sphere_mesh::{SphereMesh, SphereMeshBuilder};
