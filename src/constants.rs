pub const WGS84_A: f64 = 6378137.0; // Semi-major axis [m]
pub const SMALL_BODY_RADIUS: f64 = 1_200_000.0; // Radius of the small-body preset (m)

// Sphere mesh resolution
pub const EARTH_MESH_STEPS: usize = 50;
pub const SMALL_BODY_MESH_STEPS: usize = 180;
pub const EARTH_MESH_STRIDE: usize = 4;
pub const SMALL_BODY_MESH_STRIDE: usize = 10;

// View
pub const DEFAULT_AZIMUTH_DEG: f64 = -60.0;
pub const DEFAULT_ELEVATION_DEG: f64 = 30.0;
pub const AXIS_MARGIN: f64 = 0.05; // Fraction of the canvas left free around the scene cube

// Canvas
pub const DEFAULT_WIDTH: u32 = 1024;
pub const DEFAULT_HEIGHT: u32 = 1024;

// Math
pub const PI: f64 = std::f64::consts::PI;
