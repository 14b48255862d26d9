use crate::constants::*;
use crate::models::body::BodyProperties;

/// Earth, drawn as a sphere with the WGS84 equatorial radius.
pub struct Earth;

impl Earth {
    pub const RADIUS: f64 = WGS84_A; // meters
}

impl BodyProperties for Earth {
    fn name(&self) -> &str {
        "Earth"
    }

    fn radius(&self) -> f64 {
        Self::RADIUS
    }

    fn mesh_steps(&self) -> usize {
        EARTH_MESH_STEPS
    }

    fn mesh_stride(&self) -> usize {
        EARTH_MESH_STRIDE
    }
}

/// A body of roughly 1200 km radius, rendered with a finer mesh.
pub struct SmallBody;

impl SmallBody {
    pub const RADIUS: f64 = SMALL_BODY_RADIUS; // meters
}

impl BodyProperties for SmallBody {
    fn name(&self) -> &str {
        "small body"
    }

    fn radius(&self) -> f64 {
        Self::RADIUS
    }

    fn mesh_steps(&self) -> usize {
        SMALL_BODY_MESH_STEPS
    }

    fn mesh_stride(&self) -> usize {
        SMALL_BODY_MESH_STRIDE
    }
}

/// A preset whose radius was overridden by the caller. Mesh settings are
/// inherited from the preset it was derived from.
pub struct CustomBody {
    pub radius: f64,
    pub mesh_steps: usize,
    pub mesh_stride: usize,
}

impl CustomBody {
    pub fn from_preset<T: BodyProperties>(preset: &T, radius: f64) -> Self {
        CustomBody {
            radius,
            mesh_steps: preset.mesh_steps(),
            mesh_stride: preset.mesh_stride(),
        }
    }
}

impl BodyProperties for CustomBody {
    fn name(&self) -> &str {
        "custom body"
    }

    fn radius(&self) -> f64 {
        self.radius
    }

    fn mesh_steps(&self) -> usize {
        self.mesh_steps
    }

    fn mesh_stride(&self) -> usize {
        self.mesh_stride
    }
}
