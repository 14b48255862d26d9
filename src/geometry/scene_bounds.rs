use crate::errors::{Result, SceneErrors};
use crate::models::trajectory::Trajectory;

/// Half-width of the origin-centered cube that holds the whole scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneBounds {
    pub extent: f64,
}

impl SceneBounds {
    /// Bounds grown, if needed, to hold a sphere of `radius` at the origin.
    pub fn enclose_sphere(self, radius: f64) -> SceneBounds {
        SceneBounds {
            extent: self.extent.max(radius),
        }
    }

    /// Limits to apply to each of the three axes.
    pub fn axis_limits(&self) -> (f64, f64) {
        (-self.extent, self.extent)
    }

    pub fn contains(&self, p: &nalgebra::Vector3<f64>) -> bool {
        p.amax() <= self.extent
    }
}

pub struct SceneBoundsCalculator;

impl SceneBoundsCalculator {
    /// Computes one shared extent for all trajectories so that none of them is
    /// clipped by the cubic view.
    pub fn compute<'a, I>(trajectories: I) -> Result<SceneBounds>
    where
        I: IntoIterator<Item = &'a Trajectory>,
    {
        let mut extent: Option<f64> = None;
        let mut supplied = 0;

        for trajectory in trajectories {
            supplied += 1;
            if trajectory.is_empty() {
                log::warn!("trajectory '{}' has no points, ignoring it for bounds", trajectory.label);
                continue;
            }
            let axis_max = trajectory.max_abs_per_axis().max();
            extent = Some(extent.map_or(axis_max, |e| e.max(axis_max)));
        }

        match extent {
            Some(extent) => Ok(SceneBounds { extent }),
            None if supplied == 0 => Err(SceneErrors::InvalidParameter(
                "no trajectories supplied, scene bounds are undefined".to_string(),
            )),
            None => Err(SceneErrors::InvalidParameter(format!(
                "all {} supplied trajectories are empty, scene bounds are undefined",
                supplied
            ))),
        }
    }
}
