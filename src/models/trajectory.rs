use crate::errors::{Result, SceneErrors};
use nalgebra as na;

/// Ordered position samples in a body-centered Cartesian frame (meters).
#[derive(Debug, Clone)]
pub struct Trajectory {
    pub label: String,
    pub points: Vec<na::Vector3<f64>>,
    // Optional per-point scalar, e.g. velocity
    pub scalars: Option<Vec<f64>>,
}

impl Trajectory {
    pub fn new(label: &str, points: Vec<na::Vector3<f64>>) -> Self {
        Trajectory {
            label: label.to_string(),
            points,
            scalars: None,
        }
    }

    /// Attaches a scalar per point. Lengths must match.
    pub fn with_scalars(mut self, scalars: Vec<f64>) -> Result<Self> {
        if scalars.len() != self.points.len() {
            return Err(SceneErrors::InvalidParameter(format!(
                "trajectory '{}' has {} points but {} scalars",
                self.label,
                self.points.len(),
                scalars.len()
            )));
        }
        self.scalars = Some(scalars);
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest absolute value of each axis over all points.
    pub fn max_abs_per_axis(&self) -> na::Vector3<f64> {
        self.points
            .iter()
            .fold(na::Vector3::zeros(), |acc, p| acc.sup(&p.abs()))
    }

    pub fn scalar_range(&self) -> Option<(f64, f64)> {
        let scalars = self.scalars.as_ref()?;
        scalars.iter().fold(None, |range, &s| match range {
            None => Some((s, s)),
            Some((lo, hi)) => Some((lo.min(s), hi.max(s))),
        })
    }
}

/// Everything loaded from one sample table.
#[derive(Debug, Clone)]
pub struct TrajectorySet {
    pub times: Vec<f64>,
    pub primary: Trajectory,
    pub secondary: Option<Trajectory>,
    pub latitudes: Option<Vec<f64>>,
    pub longitudes: Option<Vec<f64>>,
    pub altitudes: Option<Vec<f64>>,
}

impl TrajectorySet {
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Time covered by the samples, from first to last row.
    pub fn time_span(&self) -> hifitime::Duration {
        match (self.times.first(), self.times.last()) {
            (Some(first), Some(last)) => hifitime::Duration::from_seconds(last - first),
            _ => hifitime::Duration::ZERO,
        }
    }

    /// The trajectories to draw, primary first.
    pub fn trajectories(&self, include_secondary: bool) -> Vec<&Trajectory> {
        let mut out = vec![&self.primary];
        if include_secondary {
            if let Some(secondary) = &self.secondary {
                out.push(secondary);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn max_abs_per_axis_uses_magnitudes() {
        let t = Trajectory::new(
            "t",
            vec![
                na::Vector3::new(-5.0, 1.0, 0.5),
                na::Vector3::new(2.0, -3.0, -7.0),
            ],
        );
        assert_abs_diff_eq!(t.max_abs_per_axis(), na::Vector3::new(5.0, 3.0, 7.0));
    }

    #[test]
    fn scalar_range_spans_all_values() {
        let t = Trajectory::new("t", vec![na::Vector3::zeros(); 3])
            .with_scalars(vec![7.5, 7.1, 7.9])
            .unwrap();
        assert_eq!(t.scalar_range(), Some((7.1, 7.9)));
        assert_eq!(Trajectory::new("u", vec![]).scalar_range(), None);
    }

    #[test]
    fn scalars_must_match_point_count() {
        let t = Trajectory::new("t", vec![na::Vector3::zeros(); 3]);
        let err = t.with_scalars(vec![7.5, 7.1]).unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn time_span_covers_first_to_last() {
        let set = TrajectorySet {
            times: vec![10.0, 20.0, 70.0],
            primary: Trajectory::new("trajectory", vec![na::Vector3::zeros(); 3]),
            secondary: None,
            latitudes: None,
            longitudes: None,
            altitudes: None,
        };
        assert_abs_diff_eq!(set.time_span().to_seconds(), 60.0, epsilon = 1e-9);
        assert_eq!(set.trajectories(true).len(), 1);
    }
}
