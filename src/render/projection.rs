use crate::errors::{Result, SceneErrors};
use crate::geometry::scene_bounds::SceneBounds;
use nalgebra as na;

/// Orthographic camera looking at the origin from a given azimuth and
/// elevation, scaled so the scene cube fits the canvas with equal aspect on
/// all three axes.
#[derive(Debug, Clone)]
pub struct OrthographicView {
    // Rows: screen right, screen up, towards the viewer
    basis: na::Matrix3<f64>,
    scale: f64,
    center: na::Vector2<f64>,
}

/// A point in pixel coordinates plus its distance towards the viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
    pub depth: f64,
}

impl OrthographicView {
    pub fn new(
        azimuth_deg: f64,
        elevation_deg: f64,
        bounds: &SceneBounds,
        width: u32,
        height: u32,
        margin: f64,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(SceneErrors::InvalidParameter(format!(
                "canvas must not be empty, got {}x{}",
                width, height
            )));
        }
        if !bounds.extent.is_finite() || bounds.extent <= 0.0 {
            return Err(SceneErrors::InvalidParameter(format!(
                "scene extent must be positive, got {}",
                bounds.extent
            )));
        }
        if !(0.0..0.5).contains(&margin) {
            return Err(SceneErrors::InvalidParameter(format!(
                "margin must be in [0, 0.5), got {}",
                margin
            )));
        }

        let (az, el) = (azimuth_deg.to_radians(), elevation_deg.to_radians());
        let right = na::Vector3::new(-az.sin(), az.cos(), 0.0);
        let up = na::Vector3::new(-el.sin() * az.cos(), -el.sin() * az.sin(), el.cos());
        let toward_viewer = na::Vector3::new(el.cos() * az.cos(), el.cos() * az.sin(), el.sin());
        let basis = na::Matrix3::from_rows(&[right.transpose(), up.transpose(), toward_viewer.transpose()]);

        // The cube's corners lie at most extent * sqrt(3) from the origin in any projection
        let half_canvas = f64::from(width.min(height)) / 2.0;
        let scale = half_canvas * (1.0 - 2.0 * margin) / (bounds.extent * 3.0_f64.sqrt());
        let center = na::Vector2::new(f64::from(width) / 2.0, f64::from(height) / 2.0);

        Ok(OrthographicView { basis, scale, center })
    }

    pub fn project(&self, p: &na::Vector3<f64>) -> ScreenPoint {
        let v = self.basis * p;
        ScreenPoint {
            x: (self.center.x + v.x * self.scale) as f32,
            // Image rows grow downwards
            y: (self.center.y - v.y * self.scale) as f32,
            depth: v.z,
        }
    }

    pub fn depth(&self, p: &na::Vector3<f64>) -> f64 {
        self.basis.row(2).transpose().dot(p)
    }
}
