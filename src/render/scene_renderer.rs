use crate::config::render::RenderConfig;
use crate::errors::Result;
use crate::geometry::scene_bounds::SceneBounds;
use crate::geometry::sphere_mesh::SphereMesh;
use crate::models::trajectory::Trajectory;
use crate::render::projection::{OrthographicView, ScreenPoint};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut, draw_polygon_mut};
use imageproc::point::Point;
use nalgebra as na;
use std::fs;
use std::path::Path;

/// Something drawable, tagged with its distance towards the viewer.
enum Primitive {
    Face {
        corners: [ScreenPoint; 4],
        depth: f64,
    },
    Segment {
        from: ScreenPoint,
        to: ScreenPoint,
        color: Rgb<u8>,
        depth: f64,
    },
    Dot {
        at: ScreenPoint,
        color: Rgb<u8>,
    },
}

impl Primitive {
    fn depth(&self) -> f64 {
        match self {
            Primitive::Face { depth, .. } | Primitive::Segment { depth, .. } => *depth,
            Primitive::Dot { at, .. } => at.depth,
        }
    }
}

/// Draws a body sphere and trajectories into an RGB image.
pub struct SceneRenderer {
    config: RenderConfig,
}

impl SceneRenderer {
    pub fn new(config: RenderConfig) -> Self {
        SceneRenderer { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Renders the scene with every axis limited to `bounds`.
    ///
    /// Faces and trajectory segments are depth sorted and painted back to
    /// front, so the sphere hides the parts of an orbit behind it.
    pub fn render(
        &self,
        mesh: &SphereMesh,
        trajectories: &[&Trajectory],
        bounds: &SceneBounds,
    ) -> Result<RgbImage> {
        let cfg = &self.config;
        let view = OrthographicView::new(
            cfg.azimuth_deg,
            cfg.elevation_deg,
            bounds,
            cfg.width,
            cfg.height,
            cfg.margin,
        )?;

        let mut canvas = RgbImage::from_pixel(cfg.width, cfg.height, cfg.background);
        self.draw_axes_box(&mut canvas, &view, bounds);

        let mut primitives = Vec::new();
        for face in mesh.faces(cfg.row_stride, cfg.col_stride)? {
            primitives.push(Primitive::Face {
                corners: face.corners.map(|c| view.project(&c)),
                depth: view.depth(&face.centroid()),
            });
        }
        for (i, trajectory) in trajectories.iter().enumerate() {
            let color = cfg.trajectory_color(i);
            match trajectory.points.as_slice() {
                [] => {}
                [single] => primitives.push(Primitive::Dot {
                    at: view.project(single),
                    color,
                }),
                points => {
                    for pair in points.windows(2) {
                        primitives.push(Primitive::Segment {
                            from: view.project(&pair[0]),
                            to: view.project(&pair[1]),
                            color,
                            depth: view.depth(&((pair[0] + pair[1]) / 2.0)),
                        });
                    }
                }
            }
        }

        primitives.sort_by(|a, b| a.depth().total_cmp(&b.depth()));
        log::debug!("painting {} primitives", primitives.len());

        for primitive in &primitives {
            match primitive {
                Primitive::Face { corners, .. } => self.draw_face(&mut canvas, corners),
                Primitive::Segment { from, to, color, .. } => {
                    draw_line_segment_mut(&mut canvas, (from.x, from.y), (to.x, to.y), *color)
                }
                Primitive::Dot { at, color } => draw_filled_circle_mut(
                    &mut canvas,
                    (at.x.round() as i32, at.y.round() as i32),
                    2,
                    *color,
                ),
            }
        }

        Ok(canvas)
    }

    /// Renders and writes the image, creating parent directories as needed.
    /// The format follows the file extension.
    pub fn render_to_file<P: AsRef<Path>>(
        &self,
        mesh: &SphereMesh,
        trajectories: &[&Trajectory],
        bounds: &SceneBounds,
        path: P,
    ) -> Result<()> {
        let path = path.as_ref();
        let canvas = self.render(mesh, trajectories, bounds)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        canvas.save(path)?;
        log::info!("Wrote {}x{} render to {:?}", canvas.width(), canvas.height(), path);
        Ok(())
    }

    fn draw_axes_box(&self, canvas: &mut RgbImage, view: &OrthographicView, bounds: &SceneBounds) {
        let (lo, hi) = bounds.axis_limits();
        let corner = |i: usize| {
            na::Vector3::new(
                if i & 1 == 0 { lo } else { hi },
                if i & 2 == 0 { lo } else { hi },
                if i & 4 == 0 { lo } else { hi },
            )
        };
        // Corners differing in exactly one bit share an edge
        for a in 0..8usize {
            for bit in [1usize, 2, 4] {
                let b = a | bit;
                if a == b {
                    continue;
                }
                let (pa, pb) = (view.project(&corner(a)), view.project(&corner(b)));
                draw_line_segment_mut(canvas, (pa.x, pa.y), (pb.x, pb.y), self.config.axes_color);
            }
        }
    }

    fn draw_face(&self, canvas: &mut RgbImage, corners: &[ScreenPoint; 4]) {
        let mut poly: Vec<Point<i32>> = Vec::with_capacity(4);
        for c in corners {
            let p = Point::new(c.x.round() as i32, c.y.round() as i32);
            if poly.last() != Some(&p) {
                poly.push(p);
            }
        }
        // Pole faces collapse to triangles or less once rounded to pixels
        while poly.len() > 1 && poly.first() == poly.last() {
            poly.pop();
        }
        if poly.len() >= 3 {
            draw_polygon_mut(canvas, &poly, self.config.sphere_fill);
        }

        for i in 0..corners.len() {
            let (a, b) = (corners[i], corners[(i + 1) % corners.len()]);
            draw_line_segment_mut(canvas, (a.x, a.y), (b.x, b.y), self.config.sphere_edge);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::scene_bounds::SceneBoundsCalculator;
    use crate::geometry::sphere_mesh::SphereMeshBuilder;

    fn circular_orbit(radius: f64, samples: usize) -> Trajectory {
        let points = (0..=samples)
            .map(|i| {
                let theta = 2.0 * std::f64::consts::PI * i as f64 / samples as f64;
                na::Vector3::new(radius * theta.cos(), radius * theta.sin(), 0.0)
            })
            .collect();
        Trajectory::new("orbit", points)
    }

    fn small_config() -> RenderConfig {
        RenderConfig {
            width: 200,
            height: 160,
            ..RenderConfig::default()
        }
    }

    fn count_pixels(image: &RgbImage, color: Rgb<u8>) -> usize {
        image.pixels().filter(|&&p| p == color).count()
    }

    #[test]
    fn renders_sphere_and_orbit() {
        let config = small_config();
        let red = config.trajectory_color(0);
        let edge = config.sphere_edge;
        let renderer = SceneRenderer::new(config);

        let mesh = SphereMeshBuilder::build(6378137.0, 50, 50).unwrap();
        let orbit = circular_orbit(6778137.0, 120);
        let bounds = SceneBoundsCalculator::compute([&orbit]).unwrap().enclose_sphere(mesh.radius);

        let image = renderer.render(&mesh, &[&orbit], &bounds).unwrap();
        assert_eq!(image.dimensions(), (200, 160));
        assert!(count_pixels(&image, red) > 0);
        assert!(count_pixels(&image, edge) > 0);
    }

    #[test]
    fn trajectories_get_distinct_colors() {
        let config = small_config();
        let (red, blue) = (config.trajectory_color(0), config.trajectory_color(1));
        let renderer = SceneRenderer::new(config);

        let mesh = SphereMeshBuilder::build(1.0, 10, 10).unwrap();
        let near = circular_orbit(2.0, 60);
        let far = Trajectory::new(
            "far",
            near.points.iter().map(|p| na::Vector3::new(p.x * 2.0, p.y * 2.0, 1.0)).collect(),
        );
        let bounds = SceneBoundsCalculator::compute([&near, &far]).unwrap();

        let image = renderer.render(&mesh, &[&near, &far], &bounds).unwrap();
        assert!(count_pixels(&image, red) > 0);
        assert!(count_pixels(&image, blue) > 0);
    }

    #[test]
    fn single_sample_is_drawn_as_dot() {
        let config = small_config();
        let red = config.trajectory_color(0);
        let renderer = SceneRenderer::new(config);

        let mesh = SphereMeshBuilder::build(1.0, 8, 8).unwrap();
        let lone = Trajectory::new("lone", vec![na::Vector3::new(0.0, 0.0, 3.0)]);
        let bounds = SceneBoundsCalculator::compute([&lone]).unwrap();

        let image = renderer.render(&mesh, &[&lone], &bounds).unwrap();
        assert!(count_pixels(&image, red) > 0);
    }

    #[test]
    fn zero_stride_fails_the_render() {
        let renderer = SceneRenderer::new(RenderConfig {
            row_stride: 0,
            ..small_config()
        });
        let mesh = SphereMeshBuilder::build(1.0, 8, 8).unwrap();
        let err = renderer
            .render(&mesh, &[], &SceneBounds { extent: 1.0 })
            .unwrap_err();
        assert!(err.is_invalid_parameter());
    }
}
