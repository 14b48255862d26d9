use crate::errors::{Result, SceneErrors};
use nalgebra as na;

/// Latitude/longitude grid of points on a sphere centered at the origin.
///
/// Rows are latitude bands from north to south, columns are longitude bands
/// from -180° to 180°. Each coordinate is kept in its own matrix, so
/// `x[(row, col)]`, `y[(row, col)]` and `z[(row, col)]` form one point.
#[derive(Debug, Clone)]
pub struct SphereMesh {
    pub radius: f64,
    pub x: na::DMatrix<f64>,
    pub y: na::DMatrix<f64>,
    pub z: na::DMatrix<f64>,
}

/// A quadrilateral face of the mesh, corners in winding order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshFace {
    pub corners: [na::Vector3<f64>; 4],
}

impl MeshFace {
    pub fn centroid(&self) -> na::Vector3<f64> {
        self.corners.iter().sum::<na::Vector3<f64>>() / 4.0
    }
}

impl SphereMesh {
    pub fn rows(&self) -> usize {
        self.x.nrows()
    }

    pub fn cols(&self) -> usize {
        self.x.ncols()
    }

    pub fn point(&self, row: usize, col: usize) -> na::Vector3<f64> {
        na::Vector3::new(self.x[(row, col)], self.y[(row, col)], self.z[(row, col)])
    }

    /// All points, row by row.
    pub fn points(&self) -> impl Iterator<Item = na::Vector3<f64>> + '_ {
        (0..self.rows()).flat_map(move |row| (0..self.cols()).map(move |col| self.point(row, col)))
    }

    /// Quadrilateral faces between every `row_stride`-th row and every
    /// `col_stride`-th column. The last row and column are always part of the
    /// sampled grid so the surface closes.
    pub fn faces(&self, row_stride: usize, col_stride: usize) -> Result<Vec<MeshFace>> {
        if row_stride == 0 || col_stride == 0 {
            return Err(SceneErrors::InvalidParameter(format!(
                "mesh strides must be positive, got {}x{}",
                row_stride, col_stride
            )));
        }

        let rows = stride_indices(self.rows(), row_stride);
        let cols = stride_indices(self.cols(), col_stride);

        let mut faces = Vec::with_capacity(rows.len().saturating_sub(1) * cols.len().saturating_sub(1));
        for r in rows.windows(2) {
            for c in cols.windows(2) {
                faces.push(MeshFace {
                    corners: [
                        self.point(r[0], c[0]),
                        self.point(r[0], c[1]),
                        self.point(r[1], c[1]),
                        self.point(r[1], c[0]),
                    ],
                });
            }
        }
        Ok(faces)
    }
}

/// `0, stride, 2*stride, ...` below `len`, with `len - 1` appended if missed.
fn stride_indices(len: usize, stride: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    let mut indices: Vec<usize> = (0..len).step_by(stride).collect();
    if indices.last() != Some(&(len - 1)) {
        indices.push(len - 1);
    }
    indices
}

/// `steps` evenly spaced values over `[start, end]`, both ends included.
fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    let delta = (end - start) / (steps - 1) as f64;
    (0..steps)
        .map(|i| if i == steps - 1 { end } else { start + delta * i as f64 })
        .collect()
}

pub struct SphereMeshBuilder;

impl SphereMeshBuilder {
    /// Builds a `latitude_steps` x `longitude_steps` grid on the sphere of the
    /// given radius.
    ///
    /// Longitudes span [-180°, 180°] and latitudes span [-90°, 90°], both
    /// inclusive; latitudes are emitted north to south.
    pub fn build(radius: f64, longitude_steps: usize, latitude_steps: usize) -> Result<SphereMesh> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(SceneErrors::InvalidParameter(format!(
                "sphere radius must be positive, got {}",
                radius
            )));
        }
        if longitude_steps < 2 || latitude_steps < 2 {
            return Err(SceneErrors::InvalidParameter(format!(
                "sphere mesh needs at least 2 steps per direction, got {} longitude x {} latitude",
                longitude_steps, latitude_steps
            )));
        }

        let lons: Vec<f64> = linspace(-180.0, 180.0, longitude_steps)
            .into_iter()
            .map(f64::to_radians)
            .collect();
        let lats: Vec<f64> = linspace(-90.0, 90.0, latitude_steps)
            .into_iter()
            .rev()
            .map(f64::to_radians)
            .collect();

        let x = na::DMatrix::from_fn(latitude_steps, longitude_steps, |row, col| {
            radius * lons[col].cos() * lats[row].cos()
        });
        let y = na::DMatrix::from_fn(latitude_steps, longitude_steps, |row, col| {
            radius * lons[col].sin() * lats[row].cos()
        });
        let z = na::DMatrix::from_fn(latitude_steps, longitude_steps, |row, _| {
            radius * lats[row].sin()
        });

        log::debug!(
            "built sphere mesh: radius {} m, {} rows x {} cols",
            radius,
            latitude_steps,
            longitude_steps
        );

        Ok(SphereMesh { radius, x, y, z })
    }
}
