use crate::constants::*;
use image::Rgb;

#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub azimuth_deg: f64,
    pub elevation_deg: f64,
    pub margin: f64,
    pub row_stride: usize,
    pub col_stride: usize,

    // Colors
    pub background: Rgb<u8>,
    pub axes_color: Rgb<u8>,
    pub sphere_fill: Rgb<u8>,
    pub sphere_edge: Rgb<u8>,
    pub trajectory_colors: Vec<Rgb<u8>>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            azimuth_deg: DEFAULT_AZIMUTH_DEG,
            elevation_deg: DEFAULT_ELEVATION_DEG,
            margin: AXIS_MARGIN,
            row_stride: EARTH_MESH_STRIDE,
            col_stride: EARTH_MESH_STRIDE,
            background: Rgb([255, 255, 255]),
            axes_color: Rgb([200, 200, 200]),
            sphere_fill: Rgb([255, 255, 255]),
            sphere_edge: Rgb([60, 60, 60]),
            trajectory_colors: vec![Rgb([220, 20, 20]), Rgb([20, 60, 220])],
        }
    }
}

impl RenderConfig {
    /// Color for the trajectory at `index`, cycling through the palette.
    pub fn trajectory_color(&self, index: usize) -> Rgb<u8> {
        if self.trajectory_colors.is_empty() {
            return Rgb([0, 0, 0]);
        }
        self.trajectory_colors[index % self.trajectory_colors.len()]
    }
}
