use approx::assert_relative_eq;
use kosmoplot::config::body::{Earth, SmallBody};
use kosmoplot::config::render::RenderConfig;
use kosmoplot::constants::*;
use kosmoplot::geometry::{SceneBoundsCalculator, SphereMeshBuilder};
use kosmoplot::input::TrajectoryReader;
use kosmoplot::models::BodyProperties;
use kosmoplot::render::SceneRenderer;
use std::fmt::Write as _;
use std::fs;

// Writes a sample table shaped like the simulator output: an inclined circular
// orbit in the rotating frame plus its inertial counterpart.
fn write_samples(altitude: f64, radius: f64, samples: usize) -> String {
    let r = radius + altitude;
    let inclination = 51.6_f64.to_radians();
    let mut out = String::from("time,x,y,z,ix,iy,iz,lat,lon,alt\n");
    for i in 0..samples {
        let t = i as f64 * 60.0;
        let theta = 2.0 * PI * i as f64 / (samples - 1) as f64;
        let (ix, iy, iz) = (
            r * theta.cos(),
            r * theta.sin() * inclination.cos(),
            r * theta.sin() * inclination.sin(),
        );
        // Rotating frame lags the inertial one
        let spin = -0.3 * theta;
        let (x, y) = (ix * spin.cos() - iy * spin.sin(), ix * spin.sin() + iy * spin.cos());
        let lat = (iz / r).asin().to_degrees();
        let lon = y.atan2(x).to_degrees();
        writeln!(out, "{},{},{},{},{},{},{},{},{},{}", t, x, y, iz, ix, iy, iz, lat, lon, altitude).unwrap();
    }
    out
}

#[test]
fn earth_scene_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = std::env::temp_dir().join("kosmoplot-integration");
    fs::create_dir_all(&output_dir)?;
    let input = output_dir.join("kepler-out.csv");
    fs::write(&input, write_samples(400_000.0, Earth.radius(), 97))?;

    let samples = TrajectoryReader::from_path(&input)?;
    assert_eq!(samples.len(), 97);
    assert!(samples.secondary.is_some());

    let mesh = SphereMeshBuilder::build(Earth.radius(), Earth.mesh_steps(), Earth.mesh_steps())?;
    let trajectories = samples.trajectories(true);
    let bounds = SceneBoundsCalculator::compute(trajectories.iter().copied())?
        .enclose_sphere(mesh.radius);
    // Orbit is circular, so the largest coordinate is the orbit radius
    assert_relative_eq!(bounds.extent, Earth.radius() + 400_000.0, max_relative = 1e-6);

    let output = output_dir.join("trajectory.png");
    let renderer = SceneRenderer::new(RenderConfig {
        width: 320,
        height: 240,
        ..RenderConfig::default()
    });
    renderer.render_to_file(&mesh, &trajectories, &bounds, &output)?;

    let written = image::open(&output)?;
    assert_eq!((written.width(), written.height()), (320, 240));
    Ok(())
}

#[test]
fn small_body_scene_from_reader() -> Result<(), Box<dyn std::error::Error>> {
    let table = write_samples(50_000.0, SmallBody.radius(), 40);
    let samples = TrajectoryReader::from_reader(table.as_bytes())?;

    let mesh = SphereMeshBuilder::build(
        SmallBody.radius(),
        SmallBody.mesh_steps(),
        SmallBody.mesh_steps(),
    )?;
    assert_eq!(mesh.rows() * mesh.cols(), 180 * 180);

    let trajectories = samples.trajectories(false);
    assert_eq!(trajectories.len(), 1);
    let bounds = SceneBoundsCalculator::compute(trajectories.iter().copied())?;
    assert!(bounds.extent <= SmallBody.radius() + 50_000.0 + 1e-6);

    let renderer = SceneRenderer::new(RenderConfig {
        width: 256,
        height: 256,
        row_stride: SmallBody.mesh_stride(),
        col_stride: SmallBody.mesh_stride(),
        ..RenderConfig::default()
    });
    let image = renderer.render(&mesh, &trajectories, &bounds.enclose_sphere(mesh.radius))?;
    let red = renderer.config().trajectory_color(0);
    assert!(image.pixels().any(|p| *p == red));
    Ok(())
}

#[test]
fn tiny_trajectory_is_widened_to_the_sphere() -> Result<(), Box<dyn std::error::Error>> {
    let table = "time,x,y,z\n0,10,0,0\n1,0,10,0\n";
    let samples = TrajectoryReader::from_reader(table.as_bytes())?;
    let bounds = SceneBoundsCalculator::compute([&samples.primary])?;
    assert_relative_eq!(bounds.extent, 10.0);
    assert_relative_eq!(bounds.enclose_sphere(WGS84_A).extent, WGS84_A);
    Ok(())
}
