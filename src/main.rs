use clap::{Parser, ValueEnum};
use kosmoplot::config::body::{CustomBody, Earth, SmallBody};
use kosmoplot::config::render::RenderConfig;
use kosmoplot::constants::*;
use kosmoplot::geometry::{SceneBoundsCalculator, SphereMeshBuilder};
use kosmoplot::input::TrajectoryReader;
use kosmoplot::models::BodyProperties;
use kosmoplot::render::SceneRenderer;
use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::process;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BodyPreset {
    Earth,
    SmallBody,
}

#[derive(Parser, Debug)]
#[command(version, about = "Render orbital trajectory samples around a body sphere", long_about = None)]
struct Args {
    /// Sample table to read; standard input when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,
    #[arg(short, long, default_value = "output/trajectory.png")]
    output: PathBuf,
    #[arg(long, value_enum, default_value_t = BodyPreset::Earth)]
    body: BodyPreset,
    /// Overrides the preset's radius (meters)
    #[arg(long, allow_negative_numbers = true)]
    radius: Option<f64>,
    #[arg(long)]
    longitude_steps: Option<usize>,
    #[arg(long)]
    latitude_steps: Option<usize>,
    #[arg(long)]
    row_stride: Option<usize>,
    #[arg(long)]
    col_stride: Option<usize>,
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u32,
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: u32,
    #[arg(long, default_value_t = DEFAULT_AZIMUTH_DEG, allow_negative_numbers = true)]
    azimuth: f64,
    #[arg(long, default_value_t = DEFAULT_ELEVATION_DEG, allow_negative_numbers = true)]
    elevation: f64,
    /// Only draw the x,y,z trajectory even if ix,iy,iz are present
    #[arg(long)]
    no_secondary: bool,
}

fn body_from_args(args: &Args) -> Box<dyn BodyProperties> {
    match (args.body, args.radius) {
        (BodyPreset::Earth, None) => Box::new(Earth),
        (BodyPreset::SmallBody, None) => Box::new(SmallBody),
        (BodyPreset::Earth, Some(radius)) => Box::new(CustomBody::from_preset(&Earth, radius)),
        (BodyPreset::SmallBody, Some(radius)) => {
            Box::new(CustomBody::from_preset(&SmallBody, radius))
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let body = body_from_args(&args);

    let samples = match &args.input {
        Some(path) => TrajectoryReader::from_path(path)?,
        None => TrajectoryReader::from_reader(io::stdin().lock())?,
    };
    if let Some((lo, hi)) = samples.primary.scalar_range() {
        log::info!("Velocity ranges from {} to {}", lo, hi);
    }

    let mesh = SphereMeshBuilder::build(
        body.radius(),
        args.longitude_steps.unwrap_or(body.mesh_steps()),
        args.latitude_steps.unwrap_or(body.mesh_steps()),
    )?;

    let trajectories = samples.trajectories(!args.no_secondary);
    let bounds = SceneBoundsCalculator::compute(trajectories.iter().copied())?;
    log::info!("Trajectory extent {:.0} m around {}", bounds.extent, body.name());
    let bounds = bounds.enclose_sphere(mesh.radius);
    debug_assert!(trajectories
        .iter()
        .all(|t| t.points.iter().all(|p| bounds.contains(p))));

    let config = RenderConfig {
        width: args.width,
        height: args.height,
        azimuth_deg: args.azimuth,
        elevation_deg: args.elevation,
        row_stride: args.row_stride.unwrap_or(body.mesh_stride()),
        col_stride: args.col_stride.unwrap_or(body.mesh_stride()),
        ..RenderConfig::default()
    };
    SceneRenderer::new(config).render_to_file(&mesh, &trajectories, &bounds, &args.output)?;

    println!("Trajectory plot has been written to {}", args.output.display());
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        log::error!("{}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kosmoplot::SceneErrors;

    #[test]
    fn negative_radius_reaches_mesh_validation() {
        let input = std::env::temp_dir().join("kosmoplot-cli-negative-radius.csv");
        std::fs::write(&input, "time,x,y,z\n0,7000000,0,0\n60,0,7000000,0\n").unwrap();

        let args = Args::try_parse_from([
            "kosmoplot",
            "--input",
            input.to_str().unwrap(),
            "--radius",
            "-1",
        ])
        .unwrap();
        assert_eq!(args.radius, Some(-1.0));

        let err = run(args).unwrap_err();
        let err = err.downcast_ref::<SceneErrors>().unwrap();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn small_body_preset_parses() {
        let args = Args::try_parse_from(["kosmoplot", "--body", "small-body", "--azimuth", "-45"]).unwrap();
        assert!(matches!(args.body, BodyPreset::SmallBody));
        assert_eq!(args.azimuth, -45.0);
        assert!(args.input.is_none());
    }
}
