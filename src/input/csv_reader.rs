use crate::errors::{Result, SceneErrors};
use crate::models::trajectory::{Trajectory, TrajectorySet};
use csv::{ReaderBuilder, StringRecord, Trim};
use nalgebra as na;
use serde::Deserialize;
use std::fs::File;
use std::io;
use std::path::Path;

const REQUIRED_COLUMNS: [&str; 4] = ["time", "x", "y", "z"];
const SECONDARY_COLUMNS: [&str; 3] = ["ix", "iy", "iz"];

pub const PRIMARY_LABEL: &str = "trajectory";
pub const SECONDARY_LABEL: &str = "inertial trajectory";

/// One row of the sample table. Columns are bound by header name.
#[derive(Debug, Deserialize)]
struct SampleRecord {
    time: f64,
    x: f64,
    y: f64,
    z: f64,
    #[serde(default)]
    velocity: Option<f64>,
    #[serde(default)]
    ix: Option<f64>,
    #[serde(default)]
    iy: Option<f64>,
    #[serde(default)]
    iz: Option<f64>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
    #[serde(default)]
    alt: Option<f64>,
}

/// Which optional columns the header declares.
struct Layout {
    velocity: bool,
    secondary: bool,
    lat: bool,
    lon: bool,
    alt: bool,
}

impl Layout {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let has = |name: &str| headers.iter().any(|h| h == name);

        let missing: Vec<&str> = REQUIRED_COLUMNS.iter().copied().filter(|c| !has(*c)).collect();
        if !missing.is_empty() {
            return Err(SceneErrors::InputFormatError(format!(
                "missing required column(s): {}",
                missing.join(", ")
            )));
        }

        let secondary_present: Vec<&str> =
            SECONDARY_COLUMNS.iter().copied().filter(|c| has(*c)).collect();
        if !secondary_present.is_empty() && secondary_present.len() != SECONDARY_COLUMNS.len() {
            return Err(SceneErrors::InputFormatError(format!(
                "second trajectory needs all of ix, iy, iz but only found: {}",
                secondary_present.join(", ")
            )));
        }

        Ok(Layout {
            velocity: has("velocity"),
            secondary: !secondary_present.is_empty(),
            lat: has("lat"),
            lon: has("lon"),
            alt: has("alt"),
        })
    }
}

fn finite(value: f64, column: &str, line: u64) -> Result<f64> {
    if !value.is_finite() {
        return Err(SceneErrors::InputFormatError(format!(
            "line {}: value {} in column '{}' is not finite",
            line, value, column
        )));
    }
    Ok(value)
}

fn require(value: Option<f64>, column: &str, line: u64) -> Result<f64> {
    let value = value.ok_or_else(|| {
        SceneErrors::InputFormatError(format!("line {}: empty value in column '{}'", line, column))
    })?;
    finite(value, column, line)
}

fn finite_point(x: f64, y: f64, z: f64, line: u64) -> Result<na::Vector3<f64>> {
    if !(x.is_finite() && y.is_finite() && z.is_finite()) {
        return Err(SceneErrors::InputFormatError(format!(
            "line {}: position ({}, {}, {}) is not finite",
            line, x, y, z
        )));
    }
    Ok(na::Vector3::new(x, y, z))
}

pub struct TrajectoryReader;

impl TrajectoryReader {
    /// Loads the sample table at `path`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<TrajectorySet> {
        let path = path.as_ref();
        log::info!("Reading trajectory samples from {:?}", path);
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Loads a sample table from any byte source, e.g. standard input.
    pub fn from_reader<R: io::Read>(source: R) -> Result<TrajectorySet> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(source);

        let headers = rdr.headers()?.clone();
        let layout = Layout::from_headers(&headers)?;

        let mut times = Vec::new();
        let mut primary = Vec::new();
        let mut velocities = Vec::new();
        let mut secondary = Vec::new();
        let mut latitudes = Vec::new();
        let mut longitudes = Vec::new();
        let mut altitudes = Vec::new();

        for result in rdr.records() {
            let record = result?;
            let line = record.position().map_or(0, |p| p.line());
            let sample: SampleRecord = record.deserialize(Some(&headers))?;

            times.push(finite(sample.time, "time", line)?);
            primary.push(finite_point(sample.x, sample.y, sample.z, line)?);

            if layout.velocity {
                velocities.push(require(sample.velocity, "velocity", line)?);
            }
            if layout.secondary {
                secondary.push(finite_point(
                    require(sample.ix, "ix", line)?,
                    require(sample.iy, "iy", line)?,
                    require(sample.iz, "iz", line)?,
                    line,
                )?);
            }
            if layout.lat {
                latitudes.push(require(sample.lat, "lat", line)?);
            }
            if layout.lon {
                longitudes.push(require(sample.lon, "lon", line)?);
            }
            if layout.alt {
                altitudes.push(require(sample.alt, "alt", line)?);
            }
        }

        if times.is_empty() {
            return Err(SceneErrors::InputFormatError(
                "table has a header but no samples".to_string(),
            ));
        }

        let mut primary = Trajectory::new(PRIMARY_LABEL, primary);
        if layout.velocity {
            primary = primary.with_scalars(velocities)?;
        }

        let set = TrajectorySet {
            times,
            primary,
            secondary: layout
                .secondary
                .then(|| Trajectory::new(SECONDARY_LABEL, secondary)),
            latitudes: layout.lat.then_some(latitudes),
            longitudes: layout.lon.then_some(longitudes),
            altitudes: layout.alt.then_some(altitudes),
        };

        log::info!(
            "Loaded {} samples spanning {}{}",
            set.len(),
            set.time_span(),
            if set.secondary.is_some() { " (with second trajectory)" } else { "" }
        );
        Ok(set)
    }
}
