pub mod config;
pub mod constants;
pub mod errors;
pub mod geometry;
pub mod input;
pub mod models;
pub mod render;

pub use errors::{Result, SceneErrors};
