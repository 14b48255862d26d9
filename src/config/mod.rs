pub mod body;
pub mod render;
