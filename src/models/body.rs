pub trait BodyProperties {
    fn name(&self) -> &str;
    fn radius(&self) -> f64;
    fn mesh_steps(&self) -> usize;
    fn mesh_stride(&self) -> usize;
}
