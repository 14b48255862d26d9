pub mod projection;
pub mod scene_renderer;

pub use projection::OrthographicView;
pub use scene_renderer::SceneRenderer;
