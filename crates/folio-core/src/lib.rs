pub mod clock;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod nav;
pub mod pointer;
pub mod rain;
pub mod scene;
pub mod text;
pub mod widgets;

pub use config::*;
pub use error::FxError;
pub use scene::*;

// Shader bundled as a string constant
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
