pub mod constants;
pub mod pick;
pub mod population;
pub mod progress;
pub mod sampler;
pub mod scene;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use constants::*;
pub use pick::*;
pub use population::*;
pub use progress::*;
pub use sampler::*;
pub use scene::*;
