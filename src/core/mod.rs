pub mod camera;
pub mod constants;
pub mod effects;
pub mod geometry;
pub mod interact;
pub mod scene;
pub mod schedule;
pub mod timeline;
pub mod trail;

pub use camera::*;
pub use effects::*;
pub use scene::*;

// Shaders bundled as string constants
pub static HEARTS_WGSL: &str = include_str!("../../shaders/hearts.wgsl");
