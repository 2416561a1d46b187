pub mod camera;
pub mod command;
pub mod traits;

// Re-export key types for convenient access
pub use camera::{CameraConfig, OrbitCamera, PITCH_EPSILON};
pub use command::{
    DrawCommand, DrawList, MeshRef, RenderPass, StarInstance, TextureHandle, TrailCommand,
    TransformUniform,
};
pub use traits::Renderer;
