//! Headless real-time orbital simulation engine.
//!
//! The engine advances a hierarchy of orbiting bodies, a twinkling
//! starfield, and an orbit camera, and emits a typed [`DrawList`] of
//! draw commands each frame. It never touches a graphics API: a host
//! supplies textures through [`TextureSource`] and consumes frames
//! through [`Renderer`], so the same simulation runs under any backend
//! (or none, in tests).

pub mod assets;
pub mod core;
pub mod input;
pub mod renderer;
pub mod scene;

// Re-export key types at crate root for convenience
pub use assets::bindings::{TextureBindings, TextureSource};
pub use assets::manifest::{AlphaMode, TextureDesc, TextureManifest};
pub use core::angle::{advance, wrap_tau, TAU};
pub use core::clock::{Clock, FrameTimer, SystemClock};
pub use core::driver::FrameDriver;
pub use core::error::ConfigError;
pub use core::registry::{
    BodyDef, BodyId, BodyRegistry, BodyState, GlowLayer, RenderStrategy, RingDef, ShellDef,
    TrailStyle, TILT_EPSILON,
};
pub use input::state::{Control, InputEvent, InputState};
pub use renderer::camera::{CameraConfig, OrbitCamera, PITCH_EPSILON};
pub use renderer::command::{
    DrawCommand, DrawList, MeshRef, RenderPass, StarInstance, TextureHandle, TrailCommand,
    TransformUniform,
};
pub use renderer::traits::Renderer;
pub use scene::compose::{body_transform, compose_body, orbital_frame, plane_matrix};
pub use scene::starfield::{BackdropDef, SizeClass, Star, Starfield, StarfieldConfig};
pub use scene::trail::{orbit_trail, DEFAULT_TRAIL_SEGMENTS};
