pub mod angle;
pub mod clock;
pub mod driver;
pub mod error;
pub mod registry;

// Re-export key types for convenient access
pub use angle::{advance, wrap_tau, TAU};
pub use clock::{Clock, FrameTimer, SystemClock};
pub use driver::FrameDriver;
pub use error::ConfigError;
pub use registry::{
    BodyDef, BodyId, BodyRegistry, BodyState, GlowLayer, RenderStrategy, RingDef, ShellDef,
    TrailStyle, TILT_EPSILON,
};
