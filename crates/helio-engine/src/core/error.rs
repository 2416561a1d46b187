use thiserror::Error;

/// Configuration defects detected at construction time.
///
/// These indicate a broken registry or config record, not a runtime
/// condition — construction fails fast instead of silently clamping.
/// Per-frame paths are pure and infallible.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("duplicate body name `{0}`")]
    DuplicateName(String),
    #[error("body `{name}`: orbit radius {value} is negative")]
    NegativeOrbitRadius { name: String, value: f32 },
    #[error("body `{name}`: sphere radius {value} must be positive")]
    NonPositiveRadius { name: String, value: f32 },
    #[error("body `{name}`: parameter `{param}` is not finite")]
    NonFinite { name: String, param: &'static str },
    #[error("body `{name}`: axial tilt is set but the tilt axis has zero length")]
    ZeroTiltAxis { name: String },
    #[error("body `{body}`: unknown parent `{parent}`")]
    UnknownParent { body: String, parent: String },
    #[error("body `{body}`: parent `{parent}` is itself a satellite")]
    NestedSatellite { body: String, parent: String },
    #[error("body `{name}`: shell radius scale {value} must exceed 1")]
    ShellNotLarger { name: String, value: f32 },
    #[error("body `{name}`: ring radii ({inner}, {outer}) must satisfy 0 < inner < outer")]
    InvalidRing {
        name: String,
        inner: f32,
        outer: f32,
    },
    #[error("starfield: star count must be positive")]
    EmptyStarfield,
    #[error("{what}: value {value} must be positive")]
    NonPositive { what: &'static str, value: f32 },
    #[error("{what}: range [{min}, {max}] is not strictly ordered")]
    InvalidRange {
        what: &'static str,
        min: f32,
        max: f32,
    },
    #[error("camera: parameter `{param}` = {value} is invalid")]
    InvalidCamera { param: &'static str, value: f32 },
    #[error("texture `{0}` is not present in the manifest")]
    MissingTexture(String),
}
