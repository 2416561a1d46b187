pub mod compose;
pub mod starfield;
pub mod trail;

// Re-export key types for convenient access
pub use compose::{body_transform, compose_body, orbital_frame, plane_matrix};
pub use starfield::{BackdropDef, SizeClass, Star, Starfield, StarfieldConfig};
pub use trail::{orbit_trail, DEFAULT_TRAIL_SEGMENTS};
