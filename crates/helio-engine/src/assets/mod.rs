pub mod bindings;
pub mod manifest;

pub use bindings::{TextureBindings, TextureSource};
pub use manifest::{AlphaMode, TextureDesc, TextureManifest};
