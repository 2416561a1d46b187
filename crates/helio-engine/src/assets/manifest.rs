use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How the loader should treat a texture's alpha channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AlphaMode {
    #[default]
    Opaque,
    /// Use the image's own alpha channel.
    Alpha,
    /// Derive alpha from pixel luminance — bright pixels opaque, dark
    /// transparent. Used for cloud maps stored as plain RGB.
    AlphaFromLuminance,
}

/// Describes one texture the loader should provide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureDesc {
    /// Path relative to the asset root.
    pub path: String,
    #[serde(default)]
    pub alpha: AlphaMode,
}

/// Texture manifest: logical name → file description.
/// Loaded from JSON at startup; the engine never parses image formats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureManifest {
    pub textures: HashMap<String, TextureDesc>,
}

impl TextureManifest {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn get(&self, name: &str) -> Option<&TextureDesc> {
        self.textures.get(name)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}
