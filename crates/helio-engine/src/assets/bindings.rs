use std::collections::HashMap;

use super::manifest::{TextureDesc, TextureManifest};
use crate::core::error::ConfigError;
use crate::core::registry::BodyRegistry;
use crate::renderer::command::TextureHandle;
use crate::scene::starfield::StarfieldConfig;

/// External resource loader: logical texture name → opaque handle.
/// Implementations own image decoding and upload, and surface their own
/// failures; the engine only keeps the handles.
pub trait TextureSource {
    fn load(&mut self, name: &str, desc: &TextureDesc) -> TextureHandle;
}

/// Resolved name → handle table, built once at startup.
///
/// Every texture referenced by a body or the starfield backdrop must be
/// present in the manifest; a missing entry is a startup error, not a
/// per-frame condition.
#[derive(Debug)]
pub struct TextureBindings {
    map: HashMap<String, TextureHandle>,
}

impl TextureBindings {
    pub fn resolve(
        registry: &BodyRegistry,
        starfield: &StarfieldConfig,
        manifest: &TextureManifest,
        source: &mut dyn TextureSource,
    ) -> Result<Self, ConfigError> {
        let mut names = registry.texture_refs();
        if let Some(backdrop) = &starfield.backdrop {
            names.push(&backdrop.texture);
        }

        let mut map = HashMap::with_capacity(names.len());
        for name in names {
            if map.contains_key(name) {
                continue;
            }
            let desc = manifest
                .get(name)
                .ok_or_else(|| ConfigError::MissingTexture(name.to_string()))?;
            map.insert(name.to_string(), source.load(name, desc));
        }
        log::info!("resolved {} texture bindings", map.len());
        Ok(Self { map })
    }

    /// Handle for a logical name. `resolve` guarantees presence for every
    /// name the registry references; anything else gets the null handle.
    pub fn get(&self, name: &str) -> TextureHandle {
        self.map.get(name).copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::BodyDef;

    struct SequentialSource {
        next: u32,
        loaded: Vec<String>,
    }

    impl TextureSource for SequentialSource {
        fn load(&mut self, name: &str, _desc: &TextureDesc) -> TextureHandle {
            self.next += 1;
            self.loaded.push(name.to_string());
            TextureHandle(self.next)
        }
    }

    fn manifest() -> TextureManifest {
        TextureManifest::from_json(
            r#"{ "textures": { "sun": { "path": "img/sun.jpg" }, "moon": { "path": "img/moon.jpg" } } }"#,
        )
        .unwrap()
    }

    #[test]
    fn resolves_each_texture_once() {
        let registry = BodyRegistry::new(vec![
            BodyDef::new("sun", "sun", 14.0),
            BodyDef::new("moon", "moon", 0.9),
            BodyDef::new("moon2", "moon", 0.9),
        ])
        .unwrap();
        let mut source = SequentialSource {
            next: 0,
            loaded: Vec::new(),
        };
        let bindings = TextureBindings::resolve(
            &registry,
            &StarfieldConfig::default(),
            &manifest(),
            &mut source,
        )
        .unwrap();
        assert_eq!(bindings.len(), 2);
        assert_eq!(source.loaded.len(), 2);
        assert_ne!(bindings.get("sun"), bindings.get("moon"));
    }

    #[test]
    fn missing_manifest_entry_is_an_error() {
        let registry = BodyRegistry::new(vec![BodyDef::new("venus", "venus", 3.0)]).unwrap();
        let mut source = SequentialSource {
            next: 0,
            loaded: Vec::new(),
        };
        let err = TextureBindings::resolve(
            &registry,
            &StarfieldConfig::default(),
            &manifest(),
            &mut source,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::MissingTexture(name) if name == "venus"));
    }

    #[test]
    fn unknown_name_falls_back_to_null_handle() {
        let registry = BodyRegistry::new(vec![BodyDef::new("sun", "sun", 14.0)]).unwrap();
        let mut source = SequentialSource {
            next: 0,
            loaded: Vec::new(),
        };
        let bindings = TextureBindings::resolve(
            &registry,
            &StarfieldConfig::default(),
            &manifest(),
            &mut source,
        )
        .unwrap();
        assert_eq!(bindings.get("nonexistent"), TextureHandle(0));
    }
}
