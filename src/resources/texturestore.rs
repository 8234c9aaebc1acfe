use raylib::prelude::Texture2D;
use rustc_hash::FxHashMap;

/// Loaded textures keyed by string IDs.
///
/// `Texture2D` is bound to the GL context and must stay on the main thread,
/// so the store is owned by the main loop and handed to the render pass by
/// reference rather than living inside the ECS world.
pub struct TextureStore {
    map: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, texture: Texture2D) {
        self.map.insert(key.into(), texture);
    }

    pub fn get(&self, key: &str) -> Option<&Texture2D> {
        self.map.get(key)
    }
}

impl Default for TextureStore {
    fn default() -> Self {
        Self::new()
    }
}
