//! UI image atlas
//!
//! All UI art lives in one texture. The atlas description is a JSON file that
//! names the texture (relative to the JSON file) and lists named regions:
//!
//! ```json
//! {
//!   "texture": "ui_images.png",
//!   "sprites": {
//!     "button": { "x": 0, "y": 0, "width": 256, "height": 96 }
//!   }
//! }
//! ```
//!
//! Looking up a name that isn't listed is a loud [`UiError::SpriteNotFound`];
//! screens resolve every sprite they need at construction time.

use super::error::UiError;
use sdl2::rect::Rect;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// A rectangle inside the atlas texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteRegion {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl SpriteRegion {
    #[allow(dead_code)] // Regions normally come from the atlas JSON; used to stub atlases
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        SpriteRegion { x, y, width, height }
    }

    /// Source rectangle for `Canvas::copy`
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// A resolved sprite: the region plus the name it was looked up by
///
/// Cheap to clone; several elements can share the same sprite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteRef {
    name: String,
    region: SpriteRegion,
}

impl SpriteRef {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn region(&self) -> SpriteRegion {
        self.region
    }
}

/// On-disk atlas description
#[derive(Debug, Clone, Serialize, Deserialize)]
struct AtlasFile {
    texture: PathBuf,
    sprites: HashMap<String, SpriteRegion>,
}

/// Named sprite lookup over a single texture
#[derive(Debug, Clone)]
pub struct SpriteAtlas {
    texture_path: PathBuf,
    sprites: HashMap<String, SpriteRegion>,
}

impl SpriteAtlas {
    /// Creates an empty atlas for the given texture
    pub fn new(texture_path: impl Into<PathBuf>) -> Self {
        SpriteAtlas {
            texture_path: texture_path.into(),
            sprites: HashMap::new(),
        }
    }

    /// Adds (or replaces) a named region
    pub fn with_sprite(mut self, name: &str, region: SpriteRegion) -> Self {
        self.sprites.insert(name.to_string(), region);
        self
    }

    /// Loads an atlas description; the texture path is resolved against the
    /// description's directory
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, UiError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        Self::from_json(&json, base_dir)
    }

    /// Parses an atlas description from a JSON string
    pub fn from_json(json: &str, base_dir: &Path) -> Result<Self, UiError> {
        let file: AtlasFile = serde_json::from_str(json)?;
        let atlas = file
            .sprites
            .iter()
            .fold(SpriteAtlas::new(base_dir.join(&file.texture)), |atlas, (name, region)| {
                atlas.with_sprite(name, *region)
            });
        tracing::debug!(
            "Loaded UI atlas {} with {} sprites",
            atlas.texture_path.display(),
            atlas.sprites.len()
        );
        Ok(atlas)
    }

    /// Looks up a sprite by name
    pub fn sprite(&self, name: &str) -> Result<SpriteRef, UiError> {
        self.sprites
            .get(name)
            .map(|region| SpriteRef {
                name: name.to_string(),
                region: *region,
            })
            .ok_or_else(|| UiError::SpriteNotFound(name.to_string()))
    }

    pub fn texture_path(&self) -> &Path {
        &self.texture_path
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    #[allow(dead_code)] // Pairs with len()
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}
