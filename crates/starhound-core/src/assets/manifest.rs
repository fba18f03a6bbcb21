use serde::{Deserialize, Serialize};

use crate::assets::AssetError;

/// Asset manifest describing all named sprites for a game.
/// Loaded from a JSON file at runtime.
///
/// Sprite order is significant: index in `sprites` becomes the atlas column
/// the renderer sees, so the manifest fixes the numbering on both sides of
/// the bridge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteManifest {
    /// Ordered list of sprites. Index = sprite id.
    pub sprites: Vec<SpriteEntry>,
}

/// Describes a single sprite image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteEntry {
    /// Lookup name used by game code (e.g., "ship").
    pub name: String,
    /// Relative path to the PNG file (e.g., "ship.png").
    pub path: String,
}

impl SpriteManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, AssetError> {
        serde_json::from_str(json).map_err(AssetError::Parse)
    }
}
