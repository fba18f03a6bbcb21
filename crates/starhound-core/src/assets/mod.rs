pub mod manifest;
pub mod registry;

pub use manifest::{SpriteEntry, SpriteManifest};
pub use registry::SpriteRegistry;

/// Error type for asset loading.
#[derive(Debug)]
pub enum AssetError {
    /// The manifest JSON did not parse.
    Parse(serde_json::Error),
    /// Game init asked for a sprite the manifest does not provide.
    MissingSprite(String),
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetError::Parse(e) => write!(f, "manifest parse error: {}", e),
            AssetError::MissingSprite(name) => write!(f, "sprite not in manifest: {}", name),
        }
    }
}

impl std::error::Error for AssetError {}
